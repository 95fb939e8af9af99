//! Action-group request dispatch

pub mod dispatcher;
pub mod handler;
pub mod helpers;
pub mod parsing;
pub mod routes;

// Re-export the main handler for convenience
pub use dispatcher::{Collaborators, Dispatcher};
pub use handler::handler;
pub use routes::ApiPath;
