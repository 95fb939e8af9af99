//! One module per action, each a single external call plus formatting.

pub mod chat_lookup;
pub mod language;
pub mod pull_messages;
pub mod summarize;
