//! Lambda entrypoint for agent action-group invocations.

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::error;

use super::dispatcher::Dispatcher;
use crate::core::models::ActionResponse;

/// Lambda handler for the action group.
///
/// # Errors
///
/// Structural, missing-parameter and external-service failures are returned
/// to the runtime; unknown paths come back as a 400 envelope.
#[tracing::instrument(level = "info", skip(event, dispatcher), fields(request_id = %event.context.request_id))]
pub async fn function_handler(
    event: LambdaEvent<Value>,
    dispatcher: &Dispatcher,
) -> Result<ActionResponse, Error> {
    dispatcher.handle_event(&event.payload).await.map_err(|e| {
        error!("Action failed: {}", e);
        Error::from(e)
    })
}

pub use self::function_handler as handler;
