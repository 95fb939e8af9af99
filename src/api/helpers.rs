//! Response envelope builders.

use crate::core::models::{ActionResponse, Invocation};

/// Returns a 200 envelope carrying the handler's output.
#[must_use]
pub fn ok_response(invocation: &Invocation, body: String) -> ActionResponse {
    ActionResponse::new(invocation, 200, body)
}

/// Returns a 400 envelope for a path outside the route table.
#[must_use]
pub fn invalid_api_response(invocation: &Invocation) -> ActionResponse {
    ActionResponse::new(invocation, 400, invalid_api_message(invocation))
}

#[must_use]
pub fn invalid_api_message(invocation: &Invocation) -> String {
    format!(
        "{}::{} is not a valid api, try another one.",
        invocation.action_group, invocation.api_path
    )
}
