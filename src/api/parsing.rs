use serde_json::Value;

use crate::core::models::{Invocation, JSON_CONTENT_TYPE, Parameter};
use crate::errors::ActionError;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Decodes a raw event into an [`Invocation`], naming the first missing routing field.
///
/// # Errors
///
/// Returns `InvalidInvocation` if `actionGroup`, `apiPath` or `httpMethod` is
/// absent or not a string, or if the rest of the event does not decode.
pub fn parse_invocation(payload: &Value) -> Result<Invocation, ActionError> {
    for field in ["actionGroup", "apiPath", "httpMethod"] {
        if v_str(payload, &[field]).is_none() {
            return Err(ActionError::InvalidInvocation(format!(
                "missing required field '{field}'"
            )));
        }
    }

    serde_json::from_value(payload.clone())
        .map_err(|e| ActionError::InvalidInvocation(e.to_string()))
}

/// Parameters of an invocation.
///
/// Uses the top-level `parameters` list when it is non-empty, otherwise the
/// `requestBody.content["application/json"].properties` list. An invocation
/// carrying neither yields an empty list.
#[must_use]
pub fn invocation_parameters(invocation: &Invocation) -> &[Parameter] {
    match invocation.parameters.as_deref() {
        Some(params) if !params.is_empty() => params,
        _ => invocation
            .request_body
            .as_ref()
            .and_then(|body| body.content.get(JSON_CONTENT_TYPE))
            .map(|media| media.properties.as_slice())
            .unwrap_or_default(),
    }
}

/// First parameter named exactly `name`, if any.
#[must_use]
pub fn find_param<'a>(params: &'a [Parameter], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|param| param.name == name)
        .map(|param| param.value.as_str())
}

/// Like [`find_param`] but treats absence as a failure.
///
/// # Errors
///
/// Returns `MissingParameter` when no parameter has that name.
pub fn required_param<'a>(params: &'a [Parameter], name: &str) -> Result<&'a str, ActionError> {
    find_param(params, name).ok_or_else(|| ActionError::MissingParameter(name.to_string()))
}
