use crate::clients::TextModel;
use crate::errors::ActionError;
use crate::prompt::{NO_MESSAGES_SENTINEL, SUMMARIZE_INSTRUCTIONS, build_prompt, query_instructions};

/// Runs `instructions` over `messages` on the model, guarding empty input.
///
/// # Errors
///
/// Returns an error if the model invocation fails.
pub async fn ask_model(
    model: &dyn TextModel,
    messages: &str,
    instructions: &str,
) -> Result<String, ActionError> {
    if messages.is_empty() {
        return Ok(NO_MESSAGES_SENTINEL.to_string());
    }
    model.generate(&build_prompt(instructions, messages)).await
}

/// # Errors
///
/// Returns an error if the model invocation fails.
pub async fn summarize_messages(model: &dyn TextModel, messages: &str) -> Result<String, ActionError> {
    ask_model(model, messages, SUMMARIZE_INSTRUCTIONS).await
}

/// # Errors
///
/// Returns an error if the model invocation fails.
pub async fn query_chat(
    model: &dyn TextModel,
    messages: &str,
    custom_prompt: &str,
) -> Result<String, ActionError> {
    ask_model(model, messages, &query_instructions(custom_prompt)).await
}
