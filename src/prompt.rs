/// Returned instead of calling an external service when there is no text to work on.
pub const NO_MESSAGES_SENTINEL: &str = "No messages was found. Consider using other chat.";

/// Preamble for the summarize action.
pub const SUMMARIZE_INSTRUCTIONS: &str =
    "Given messages extracted from the chat, summarize the chat and extract my action points.\n";

/// Preamble for the query-chat action, carrying the caller's question.
#[must_use]
pub fn query_instructions(custom_prompt: &str) -> String {
    format!(
        "Given messages extracted from the chat, answer the following question: {} \n",
        custom_prompt
    )
}

/// Instruction preamble followed by the raw message payload.
#[must_use]
pub fn build_prompt(instructions: &str, messages: &str) -> String {
    format!("{instructions}{messages}")
}
