use tracing::info;

use super::chat_lookup::resolve_chat_id;
use crate::clients::{ChatDirectory, MessageSource};
use crate::errors::ActionError;
use crate::utils::filters::{filter_chat_messages, format_messages};

/// Directory settings used to resolve a chat name.
#[derive(Debug, Clone)]
pub struct LookupSettings {
    pub bot_id: String,
    pub default_chat_id: String,
    pub match_threshold: u8,
}

/// Pulls the retained messages of the chat best matching `chat_name`.
///
/// An empty string means no message in the snapshot belonged to that chat.
///
/// # Errors
///
/// Returns an error if the message source fails. Directory failures fall back
/// to the default chat id instead.
pub async fn pull_messages(
    directory: &dyn ChatDirectory,
    source: &dyn MessageSource,
    settings: &LookupSettings,
    chat_name: &str,
) -> Result<String, ActionError> {
    let chat_id = resolve_chat_id(
        directory,
        &settings.bot_id,
        chat_name,
        &settings.default_chat_id,
        settings.match_threshold,
    )
    .await;

    let updates = source.fetch_updates().await?;
    let messages = filter_chat_messages(&updates, &chat_id);
    info!(
        chat_id = %chat_id,
        updates = updates.len(),
        matched = messages.len(),
        "Pulled chat messages"
    );

    Ok(format_messages(&messages))
}
