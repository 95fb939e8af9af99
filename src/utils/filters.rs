use crate::clients::TelegramUpdate;
use crate::core::models::ChatMessage;

const UNKNOWN_SENDER: &str = "unknown";

/// Keeps text messages posted in `chat_id`, skipping link-preview-only messages.
///
/// Newlines in message text are flattened to spaces. Source order is preserved.
#[must_use]
pub fn filter_chat_messages(updates: &[TelegramUpdate], chat_id: &str) -> Vec<ChatMessage> {
    updates
        .iter()
        .filter_map(|update| update.message.as_ref())
        .filter(|msg| msg.link_preview_options.is_none())
        .filter(|msg| msg.chat.id.to_string() == chat_id)
        .filter_map(|msg| {
            let text = msg.text.as_deref()?;
            let sender = msg
                .from
                .as_ref()
                .and_then(|user| user.username.as_deref().or(user.first_name.as_deref()))
                .unwrap_or(UNKNOWN_SENDER);

            Some(ChatMessage {
                sender: sender.to_string(),
                text: text.replace('\n', " "),
                chat_id: chat_id.to_string(),
            })
        })
        .collect()
}

/// Renders messages as `"{sender}: {text}, "` concatenated in order.
#[must_use]
pub fn format_messages(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|msg| format!("{}: {}, ", msg.sender, msg.text))
        .collect()
}
