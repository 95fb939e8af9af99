use crate::clients::{LanguageDetector, Translator};
use crate::errors::ActionError;
use crate::prompt::NO_MESSAGES_SENTINEL;

/// Dominant language code of `messages`, or the sentinel when there is no text.
///
/// # Errors
///
/// Returns an error if the detection service fails.
pub async fn detect_language(
    detector: &dyn LanguageDetector,
    messages: &str,
) -> Result<String, ActionError> {
    if messages.is_empty() {
        return Ok(NO_MESSAGES_SENTINEL.to_string());
    }
    detector.detect(messages).await
}

/// English translation of `messages`, or the sentinel when there is no text.
///
/// # Errors
///
/// Returns an error if the translation service fails.
pub async fn translate_messages(
    translator: &dyn Translator,
    messages: &str,
    source_language: &str,
) -> Result<String, ActionError> {
    if messages.is_empty() {
        return Ok(NO_MESSAGES_SENTINEL.to_string());
    }
    translator.translate(messages, source_language).await
}
