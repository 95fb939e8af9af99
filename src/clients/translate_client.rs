use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_translate::Client;

use super::Translator;
use crate::errors::ActionError;

pub const TARGET_LANGUAGE: &str = "en";

/// Amazon Translate into English.
pub struct TranslateClient {
    client: Client,
}

impl TranslateClient {
    #[must_use]
    pub fn new(shared: &SdkConfig) -> Self {
        Self {
            client: Client::new(shared),
        }
    }
}

#[async_trait]
impl Translator for TranslateClient {
    async fn translate(&self, text: &str, source_language: &str) -> Result<String, ActionError> {
        let response = self
            .client
            .translate_text()
            .text(text)
            .source_language_code(source_language)
            .target_language_code(TARGET_LANGUAGE)
            .send()
            .await
            .map_err(|e| ActionError::AwsError(format!("translate_text: {e}")))?;

        Ok(response.translated_text().to_string())
    }
}
