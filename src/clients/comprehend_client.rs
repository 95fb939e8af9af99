use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_comprehend::Client;

use super::LanguageDetector;
use crate::errors::ActionError;

/// Amazon Comprehend dominant-language detection.
pub struct ComprehendClient {
    client: Client,
}

impl ComprehendClient {
    #[must_use]
    pub fn new(shared: &SdkConfig) -> Self {
        Self {
            client: Client::new(shared),
        }
    }
}

#[async_trait]
impl LanguageDetector for ComprehendClient {
    /// Returns the top-ranked language code; no confidence threshold is applied.
    async fn detect(&self, text: &str) -> Result<String, ActionError> {
        let response = self
            .client
            .detect_dominant_language()
            .text(text)
            .send()
            .await
            .map_err(|e| ActionError::AwsError(format!("detect_dominant_language: {e}")))?;

        response
            .languages()
            .first()
            .and_then(|language| language.language_code())
            .map(ToString::to_string)
            .ok_or_else(|| {
                ActionError::AwsError("detect_dominant_language returned no languages".to_string())
            })
    }
}
