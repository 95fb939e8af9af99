//! Bedrock runtime client for Titan text models
//!
//! Builds the Titan `InvokeModel` body and extracts the first generated
//! candidate from the response.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::primitives::Blob;
use serde::{Deserialize, Serialize};
#[cfg(feature = "debug-logs")]
use tracing::info;

use super::TextModel;
use crate::core::models::JSON_CONTENT_TYPE;
use crate::errors::ActionError;

const MAX_TOKEN_COUNT: u32 = 1000;
const TEMPERATURE: f32 = 1.0;
const TOP_P: f32 = 1.0;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TitanRequest<'a> {
    pub input_text: &'a str,
    pub text_generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub max_token_count: u32,
    pub stop_sequences: Vec<String>,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_token_count: MAX_TOKEN_COUNT,
            stop_sequences: Vec::new(),
            temperature: TEMPERATURE,
            top_p: TOP_P,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TitanResponse {
    #[serde(default)]
    results: Vec<TitanResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TitanResult {
    output_text: String,
}

/// Serializes the request body for a Titan text model.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn build_request_body(prompt: &str, config: &GenerationConfig) -> Result<Vec<u8>, ActionError> {
    let request = TitanRequest {
        input_text: prompt,
        text_generation_config: config.clone(),
    };
    Ok(serde_json::to_vec(&request)?)
}

/// Extracts the first generated text from a Titan response body.
///
/// # Errors
///
/// Returns an error if the body is not a Titan response or carries no results.
pub fn parse_response_body(body: &[u8]) -> Result<String, ActionError> {
    let response: TitanResponse = serde_json::from_slice(body)?;
    response
        .results
        .into_iter()
        .next()
        .map(|result| result.output_text)
        .ok_or_else(|| ActionError::ModelError("model returned no results".to_string()))
}

pub struct BedrockClient {
    client: Client,
    model_id: String,
    generation: GenerationConfig,
}

impl BedrockClient {
    #[must_use]
    pub fn new(shared: &SdkConfig, model_id: String) -> Self {
        Self {
            client: Client::new(shared),
            model_id,
            generation: GenerationConfig::default(),
        }
    }
}

#[async_trait]
impl TextModel for BedrockClient {
    async fn generate(&self, prompt: &str) -> Result<String, ActionError> {
        #[cfg(feature = "debug-logs")]
        info!("Using model prompt:\n{}", prompt);

        let body = build_request_body(prompt, &self.generation)?;

        let response = self
            .client
            .invoke_model()
            .model_id(&self.model_id)
            .accept(JSON_CONTENT_TYPE)
            .content_type(JSON_CONTENT_TYPE)
            .body(Blob::new(body))
            .send()
            .await
            .map_err(|e| ActionError::ModelError(format!("invoke_model: {e}")))?;

        parse_response_body(response.body().as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn request_body_matches_titan_schema() {
        let body = build_request_body("Summarize: hi", &GenerationConfig::default()).unwrap();
        let value: Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(
            value,
            json!({
                "inputText": "Summarize: hi",
                "textGenerationConfig": {
                    "maxTokenCount": 1000,
                    "stopSequences": [],
                    "temperature": 1.0,
                    "topP": 1.0
                }
            })
        );
    }

    #[test]
    fn first_result_is_returned() {
        let body = json!({
            "inputTextTokenCount": 4,
            "results": [
                { "tokenCount": 3, "outputText": "first", "completionReason": "FINISH" },
                { "tokenCount": 3, "outputText": "second", "completionReason": "FINISH" }
            ]
        })
        .to_string();

        assert_eq!(parse_response_body(body.as_bytes()).unwrap(), "first");
    }

    #[test]
    fn empty_results_is_a_model_error() {
        let err = parse_response_body(br#"{"results": []}"#).unwrap_err();
        assert!(matches!(err, ActionError::ModelError(_)));
    }
}
