use std::env;

pub const DEFAULT_AWS_REGION: &str = "us-east-1";
pub const DEFAULT_MODEL_ID: &str = "amazon.titan-text-lite-v1";
pub const DEFAULT_TELEGRAM_API_BASE: &str = "https://api.telegram.org";
pub const DEFAULT_MATCH_THRESHOLD: u8 = 70;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bot_token: String,
    pub default_chat_id: String,
    pub directory_table_name: String,
    pub bot_id: String,
    pub chat_match_threshold: u8,
    pub bedrock_model_id: String,
    pub telegram_api_base: String,
    pub translate_region: String,
    pub comprehend_region: Option<String>,
    pub bedrock_region: String,
    pub dynamodb_region: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let chat_match_threshold = match env::var("CHAT_MATCH_THRESHOLD") {
            Ok(raw) => parse_threshold(&raw)?,
            Err(_) => DEFAULT_MATCH_THRESHOLD,
        };

        Ok(Self {
            bot_token: env::var("BOT_TOKEN").map_err(|e| format!("BOT_TOKEN: {}", e))?,
            default_chat_id: env::var("GROUP_CHAT_ID")
                .map_err(|e| format!("GROUP_CHAT_ID: {}", e))?,
            directory_table_name: env::var("DYNAMODB_TABLE_NAME")
                .map_err(|e| format!("DYNAMODB_TABLE_NAME: {}", e))?,
            bot_id: env::var("BOT_ID").map_err(|e| format!("BOT_ID: {}", e))?,
            chat_match_threshold,
            bedrock_model_id: env::var("BEDROCK_MODEL_ID")
                .unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string()),
            telegram_api_base: env::var("TELEGRAM_API_BASE")
                .unwrap_or_else(|_| DEFAULT_TELEGRAM_API_BASE.to_string()),
            translate_region: region_or_default("TRANSLATE_REGION"),
            comprehend_region: env::var("COMPREHEND_REGION").ok(),
            bedrock_region: region_or_default("BEDROCK_REGION"),
            dynamodb_region: region_or_default("DYNAMODB_REGION"),
        })
    }
}

fn region_or_default(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| DEFAULT_AWS_REGION.to_string())
}

/// Parses a fuzzy-match acceptance score in the `0..=100` range.
pub fn parse_threshold(raw: &str) -> Result<u8, String> {
    match raw.trim().parse::<u8>() {
        Ok(value) if value <= 100 => Ok(value),
        Ok(value) => Err(format!("CHAT_MATCH_THRESHOLD: {} is above 100", value)),
        Err(e) => Err(format!("CHAT_MATCH_THRESHOLD: {}", e)),
    }
}
