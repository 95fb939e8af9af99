use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Invalid invocation: {0}")]
    InvalidInvocation(String),

    #[error("Required parameter '{0}' is missing")]
    MissingParameter(String),

    #[error("Failed to access Telegram API: {0}")]
    TelegramError(String),

    #[error("Failed to interact with AWS services: {0}")]
    AwsError(String),

    #[error("Failed to invoke model: {0}")]
    ModelError(String),

    #[error("Failed to parse payload: {0}")]
    ParseError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<reqwest::Error> for ActionError {
    fn from(error: reqwest::Error) -> Self {
        ActionError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for ActionError {
    fn from(error: serde_json::Error) -> Self {
        ActionError::ParseError(error.to_string())
    }
}

impl From<anyhow::Error> for ActionError {
    fn from(error: anyhow::Error) -> Self {
        ActionError::AwsError(error.to_string())
    }
}
