//! Telegram Bot API client
//!
//! Only `getUpdates` is used: a single snapshot of whatever the Bot API still
//! retains (about 24 hours), without offsets or long polling.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};

use super::MessageSource;
use crate::errors::ActionError;

#[derive(Debug, Deserialize)]
struct GetUpdatesResponse {
    ok: bool,
    #[serde(default)]
    result: Vec<TelegramUpdate>,
    #[serde(default)]
    description: Option<String>,
}

/// A `getUpdates` result item.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramUpdate {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<TelegramMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramMessage {
    pub chat: TelegramChat,
    #[serde(default)]
    pub from: Option<TelegramUser>,
    #[serde(default)]
    pub text: Option<String>,
    /// Present on messages whose only payload is a link preview.
    #[serde(default)]
    pub link_preview_options: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramChat {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramUser {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
}

pub struct TelegramClient {
    http: Client,
    api_base: String,
    token: String,
}

impl TelegramClient {
    #[must_use]
    pub fn new(http: Client, api_base: String, token: String) -> Self {
        Self {
            http,
            api_base,
            token,
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.api_base.trim_end_matches('/'),
            self.token,
            method
        )
    }
}

/// Turns a `getUpdates` reply into updates.
///
/// # Errors
///
/// Returns an error if a successful reply is not valid JSON or carries
/// `ok: false`. A non-success status is logged and yields no updates.
pub fn updates_from_response(
    status: StatusCode,
    body: &[u8],
) -> Result<Vec<TelegramUpdate>, ActionError> {
    if !status.is_success() {
        error!("Error fetching updates: {}", status.as_u16());
        return Ok(Vec::new());
    }

    let payload: GetUpdatesResponse = serde_json::from_slice(body)?;
    if !payload.ok {
        return Err(ActionError::TelegramError(
            payload
                .description
                .unwrap_or_else(|| "getUpdates returned ok: false".to_string()),
        ));
    }

    debug!(count = payload.result.len(), "Fetched Telegram updates");
    Ok(payload.result)
}

#[async_trait]
impl MessageSource for TelegramClient {
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent or the reply is rejected
    /// by [`updates_from_response`].
    async fn fetch_updates(&self) -> Result<Vec<TelegramUpdate>, ActionError> {
        let response = self.http.get(self.method_url("getUpdates")).send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        updates_from_response(status, &body)
    }
}
