//! External collaborators reachable from the handlers.
//!
//! Each integration sits behind a narrow trait so the dispatcher can be built
//! with real AWS/Telegram clients in Lambda and with fakes in tests.

pub mod bedrock_client;
pub mod comprehend_client;
pub mod directory_client;
pub mod telegram_client;
pub mod translate_client;

use async_trait::async_trait;
use aws_config::meta::region::RegionProviderChain;
use aws_config::{Region, SdkConfig};

use crate::core::models::ChatEntry;
use crate::errors::ActionError;

pub use bedrock_client::BedrockClient;
pub use comprehend_client::ComprehendClient;
pub use directory_client::DynamoChatDirectory;
pub use telegram_client::{TelegramClient, TelegramUpdate};
pub use translate_client::TranslateClient;

/// Snapshot source of recent chat updates.
#[async_trait]
pub trait MessageSource: Send + Sync {
    async fn fetch_updates(&self) -> Result<Vec<TelegramUpdate>, ActionError>;
}

/// Translates text into English.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, source_language: &str) -> Result<String, ActionError>;
}

/// Returns the dominant language code of a text.
#[async_trait]
pub trait LanguageDetector: Send + Sync {
    async fn detect(&self, text: &str) -> Result<String, ActionError>;
}

/// Single-shot text generation.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ActionError>;
}

/// Read-only lookup of the chats known to an agent.
#[async_trait]
pub trait ChatDirectory: Send + Sync {
    async fn chats(&self, agent_id: &str) -> Result<Vec<ChatEntry>, ActionError>;
}

/// Loads the shared AWS configuration pinned to `region`, or the ambient
/// region chain when none is given.
pub async fn load_sdk_config(region: Option<&str>) -> SdkConfig {
    let provider =
        RegionProviderChain::first_try(region.map(|r| Region::new(r.to_string())))
            .or_default_provider();
    aws_config::from_env().region(provider).load().await
}
