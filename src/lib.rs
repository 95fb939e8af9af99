/// Chatpilot - an agent action group that pulls, translates and summarizes Telegram chats.
///
/// This crate implements a single Lambda that receives action-group invocations
/// from a conversational agent, routes them by API path, and answers with the
/// agent's response envelope:
/// 1. `/pull-messages` resolves a chat name through the chat directory and
///    returns the chat's retained Telegram messages
/// 2. `/detect-language` and `/translate` call Comprehend and Translate
/// 3. `/summarize` and `/query-chat` prompt a Bedrock text model
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - DynamoDB as the chat directory (agent id to known chat names and ids)
/// - reqwest for the Telegram Bot API
/// - the AWS SDK for Translate, Comprehend and Bedrock
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use chatpilot::api::Dispatcher;
/// use chatpilot::core::config::AppConfig;
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     chatpilot::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let dispatcher = Dispatcher::from_config(&config).await;
///
///     let response = dispatcher
///         .handle_event(&json!({
///             "actionGroup": "chat-tools",
///             "apiPath": "/pull-messages",
///             "httpMethod": "GET",
///             "parameters": [{ "name": "chatName", "value": "Family" }]
///         }))
///         .await?;
///     println!("{}", response.body());
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod api;
pub mod clients;
pub mod core;
pub mod errors;
pub mod features;
pub mod prompt;
pub mod utils;

pub use errors::ActionError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration, filtered by `RUST_LOG` (default `info`).
/// It should be called once at the start of the Lambda binary.
///
/// # Example
///
/// ```
/// chatpilot::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
