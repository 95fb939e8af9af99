//! Routes one invocation to its action and wraps the result in the response envelope.

use serde_json::Value;
use tracing::info;

use super::helpers::{invalid_api_response, ok_response};
use super::parsing::{invocation_parameters, parse_invocation, required_param};
use super::routes::ApiPath;
use crate::clients::{
    BedrockClient, ChatDirectory, ComprehendClient, DynamoChatDirectory, LanguageDetector,
    MessageSource, TelegramClient, TextModel, TranslateClient, Translator, load_sdk_config,
};
use crate::core::config::AppConfig;
use crate::core::models::{ActionResponse, Invocation, Parameter};
use crate::errors::ActionError;
use crate::features::pull_messages::LookupSettings;
use crate::features::{language, pull_messages, summarize};

/// External services used by the actions.
pub struct Collaborators {
    pub messages: Box<dyn MessageSource>,
    pub directory: Box<dyn ChatDirectory>,
    pub translator: Box<dyn Translator>,
    pub detector: Box<dyn LanguageDetector>,
    pub model: Box<dyn TextModel>,
}

impl Collaborators {
    /// Builds the Telegram and AWS clients, each pinned to its configured region.
    pub async fn from_config(config: &AppConfig) -> Self {
        let translate = load_sdk_config(Some(config.translate_region.as_str())).await;
        let comprehend = load_sdk_config(config.comprehend_region.as_deref()).await;
        let bedrock = load_sdk_config(Some(config.bedrock_region.as_str())).await;
        let dynamodb = load_sdk_config(Some(config.dynamodb_region.as_str())).await;

        Self {
            messages: Box::new(TelegramClient::new(
                reqwest::Client::new(),
                config.telegram_api_base.clone(),
                config.bot_token.clone(),
            )),
            directory: Box::new(DynamoChatDirectory::new(
                &dynamodb,
                config.directory_table_name.clone(),
            )),
            translator: Box::new(TranslateClient::new(&translate)),
            detector: Box::new(ComprehendClient::new(&comprehend)),
            model: Box::new(BedrockClient::new(&bedrock, config.bedrock_model_id.clone())),
        }
    }
}

pub struct Dispatcher {
    collaborators: Collaborators,
    lookup: LookupSettings,
}

impl Dispatcher {
    #[must_use]
    pub fn new(collaborators: Collaborators, lookup: LookupSettings) -> Self {
        Self {
            collaborators,
            lookup,
        }
    }

    pub async fn from_config(config: &AppConfig) -> Self {
        let lookup = LookupSettings {
            bot_id: config.bot_id.clone(),
            default_chat_id: config.default_chat_id.clone(),
            match_threshold: config.chat_match_threshold,
        };
        Self::new(Collaborators::from_config(config).await, lookup)
    }

    /// Handles a raw agent event, logging it on entry and the response body on exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the event lacks a routing field, a required
    /// parameter is missing, or an external service fails. Unknown paths are
    /// answered with a 400 envelope instead.
    pub async fn handle_event(&self, payload: &Value) -> Result<ActionResponse, ActionError> {
        info!(event = %payload, "Received event");

        let invocation = parse_invocation(payload)?;
        let response = self.dispatch(&invocation).await?;

        info!(
            status = response.status(),
            body = %serde_json::to_string(&response.response.response_body)?,
            "Response body"
        );
        Ok(response)
    }

    /// # Errors
    ///
    /// See [`Dispatcher::handle_event`].
    pub async fn dispatch(&self, invocation: &Invocation) -> Result<ActionResponse, ActionError> {
        let Some(api) = ApiPath::from_path(&invocation.api_path) else {
            info!(
                action_group = %invocation.action_group,
                api_path = %invocation.api_path,
                known = %ApiPath::all().map(ApiPath::as_str).collect::<Vec<_>>().join(","),
                "Unknown api path"
            );
            return Ok(invalid_api_response(invocation));
        };

        let params = invocation_parameters(invocation);
        info!(api = %api, parameters = params.len(), "Dispatching action");
        let body = self.run(api, params).await?;
        Ok(ok_response(invocation, body))
    }

    async fn run(&self, api: ApiPath, params: &[Parameter]) -> Result<String, ActionError> {
        let c = &self.collaborators;
        match api {
            ApiPath::PullMessages => {
                let chat_name = required_param(params, "chatName")?;
                pull_messages::pull_messages(
                    c.directory.as_ref(),
                    c.messages.as_ref(),
                    &self.lookup,
                    chat_name,
                )
                .await
            }
            ApiPath::DetectLanguage => {
                let messages = required_param(params, "messages")?;
                language::detect_language(c.detector.as_ref(), messages).await
            }
            ApiPath::Translate => {
                let messages = required_param(params, "messages")?;
                let source_language = required_param(params, "sourceLanguage")?;
                language::translate_messages(c.translator.as_ref(), messages, source_language)
                    .await
            }
            ApiPath::Summarize => {
                let messages = required_param(params, "messages")?;
                summarize::summarize_messages(c.model.as_ref(), messages).await
            }
            ApiPath::QueryChat => {
                let messages = required_param(params, "messages")?;
                let custom_prompt = required_param(params, "customPrompt")?;
                summarize::query_chat(c.model.as_ref(), messages, custom_prompt).await
            }
        }
    }
}
