use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

use super::ChatDirectory;
use crate::core::models::ChatEntry;
use crate::errors::ActionError;

const KEY_ATTRIBUTE: &str = "agent_id";
const CHATS_ATTRIBUTE: &str = "chats";
const CHAT_NAME_ATTRIBUTE: &str = "chat_name";
const CHAT_ID_ATTRIBUTE: &str = "chat_id";

/// Chat directory stored in a DynamoDB table keyed by agent id.
pub struct DynamoChatDirectory {
    client: Client,
    table_name: String,
}

impl DynamoChatDirectory {
    #[must_use]
    pub fn new(shared: &SdkConfig, table_name: String) -> Self {
        Self {
            client: Client::new(shared),
            table_name,
        }
    }
}

#[async_trait]
impl ChatDirectory for DynamoChatDirectory {
    async fn chats(&self, agent_id: &str) -> Result<Vec<ChatEntry>, ActionError> {
        let response = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(KEY_ATTRIBUTE, AttributeValue::S(agent_id.to_string()))
            .send()
            .await
            .map_err(|e| ActionError::AwsError(format!("dynamodb get_item: {e}")))?;

        let item = response.item().ok_or_else(|| {
            ActionError::AwsError(format!("no directory entry for agent '{agent_id}'"))
        })?;

        Ok(chats_from_item(item))
    }
}

/// Reads `chats: L[M{chat_name: S, chat_id: S}]` from a directory item.
///
/// Entries without a name keep an empty name, entries without an id keep an
/// empty id, and a missing `chats` attribute yields no entries.
#[must_use]
pub fn chats_from_item(item: &HashMap<String, AttributeValue>) -> Vec<ChatEntry> {
    let Some(chats) = item.get(CHATS_ATTRIBUTE).and_then(|v| v.as_l().ok()) else {
        return Vec::new();
    };

    chats
        .iter()
        .map(|chat| {
            let details = chat.as_m().ok();
            let field = |name: &str| {
                details
                    .and_then(|m| m.get(name))
                    .and_then(|v| v.as_s().ok())
                    .cloned()
                    .unwrap_or_default()
            };
            ChatEntry {
                chat_name: field(CHAT_NAME_ATTRIBUTE),
                chat_id: field(CHAT_ID_ATTRIBUTE),
            }
        })
        .collect()
}
