use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const MESSAGE_VERSION: &str = "1.0";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// One inbound action-group invocation as delivered by the agent runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invocation {
    pub action_group: String,
    pub api_path: String,
    pub http_method: String,
    #[serde(default)]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(default)]
    pub input_text: Option<String>,
    #[serde(default)]
    pub request_body: Option<RequestBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Parameter {
    #[must_use]
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            kind: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(default)]
    pub content: HashMap<String, MediaContent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaContent {
    #[serde(default)]
    pub properties: Vec<Parameter>,
}

/// Outbound envelope returned to the agent runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub message_version: String,
    pub response: ActionResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResult {
    pub action_group: String,
    pub api_path: String,
    pub http_method: String,
    pub http_status_code: u16,
    pub response_body: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseBody {
    #[serde(rename = "application/json")]
    pub json: JsonBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonBody {
    pub body: String,
}

impl ActionResponse {
    /// Wraps a body string into the envelope, echoing the invocation's routing fields.
    #[must_use]
    pub fn new(invocation: &Invocation, http_status_code: u16, body: String) -> Self {
        Self {
            message_version: MESSAGE_VERSION.to_string(),
            response: ActionResult {
                action_group: invocation.action_group.clone(),
                api_path: invocation.api_path.clone(),
                http_method: invocation.http_method.clone(),
                http_status_code,
                response_body: ResponseBody {
                    json: JsonBody { body },
                },
            },
        }
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.response.response_body.json.body
    }

    #[must_use]
    pub fn status(&self) -> u16 {
        self.response.http_status_code
    }
}

/// A chat message pulled from the message source, already filtered to one chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatMessage {
    pub sender: String,
    pub text: String,
    pub chat_id: String,
}

/// A known chat from the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEntry {
    pub chat_name: String,
    pub chat_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_serializes_to_agent_shape() {
        let invocation: Invocation = serde_json::from_value(json!({
            "actionGroup": "chat-tools",
            "apiPath": "/summarize",
            "httpMethod": "POST"
        }))
        .unwrap();

        let response = ActionResponse::new(&invocation, 200, "done".to_string());
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({
                "messageVersion": "1.0",
                "response": {
                    "actionGroup": "chat-tools",
                    "apiPath": "/summarize",
                    "httpMethod": "POST",
                    "httpStatusCode": 200,
                    "responseBody": { "application/json": { "body": "done" } }
                }
            })
        );
    }

    #[test]
    fn invocation_reads_request_body_properties() {
        let invocation: Invocation = serde_json::from_value(json!({
            "actionGroup": "chat-tools",
            "apiPath": "/translate",
            "httpMethod": "POST",
            "inputText": "translate my chat",
            "requestBody": {
                "content": {
                    "application/json": {
                        "properties": [
                            { "name": "messages", "type": "string", "value": "cześć" }
                        ]
                    }
                }
            }
        }))
        .unwrap();

        let props = &invocation.request_body.unwrap().content[JSON_CONTENT_TYPE].properties;
        assert_eq!(props[0].name, "messages");
        assert_eq!(props[0].kind.as_deref(), Some("string"));
        assert!(invocation.parameters.is_none());
    }
}
