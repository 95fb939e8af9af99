#![allow(dead_code)]

use async_trait::async_trait;
use chatpilot::ActionError;
use chatpilot::api::{Collaborators, Dispatcher};
use chatpilot::clients::{
    ChatDirectory, LanguageDetector, MessageSource, TelegramUpdate, TextModel, Translator,
};
use chatpilot::core::models::ChatEntry;
use chatpilot::features::pull_messages::LookupSettings;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const BOT_ID: &str = "bot-1";
pub const DEFAULT_CHAT_ID: &str = "-999";
pub const FAMILY_CHAT_ID: &str = "-1001";
pub const FRIENDS_CHAT_ID: &str = "-1002";

/// Call counters shared between the fakes and the test body.
#[derive(Clone, Default)]
pub struct Calls {
    pub fetch: Arc<AtomicUsize>,
    pub directory: Arc<AtomicUsize>,
    pub translate: Arc<Mutex<Vec<(String, String)>>>,
    pub detect: Arc<Mutex<Vec<String>>>,
    pub generate: Arc<Mutex<Vec<String>>>,
}

impl Calls {
    pub fn external_total(&self) -> usize {
        self.fetch.load(Ordering::SeqCst)
            + self.directory.load(Ordering::SeqCst)
            + self.translate.lock().unwrap().len()
            + self.detect.lock().unwrap().len()
            + self.generate.lock().unwrap().len()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.generate.lock().unwrap().clone()
    }
}

pub struct FakeSource {
    pub updates: Vec<TelegramUpdate>,
    pub calls: Calls,
}

#[async_trait]
impl MessageSource for FakeSource {
    async fn fetch_updates(&self) -> Result<Vec<TelegramUpdate>, ActionError> {
        self.calls.fetch.fetch_add(1, Ordering::SeqCst);
        Ok(self.updates.clone())
    }
}

pub struct FakeDirectory {
    pub chats: Option<Vec<ChatEntry>>,
    pub calls: Calls,
}

#[async_trait]
impl ChatDirectory for FakeDirectory {
    async fn chats(&self, agent_id: &str) -> Result<Vec<ChatEntry>, ActionError> {
        self.calls.directory.fetch_add(1, Ordering::SeqCst);
        match &self.chats {
            Some(chats) if agent_id == BOT_ID => Ok(chats.clone()),
            _ => Err(ActionError::AwsError("store unavailable".to_string())),
        }
    }
}

pub struct FakeTranslator {
    pub calls: Calls,
}

#[async_trait]
impl Translator for FakeTranslator {
    async fn translate(&self, text: &str, source_language: &str) -> Result<String, ActionError> {
        self.calls
            .translate
            .lock()
            .unwrap()
            .push((text.to_string(), source_language.to_string()));
        Ok(format!("[{source_language}->en] {text}"))
    }
}

pub struct FakeDetector {
    pub calls: Calls,
}

#[async_trait]
impl LanguageDetector for FakeDetector {
    async fn detect(&self, text: &str) -> Result<String, ActionError> {
        self.calls.detect.lock().unwrap().push(text.to_string());
        Ok("pl".to_string())
    }
}

pub struct FakeModel {
    pub calls: Calls,
}

#[async_trait]
impl TextModel for FakeModel {
    async fn generate(&self, prompt: &str) -> Result<String, ActionError> {
        self.calls.generate.lock().unwrap().push(prompt.to_string());
        Ok(format!("generated from {} chars", prompt.chars().count()))
    }
}

pub fn directory_chats() -> Vec<ChatEntry> {
    vec![
        ChatEntry {
            chat_name: "Family".to_string(),
            chat_id: FAMILY_CHAT_ID.to_string(),
        },
        ChatEntry {
            chat_name: "Friends".to_string(),
            chat_id: FRIENDS_CHAT_ID.to_string(),
        },
    ]
}

pub fn lookup_settings(threshold: u8) -> LookupSettings {
    LookupSettings {
        bot_id: BOT_ID.to_string(),
        default_chat_id: DEFAULT_CHAT_ID.to_string(),
        match_threshold: threshold,
    }
}

/// A Telegram update posted by `username` in `chat_id`.
pub fn update(update_id: i64, chat_id: i64, username: &str, text: &str) -> TelegramUpdate {
    serde_json::from_value(json!({
        "update_id": update_id,
        "message": {
            "message_id": update_id,
            "date": 1_700_000_000 + update_id,
            "chat": { "id": chat_id, "type": "group" },
            "from": { "id": 42, "is_bot": false, "first_name": "Test", "username": username },
            "text": text
        }
    }))
    .unwrap()
}

/// An update whose message only carries a link preview.
pub fn link_preview_update(update_id: i64, chat_id: i64, username: &str, text: &str) -> TelegramUpdate {
    serde_json::from_value(json!({
        "update_id": update_id,
        "message": {
            "message_id": update_id,
            "date": 1_700_000_000 + update_id,
            "chat": { "id": chat_id, "type": "group" },
            "from": { "id": 42, "is_bot": false, "first_name": "Test", "username": username },
            "text": text,
            "link_preview_options": { "url": text }
        }
    }))
    .unwrap()
}

pub fn default_updates() -> Vec<TelegramUpdate> {
    vec![
        update(1, -1001, "mom", "Dinner at 7"),
        link_preview_update(2, -1001, "dad", "https://example.com/recipe"),
        update(3, -1002, "bob", "Match tonight?"),
    ]
}

pub fn dispatcher_with(
    updates: Vec<TelegramUpdate>,
    chats: Option<Vec<ChatEntry>>,
    threshold: u8,
) -> (Dispatcher, Calls) {
    let calls = Calls::default();
    let collaborators = Collaborators {
        messages: Box::new(FakeSource {
            updates,
            calls: calls.clone(),
        }),
        directory: Box::new(FakeDirectory {
            chats,
            calls: calls.clone(),
        }),
        translator: Box::new(FakeTranslator {
            calls: calls.clone(),
        }),
        detector: Box::new(FakeDetector {
            calls: calls.clone(),
        }),
        model: Box::new(FakeModel {
            calls: calls.clone(),
        }),
    };
    (Dispatcher::new(collaborators, lookup_settings(threshold)), calls)
}

pub fn dispatcher() -> (Dispatcher, Calls) {
    dispatcher_with(default_updates(), Some(directory_chats()), 70)
}
