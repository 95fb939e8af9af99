//! Chat name resolution against the chat directory.
//!
//! The requested name is fuzzy-matched against every known chat name and the
//! best candidate is accepted when its score reaches the configured threshold.
//! Any directory failure resolves to the default chat id.

use fuzzywuzzy::fuzz;
use tracing::{info, warn};

use crate::clients::ChatDirectory;
use crate::core::models::ChatEntry;

/// Lowercases, replaces non-alphanumerics with spaces, and trims.
fn normalize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_lowercase().next().unwrap_or(c)
            } else {
                ' '
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Weighted similarity score in `0..=100`.
///
/// Combines plain, partial and token-order-insensitive ratios, so prefixes and
/// reordered words still score high. Names with nothing alphanumeric score 0.
#[must_use]
pub fn similarity(a: &str, b: &str) -> u8 {
    if normalize(a).is_empty() || normalize(b).is_empty() {
        return 0;
    }
    fuzz::wratio(a, b, true, true)
}

/// Best-scoring candidate for `query`; ties keep the earliest candidate.
#[must_use]
pub fn best_match<'a>(query: &str, candidates: &[&'a str]) -> Option<(&'a str, u8)> {
    candidates
        .iter()
        .map(|candidate| (*candidate, similarity(query, candidate)))
        .fold(None, |best, (candidate, score)| match best {
            Some((_, best_score)) if best_score >= score => best,
            _ => Some((candidate, score)),
        })
}

/// Chat id of the best match for `chat_name`, if it reaches `threshold`.
#[must_use]
pub fn select_chat_id<'a>(chats: &'a [ChatEntry], chat_name: &str, threshold: u8) -> Option<&'a str> {
    let names: Vec<&str> = chats.iter().map(|chat| chat.chat_name.as_str()).collect();
    let (closest, score) = best_match(chat_name, &names)?;

    if score < threshold {
        info!(chat_name, closest, score, "Closest chat name is below threshold");
        return None;
    }

    chats
        .iter()
        .find(|chat| chat.chat_name == closest)
        .map(|chat| chat.chat_id.as_str())
}

/// Resolves a human-readable chat name to a chat id, never failing.
pub async fn resolve_chat_id(
    directory: &dyn ChatDirectory,
    agent_id: &str,
    chat_name: &str,
    default_id: &str,
    threshold: u8,
) -> String {
    let chats = match directory.chats(agent_id).await {
        Ok(chats) => chats,
        Err(e) => {
            warn!("Chat directory lookup failed for '{}': {}", agent_id, e);
            return default_id.to_string();
        }
    };

    if chats.is_empty() {
        warn!("No chats found for the bot ID '{}'.", agent_id);
        return default_id.to_string();
    }

    match select_chat_id(&chats, chat_name, threshold) {
        Some(chat_id) => chat_id.to_string(),
        None => {
            warn!("No close match found for the chat name '{}'.", chat_name);
            default_id.to_string()
        }
    }
}
