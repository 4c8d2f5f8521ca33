//! Shared helpers for integration tests.

#![allow(dead_code)]

pub mod mock_bot;

use std::sync::Arc;

use anon_chat_bot::ChatComponents;
use chrono::Utc;
use dbot_core::{Chat, ContentKind, Message, User};
use storage::Database;
use tempfile::TempDir;

pub use mock_bot::{MockBot, Sent};

pub const PAYMENT_URL: &str = "https://pay.example.org/premium";

/// Returns a unique SQLite file path and keeps the temp dir alive for the test.
pub fn fresh_db_path() -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bot.db").to_string_lossy().to_string();
    (dir, path)
}

/// Chat components on a fresh database, talking to a recording MockBot.
pub async fn setup() -> (TempDir, Arc<MockBot>, ChatComponents) {
    let (dir, path) = fresh_db_path();
    let database = Database::connect(&path).await.unwrap();
    let bot = Arc::new(MockBot::new());
    let components = ChatComponents::new(bot.clone(), database, PAYMENT_URL);
    (dir, bot, components)
}

fn user(id: i64) -> User {
    User {
        id,
        username: None,
        first_name: Some(format!("user{}", id)),
        last_name: None,
    }
}

fn message(user_id: i64, chat: Chat, content: &str, kind: ContentKind) -> Message {
    Message {
        id: "100".to_string(),
        user: user(user_id),
        chat,
        content: content.to_string(),
        kind,
        created_at: Utc::now(),
    }
}

/// Text (or command) sent in the user's private chat.
pub fn text(user_id: i64, content: &str) -> Message {
    message(user_id, Chat::private(user_id), content, ContentKind::Text)
}

pub fn group_text(user_id: i64, content: &str) -> Message {
    let chat = Chat {
        id: -1001,
        chat_type: "group".to_string(),
    };
    message(user_id, chat, content, ContentKind::Text)
}

pub fn photo(user_id: i64, file_id: &str, caption: &str) -> Message {
    let kind = ContentKind::Photo {
        file_id: file_id.to_string(),
    };
    message(user_id, Chat::private(user_id), caption, kind)
}

pub fn sticker(user_id: i64, file_id: &str) -> Message {
    let kind = ContentKind::Sticker {
        file_id: file_id.to_string(),
    };
    message(user_id, Chat::private(user_id), "", kind)
}

pub fn other(user_id: i64) -> Message {
    message(user_id, Chat::private(user_id), "", ContentKind::Other)
}

/// Button press on the menu message with id `menu_id` in the user's private chat.
pub fn button(user_id: i64, data: &str, menu_id: &str) -> Message {
    let mut m = message(
        user_id,
        Chat::private(user_id),
        data,
        ContentKind::Callback {
            query_id: "q1".to_string(),
        },
    );
    m.id = menu_id.to_string();
    m
}
