//! Mock implementation of [`dbot_core::Bot`] for integration tests.
//!
//! Records every outbound call so tests can assert on what was sent where, without hitting
//! Telegram. Sends and deletes can be switched to fail.

use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use dbot_core::{Bot, Chat, DbotError, InlineKeyboard, Message, Result};

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text { chat_id: i64, text: String },
    Photo { chat_id: i64, file_id: String, caption: Option<String> },
    Sticker { chat_id: i64, file_id: String },
    Keyboard { chat_id: i64, text: String, buttons: Vec<String> },
    Edit { chat_id: i64, message_id: String, text: String },
    Delete { chat_id: i64, message_id: String },
}

pub struct MockBot {
    calls: Mutex<Vec<Sent>>,
    next_id: AtomicI32,
    fail_sends: AtomicBool,
    fail_deletes: AtomicBool,
}

impl Default for MockBot {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBot {
    /// Returned message ids start at 500 and increase by one per send.
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(500),
            fail_sends: AtomicBool::new(false),
            fail_deletes: AtomicBool::new(false),
        }
    }

    pub fn fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }

    pub fn fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    pub fn calls(&self) -> Vec<Sent> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    /// Texts sent or edited into `chat_id`, in order.
    pub fn texts_to(&self, chat_id: i64) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Sent::Text { chat_id: id, text }
                | Sent::Keyboard { chat_id: id, text, .. }
                | Sent::Edit { chat_id: id, text, .. }
                    if id == chat_id =>
                {
                    Some(text)
                }
                _ => None,
            })
            .collect()
    }

    pub fn last_text_to(&self, chat_id: i64) -> Option<String> {
        self.texts_to(chat_id).pop()
    }

    fn record(&self, call: Sent) -> Result<String> {
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(DbotError::Bot("mock send failure".to_string()));
        }
        self.calls.lock().unwrap().push(call);
        Ok(self.next_id.fetch_add(1, Ordering::SeqCst).to_string())
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.send_message_and_return_id(chat, text).await.map(|_| ())
    }

    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String> {
        self.record(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        })
    }

    async fn send_photo(&self, chat: &Chat, file_id: &str, caption: Option<&str>) -> Result<String> {
        self.record(Sent::Photo {
            chat_id: chat.id,
            file_id: file_id.to_string(),
            caption: caption.map(str::to_string),
        })
    }

    async fn send_sticker(&self, chat: &Chat, file_id: &str) -> Result<String> {
        self.record(Sent::Sticker {
            chat_id: chat.id,
            file_id: file_id.to_string(),
        })
    }

    async fn send_keyboard(&self, chat: &Chat, text: &str, keyboard: &InlineKeyboard) -> Result<()> {
        self.record(Sent::Keyboard {
            chat_id: chat.id,
            text: text.to_string(),
            buttons: keyboard
                .callback_data()
                .into_iter()
                .map(str::to_string)
                .collect(),
        })
        .map(|_| ())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()> {
        self.record(Sent::Edit {
            chat_id: chat.id,
            message_id: message_id.to_string(),
            text: text.to_string(),
        })
        .map(|_| ())
    }

    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(DbotError::Bot("message to delete not found".to_string()));
        }
        self.calls.lock().unwrap().push(Sent::Delete {
            chat_id: chat.id,
            message_id: message_id.to_string(),
        });
        Ok(())
    }
}
