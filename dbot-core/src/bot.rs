//! Bot abstraction for sending, editing and deleting messages.
//!
//! [`Bot`] is transport-agnostic; dbot-telegram implements it via teloxide and tests substitute a
//! recording mock. Message ids are transport strings (Telegram: numeric); use [`parse_message_id`]
//! when a numeric id is needed.

use crate::error::{DbotError, Result};
use crate::types::{Chat, InlineKeyboard, Message};
use async_trait::async_trait;

/// Outbound side of the messaging platform.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a text message and returns the platform-assigned message id.
    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String>;
    /// Re-sends a photo by platform file id (with optional caption); returns the new message id.
    async fn send_photo(&self, chat: &Chat, file_id: &str, caption: Option<&str>)
        -> Result<String>;
    /// Re-sends a sticker by platform file id; returns the new message id.
    async fn send_sticker(&self, chat: &Chat, file_id: &str) -> Result<String>;
    /// Sends a text message with an inline keyboard attached.
    async fn send_keyboard(&self, chat: &Chat, text: &str, keyboard: &InlineKeyboard)
        -> Result<()>;
    /// Sends a reply to the given message (same chat).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Replaces the text of an already-sent message.
    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()>;
    /// Deletes a message previously sent by the bot.
    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()>;
}

/// Parses a message id string into an i32 (Telegram message ids fit in i32).
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| DbotError::Bot(format!("Invalid message_id: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message_id_valid() {
        assert_eq!(parse_message_id("123").unwrap(), 123);
        assert_eq!(parse_message_id("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_message_id_invalid() {
        assert!(parse_message_id("").is_err());
        assert!(parse_message_id("abc").is_err());
        assert!(parse_message_id("12.3").is_err());
    }
}
