//! Wraps teloxide::Bot and implements [`dbot_core::Bot`]. Production code talks to Telegram; tests
//! substitute a recording Bot.

use anyhow::Result as AnyResult;
use async_trait::async_trait;
use dbot_core::{
    parse_message_id, Bot as CoreBot, Chat, DbotError, InlineKeyboard, Message, Result,
};
use teloxide::{
    prelude::*,
    types::{ChatId, FileId, InlineKeyboardButton, InlineKeyboardMarkup, InputFile, MessageId},
};
use tracing::error;

/// Builds a teloxide Bot for `token`, pointing at `api_url` when given (e.g. a mock server in tests).
pub fn build_teloxide_bot(token: &str, api_url: Option<&str>) -> AnyResult<teloxide::Bot> {
    let bot = teloxide::Bot::new(token);
    match api_url {
        Some(url_str) => {
            let url = reqwest::Url::parse(url_str).map_err(|e| {
                error!(error = %e, url = %url_str, "Invalid Telegram API URL");
                anyhow::anyhow!("Invalid Telegram API URL {}: {}", url_str, e)
            })?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

fn to_markup(keyboard: &InlineKeyboard) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(keyboard.rows.iter().map(|row| {
        row.iter()
            .map(|b| InlineKeyboardButton::callback(b.text.clone(), b.callback_data.clone()))
            .collect::<Vec<_>>()
    }))
}

fn bot_error(e: teloxide::RequestError) -> DbotError {
    DbotError::Bot(e.to_string())
}

/// Thin wrapper around teloxide::Bot that implements dbot-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn send_message_and_return_id(&self, chat: &Chat, text: &str) -> Result<String> {
        let sent = self
            .bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(bot_error)?;
        Ok(sent.id.0.to_string())
    }

    async fn send_photo(
        &self,
        chat: &Chat,
        file_id: &str,
        caption: Option<&str>,
    ) -> Result<String> {
        let mut request = self
            .bot
            .send_photo(ChatId(chat.id), InputFile::file_id(FileId(file_id.to_string())));
        if let Some(caption) = caption {
            request = request.caption(caption.to_string());
        }
        let sent = request.await.map_err(bot_error)?;
        Ok(sent.id.0.to_string())
    }

    async fn send_sticker(&self, chat: &Chat, file_id: &str) -> Result<String> {
        let sent = self
            .bot
            .send_sticker(ChatId(chat.id), InputFile::file_id(FileId(file_id.to_string())))
            .await
            .map_err(bot_error)?;
        Ok(sent.id.0.to_string())
    }

    async fn send_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &InlineKeyboard,
    ) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(to_markup(keyboard))
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }

    async fn edit_message(&self, chat: &Chat, message_id: &str, text: &str) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .edit_message_text(ChatId(chat.id), MessageId(id), text.to_string())
            .await
            .map_err(bot_error)?;
        Ok(())
    }

    async fn delete_message(&self, chat: &Chat, message_id: &str) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .delete_message(ChatId(chat.id), MessageId(id))
            .await
            .map_err(bot_error)?;
        Ok(())
    }
}
