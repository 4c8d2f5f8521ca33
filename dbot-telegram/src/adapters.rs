//! Adapters from Telegram (teloxide) types to dbot_core types.
//! Depends only on teloxide and dbot_core type definitions.

use dbot_core::{Chat, ContentKind, Message, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

fn core_chat(chat: &teloxide::types::Chat) -> Chat {
    let chat_type = if chat.is_private() {
        "private"
    } else if chat.is_group() || chat.is_supergroup() {
        "group"
    } else if chat.is_channel() {
        "channel"
    } else {
        "unknown"
    };
    Chat {
        id: chat.id.0,
        chat_type: chat_type.to_string(),
    }
}

fn unknown_user() -> User {
    User {
        id: 0,
        username: None,
        first_name: None,
        last_name: None,
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
///
/// Text wins over everything else; photos use the largest size and keep the caption in `content`.
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> TelegramMessageWrapper<'a> {
    fn content_and_kind(&self) -> (String, ContentKind) {
        let msg = self.0;
        if let Some(text) = msg.text() {
            return (text.to_string(), ContentKind::Text);
        }
        if let Some(largest) = msg.photo().and_then(|sizes| sizes.last()) {
            let caption = msg.caption().unwrap_or("").to_string();
            return (
                caption,
                ContentKind::Photo {
                    file_id: largest.file.id.0.clone(),
                },
            );
        }
        if let Some(sticker) = msg.sticker() {
            return (
                String::new(),
                ContentKind::Sticker {
                    file_id: sticker.file.id.0.clone(),
                },
            );
        }
        (msg.caption().unwrap_or("").to_string(), ContentKind::Other)
    }
}

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let (content, kind) = self.content_and_kind();
        Message {
            id: self.0.id.0.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(unknown_user),
            chat: core_chat(&self.0.chat),
            content,
            kind,
            created_at: chrono::Utc::now(),
        }
    }
}

/// Wraps a teloxide CallbackQuery (inline-button press) for conversion to core [`Message`].
///
/// `id`/`chat` point at the message carrying the keyboard; when Telegram omits it (very old
/// messages), the presser's private chat is used and the id is empty.
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreMessage for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Message {
        let query = self.0;
        let user = TelegramUserWrapper(&query.from).to_core();
        let (id, chat) = match query.message.as_ref() {
            Some(m) => (m.id().0.to_string(), core_chat(m.chat())),
            None => (String::new(), Chat::private(user.id)),
        };
        Message {
            id,
            user,
            chat,
            content: query.data.clone().unwrap_or_default(),
            kind: ContentKind::Callback {
                query_id: query.id.to_string(),
            },
            created_at: chrono::Utc::now(),
        }
    }
}
