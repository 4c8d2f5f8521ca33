//! Message and content kind types for the core model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// What an inbound update carries. Photos and stickers keep the platform file id so they can be
/// re-sent without downloading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    Text,
    /// Largest photo size; `Message::content` holds the caption (possibly empty).
    Photo { file_id: String },
    Sticker { file_id: String },
    /// Inline-button press; `Message::content` holds the callback payload.
    Callback { query_id: String },
    /// Anything the relay cannot reproduce (voice, documents, locations, ...).
    Other,
}

impl ContentKind {
    /// Short name used in logs and in the forward log's `content_kind` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Photo { .. } => "photo",
            ContentKind::Sticker { .. } => "sticker",
            ContentKind::Callback { .. } => "callback",
            ContentKind::Other => "other",
        }
    }
}

/// A single inbound update with user, chat and content.
///
/// For callbacks, `id` and `chat` refer to the message the pressed keyboard is attached to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub kind: ContentKind,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn message_type(&self) -> &'static str {
        self.kind.as_str()
    }

    /// Text of a plain text message; None for every other kind.
    pub fn text(&self) -> Option<&str> {
        match self.kind {
            ContentKind::Text => Some(self.content.as_str()),
            _ => None,
        }
    }

    /// True for text messages starting with `/`.
    pub fn is_command(&self) -> bool {
        self.text().is_some_and(|t| t.starts_with('/'))
    }

    /// Callback payload when this message is an inline-button press.
    pub fn callback_data(&self) -> Option<&str> {
        match self.kind {
            ContentKind::Callback { .. } => Some(self.content.as_str()),
            _ => None,
        }
    }

    /// Caption for photos; None when absent or empty.
    pub fn caption(&self) -> Option<&str> {
        match self.kind {
            ContentKind::Photo { .. } if !self.content.is_empty() => Some(self.content.as_str()),
            _ => None,
        }
    }
}
