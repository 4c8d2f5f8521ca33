//! Forward log: which relayed message ended up where, so the sender can retract it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row from the `forwards` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ForwardRecord {
    pub id: i64,
    pub sender_id: i64,
    pub recipient_id: i64,
    /// Message id in the sender's chat.
    pub original_message_id: i64,
    /// Message id the bot got back when sending into the recipient's chat.
    pub forwarded_message_id: i64,
    /// `text`, `photo`, `sticker` or `other`.
    pub content_kind: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload; id and timestamp are assigned by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewForward {
    pub sender_id: i64,
    pub recipient_id: i64,
    pub original_message_id: i64,
    pub forwarded_message_id: i64,
    pub content_kind: String,
}
