//! Forward repository: maps relayed messages to the copies the bot sent, for "undo last send".

use crate::error::StorageError;
use crate::models::{ForwardRecord, NewForward};
use crate::sqlite_pool::SqlitePoolManager;
use chrono::Utc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct ForwardRepository {
    pool_manager: SqlitePoolManager,
}

impl ForwardRepository {
    pub async fn new(pool_manager: SqlitePoolManager) -> Result<Self, StorageError> {
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS forwards (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                sender_id INTEGER NOT NULL,
                recipient_id INTEGER NOT NULL,
                original_message_id INTEGER NOT NULL,
                forwarded_message_id INTEGER NOT NULL,
                content_kind TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_forwards_sender_id ON forwards(sender_id)")
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Appends a forward record and returns its id.
    pub async fn add(&self, forward: &NewForward) -> Result<i64, StorageError> {
        let result = sqlx::query(
            r#"
            INSERT INTO forwards (sender_id, recipient_id, original_message_id, forwarded_message_id, content_kind, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(forward.sender_id)
        .bind(forward.recipient_id)
        .bind(forward.original_message_id)
        .bind(forward.forwarded_message_id)
        .bind(&forward.content_kind)
        .bind(Utc::now())
        .execute(self.pool_manager.pool())
        .await?;

        let id = result.last_insert_rowid();
        debug!(
            record_id = id,
            sender_id = forward.sender_id,
            recipient_id = forward.recipient_id,
            content_kind = %forward.content_kind,
            "Forward recorded"
        );
        Ok(id)
    }

    /// Most recent forward sent by `sender_id`, if any.
    pub async fn last_for_sender(&self, sender_id: i64) -> Result<Option<ForwardRecord>, StorageError> {
        let record = sqlx::query_as::<_, ForwardRecord>(
            r#"
            SELECT id, sender_id, recipient_id, original_message_id, forwarded_message_id, content_kind, created_at
            FROM forwards
            WHERE sender_id = ?
            ORDER BY id DESC
            LIMIT 1
            "#,
        )
        .bind(sender_id)
        .fetch_optional(self.pool_manager.pool())
        .await?;
        Ok(record)
    }

    /// Deletes a record; returns true if a row was removed.
    pub async fn delete(&self, record_id: i64) -> Result<bool, StorageError> {
        let result = sqlx::query("DELETE FROM forwards WHERE id = ?")
            .bind(record_id)
            .execute(self.pool_manager.pool())
            .await?;
        let deleted = result.rows_affected() > 0;
        info!(record_id = record_id, deleted = deleted, "Forward record removed");
        Ok(deleted)
    }

    pub async fn count_for_sender(&self, sender_id: i64) -> Result<i64, StorageError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM forwards WHERE sender_id = ?")
            .bind(sender_id)
            .fetch_one(self.pool_manager.pool())
            .await?;
        Ok(count)
    }
}
