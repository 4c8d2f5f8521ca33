//! Profile repository: lazily-created per-user profile rows.

use crate::error::StorageError;
use crate::models::{Profile, ProfileUpdate};
use crate::sqlite_pool::SqlitePoolManager;
use chrono::Utc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct ProfileRepository {
    pool_manager: SqlitePoolManager,
}

impl ProfileRepository {
    /// Creates the repository on a shared pool and ensures the `profiles` table exists.
    pub async fn new(pool_manager: SqlitePoolManager) -> Result<Self, StorageError> {
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS profiles (
                user_id INTEGER PRIMARY KEY,
                age INTEGER,
                gender TEXT,
                is_premium INTEGER NOT NULL DEFAULT 0,
                updated_at TEXT
            )
            "#,
        )
        .execute(self.pool_manager.pool())
        .await?;
        Ok(())
    }

    /// Upserts only the provided fields and stamps `updated_at`.
    ///
    /// A user without a row gets one; unset fields take the defaults (no age, no gender, not premium).
    /// Runs as a single statement so concurrent writers only wait on SQLite's write lock.
    pub async fn set_profile(&self, user_id: i64, update: &ProfileUpdate) -> Result<(), StorageError> {
        let now = Utc::now();
        sqlx::query(
            r#"
            INSERT INTO profiles (user_id, age, gender, is_premium, updated_at)
            VALUES (?, ?, ?, COALESCE(?, 0), ?)
            ON CONFLICT(user_id) DO UPDATE SET
                age = COALESCE(excluded.age, profiles.age),
                gender = COALESCE(excluded.gender, profiles.gender),
                is_premium = COALESCE(?, profiles.is_premium),
                updated_at = excluded.updated_at
            "#,
        )
        .bind(user_id)
        .bind(update.age)
        .bind(&update.gender)
        .bind(update.is_premium)
        .bind(now)
        .bind(update.is_premium)
        .execute(self.pool_manager.pool())
        .await?;

        info!(user_id = user_id, update = ?update, "Profile updated");
        Ok(())
    }

    /// Returns the stored profile, or [`Profile::default_for`] when the user has no row.
    pub async fn get_profile(&self, user_id: i64) -> Result<Profile, StorageError> {
        let profile = sqlx::query_as::<_, Profile>(
            "SELECT user_id, age, gender, is_premium, updated_at FROM profiles WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(self.pool_manager.pool())
        .await?;

        debug!(user_id = user_id, found = profile.is_some(), "Profile lookup");
        Ok(profile.unwrap_or_else(|| Profile::default_for(user_id)))
    }

    pub async fn is_premium(&self, user_id: i64) -> Result<bool, StorageError> {
        Ok(self.get_profile(user_id).await?.is_premium)
    }
}
