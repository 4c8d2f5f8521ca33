//! Report repository: append-only log of user reports.

use crate::error::StorageError;
use crate::models::ReportRecord;
use crate::sqlite_pool::SqlitePoolManager;
use chrono::Utc;
use tracing::info;

#[derive(Clone)]
pub struct ReportRepository {
    pool_manager: SqlitePoolManager,
}

impl ReportRepository {
    pub async fn new(pool_manager: SqlitePoolManager) -> Result<Self, StorageError> {
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS reports (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                reporter_id INTEGER NOT NULL,
                reported_id INTEGER NOT NULL,
                reason TEXT NOT NULL DEFAULT '',
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_reports_reported_id ON reports(reported_id)")
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Appends a report and returns its id. No dedup and no validation of the pair.
    pub async fn add_report(
        &self,
        reporter_id: i64,
        reported_id: i64,
        reason: &str,
    ) -> Result<i64, StorageError> {
        let result = sqlx::query(
            "INSERT INTO reports (reporter_id, reported_id, reason, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(reporter_id)
        .bind(reported_id)
        .bind(reason)
        .bind(Utc::now())
        .execute(self.pool_manager.pool())
        .await?;

        let id = result.last_insert_rowid();
        info!(
            report_id = id,
            reporter_id = reporter_id,
            reported_id = reported_id,
            "Report saved"
        );
        Ok(id)
    }

    /// Most recent reports first.
    pub async fn recent_reports(&self, limit: i64) -> Result<Vec<ReportRecord>, StorageError> {
        let reports = sqlx::query_as::<_, ReportRecord>(
            "SELECT id, reporter_id, reported_id, reason, created_at FROM reports ORDER BY id DESC LIMIT ?",
        )
        .bind(limit)
        .fetch_all(self.pool_manager.pool())
        .await?;
        Ok(reports)
    }

    /// Number of reports filed against `reported_id`.
    pub async fn count_against(&self, reported_id: i64) -> Result<i64, StorageError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reports WHERE reported_id = ?")
            .bind(reported_id)
            .fetch_one(self.pool_manager.pool())
            .await?;
        Ok(count)
    }
}
