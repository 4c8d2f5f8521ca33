//! Report log row. Reports are append-only and never edited.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct ReportRecord {
    pub id: i64,
    pub reporter_id: i64,
    pub reported_id: i64,
    /// Free text; empty when the reporter gave no reason.
    pub reason: String,
    pub created_at: DateTime<Utc>,
}
