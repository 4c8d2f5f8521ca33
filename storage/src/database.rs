//! All repositories on one shared pool.

use crate::error::StorageError;
use crate::forward_repo::ForwardRepository;
use crate::profile_repo::ProfileRepository;
use crate::report_repo::ReportRepository;
use crate::sqlite_pool::SqlitePoolManager;
use tracing::info;

/// Profile, report and forward repositories sharing a single [`SqlitePoolManager`].
#[derive(Clone)]
pub struct Database {
    pub profiles: ProfileRepository,
    pub reports: ReportRepository,
    pub forwards: ForwardRepository,
}

impl Database {
    /// Opens (or creates) the database and ensures every table exists.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;

        let profiles = ProfileRepository::new(pool_manager.clone()).await?;
        let reports = ReportRepository::new(pool_manager.clone()).await?;
        let forwards = ForwardRepository::new(pool_manager).await?;

        info!(database_url = %database_url, "Database tables ready");
        Ok(Self {
            profiles,
            reports,
            forwards,
        })
    }
}
