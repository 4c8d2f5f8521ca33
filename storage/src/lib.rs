//! Storage crate: SQLite persistence for the chat bot.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – Profile, ProfileUpdate, ReportRecord, ForwardRecord, NewForward
//! - [`profile_repo`] – ProfileRepository
//! - [`report_repo`] – ReportRepository
//! - [`forward_repo`] – ForwardRepository
//! - [`sqlite_pool`] – SqlitePoolManager
//! - [`database`] – Database (all repositories on one pool)

mod database;
mod error;
mod forward_repo;
mod models;
mod profile_repo;
mod report_repo;
mod sqlite_pool;

pub use database::Database;
pub use error::StorageError;
pub use forward_repo::ForwardRepository;
pub use models::{ForwardRecord, NewForward, Profile, ProfileUpdate, ReportRecord};
pub use profile_repo::ProfileRepository;
pub use report_repo::ReportRepository;
pub use sqlite_pool::SqlitePoolManager;
