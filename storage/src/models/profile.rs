//! Per-user profile row and partial update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row from the `profiles` table, or the defaults for a user without a row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Profile {
    pub user_id: i64,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub is_premium: bool,
    /// None until the first write.
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Profile returned for users that never set anything.
    pub fn default_for(user_id: i64) -> Self {
        Self {
            user_id,
            age: None,
            gender: None,
            is_premium: false,
            updated_at: None,
        }
    }
}

/// Fields to change; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub is_premium: Option<bool>,
}

impl ProfileUpdate {
    pub fn age(age: i64) -> Self {
        Self {
            age: Some(age),
            ..Self::default()
        }
    }

    pub fn gender(gender: impl Into<String>) -> Self {
        Self {
            gender: Some(gender.into()),
            ..Self::default()
        }
    }

    pub fn premium(is_premium: bool) -> Self {
        Self {
            is_premium: Some(is_premium),
            ..Self::default()
        }
    }
}
