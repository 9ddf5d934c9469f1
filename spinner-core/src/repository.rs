use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::CoreResult;

/// A destination bookmarked by a signed-in user. Names are snapshotted at
/// save time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedDestination {
    pub id: Uuid,
    pub user_id: String,
    pub destination_id: String,
    pub destination_name: String,
    pub country_code: String,
    pub country_name: String,
    pub note: Option<String>,
    pub saved_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSavedDestination {
    pub user_id: String,
    pub destination_id: String,
    pub destination_name: String,
    pub country_code: String,
    pub country_name: String,
    pub note: Option<String>,
}

impl NewSavedDestination {
    pub fn into_saved(self, saved_at: DateTime<Utc>) -> SavedDestination {
        SavedDestination {
            id: Uuid::new_v4(),
            user_id: self.user_id,
            destination_id: self.destination_id,
            destination_name: self.destination_name,
            country_code: self.country_code,
            country_name: self.country_name,
            note: self.note,
            saved_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpinHistoryEntry {
    pub id: Uuid,
    pub user_id: String,
    pub session_id: Uuid,
    /// `country` or `destination`.
    pub target: String,
    pub pick_key: String,
    pub pick_name: String,
    pub was_reset: bool,
    pub spun_at: DateTime<Utc>,
}

/// Repository trait for saved destinations
#[async_trait]
pub trait SavedDestinationRepository: Send + Sync {
    /// Fails with `CoreError::Conflict` if the user already saved this destination.
    async fn save(&self, new: NewSavedDestination) -> CoreResult<SavedDestination>;

    /// Newest first.
    async fn list(&self, user_id: &str) -> CoreResult<Vec<SavedDestination>>;

    /// Returns false when the entry does not exist or belongs to someone else.
    async fn delete(&self, user_id: &str, id: Uuid) -> CoreResult<bool>;
}

/// Repository trait for spin history
#[async_trait]
pub trait SpinHistoryRepository: Send + Sync {
    async fn record(&self, entry: SpinHistoryEntry) -> CoreResult<()>;

    /// Newest first, at most `limit` entries.
    async fn list(&self, user_id: &str, limit: u32) -> CoreResult<Vec<SpinHistoryEntry>>;
}
