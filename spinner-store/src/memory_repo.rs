use async_trait::async_trait;
use chrono::Utc;
use spinner_core::repository::{
    NewSavedDestination, SavedDestination, SavedDestinationRepository, SpinHistoryEntry, SpinHistoryRepository,
};
use spinner_core::{CoreError, CoreResult};
use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-local saved destinations, used when no database is configured.
#[derive(Default)]
pub struct InMemorySavedDestinationRepository {
    entries: RwLock<Vec<SavedDestination>>,
}

impl InMemorySavedDestinationRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SavedDestinationRepository for InMemorySavedDestinationRepository {
    async fn save(&self, new: NewSavedDestination) -> CoreResult<SavedDestination> {
        let mut entries = self.entries.write().await;

        if entries
            .iter()
            .any(|e| e.user_id == new.user_id && e.destination_id == new.destination_id)
        {
            return Err(CoreError::Conflict("Destination already saved".to_string()));
        }

        let saved = new.into_saved(Utc::now());
        entries.push(saved.clone());
        Ok(saved)
    }

    async fn list(&self, user_id: &str) -> CoreResult<Vec<SavedDestination>> {
        let entries = self.entries.read().await;
        let mut mine: Vec<SavedDestination> = entries.iter().filter(|e| e.user_id == user_id).cloned().collect();
        // Insertion order breaks ties between identical timestamps.
        mine.reverse();
        mine.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(mine)
    }

    async fn delete(&self, user_id: &str, id: Uuid) -> CoreResult<bool> {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|e| !(e.id == id && e.user_id == user_id));
        Ok(entries.len() < before)
    }
}

#[derive(Default)]
pub struct InMemorySpinHistoryRepository {
    entries: RwLock<Vec<SpinHistoryEntry>>,
}

impl InMemorySpinHistoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SpinHistoryRepository for InMemorySpinHistoryRepository {
    async fn record(&self, entry: SpinHistoryEntry) -> CoreResult<()> {
        self.entries.write().await.push(entry);
        Ok(())
    }

    async fn list(&self, user_id: &str, limit: u32) -> CoreResult<Vec<SpinHistoryEntry>> {
        let entries = self.entries.read().await;
        let mut mine: Vec<SpinHistoryEntry> = entries.iter().filter(|e| e.user_id == user_id).cloned().collect();
        mine.reverse();
        mine.sort_by(|a, b| b.spun_at.cmp(&a.spun_at));
        mine.truncate(limit as usize);
        Ok(mine)
    }
}
