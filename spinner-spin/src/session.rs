use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use spinner_catalog::CatalogFilter;
use uuid::Uuid;

use crate::models::SpinSession;
use crate::SpinError;

/// Process-local spin sessions with sliding expiry.
pub struct SessionStore {
    sessions: HashMap<Uuid, SpinSession>,
    ttl: Duration,
}

impl SessionStore {
    pub const DEFAULT_TTL_SECONDS: i64 = 1800;

    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn create(&mut self, preferences: CatalogFilter, now: DateTime<Utc>) -> SpinSession {
        let session = SpinSession::new(preferences, now, self.ttl);
        self.sessions.insert(session.id, session.clone());
        session
    }

    /// Get a session if it has not expired.
    pub fn get(&self, id: &Uuid, now: DateTime<Utc>) -> Option<&SpinSession> {
        self.sessions.get(id).filter(|s| !s.is_expired(now))
    }

    pub fn get_mut(&mut self, id: &Uuid, now: DateTime<Utc>) -> Option<&mut SpinSession> {
        self.sessions.get_mut(id).filter(|s| !s.is_expired(now))
    }

    /// Clear every seen list of a live session.
    pub fn reset(&mut self, id: &Uuid, now: DateTime<Utc>) -> Result<&SpinSession, SpinError> {
        let ttl = self.ttl;
        let session = self.get_mut(id, now).ok_or(SpinError::SessionNotFound(*id))?;
        session.clear_seen();
        session.touch(now, ttl);
        Ok(session)
    }

    pub fn remove(&mut self, id: &Uuid) -> bool {
        self.sessions.remove(id).is_some()
    }

    /// Drop expired sessions, returning how many were removed.
    pub fn cleanup_expired(&mut self, now: DateTime<Utc>) -> usize {
        let initial_count = self.sessions.len();
        self.sessions.retain(|_, session| !session.is_expired(now));
        initial_count - self.sessions.len()
    }

    pub fn active_count(&self, now: DateTime<Utc>) -> usize {
        self.sessions.values().filter(|s| !s.is_expired(now)).count()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Duration::seconds(Self::DEFAULT_TTL_SECONDS))
    }
}
