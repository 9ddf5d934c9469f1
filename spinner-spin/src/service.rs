use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use spinner_catalog::CatalogFilter;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::models::{SpinOutcome, SpinPick, SpinRequest, SpinSession, SpinTarget};
use crate::selector::select;
use crate::session::SessionStore;
use crate::SpinError;

struct SpinState {
    sessions: SessionStore,
    rng: StdRng,
}

/// Runs spins against the static catalog and keeps the per-session
/// exclusion lists. Sessions and the RNG share one lock so a spin is atomic.
pub struct SpinService {
    state: Mutex<SpinState>,
}

impl SpinService {
    pub fn new(ttl: Duration) -> Self {
        Self::with_rng(ttl, StdRng::from_entropy())
    }

    /// Deterministic picks for tests and replays.
    pub fn with_seed(ttl: Duration, seed: u64) -> Self {
        Self::with_rng(ttl, StdRng::seed_from_u64(seed))
    }

    fn with_rng(ttl: Duration, rng: StdRng) -> Self {
        Self {
            state: Mutex::new(SpinState {
                sessions: SessionStore::new(ttl),
                rng,
            }),
        }
    }

    pub async fn create_session(&self, preferences: CatalogFilter) -> SpinSession {
        let mut state = self.state.lock().await;
        let session = state.sessions.create(preferences, Utc::now());
        tracing::debug!("Created spin session {}", session.id);
        session
    }

    pub async fn session(&self, id: Uuid) -> Result<SpinSession, SpinError> {
        let state = self.state.lock().await;
        state
            .sessions
            .get(&id, Utc::now())
            .cloned()
            .ok_or(SpinError::SessionNotFound(id))
    }

    pub async fn reset_session(&self, id: Uuid) -> Result<SpinSession, SpinError> {
        let mut state = self.state.lock().await;
        state.sessions.reset(&id, Utc::now()).cloned()
    }

    pub async fn end_session(&self, id: Uuid) -> bool {
        self.state.lock().await.sessions.remove(&id)
    }

    pub async fn cleanup_expired(&self) -> usize {
        self.state.lock().await.sessions.cleanup_expired(Utc::now())
    }

    pub async fn active_sessions(&self) -> usize {
        self.state.lock().await.sessions.active_count(Utc::now())
    }

    pub async fn spin(&self, request: SpinRequest) -> Result<SpinOutcome, SpinError> {
        self.spin_at(request, Utc::now()).await
    }

    /// Spin as of `now`. An unknown or expired session id starts a new session.
    /// A failed spin leaves the session store untouched.
    pub async fn spin_at(&self, request: SpinRequest, now: DateTime<Utc>) -> Result<SpinOutcome, SpinError> {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        let ttl = state.sessions.ttl();

        let live = request.session_id.and_then(|id| state.sessions.get(&id, now));
        let seen: &[String] = live.map(|s| s.seen(request.target)).unwrap_or(&[]);
        let live_id = live.map(|s| s.id);

        let (pick, was_reset, candidate_keys) = match request.target {
            SpinTarget::Country => {
                let candidates = request.filter.filter_countries();
                let selection = select(&candidates, seen, &mut state.rng)?;
                let keys: Vec<&'static str> = candidates.iter().map(|c| c.code).collect();
                (SpinPick::Country(selection.item), selection.was_reset, keys)
            }
            SpinTarget::Destination => {
                let candidates = request.filter.filter_destinations();
                let selection = select(&candidates, seen, &mut state.rng)?;
                let keys: Vec<&'static str> = candidates.iter().map(|d| d.id).collect();
                (SpinPick::Destination(selection.item), selection.was_reset, keys)
            }
        };

        let session_id = match live_id {
            Some(id) => id,
            None => {
                let session = state.sessions.create(request.filter, now);
                if let Some(stale) = request.session_id {
                    tracing::debug!("Session {} unknown or expired, started {}", stale, session.id);
                }
                session.id
            }
        };

        let session = state
            .sessions
            .get_mut(&session_id, now)
            .ok_or(SpinError::SessionNotFound(session_id))?;
        session.preferences = request.filter;

        let seen = session.seen_mut(request.target);
        if was_reset {
            seen.clear();
        }
        seen.push(pick.key().to_string());
        let seen_count = seen.len();
        let remaining = candidate_keys
            .iter()
            .filter(|key| !seen.iter().any(|s| s == *key))
            .count();

        session.spin_count += 1;
        session.touch(now, ttl);

        if was_reset {
            tracing::info!("Session {} exhausted its {:?} candidates, starting fresh", session.id, request.target);
        }
        tracing::debug!("Session {} landed on {}", session.id, pick.key());

        Ok(SpinOutcome {
            session_id: session.id,
            pick,
            was_reset,
            seen_count,
            remaining,
            total_candidates: candidate_keys.len(),
            expires_at: session.expires_at,
        })
    }
}
