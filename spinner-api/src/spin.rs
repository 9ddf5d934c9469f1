use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::Utc;
use serde::Serialize;
use spinner_catalog::CatalogFilter;
use spinner_core::identity::UserIdentity;
use spinner_core::repository::SpinHistoryEntry;
use spinner_shared::SpinRecordedEvent;
use spinner_spin::{SpinOutcome, SpinRequest, SpinSession};
use uuid::Uuid;

use crate::{error::AppError, middleware::optional_auth, state::AppState};

// ============================================================================
// Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub preferences: CatalogFilter,
    pub seen_countries: Vec<String>,
    pub seen_destinations: Vec<String>,
    pub spin_count: u32,
    pub created_at: chrono::DateTime<Utc>,
    pub expires_at: chrono::DateTime<Utc>,
}

impl From<SpinSession> for SessionResponse {
    fn from(session: SpinSession) -> Self {
        Self {
            id: session.id,
            preferences: session.preferences,
            seen_countries: session.seen_countries,
            seen_destinations: session.seen_destinations,
            spin_count: session.spin_count,
            created_at: session.created_at,
            expires_at: session.expires_at,
        }
    }
}

pub fn routes(state: AppState) -> Router<AppState> {
    let spin = Router::new()
        .route("/v1/spin", post(spin))
        .route_layer(middleware::from_fn_with_state(state, optional_auth));

    Router::new()
        .route("/v1/sessions", post(create_session))
        .route("/v1/sessions/{id}", get(get_session).delete(end_session))
        .route("/v1/sessions/{id}/reset", post(reset_session))
        .merge(spin)
}

// ============================================================================
// Handlers
// ============================================================================

async fn create_session(
    State(state): State<AppState>,
    body: Option<Json<CatalogFilter>>,
) -> (StatusCode, Json<SessionResponse>) {
    let preferences = body.map(|Json(filter)| filter).unwrap_or_default();
    let session = state.spin.create_session(preferences).await;
    (StatusCode::CREATED, Json(session.into()))
}

async fn get_session(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<SessionResponse>, AppError> {
    let session = state.spin.session(id).await?;
    Ok(Json(session.into()))
}

async fn end_session(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<StatusCode, AppError> {
    if state.spin.end_session(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFoundError(format!("Session not found: {}", id)))
    }
}

async fn reset_session(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<SessionResponse>, AppError> {
    let session = state.spin.reset_session(id).await?;
    Ok(Json(session.into()))
}

async fn spin(
    State(state): State<AppState>,
    identity: Option<Extension<UserIdentity>>,
    body: Option<Json<SpinRequest>>,
) -> Result<Json<SpinOutcome>, AppError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let outcome = state.spin.spin(request).await?;
    let user_id = identity.map(|Extension(i)| i.user_id);
    let target = outcome.pick.target().as_str();

    state.metrics.spins.with_label_values(&[target]).inc();
    if outcome.was_reset {
        state.metrics.spin_resets.inc();
    }

    let event = SpinRecordedEvent {
        session_id: outcome.session_id,
        user_id: user_id.clone(),
        target: target.to_string(),
        pick_key: outcome.pick.key().to_string(),
        pick_name: outcome.pick.name().to_string(),
        was_reset: outcome.was_reset,
        timestamp: Utc::now().timestamp(),
    };
    tracing::info!(event = SpinRecordedEvent::NAME, payload = ?event, "Spin recorded");

    // History is best effort; the spin already happened.
    if let Some(user_id) = user_id {
        let entry = SpinHistoryEntry {
            id: Uuid::new_v4(),
            user_id,
            session_id: event.session_id,
            target: event.target,
            pick_key: event.pick_key,
            pick_name: event.pick_name,
            was_reset: event.was_reset,
            spun_at: Utc::now(),
        };
        if let Err(e) = state.history_repo.record(entry).await {
            tracing::warn!("Failed to record spin history for session {}: {}", outcome.session_id, e);
        }
    }

    Ok(Json(outcome))
}
