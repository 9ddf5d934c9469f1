use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{delete, get},
    Extension, Json, Router,
};
use chrono::Utc;
use serde::Deserialize;
use spinner_catalog::{require_country, require_destination};
use spinner_core::identity::UserIdentity;
use spinner_core::repository::{NewSavedDestination, SavedDestination, SpinHistoryEntry};
use spinner_shared::DestinationSavedEvent;
use uuid::Uuid;

use crate::{error::AppError, middleware::require_auth, state::AppState};

const DEFAULT_HISTORY_LIMIT: u32 = 20;
const MAX_HISTORY_LIMIT: u32 = 100;

#[derive(Debug, Deserialize)]
pub struct SaveDestinationRequest {
    pub destination_id: String,
    pub note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub limit: Option<u32>,
}

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/v1/saved", get(list_saved).post(save_destination))
        .route("/v1/saved/{id}", delete(delete_saved))
        .route("/v1/history", get(list_history))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

async fn list_saved(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
) -> Result<Json<Vec<SavedDestination>>, AppError> {
    let saved = state.saved_repo.list(&identity.user_id).await?;
    Ok(Json(saved))
}

async fn save_destination(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Json(req): Json<SaveDestinationRequest>,
) -> Result<(StatusCode, Json<SavedDestination>), AppError> {
    let destination = require_destination(&req.destination_id)?;
    let country = require_country(destination.country_code)?;
    let note = req.note.map(|n| n.trim().to_string()).filter(|n| !n.is_empty());

    let saved = state
        .saved_repo
        .save(NewSavedDestination {
            user_id: identity.user_id,
            destination_id: destination.id.to_string(),
            destination_name: destination.city.to_string(),
            country_code: country.code.to_string(),
            country_name: country.name.to_string(),
            note,
        })
        .await?;

    let event = DestinationSavedEvent {
        saved_id: saved.id,
        user_id: saved.user_id.clone(),
        destination_id: saved.destination_id.clone(),
        timestamp: Utc::now().timestamp(),
    };
    tracing::info!(event = DestinationSavedEvent::NAME, payload = ?event, "Destination saved");

    Ok((StatusCode::CREATED, Json(saved)))
}

async fn delete_saved(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.saved_repo.delete(&identity.user_id, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFoundError(format!("Saved destination not found: {}", id)))
    }
}

async fn list_history(
    State(state): State<AppState>,
    Extension(identity): Extension<UserIdentity>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<SpinHistoryEntry>>, AppError> {
    let limit = query
        .limit
        .unwrap_or(DEFAULT_HISTORY_LIMIT)
        .clamp(1, MAX_HISTORY_LIMIT);
    let history = state.history_repo.list(&identity.user_id, limit).await?;
    Ok(Json(history))
}
