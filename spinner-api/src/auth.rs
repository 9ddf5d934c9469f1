use axum::{middleware, routing::get, Extension, Json, Router};
use spinner_core::identity::UserIdentity;

use crate::{middleware::require_auth, state::AppState};

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/v1/me", get(me))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}

async fn me(Extension(identity): Extension<UserIdentity>) -> Json<UserIdentity> {
    Json(identity)
}
