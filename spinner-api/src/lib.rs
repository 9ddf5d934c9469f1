use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Duration;
use serde_json::json;
use spinner_core::repository::{SavedDestinationRepository, SpinHistoryRepository};
use spinner_spin::SpinService;
use spinner_store::app_config::Config;
use spinner_store::{
    DbClient, InMemorySavedDestinationRepository, InMemorySpinHistoryRepository, PgSavedDestinationRepository,
    PgSpinHistoryRepository, RedisClient,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod auth;
pub mod catalog;
pub mod error;
pub mod insights;
pub mod metrics;
pub mod middleware;
pub mod resiliency;
pub mod saved;
pub mod spin;
pub mod state;
pub mod worker;

pub use state::AppState;

use insights::{InsightsProviders, InsightsService, InsightsSettings};
use metrics::Metrics;
use middleware::JwtIdentityProvider;

pub fn app(state: AppState) -> Router {
    // CORS Middleware
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::USER_AGENT,
        ]);

    let mut router = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics::metrics_handler))
        .merge(catalog::routes())
        .merge(insights::routes())
        .merge(spin::routes(state.clone()))
        .merge(saved::routes(state.clone()))
        .merge(auth::routes(state.clone()))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    if state.redis.is_some() {
        router = router.layer(axum::middleware::from_fn_with_state(state.clone(), rate_limit_middleware));
    }

    router.with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn rate_limit_middleware(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let Some(redis) = state.redis.as_ref() else {
        return next.run(req).await;
    };

    let ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let key = format!("ratelimit:{}", ip);

    match redis
        .check_rate_limit(&key, state.rate_limit.requests, state.rate_limit.window_seconds)
        .await
    {
        Ok(true) => next.run(req).await,
        Ok(false) => (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "error": "Rate limit exceeded" })),
        )
            .into_response(),
        Err(e) => {
            // Fail open
            tracing::warn!("Rate limit check failed for {}: {}", ip, e);
            next.run(req).await
        }
    }
}

/// Wires services and storage from configuration. Postgres and Redis are
/// optional; without a database the repositories live in memory.
pub async fn build_state(config: &Config) -> anyhow::Result<AppState> {
    config.validate()?;
    let metrics = Arc::new(Metrics::new()?);

    let (saved_repo, history_repo): (Arc<dyn SavedDestinationRepository>, Arc<dyn SpinHistoryRepository>) =
        match &config.database {
            Some(db) => {
                let client = DbClient::new(&db.url).await?;
                client.migrate().await?;
                tracing::info!("Using Postgres for saved destinations and history");
                (
                    Arc::new(PgSavedDestinationRepository::new(client.pool.clone())),
                    Arc::new(PgSpinHistoryRepository::new(client.pool.clone())),
                )
            }
            None => {
                tracing::warn!("No database configured, saved destinations are kept in memory");
                (
                    Arc::new(InMemorySavedDestinationRepository::new()),
                    Arc::new(InMemorySpinHistoryRepository::new()),
                )
            }
        };

    let redis = match &config.redis {
        Some(redis) => Some(Arc::new(RedisClient::new(&redis.url).await?)),
        None => {
            tracing::info!("No Redis configured, rate limiting disabled");
            None
        }
    };

    let session_ttl = Duration::try_seconds(config.session.ttl_seconds)
        .ok_or_else(|| anyhow::anyhow!("session.ttl_seconds out of range"))?;

    let providers = InsightsProviders::from_config(&config.providers)?;
    let insights = InsightsService::new(providers, InsightsSettings::from_config(config), metrics.clone());

    Ok(AppState {
        spin: Arc::new(SpinService::new(session_ttl)),
        insights: Arc::new(insights),
        identity: Arc::new(JwtIdentityProvider::new(&config.auth.jwt_secret, &config.auth.jwt_audience)),
        saved_repo,
        history_repo,
        redis,
        rate_limit: config.rate_limit.clone(),
        metrics,
    })
}
