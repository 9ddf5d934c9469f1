use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};
use spinner_api::insights::{InsightsProviders, InsightsService, InsightsSettings};
use spinner_api::metrics::Metrics;
use spinner_api::middleware::auth::{IdentityClaims, UserMetadata};
use spinner_api::middleware::JwtIdentityProvider;
use spinner_api::{app, build_state, AppState};
use spinner_catalog::BudgetConfig;
use spinner_core::providers::{CountryInfoProvider, CountryProfile, Photo, PhotoProvider, ProviderError, WeatherProvider};
use spinner_spin::SpinService;
use spinner_store::app_config::{Config, RateLimitConfig};
use spinner_store::{InMemorySavedDestinationRepository, InMemorySpinHistoryRepository};
use spinner_weather::DailySample;
use tower::ServiceExt;

const SECRET: &str = "integration-secret";

// ============================================================================
// Stub Providers
// ============================================================================

struct DownWeather;

#[async_trait]
impl WeatherProvider for DownWeather {
    async fn daily_history(
        &self,
        _lat: f64,
        _lon: f64,
        _start: NaiveDate,
        _end: NaiveDate,
    ) -> Result<Vec<DailySample>, ProviderError> {
        Err(ProviderError::Request("operation timed out".to_string()))
    }
}

struct NoPhotoKey;

#[async_trait]
impl PhotoProvider for NoPhotoKey {
    async fn search(&self, _keyword: &str, _count: u8) -> Result<Vec<Photo>, ProviderError> {
        Err(ProviderError::NotConfigured("unsplash"))
    }
}

struct StaticCountries;

#[async_trait]
impl CountryInfoProvider for StaticCountries {
    async fn profile(&self, iso_code: &str) -> Result<CountryProfile, ProviderError> {
        Ok(CountryProfile {
            code: iso_code.to_string(),
            name: "Japan".to_string(),
            official_name: Some("Japan".to_string()),
            capital: Some("Tokyo".to_string()),
            population: Some(125_000_000),
            currencies: vec!["JPY".to_string()],
            languages: vec!["Japanese".to_string()],
            timezones: vec!["UTC+09:00".to_string()],
            flag_url: None,
        })
    }
}

fn test_app() -> Router {
    let metrics = Arc::new(Metrics::new().unwrap());
    let insights = InsightsService::new(
        InsightsProviders {
            weather: Arc::new(DownWeather),
            photos: Arc::new(NoPhotoKey),
            countries: Arc::new(StaticCountries),
        },
        InsightsSettings {
            cache_ttl: Duration::from_secs(600),
            failure_threshold: 3,
            reset_timeout: Duration::from_secs(30),
            photo_count: 4,
            budget: BudgetConfig::default(),
        },
        metrics.clone(),
    );

    app(AppState {
        spin: Arc::new(SpinService::with_seed(chrono::Duration::minutes(30), 11)),
        insights: Arc::new(insights),
        identity: Arc::new(JwtIdentityProvider::new(SECRET, "authenticated")),
        saved_repo: Arc::new(InMemorySavedDestinationRepository::new()),
        history_repo: Arc::new(InMemorySpinHistoryRepository::new()),
        redis: None,
        rate_limit: RateLimitConfig::default(),
        metrics,
    })
}

fn token_for(user: &str) -> String {
    let claims = IdentityClaims {
        sub: user.to_string(),
        email: Some(format!("{}@example.com", user)),
        aud: "authenticated".to_string(),
        exp: (chrono::Utc::now().timestamp() + 3600) as usize,
        user_metadata: UserMetadata {
            full_name: Some("Test Traveller".to_string()),
            avatar_url: None,
        },
    };
    encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET.as_bytes())).unwrap()
}

async fn send(app: &Router, method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

// ============================================================================
// Catalog
// ============================================================================

#[tokio::test]
async fn test_health() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_country_filter_and_lookup() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::GET,
        "/v1/countries?region=south_america&adventure_level=extreme",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 2);
    let codes: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["code"].as_str().unwrap())
        .collect();
    assert!(codes.contains(&"PE") && codes.contains(&"CL"));

    let (status, body) = send(&app, Method::GET, "/v1/countries/jp", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], "JP");

    let (status, _) = send(&app, Method::GET, "/v1/destinations/atlantis-xx", None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Spinning
// ============================================================================

#[tokio::test]
async fn test_spin_without_matches_is_422() {
    let app = test_app();
    let request = json!({
        "target": "country",
        "style": "family",
        "region": "caribbean",
        "adventure_level": "extreme"
    });

    let (status, body) = send(&app, Method::POST, "/v1/spin", None, Some(request)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "No destinations match your filters");
}

#[tokio::test]
async fn test_spin_cycle_resets_after_exhaustion() {
    let app = test_app();
    let mut session_id = Value::Null;
    let mut resets = Vec::new();

    for _ in 0..3 {
        let request = json!({
            "session_id": session_id,
            "region": "south_america",
            "adventure_level": "extreme"
        });
        let (status, body) = send(&app, Method::POST, "/v1/spin", None, Some(request)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pick"]["kind"], "country");
        session_id = body["session_id"].clone();
        resets.push(body["was_reset"].as_bool().unwrap());
    }

    assert_eq!(resets, vec![false, false, true]);

    let uri = format!("/v1/sessions/{}", session_id.as_str().unwrap());
    let (status, body) = send(&app, Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["spin_count"], 3);
    assert_eq!(body["seen_countries"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_session_lifecycle() {
    let app = test_app();

    let (status, body) = send(&app, Method::POST, "/v1/sessions", None, Some(json!({ "style": "romantic" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["preferences"]["style"], "romantic");
    let uri = format!("/v1/sessions/{}", body["id"].as_str().unwrap());

    let (status, _) = send(&app, Method::DELETE, &uri, None, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Identity & Saved Destinations
// ============================================================================

#[tokio::test]
async fn test_me_requires_valid_token() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/v1/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert!(body["error"].is_string());

    let (status, _) = send(&app, Method::GET, "/v1/me", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let token = token_for("user-1");
    let (status, body) = send(&app, Method::GET, "/v1/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], "user-1");
    assert_eq!(body["display_name"], "Test Traveller");
}

#[tokio::test]
async fn test_saved_destinations_flow() {
    let app = test_app();
    let alice = token_for("alice");
    let bob = token_for("bob");
    let save = json!({ "destination_id": "kyoto-jp", "note": "cherry blossoms" });

    let (status, saved) = send(&app, Method::POST, "/v1/saved", Some(&alice), Some(save.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(saved["country_name"], "Japan");

    let (status, _) = send(&app, Method::POST, "/v1/saved", Some(&alice), Some(save)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let unknown = json!({ "destination_id": "atlantis-xx" });
    let (status, _) = send(&app, Method::POST, "/v1/saved", Some(&alice), Some(unknown)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = send(&app, Method::GET, "/v1/saved", Some(&bob), None).await;
    assert_eq!(list, json!([]));

    let uri = format!("/v1/saved/{}", saved["id"].as_str().unwrap());
    let (status, _) = send(&app, Method::DELETE, &uri, Some(&bob), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, &uri, Some(&alice), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, list) = send(&app, Method::GET, "/v1/saved", Some(&alice), None).await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn test_authenticated_spins_are_recorded() {
    let app = test_app();
    let token = token_for("carol");

    send(&app, Method::POST, "/v1/spin", Some(&token), None).await;
    send(&app, Method::POST, "/v1/spin", None, None).await;
    // An invalid token on the optional route still spins, anonymously
    let (status, _) = send(&app, Method::POST, "/v1/spin", Some("garbage"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, history) = send(&app, Method::GET, "/v1/history?limit=500", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let entries = history.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["target"], "country");
}

// ============================================================================
// Insights
// ============================================================================

#[tokio::test]
async fn test_insights_degrade_to_fallbacks() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::GET,
        "/v1/destinations/kyoto-jp/insights?travelers=2&days=4&passport=US&month=4",
        None,
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["best_time"]["source"], "fallback");
    assert_eq!(body["best_time"]["data"]["months"].as_array().unwrap().len(), 12);
    assert_eq!(body["photos"]["source"], "fallback");
    assert_eq!(body["country"]["source"], "live");
    assert_eq!(body["country"]["data"]["capital"], "Tokyo");
    assert_eq!(body["visa"]["passport"], "US");
    assert_eq!(body["budget"]["days"], 4);

    let (status, body) = send(&app, Method::GET, "/v1/destinations/kyoto-jp/insights", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["country"]["source"], "cached");
    assert!(body["visa"].is_null());
}

#[tokio::test]
async fn test_insights_reject_bad_month() {
    let app = test_app();
    let (status, _) = send(&app, Method::GET, "/v1/destinations/kyoto-jp/insights?month=0", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_insights_reject_oversized_trip() {
    let app = test_app();
    let (status, body) = send(
        &app,
        Method::GET,
        "/v1/destinations/kyoto-jp/insights?travelers=4000000000&days=365",
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("travelers"));
}

#[tokio::test]
async fn test_country_best_time_and_metrics() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/v1/countries/NZ/best-time", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["country_code"], "NZ");
    assert_eq!(body["best_time"]["data"]["hemisphere"], "southern");

    let request = Request::builder().uri("/metrics").body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let text = String::from_utf8(to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()).unwrap();
    assert!(text.contains("spinner_provider_results_total"));
}

// ============================================================================
// Startup
// ============================================================================

#[tokio::test]
async fn test_build_state_rejects_bad_session_ttl() {
    let mut config = Config::with_secret(0, SECRET);
    config.session.ttl_seconds = -1;
    assert!(build_state(&config).await.is_err());

    config.session.ttl_seconds = 600;
    let state = build_state(&config).await.unwrap();
    assert_eq!(state.spin.active_sessions().await, 0);
}
