use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use spinner_catalog::{
    require_country, require_destination, visa, BudgetConfig, BudgetEstimate, BudgetEstimator, BudgetRequest, Country,
    Destination, TravelStyle, VisaInfo,
};
use spinner_core::providers::{CountryInfoProvider, CountryProfile, Photo, PhotoProvider, ProviderError, WeatherProvider};
use spinner_store::app_config::{Config, ProvidersConfig};
use spinner_store::providers::{OpenMeteoClient, RestCountriesClient, UnsplashClient};
use spinner_store::TtlCache;
use spinner_weather::{fallback_report, report_from_samples, TravelSeasonReport};

use crate::{error::AppError, metrics::Metrics, resiliency::CircuitBreaker, state::AppState};

// ============================================================================
// Response Types
// ============================================================================

/// Where a section's data came from.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Live,
    Cached,
    Fallback,
}

impl Source {
    fn as_str(self) -> &'static str {
        match self {
            Source::Live => "live",
            Source::Cached => "cached",
            Source::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Section<T> {
    pub source: Source,
    pub data: T,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InsightsQuery {
    pub travelers: Option<u32>,
    pub days: Option<u32>,
    /// ISO alpha-2 passport country for the visa section.
    pub passport: Option<String>,
    /// Planned travel month, 1-12. Drives the seasonal budget multiplier.
    pub month: Option<u32>,
    pub style: Option<TravelStyle>,
}

#[derive(Debug, Serialize)]
pub struct DestinationInsights {
    pub destination: &'static Destination,
    pub country: Section<CountryProfile>,
    pub best_time: Section<TravelSeasonReport>,
    pub photos: Section<Vec<Photo>>,
    pub budget: BudgetEstimate,
    pub visa: Option<VisaInfo>,
}

#[derive(Debug, Serialize)]
pub struct BestTimeResponse {
    pub country_code: &'static str,
    pub country_name: &'static str,
    pub best_time: Section<TravelSeasonReport>,
}

// ============================================================================
// Service
// ============================================================================

pub struct InsightsProviders {
    pub weather: Arc<dyn WeatherProvider>,
    pub photos: Arc<dyn PhotoProvider>,
    pub countries: Arc<dyn CountryInfoProvider>,
}

impl InsightsProviders {
    pub fn from_config(config: &ProvidersConfig) -> Result<Self, ProviderError> {
        let timeout = Duration::from_millis(config.timeout_ms);
        Ok(Self {
            weather: Arc::new(OpenMeteoClient::new(config.open_meteo_url.clone(), timeout)?),
            photos: Arc::new(UnsplashClient::new(
                config.unsplash_url.clone(),
                config.unsplash_access_key.clone(),
                timeout,
            )?),
            countries: Arc::new(RestCountriesClient::new(config.rest_countries_url.clone(), timeout)?),
        })
    }
}

#[derive(Debug, Clone)]
pub struct InsightsSettings {
    pub cache_ttl: Duration,
    pub failure_threshold: usize,
    pub reset_timeout: Duration,
    pub photo_count: u8,
    pub budget: BudgetConfig,
}

impl InsightsSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            cache_ttl: Duration::from_secs(config.cache.ttl_seconds),
            failure_threshold: config.resiliency.failure_threshold,
            reset_timeout: Duration::from_secs(config.resiliency.reset_timeout_seconds),
            photo_count: config.providers.photo_count,
            budget: config.budget.clone(),
        }
    }
}

/// Aggregates weather, photos and country facts for a destination. Every
/// upstream sits behind its own breaker and cache; failures degrade to
/// bundled data instead of erroring.
pub struct InsightsService {
    providers: InsightsProviders,
    weather_cb: CircuitBreaker,
    photos_cb: CircuitBreaker,
    countries_cb: CircuitBreaker,
    weather_cache: TtlCache<String, TravelSeasonReport>,
    photo_cache: TtlCache<String, Vec<Photo>>,
    profile_cache: TtlCache<String, CountryProfile>,
    budget: BudgetEstimator,
    photo_count: u8,
    metrics: Arc<Metrics>,
}

impl InsightsService {
    pub fn new(providers: InsightsProviders, settings: InsightsSettings, metrics: Arc<Metrics>) -> Self {
        let breaker = |name: &str| CircuitBreaker::new(name, settings.failure_threshold, settings.reset_timeout);
        Self {
            providers,
            weather_cb: breaker("weather"),
            photos_cb: breaker("photos"),
            countries_cb: breaker("countries"),
            weather_cache: TtlCache::new(settings.cache_ttl),
            photo_cache: TtlCache::new(settings.cache_ttl),
            profile_cache: TtlCache::new(settings.cache_ttl),
            budget: BudgetEstimator::new(settings.budget.clone()),
            photo_count: settings.photo_count,
            metrics,
        }
    }

    pub async fn insights(
        &self,
        destination: &'static Destination,
        query: &InsightsQuery,
    ) -> Result<DestinationInsights, AppError> {
        if let Some(month) = query.month {
            if !(1..=12).contains(&month) {
                return Err(AppError::ValidationError("month must be between 1 and 12".to_string()));
            }
        }
        let passport = match query.passport.as_deref().map(str::trim) {
            Some(p) if p.len() == 2 && p.chars().all(|c| c.is_ascii_alphabetic()) => Some(p),
            Some(_) => return Err(AppError::ValidationError("passport must be an ISO alpha-2 code".to_string())),
            None => None,
        };
        let country = require_country(destination.country_code)?;

        let (best_time, photos, profile) = tokio::join!(
            self.weather_section(format!("destination:{}", destination.id), destination.coordinates.lat, destination.coordinates.lon),
            self.photo_section(destination, country),
            self.country_section(country),
        );
        let (best_time, photos, profile) = (best_time?, photos?, profile?);

        let season = query.month.and_then(|m| best_time.data.price_level_for(m));
        let budget = self.budget.estimate(
            destination,
            &BudgetRequest {
                travelers: query.travelers.unwrap_or(2),
                days: query.days.unwrap_or(7),
                style: query.style,
                season,
            },
        )?;
        let visa = passport.map(|p| visa::requirement(p, destination.country_code));

        Ok(DestinationInsights {
            destination,
            country: profile,
            best_time,
            photos,
            budget,
            visa,
        })
    }

    /// Seasonal report for a country's reference coordinates.
    pub async fn best_time(&self, country: &'static Country) -> Result<Section<TravelSeasonReport>, AppError> {
        self.weather_section(
            format!("country:{}", country.code),
            country.coordinates.lat,
            country.coordinates.lon,
        )
        .await
    }

    /// Drop expired cache entries across all sections.
    pub async fn purge_caches(&self) -> usize {
        self.weather_cache.purge_expired().await
            + self.photo_cache.purge_expired().await
            + self.profile_cache.purge_expired().await
    }

    async fn weather_section(&self, key: String, lat: f64, lon: f64) -> Result<Section<TravelSeasonReport>, AppError> {
        let provider = self.providers.weather.clone();
        guarded(
            &self.weather_cache,
            key,
            &self.weather_cb,
            &self.metrics,
            || async move {
                let (start, end) = previous_year(Utc::now().date_naive())
                    .ok_or_else(|| ProviderError::InvalidResponse("date out of range".to_string()))?;
                let samples = provider.daily_history(lat, lon, start, end).await?;
                report_from_samples(lat, &samples).map_err(|e| ProviderError::InvalidResponse(e.to_string()))
            },
            || fallback_report(lat.clamp(-90.0, 90.0)).map_err(|e| AppError::InternalServerError(e.to_string())),
        )
        .await
    }

    async fn photo_section(
        &self,
        destination: &'static Destination,
        country: &'static Country,
    ) -> Result<Section<Vec<Photo>>, AppError> {
        let provider = self.providers.photos.clone();
        let count = self.photo_count;
        guarded(
            &self.photo_cache,
            destination.id.to_string(),
            &self.photos_cb,
            &self.metrics,
            || async move {
                let photos = provider.search(destination.photo_keyword, count).await?;
                if photos.is_empty() {
                    return Err(ProviderError::NotFound(destination.photo_keyword.to_string()));
                }
                Ok(photos)
            },
            || Ok(vec![placeholder_photo(destination, country)]),
        )
        .await
    }

    async fn country_section(&self, country: &'static Country) -> Result<Section<CountryProfile>, AppError> {
        let provider = self.providers.countries.clone();
        guarded(
            &self.profile_cache,
            country.code.to_string(),
            &self.countries_cb,
            &self.metrics,
            || async move { provider.profile(country.code).await },
            || Ok(catalog_profile(country)),
        )
        .await
    }
}

/// Cache, then breaker-guarded fetch, then bundled fallback.
async fn guarded<T, F, Fut, G>(
    cache: &TtlCache<String, T>,
    key: String,
    breaker: &CircuitBreaker,
    metrics: &Metrics,
    fetch: F,
    fallback: G,
) -> Result<Section<T>, AppError>
where
    T: Clone,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, ProviderError>>,
    G: FnOnce() -> Result<T, AppError>,
{
    let provider = breaker.name.as_str();
    let record = |source: Source| {
        metrics
            .provider_results
            .with_label_values(&[provider, source.as_str()])
            .inc();
    };

    if let Some(hit) = cache.get(&key).await {
        record(Source::Cached);
        return Ok(Section { source: Source::Cached, data: hit });
    }

    if breaker.check().await {
        match fetch().await {
            Ok(value) => {
                breaker.record_success().await;
                cache.insert(key, value.clone()).await;
                record(Source::Live);
                return Ok(Section { source: Source::Live, data: value });
            }
            // Upstream answered; nothing to trip on.
            Err(e @ (ProviderError::NotConfigured(_) | ProviderError::NotFound(_))) => {
                tracing::debug!("{} lookup for {} fell back: {}", provider, key, e);
            }
            Err(e) => {
                breaker.record_failure().await;
                tracing::warn!("{} lookup for {} failed, using fallback: {}", provider, key, e);
            }
        }
    } else {
        tracing::warn!("Circuit Breaker [{}] is open, using fallback for {}", provider, key);
    }

    record(Source::Fallback);
    Ok(Section {
        source: Source::Fallback,
        data: fallback()?,
    })
}

fn previous_year(today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let year = today.year() - 1;
    Some((NaiveDate::from_ymd_opt(year, 1, 1)?, NaiveDate::from_ymd_opt(year, 12, 31)?))
}

fn placeholder_photo(destination: &Destination, country: &Country) -> Photo {
    let path = destination.fallback_photo_path();
    Photo {
        id: destination.id.to_string(),
        url: path.clone(),
        thumb_url: path,
        description: Some(format!("{}, {}", destination.city, country.name)),
        photographer: None,
        photographer_url: None,
    }
}

fn catalog_profile(country: &Country) -> CountryProfile {
    CountryProfile {
        code: country.code.to_string(),
        name: country.name.to_string(),
        official_name: None,
        capital: Some(country.capital.to_string()),
        population: None,
        currencies: vec![country.currency.to_string()],
        languages: country.languages.iter().map(|l| l.to_string()).collect(),
        timezones: Vec::new(),
        flag_url: None,
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/destinations/{id}/insights", get(destination_insights))
        .route("/v1/countries/{code}/best-time", get(country_best_time))
}

async fn destination_insights(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<InsightsQuery>,
) -> Result<Json<DestinationInsights>, AppError> {
    let destination = require_destination(&id)?;
    let insights = state.insights.insights(destination, &query).await?;
    Ok(Json(insights))
}

async fn country_best_time(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<BestTimeResponse>, AppError> {
    let country = require_country(&code)?;
    let best_time = state.insights.best_time(country).await?;
    Ok(Json(BestTimeResponse {
        country_code: country.code,
        country_name: country.name,
        best_time,
    }))
}
