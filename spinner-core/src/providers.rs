use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use spinner_weather::DailySample;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(&'static str),

    #[error("Upstream request failed: {0}")]
    Request(String),

    #[error("Unexpected upstream response: {0}")]
    InvalidResponse(String),

    #[error("Upstream has no record for {0}")]
    NotFound(String),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Photo {
    pub id: String,
    pub url: String,
    pub thumb_url: String,
    pub description: Option<String>,
    pub photographer: Option<String>,
    pub photographer_url: Option<String>,
}

/// Country facts from a reference service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CountryProfile {
    pub code: String,
    pub name: String,
    pub official_name: Option<String>,
    pub capital: Option<String>,
    pub population: Option<u64>,
    pub currencies: Vec<String>,
    pub languages: Vec<String>,
    pub timezones: Vec<String>,
    pub flag_url: Option<String>,
}

/// Historical daily weather at a coordinate.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn daily_history(
        &self,
        lat: f64,
        lon: f64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailySample>, ProviderError>;
}

#[async_trait]
pub trait PhotoProvider: Send + Sync {
    async fn search(&self, keyword: &str, count: u8) -> Result<Vec<Photo>, ProviderError>;
}

#[async_trait]
pub trait CountryInfoProvider: Send + Sync {
    async fn profile(&self, iso_code: &str) -> Result<CountryProfile, ProviderError>;
}
