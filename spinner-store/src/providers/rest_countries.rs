use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use spinner_core::providers::{CountryInfoProvider, CountryProfile, ProviderError};

use super::{check_status, http_client, request_error};

/// REST Countries v3.1 lookups by ISO alpha-2 code.
pub struct RestCountriesClient {
    client: reqwest::Client,
    base_url: String,
}

impl RestCountriesClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url: base_url.into(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct CountryRecord {
    cca2: String,
    name: CountryName,
    #[serde(default)]
    capital: Vec<String>,
    population: Option<u64>,
    #[serde(default)]
    currencies: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    languages: BTreeMap<String, String>,
    #[serde(default)]
    timezones: Vec<String>,
    flags: Option<Flags>,
}

#[derive(Debug, Deserialize)]
struct CountryName {
    common: String,
    official: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Flags {
    png: Option<String>,
    svg: Option<String>,
}

impl From<CountryRecord> for CountryProfile {
    fn from(r: CountryRecord) -> Self {
        CountryProfile {
            code: r.cca2,
            name: r.name.common,
            official_name: r.name.official,
            capital: r.capital.into_iter().next(),
            population: r.population,
            currencies: r.currencies.into_keys().collect(),
            languages: r.languages.into_values().collect(),
            timezones: r.timezones,
            flag_url: r.flags.and_then(|f| f.svg.or(f.png)),
        }
    }
}

#[async_trait]
impl CountryInfoProvider for RestCountriesClient {
    async fn profile(&self, iso_code: &str) -> Result<CountryProfile, ProviderError> {
        let code = iso_code.trim().to_ascii_uppercase();
        let resp = self
            .client
            .get(format!("{}/alpha/{}", self.base_url.trim_end_matches('/'), code))
            .send()
            .await
            .map_err(request_error)?;

        // The alpha endpoint answers with a one-element array.
        let records: Vec<CountryRecord> = check_status(resp, &code)?.json().await.map_err(request_error)?;
        records
            .into_iter()
            .next()
            .map(CountryProfile::from)
            .ok_or(ProviderError::NotFound(code))
    }
}
