//! HTTP clients for the enrichment services. Each one maps transport and
//! decoding failures onto `ProviderError`; callers decide on fallbacks.

pub mod open_meteo;
pub mod unsplash;
pub mod rest_countries;

pub use open_meteo::OpenMeteoClient;
pub use unsplash::UnsplashClient;
pub use rest_countries::RestCountriesClient;

use std::time::Duration;

use spinner_core::providers::ProviderError;

const USER_AGENT: &str = concat!("travel-spinner/", env!("CARGO_PKG_VERSION"));

pub(crate) fn http_client(timeout: Duration) -> Result<reqwest::Client, ProviderError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ProviderError::Request(e.to_string()))
}

pub(crate) fn request_error(err: reqwest::Error) -> ProviderError {
    if err.is_timeout() {
        ProviderError::Request("timed out".to_string())
    } else if err.is_decode() {
        ProviderError::InvalidResponse(err.to_string())
    } else {
        ProviderError::Request(err.to_string())
    }
}

/// Turns non-2xx statuses into errors; 404 becomes `NotFound(what)`.
pub(crate) fn check_status(resp: reqwest::Response, what: &str) -> Result<reqwest::Response, ProviderError> {
    let status = resp.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ProviderError::NotFound(what.to_string()));
    }
    if !status.is_success() {
        return Err(ProviderError::Request(format!("HTTP error: {}", status)));
    }
    Ok(resp)
}
