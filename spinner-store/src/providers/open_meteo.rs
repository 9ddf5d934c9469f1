use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use spinner_core::providers::{ProviderError, WeatherProvider};
use spinner_weather::DailySample;

use super::{check_status, http_client, request_error};

const DAILY_FIELDS: &str = "temperature_2m_max,temperature_2m_min,precipitation_sum";

/// Open-Meteo historical archive.
pub struct OpenMeteoClient {
    client: reqwest::Client,
    base_url: String,
}

impl OpenMeteoClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ProviderError> {
        Ok(Self {
            client: http_client(timeout)?,
            base_url: base_url.into(),
        })
    }
}

#[derive(Debug, Deserialize)]
struct ArchiveResponse {
    daily: DailySeries,
}

#[derive(Debug, Deserialize)]
struct DailySeries {
    time: Vec<String>,
    temperature_2m_max: Vec<Option<f64>>,
    temperature_2m_min: Vec<Option<f64>>,
    precipitation_sum: Vec<Option<f64>>,
}

fn into_samples(series: DailySeries) -> Result<Vec<DailySample>, ProviderError> {
    let len = series.time.len();
    if series.temperature_2m_max.len() != len
        || series.temperature_2m_min.len() != len
        || series.precipitation_sum.len() != len
    {
        return Err(ProviderError::InvalidResponse("daily series lengths differ".to_string()));
    }

    series
        .time
        .iter()
        .enumerate()
        .map(|(i, day)| {
            let date = NaiveDate::parse_from_str(day, "%Y-%m-%d")
                .map_err(|e| ProviderError::InvalidResponse(format!("bad date {}: {}", day, e)))?;
            Ok(DailySample {
                date,
                temp_max_c: series.temperature_2m_max[i],
                temp_min_c: series.temperature_2m_min[i],
                precipitation_mm: series.precipitation_sum[i],
            })
        })
        .collect()
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    async fn daily_history(
        &self,
        lat: f64,
        lon: f64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<DailySample>, ProviderError> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("start_date", start.format("%Y-%m-%d").to_string()),
                ("end_date", end.format("%Y-%m-%d").to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "UTC".to_string()),
            ])
            .send()
            .await
            .map_err(request_error)?;

        let body: ArchiveResponse = check_status(resp, "weather history")?
            .json()
            .await
            .map_err(request_error)?;

        tracing::debug!("Open-Meteo returned {} days for ({}, {})", body.daily.time.len(), lat, lon);
        into_samples(body.daily)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_archive_payload_with_gaps() {
        let body: ArchiveResponse = serde_json::from_value(serde_json::json!({
            "latitude": 48.86,
            "longitude": 2.35,
            "daily": {
                "time": ["2023-07-01", "2023-07-02"],
                "temperature_2m_max": [26.1, null],
                "temperature_2m_min": [15.4, 14.0],
                "precipitation_sum": [0.0, 3.2]
            }
        }))
        .unwrap();

        let samples = into_samples(body.daily).unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].date, NaiveDate::from_ymd_opt(2023, 7, 1).unwrap());
        assert_eq!(samples[0].temp_max_c, Some(26.1));
        assert_eq!(samples[1].temp_max_c, None);
    }

    #[test]
    fn test_rejects_ragged_series() {
        let series = DailySeries {
            time: vec!["2023-07-01".into()],
            temperature_2m_max: vec![],
            temperature_2m_min: vec![Some(1.0)],
            precipitation_sum: vec![Some(0.0)],
        };
        assert!(matches!(into_samples(series), Err(ProviderError::InvalidResponse(_))));
    }
}
