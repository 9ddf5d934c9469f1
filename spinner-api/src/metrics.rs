use axum::{extract::State, http::header, response::IntoResponse};
use prometheus::{Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};

use crate::{error::AppError, state::AppState};

pub struct Metrics {
    registry: Registry,
    pub spins: IntCounterVec,
    pub spin_resets: IntCounter,
    pub provider_results: IntCounterVec,
    pub active_sessions: IntGauge,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let spins = IntCounterVec::new(Opts::new("spinner_spins_total", "Completed spins"), &["target"])?;
        let spin_resets = IntCounter::new("spinner_spin_resets_total", "Spins that exhausted and cleared a seen list")?;
        let provider_results = IntCounterVec::new(
            Opts::new("spinner_provider_results_total", "Enrichment sections by provider and source"),
            &["provider", "source"],
        )?;
        let active_sessions = IntGauge::new("spinner_active_sessions", "Live spin sessions at last cleanup")?;

        registry.register(Box::new(spins.clone()))?;
        registry.register(Box::new(spin_resets.clone()))?;
        registry.register(Box::new(provider_results.clone()))?;
        registry.register(Box::new(active_sessions.clone()))?;

        Ok(Self {
            registry,
            spins,
            spin_resets,
            provider_results,
            active_sessions,
        })
    }

    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = state
        .metrics
        .render()
        .map_err(|e| AppError::InternalServerError(format!("Metrics encoding failed: {}", e)))?;
    Ok(([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_includes_counters() {
        let metrics = Metrics::new().unwrap();
        metrics.spins.with_label_values(&["country"]).inc();
        metrics.provider_results.with_label_values(&["weather", "fallback"]).inc();

        let text = metrics.render().unwrap();
        assert!(text.contains("spinner_spins_total{target=\"country\"} 1"));
        assert!(text.contains("spinner_provider_results_total"));
    }
}
