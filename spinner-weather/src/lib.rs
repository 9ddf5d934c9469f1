//! Turns a year of daily weather samples into a "best time to visit" report.
//!
//! Samples are bucketed by calendar month, each month gets a 1-10 comfort
//! score and a visit tier, and months roll up into hemisphere-aware seasons
//! with crowd and price heuristics. When no live samples are available the
//! `fallback` module produces the same report from a latitude-zone climate
//! table.

pub mod models;
pub mod scoring;
pub mod bucketer;
pub mod fallback;

pub use models::{
    CrowdLevel, DailySample, Hemisphere, MonthlyClimate, Season, SeasonSummary, TravelSeasonReport, VisitTier,
};
pub use scoring::comfort_score;
pub use bucketer::{aggregate_months, build_report, report_from_samples};
pub use fallback::{fallback_months, fallback_report, ClimateZone};

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum WeatherError {
    #[error("No usable weather samples")]
    NoSamples,

    #[error("Latitude out of range: {0}")]
    InvalidLatitude(f64),
}
