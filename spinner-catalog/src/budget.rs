use serde::{Deserialize, Serialize};

use crate::country::TravelStyle;
use crate::destination::{DailyBudget, Destination};

/// Seasonal price pressure at the destination.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalPricing {
    Peak,
    Shoulder,
    OffPeak,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    pub romantic_multiplier: f64,
    /// Applied per person; children and shared rooms bring the average down.
    pub family_multiplier: f64,
    pub solo_multiplier: f64,
    pub peak_multiplier: f64,
    pub off_peak_multiplier: f64,
    pub min_multiplier: f64,
    pub max_multiplier: f64,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            romantic_multiplier: 1.15,
            family_multiplier: 0.9,
            solo_multiplier: 1.0,
            peak_multiplier: 1.2,
            off_peak_multiplier: 0.85,
            min_multiplier: 0.5,
            max_multiplier: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BudgetRequest {
    pub travelers: u32,
    pub days: u32,
    pub style: Option<TravelStyle>,
    pub season: Option<SeasonalPricing>,
}

impl Default for BudgetRequest {
    fn default() -> Self {
        Self {
            travelers: 2,
            days: 7,
            style: None,
            season: None,
        }
    }
}

/// Trip totals in whole US dollars for each comfort tier.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BudgetEstimate {
    pub currency: &'static str,
    pub travelers: u32,
    pub days: u32,
    pub multiplier: f64,
    pub per_person_per_day: DailyBudget,
    pub budget: u32,
    pub mid_range: u32,
    pub luxury: u32,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BudgetError {
    #[error("Invalid budget request: {0}")]
    InvalidRequest(String),
}

pub struct BudgetEstimator {
    config: BudgetConfig,
}

pub const MAX_TRAVELERS: u32 = 50;
pub const MAX_DAYS: u32 = 365;

impl BudgetEstimator {
    pub fn new(config: BudgetConfig) -> Self {
        Self { config }
    }

    /// Combined style and season multiplier, clamped to configured limits.
    pub fn multiplier(&self, style: Option<TravelStyle>, season: Option<SeasonalPricing>) -> f64 {
        let style_multiplier = match style {
            Some(TravelStyle::Romantic) => self.config.romantic_multiplier,
            Some(TravelStyle::Family) => self.config.family_multiplier,
            Some(TravelStyle::Solo) => self.config.solo_multiplier,
            None => 1.0,
        };

        let season_multiplier = match season {
            Some(SeasonalPricing::Peak) => self.config.peak_multiplier,
            Some(SeasonalPricing::OffPeak) => self.config.off_peak_multiplier,
            Some(SeasonalPricing::Shoulder) | None => 1.0,
        };

        (style_multiplier * season_multiplier)
            .max(self.config.min_multiplier)
            .min(self.config.max_multiplier)
    }

    pub fn estimate(&self, destination: &Destination, request: &BudgetRequest) -> Result<BudgetEstimate, BudgetError> {
        if !(1..=MAX_TRAVELERS).contains(&request.travelers) {
            return Err(BudgetError::InvalidRequest(format!(
                "travelers must be between 1 and {}",
                MAX_TRAVELERS
            )));
        }
        if !(1..=MAX_DAYS).contains(&request.days) {
            return Err(BudgetError::InvalidRequest(format!("days must be between 1 and {}", MAX_DAYS)));
        }

        let multiplier = self.multiplier(request.style, request.season);
        let person_days = request.travelers as f64 * request.days as f64;
        let total = |daily: u32| (daily as f64 * person_days * multiplier).round() as u32;

        let daily = destination.daily_budget_usd;
        Ok(BudgetEstimate {
            currency: "USD",
            travelers: request.travelers,
            days: request.days,
            multiplier,
            per_person_per_day: daily,
            budget: total(daily.budget),
            mid_range: total(daily.mid_range),
            luxury: total(daily.luxury),
        })
    }
}

impl Default for BudgetEstimator {
    fn default() -> Self {
        Self::new(BudgetConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::find_destination;

    #[test]
    fn test_baseline_estimate() {
        let estimator = BudgetEstimator::default();
        let lisbon = find_destination("lisbon-pt").unwrap();

        let estimate = estimator
            .estimate(lisbon, &BudgetRequest { travelers: 2, days: 5, style: None, season: None })
            .unwrap();

        // 65/day * 2 people * 5 days
        assert_eq!(estimate.budget, 650);
        assert_eq!(estimate.mid_range, 1500);
        assert_eq!(estimate.luxury, 3800);
        assert_eq!(estimate.currency, "USD");
    }

    #[test]
    fn test_peak_romantic_costs_more_than_off_peak_family() {
        let estimator = BudgetEstimator::default();
        let bali = find_destination("bali-id").unwrap();

        let peak = estimator
            .estimate(bali, &BudgetRequest {
                travelers: 2,
                days: 7,
                style: Some(TravelStyle::Romantic),
                season: Some(SeasonalPricing::Peak),
            })
            .unwrap();
        let off_peak = estimator
            .estimate(bali, &BudgetRequest {
                travelers: 2,
                days: 7,
                style: Some(TravelStyle::Family),
                season: Some(SeasonalPricing::OffPeak),
            })
            .unwrap();

        assert!(peak.mid_range > off_peak.mid_range);
        assert!((peak.multiplier - 1.38).abs() < 1e-9);
    }

    #[test]
    fn test_multiplier_is_clamped() {
        let estimator = BudgetEstimator::new(BudgetConfig {
            peak_multiplier: 5.0,
            ..Default::default()
        });
        let m = estimator.multiplier(Some(TravelStyle::Romantic), Some(SeasonalPricing::Peak));
        assert_eq!(m, 2.0);
    }

    #[test]
    fn test_oversized_trip_rejected() {
        let estimator = BudgetEstimator::default();
        let dubai = find_destination("dubai-ae").unwrap();

        for request in [
            BudgetRequest { travelers: u32::MAX, days: 7, style: None, season: None },
            BudgetRequest { travelers: 2, days: MAX_DAYS + 1, style: None, season: None },
        ] {
            assert!(matches!(
                estimator.estimate(dubai, &request),
                Err(BudgetError::InvalidRequest(_))
            ));
        }

        let longest = BudgetRequest {
            travelers: MAX_TRAVELERS,
            days: MAX_DAYS,
            style: Some(TravelStyle::Romantic),
            season: Some(SeasonalPricing::Peak),
        };
        let estimate = estimator.estimate(dubai, &longest).unwrap();
        assert!(estimate.luxury > estimate.mid_range);
    }

    #[test]
    fn test_zero_travelers_rejected() {
        let estimator = BudgetEstimator::default();
        let rome = find_destination("rome-it").unwrap();
        let err = estimator
            .estimate(rome, &BudgetRequest { travelers: 0, ..Default::default() })
            .unwrap_err();
        assert!(matches!(err, BudgetError::InvalidRequest(_)));
    }
}
