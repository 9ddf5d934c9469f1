use chrono::Datelike;
use spinner_catalog::SeasonalPricing;

use crate::models::{CrowdLevel, DailySample, Hemisphere, MonthlyClimate, Season, SeasonSummary, TravelSeasonReport, VisitTier};
use crate::scoring::comfort_score;
use crate::WeatherError;

#[derive(Debug, Default, Clone, Copy)]
struct MonthAccumulator {
    temp_max_sum: f64,
    temp_min_sum: f64,
    precipitation_sum: f64,
    days: u32,
}

impl MonthAccumulator {
    fn add(&mut self, temp_max: f64, temp_min: f64, precipitation: f64) {
        self.temp_max_sum += temp_max;
        self.temp_min_sum += temp_min;
        self.precipitation_sum += precipitation;
        self.days += 1;
    }
}

impl MonthlyClimate {
    /// Builds a month from already-averaged values and scores it.
    pub fn from_averages(month: u32, temp_max_c: f64, temp_min_c: f64, precipitation_mm: f64, sample_days: u32) -> Self {
        let avg_temp = (temp_max_c + temp_min_c) / 2.0;
        let comfort_score = comfort_score(avg_temp, precipitation_mm);
        Self {
            month,
            avg_temp_max_c: temp_max_c,
            avg_temp_min_c: temp_min_c,
            avg_precipitation_mm: precipitation_mm,
            sample_days,
            comfort_score,
            tier: VisitTier::from_score(comfort_score),
        }
    }
}

/// Groups samples by calendar month and averages each metric. Days with a
/// missing or non-finite reading are dropped; months without any usable day
/// are omitted. The result is ordered January to December.
pub fn aggregate_months(samples: &[DailySample]) -> Vec<MonthlyClimate> {
    let mut buckets = [MonthAccumulator::default(); 12];

    for sample in samples {
        let (Some(max), Some(min), Some(precipitation)) =
            (sample.temp_max_c, sample.temp_min_c, sample.precipitation_mm)
        else {
            continue;
        };
        if !(max.is_finite() && min.is_finite() && precipitation.is_finite()) {
            continue;
        }
        buckets[sample.date.month0() as usize].add(max, min, precipitation.max(0.0));
    }

    buckets
        .iter()
        .enumerate()
        .filter(|(_, b)| b.days > 0)
        .map(|(i, b)| {
            let days = b.days as f64;
            MonthlyClimate::from_averages(
                i as u32 + 1,
                b.temp_max_sum / days,
                b.temp_min_sum / days,
                b.precipitation_sum / days,
                b.days,
            )
        })
        .collect()
}

fn summarize_seasons(months: &[MonthlyClimate], hemisphere: Hemisphere) -> Vec<SeasonSummary> {
    let mut seasons: Vec<SeasonSummary> = Season::ALL
        .iter()
        .filter_map(|season| {
            let members: Vec<&MonthlyClimate> = months
                .iter()
                .filter(|m| Season::for_month(m.month, hemisphere) == *season)
                .collect();
            if members.is_empty() {
                return None;
            }
            let avg_comfort = members.iter().map(|m| m.comfort_score as f64).sum::<f64>() / members.len() as f64;
            Some(SeasonSummary {
                season: *season,
                months: members.iter().map(|m| m.month).collect(),
                avg_comfort,
                crowd_level: CrowdLevel::Moderate,
                price_level: SeasonalPricing::Shoulder,
            })
        })
        .collect();

    // Most comfortable seasons draw the crowds; least comfortable are cheapest.
    // A flat year has no peak.
    let scores = seasons.iter().map(|s| s.avg_comfort);
    let max = scores.clone().fold(f64::NEG_INFINITY, f64::max);
    let min = scores.fold(f64::INFINITY, f64::min);

    if max > min {
        for season in seasons.iter_mut() {
            if season.avg_comfort == max {
                season.crowd_level = CrowdLevel::High;
                season.price_level = SeasonalPricing::Peak;
            } else if season.avg_comfort == min {
                season.crowd_level = CrowdLevel::Low;
                season.price_level = SeasonalPricing::OffPeak;
            }
        }
    }

    seasons
}

/// Partitions scored months into tiers and rolls them up into seasons.
pub fn build_report(latitude: f64, months: Vec<MonthlyClimate>) -> Result<TravelSeasonReport, WeatherError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(WeatherError::InvalidLatitude(latitude));
    }
    if months.is_empty() {
        return Err(WeatherError::NoSamples);
    }

    let hemisphere = Hemisphere::from_latitude(latitude);
    let in_tier = |tier: VisitTier| -> Vec<u32> {
        months.iter().filter(|m| m.tier == tier).map(|m| m.month).collect()
    };

    let best_months = in_tier(VisitTier::Best);
    let good_months = in_tier(VisitTier::Good);
    let avoid_months = in_tier(VisitTier::Avoid);
    let seasons = summarize_seasons(&months, hemisphere);

    Ok(TravelSeasonReport {
        hemisphere,
        months,
        best_months,
        good_months,
        avoid_months,
        seasons,
    })
}

pub fn report_from_samples(latitude: f64, samples: &[DailySample]) -> Result<TravelSeasonReport, WeatherError> {
    build_report(latitude, aggregate_months(samples))
}
