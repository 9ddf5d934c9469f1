use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use spinner_catalog::SeasonalPricing;

/// One day of observed weather at a coordinate. Missing readings stay `None`
/// and the day is skipped during aggregation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailySample {
    pub date: NaiveDate,
    pub temp_max_c: Option<f64>,
    pub temp_min_c: Option<f64>,
    pub precipitation_mm: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Hemisphere {
    Northern,
    Southern,
}

impl Hemisphere {
    pub fn from_latitude(lat: f64) -> Self {
        if lat >= 0.0 {
            Hemisphere::Northern
        } else {
            Hemisphere::Southern
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Autumn];

    pub fn for_month(month: u32, hemisphere: Hemisphere) -> Season {
        let northern = match month {
            12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            _ => Season::Autumn,
        };

        match hemisphere {
            Hemisphere::Northern => northern,
            Hemisphere::Southern => match northern {
                Season::Winter => Season::Summer,
                Season::Spring => Season::Autumn,
                Season::Summer => Season::Winter,
                Season::Autumn => Season::Spring,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VisitTier {
    Best,
    Good,
    Avoid,
}

impl VisitTier {
    pub fn from_score(score: u8) -> Self {
        if score >= 8 {
            VisitTier::Best
        } else if score >= 5 {
            VisitTier::Good
        } else {
            VisitTier::Avoid
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CrowdLevel {
    Low,
    Moderate,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyClimate {
    /// Calendar month, 1-12.
    pub month: u32,
    pub avg_temp_max_c: f64,
    pub avg_temp_min_c: f64,
    pub avg_precipitation_mm: f64,
    /// Number of daily samples behind the averages; 0 for table values.
    pub sample_days: u32,
    pub comfort_score: u8,
    pub tier: VisitTier,
}

impl MonthlyClimate {
    pub fn avg_temp_c(&self) -> f64 {
        (self.avg_temp_max_c + self.avg_temp_min_c) / 2.0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeasonSummary {
    pub season: Season,
    pub months: Vec<u32>,
    pub avg_comfort: f64,
    pub crowd_level: CrowdLevel,
    pub price_level: SeasonalPricing,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TravelSeasonReport {
    pub hemisphere: Hemisphere,
    pub months: Vec<MonthlyClimate>,
    pub best_months: Vec<u32>,
    pub good_months: Vec<u32>,
    pub avoid_months: Vec<u32>,
    pub seasons: Vec<SeasonSummary>,
}

impl TravelSeasonReport {
    pub fn season_for(&self, month: u32) -> Option<&SeasonSummary> {
        self.seasons.iter().find(|s| s.months.contains(&month))
    }

    /// Price pressure for a travel month, if that month is covered.
    pub fn price_level_for(&self, month: u32) -> Option<SeasonalPricing> {
        self.season_for(month).map(|s| s.price_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hemisphere_seasons_are_flipped() {
        assert_eq!(Season::for_month(7, Hemisphere::Northern), Season::Summer);
        assert_eq!(Season::for_month(7, Hemisphere::Southern), Season::Winter);
        assert_eq!(Season::for_month(12, Hemisphere::Southern), Season::Summer);
        assert_eq!(Season::for_month(4, Hemisphere::Southern), Season::Autumn);
    }

    #[test]
    fn test_tiers_partition_scores() {
        for score in 1..=10u8 {
            let tier = VisitTier::from_score(score);
            match score {
                8..=10 => assert_eq!(tier, VisitTier::Best),
                5..=7 => assert_eq!(tier, VisitTier::Good),
                _ => assert_eq!(tier, VisitTier::Avoid),
            }
        }
    }
}
