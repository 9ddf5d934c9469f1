use crate::bucketer::build_report;
use crate::models::{MonthlyClimate, TravelSeasonReport};
use crate::WeatherError;

/// Broad climate band by absolute latitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimateZone {
    Tropical,
    Subtropical,
    Temperate,
    Polar,
}

impl ClimateZone {
    pub fn from_latitude(lat: f64) -> Self {
        let abs = lat.abs();
        if abs < 23.5 {
            ClimateZone::Tropical
        } else if abs < 35.0 {
            ClimateZone::Subtropical
        } else if abs < 55.0 {
            ClimateZone::Temperate
        } else {
            ClimateZone::Polar
        }
    }

    /// Typical (max °C, min °C, precipitation mm/day) per month, written
    /// for the northern hemisphere.
    fn table(self) -> &'static [(f64, f64, f64); 12] {
        match self {
            ClimateZone::Tropical => &TROPICAL,
            ClimateZone::Subtropical => &SUBTROPICAL,
            ClimateZone::Temperate => &TEMPERATE,
            ClimateZone::Polar => &POLAR,
        }
    }
}

// Tropical rows follow a monsoon pattern: hot dry spring, wet late summer.
const TROPICAL: [(f64, f64, f64); 12] = [
    (31.0, 23.0, 2.0),
    (32.0, 23.0, 1.5),
    (33.0, 24.0, 1.5),
    (34.0, 25.0, 2.5),
    (33.0, 25.0, 5.0),
    (32.0, 25.0, 7.5),
    (31.0, 25.0, 8.5),
    (31.0, 25.0, 9.0),
    (31.0, 24.0, 8.5),
    (31.0, 24.0, 6.5),
    (31.0, 23.0, 4.0),
    (30.0, 23.0, 2.5),
];

const SUBTROPICAL: [(f64, f64, f64); 12] = [
    (17.0, 7.0, 2.0),
    (18.0, 8.0, 2.0),
    (21.0, 10.0, 1.8),
    (24.0, 13.0, 1.2),
    (28.0, 17.0, 0.8),
    (32.0, 21.0, 0.3),
    (34.0, 23.0, 0.2),
    (34.0, 23.0, 0.3),
    (31.0, 20.0, 0.8),
    (26.0, 16.0, 1.5),
    (21.0, 11.0, 2.0),
    (18.0, 8.0, 2.2),
];

const TEMPERATE: [(f64, f64, f64); 12] = [
    (6.0, 0.0, 2.0),
    (8.0, 0.0, 1.8),
    (12.0, 3.0, 1.8),
    (16.0, 6.0, 1.9),
    (20.0, 10.0, 2.2),
    (24.0, 13.0, 2.2),
    (26.0, 15.0, 2.0),
    (26.0, 15.0, 2.2),
    (22.0, 12.0, 2.0),
    (16.0, 8.0, 2.4),
    (10.0, 4.0, 2.5),
    (7.0, 1.0, 2.3),
];

const POLAR: [(f64, f64, f64); 12] = [
    (-2.0, -7.0, 2.5),
    (-1.0, -7.0, 2.2),
    (2.0, -5.0, 2.0),
    (6.0, -1.0, 1.6),
    (11.0, 3.0, 1.5),
    (15.0, 7.0, 1.6),
    (18.0, 10.0, 1.9),
    (17.0, 9.0, 2.3),
    (12.0, 6.0, 2.6),
    (7.0, 2.0, 2.8),
    (2.0, -3.0, 2.6),
    (-1.0, -6.0, 2.6),
];

/// Table climate for all twelve months at a latitude. Southern latitudes are
/// shifted by six months.
pub fn fallback_months(latitude: f64) -> Vec<MonthlyClimate> {
    let table = ClimateZone::from_latitude(latitude).table();
    let southern = latitude < 0.0;

    (1..=12u32)
        .map(|month| {
            let row = if southern { (month + 5) % 12 + 1 } else { month };
            let (max, min, precipitation) = table[(row - 1) as usize];
            MonthlyClimate::from_averages(month, max, min, precipitation, 0)
        })
        .collect()
}

/// Seasonal report from the zone table, used when live history is unavailable.
pub fn fallback_report(latitude: f64) -> Result<TravelSeasonReport, WeatherError> {
    build_report(latitude, fallback_months(latitude))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Hemisphere, Season, VisitTier};
    use spinner_catalog::SeasonalPricing;

    #[test]
    fn test_zone_boundaries() {
        assert_eq!(ClimateZone::from_latitude(0.0), ClimateZone::Tropical);
        assert_eq!(ClimateZone::from_latitude(-23.4), ClimateZone::Tropical);
        assert_eq!(ClimateZone::from_latitude(23.5), ClimateZone::Subtropical);
        assert_eq!(ClimateZone::from_latitude(-41.0), ClimateZone::Temperate);
        assert_eq!(ClimateZone::from_latitude(64.1), ClimateZone::Polar);
    }

    #[test]
    fn test_southern_months_are_shifted() {
        let north = fallback_months(48.0);
        let south = fallback_months(-48.0);

        // January in the south looks like July in the north.
        assert_eq!(south[0].avg_temp_max_c, north[6].avg_temp_max_c);
        assert_eq!(south[6].avg_temp_max_c, north[0].avg_temp_max_c);
        assert!(south.iter().all(|m| m.sample_days == 0));
    }

    #[test]
    fn test_temperate_report_prefers_summer() {
        let report = fallback_report(48.8).unwrap();

        assert_eq!(report.months.len(), 12);
        assert_eq!(report.hemisphere, Hemisphere::Northern);
        assert!(report.best_months.contains(&7));
        assert_eq!(report.months[0].tier, VisitTier::Avoid);

        let summer = report.seasons.iter().find(|s| s.season == Season::Summer).unwrap();
        assert_eq!(summer.price_level, SeasonalPricing::Peak);
    }

    #[test]
    fn test_southern_report_has_december_summer() {
        let report = fallback_report(-33.9).unwrap();
        assert_eq!(report.hemisphere, Hemisphere::Southern);
        assert_eq!(report.season_for(12).map(|s| s.season), Some(Season::Summer));
    }

    #[test]
    fn test_out_of_range_latitude_is_rejected() {
        assert!(fallback_report(120.0).is_err());
    }
}
