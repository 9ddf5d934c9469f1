use serde::Serialize;

use crate::country::{AdventureLevel, CatalogEntry, Coordinates, Region, TravelerType};

/// Per-person daily spend in USD for each comfort tier.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DailyBudget {
    pub budget: u32,
    pub mid_range: u32,
    pub luxury: u32,
}

/// City-level catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct Destination {
    /// Slug, e.g. `kyoto-jp`.
    pub id: &'static str,
    pub city: &'static str,
    pub country_code: &'static str,
    pub coordinates: Coordinates,
    pub region: Region,
    pub adventure_level: AdventureLevel,
    pub traveler_types: &'static [TravelerType],
    pub popularity: u8,
    pub daily_budget_usd: DailyBudget,
    pub activities: &'static [&'static str],
    /// Keyword handed to the photo search provider.
    pub photo_keyword: &'static str,
}

impl Destination {
    /// Bundled placeholder image served when photo search is unavailable.
    pub fn fallback_photo_path(&self) -> String {
        format!("/images/destinations/{}.jpg", self.id)
    }
}

impl CatalogEntry for Destination {
    fn key(&self) -> &str {
        self.id
    }

    fn display_name(&self) -> &str {
        self.city
    }

    fn popularity(&self) -> u8 {
        self.popularity
    }

    fn region(&self) -> Region {
        self.region
    }

    fn adventure_level(&self) -> AdventureLevel {
        self.adventure_level
    }

    fn traveler_types(&self) -> &[TravelerType] {
        self.traveler_types
    }

    fn coordinates(&self) -> Coordinates {
        self.coordinates
    }
}
