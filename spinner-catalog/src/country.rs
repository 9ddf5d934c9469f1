use serde::{Deserialize, Serialize};

/// Difficulty tier attached to every catalog entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AdventureLevel {
    Casual,
    Adventurous,
    Extreme,
}

/// Audience segment used to filter the catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TravelerType {
    Solo,
    Couple,
    Family,
    Friends,
    Business,
}

/// The style a user picks before spinning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TravelStyle {
    Romantic,
    Family,
    Solo,
}

impl TravelStyle {
    pub fn traveler_type(self) -> TravelerType {
        match self {
            TravelStyle::Romantic => TravelerType::Couple,
            TravelStyle::Family => TravelerType::Family,
            TravelStyle::Solo => TravelerType::Solo,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Europe,
    Asia,
    Africa,
    MiddleEast,
    NorthAmerica,
    SouthAmerica,
    Caribbean,
    Oceania,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Static country reference data. Bundled at compile time, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub coordinates: Coordinates,
    pub adventure_level: AdventureLevel,
    pub traveler_types: &'static [TravelerType],
    /// 1 (obscure) to 10 (very popular); drives spin probability.
    pub popularity: u8,
    pub region: Region,
    pub description: &'static str,
    pub capital: &'static str,
    pub currency: &'static str,
    pub languages: &'static [&'static str],
}

/// Common view over countries and destinations so filtering and weighted
/// selection work on either catalog.
pub trait CatalogEntry {
    /// Stable key stored in session exclusion lists.
    fn key(&self) -> &str;
    fn display_name(&self) -> &str;
    fn popularity(&self) -> u8;
    fn region(&self) -> Region;
    fn adventure_level(&self) -> AdventureLevel;
    fn traveler_types(&self) -> &[TravelerType];
    fn coordinates(&self) -> Coordinates;
}

impl CatalogEntry for Country {
    fn key(&self) -> &str {
        self.code
    }

    fn display_name(&self) -> &str {
        self.name
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_maps_to_traveler_type() {
        assert_eq!(TravelStyle::Romantic.traveler_type(), TravelerType::Couple);
        assert_eq!(TravelStyle::Family.traveler_type(), TravelerType::Family);
        assert_eq!(TravelStyle::Solo.traveler_type(), TravelerType::Solo);
    }

    #[test]
    fn test_enum_wire_names() {
        let region: Region = serde_json::from_str("\"north_america\"").unwrap();
        assert_eq!(region, Region::NorthAmerica);

        let level = serde_json::to_string(&AdventureLevel::Adventurous).unwrap();
        assert_eq!(level, "\"adventurous\"");
    }
}
