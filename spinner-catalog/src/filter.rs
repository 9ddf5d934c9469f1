use serde::{Deserialize, Serialize};

use crate::country::{AdventureLevel, CatalogEntry, Country, Region, TravelStyle};
use crate::data::{countries, destinations};
use crate::destination::Destination;

/// User-chosen criteria narrowing the catalog before a spin. Every field is
/// optional; an empty filter matches everything.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogFilter {
    pub style: Option<TravelStyle>,
    pub region: Option<Region>,
    pub adventure_level: Option<AdventureLevel>,
}

impl CatalogFilter {
    pub fn for_style(style: TravelStyle) -> Self {
        Self {
            style: Some(style),
            ..Default::default()
        }
    }

    pub fn matches<E: CatalogEntry + ?Sized>(&self, entry: &E) -> bool {
        if let Some(style) = self.style {
            if !entry.traveler_types().contains(&style.traveler_type()) {
                return false;
            }
        }
        if let Some(region) = self.region {
            if entry.region() != region {
                return false;
            }
        }
        if let Some(level) = self.adventure_level {
            if entry.adventure_level() != level {
                return false;
            }
        }
        true
    }

    /// Entries that pass the filter, in catalog order.
    pub fn apply<'a, E: CatalogEntry>(&self, entries: &'a [E]) -> Vec<&'a E> {
        entries.iter().filter(|e| self.matches(*e)).collect()
    }

    pub fn filter_countries(&self) -> Vec<&'static Country> {
        self.apply(countries())
    }

    pub fn filter_destinations(&self) -> Vec<&'static Destination> {
        self.apply(destinations())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TravelerType;

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = CatalogFilter::default();
        assert_eq!(filter.apply(countries()).len(), countries().len());
    }

    #[test]
    fn test_romantic_filter_only_returns_couple_friendly() {
        let filter = CatalogFilter::for_style(TravelStyle::Romantic);
        let matched = filter.apply(countries());

        assert!(!matched.is_empty());
        for country in matched {
            assert!(country.traveler_types.contains(&TravelerType::Couple), "{}", country.code);
        }
    }

    #[test]
    fn test_combined_criteria() {
        let filter = CatalogFilter {
            style: Some(TravelStyle::Solo),
            region: Some(Region::SouthAmerica),
            adventure_level: Some(AdventureLevel::Extreme),
        };

        let codes: Vec<_> = filter.filter_countries().iter().map(|c| c.code).collect();
        assert_eq!(codes, vec!["PE", "CL"]);
    }

    #[test]
    fn test_filter_applies_to_destinations() {
        let filter = CatalogFilter {
            style: Some(TravelStyle::Romantic),
            region: Some(Region::Asia),
            adventure_level: Some(AdventureLevel::Casual),
        };

        let ids: Vec<_> = filter.filter_destinations().iter().map(|d| d.id).collect();
        assert!(ids.contains(&"north-male-atoll-mv"));
        assert!(!ids.contains(&"bangkok-th"));
    }

    #[test]
    fn test_filter_can_match_nothing() {
        let filter = CatalogFilter {
            style: Some(TravelStyle::Family),
            region: Some(Region::Caribbean),
            adventure_level: Some(AdventureLevel::Extreme),
        };
        assert!(filter.apply(countries()).is_empty());
    }
}
