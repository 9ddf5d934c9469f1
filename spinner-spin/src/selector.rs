use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use spinner_catalog::CatalogEntry;

use crate::SpinError;

#[derive(Debug, Clone, Copy)]
pub struct Selection<'a, E> {
    pub item: &'a E,
    /// The seen set covered every candidate and was ignored for this pick;
    /// the caller should clear it.
    pub was_reset: bool,
}

/// Picks one candidate with probability proportional to its popularity,
/// skipping keys in `seen`. When every candidate has been seen the exclusion
/// list is dropped for this pick and `was_reset` is set.
pub fn select<'a, E, R>(candidates: &[&'a E], seen: &[String], rng: &mut R) -> Result<Selection<'a, E>, SpinError>
where
    E: CatalogEntry,
    R: Rng + ?Sized,
{
    if candidates.is_empty() {
        return Err(SpinError::NoMatches);
    }

    let fresh: Vec<&'a E> = candidates
        .iter()
        .copied()
        .filter(|c| !seen.iter().any(|s| s == c.key()))
        .collect();

    let (pool, was_reset) = if fresh.is_empty() {
        (candidates.to_vec(), true)
    } else {
        (fresh, false)
    };

    let item = weighted_pick(&pool, rng);
    Ok(Selection { item, was_reset })
}

/// Weighted draw over a non-empty pool. Zero-weight entries only come up when
/// the whole pool is zero-weight, in which case the draw is uniform.
fn weighted_pick<'a, E, R>(pool: &[&'a E], rng: &mut R) -> &'a E
where
    E: CatalogEntry,
    R: Rng + ?Sized,
{
    let weights = pool.iter().map(|e| e.popularity() as u32);
    match WeightedIndex::new(weights) {
        Ok(dist) => pool[dist.sample(rng)],
        Err(_) => pool[rng.gen_range(0..pool.len())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use spinner_catalog::{AdventureLevel, CatalogFilter, Coordinates, Region, TravelStyle, TravelerType};
    use std::collections::HashMap;

    #[derive(Debug)]
    struct Entry {
        key: &'static str,
        weight: u8,
    }

    impl CatalogEntry for Entry {
        fn key(&self) -> &str {
            self.key
        }
        fn display_name(&self) -> &str {
            self.key
        }
        fn popularity(&self) -> u8 {
            self.weight
        }
        fn region(&self) -> Region {
            Region::Europe
        }
        fn adventure_level(&self) -> AdventureLevel {
            AdventureLevel::Casual
        }
        fn traveler_types(&self) -> &[TravelerType] {
            &[TravelerType::Solo]
        }
        fn coordinates(&self) -> Coordinates {
            Coordinates::new(0.0, 0.0)
        }
    }

    fn entries(weights: &[(&'static str, u8)]) -> Vec<Entry> {
        weights.iter().map(|&(key, weight)| Entry { key, weight }).collect()
    }

    #[test]
    fn test_empty_candidates_is_no_match() {
        let mut rng = StdRng::seed_from_u64(1);
        let candidates: Vec<&Entry> = Vec::new();
        let err = select(&candidates, &[], &mut rng).unwrap_err();
        assert_eq!(err, SpinError::NoMatches);
    }

    #[test]
    fn test_never_returns_seen_while_fresh_remain() {
        let items = entries(&[("a", 5), ("b", 5), ("c", 5)]);
        let candidates: Vec<&Entry> = items.iter().collect();
        let seen = vec!["a".to_string(), "b".to_string()];
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..200 {
            let selection = select(&candidates, &seen, &mut rng).unwrap();
            assert_eq!(selection.item.key, "c");
            assert!(!selection.was_reset);
        }
    }

    #[test]
    fn test_exhaustion_resets_exactly_once() {
        let items = entries(&[("a", 3), ("b", 7), ("c", 1)]);
        let candidates: Vec<&Entry> = items.iter().collect();
        let mut seen: Vec<String> = Vec::new();
        let mut rng = StdRng::seed_from_u64(3);
        let mut resets = 0;

        for _ in 0..6 {
            let selection = select(&candidates, &seen, &mut rng).unwrap();
            if selection.was_reset {
                resets += 1;
                seen.clear();
            }
            assert!(!seen.iter().any(|s| s == selection.item.key));
            seen.push(selection.item.key.to_string());
        }

        // Three picks, reset on the fourth, three more picks.
        assert_eq!(resets, 1);
    }

    #[test]
    fn test_zero_weight_skipped_unless_all_zero() {
        let mixed = entries(&[("never", 0), ("always", 4)]);
        let candidates: Vec<&Entry> = mixed.iter().collect();
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..500 {
            assert_eq!(select(&candidates, &[], &mut rng).unwrap().item.key, "always");
        }

        let zeros = entries(&[("x", 0), ("y", 0)]);
        let candidates: Vec<&Entry> = zeros.iter().collect();
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for _ in 0..2000 {
            *counts.entry(select(&candidates, &[], &mut rng).unwrap().item.key).or_default() += 1;
        }
        assert!(counts["x"] > 800 && counts["y"] > 800, "{:?}", counts);
    }

    #[test]
    fn test_frequency_tracks_weight() {
        let items = entries(&[("low", 1), ("mid", 3), ("high", 6)]);
        let candidates: Vec<&Entry> = items.iter().collect();
        let mut rng = StdRng::seed_from_u64(42);
        let trials = 20_000;

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for _ in 0..trials {
            *counts.entry(select(&candidates, &[], &mut rng).unwrap().item.key).or_default() += 1;
        }

        for (key, weight) in [("low", 1.0), ("mid", 3.0), ("high", 6.0)] {
            let observed = counts[key] as f64 / trials as f64;
            let expected = weight / 10.0;
            assert!((observed - expected).abs() < 0.02, "{key}: observed {observed}, expected {expected}");
        }
    }

    #[test]
    fn test_pick_stays_inside_filtered_catalog() {
        let filter = CatalogFilter {
            style: Some(TravelStyle::Romantic),
            region: Some(Region::Europe),
            adventure_level: None,
        };
        let candidates = filter.filter_countries();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..300 {
            let selection = select(&candidates, &[], &mut rng).unwrap();
            assert!(filter.matches(selection.item));
        }
    }
}
