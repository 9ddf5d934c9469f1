use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use spinner_catalog::{CatalogFilter, Country, Destination};
use uuid::Uuid;

/// Which catalog a spin draws from.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SpinTarget {
    #[default]
    Country,
    Destination,
}

impl SpinTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            SpinTarget::Country => "country",
            SpinTarget::Destination => "destination",
        }
    }
}

/// Ephemeral per-visitor spin state. Seen keys are kept per target so a
/// country spin never exhausts the destination list and vice versa.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpinSession {
    pub id: Uuid,
    pub preferences: CatalogFilter,
    pub seen_countries: Vec<String>,
    pub seen_destinations: Vec<String>,
    pub spin_count: u32,
    pub created_at: DateTime<Utc>,
    pub last_active_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SpinSession {
    pub fn new(preferences: CatalogFilter, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            preferences,
            seen_countries: Vec::new(),
            seen_destinations: Vec::new(),
            spin_count: 0,
            created_at: now,
            last_active_at: now,
            expires_at: now + ttl,
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Slide the expiry window forward from `now`.
    pub fn touch(&mut self, now: DateTime<Utc>, ttl: Duration) {
        self.last_active_at = now;
        self.expires_at = now + ttl;
    }

    pub fn seen(&self, target: SpinTarget) -> &[String] {
        match target {
            SpinTarget::Country => &self.seen_countries,
            SpinTarget::Destination => &self.seen_destinations,
        }
    }

    pub fn seen_mut(&mut self, target: SpinTarget) -> &mut Vec<String> {
        match target {
            SpinTarget::Country => &mut self.seen_countries,
            SpinTarget::Destination => &mut self.seen_destinations,
        }
    }

    pub fn clear_seen(&mut self) {
        self.seen_countries.clear();
        self.seen_destinations.clear();
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SpinRequest {
    #[serde(default)]
    pub session_id: Option<Uuid>,
    #[serde(default)]
    pub target: SpinTarget,
    #[serde(flatten)]
    pub filter: CatalogFilter,
}

/// The entry a spin landed on.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", content = "item", rename_all = "snake_case")]
pub enum SpinPick {
    Country(&'static Country),
    Destination(&'static Destination),
}

impl SpinPick {
    pub fn key(&self) -> &'static str {
        match self {
            SpinPick::Country(c) => c.code,
            SpinPick::Destination(d) => d.id,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SpinPick::Country(c) => c.name,
            SpinPick::Destination(d) => d.city,
        }
    }

    pub fn target(&self) -> SpinTarget {
        match self {
            SpinPick::Country(_) => SpinTarget::Country,
            SpinPick::Destination(_) => SpinTarget::Destination,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SpinOutcome {
    pub session_id: Uuid,
    pub pick: SpinPick,
    /// True when the seen list was exhausted and cleared for this spin.
    pub was_reset: bool,
    pub seen_count: usize,
    /// Candidates under the current filter not yet seen this cycle.
    pub remaining: usize,
    pub total_candidates: usize,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use spinner_catalog::find_country;

    #[test]
    fn test_session_expiry_slides() {
        let now = Utc::now();
        let ttl = Duration::minutes(30);
        let mut session = SpinSession::new(CatalogFilter::default(), now, ttl);

        assert!(!session.is_expired(now + Duration::minutes(29)));
        assert!(session.is_expired(now + Duration::minutes(30)));

        session.touch(now + Duration::minutes(20), ttl);
        assert!(!session.is_expired(now + Duration::minutes(45)));
    }

    #[test]
    fn test_seen_lists_are_separate() {
        let mut session = SpinSession::new(CatalogFilter::default(), Utc::now(), Duration::minutes(30));
        session.seen_mut(SpinTarget::Country).push("FR".into());

        assert_eq!(session.seen(SpinTarget::Country), ["FR".to_string()]);
        assert!(session.seen(SpinTarget::Destination).is_empty());
    }

    #[test]
    fn test_request_accepts_flat_filter_fields() {
        let request: SpinRequest = serde_json::from_value(serde_json::json!({
            "target": "destination",
            "style": "romantic",
            "region": "europe"
        }))
        .unwrap();

        assert_eq!(request.target, SpinTarget::Destination);
        assert!(request.session_id.is_none());
        assert_eq!(request.filter.region, Some(spinner_catalog::Region::Europe));
    }

    #[test]
    fn test_pick_serializes_with_kind() {
        let pick = SpinPick::Country(find_country("JP").unwrap());
        let json = serde_json::to_value(pick).unwrap();

        assert_eq!(json["kind"], "country");
        assert_eq!(json["item"]["code"], "JP");
        assert_eq!(pick.key(), "JP");
    }
}
