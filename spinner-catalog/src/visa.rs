use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VisaRequirement {
    /// Passport and destination are the same country.
    NotRequired,
    VisaFree,
    VisaOnArrival,
    /// Online visa or electronic travel authorisation before departure.
    EVisa,
    VisaRequired,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VisaInfo {
    pub passport: String,
    pub destination: String,
    pub requirement: VisaRequirement,
    pub max_stay_days: Option<u16>,
    pub note: String,
}

struct VisaRule {
    passport: &'static str,
    destination: &'static str,
    requirement: VisaRequirement,
    max_stay_days: Option<u16>,
    note: &'static str,
}

const fn rule(
    passport: &'static str,
    destination: &'static str,
    requirement: VisaRequirement,
    max_stay_days: u16,
    note: &'static str,
) -> VisaRule {
    VisaRule {
        passport,
        destination,
        requirement,
        max_stay_days: Some(max_stay_days),
        note,
    }
}

use self::VisaRequirement::{EVisa, VisaFree, VisaOnArrival, VisaRequired};

const SCHENGEN: &str = "Counts toward the 90/180-day Schengen limit.";

static RULES: &[VisaRule] = &[
    // US passport
    rule("US", "FR", VisaFree, 90, SCHENGEN),
    rule("US", "IT", VisaFree, 90, SCHENGEN),
    rule("US", "ES", VisaFree, 90, SCHENGEN),
    rule("US", "GR", VisaFree, 90, SCHENGEN),
    rule("US", "PT", VisaFree, 90, SCHENGEN),
    rule("US", "IS", VisaFree, 90, SCHENGEN),
    rule("US", "NO", VisaFree, 90, SCHENGEN),
    rule("US", "CH", VisaFree, 90, SCHENGEN),
    rule("US", "HR", VisaFree, 90, SCHENGEN),
    rule("US", "GB", EVisa, 180, "Electronic Travel Authorisation required before boarding."),
    rule("US", "JP", VisaFree, 90, ""),
    rule("US", "TH", VisaFree, 60, ""),
    rule("US", "VN", EVisa, 90, "Apply online at least a week before travel."),
    rule("US", "ID", VisaOnArrival, 30, "Extendable once for another 30 days."),
    rule("US", "NP", VisaOnArrival, 90, "Fee depends on length of stay."),
    rule("US", "IN", EVisa, 90, ""),
    rule("US", "MV", VisaOnArrival, 30, "Free on arrival with a confirmed booking."),
    rule("US", "SG", VisaFree, 90, ""),
    rule("US", "KR", VisaFree, 90, ""),
    rule("US", "MA", VisaFree, 90, ""),
    rule("US", "EG", VisaOnArrival, 30, "An e-visa is also available."),
    rule("US", "KE", EVisa, 90, "Electronic Travel Authorisation required."),
    rule("US", "TZ", EVisa, 90, ""),
    rule("US", "ZA", VisaFree, 90, ""),
    rule("US", "AE", VisaOnArrival, 30, ""),
    rule("US", "JO", VisaOnArrival, 30, "Covered by the Jordan Pass when staying 3+ nights."),
    rule("US", "CA", VisaFree, 180, ""),
    rule("US", "MX", VisaFree, 180, ""),
    rule("US", "CR", VisaFree, 180, ""),
    rule("US", "PE", VisaFree, 183, ""),
    rule("US", "AR", VisaFree, 90, ""),
    rule("US", "BR", EVisa, 90, ""),
    rule("US", "CL", VisaFree, 90, ""),
    rule("US", "CU", VisaRequired, 30, "Tourist card plus an authorised travel category."),
    rule("US", "JM", VisaFree, 90, ""),
    rule("US", "AU", EVisa, 90, "ETA via the official app."),
    rule("US", "NZ", EVisa, 90, "NZeTA plus tourism levy."),
    rule("US", "FJ", VisaFree, 120, ""),
    // GB passport
    rule("GB", "FR", VisaFree, 90, SCHENGEN),
    rule("GB", "IT", VisaFree, 90, SCHENGEN),
    rule("GB", "ES", VisaFree, 90, SCHENGEN),
    rule("GB", "GR", VisaFree, 90, SCHENGEN),
    rule("GB", "PT", VisaFree, 90, SCHENGEN),
    rule("GB", "JP", VisaFree, 90, ""),
    rule("GB", "TH", VisaFree, 60, ""),
    rule("GB", "US", EVisa, 90, "ESTA required before boarding."),
    rule("GB", "CA", EVisa, 180, "eTA required when flying in."),
    rule("GB", "AU", EVisa, 90, "eVisitor visa, free of charge."),
    rule("GB", "MX", VisaFree, 180, ""),
    rule("GB", "MA", VisaFree, 90, ""),
    rule("GB", "AE", VisaOnArrival, 30, ""),
    rule("GB", "IN", EVisa, 90, ""),
    // IN passport
    rule("IN", "TH", VisaFree, 60, ""),
    rule("IN", "MV", VisaOnArrival, 90, ""),
    rule("IN", "NP", VisaFree, 180, "No visa needed for Indian citizens."),
    rule("IN", "ID", VisaOnArrival, 30, ""),
    rule("IN", "SG", EVisa, 30, "Apply through an authorised agent."),
    rule("IN", "AE", EVisa, 30, ""),
    rule("IN", "FR", VisaRequired, 90, "Schengen visa from the French consulate."),
    rule("IN", "US", VisaRequired, 180, "B-2 visitor visa with interview."),
    rule("IN", "GB", VisaRequired, 180, "Standard Visitor visa."),
];

/// Entry requirement for a passport holder visiting a destination country.
/// Pairs missing from the table resolve to `VisaRequired` so callers never
/// under-warn.
pub fn requirement(passport: &str, destination: &str) -> VisaInfo {
    let passport = passport.trim().to_ascii_uppercase();
    let destination = destination.trim().to_ascii_uppercase();

    if passport == destination {
        return VisaInfo {
            passport,
            destination,
            requirement: VisaRequirement::NotRequired,
            max_stay_days: None,
            note: "Domestic travel.".to_string(),
        };
    }

    match RULES
        .iter()
        .find(|r| r.passport == passport && r.destination == destination)
    {
        Some(r) => VisaInfo {
            passport,
            destination,
            requirement: r.requirement,
            max_stay_days: r.max_stay_days,
            note: r.note.to_string(),
        },
        None => VisaInfo {
            passport,
            destination,
            requirement: VisaRequirement::VisaRequired,
            max_stay_days: None,
            note: "No data for this passport; check with the embassy before booking.".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_pair() {
        let info = requirement("us", "jp");
        assert_eq!(info.requirement, VisaRequirement::VisaFree);
        assert_eq!(info.max_stay_days, Some(90));
        assert_eq!(info.passport, "US");
    }

    #[test]
    fn test_same_country_is_domestic() {
        let info = requirement("AU", "AU");
        assert_eq!(info.requirement, VisaRequirement::NotRequired);
    }

    #[test]
    fn test_unknown_pair_defaults_to_required() {
        let info = requirement("BR", "NP");
        assert_eq!(info.requirement, VisaRequirement::VisaRequired);
        assert!(info.max_stay_days.is_none());
        assert!(info.note.contains("embassy"));
    }
}
