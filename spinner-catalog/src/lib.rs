pub mod country;
pub mod destination;
pub mod data;
pub mod filter;
pub mod visa;
pub mod budget;

pub use country::{AdventureLevel, CatalogEntry, Coordinates, Country, Region, TravelStyle, TravelerType};
pub use destination::{DailyBudget, Destination};
pub use data::{countries, destinations, find_country, find_destination};
pub use filter::CatalogFilter;
pub use budget::{BudgetConfig, BudgetError, BudgetEstimate, BudgetEstimator, BudgetRequest, SeasonalPricing};
pub use visa::{VisaInfo, VisaRequirement};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Country not found: {0}")]
    CountryNotFound(String),

    #[error("Destination not found: {0}")]
    DestinationNotFound(String),
}

pub fn require_country(code: &str) -> Result<&'static Country, CatalogError> {
    find_country(code).ok_or_else(|| CatalogError::CountryNotFound(code.to_string()))
}

pub fn require_destination(id: &str) -> Result<&'static Destination, CatalogError> {
    find_destination(id).ok_or_else(|| CatalogError::DestinationNotFound(id.to_string()))
}
