use std::sync::Arc;

use spinner_core::identity::IdentityProvider;
use spinner_core::repository::{SavedDestinationRepository, SpinHistoryRepository};
use spinner_spin::SpinService;
use spinner_store::app_config::RateLimitConfig;
use spinner_store::RedisClient;

use crate::insights::InsightsService;
use crate::metrics::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub spin: Arc<SpinService>,
    pub insights: Arc<InsightsService>,
    pub identity: Arc<dyn IdentityProvider>,
    pub saved_repo: Arc<dyn SavedDestinationRepository>,
    pub history_repo: Arc<dyn SpinHistoryRepository>,
    /// Rate limiting is skipped without Redis.
    pub redis: Option<Arc<RedisClient>>,
    pub rate_limit: RateLimitConfig,
    pub metrics: Arc<Metrics>,
}
