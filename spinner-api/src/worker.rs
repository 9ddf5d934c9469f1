use std::sync::Arc;

use spinner_spin::SpinService;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info};

use crate::insights::InsightsService;
use crate::metrics::Metrics;

/// Sweeps expired spin sessions and stale insight cache entries on a fixed
/// interval. Runs until the runtime shuts down.
pub async fn start_cleanup_worker(
    spin: Arc<SpinService>,
    insights: Arc<InsightsService>,
    metrics: Arc<Metrics>,
    every: Duration,
) {
    let mut ticker = interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!("Cleanup worker started, sweeping every {:?}", every);

    loop {
        ticker.tick().await;

        let removed = spin.cleanup_expired().await;
        let purged = insights.purge_caches().await;
        let active = spin.active_sessions().await;
        metrics.active_sessions.set(active as i64);

        if removed > 0 || purged > 0 {
            info!("Removed {} expired sessions and {} cache entries", removed, purged);
        } else {
            debug!("Cleanup sweep found nothing, {} sessions active", active);
        }
    }
}
