use std::sync::Arc;

use tokio::time::{interval, Duration, MissedTickBehavior};

use crate::AppState;

/// Rebuilds the portfolio snapshot every `every`. The first tick fires
/// immediately and is skipped since the state was loaded at startup.
pub async fn start_refresh_task(state: Arc<AppState>, every: Duration) {
    let mut interval = interval(every);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    interval.tick().await;

    loop {
        interval.tick().await;

        let snapshot = state.refresh().await;
        tracing::info!(
            "Refreshed portfolio snapshot: {} projects, {} experiences",
            snapshot.catalog.len(),
            snapshot.experiences.len()
        );
    }
}
