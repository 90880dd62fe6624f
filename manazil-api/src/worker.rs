use std::sync::Arc;
use manazil_store::SessionRegistry;
use tokio::time::{interval, Duration, MissedTickBehavior};
use tracing::{debug, info};

/// Periodically drop booking sessions their travelers walked away from
pub async fn start_session_sweeper(sessions: Arc<SessionRegistry>, every: Duration) {
    let mut ticker = interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!("Session sweeper started, running every {:?}", every);

    loop {
        ticker.tick().await;
        let expired = sessions.sweep_idle().await;
        debug!("Sweep finished: {} expired", expired);
    }
}
