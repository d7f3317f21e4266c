//! Background scheduler for periodic portfolio refresh.
//!
//! Ticks every `refresh_interval` (first tick immediate) and on sign-in.

use std::sync::Arc;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use cryptofolio_core::refresh::RefreshOutcome;

use crate::main_lib::AppState;

/// Starts the background refresh scheduler.
pub fn start_refresh_scheduler(state: Arc<AppState>) {
    tokio::spawn(async move {
        info!(
            "Portfolio refresh scheduler started ({}s interval)",
            state.refresh_interval.as_secs()
        );

        let mut ticker = interval(state.refresh_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = state.refresh_wake.notified() => {
                    ticker.reset();
                }
            }
            run_scheduled_refresh(&state).await;
        }
    });
}

/// Runs a single refresh for the signed-in user, if any.
pub async fn run_scheduled_refresh(state: &AppState) -> Option<RefreshOutcome> {
    let Some(session) = state.session.current() else {
        debug!("Scheduled refresh skipped: nobody is signed in");
        return None;
    };

    let outcome = state.refresher.refresh(&session.user_id).await;
    match &outcome {
        RefreshOutcome::Completed => debug!("Scheduled refresh completed"),
        RefreshOutcome::Skipped => debug!("Scheduled refresh skipped: cycle in flight"),
        RefreshOutcome::Failed(message) => warn!("Scheduled refresh failed: {}", message),
    }
    Some(outcome)
}
