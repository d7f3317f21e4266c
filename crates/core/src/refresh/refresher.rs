//! Single-flight portfolio refresh.

use chrono::Utc;
use cryptofolio_market_data::{MarketAsset, MarketDataProvider, MarketsQuery};
use log::{debug, error, info, warn};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use super::refresh_model::{DashboardState, RefreshOutcome};
use crate::alerts::AlertServiceTrait;
use crate::errors::Result;
use crate::portfolio::{
    aggregate_portfolio, HoldingsRepositoryTrait, Portfolio, PortfolioOutcome, SecondaryCurrency,
};

/// Runs fetch cycles and keeps the resulting [`DashboardState`].
///
/// At most one cycle runs at a time; a call made while another is in flight
/// returns [`RefreshOutcome::Skipped`]. A cycle that finishes after
/// [`reset`](Self::reset) discards its result; if a call was skipped while it
/// ran, one more cycle runs for that caller before the lock is released.
pub struct PortfolioRefresher {
    provider: Arc<dyn MarketDataProvider>,
    holdings: Arc<dyn HoldingsRepositoryTrait>,
    alerts: Option<Arc<dyn AlertServiceTrait>>,
    query: MarketsQuery,
    secondary: SecondaryCurrency,
    state: RwLock<DashboardState>,
    in_flight: tokio::sync::Mutex<()>,
    generation: AtomicU64,
    pending: Mutex<Option<String>>,
}

impl PortfolioRefresher {
    pub fn new(
        provider: Arc<dyn MarketDataProvider>,
        holdings: Arc<dyn HoldingsRepositoryTrait>,
        alerts: Option<Arc<dyn AlertServiceTrait>>,
        query: MarketsQuery,
        secondary: SecondaryCurrency,
    ) -> Self {
        Self {
            provider,
            holdings,
            alerts,
            query,
            secondary,
            state: RwLock::new(DashboardState::default()),
            in_flight: tokio::sync::Mutex::new(()),
            generation: AtomicU64::new(0),
            pending: Mutex::new(None),
        }
    }

    pub async fn refresh(&self, user_id: &str) -> RefreshOutcome {
        let Ok(_guard) = self.in_flight.try_lock() else {
            debug!("Refresh for {} skipped: a cycle is already running", user_id);
            *self.pending.lock().unwrap_or_else(PoisonError::into_inner) =
                Some(user_id.to_string());
            return RefreshOutcome::Skipped;
        };
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        let mut user_id = user_id.to_string();
        loop {
            let generation = self.generation.load(Ordering::SeqCst);
            let outcome = self.run_and_store(&user_id, generation).await;

            let pending = self
                .pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .take();
            match pending {
                Some(next) if self.generation.load(Ordering::SeqCst) != generation => {
                    debug!("Running skipped refresh for {} after reset", next);
                    user_id = next;
                }
                _ => return outcome,
            }
        }
    }

    async fn run_and_store(&self, user_id: &str, generation: u64) -> RefreshOutcome {
        self.update(generation, |state| state.loading = true);

        match self.run_cycle(user_id).await {
            Ok((markets, portfolio)) => {
                info!(
                    "Refreshed portfolio for {}: {} assets, total {}",
                    user_id,
                    portfolio.assets.len(),
                    portfolio.total_value
                );
                self.update(generation, |state| {
                    state.markets = markets.clone();
                    state.portfolio = Some(portfolio);
                    state.loading = false;
                    state.error = None;
                    state.last_updated = Some(Utc::now());
                });
                self.evaluate_alerts(&markets).await;
                RefreshOutcome::Completed
            }
            Err(e) => {
                let message = e.user_message();
                error!("Refresh for {} failed: {}", user_id, e);
                self.update(generation, |state| {
                    state.loading = false;
                    state.error = Some(message.clone());
                });
                RefreshOutcome::Failed(message)
            }
        }
    }

    async fn run_cycle(&self, user_id: &str) -> Result<(Vec<MarketAsset>, Portfolio)> {
        let markets = self.provider.fetch_markets(&self.query).await?;
        let holdings = self.holdings.get_holdings(user_id).await?;
        let portfolio = aggregate_portfolio(&markets, &holdings, &self.secondary);
        Ok((markets, portfolio))
    }

    async fn evaluate_alerts(&self, markets: &[MarketAsset]) {
        let Some(alerts) = &self.alerts else {
            return;
        };
        match alerts.evaluate(markets).await {
            Ok(triggered) if !triggered.is_empty() => {
                info!("{} alert(s) triggered", triggered.len());
            }
            Ok(_) => {}
            Err(e) => warn!("Alert evaluation failed: {}", e),
        }
    }

    /// Applies `apply` unless a reset happened since `generation` was read.
    fn update(&self, generation: u64, apply: impl FnOnce(&mut DashboardState)) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!("Discarding result of a cycle started before reset");
            return;
        }
        apply(&mut state);
    }

    pub fn state(&self) -> DashboardState {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn outcome(&self) -> PortfolioOutcome {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .outcome()
    }

    /// Clears all state, e.g. on sign-out.
    pub fn reset(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        self.generation.fetch_add(1, Ordering::SeqCst);
        *state = DashboardState::default();
    }
}
