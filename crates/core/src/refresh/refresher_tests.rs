#[cfg(test)]
mod tests {
    use crate::alerts::{AlertService, AlertServiceTrait, AlertType, InMemoryAlertRepository, NewAlert};
    use crate::portfolio::{Holding, PortfolioOutcome, SecondaryCurrency, StaticHoldingsRepository};
    use crate::refresh::{PortfolioRefresher, RefreshOutcome};
    use async_trait::async_trait;
    use cryptofolio_market_data::{MarketAsset, MarketDataError, MarketDataProvider, MarketsQuery};
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::Notify;

    // ============================================================================
    // Stub provider
    // ============================================================================

    struct StubProvider {
        markets: Vec<MarketAsset>,
        fail: AtomicBool,
        calls: AtomicUsize,
        gate: Option<Arc<Notify>>,
    }

    impl StubProvider {
        fn new(markets: Vec<MarketAsset>) -> Self {
            Self {
                markets,
                fail: AtomicBool::new(false),
                calls: AtomicUsize::new(0),
                gate: None,
            }
        }

        fn gated(markets: Vec<MarketAsset>, gate: Arc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::new(markets)
            }
        }
    }

    #[async_trait]
    impl MarketDataProvider for StubProvider {
        fn id(&self) -> &'static str {
            "STUB"
        }

        async fn fetch_markets(
            &self,
            _query: &MarketsQuery,
        ) -> Result<Vec<MarketAsset>, MarketDataError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            if self.fail.load(Ordering::SeqCst) {
                return Err(MarketDataError::HttpStatus {
                    provider: "STUB".to_string(),
                    status: 503,
                });
            }
            Ok(self.markets.clone())
        }
    }

    fn listing() -> Vec<MarketAsset> {
        vec![
            MarketAsset::new("bitcoin", "btc", "Bitcoin", dec!(10000), dec!(5)),
            MarketAsset::new("ethereum", "eth", "Ethereum", dec!(2000), dec!(-2)),
        ]
    }

    fn holdings() -> Arc<StaticHoldingsRepository> {
        Arc::new(StaticHoldingsRepository::new(vec![
            Holding::new("bitcoin", dec!(1)),
            Holding::new("ethereum", dec!(2)),
        ]))
    }

    fn refresher(provider: Arc<StubProvider>) -> PortfolioRefresher {
        PortfolioRefresher::new(
            provider,
            holdings(),
            None,
            MarketsQuery::default(),
            SecondaryCurrency::default(),
        )
    }

    // ============================================================================
    // Cycles
    // ============================================================================

    #[tokio::test]
    async fn test_initial_state_has_no_data() {
        let refresher = refresher(Arc::new(StubProvider::new(listing())));
        let state = refresher.state();
        assert!(!state.loading);
        assert!(state.portfolio.is_none());
        assert_eq!(refresher.outcome(), PortfolioOutcome::NoData { reason: None });
    }

    #[tokio::test]
    async fn test_successful_refresh_stores_portfolio() {
        let refresher = refresher(Arc::new(StubProvider::new(listing())));

        assert_eq!(refresher.refresh("user").await, RefreshOutcome::Completed);

        let state = refresher.state();
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(state.last_updated.is_some());
        assert_eq!(state.markets.len(), 2);

        let outcome = refresher.outcome();
        let portfolio = outcome.portfolio().unwrap();
        assert_eq!(portfolio.total_value, dec!(14000));
        assert_eq!(portfolio.total_value_secondary, dec!(77000));
    }

    #[tokio::test]
    async fn test_first_failure_reports_no_data_with_reason() {
        let provider = Arc::new(StubProvider::new(listing()));
        provider.fail.store(true, Ordering::SeqCst);
        let refresher = refresher(provider);

        let outcome = refresher.refresh("user").await;
        assert_eq!(
            outcome,
            RefreshOutcome::Failed("Failed to fetch market data (HTTP 503)".to_string())
        );
        assert_eq!(
            refresher.outcome(),
            PortfolioOutcome::NoData {
                reason: Some("Failed to fetch market data (HTTP 503)".to_string())
            }
        );
        assert!(!refresher.state().loading);
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_portfolio() {
        let provider = Arc::new(StubProvider::new(listing()));
        let refresher = refresher(provider.clone());

        refresher.refresh("user").await;
        let before = refresher.state();

        provider.fail.store(true, Ordering::SeqCst);
        assert!(matches!(refresher.refresh("user").await, RefreshOutcome::Failed(_)));

        let after = refresher.state();
        assert_eq!(after.portfolio, before.portfolio);
        assert_eq!(after.markets, before.markets);
        assert_eq!(after.last_updated, before.last_updated);
        assert!(after.error.is_some());

        // Recovery clears the error
        provider.fail.store(false, Ordering::SeqCst);
        assert_eq!(refresher.refresh("user").await, RefreshOutcome::Completed);
        assert!(refresher.state().error.is_none());
    }

    #[tokio::test]
    async fn test_overlapping_refresh_is_skipped() {
        let gate = Arc::new(Notify::new());
        let provider = Arc::new(StubProvider::gated(listing(), gate.clone()));
        let refresher = Arc::new(refresher(provider.clone()));

        let first = {
            let refresher = refresher.clone();
            tokio::spawn(async move { refresher.refresh("user").await })
        };
        while !refresher.state().loading {
            tokio::task::yield_now().await;
        }

        assert_eq!(refresher.refresh("user").await, RefreshOutcome::Skipped);

        gate.notify_one();
        assert_eq!(first.await.unwrap(), RefreshOutcome::Completed);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
        assert!(!refresher.state().loading);
    }

    #[tokio::test]
    async fn test_reset_discards_in_flight_result() {
        let gate = Arc::new(Notify::new());
        let provider = Arc::new(StubProvider::gated(listing(), gate.clone()));
        let refresher = Arc::new(refresher(provider));

        let first = {
            let refresher = refresher.clone();
            tokio::spawn(async move { refresher.refresh("user").await })
        };
        while !refresher.state().loading {
            tokio::task::yield_now().await;
        }

        refresher.reset();
        gate.notify_one();
        first.await.unwrap();

        let state = refresher.state();
        assert!(state.portfolio.is_none());
        assert!(state.markets.is_empty());
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn test_refresh_skipped_during_reset_cycle_runs_afterwards() {
        let gate = Arc::new(Notify::new());
        let provider = Arc::new(StubProvider::gated(listing(), gate.clone()));
        let refresher = Arc::new(refresher(provider.clone()));

        let first = {
            let refresher = refresher.clone();
            tokio::spawn(async move { refresher.refresh("alice").await })
        };
        while !refresher.state().loading {
            tokio::task::yield_now().await;
        }

        // Sign-in as another user while alice's cycle is still fetching
        refresher.reset();
        assert_eq!(refresher.refresh("bob").await, RefreshOutcome::Skipped);

        gate.notify_one();
        while provider.calls.load(Ordering::SeqCst) < 2 {
            tokio::task::yield_now().await;
        }
        assert!(refresher.state().portfolio.is_none());

        gate.notify_one();
        assert_eq!(first.await.unwrap(), RefreshOutcome::Completed);

        let state = refresher.state();
        assert!(!state.loading);
        assert_eq!(state.portfolio.unwrap().total_value, dec!(14000));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_refresh_evaluates_alerts() {
        let alerts = Arc::new(AlertService::new(Arc::new(InMemoryAlertRepository::default())));
        alerts
            .create_alert(NewAlert {
                asset: "BTC".to_string(),
                alert_type: AlertType::PriceAbove,
                target: dec!(9000),
                current: None,
            })
            .await
            .unwrap();

        let refresher = PortfolioRefresher::new(
            Arc::new(StubProvider::new(listing())),
            holdings(),
            Some(alerts.clone()),
            MarketsQuery::default(),
            SecondaryCurrency::default(),
        );
        refresher.refresh("user").await;

        let stored = alerts.get_alerts().unwrap();
        assert!(stored[0].is_triggered());
        assert_eq!(stored[0].current, dec!(10000));
    }

    #[test]
    fn test_refresh_outcome_serialization() {
        assert_eq!(
            serde_json::to_value(RefreshOutcome::Skipped).unwrap(),
            serde_json::json!({ "outcome": "skipped" })
        );
        assert_eq!(
            serde_json::to_value(RefreshOutcome::Failed("boom".to_string())).unwrap(),
            serde_json::json!({ "outcome": "failed", "message": "boom" })
        );
    }
}
