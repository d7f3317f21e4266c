use std::sync::Arc;

use async_trait::async_trait;
use cryptofolio_core::refresh::RefreshOutcome;
use cryptofolio_market_data::{MarketAsset, MarketDataError, MarketDataProvider, MarketsQuery};
use cryptofolio_server::{build_state_with_provider, config::Config, scheduler};
use rust_decimal_macros::dec;

struct StubProvider;

#[async_trait]
impl MarketDataProvider for StubProvider {
    fn id(&self) -> &'static str {
        "STUB"
    }

    async fn fetch_markets(
        &self,
        _query: &MarketsQuery,
    ) -> Result<Vec<MarketAsset>, MarketDataError> {
        Ok(vec![MarketAsset::new(
            "bitcoin",
            "btc",
            "Bitcoin",
            dec!(60000),
            dec!(10),
        )])
    }
}

#[tokio::test]
async fn scheduled_refresh_skips_when_signed_out() {
    let state = build_state_with_provider(&Config::default(), Arc::new(StubProvider))
        .await
        .unwrap();

    assert_eq!(scheduler::run_scheduled_refresh(&state).await, None);
    assert!(state.refresher.state().portfolio.is_none());
}

#[tokio::test]
async fn scheduled_refresh_runs_for_signed_in_user() {
    let state = build_state_with_provider(&Config::default(), Arc::new(StubProvider))
        .await
        .unwrap();
    state.session.login("a@example.com");

    assert_eq!(
        scheduler::run_scheduled_refresh(&state).await,
        Some(RefreshOutcome::Completed)
    );
    let portfolio = state.refresher.state().portfolio.unwrap();
    assert_eq!(portfolio.total_value, dec!(30000));

    // Seeded alert "Bitcoin above 70000" is observed but not triggered
    let alerts = state.alert_service.get_alerts().unwrap();
    let bitcoin = alerts.iter().find(|a| a.id == "1").unwrap();
    assert_eq!(bitcoin.current, dec!(60000));
    assert!(!bitcoin.is_triggered());
}
