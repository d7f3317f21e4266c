use std::sync::Arc;
use std::time::Duration;

use cryptofolio_core::{
    alerts::{AlertService, AlertServiceTrait, InMemoryAlertRepository},
    portfolio::{HoldingsRepositoryTrait, StaticHoldingsRepository},
    refresh::PortfolioRefresher,
    session::SessionContext,
    transactions::{InMemoryTransactionRepository, TransactionService, TransactionServiceTrait},
    wallets::{InMemoryWalletRepository, WalletService, WalletServiceTrait},
};
use cryptofolio_market_data::{CoinGeckoProvider, MarketDataProvider, MarketsQuery};
use tokio::sync::Notify;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::{auth::AuthManager, config::Config};

pub struct AppState {
    pub session: Arc<SessionContext>,
    pub refresher: Arc<PortfolioRefresher>,
    pub alert_service: Arc<dyn AlertServiceTrait>,
    pub wallet_service: Arc<dyn WalletServiceTrait>,
    pub transaction_service: Arc<dyn TransactionServiceTrait>,
    pub auth: Option<Arc<AuthManager>>,
    pub refresh_interval: Duration,
    /// Wakes the scheduler ahead of its next tick, e.g. after sign-in.
    pub refresh_wake: Arc<Notify>,
}

pub fn init_tracing() {
    let log_format = std::env::var("CF_LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    tracing::info!("Market data source: {}", config.market_data_url);
    let provider = Arc::new(CoinGeckoProvider::with_base_url(&config.market_data_url));
    build_state_with_provider(config, provider).await
}

/// Wires services around an arbitrary listing source.
pub async fn build_state_with_provider(
    config: &Config,
    provider: Arc<dyn MarketDataProvider>,
) -> anyhow::Result<Arc<AppState>> {
    let holdings_repository: Arc<dyn HoldingsRepositoryTrait> = match &config.holdings_file {
        Some(path) => {
            tracing::info!("Loading holdings from {}", path.display());
            Arc::new(StaticHoldingsRepository::from_json_file(path)?)
        }
        None => Arc::new(StaticHoldingsRepository::default()),
    };

    let alert_repository = Arc::new(InMemoryAlertRepository::seeded());
    let alert_service: Arc<dyn AlertServiceTrait> = Arc::new(AlertService::new(alert_repository));

    let wallet_repository = Arc::new(InMemoryWalletRepository::seeded());
    let wallet_service: Arc<dyn WalletServiceTrait> =
        Arc::new(WalletService::new(wallet_repository));

    let transaction_repository = Arc::new(InMemoryTransactionRepository::seeded());
    let transaction_service: Arc<dyn TransactionServiceTrait> =
        Arc::new(TransactionService::new(transaction_repository));

    let query = MarketsQuery {
        vs_currency: config.vs_currency.clone(),
        per_page: config.markets_per_page,
        ..MarketsQuery::default()
    };
    let refresher = Arc::new(PortfolioRefresher::new(
        provider,
        holdings_repository,
        Some(alert_service.clone()),
        query,
        config.secondary.clone(),
    ));

    let auth_manager = config
        .auth
        .as_ref()
        .map(AuthManager::new)
        .transpose()?
        .map(Arc::new);

    Ok(Arc::new(AppState {
        session: Arc::new(SessionContext::new()),
        refresher,
        alert_service,
        wallet_service,
        transaction_service,
        auth: auth_manager,
        refresh_interval: config.refresh_interval,
        refresh_wake: Arc::new(Notify::new()),
    }))
}
