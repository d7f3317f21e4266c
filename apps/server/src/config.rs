use std::{net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use anyhow::Context;
use cryptofolio_core::portfolio::SecondaryCurrency;
use cryptofolio_market_data::provider::coingecko::DEFAULT_BASE_URL;
use rust_decimal::Decimal;

use crate::auth::AuthConfig;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub market_data_url: String,
    pub vs_currency: String,
    pub markets_per_page: u32,
    pub refresh_interval: Duration,
    pub secondary: SecondaryCurrency,
    /// JSON holdings file; built-in holdings when unset
    pub holdings_file: Option<PathBuf>,
    /// Password check on login; open login when unset
    pub auth: Option<AuthConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30_000),
            market_data_url: DEFAULT_BASE_URL.to_string(),
            vs_currency: "usd".to_string(),
            markets_per_page: 50,
            refresh_interval: Duration::from_secs(60),
            secondary: SecondaryCurrency::default(),
            holdings_file: None,
            auth: None,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let listen_addr = parse_var("CF_LISTEN_ADDR", defaults.listen_addr)?;
        let cors_allow = std::env::var("CF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = parse_var("CF_REQUEST_TIMEOUT_MS", 30_000)?;
        let market_data_url =
            std::env::var("CF_MARKET_DATA_URL").unwrap_or(defaults.market_data_url);
        let vs_currency = std::env::var("CF_VS_CURRENCY").unwrap_or(defaults.vs_currency);
        let markets_per_page = parse_var("CF_MARKETS_PER_PAGE", defaults.markets_per_page)?;
        let refresh_secs: u64 = parse_var("CF_REFRESH_INTERVAL_SECS", 60)?;
        if refresh_secs == 0 {
            anyhow::bail!("CF_REFRESH_INTERVAL_SECS must be greater than zero");
        }

        let secondary = SecondaryCurrency {
            code: std::env::var("CF_SECONDARY_CURRENCY").unwrap_or(defaults.secondary.code),
            rate: parse_var::<Decimal>("CF_SECONDARY_RATE", defaults.secondary.rate)?,
        };
        if secondary.rate < Decimal::ZERO {
            anyhow::bail!("CF_SECONDARY_RATE cannot be negative");
        }

        let holdings_file = std::env::var("CF_HOLDINGS_FILE")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);
        let auth = std::env::var("CF_AUTH_PASSWORD_HASH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(|password_hash| AuthConfig { password_hash });

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            market_data_url,
            vs_currency,
            markets_per_page,
            refresh_interval: Duration::from_secs(refresh_secs),
            secondary,
            holdings_file,
            auth,
        })
    }
}

fn parse_var<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid {key}: {raw}")),
        Err(_) => Ok(default),
    }
}
