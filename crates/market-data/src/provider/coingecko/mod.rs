//! CoinGecko provider for cryptocurrency market listings.
//!
//! Uses the public `/coins/markets` endpoint, which needs no API key. Only the
//! first page is requested; the page size comes from [`MarketsQuery`].

mod models;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use std::time::Duration;

use crate::errors::MarketDataError;
use crate::models::{MarketAsset, MarketsQuery};
use crate::provider::MarketDataProvider;

use models::CoinGeckoMarket;

/// Provider ID constant
const PROVIDER_ID: &str = "COINGECKO";

/// Public API root
pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// CoinGecko market listing provider.
///
/// # Example
///
/// ```ignore
/// use cryptofolio_market_data::{CoinGeckoProvider, MarketDataProvider, MarketsQuery};
///
/// let provider = CoinGeckoProvider::new();
/// let markets = provider.fetch_markets(&MarketsQuery::default()).await?;
/// ```
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinGeckoProvider {
    /// Create a provider pointed at the public CoinGecko API.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a provider against a different API root (proxy, pro endpoint, local stub).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn markets_url(&self) -> String {
        format!("{}/coins/markets", self.base_url)
    }

    /// Decode a listing body. Rows failing integrity checks are skipped.
    fn decode_markets(body: &[u8]) -> Result<Vec<MarketAsset>, MarketDataError> {
        let rows: Vec<serde_json::Value> =
            serde_json::from_slice(body).map_err(|e| MarketDataError::Decode {
                provider: PROVIDER_ID.to_string(),
                message: e.to_string(),
            })?;

        let mut assets = Vec::with_capacity(rows.len());
        for row in rows {
            let hint = row
                .get("id")
                .and_then(|v| v.as_str())
                .unwrap_or("<unknown>")
                .to_string();

            let parsed = serde_json::from_value::<CoinGeckoMarket>(row)
                .map_err(|e| MarketDataError::data_integrity(&hint, e.to_string()))
                .and_then(MarketAsset::try_from);

            match parsed {
                Ok(asset) => assets.push(asset),
                Err(e) => warn!("Skipping {} market row: {}", PROVIDER_ID, e),
            }
        }

        Ok(assets)
    }
}

#[async_trait]
impl MarketDataProvider for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_markets(
        &self,
        query: &MarketsQuery,
    ) -> Result<Vec<MarketAsset>, MarketDataError> {
        let url = self.markets_url();
        debug!("Fetching {} listing from {}", PROVIDER_ID, url);

        let response = self
            .client
            .get(&url)
            .header("accept", "application/json")
            .query(&query.to_pairs())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    MarketDataError::Timeout {
                        provider: PROVIDER_ID.to_string(),
                    }
                } else {
                    MarketDataError::Network(e)
                }
            })?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }
        if !status.is_success() {
            return Err(MarketDataError::HttpStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let assets = Self::decode_markets(&body)?;
        debug!("{} returned {} market assets", PROVIDER_ID, assets.len());
        Ok(assets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const LISTING: &str = r#"[
        {
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
            "current_price": 65432.1,
            "market_cap": 1288000000000,
            "total_volume": 31000000000,
            "price_change_percentage_24h": -1.25,
            "last_updated": "2025-01-07T10:30:00.000Z"
        },
        {
            "id": "ethereum",
            "symbol": "eth",
            "name": "Ethereum",
            "image": "https://assets.coingecko.com/coins/images/279/large/ethereum.png",
            "current_price": 3450,
            "market_cap": null,
            "total_volume": null,
            "price_change_percentage_24h": 2.5
        }
    ]"#;

    #[test]
    fn test_provider_id() {
        let provider = CoinGeckoProvider::new();
        assert_eq!(provider.id(), "COINGECKO");
    }

    #[test]
    fn test_markets_url_trims_trailing_slash() {
        let provider = CoinGeckoProvider::with_base_url("http://localhost:9000/api/v3/");
        assert_eq!(
            provider.markets_url(),
            "http://localhost:9000/api/v3/coins/markets"
        );
    }

    #[test]
    fn test_decode_listing() {
        let assets = CoinGeckoProvider::decode_markets(LISTING.as_bytes()).unwrap();
        assert_eq!(assets.len(), 2);

        let btc = &assets[0];
        assert_eq!(btc.id, "bitcoin");
        assert_eq!(btc.symbol, "btc");
        assert_eq!(btc.current_price, dec!(65432.1));
        assert_eq!(btc.price_change_percentage_24h, dec!(-1.25));
        assert_eq!(btc.market_cap, Some(dec!(1288000000000)));
        assert!(btc.last_updated.is_some());

        let eth = &assets[1];
        assert_eq!(eth.current_price, dec!(3450));
        assert_eq!(eth.market_cap, None);
        assert_eq!(eth.total_volume, None);
        assert_eq!(eth.last_updated, None);
    }

    #[test]
    fn test_decode_skips_rows_with_missing_required_fields() {
        let body = r#"[
            {"id": "bitcoin", "symbol": "btc", "name": "Bitcoin", "current_price": 60000, "price_change_percentage_24h": 10},
            {"id": "tether", "symbol": "usdt", "name": "Tether", "current_price": 1.0, "price_change_percentage_24h": null},
            {"id": "dogecoin", "symbol": "doge", "name": "Dogecoin", "price_change_percentage_24h": 3.1},
            {"symbol": "xyz", "name": "Nameless", "current_price": 1, "price_change_percentage_24h": 0}
        ]"#;
        let assets = CoinGeckoProvider::decode_markets(body.as_bytes()).unwrap();
        let ids: Vec<&str> = assets.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["bitcoin"]);
    }

    #[test]
    fn test_decode_skips_malformed_and_negative_rows() {
        let body = r#"[
            {"id": "cardano", "symbol": "ada", "name": "Cardano", "current_price": "cheap", "price_change_percentage_24h": 1},
            {"id": "broken", "symbol": "brk", "name": "Broken", "current_price": -5, "price_change_percentage_24h": 1},
            {"id": "chainlink", "symbol": "link", "name": "Chainlink", "current_price": 14.2, "price_change_percentage_24h": -0.4}
        ]"#;
        let assets = CoinGeckoProvider::decode_markets(body.as_bytes()).unwrap();
        assert_eq!(assets.len(), 1);
        assert_eq!(assets[0].id, "chainlink");
    }

    #[test]
    fn test_decode_rejects_non_array_body() {
        let err = CoinGeckoProvider::decode_markets(br#"{"status": {"error_code": 429}}"#)
            .unwrap_err();
        assert!(matches!(err, MarketDataError::Decode { .. }));
    }
}
