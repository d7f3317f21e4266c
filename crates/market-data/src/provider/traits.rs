//! Market data provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{MarketAsset, MarketsQuery};

/// Trait for market data providers.
///
/// Implement this trait to add support for a new listing source. Callers
/// hold providers as `Arc<dyn MarketDataProvider>`, which is also how tests
/// substitute canned listings.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use cryptofolio_market_data::{MarketAsset, MarketDataError, MarketDataProvider, MarketsQuery};
///
/// struct FixedProvider(Vec<MarketAsset>);
///
/// #[async_trait]
/// impl MarketDataProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     async fn fetch_markets(&self, _query: &MarketsQuery) -> Result<Vec<MarketAsset>, MarketDataError> {
///         Ok(self.0.clone())
///     }
/// }
/// ```
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "COINGECKO".
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// Fetch one page of the market listing.
    ///
    /// Assets that fail integrity checks are dropped from the returned list;
    /// an `Err` means the listing as a whole could not be retrieved.
    async fn fetch_markets(&self, query: &MarketsQuery)
        -> Result<Vec<MarketAsset>, MarketDataError>;
}
