//! Cryptofolio Market Data Crate
//!
//! Provider-agnostic fetching of cryptocurrency market listings.
//!
//! # Overview
//!
//! ```text
//! +------------------+     +--------------------+     +------------------+
//! |  MarketsQuery    | --> | MarketDataProvider | --> |  MarketAsset[]   |
//! +------------------+     +--------------------+     +------------------+
//!                                   |
//!                          CoinGecko /coins/markets
//! ```
//!
//! A listing request either fails as a whole ([`MarketDataError`] with
//! [`MarketDataError::is_network_error`]) or succeeds with the rows that
//! passed integrity checks. Malformed rows are logged and dropped.
//!
//! # Core Types
//!
//! - [`MarketAsset`] - One priced asset of a listing
//! - [`MarketsQuery`] - Currency, ordering and page size of a listing request
//! - [`MarketDataProvider`] - Trait implemented by listing sources
//! - [`CoinGeckoProvider`] - Public CoinGecko implementation

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{MarketAsset, MarketOrder, MarketsQuery};
pub use provider::coingecko::CoinGeckoProvider;
pub use provider::MarketDataProvider;
