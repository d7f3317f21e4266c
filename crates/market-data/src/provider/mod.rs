//! Market data provider abstractions and implementations.
//!
//! This module contains:
//! - The `MarketDataProvider` trait that all providers implement
//! - The CoinGecko listing provider

mod traits;

pub mod coingecko;

pub use traits::MarketDataProvider;
