//! Market data models
//!
//! - `market_asset` - One row of a market listing (MarketAsset)
//! - `query` - Listing request parameters (MarketsQuery)

mod market_asset;
mod query;

pub use market_asset::MarketAsset;
pub use query::{MarketOrder, MarketsQuery};
