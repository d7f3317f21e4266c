use cryptofolio_market_data::MarketAsset;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Number of gainers and losers shown by default.
pub const DEFAULT_MOVERS_LIMIT: usize = 3;

/// Biggest 24h gainers and losers of a listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopMovers {
    /// Positive change, largest first
    pub gainers: Vec<MarketAsset>,
    /// Negative change, most negative first
    pub losers: Vec<MarketAsset>,
}

pub fn top_movers(markets: &[MarketAsset], limit: usize) -> TopMovers {
    let mut gainers: Vec<MarketAsset> = markets
        .iter()
        .filter(|a| a.price_change_percentage_24h > Decimal::ZERO)
        .cloned()
        .collect();
    gainers.sort_by(|a, b| b.price_change_percentage_24h.cmp(&a.price_change_percentage_24h));
    gainers.truncate(limit);

    let mut losers: Vec<MarketAsset> = markets
        .iter()
        .filter(|a| a.price_change_percentage_24h < Decimal::ZERO)
        .cloned()
        .collect();
    losers.sort_by(|a, b| a.price_change_percentage_24h.cmp(&b.price_change_percentage_24h));
    losers.truncate(limit);

    TopMovers { gainers, losers }
}
