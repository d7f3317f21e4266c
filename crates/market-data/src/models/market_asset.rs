use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single asset from a market listing, priced in the listing currency.
///
/// Values are immutable for the poll cycle that fetched them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketAsset {
    /// Provider identity (e.g. "bitcoin")
    pub id: String,

    /// Ticker symbol, lower-case as the provider returns it (e.g. "btc")
    pub symbol: String,

    /// Display name
    pub name: String,

    /// Current price in the listing currency
    pub current_price: Decimal,

    /// Signed 24h price change in percent
    pub price_change_percentage_24h: Decimal,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<Decimal>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_volume: Option<Decimal>,

    /// Logo URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// When the provider last refreshed this row
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl MarketAsset {
    /// Create an asset with the required fields only.
    pub fn new(
        id: impl Into<String>,
        symbol: impl Into<String>,
        name: impl Into<String>,
        current_price: Decimal,
        price_change_percentage_24h: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            name: name.into(),
            current_price,
            price_change_percentage_24h,
            market_cap: None,
            total_volume: None,
            image: None,
            last_updated: None,
        }
    }

    /// Case-insensitive match against id, symbol or name.
    pub fn matches(&self, needle: &str) -> bool {
        let needle = needle.trim();
        !needle.is_empty()
            && (self.id.eq_ignore_ascii_case(needle)
                || self.symbol.eq_ignore_ascii_case(needle)
                || self.name.to_lowercase() == needle.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_matches_id_symbol_and_name() {
        let asset = MarketAsset::new("bitcoin", "btc", "Bitcoin", dec!(65432), dec!(1.5));
        assert!(asset.matches("bitcoin"));
        assert!(asset.matches("BTC"));
        assert!(asset.matches(" Bitcoin "));
        assert!(!asset.matches("ethereum"));
        assert!(!asset.matches(""));
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let asset = MarketAsset::new("bitcoin", "btc", "Bitcoin", dec!(65432), dec!(1.5));
        let json = serde_json::to_value(&asset).unwrap();
        assert!(json.get("market_cap").is_none());
        assert!(json.get("image").is_none());
        assert_eq!(json["id"], "bitcoin");
    }
}
