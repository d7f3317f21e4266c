//! Portfolio summary models.

use cryptofolio_market_data::MarketAsset;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Fixed projection of primary-currency amounts into a second currency.
///
/// This is a static multiplier, not a live exchange rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecondaryCurrency {
    pub code: String,
    pub rate: Decimal,
}

impl Default for SecondaryCurrency {
    fn default() -> Self {
        Self {
            code: "BRL".to_string(),
            rate: dec!(5.5),
        }
    }
}

/// A market asset joined with the user's holding of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioAsset {
    #[serde(flatten)]
    pub asset: MarketAsset,
    /// Quantity held
    pub holdings: Decimal,
    /// current_price × holdings
    pub value: Decimal,
    /// Share of the portfolio total, 0-100
    pub allocation: Decimal,
}

/// Aggregate of all matched holdings for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    /// Sum of asset values in the listing currency
    pub total_value: Decimal,
    /// 24h change of the total, listing currency
    pub total_change_absolute: Decimal,
    /// Value-weighted 24h change in percent
    pub total_change_percent: Decimal,
    /// Secondary-currency projection of `total_value`
    pub total_value_secondary: Decimal,
    /// Secondary-currency projection of `total_change_absolute`
    pub total_change_secondary: Decimal,
    pub secondary_currency: String,
    pub assets: Vec<PortfolioAsset>,
}

impl Portfolio {
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// What a UI collaborator gets to render: a portfolio, or the reason there is none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum PortfolioOutcome {
    Ready(Portfolio),
    #[serde(rename_all = "camelCase")]
    NoData { reason: Option<String> },
}

impl PortfolioOutcome {
    pub fn portfolio(&self) -> Option<&Portfolio> {
        match self {
            PortfolioOutcome::Ready(portfolio) => Some(portfolio),
            PortfolioOutcome::NoData { .. } => None,
        }
    }
}
