use serde::{Deserialize, Serialize};

/// Sort order of a market listing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketOrder {
    #[default]
    MarketCapDesc,
    MarketCapAsc,
    VolumeDesc,
    VolumeAsc,
}

impl MarketOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            MarketOrder::MarketCapDesc => "market_cap_desc",
            MarketOrder::MarketCapAsc => "market_cap_asc",
            MarketOrder::VolumeDesc => "volume_desc",
            MarketOrder::VolumeAsc => "volume_asc",
        }
    }
}

/// Parameters of a market listing request. Only the first page is ever
/// requested by the refresh cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarketsQuery {
    /// Quote currency (e.g. "usd")
    pub vs_currency: String,
    pub order: MarketOrder,
    pub per_page: u32,
    pub page: u32,
    pub sparkline: bool,
}

impl Default for MarketsQuery {
    fn default() -> Self {
        Self {
            vs_currency: "usd".to_string(),
            order: MarketOrder::MarketCapDesc,
            per_page: 50,
            page: 1,
            sparkline: false,
        }
    }
}

impl MarketsQuery {
    /// Query-string pairs in the order the provider documents them.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("vs_currency", self.vs_currency.to_lowercase()),
            ("order", self.order.as_str().to_string()),
            ("per_page", self.per_page.to_string()),
            ("page", self.page.to_string()),
            ("sparkline", self.sparkline.to_string()),
        ]
    }
}
