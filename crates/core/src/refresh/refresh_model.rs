use chrono::{DateTime, Utc};
use cryptofolio_market_data::MarketAsset;
use serde::{Deserialize, Serialize};

use crate::portfolio::{Portfolio, PortfolioOutcome};

/// Everything the dashboard renders, as of the last completed cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    /// Listing of the last successful fetch
    pub markets: Vec<MarketAsset>,
    pub portfolio: Option<Portfolio>,
    pub loading: bool,
    /// User-facing message of the last failed cycle
    pub error: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl DashboardState {
    pub fn outcome(&self) -> PortfolioOutcome {
        match &self.portfolio {
            Some(portfolio) => PortfolioOutcome::Ready(portfolio.clone()),
            None => PortfolioOutcome::NoData {
                reason: self.error.clone(),
            },
        }
    }
}

/// Result of a single `refresh` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "message", rename_all = "lowercase")]
pub enum RefreshOutcome {
    Completed,
    /// Another cycle was already running
    Skipped,
    Failed(String),
}
