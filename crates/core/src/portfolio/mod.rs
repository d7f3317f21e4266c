//! Portfolio module - holdings and their aggregation against market data.

pub mod aggregation;
pub mod holdings;

pub use aggregation::{
    aggregate_portfolio, Portfolio, PortfolioAsset, PortfolioOutcome, SecondaryCurrency,
};
pub use holdings::{Holding, HoldingsRepositoryTrait, StaticHoldingsRepository};
