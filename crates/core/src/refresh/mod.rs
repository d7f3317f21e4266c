//! Refresh module - one fetch, aggregate and alert-evaluation cycle at a time.

mod refresh_model;
mod refresher;

pub use refresh_model::{DashboardState, RefreshOutcome};
pub use refresher::PortfolioRefresher;

#[cfg(test)]
mod refresher_tests;
