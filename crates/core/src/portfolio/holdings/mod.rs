//! Holdings module - the user's positions and where they come from.

mod holdings_model;
mod holdings_repository;
mod holdings_traits;

pub use holdings_model::{default_holdings, Holding};
pub use holdings_repository::StaticHoldingsRepository;
pub use holdings_traits::HoldingsRepositoryTrait;
