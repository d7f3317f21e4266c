use async_trait::async_trait;

use super::holdings_model::Holding;
use crate::errors::Result;

/// Trait for holdings data access.
///
/// The aggregator never reads holdings itself; callers fetch them through
/// this trait and pass them in, so storage can change without touching it.
#[async_trait]
pub trait HoldingsRepositoryTrait: Send + Sync {
    async fn get_holdings(&self, user_id: &str) -> Result<Vec<Holding>>;
}
