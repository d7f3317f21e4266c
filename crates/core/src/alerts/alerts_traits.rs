use async_trait::async_trait;
use cryptofolio_market_data::MarketAsset;

use super::alerts_model::{Alert, NewAlert};
use crate::errors::Result;

/// Trait for alert repository operations
#[async_trait]
pub trait AlertRepositoryTrait: Send + Sync {
    fn load_alerts(&self) -> Result<Vec<Alert>>;
    fn get_alert(&self, alert_id: &str) -> Result<Alert>;
    async fn insert_alert(&self, alert: Alert) -> Result<Alert>;
    async fn update_alert(&self, alert: Alert) -> Result<Alert>;
    async fn delete_alert(&self, alert_id: &str) -> Result<usize>;
}

/// Trait for alert service operations
#[async_trait]
pub trait AlertServiceTrait: Send + Sync {
    fn get_alerts(&self) -> Result<Vec<Alert>>;
    async fn create_alert(&self, new_alert: NewAlert) -> Result<Alert>;
    async fn toggle_alert(&self, alert_id: &str) -> Result<Alert>;
    async fn delete_alert(&self, alert_id: &str) -> Result<()>;
    /// Refreshes observed values from `markets` and returns the alerts that
    /// triggered during this call.
    async fn evaluate(&self, markets: &[MarketAsset]) -> Result<Vec<Alert>>;
}
