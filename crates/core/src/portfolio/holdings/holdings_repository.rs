use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use std::path::Path;

use super::holdings_model::{default_holdings, Holding};
use super::holdings_traits::HoldingsRepositoryTrait;
use crate::errors::{Result, ValidationError};

/// Holdings repository backed by a fixed list shared by every user.
#[derive(Debug, Clone)]
pub struct StaticHoldingsRepository {
    holdings: Vec<Holding>,
}

impl Default for StaticHoldingsRepository {
    fn default() -> Self {
        Self::new(default_holdings())
    }
}

impl StaticHoldingsRepository {
    pub fn new(holdings: Vec<Holding>) -> Self {
        Self { holdings }
    }

    /// Loads holdings from a JSON array of `{ "assetId": ..., "quantity": ... }`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let holdings: Vec<Holding> = serde_json::from_str(&raw)?;

        for holding in &holdings {
            if holding.asset_id.trim().is_empty() {
                return Err(ValidationError::MissingField("assetId".to_string()).into());
            }
            if holding.quantity < Decimal::ZERO {
                return Err(ValidationError::InvalidInput(format!(
                    "Holding '{}' has a negative quantity",
                    holding.asset_id
                ))
                .into());
            }
        }

        debug!("Loaded {} holdings from {}", holdings.len(), path.display());
        Ok(Self::new(holdings))
    }
}

#[async_trait]
impl HoldingsRepositoryTrait for StaticHoldingsRepository {
    async fn get_holdings(&self, _user_id: &str) -> Result<Vec<Holding>> {
        Ok(self.holdings.clone())
    }
}
