//! Alert domain models.

use chrono::{DateTime, Utc};
use cryptofolio_market_data::MarketAsset;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Condition an alert watches for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AlertType {
    /// Price at or above the target
    PriceAbove,
    /// Price at or below the target
    PriceBelow,
    /// Absolute 24h change (percent) at or above the target
    PercentageChange,
}

/// Domain model representing a price alert
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,
    /// Asset id, symbol or name as entered by the user
    pub asset: String,
    pub alert_type: AlertType,
    pub target: Decimal,
    /// Last observed price (or 24h change for percentage alerts)
    pub current: Decimal,
    pub is_active: bool,
    pub triggered_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Alert {
    /// The figure this alert compares against its target.
    pub fn observed_value(&self, market: &MarketAsset) -> Decimal {
        match self.alert_type {
            AlertType::PriceAbove | AlertType::PriceBelow => market.current_price,
            AlertType::PercentageChange => market.price_change_percentage_24h,
        }
    }

    /// Whether the condition holds for `market`, ignoring activity state.
    pub fn is_met(&self, market: &MarketAsset) -> bool {
        let observed = self.observed_value(market);
        match self.alert_type {
            AlertType::PriceAbove => observed >= self.target,
            AlertType::PriceBelow => observed <= self.target,
            AlertType::PercentageChange => observed.abs() >= self.target,
        }
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered_at.is_some()
    }
}

/// Input model for creating a new alert
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewAlert {
    pub asset: String,
    pub alert_type: AlertType,
    pub target: Decimal,
    /// Starting observation, when the client already knows it
    #[serde(default)]
    pub current: Option<Decimal>,
}

impl NewAlert {
    pub fn validate(&self) -> Result<()> {
        if self.asset.trim().is_empty() {
            return Err(ValidationError::MissingField("asset".to_string()).into());
        }
        if self.target <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(
                "Alert target must be greater than zero".to_string(),
            )
            .into());
        }
        Ok(())
    }
}
