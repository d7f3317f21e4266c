use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// A user's stated quantity of one asset.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Market asset identity this position refers to (e.g. "bitcoin")
    pub asset_id: String,
    /// Non-negative quantity
    pub quantity: Decimal,
}

impl Holding {
    pub fn new(asset_id: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            asset_id: asset_id.into(),
            quantity,
        }
    }
}

/// Built-in positions used when no holdings file is configured.
pub fn default_holdings() -> Vec<Holding> {
    vec![
        Holding::new("bitcoin", dec!(0.5)),
        Holding::new("ethereum", dec!(2.3)),
        Holding::new("cardano", dec!(1500)),
        Holding::new("chainlink", dec!(45)),
        Holding::new("polygon", dec!(850)),
    ]
}
