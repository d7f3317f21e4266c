//! Wire format of the CoinGecko `/coins/markets` endpoint.

use chrono::{DateTime, Utc};
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::MarketDataError;
use crate::models::MarketAsset;

/// One element of the `/coins/markets` array.
///
/// Every field is optional here so that a single malformed row can be
/// reported on its own instead of failing the whole listing.
#[derive(Debug, Deserialize)]
pub(crate) struct CoinGeckoMarket {
    pub id: Option<String>,
    pub symbol: Option<String>,
    pub name: Option<String>,
    pub image: Option<String>,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub total_volume: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub last_updated: Option<String>,
}

fn required_text(value: Option<String>, field: &str, asset_id: &str) -> Result<String, MarketDataError> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(MarketDataError::data_integrity(
            asset_id,
            format!("missing {field}"),
        )),
    }
}

fn to_decimal(value: f64, field: &str, asset_id: &str) -> Result<Decimal, MarketDataError> {
    if !value.is_finite() {
        return Err(MarketDataError::data_integrity(
            asset_id,
            format!("non-finite {field}"),
        ));
    }
    Decimal::from_f64(value).ok_or_else(|| {
        MarketDataError::data_integrity(asset_id, format!("{field} out of range"))
    })
}

fn required_decimal(
    value: Option<f64>,
    field: &str,
    asset_id: &str,
) -> Result<Decimal, MarketDataError> {
    let value = value
        .ok_or_else(|| MarketDataError::data_integrity(asset_id, format!("missing {field}")))?;
    to_decimal(value, field, asset_id)
}

fn optional_decimal(value: Option<f64>) -> Option<Decimal> {
    value
        .filter(|v| v.is_finite())
        .and_then(Decimal::from_f64)
}

impl TryFrom<CoinGeckoMarket> for MarketAsset {
    type Error = MarketDataError;

    fn try_from(row: CoinGeckoMarket) -> Result<Self, Self::Error> {
        let id = required_text(row.id, "id", "<unknown>")?;
        let symbol = required_text(row.symbol, "symbol", &id)?;
        let name = required_text(row.name, "name", &id)?;

        let current_price = required_decimal(row.current_price, "current_price", &id)?;
        if current_price < Decimal::ZERO {
            return Err(MarketDataError::data_integrity(
                &id,
                "negative current_price",
            ));
        }
        let price_change_percentage_24h = required_decimal(
            row.price_change_percentage_24h,
            "price_change_percentage_24h",
            &id,
        )?;

        let last_updated = row
            .last_updated
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.with_timezone(&Utc));

        Ok(MarketAsset {
            id,
            symbol,
            name,
            current_price,
            price_change_percentage_24h,
            market_cap: optional_decimal(row.market_cap),
            total_volume: optional_decimal(row.total_volume),
            image: row.image.filter(|url| !url.is_empty()),
            last_updated,
        })
    }
}
