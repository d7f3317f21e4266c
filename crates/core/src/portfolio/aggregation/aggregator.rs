//! Joins a market listing with a holdings list into a [`Portfolio`].

use std::collections::HashMap;

use cryptofolio_market_data::MarketAsset;
use log::{debug, warn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{Portfolio, PortfolioAsset, SecondaryCurrency};
use crate::portfolio::holdings::Holding;

/// Computes the portfolio summary for `holdings` priced by `markets`.
///
/// Holdings without a matching market asset are dropped, as are holdings with
/// a negative quantity or a value too large to represent. When the matched total is zero every allocation and
/// the weighted change are reported as zero. Output order follows `holdings`.
pub fn aggregate_portfolio(
    markets: &[MarketAsset],
    holdings: &[Holding],
    secondary: &SecondaryCurrency,
) -> Portfolio {
    let mut by_id: HashMap<&str, &MarketAsset> = HashMap::with_capacity(markets.len());
    for asset in markets {
        by_id.entry(asset.id.as_str()).or_insert(asset);
    }

    let mut assets: Vec<PortfolioAsset> = Vec::with_capacity(holdings.len());
    let mut total_value = Decimal::ZERO;
    let mut weighted_change = Decimal::ZERO;

    for holding in holdings {
        if holding.quantity < Decimal::ZERO {
            warn!(
                "Ignoring holding '{}' with negative quantity {}",
                holding.asset_id, holding.quantity
            );
            continue;
        }
        let Some(asset) = by_id.get(holding.asset_id.as_str()) else {
            debug!("No market data for holding '{}'", holding.asset_id);
            continue;
        };

        // A holding whose value does not fit a Decimal is excluded like any
        // other integrity violation; the running totals stay untouched.
        let sums = asset.current_price.checked_mul(holding.quantity).and_then(|value| {
            let change = value.checked_mul(asset.price_change_percentage_24h / dec!(100))?;
            Some((
                value,
                total_value.checked_add(value)?,
                weighted_change.checked_add(change)?,
            ))
        });
        let Some((value, total, weighted)) = sums else {
            warn!(
                "Ignoring holding '{}': value of {} × {} overflows",
                holding.asset_id, holding.quantity, asset.current_price
            );
            continue;
        };

        total_value = total;
        weighted_change = weighted;
        assets.push(PortfolioAsset {
            asset: (*asset).clone(),
            holdings: holding.quantity,
            value,
            allocation: Decimal::ZERO,
        });
    }

    let total_change_percent = if total_value > Decimal::ZERO {
        for asset in assets.iter_mut() {
            asset.allocation = asset.value / total_value * dec!(100);
        }
        weighted_change / total_value * dec!(100)
    } else {
        Decimal::ZERO
    };

    // Equal to total_value × total_change_percent / 100, without the rounding.
    let total_change_absolute = weighted_change;

    Portfolio {
        total_value,
        total_change_absolute,
        total_change_percent,
        total_value_secondary: project(total_value, secondary.rate),
        total_change_secondary: project(total_change_absolute, secondary.rate),
        secondary_currency: secondary.code.clone(),
        assets,
    }
}

/// Secondary-currency projection, saturating at the representable range.
fn project(amount: Decimal, rate: Decimal) -> Decimal {
    amount.checked_mul(rate).unwrap_or_else(|| {
        warn!("Secondary projection of {} × {} saturated", amount, rate);
        if amount.is_sign_negative() != rate.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        }
    })
}
