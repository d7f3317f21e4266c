//! Property-based integration tests for portfolio aggregation.
//!
//! These tests verify that allocation and totals hold across arbitrary
//! listings and holdings, using the `proptest` crate for random test case
//! generation.

use cryptofolio_core::portfolio::{aggregate_portfolio, Holding, SecondaryCurrency};
use cryptofolio_market_data::MarketAsset;
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Generates a decimal with two fractional digits in `[0, max_cents / 100)`.
fn arb_amount(max_cents: i64) -> impl Strategy<Value = Decimal> {
    (0..max_cents).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generates a 24h change between -99.99% and +99.99%.
fn arb_change() -> impl Strategy<Value = Decimal> {
    (-9_999i64..10_000).prop_map(|bp| Decimal::new(bp, 2))
}

/// Generates a listing of assets named `a0..aN`.
fn arb_markets() -> impl Strategy<Value = Vec<MarketAsset>> {
    prop::collection::vec((arb_amount(10_000_000), arb_change()), 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (price, change))| {
                let id = format!("a{}", i);
                MarketAsset::new(id.clone(), id.clone(), id, price, change)
            })
            .collect()
    })
}

/// Generates holdings that may reference ids outside the listing.
fn arb_holdings() -> impl Strategy<Value = Vec<Holding>> {
    prop::collection::vec((0usize..16, arb_amount(1_000_000)), 0..12).prop_map(|rows| {
        rows.into_iter()
            .map(|(i, quantity)| Holding::new(format!("a{}", i), quantity))
            .collect()
    })
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn allocations_sum_to_one_hundred(markets in arb_markets(), holdings in arb_holdings()) {
        let portfolio = aggregate_portfolio(&markets, &holdings, &SecondaryCurrency::default());

        let sum: Decimal = portfolio.assets.iter().map(|a| a.allocation).sum();
        if portfolio.total_value > Decimal::ZERO {
            prop_assert!((sum - Decimal::ONE_HUNDRED).abs() <= Decimal::new(1, 6));
        } else {
            prop_assert!(portfolio.assets.iter().all(|a| a.allocation.is_zero()));
            prop_assert!(portfolio.total_change_percent.is_zero());
        }
    }

    #[test]
    fn total_is_sum_of_values(markets in arb_markets(), holdings in arb_holdings()) {
        let portfolio = aggregate_portfolio(&markets, &holdings, &SecondaryCurrency::default());

        let sum: Decimal = portfolio.assets.iter().map(|a| a.value).sum();
        prop_assert_eq!(portfolio.total_value, sum);
        prop_assert!(portfolio.total_value >= Decimal::ZERO);
    }

    #[test]
    fn only_listed_assets_survive(markets in arb_markets(), holdings in arb_holdings()) {
        let portfolio = aggregate_portfolio(&markets, &holdings, &SecondaryCurrency::default());

        let matched = holdings
            .iter()
            .filter(|h| markets.iter().any(|m| m.id == h.asset_id))
            .count();
        prop_assert_eq!(portfolio.assets.len(), matched);
    }

    #[test]
    fn change_percent_stays_within_asset_bounds(markets in arb_markets(), holdings in arb_holdings()) {
        let portfolio = aggregate_portfolio(&markets, &holdings, &SecondaryCurrency::default());

        if portfolio.total_value > Decimal::ZERO {
            let tolerance = Decimal::new(1, 6);
            let min = portfolio.assets.iter().map(|a| a.asset.price_change_percentage_24h).min();
            let max = portfolio.assets.iter().map(|a| a.asset.price_change_percentage_24h).max();
            if let (Some(min), Some(max)) = (min, max) {
                prop_assert!(portfolio.total_change_percent >= min - tolerance);
                prop_assert!(portfolio.total_change_percent <= max + tolerance);
            }
        }
    }
}
