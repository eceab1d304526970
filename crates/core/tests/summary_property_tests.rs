//! Property-based integration tests for the P&L engine.
//!
//! These tests verify that the null-propagation and division rules hold
//! across generated holdings, using the `proptest` crate.

use folioview_core::portfolio::holdings::{Holding, HoldingSummary};
use folioview_core::portfolio::summary::{calculate_holding_summary, calculate_portfolio_summary};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Generates a non-negative price with two decimal places.
fn arb_price() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

/// Generates a strictly positive price with two decimal places.
fn arb_positive_price() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_quantity() -> impl Strategy<Value = i64> {
    0i64..100_000
}

/// Generates a holding where every field may independently be absent.
fn arb_holding() -> impl Strategy<Value = Holding> {
    (
        proptest::option::of("[A-Z]{3,10}"),
        proptest::option::of(arb_quantity()),
        proptest::option::of(arb_price()),
        proptest::option::of(arb_price()),
        proptest::option::of(arb_price()),
    )
        .prop_map(|(symbol, quantity, ltp, avg_price, close)| Holding {
            symbol,
            quantity,
            ltp,
            avg_price,
            close,
        })
}

fn arb_summaries(max_count: usize) -> impl Strategy<Value = Vec<HoldingSummary>> {
    proptest::collection::vec(arb_holding(), 0..=max_count).prop_map(|holdings| {
        holdings
            .iter()
            .filter_map(|h| calculate_holding_summary(Some(h)))
            .collect()
    })
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Current value is always `ltp * quantity` when both are present.
    #[test]
    fn prop_current_value_is_ltp_times_quantity(
        quantity in arb_quantity(),
        ltp in arb_price(),
        avg_price in arb_price(),
        close in arb_price(),
    ) {
        let holding = Holding::new("SYM", quantity, ltp, avg_price, close);
        let summary = calculate_holding_summary(Some(&holding)).unwrap();

        prop_assert_eq!(summary.current_value, Some(ltp * Decimal::from(quantity)));
    }

    /// A zero investment never yields a P&L percentage.
    #[test]
    fn prop_zero_investment_has_no_pnl_percentage(
        ltp in arb_price(),
        close in arb_price(),
        zero_quantity in any::<bool>(),
        quantity in arb_quantity(),
    ) {
        let holding = if zero_quantity {
            Holding::new("SYM", 0, ltp, Decimal::new(5000, 2), close)
        } else {
            Holding::new("SYM", quantity, ltp, Decimal::ZERO, close)
        };
        let summary = calculate_holding_summary(Some(&holding)).unwrap();

        prop_assert_eq!(summary.total_investment, Some(Decimal::ZERO));
        prop_assert!(summary.total_pnl_percentage.is_none());
    }

    /// A zero LTP never yields a day-change percentage.
    #[test]
    fn prop_zero_ltp_has_no_todays_percentage(
        quantity in arb_quantity(),
        avg_price in arb_price(),
        close in arb_price(),
    ) {
        let holding = Holding::new("SYM", quantity, Decimal::ZERO, avg_price, close);
        let summary = calculate_holding_summary(Some(&holding)).unwrap();

        prop_assert!(summary.todays_pnl_percentage.is_none());
        prop_assert_eq!(summary.current_value, Some(Decimal::ZERO));
    }

    /// Without a quantity only the day-change percentage survives.
    #[test]
    fn prop_missing_quantity_keeps_only_todays_percentage(
        ltp in arb_positive_price(),
        avg_price in arb_price(),
        close in arb_price(),
    ) {
        let holding = Holding {
            symbol: Some("SYM".to_string()),
            quantity: None,
            ltp: Some(ltp),
            avg_price: Some(avg_price),
            close: Some(close),
        };
        let summary = calculate_holding_summary(Some(&holding)).unwrap();

        prop_assert!(summary.current_value.is_none());
        prop_assert!(summary.total_investment.is_none());
        prop_assert!(summary.total_pnl.is_none());
        prop_assert!(summary.todays_pnl.is_none());
        prop_assert_eq!(
            summary.todays_pnl_percentage,
            Some((close - ltp) / ltp * Decimal::ONE_HUNDRED)
        );
    }

    /// Aggregates are sums of the present per-holding values only.
    #[test]
    fn prop_aggregate_sums_present_values(summaries in arb_summaries(20)) {
        let aggregate = calculate_portfolio_summary(Some(summaries.as_slice()));

        if summaries.is_empty() {
            prop_assert!(aggregate.is_none());
        } else {
            let aggregate = aggregate.unwrap();
            let present: Vec<Decimal> = summaries.iter().filter_map(|s| s.current_value).collect();
            let expected = if present.is_empty() {
                None
            } else {
                Some(present.iter().copied().sum::<Decimal>())
            };
            prop_assert_eq!(aggregate.current_value, expected);

            let present: Vec<Decimal> = summaries.iter().filter_map(|s| s.todays_pnl).collect();
            let expected = if present.is_empty() {
                None
            } else {
                Some(present.iter().copied().sum::<Decimal>())
            };
            prop_assert_eq!(aggregate.todays_pnl, expected);
        }
    }

    /// Aggregate P&L is derived from the aggregate value and investment.
    #[test]
    fn prop_aggregate_pnl_is_value_minus_investment(summaries in arb_summaries(20)) {
        if let Some(aggregate) = calculate_portfolio_summary(Some(summaries.as_slice())) {
            match (aggregate.current_value, aggregate.total_investment) {
                (Some(value), Some(investment)) => {
                    prop_assert_eq!(aggregate.total_pnl, Some(value - investment));
                    if investment.is_zero() {
                        prop_assert!(aggregate.total_pnl_percentage.is_none());
                    }
                }
                _ => prop_assert!(aggregate.total_pnl.is_none()),
            }
        }
    }
}
