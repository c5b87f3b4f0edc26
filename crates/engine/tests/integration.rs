//! Integration tests for the aggregation pipeline.
//!
//! Exercises `MarketGroupAggregator` and `BorrowMarketsPage` through the
//! public API with a realistic multi-collateral data set.
//!
//! ```bash
//! cargo test -p markets-engine --test integration
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use markets_common::types::CollateralTypeRecord;
use markets_engine::aggregator::MarketGroupAggregator;
use markets_engine::page::BorrowMarketsPage;

// ============================================================
// Shared helpers
// ============================================================

fn record(symbol: &str, fee: Decimal, ratio: Decimal, available: Decimal) -> CollateralTypeRecord {
    CollateralTypeRecord {
        symbol: symbol.to_string(),
        annual_stability_fee: fee,
        liquidation_ratio: ratio,
        collateral_debt_available: available,
    }
}

/// A mainnet-like snapshot, interleaved so groups are not contiguous.
fn market_snapshot() -> Vec<CollateralTypeRecord> {
    vec![
        record("ETH-A", dec!(0.025), dec!(1.5), dec!(41234567.123456789012345678)),
        record("BAT-A", dec!(0.04), dec!(1.5), dec!(-1250.5)),
        record("WBTC-A", dec!(0.045), dec!(1.5), dec!(8000000)),
        record("ETH-B", dec!(0.06), dec!(1.3), dec!(0.000000000000000001)),
        record("USDC-A", dec!(0.0), dec!(1.01), dec!(250000)),
        record("ETH-C", dec!(0.005), dec!(1.75), dec!(-3)),
        record("USDC-B", dec!(0.5), dec!(1.2), dec!(30000000)),
        record("SAI", dec!(0.095), dec!(1.5), dec!(42)),
    ]
}

// ============================================================
// Aggregation properties
// ============================================================

#[test]
fn test_members_cover_input_exactly_once() {
    let input = market_snapshot();
    let groups = MarketGroupAggregator::aggregate(&input);

    let mut seen: Vec<String> = groups
        .iter()
        .flat_map(|g| g.members.iter().map(|m| m.record.symbol.clone()))
        .collect();
    let mut expected: Vec<String> = input.iter().map(|r| r.symbol.clone()).collect();
    seen.sort();
    expected.sort();
    assert_eq!(seen, expected);

    for group in &groups {
        for member in &group.members {
            assert_eq!(member.record.gem(), group.gem);
            assert!(input.contains(&member.record));
        }
    }
}

#[test]
fn test_bounds_are_ordered() {
    for group in MarketGroupAggregator::aggregate(&market_snapshot()) {
        assert!(group.min_fee <= group.max_fee, "fee bounds for {}", group.gem);
        assert!(group.min_ratio <= group.max_ratio, "ratio bounds for {}", group.gem);
        assert!(group.total_available >= Decimal::ZERO);
    }
}

#[test]
fn test_available_is_clamped_per_record() {
    for group in MarketGroupAggregator::aggregate(&market_snapshot()) {
        for member in &group.members {
            let raw = member.record.collateral_debt_available;
            let expected = if raw < Decimal::ZERO { Decimal::ZERO } else { raw };
            assert_eq!(member.max_dai_available_to_generate, expected);
        }
    }
}

#[test]
fn test_totals_are_exact() {
    let groups = MarketGroupAggregator::aggregate(&market_snapshot());
    let eth = groups.iter().find(|g| g.gem == "ETH").unwrap();
    assert_eq!(eth.total_available, dec!(41234567.123456789012345679));

    let bat = groups.iter().find(|g| g.gem == "BAT").unwrap();
    assert_eq!(bat.total_available, Decimal::ZERO);

    let usdc = groups.iter().find(|g| g.gem == "USDC").unwrap();
    assert_eq!(usdc.total_available, dec!(30250000));
    assert_eq!(usdc.min_fee, dec!(0.0));
    assert_eq!(usdc.max_fee, dec!(0.5));
}

#[test]
fn test_aggregate_is_idempotent() {
    let input = market_snapshot();
    let first = MarketGroupAggregator::aggregate(&input);
    let second = MarketGroupAggregator::aggregate(&input);
    assert_eq!(first, second);
}

#[test]
fn test_grouping_order_is_first_seen() {
    let groups = MarketGroupAggregator::aggregate(&market_snapshot());
    let gems: Vec<&str> = groups.iter().map(|g| g.gem.as_str()).collect();
    assert_eq!(gems, vec!["ETH", "BAT", "WBTC", "USDC", "SAI"]);

    let eth: Vec<&str> = groups[0]
        .members
        .iter()
        .map(|m| m.record.symbol.as_str())
        .collect();
    assert_eq!(eth, vec!["ETH-A", "ETH-B", "ETH-C"]);
}

#[test]
fn test_grouping_order_ignores_values() {
    let mut input = market_snapshot();
    for r in &mut input {
        r.annual_stability_fee = dec!(1) - r.annual_stability_fee;
        r.collateral_debt_available = -r.collateral_debt_available;
    }
    let gems: Vec<String> = MarketGroupAggregator::aggregate(&input)
        .into_iter()
        .map(|g| g.gem)
        .collect();
    assert_eq!(gems, vec!["ETH", "BAT", "WBTC", "USDC", "SAI"]);
}

#[test]
fn test_single_bat_group() {
    let groups =
        MarketGroupAggregator::aggregate(&[record("BAT-A", dec!(0.04), dec!(1.5), dec!(100))]);
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].min_fee, groups[0].max_fee);
    assert_eq!(groups[0].min_ratio, groups[0].max_ratio);
}

#[test]
fn test_summary_json_uses_decimal_strings() {
    let groups = MarketGroupAggregator::aggregate(&[
        record("ETH-A", dec!(0.02), dec!(1.5), dec!(1000)),
        record("ETH-B", dec!(0.04), dec!(1.75), dec!(-50)),
    ]);
    let json = serde_json::to_value(&groups).unwrap();
    assert_eq!(json[0]["gem"], "ETH");
    assert_eq!(json[0]["min_fee"], "0.02");
    assert_eq!(json[0]["max_ratio"], "1.75");
    assert_eq!(json[0]["total_available"], "1000");
    assert_eq!(json[0]["members"][1]["max_dai_available_to_generate"], "0");
}

// ============================================================
// Page lifecycle
// ============================================================

#[test]
fn test_page_lifecycle() {
    let mut page = BorrowMarketsPage::new();

    // Loading: nothing to show yet
    assert!(page.render(None).is_none());

    // First value arrives
    let rows = page.render(Some(market_snapshot())).unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0].fee_range, "0.5% - 6%");
    assert_eq!(rows[0].ratio_range, "130% - 175%");
    assert_eq!(rows[0].total_available, "41.23M");
    assert_eq!(rows[4].gem, "SAI");
    assert_eq!(rows[4].token_name, None);
    assert_eq!(rows[4].risk_profiles[0].risk_profile, None);

    // User expands WBTC
    assert!(page.toggle("WBTC"));

    // Feed revalidates: previous data still served, toggle kept
    let rows = page.render(None).unwrap();
    assert_eq!(rows.len(), 5);
    assert!(rows[2].expanded);

    // Fresh data with fewer groups replaces the old
    let rows = page
        .render(Some(vec![record("WBTC-A", dec!(0.045), dec!(1.5), dec!(1))]))
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].expanded);
    assert_eq!(rows[0].total_available, "1");
}
