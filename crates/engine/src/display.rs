//! Display formatting for the markets table.
//!
//! Pure functions over `Decimal`; nothing here goes through `f64`.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Decimal places shown for percentages and prettified amounts.
const DISPLAY_DP: u32 = 2;

/// Magnitude suffixes, largest first.
const MAGNITUDES: &[(Decimal, &str)] = &[
    (dec!(1000000000), "B"),
    (dec!(1000000), "M"),
    (dec!(1000), "K"),
];

/// Format a fraction as a percentage number without the `%` sign.
///
/// `0.02` → `"2"`, `0.035` → `"3.5"`, `1.5` → `"150"`.
pub fn format_percentage(value: Decimal) -> String {
    value
        .saturating_mul(dec!(100))
        .round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
        .to_string()
}

/// `"2%"` when the bounds match, `"2% - 4%"` otherwise.
pub fn format_percentage_range(min: Decimal, max: Decimal) -> String {
    if min == max {
        format!("{}%", format_percentage(min))
    } else {
        format!("{}% - {}%", format_percentage(min), format_percentage(max))
    }
}

/// Short human-readable amount, truncated rather than rounded.
///
/// `1234567` → `"1.23M"`, `1500` → `"1.5K"`, `999.999` → `"999.99"`.
pub fn prettify_number(value: Decimal) -> String {
    let magnitude = value.abs();
    let (scaled, suffix) = MAGNITUDES
        .iter()
        .find(|(threshold, _)| magnitude >= *threshold)
        .map(|(threshold, suffix)| (value / *threshold, *suffix))
        .unwrap_or((value, ""));

    let truncated = scaled
        .round_dp_with_strategy(DISPLAY_DP, RoundingStrategy::ToZero)
        .normalize();
    format!("{truncated}{suffix}")
}

/// Full token name shown next to the ticker, for the tokens the page knows.
pub fn token_name(gem: &str) -> Option<&'static str> {
    match gem {
        "ETH" => Some("Ether"),
        "BAT" => Some("Basic Attention Token"),
        "WBTC" => Some("Wrapped Bitcoin"),
        "USDC" => Some("USD Coin"),
        "MANA" => Some("Mana"),
        "ZRX" => Some("0x"),
        "KNC" => Some("Kyber Network"),
        "TUSD" => Some("TrueUSD"),
        _ => None,
    }
}
