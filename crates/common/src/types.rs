use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Separator between the token and the risk-profile suffix of a symbol.
pub const SYMBOL_SEPARATOR: char = '-';

/// One collateral type as published by the feed (e.g. `ETH-A`).
///
/// Decimals travel as JSON strings so they never pass through `f64`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollateralTypeRecord {
    /// `<TOKEN>-<suffix>`, e.g. `ETH-A`
    pub symbol: String,
    /// Annual stability fee as a fraction (0.02 = 2%)
    #[serde(with = "rust_decimal::serde::str")]
    pub annual_stability_fee: Decimal,
    /// Minimum collateralization ratio (1.5 = 150%)
    #[serde(with = "rust_decimal::serde::str")]
    pub liquidation_ratio: Decimal,
    /// Remaining debt capacity; negative once the ceiling is exceeded
    #[serde(with = "rust_decimal::serde::str")]
    pub collateral_debt_available: Decimal,
}

impl CollateralTypeRecord {
    /// Group key: everything before the first `-`, or the whole symbol.
    pub fn gem(&self) -> &str {
        self.symbol
            .split(SYMBOL_SEPARATOR)
            .next()
            .unwrap_or(&self.symbol)
    }

    /// Risk-profile suffix: the second `-` segment, if any.
    pub fn risk_profile(&self) -> Option<&str> {
        self.symbol.split(SYMBOL_SEPARATOR).nth(1)
    }
}

/// A record together with its debt available to generate, floored at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedRecord {
    #[serde(flatten)]
    pub record: CollateralTypeRecord,
    #[serde(with = "rust_decimal::serde::str")]
    pub max_dai_available_to_generate: Decimal,
}

impl From<CollateralTypeRecord> for DerivedRecord {
    fn from(record: CollateralTypeRecord) -> Self {
        let max_dai_available_to_generate = record.collateral_debt_available.max(Decimal::ZERO);
        Self {
            record,
            max_dai_available_to_generate,
        }
    }
}

/// Per-token summary row with its member risk profiles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSummary {
    pub gem: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub min_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub max_fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub min_ratio: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub max_ratio: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total_available: Decimal,
    /// Members in input order
    pub members: Vec<DerivedRecord>,
}
