//! Market group aggregator — turns a flat list of collateral types into
//! per-token summary rows.
//!
//! For each input list:
//! 1. Derive the group key from the symbol (`ETH-A` → `ETH`)
//! 2. Floor each record's available debt at zero
//! 3. Fold min/max fee, min/max ratio and total available per group
//!
//! Groups come out in first-seen order and members keep input order.

use indexmap::IndexMap;
use indexmap::map::Entry;
use rust_decimal::Decimal;

use markets_common::types::{CollateralTypeRecord, DerivedRecord, GroupSummary};

/// Stateless aggregator over collateral-type lists.
pub struct MarketGroupAggregator;

impl MarketGroupAggregator {
    /// Group `records` by token and compute each group's summary.
    pub fn aggregate(records: &[CollateralTypeRecord]) -> Vec<GroupSummary> {
        let mut groups: IndexMap<&str, Vec<DerivedRecord>> = IndexMap::new();
        for record in records {
            let derived = DerivedRecord::from(record.clone());
            match groups.entry(record.gem()) {
                Entry::Occupied(mut entry) => entry.get_mut().push(derived),
                Entry::Vacant(entry) => {
                    entry.insert(vec![derived]);
                }
            }
        }

        let summaries: Vec<GroupSummary> = groups
            .into_iter()
            .filter_map(|(gem, members)| Self::summarize(gem, members))
            .collect();

        tracing::debug!(
            records = records.len(),
            groups = summaries.len(),
            "Aggregated collateral types"
        );

        summaries
    }

    /// Fold a group's members into its summary. `None` for an empty group.
    pub fn summarize(gem: &str, members: Vec<DerivedRecord>) -> Option<GroupSummary> {
        let first = members.first()?;
        let seed = Bounds::from(first);

        let bounds = members.iter().skip(1).fold(seed, |acc, member| acc.absorb(member));
        let total_available = members
            .iter()
            .map(|m| m.max_dai_available_to_generate)
            .fold(Decimal::ZERO, Decimal::saturating_add);

        Some(GroupSummary {
            gem: gem.to_string(),
            min_fee: bounds.min_fee,
            max_fee: bounds.max_fee,
            min_ratio: bounds.min_ratio,
            max_ratio: bounds.max_ratio,
            total_available,
            members,
        })
    }
}

/// Running min/max over a group's fees and ratios.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_fee: Decimal,
    max_fee: Decimal,
    min_ratio: Decimal,
    max_ratio: Decimal,
}

impl Bounds {
    fn absorb(self, member: &DerivedRecord) -> Self {
        let fee = member.record.annual_stability_fee;
        let ratio = member.record.liquidation_ratio;
        Self {
            min_fee: self.min_fee.min(fee),
            max_fee: self.max_fee.max(fee),
            min_ratio: self.min_ratio.min(ratio),
            max_ratio: self.max_ratio.max(ratio),
        }
    }
}

impl From<&DerivedRecord> for Bounds {
    fn from(member: &DerivedRecord) -> Self {
        let fee = member.record.annual_stability_fee;
        let ratio = member.record.liquidation_ratio;
        Self {
            min_fee: fee,
            max_fee: fee,
            min_ratio: ratio,
            max_ratio: ratio,
        }
    }
}
