//! Borrow Markets page view model.
//!
//! Combines the stale-value slot, the aggregator and the row toggles into the
//! rows the table renders: one summary row per token plus its risk profiles.

use serde::Serialize;

use markets_common::types::{CollateralTypeRecord, DerivedRecord, GroupSummary};

use crate::aggregator::MarketGroupAggregator;
use crate::display::{format_percentage, format_percentage_range, prettify_number, token_name};
use crate::expansion::ExpandedRows;
use crate::latest::LatestValue;

/// Summary row for one token, ready for display.
#[derive(Debug, Clone, Serialize)]
pub struct MarketRow {
    pub gem: String,
    /// Full token name, when the page knows it
    pub token_name: Option<&'static str>,
    /// e.g. `"2% - 4%"`
    pub fee_range: String,
    /// e.g. `"150% - 175%"`
    pub ratio_range: String,
    /// e.g. `"1.23M"`
    pub total_available: String,
    pub expanded: bool,
    pub summary: GroupSummary,
    pub risk_profiles: Vec<RiskProfileRow>,
}

/// Detail row for one collateral type inside an expanded group.
#[derive(Debug, Clone, Serialize)]
pub struct RiskProfileRow {
    pub symbol: String,
    /// `A` for `ETH-A`; absent when the symbol has no suffix
    pub risk_profile: Option<String>,
    pub fee: String,
    pub ratio: String,
    pub available: String,
}

impl From<&DerivedRecord> for RiskProfileRow {
    fn from(member: &DerivedRecord) -> Self {
        Self {
            symbol: member.record.symbol.clone(),
            risk_profile: member.record.risk_profile().map(str::to_string),
            fee: format!("{}%", format_percentage(member.record.annual_stability_fee)),
            ratio: format!("{}%", format_percentage(member.record.liquidation_ratio)),
            available: prettify_number(member.max_dai_available_to_generate),
        }
    }
}

/// State behind the Borrow Markets table.
#[derive(Debug, Default)]
pub struct BorrowMarketsPage {
    latest: LatestValue<Vec<CollateralTypeRecord>>,
    expanded: ExpandedRows,
}

impl BorrowMarketsPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the feed's current emission and return the records to render:
    /// the new value, or the previous one when the feed has nothing right now.
    pub fn observe(
        &mut self,
        current: Option<Vec<CollateralTypeRecord>>,
    ) -> Option<&[CollateralTypeRecord]> {
        self.latest.observe(current).map(Vec::as_slice)
    }

    /// Aggregate the records to render. `None` until any value has arrived.
    pub fn groups(&mut self, current: Option<Vec<CollateralTypeRecord>>) -> Option<Vec<GroupSummary>> {
        self.observe(current).map(MarketGroupAggregator::aggregate)
    }

    /// Build the table rows for this render.
    pub fn render(&mut self, current: Option<Vec<CollateralTypeRecord>>) -> Option<Vec<MarketRow>> {
        let groups = self.groups(current)?;
        let rows = groups
            .into_iter()
            .map(|summary| self.decorate(summary))
            .collect();
        Some(rows)
    }

    /// Flip a group's expanded state, returning the new one.
    pub fn toggle(&mut self, gem: &str) -> bool {
        self.expanded.toggle(gem)
    }

    pub fn is_expanded(&self, gem: &str) -> bool {
        self.expanded.is_expanded(gem)
    }

    pub fn expanded_count(&self) -> usize {
        self.expanded.expanded_count()
    }

    /// Whether `gem` is a group of the most recent data.
    pub fn has_group(&self, gem: &str) -> bool {
        self.latest
            .get()
            .is_some_and(|records| records.iter().any(|r| r.gem() == gem))
    }

    fn decorate(&self, summary: GroupSummary) -> MarketRow {
        MarketRow {
            gem: summary.gem.clone(),
            token_name: token_name(&summary.gem),
            fee_range: format_percentage_range(summary.min_fee, summary.max_fee),
            ratio_range: format_percentage_range(summary.min_ratio, summary.max_ratio),
            total_available: prettify_number(summary.total_available),
            expanded: self.expanded.is_expanded(&summary.gem),
            risk_profiles: summary.members.iter().map(RiskProfileRow::from).collect(),
            summary,
        }
    }
}
