//! Core models and report pipeline for the General Ledger transaction
//! detail report
//!
//! The core is a pure transform: two read-only input relations (the
//! chart-of-accounts master and the transaction history) plus an optional
//! filter record go in, an ordered sequence of enriched report rows comes
//! out. There is no shared state and no side effect beyond log output.

pub mod models;
pub mod report;
pub mod types;

use glreport_params::FilterParameters;

pub use models::{AccountKey, ChartAccount, EnrichedRow, HistoryLine};
pub use report::{enrich_chart, filter_history, transaction_detail_report, EnrichedAccount};
pub use types::{
    account_type_leading_char, cost_center_name, department_name, AccountTypeCategory,
    COST_CENTER_NAMES, DEPARTMENT_NAMES, OTHER_UNKNOWN,
};

/// Immutable snapshot of the two input relations for report invocations.
///
/// The relations are materialized once by the caller (e.g. via
/// glreport-loader) and only read afterwards; every query method takes
/// `&self`.
#[derive(Debug, Clone, Default)]
pub struct GeneralLedger {
    chart: Vec<ChartAccount>,
    history: Vec<HistoryLine>,
}

impl GeneralLedger {
    /// Create a snapshot from materialized relations
    pub fn new(chart: Vec<ChartAccount>, history: Vec<HistoryLine>) -> Self {
        Self { chart, history }
    }

    /// Number of chart-of-accounts rows in the snapshot
    pub fn chart_count(&self) -> usize {
        self.chart.len()
    }

    /// Number of history lines in the snapshot
    pub fn history_count(&self) -> usize {
        self.history.len()
    }

    /// All chart-of-accounts rows
    pub fn chart(&self) -> &[ChartAccount] {
        &self.chart
    }

    /// All history lines
    pub fn history(&self) -> &[HistoryLine] {
        &self.history
    }

    /// Look up a chart account by its full key tuple
    pub fn account(&self, key: &AccountKey) -> Option<&ChartAccount> {
        self.chart.iter().find(|account| account.key() == *key)
    }

    /// Run the transaction detail report against this snapshot
    pub fn transaction_detail(&self, params: &FilterParameters) -> Vec<EnrichedRow> {
        transaction_detail_report(&self.chart, &self.history, params)
    }
}
