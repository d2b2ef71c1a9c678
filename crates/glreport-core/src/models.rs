//! Core data models for the transaction detail report

use glreport_params::fiscal_key;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::AccountTypeCategory;

/// Composite key joining chart-of-accounts rows to history rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountKey {
    /// Fiscal year the account row belongs to
    pub fiscal_year: i32,
    /// Account segment 1 (cost center)
    pub acct_1: i64,
    /// Account segment 2 (department)
    pub acct_2: i64,
    /// Account segment 3
    pub acct_3: i64,
    /// Account segment 4
    pub acct_4: i64,
}

impl AccountKey {
    /// Format the segments as the display account number: segments
    /// zero-padded to widths 2, 2, 3, 3 and joined with hyphens,
    /// e.g. "01-05-100-200"
    pub fn account_number(&self) -> String {
        format!(
            "{:02}-{:02}-{:03}-{:03}",
            self.acct_1, self.acct_2, self.acct_3, self.acct_4
        )
    }

    /// The four segments in order
    pub fn segments(&self) -> [i64; 4] {
        [self.acct_1, self.acct_2, self.acct_3, self.acct_4]
    }
}

/// One row of the chart-of-accounts master
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAccount {
    /// Fiscal year the account row belongs to
    pub fiscal_year: i32,
    /// Account segment 1 (cost center)
    pub acct_1: i64,
    /// Account segment 2 (department)
    pub acct_2: i64,
    /// Account segment 3
    pub acct_3: i64,
    /// Account segment 4
    pub acct_4: i64,
    /// ALFRE rollup code
    pub alfre: String,
    /// Free-text account type; the trimmed leading character determines
    /// the report category
    pub account_type: Option<String>,
    /// Account description
    pub description: String,
    /// Budgeted amount
    pub budget: Decimal,
    /// Encumbered amount
    pub encumbered_amt: Decimal,
}

impl ChartAccount {
    /// The composite join key for this row
    pub fn key(&self) -> AccountKey {
        AccountKey {
            fiscal_year: self.fiscal_year,
            acct_1: self.acct_1,
            acct_2: self.acct_2,
            acct_3: self.acct_3,
            acct_4: self.acct_4,
        }
    }

    /// Category derived from the account_type field
    pub fn category(&self) -> AccountTypeCategory {
        AccountTypeCategory::from_account_type(self.account_type.as_deref())
    }
}

/// One general-ledger transaction line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryLine {
    /// Unique row id, also the final sort tie-break
    pub gl_history_id: i64,
    /// Fiscal year of the transaction
    pub fiscal_year: i32,
    /// Fiscal period of the transaction
    pub fiscal_period: i32,
    /// Account segment 1 (cost center)
    pub acct_1: i64,
    /// Account segment 2 (department)
    pub acct_2: i64,
    /// Account segment 3
    pub acct_3: i64,
    /// Account segment 4
    pub acct_4: i64,
    /// Debit amount
    pub dr_amount: Decimal,
    /// Credit amount
    pub cr_amount: Decimal,
    /// Transaction description
    pub description: String,
}

impl HistoryLine {
    /// The composite key referencing the chart-of-accounts master
    pub fn key(&self) -> AccountKey {
        AccountKey {
            fiscal_year: self.fiscal_year,
            acct_1: self.acct_1,
            acct_2: self.acct_2,
            acct_3: self.acct_3,
            acct_4: self.acct_4,
        }
    }

    /// Sortable cross-year ordinal for this line's (year, period)
    pub fn fiscal_key(&self) -> i32 {
        fiscal_key(self.fiscal_year, self.fiscal_period)
    }
}

/// One output row of the transaction detail report: a qualifying history
/// line joined to its chart account, with display fields attached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRow {
    /// Formatted account number, e.g. "01-05-100-200"
    pub account_number: String,
    /// Fiscal year of the transaction
    pub fiscal_year: i32,
    /// Fiscal period of the transaction
    pub fiscal_period: i32,
    /// Cost center name derived from acct_1
    pub cost_center_name: String,
    /// Department name derived from acct_2
    pub department_name: String,
    /// ALFRE rollup code from the chart row
    pub alfre: String,
    /// Raw account_type field from the chart row
    pub account_type: Option<String>,
    /// Category derived from account_type
    pub account_type_category: AccountTypeCategory,
    /// Chart account description
    pub account_description: String,
    /// Budgeted amount from the chart row
    pub budget: Decimal,
    /// Encumbered amount from the chart row
    pub encumbered_amt: Decimal,
    /// Debit amount of the transaction
    pub dr_amount: Decimal,
    /// Credit amount of the transaction
    pub cr_amount: Decimal,
    /// Transaction description
    pub transaction_description: String,
}
