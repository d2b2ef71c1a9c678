//! glreport — filtered, enriched General Ledger transaction detail reports
//!
//! Joins transaction line items against a chart-of-accounts master, attaches
//! business-friendly names (cost center, department, account-type category)
//! and applies optional range/equality filters. The core is a pure function:
//! `(ChartAccount[], HistoryLine[], FilterParameters) -> EnrichedRow[]`.
//!
//! ```
//! use glreport::{transaction_detail_report, FilterParameters};
//!
//! let chart = glreport::read_chart_accounts_from(
//!     "fiscal_year,acct_1,acct_2,acct_3,acct_4,alfre,account_type,description,budget,encumbered_amt\n\
//!      2026,1,5,100,200,E,Expense-Op,Travel,1000,0\n".as_bytes(),
//! ).unwrap();
//! let history = glreport::read_history_lines_from(
//!     "gl_history_id,fiscal_year,fiscal_period,acct_1,acct_2,acct_3,acct_4,dr_amount,cr_amount,description\n\
//!      7,2026,3,1,5,100,200,50,0,Flight\n".as_bytes(),
//! ).unwrap();
//!
//! let params = FilterParameters {
//!     cost_center: Some("01".to_string()),
//!     ..Default::default()
//! };
//! let rows = transaction_detail_report(&chart, &history, &params);
//!
//! assert_eq!(rows[0].account_number, "01-05-100-200");
//! assert_eq!(rows[0].cost_center_name, "MW - Marina Water");
//! ```

pub use glreport_core::{
    account_type_leading_char, cost_center_name, department_name, enrich_chart, filter_history,
    transaction_detail_report, AccountKey, AccountTypeCategory, ChartAccount, EnrichedAccount,
    EnrichedRow, GeneralLedger, HistoryLine, COST_CENTER_NAMES, DEPARTMENT_NAMES, OTHER_UNKNOWN,
};
pub use glreport_export::{to_delimited, write_csv, ExportError, ExportResult, COLUMNS};
pub use glreport_loader::{
    load_chart_accounts, load_history_lines, read_chart_accounts_from, read_history_lines_from,
    LoaderError, LoaderResult,
};
pub use glreport_params::{
    fiscal_key, FilterParameters, ParamsError, ParamsResult, ResolvedBounds, SegmentRange,
};
