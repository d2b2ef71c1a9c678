//! Tabular rendering of the ordered report rows
//!
//! The report core produces an ordered `Vec<EnrichedRow>`; this crate turns
//! it into delimited text or CSV suitable for export to a spreadsheet. The
//! category column renders its display label ("E - Expense", "Unknown"),
//! not the serialization name, and an absent account_type renders empty.

pub mod error;

use std::io::Write;

use glreport_core::EnrichedRow;

pub use error::{ExportError, ExportResult};

/// Output column headers, in report order
pub const COLUMNS: &[&str] = &[
    "account_number",
    "fiscal_year",
    "fiscal_period",
    "cost_center_name",
    "department_name",
    "alfre",
    "account_type",
    "account_type_category",
    "account_description",
    "budget",
    "encumbered_amt",
    "dr_amount",
    "cr_amount",
    "transaction_description",
];

/// Write the report as CSV with a header row
pub fn write_csv<W: Write>(rows: &[EnrichedRow], writer: W) -> ExportResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(COLUMNS)?;
    for row in rows {
        csv_writer.write_record(record(row))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Render the report as delimited text with a header line.
///
/// No quoting is applied; pick a delimiter that does not occur in the
/// description fields, or use [`write_csv`] for quoted output.
pub fn to_delimited(rows: &[EnrichedRow], delimiter: char) -> String {
    let separator = delimiter.to_string();
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(COLUMNS.join(&separator));
    for row in rows {
        lines.push(record(row).join(&separator));
    }
    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn record(row: &EnrichedRow) -> Vec<String> {
    vec![
        row.account_number.clone(),
        row.fiscal_year.to_string(),
        row.fiscal_period.to_string(),
        row.cost_center_name.clone(),
        row.department_name.clone(),
        row.alfre.clone(),
        row.account_type.clone().unwrap_or_default(),
        row.account_type_category.to_string(),
        row.account_description.clone(),
        row.budget.to_string(),
        row.encumbered_amt.to_string(),
        row.dr_amount.to_string(),
        row.cr_amount.to_string(),
        row.transaction_description.clone(),
    ]
}
