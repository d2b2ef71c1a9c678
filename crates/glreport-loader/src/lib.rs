//! CSV materialization of the chart-of-accounts and history relations
//!
//! The report core consumes in-memory relations; this crate is the boundary
//! that materializes them from headered CSV files. Column names match the
//! model field names (`fiscal_year`, `acct_1` .. `acct_4`, ...). An empty
//! `account_type` field deserializes as absent.

pub mod error;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use glreport_core::{ChartAccount, HistoryLine};

pub use error::{LoaderError, LoaderResult};

/// Load the chart-of-accounts relation from a headered CSV file
pub fn load_chart_accounts(path: impl AsRef<Path>) -> LoaderResult<Vec<ChartAccount>> {
    let path = path.as_ref();
    let file = open_input(path)?;
    let rows = read_chart_accounts_from(file)?;
    log::info!("loaded {} chart accounts from {}", rows.len(), path.display());
    Ok(rows)
}

/// Load the transaction history relation from a headered CSV file
pub fn load_history_lines(path: impl AsRef<Path>) -> LoaderResult<Vec<HistoryLine>> {
    let path = path.as_ref();
    let file = open_input(path)?;
    let rows = read_history_lines_from(file)?;
    log::info!("loaded {} history lines from {}", rows.len(), path.display());
    Ok(rows)
}

/// Read chart-of-accounts rows from any CSV source
pub fn read_chart_accounts_from<R: Read>(reader: R) -> LoaderResult<Vec<ChartAccount>> {
    read_rows(reader)
}

/// Read history lines from any CSV source
pub fn read_history_lines_from<R: Read>(reader: R) -> LoaderResult<Vec<HistoryLine>> {
    read_rows(reader)
}

fn open_input(path: &Path) -> LoaderResult<File> {
    if !path.exists() {
        return Err(LoaderError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(File::open(path)?)
}

fn read_rows<R: Read, T: serde::de::DeserializeOwned>(reader: R) -> LoaderResult<Vec<T>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for result in csv_reader.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}
