//! Filter parameters and range normalization for the transaction detail report
//!
//! Every report filter is optional; an absent value means "no restriction on
//! that dimension". [`FilterParameters::resolve`] turns the optional record
//! into a fully concrete [`ResolvedBounds`] once, up front, so the filtering
//! stages compare against plain inclusive ranges instead of re-checking for
//! absent values inside every predicate.

pub mod error;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use error::{ParamsError, ParamsResult};

// ==================== Range Sentinels ====================

// Legacy report sentinels, kept verbatim so output matches the original
// report bit-for-bit. The segment upper bounds are intentionally loose:
// ranges are inclusive BETWEEN comparisons, not digit masks.
const MIN_FISCAL_YEAR: i32 = 0;
const MAX_FISCAL_YEAR: i32 = 9999;
const MIN_FISCAL_PERIOD: i32 = 0;
const MAX_FISCAL_PERIOD: i32 = 99;
const MIN_SEGMENT: i64 = 0;
const MAX_SEGMENT: [i64; 4] = [9_999, 9_999, 999_999, 999_999];

/// Sortable cross-year ordinal for a (fiscal_year, fiscal_period) pair.
///
/// Periods per year never exceed 99, so the ordinal is monotonic across
/// year boundaries: `fiscal_key(2025, 99) < fiscal_key(2026, 1)`.
pub fn fiscal_key(fiscal_year: i32, fiscal_period: i32) -> i32 {
    fiscal_year * 100 + fiscal_period
}

// ==================== Filter Parameters ====================

/// Optional report filters as supplied by the caller.
///
/// All fields are independently optional. The record can be built directly
/// or deserialized from a YAML document via [`FilterParameters::load`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterParameters {
    /// Start of the fiscal range (year part)
    pub beg_fiscal_year: Option<i32>,
    /// Start of the fiscal range (period part)
    pub beg_fiscal_period: Option<i32>,
    /// End of the fiscal range (year part)
    pub end_fiscal_year: Option<i32>,
    /// End of the fiscal range (period part)
    pub end_fiscal_period: Option<i32>,
    /// Account segment 1 range
    pub beg_acct_1: Option<i64>,
    pub end_acct_1: Option<i64>,
    /// Account segment 2 range
    pub beg_acct_2: Option<i64>,
    pub end_acct_2: Option<i64>,
    /// Account segment 3 range
    pub beg_acct_3: Option<i64>,
    pub end_acct_3: Option<i64>,
    /// Account segment 4 range
    pub beg_acct_4: Option<i64>,
    pub end_acct_4: Option<i64>,
    /// Cost center selector: 2-character code matched exactly against acct_1
    pub cost_center: Option<String>,
    /// Department selector: 2-character code matched exactly against acct_2
    pub department: Option<String>,
    /// Account type selector: 1-character code matched against the leading
    /// character of the chart's account_type field
    pub acct_type: Option<String>,
}

impl FilterParameters {
    /// Load a parameter record from a YAML file
    pub fn load(path: impl AsRef<Path>) -> ParamsResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ParamsError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = fs::read_to_string(path)?;
        let params = serde_yaml::from_str(&content)?;
        Ok(params)
    }

    /// Resolve the optional filters into concrete inclusive bounds
    pub fn resolve(&self) -> ResolvedBounds {
        ResolvedBounds {
            beg_fiscal_key: fiscal_key(
                self.beg_fiscal_year.unwrap_or(MIN_FISCAL_YEAR),
                self.beg_fiscal_period.unwrap_or(MIN_FISCAL_PERIOD),
            ),
            end_fiscal_key: fiscal_key(
                self.end_fiscal_year.unwrap_or(MAX_FISCAL_YEAR),
                self.end_fiscal_period.unwrap_or(MAX_FISCAL_PERIOD),
            ),
            segments: [
                SegmentRange::resolve(self.beg_acct_1, self.end_acct_1, MAX_SEGMENT[0]),
                SegmentRange::resolve(self.beg_acct_2, self.end_acct_2, MAX_SEGMENT[1]),
                SegmentRange::resolve(self.beg_acct_3, self.end_acct_3, MAX_SEGMENT[2]),
                SegmentRange::resolve(self.beg_acct_4, self.end_acct_4, MAX_SEGMENT[3]),
            ],
            cost_center: parse_selector(self.cost_center.as_deref()),
            department: parse_selector(self.department.as_deref()),
            acct_type: normalize_acct_type(self.acct_type.as_deref()),
        }
    }
}

/// Parse a 2-character business selector code into an exact-match value.
///
/// A missing, blank or non-numeric code is "no restriction", never an error.
fn parse_selector(code: Option<&str>) -> Option<i64> {
    code.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<i64>().ok())
}

/// Normalize the account-type selector: trim, uppercase, take the first
/// character. Empty after trim means "no restriction".
fn normalize_acct_type(code: Option<&str>) -> Option<char> {
    code.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.chars().next())
        .map(|c| c.to_ascii_uppercase())
}

// ==================== Resolved Bounds ====================

/// Inclusive range over one account segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentRange {
    pub beg: i64,
    pub end: i64,
}

impl SegmentRange {
    fn resolve(beg: Option<i64>, end: Option<i64>, max: i64) -> Self {
        Self {
            beg: beg.unwrap_or(MIN_SEGMENT),
            end: end.unwrap_or(max),
        }
    }

    /// Inclusive BETWEEN check
    pub fn contains(&self, value: i64) -> bool {
        self.beg <= value && value <= self.end
    }
}

/// Fully-resolved filter bounds: every dimension is a concrete inclusive
/// range or an optional exact-match key
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBounds {
    /// Start of the fiscal range as a cross-year ordinal
    pub beg_fiscal_key: i32,
    /// End of the fiscal range as a cross-year ordinal
    pub end_fiscal_key: i32,
    /// Inclusive ranges for account segments 1 through 4
    pub segments: [SegmentRange; 4],
    /// Exact-match value for acct_1, when the cost-center selector parsed
    pub cost_center: Option<i64>,
    /// Exact-match value for acct_2, when the department selector parsed
    pub department: Option<i64>,
    /// Uppercased account-type leading character, when supplied
    pub acct_type: Option<char>,
}

impl ResolvedBounds {
    /// Check a fiscal-key ordinal against the resolved fiscal range
    pub fn contains_fiscal_key(&self, key: i32) -> bool {
        self.beg_fiscal_key <= key && key <= self.end_fiscal_key
    }

    /// Check all four account segments against their resolved ranges and
    /// the cost-center/department exact-match selectors
    pub fn matches_segments(&self, segments: [i64; 4]) -> bool {
        if !self
            .segments
            .iter()
            .zip(segments.iter())
            .all(|(range, value)| range.contains(*value))
        {
            return false;
        }
        if let Some(cost_center) = self.cost_center {
            if segments[0] != cost_center {
                return false;
            }
        }
        if let Some(department) = self.department {
            if segments[1] != department {
                return false;
            }
        }
        true
    }
}
