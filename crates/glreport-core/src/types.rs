//! Business classification types and label tables
//!
//! The report attaches business-friendly names to coded rows. Codes with no
//! table entry fall through to [`OTHER_UNKNOWN`]; that includes cost-center
//! code 06, which has no defined label in the business data.

use serde::{Deserialize, Serialize};

/// Fallback label for unmapped cost-center and department codes
pub const OTHER_UNKNOWN: &str = "Other/Unknown";

/// Cost center names keyed by the acct_1 segment.
/// Code 06 is deliberately absent and resolves to [`OTHER_UNKNOWN`].
pub const COST_CENTER_NAMES: &[(i64, &str)] = &[
    (1, "MW - Marina Water"),
    (2, "MS - Marina Sewer"),
    (3, "OW - Ord Water"),
    (4, "OS - Ord Sewer"),
    (5, "RW - Recycled Water"),
    (7, "GSA - Groundwater Sustainability Agency"),
];

/// Department names keyed by the acct_2 segment
pub const DEPARTMENT_NAMES: &[(i64, &str)] = &[
    (1, "Administration"),
    (2, "O&M"),
    (3, "Lab"),
    (4, "Conservation"),
    (5, "Engineering"),
    (6, "Water Resources - MCWD"),
    (7, "Water Resources - GSA"),
];

/// Look up the cost center name for an acct_1 segment value
pub fn cost_center_name(acct_1: i64) -> &'static str {
    COST_CENTER_NAMES
        .iter()
        .find(|(code, _)| *code == acct_1)
        .map_or(OTHER_UNKNOWN, |(_, name)| *name)
}

/// Look up the department name for an acct_2 segment value
pub fn department_name(acct_2: i64) -> &'static str {
    DEPARTMENT_NAMES
        .iter()
        .find(|(code, _)| *code == acct_2)
        .map_or(OTHER_UNKNOWN, |(_, name)| *name)
}

/// Trimmed, uppercased leading character of an account_type field.
/// Blank or absent account types have no leading character.
pub fn account_type_leading_char(account_type: Option<&str>) -> Option<char> {
    account_type
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.chars().next())
        .map(|c| c.to_ascii_uppercase())
}

/// Account type category derived from the chart's account_type field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountTypeCategory {
    /// Asset accounts (leading 'A')
    Asset,
    /// Liability accounts (leading 'L')
    Liability,
    /// Fund balance accounts (leading 'F')
    FundBalance,
    /// Revenue accounts (leading 'R')
    Revenue,
    /// Expense accounts (leading 'E')
    Expense,
    /// Unrecognized or blank account type
    Unknown,
}

impl Default for AccountTypeCategory {
    fn default() -> Self {
        AccountTypeCategory::Unknown
    }
}

impl AccountTypeCategory {
    /// Derive the category from a raw account_type field value
    pub fn from_account_type(account_type: Option<&str>) -> Self {
        match account_type_leading_char(account_type) {
            Some('A') => AccountTypeCategory::Asset,
            Some('L') => AccountTypeCategory::Liability,
            Some('F') => AccountTypeCategory::FundBalance,
            Some('R') => AccountTypeCategory::Revenue,
            Some('E') => AccountTypeCategory::Expense,
            _ => AccountTypeCategory::Unknown,
        }
    }

    /// The single-letter code, when the category has one
    pub fn code(&self) -> Option<char> {
        match self {
            AccountTypeCategory::Asset => Some('A'),
            AccountTypeCategory::Liability => Some('L'),
            AccountTypeCategory::FundBalance => Some('F'),
            AccountTypeCategory::Revenue => Some('R'),
            AccountTypeCategory::Expense => Some('E'),
            AccountTypeCategory::Unknown => None,
        }
    }
}

impl std::str::FromStr for AccountTypeCategory {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match account_type_leading_char(Some(s)) {
            Some('A') => Ok(AccountTypeCategory::Asset),
            Some('L') => Ok(AccountTypeCategory::Liability),
            Some('F') => Ok(AccountTypeCategory::FundBalance),
            Some('R') => Ok(AccountTypeCategory::Revenue),
            Some('E') => Ok(AccountTypeCategory::Expense),
            _ => Err(format!("Invalid account type code: {}", s)),
        }
    }
}

impl std::fmt::Display for AccountTypeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccountTypeCategory::Asset => write!(f, "A - Asset"),
            AccountTypeCategory::Liability => write!(f, "L - Liability"),
            AccountTypeCategory::FundBalance => write!(f, "F - Fund Balance"),
            AccountTypeCategory::Revenue => write!(f, "R - Revenue"),
            AccountTypeCategory::Expense => write!(f, "E - Expense"),
            AccountTypeCategory::Unknown => write!(f, "Unknown"),
        }
    }
}
