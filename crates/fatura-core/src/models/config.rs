//! Per-bank statement profiles.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::FaturaError;
use crate::statement::patterns::{
    FULL_DATE_BOUNDARY, PARTIAL_DATE_DELIMITER, SHORT_DATE_BOUNDARY,
};
use crate::statement::reorderer::{LayoutKind, LAYOUT_PRIORITY};

/// Supported statement issuers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Bank {
    /// C6 Bank app screenshots (short `dd/mm` dates, one boundary pattern).
    C6,
    /// XP card statement screenshots (full dates plus a `dd.dd` delimiter).
    Xp,
}

impl Bank {
    /// All supported banks, in display order.
    pub const ALL: [Bank; 2] = [Bank::C6, Bank::Xp];

    /// The parsing profile for this bank.
    pub fn profile(&self) -> &'static BankProfile {
        match self {
            Bank::C6 => &C6_PROFILE,
            Bank::Xp => &XP_PROFILE,
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bank::C6 => write!(f, "c6"),
            Bank::Xp => write!(f, "xp"),
        }
    }
}

impl FromStr for Bank {
    type Err = FaturaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "c6" => Ok(Bank::C6),
            "xp" => Ok(Bank::Xp),
            other => Err(FaturaError::Config(format!("unknown bank: {other}"))),
        }
    }
}

/// Direction used when ordering a batch by day and month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Earliest day/month first.
    Ascending,
    /// Latest day/month first.
    Descending,
}

/// Where a bank's transactions land on the reconciliation spreadsheet.
///
/// Rows and columns are 1-based, matching A1 notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetLayout {
    /// First data row.
    pub start_row: u32,

    /// Column holding the merged description.
    pub description_col: u32,

    /// Column holding the amount.
    pub amount_col: u32,
}

/// Immutable parsing configuration for one bank's statement layout.
///
/// Profiles are static data: a bank changing its app layout is a code change,
/// never runtime configuration.
#[derive(Debug)]
pub struct BankProfile {
    /// The bank this profile describes.
    pub bank: Bank,

    /// Ordered transaction boundary patterns. The first is the primary
    /// (date-bearing) pattern; any further entries are secondary delimiters
    /// that close a transaction without carrying a date of their own.
    pub boundaries: Vec<&'static Regex>,

    /// Layout rules tried in priority order when canonicalizing a chunk.
    pub layouts: &'static [LayoutKind],

    /// Default output ordering for this bank's batches.
    pub sort: SortOrder,

    /// Spreadsheet placement for reconciliation.
    pub sheet: SheetLayout,
}

lazy_static! {
    static ref C6_PROFILE: BankProfile = BankProfile {
        bank: Bank::C6,
        boundaries: vec![&*SHORT_DATE_BOUNDARY],
        layouts: &LAYOUT_PRIORITY,
        sort: SortOrder::Descending,
        sheet: SheetLayout {
            start_row: 39,
            description_col: 3,
            amount_col: 4,
        },
    };
    static ref XP_PROFILE: BankProfile = BankProfile {
        bank: Bank::Xp,
        boundaries: vec![&*FULL_DATE_BOUNDARY, &*PARTIAL_DATE_DELIMITER],
        layouts: &LAYOUT_PRIORITY,
        sort: SortOrder::Ascending,
        sheet: SheetLayout {
            start_row: 25,
            description_col: 7,
            amount_col: 8,
        },
    };
}
