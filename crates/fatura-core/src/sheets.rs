//! Spreadsheet reconciliation boundary.
//!
//! Extracted batches land in a budgeting spreadsheet with a fixed per-bank
//! region. [`plan_updates`] turns a batch into per-row cell updates,
//! preserving descriptions the spreadsheet owner has edited by hand;
//! [`SheetWriter`] hides the spreadsheet API behind the read and write
//! operations the plan needs.

use serde::{Deserialize, Serialize};

use crate::error::SheetError;
use crate::models::{SheetLayout, StatementBatch};

/// Result type for spreadsheet operations.
pub type Result<T> = std::result::Result<T, SheetError>;

/// One planned write: a row's description and amount cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellUpdate {
    /// A1 range covering the row's cells, e.g. `C39:D39`.
    pub range: String,
    /// Cell values left to right across the range.
    pub values: Vec<String>,
}

/// Trait for worksheet backends.
pub trait SheetWriter {
    /// Read a full column's values, first row first.
    fn read_column(&self, col: u32) -> Result<Vec<String>>;

    /// Apply planned updates to the worksheet.
    fn write_updates(&mut self, updates: &[CellUpdate]) -> Result<()>;
}

/// Convert 1-based row and column numbers to A1 notation.
pub fn rowcol_to_a1(row: u32, col: u32) -> String {
    let mut letters = String::new();
    let mut n = col;
    while n > 0 {
        let rem = ((n - 1) % 26) as u8;
        letters.insert(0, (b'A' + rem) as char);
        n = (n - 1) / 26;
    }
    format!("{letters}{row}")
}

fn strip_outer_quote(amount: &str) -> &str {
    let amount = amount
        .strip_prefix('\'')
        .or_else(|| amount.strip_prefix('"'))
        .unwrap_or(amount);
    amount
        .strip_suffix('\'')
        .or_else(|| amount.strip_suffix('"'))
        .unwrap_or(amount)
}

/// Plan the cell updates that write a batch into its sheet region.
///
/// Rows advance from the layout's start row in batch order. The installment
/// marker is appended to the description unless it is the no-installment
/// sentinel. `existing` holds the description column as currently on the
/// sheet, first row first; a non-empty existing description that differs
/// from the extracted one wins, so manual edits survive re-runs.
pub fn plan_updates(
    batch: &StatementBatch,
    layout: &SheetLayout,
    existing: &[String],
) -> Vec<CellUpdate> {
    let mut updates = Vec::with_capacity(batch.len());

    for (offset, transaction) in batch.transactions.iter().enumerate() {
        let row = layout.start_row + offset as u32;

        let mut description = if transaction.installment.starts_with('-') {
            transaction.description.clone()
        } else {
            format!("{} {}", transaction.description, transaction.installment)
        };

        let on_sheet = (row as usize)
            .checked_sub(1)
            .and_then(|index| existing.get(index));
        if let Some(current) = on_sheet {
            if !current.is_empty() && *current != description {
                description = current.clone();
            }
        }

        updates.push(CellUpdate {
            range: format!(
                "{}:{}",
                rowcol_to_a1(row, layout.description_col),
                rowcol_to_a1(row, layout.amount_col)
            ),
            values: vec![description, strip_outer_quote(&transaction.amount).to_string()],
        });
    }

    updates
}
