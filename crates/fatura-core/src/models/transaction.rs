//! Transaction data models for parsed statements.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::config::{Bank, SortOrder};

/// Installment sentinel for single-payment transactions.
pub const INSTALLMENT_NONE: &str = "-/-";

/// A single reconstructed credit-card transaction.
///
/// Fields keep their statement formatting: dates as printed (`dd/mm`, with a
/// year suffix when the statement shows one), amounts with a comma decimal
/// separator and thousands grouping stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedTransaction {
    /// Transaction date as printed (`dd/mm`, `dd/mm/yy` or `dd/mm/yyyy`).
    pub date: String,

    /// Merchant description.
    pub description: String,

    /// Installment position as `current/total`, or `-/-` for single payments.
    pub installment: String,

    /// Non-negative amount, comma decimal separator, no thousands grouping.
    pub amount: String,
}

impl ParsedTransaction {
    /// Sort key built from the day and month of the printed date.
    ///
    /// The year (when printed) is ignored entirely; a dummy leap year keeps
    /// `29/02` comparable. Dates that are not real calendar days yield `None`.
    pub(crate) fn day_month_key(&self) -> Option<NaiveDate> {
        let mut parts = self.date.splitn(3, '/');
        let day: u32 = parts.next()?.parse().ok()?;
        let month: u32 = parts.next()?.parse().ok()?;
        NaiveDate::from_ymd_opt(2000, month, day)
    }
}

/// An ordered set of transactions reconstructed from one statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatementBatch {
    /// Bank the statement came from.
    pub bank: Bank,

    /// Transactions in output order.
    pub transactions: Vec<ParsedTransaction>,
}

impl StatementBatch {
    /// Column headers for tabular output, in field order.
    pub const COLUMNS: [&'static str; 4] = ["Date", "Description", "Installment", "Amount"];

    /// Create an empty batch for a bank.
    pub fn new(bank: Bank) -> Self {
        Self {
            bank,
            transactions: Vec::new(),
        }
    }

    /// Number of transactions in the batch.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the batch holds no transactions.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Order transactions by day and month only.
    ///
    /// The sort is stable: transactions whose dates are not real calendar
    /// days group at one end in their original statement order.
    pub fn sort_by_date(&mut self, order: SortOrder) {
        match order {
            SortOrder::Ascending => self.transactions.sort_by_key(|t| t.day_month_key()),
            SortOrder::Descending => self
                .transactions
                .sort_by(|a, b| b.day_month_key().cmp(&a.day_month_key())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(date: &str, description: &str) -> ParsedTransaction {
        ParsedTransaction {
            date: date.to_string(),
            description: description.to_string(),
            installment: INSTALLMENT_NONE.to_string(),
            amount: "1,00".to_string(),
        }
    }

    #[test]
    fn test_day_month_key_ignores_year() {
        assert_eq!(
            tx("14/04/2023", "a").day_month_key(),
            NaiveDate::from_ymd_opt(2000, 4, 14)
        );
        assert_eq!(
            tx("14/04", "a").day_month_key(),
            NaiveDate::from_ymd_opt(2000, 4, 14)
        );
    }

    #[test]
    fn test_day_month_key_leap_day() {
        assert!(tx("29/02", "a").day_month_key().is_some());
    }

    #[test]
    fn test_day_month_key_invalid() {
        assert_eq!(tx("32/01", "a").day_month_key(), None);
        assert_eq!(tx("garbage", "a").day_month_key(), None);
        assert_eq!(tx("00/00", "a").day_month_key(), None);
    }

    #[test]
    fn test_sort_ascending_by_month_then_day() {
        let mut batch = StatementBatch::new(Bank::Xp);
        batch.transactions = vec![tx("28/12", "late"), tx("05/01", "early"), tx("15/01", "mid")];
        batch.sort_by_date(SortOrder::Ascending);

        let order: Vec<&str> = batch
            .transactions
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(order, vec!["early", "mid", "late"]);
    }

    #[test]
    fn test_sort_descending_is_stable() {
        let mut batch = StatementBatch::new(Bank::C6);
        batch.transactions = vec![tx("01/08", "first"), tx("01/08", "second"), tx("02/08", "last")];
        batch.sort_by_date(SortOrder::Descending);

        let order: Vec<&str> = batch
            .transactions
            .iter()
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(order, vec!["last", "first", "second"]);
    }

    #[test]
    fn test_sort_keeps_unparsable_dates() {
        let mut batch = StatementBatch::new(Bank::C6);
        batch.transactions = vec![tx("junk", "a"), tx("01/08", "b")];
        batch.sort_by_date(SortOrder::Ascending);

        assert_eq!(batch.len(), 2);
        assert_eq!(batch.transactions[0].description, "a");
    }
}
