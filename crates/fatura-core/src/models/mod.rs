//! Data models for statement parsing and reconciliation.

pub mod config;
pub mod transaction;

pub use config::{Bank, BankProfile, SheetLayout, SortOrder};
pub use transaction::{ParsedTransaction, StatementBatch, INSTALLMENT_NONE};
