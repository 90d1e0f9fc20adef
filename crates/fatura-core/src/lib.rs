//! Core library for Brazilian credit-card statement OCR.
//!
//! This crate provides:
//! - Statement text processing (normalization, segmentation, field
//!   reordering, record assembly)
//! - Per-bank layout profiles (C6, XP)
//! - Boundary traits for OCR engines, image stores, and spreadsheets
//! - Spreadsheet reconciliation planning in A1 notation

pub mod error;
pub mod models;
pub mod ocr;
pub mod sheets;
pub mod statement;
pub mod storage;

pub use error::{FaturaError, Result};
pub use models::{
    Bank, BankProfile, INSTALLMENT_NONE, ParsedTransaction, SheetLayout, SortOrder, StatementBatch,
};
pub use ocr::{OcrEngine, OcrPass, concat_passes};
pub use sheets::{CellUpdate, SheetWriter, plan_updates, rowcol_to_a1};
pub use statement::{RawLine, StatementParser, TransactionChunk};
pub use storage::{ImageRef, StatementStore};
