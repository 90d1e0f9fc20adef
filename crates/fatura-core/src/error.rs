//! Error types for the fatura-core library.
//!
//! Malformed statement text is never an error: the parsing pipeline degrades,
//! logs, and omits. Typed errors exist only for the collaborator boundaries
//! (OCR engine, image store, spreadsheet) and for configuration mistakes.

use thiserror::Error;

/// Main error type for the fatura library.
#[derive(Error, Debug)]
pub enum FaturaError {
    /// OCR engine error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Image store error.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Spreadsheet error.
    #[error("sheet error: {0}")]
    Sheet(#[from] SheetError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors reported by an OCR engine implementation.
#[derive(Error, Debug)]
pub enum OcrError {
    /// Failed to load or initialize the engine.
    #[error("failed to initialize engine: {0}")]
    Init(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// Invalid image format or dimensions.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Errors reported by an image store implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The requested statement folder does not exist.
    #[error("folder not found: {0}")]
    FolderNotFound(String),

    /// Listing the folder contents failed.
    #[error("failed to list folder: {0}")]
    List(String),

    /// Downloading an image failed.
    #[error("failed to fetch {name}: {reason}")]
    Fetch { name: String, reason: String },
}

/// Errors reported by a spreadsheet writer implementation.
#[derive(Error, Debug)]
pub enum SheetError {
    /// The worksheet for the requested period does not exist.
    #[error("worksheet not found: {0}")]
    WorksheetNotFound(String),

    /// Reading existing cell values failed.
    #[error("failed to read cells: {0}")]
    Read(String),

    /// The batch update was rejected.
    #[error("batch update failed: {0}")]
    Write(String),
}

/// Result type for the fatura library.
pub type Result<T> = std::result::Result<T, FaturaError>;
