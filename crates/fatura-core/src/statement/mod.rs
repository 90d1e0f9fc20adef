//! Statement text processing.
//!
//! Raw OCR text goes through four stages: [`normalizer`] cleans and filters
//! lines, [`segmenter`] groups them into per-transaction chunks,
//! [`reorderer`] rewrites each chunk into canonical field order, and
//! [`assembler`] extracts the final records. [`StatementParser`] wires the
//! stages together behind one call.

pub mod assembler;
pub mod decimal;
pub mod normalizer;
pub mod patterns;
pub mod reorderer;
pub mod segmenter;

mod parser;

pub use normalizer::RawLine;
pub use parser::StatementParser;
pub use segmenter::TransactionChunk;
