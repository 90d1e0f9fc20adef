//! Transaction boundary detection over normalized statement lines.

use crate::models::BankProfile;

use super::decimal::wrap_bare_decimal;
use super::normalizer::RawLine;

/// Reversal rows print as a lone token; they are neither transaction content
/// nor a boundary.
pub const REVERSAL_TOKEN: &str = "Estorno";

/// Prefix marking transactions still settling; such lines terminate nothing
/// and are consumed without joining the chunk.
pub const PENDING_PREFIX: &str = "Em processamento";

/// Ordered lines making up one transaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionChunk {
    /// Member lines in statement order.
    pub lines: Vec<RawLine>,
}

impl TransactionChunk {
    fn seeded(line: RawLine) -> Self {
        Self { lines: vec![line] }
    }

    /// Chunk text joined with single spaces, ready for field reordering.
    pub fn joined(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Group normalized lines into per-transaction chunks.
///
/// A line matching the profile's primary boundary pattern closes any open
/// chunk and opens a new one seeded with itself. A line matching a secondary
/// delimiter closes the open chunk and reopens one seeded with the most
/// recently seen primary line; the delimiter itself carries no content. Any
/// other line joins the open chunk, bare decimals wrapped in the synthetic
/// amount marker first. Nothing is collected before the first primary match,
/// and end of input flushes whatever is open.
pub fn segment(lines: &[RawLine], profile: &BankProfile) -> Vec<TransactionChunk> {
    let mut chunks = Vec::new();
    let mut open: Option<TransactionChunk> = None;
    let mut last_primary: Option<&RawLine> = None;

    for line in lines {
        if line.text == REVERSAL_TOKEN {
            continue;
        }

        match profile
            .boundaries
            .iter()
            .position(|re| re.is_match(&line.text))
        {
            Some(0) => {
                if let Some(chunk) = open.take() {
                    chunks.push(chunk);
                }
                last_primary = Some(line);
                open = Some(TransactionChunk::seeded(line.clone()));
            }
            Some(_) => {
                if let Some(chunk) = open.take() {
                    chunks.push(chunk);
                }
                open = last_primary.map(|primary| TransactionChunk::seeded(primary.clone()));
            }
            None => {
                if let Some(chunk) = open.as_mut() {
                    if line.text.starts_with(PENDING_PREFIX) {
                        continue;
                    }
                    let text =
                        wrap_bare_decimal(&line.text).unwrap_or_else(|| line.text.clone());
                    chunk.lines.push(RawLine {
                        index: line.index,
                        text,
                    });
                }
            }
        }
    }

    if let Some(chunk) = open.take() {
        chunks.push(chunk);
    }

    chunks
}
