//! OCR line cleanup.

use tracing::debug;

/// Statement boilerplate prefixes dropped before segmentation.
///
/// `Cartaio Vinal` is the card header as EasyOCR tends to garble it; `USD`
/// drops foreign-currency sections, which are out of scope.
const BOILERPLATE_PREFIXES: [&str; 8] = [
    "Cartão",
    "Cartão Virtual",
    "Cartaio Vinal",
    "Subtotal",
    "——",
    "EI Cartão",
    "Inclusão de Pagamento",
    "USD",
];

/// A cleaned statement line with its position in the source blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// Zero-based line position in the concatenated OCR text.
    pub index: usize,

    /// Trimmed text after currency-marker typo correction.
    pub text: String,
}

/// Clean raw OCR text into trimmed, typo-corrected lines.
///
/// `RS ` and `Rs ` are OCR misreads of the `R$ ` currency marker and are
/// rewritten wherever they appear in a line. Lines that are empty after
/// trimming or that start with statement boilerplate are dropped.
pub fn normalize_lines(text: &str) -> Vec<RawLine> {
    let mut lines = Vec::new();
    let mut total = 0usize;

    for (index, raw) in text.lines().enumerate() {
        total += 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let corrected = trimmed.replace("RS ", "R$ ").replace("Rs ", "R$ ");
        if BOILERPLATE_PREFIXES.iter().any(|p| corrected.starts_with(p)) {
            continue;
        }
        lines.push(RawLine {
            index,
            text: corrected,
        });
    }

    debug!("kept {} of {} raw lines", lines.len(), total);
    lines
}
