//! Compiled regex patterns for statement segmentation and field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Transaction boundaries (anchored: a boundary is a line START)
    pub static ref SHORT_DATE_BOUNDARY: Regex = Regex::new(
        r"^\d{2}/\d{2}"
    ).unwrap();

    pub static ref FULL_DATE_BOUNDARY: Regex = Regex::new(
        r"^\d{2}/\d{2}/\d{4}"
    ).unwrap();

    pub static ref PARTIAL_DATE_DELIMITER: Regex = Regex::new(
        r"^\d{2}\.\d{2}"
    ).unwrap();

    // Synthetic marker wrapped around bare decimal lines (***R$***58,13***)
    pub static ref WRAPPED_AMOUNT: Regex = Regex::new(
        r"\*{3}R\$\*{3}([\d.,]+)\*{3}"
    ).unwrap();

    // Chunk layouts, in canonicalization priority order. All anchor at the
    // start of the text: a chunk always opens with its boundary line, and an
    // unanchored dd/mm would otherwise match inside a dd/mm/yy date.
    // Normal: description before the marked amount, short date.
    pub static ref LAYOUT_NORMAL_SHORT: Regex = Regex::new(
        r"^(\d{2}/\d{2})\s+(.*?)\s+(R\$\s+[\d.,]+)\s*(.*)"
    ).unwrap();

    // Inverted: amount directly after the date, description trailing. The
    // description runs to a trailing installment tag, a second marked tail
    // (discarded), or end of input.
    pub static ref LAYOUT_INVERTED_SHORT: Regex = Regex::new(
        r"^(\d{2}/\d{2})\s+(R\$\s+[\d.,]+)\s+(.+?)(?:\s+(Parcela \d+ de \d+))?(?:\s+R\$.*)?\s*$"
    ).unwrap();

    // Normal with a full date; statements in this layout print a trailing
    // field (usually the time) after the amount.
    pub static ref LAYOUT_NORMAL_FULL: Regex = Regex::new(
        r"^(\d{2}/\d{2}/\d{4})\s+(.*?)\s+(R\$\s+[\d.,]+)\s+(.*)"
    ).unwrap();

    // Full date with a compact installment tag before the amount; tolerates
    // a missing space after the currency marker (R$24,15). The trailing
    // group reads a spelled tag back out of already-canonical text, keeping
    // two-digit-year forms stable under a second pass.
    pub static ref LAYOUT_FULL_INSTALLMENT: Regex = Regex::new(
        r"^(\d{2}/\d{2}/(?:\d{2}|\d{4}))\s+(.+?)\s+(?:Parcela\s+(\d+)/(\d+)\s+)?R\$\s*([\d.,]+)(?:\s+Parcela\s+(\d+)\s+de\s+(\d+))?"
    ).unwrap();

    // Final record extraction over canonical strings. Anchored like the
    // layouts: regrouped text always starts at the date token, and the full
    // form takes two- and four-digit years.
    pub static ref EXTRACT_SHORT: Regex = Regex::new(
        r"^(\d{2}/\d{2})\s+(.+?)\s+R\$\s+([\d.,]+)(?:\s+Parcela\s+(\d+)\s+de\s+(\d+))?"
    ).unwrap();

    pub static ref EXTRACT_FULL: Regex = Regex::new(
        r"^(\d{2}/\d{2}/(?:\d{2}|\d{4}))\s+(.+?)\s+R\$\s+([\d.,]+)(?:\s+Parcela\s+(\d+)\s+de\s+(\d+))?"
    ).unwrap();

    // Installment tag as it appears embedded in descriptions
    pub static ref INSTALLMENT_TAG: Regex = Regex::new(
        r"Parcela \d+ de \d+"
    ).unwrap();

    // OCR artifacts scrubbed before the defensive regroup
    pub static ref OCR_ARTIFACTS: Regex = Regex::new(
        r"Í\?ª\.|tm|Cartão virtual \d+"
    ).unwrap();
}
