//! Final record assembly from canonical transaction strings.

use tracing::{info, warn};

use crate::models::{Bank, INSTALLMENT_NONE, ParsedTransaction, SortOrder, StatementBatch};

use super::patterns::{EXTRACT_FULL, EXTRACT_SHORT, OCR_ARTIFACTS, SHORT_DATE_BOUNDARY};

/// Boilerplate tokens that survive upstream filtering when OCR merges them
/// into transaction text; a regrouped line containing any of them is
/// discarded.
const RESIDUAL_TOKENS: [&str; 3] = ["Cartão", "Subtotal", "——"];

/// Defensive regroup of canonical strings at date boundaries.
///
/// Re-applies the short-date boundary rule across all canonical text so that
/// every group starts at a date token. Chunks the reorderer passed through
/// unrecognized get merged into the preceding dated group, giving their
/// fields a second chance at extraction.
fn regroup(canonicals: &[String]) -> Vec<String> {
    let joined = canonicals.join("\n");
    let scrubbed = OCR_ARTIFACTS.replace_all(&joined, "");

    let mut groups = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in scrubbed.lines() {
        let line = line.trim();
        if line.is_empty() || RESIDUAL_TOKENS.iter().any(|token| line.contains(token)) {
            continue;
        }
        if SHORT_DATE_BOUNDARY.is_match(line) {
            if !current.is_empty() {
                groups.push(current.join(" "));
            }
            current = vec![line];
        } else if !current.is_empty() {
            current.push(line);
        }
    }
    if !current.is_empty() {
        groups.push(current.join(" "));
    }

    groups
}

fn extract(group: &str) -> Option<ParsedTransaction> {
    let caps = EXTRACT_SHORT
        .captures(group)
        .or_else(|| EXTRACT_FULL.captures(group))?;

    let installment = match (caps.get(4), caps.get(5)) {
        (Some(current), Some(total)) => format!("{}/{}", current.as_str(), total.as_str()),
        _ => INSTALLMENT_NONE.to_string(),
    };

    Some(ParsedTransaction {
        date: caps[1].to_string(),
        description: caps[2].trim().to_string(),
        installment,
        amount: caps[3].replace('.', ""),
    })
}

/// Assemble canonical strings into the final ordered batch.
///
/// Groups that still lack a date or an amount after regrouping are dropped
/// with a warning; one malformed transaction never fails the statement.
pub fn assemble(canonicals: &[String], bank: Bank, order: SortOrder) -> StatementBatch {
    let mut batch = StatementBatch::new(bank);

    for group in regroup(canonicals) {
        match extract(&group) {
            Some(transaction) => batch.transactions.push(transaction),
            None => warn!("Dropping unparsable transaction text: {}", group),
        }
    }

    batch.sort_by_date(order);
    info!("Assembled {} transactions for {}", batch.len(), bank);
    batch
}
