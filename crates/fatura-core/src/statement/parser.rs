//! Statement parsing pipeline.

use tracing::{debug, info};

use crate::models::{Bank, BankProfile, SortOrder, StatementBatch};
use crate::ocr::{OcrPass, concat_passes};

use super::{assembler, normalizer, reorderer, segmenter};

/// Parser for one bank's statement layout.
///
/// Wires the pipeline stages together: line normalization, transaction
/// segmentation, field reordering, and record assembly. Malformed input
/// degrades to fewer extracted transactions, never an error.
pub struct StatementParser {
    profile: &'static BankProfile,
    sort: SortOrder,
}

impl StatementParser {
    /// Create a parser using the bank's default sort order.
    pub fn new(bank: Bank) -> Self {
        let profile = bank.profile();
        Self {
            profile,
            sort: profile.sort,
        }
    }

    /// Override the output sort order.
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Parse one statement's OCR text into an ordered transaction batch.
    pub fn parse(&self, text: &str) -> StatementBatch {
        info!(
            "Parsing {} statement from {} characters of text",
            self.profile.bank,
            text.len()
        );

        let lines = normalizer::normalize_lines(text);
        let chunks = segmenter::segment(&lines, self.profile);
        debug!("Segmented {} lines into {} chunks", lines.len(), chunks.len());

        let canonicals: Vec<String> = chunks
            .iter()
            .map(|chunk| reorderer::canonicalize(&chunk.joined(), self.profile.layouts))
            .collect();

        assembler::assemble(&canonicals, self.profile.bank, self.sort)
    }

    /// Parse a statement captured over several OCR passes.
    pub fn parse_passes(&self, passes: &[OcrPass]) -> StatementBatch {
        self.parse(&concat_passes(passes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::INSTALLMENT_NONE;
    use pretty_assertions::assert_eq;

    const C6_DUMP: &str = r#"Cartão final 2941
01/08
PG *B4A GLAMBOX
RS 76,76
Parcela 1 de 3

05/08 UBER TRIP
8,90
Estorno
12/08 MERCADO LIVRE
Em processamento
R$ 1.249,00
Subtotal R$ 1.334,66
"#;

    #[test]
    fn test_c6_statement_end_to_end() {
        let batch = StatementParser::new(Bank::C6).parse(C6_DUMP);

        assert_eq!(batch.len(), 3);

        assert_eq!(batch.transactions[0].date, "12/08");
        assert_eq!(batch.transactions[0].description, "MERCADO LIVRE");
        assert_eq!(batch.transactions[0].installment, INSTALLMENT_NONE);
        assert_eq!(batch.transactions[0].amount, "1249,00");

        assert_eq!(batch.transactions[1].date, "05/08");
        assert_eq!(batch.transactions[1].description, "UBER TRIP");
        assert_eq!(batch.transactions[1].amount, "8,9");

        assert_eq!(batch.transactions[2].date, "01/08");
        assert_eq!(batch.transactions[2].description, "PG *B4A GLAMBOX");
        assert_eq!(batch.transactions[2].installment, "1/3");
        assert_eq!(batch.transactions[2].amount, "76,76");
    }

    const XP_DUMP: &str = r#"Cartão XP Visa Infinite
28/12/2023
POSTO SHELL
R$ 220,00
14.32
05/01/2024
PADARIA DOCE PAO
R$ 18,50
09.15
"#;

    #[test]
    fn test_xp_statement_end_to_end() {
        let batch = StatementParser::new(Bank::Xp).parse(XP_DUMP);

        assert_eq!(batch.len(), 2);

        assert_eq!(batch.transactions[0].date, "05/01/2024");
        assert_eq!(batch.transactions[0].description, "PADARIA DOCE PAO");
        assert_eq!(batch.transactions[0].amount, "18,50");

        assert_eq!(batch.transactions[1].date, "28/12/2023");
        assert_eq!(batch.transactions[1].description, "POSTO SHELL");
        assert_eq!(batch.transactions[1].amount, "220,00");
    }

    #[test]
    fn test_sort_override() {
        let batch = StatementParser::new(Bank::C6)
            .with_sort(SortOrder::Ascending)
            .parse(C6_DUMP);

        let dates: Vec<&str> = batch.transactions.iter().map(|t| t.date.as_str()).collect();
        assert_eq!(dates, vec!["01/08", "05/08", "12/08"]);
    }

    #[test]
    fn test_inverted_layout_through_pipeline() {
        let batch = StatementParser::new(Bank::C6).parse("17/02 R$ 58,13 APP *MONTISTUDIO");

        assert_eq!(batch.len(), 1);
        assert_eq!(batch.transactions[0].description, "APP *MONTISTUDIO");
        assert_eq!(batch.transactions[0].amount, "58,13");
        assert_eq!(batch.transactions[0].installment, INSTALLMENT_NONE);
    }

    #[test]
    fn test_two_digit_year_statement_end_to_end() {
        let batch =
            StatementParser::new(Bank::C6).parse("14/04/23 EBN*CANVA Parcela 1/2 R$24,15");

        assert_eq!(batch.len(), 1);
        assert_eq!(batch.transactions[0].date, "14/04/23");
        assert_eq!(batch.transactions[0].description, "EBN*CANVA");
        assert_eq!(batch.transactions[0].installment, "1/2");
        assert_eq!(batch.transactions[0].amount, "24,15");
    }

    #[test]
    fn test_parse_passes_matches_concatenated_parse() {
        let first = OcrPass {
            fragments: vec!["01/08".to_string(), "PG *B4A GLAMBOX".to_string()],
        };
        let second = OcrPass {
            fragments: vec!["R$ 76,76".to_string(), "Parcela 1 de 3".to_string()],
        };

        let parser = StatementParser::new(Bank::C6);
        let from_passes = parser.parse_passes(&[first, second]);
        let from_text = parser.parse("01/08\nPG *B4A GLAMBOX\nR$ 76,76\nParcela 1 de 3");

        assert_eq!(from_passes.transactions, from_text.transactions);
    }

    #[test]
    fn test_empty_input_yields_empty_batch() {
        let batch = StatementParser::new(Bank::C6).parse("");
        assert!(batch.is_empty());
    }
}
