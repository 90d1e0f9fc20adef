//! OCR engine boundary.
//!
//! The pipeline only needs recognized text in reading order; which engine
//! produces it stays behind [`OcrEngine`]. Statement screenshots are long
//! scrolls, so a capture usually arrives as several overlapping passes that
//! get concatenated before parsing.

use serde::{Deserialize, Serialize};

use crate::error::OcrError;

/// Result type for OCR operations.
pub type Result<T> = std::result::Result<T, OcrError>;

/// Recognized text from one pass over one image, in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrPass {
    /// Text fragments as the engine emitted them, top to bottom.
    pub fragments: Vec<String>,
}

impl OcrPass {
    /// Fragments joined with newlines, one statement line per fragment.
    pub fn joined(&self) -> String {
        self.fragments
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Trait for text recognition engines.
pub trait OcrEngine {
    /// Recognize text in an encoded image.
    fn read_image(&self, image: &[u8]) -> Result<OcrPass>;
}

/// Concatenate passes into one text block for parsing.
pub fn concat_passes(passes: &[OcrPass]) -> String {
    passes
        .iter()
        .map(|pass| pass.joined())
        .collect::<Vec<_>>()
        .join("\n")
}
