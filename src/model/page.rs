//! Page-level types.

use serde::{Deserialize, Serialize};

/// The extracted text of a single document page.
///
/// Pages are produced once per document page, in order, numbered from 1.
/// A page whose text layer and OCR fallback both yielded nothing carries
/// an empty string; it still counts toward page coverage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageText {
    /// Page number (1-indexed)
    pub number: u32,

    /// Extracted text, possibly empty
    pub text: String,
}

impl PageText {
    /// Create a new page text entry.
    pub fn new(number: u32, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }

    /// Create an empty page entry (no extractable text).
    pub fn empty(number: u32) -> Self {
        Self::new(number, "")
    }

    /// Check whether the page text is empty or whitespace-only.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Concatenate page texts into the full document text.
///
/// Pages are joined with a single newline, in page order. The result is
/// recomputed once per run and is the sole input to the heuristic
/// analysis passes.
pub fn full_text(pages: &[PageText]) -> String {
    pages
        .iter()
        .map(|p| p.text.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}
