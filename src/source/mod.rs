//! Page text acquisition.
//!
//! Provides a trait seam between the pipeline and the concrete PDF
//! machinery, so the heuristic passes never see a PDF library type.
//! [`PdfPageSource`] is the production implementation (text layer with
//! optional OCR fallback); [`MemoryPageSource`] backs tests and
//! embedders that already hold page text.

pub mod ocr;
mod pdf;

pub use ocr::{OcrEngine, TesseractOcr};
pub use pdf::PdfPageSource;

use crate::error::Result;
use crate::model::PageText;

/// A source of per-page document text.
///
/// Contract: `pages` yields a finite, ordered page list, numbered from
/// 1, one entry per document page. Pages with no recoverable text carry
/// an empty string rather than being omitted, so page coverage is
/// always complete. Any document handle needed to produce the list is
/// scoped to the call and released before it returns.
pub trait PageSource {
    /// Name of the source file, for the `FileName` output column.
    fn file_name(&self) -> &str;

    /// Produce the ordered page texts. Failing to open or read the
    /// document at all is the only error; individual unreadable pages
    /// degrade to empty text.
    fn pages(&mut self) -> Result<Vec<PageText>>;
}

/// An in-memory page source.
#[derive(Debug, Clone)]
pub struct MemoryPageSource {
    file_name: String,
    pages: Vec<PageText>,
}

impl MemoryPageSource {
    /// Create a source from already-extracted page texts.
    pub fn new(file_name: impl Into<String>, pages: Vec<PageText>) -> Self {
        Self {
            file_name: file_name.into(),
            pages,
        }
    }

    /// Create a source from raw page strings, numbering them from 1.
    pub fn from_texts<S: Into<String>>(
        file_name: impl Into<String>,
        texts: impl IntoIterator<Item = S>,
    ) -> Self {
        let pages = texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| PageText::new(i as u32 + 1, text))
            .collect();
        Self::new(file_name, pages)
    }
}

impl PageSource for MemoryPageSource {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn pages(&mut self) -> Result<Vec<PageText>> {
        Ok(self.pages.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_numbering() {
        let mut source = MemoryPageSource::from_texts("doc.pdf", ["one", "", "three"]);
        assert_eq!(source.file_name(), "doc.pdf");
        let pages = source.pages().unwrap();
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].number, 1);
        assert_eq!(pages[2].number, 3);
        assert!(pages[1].is_blank());
    }
}
