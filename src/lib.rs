//! # circex
//!
//! Paragraph-level record extraction from regulatory circular PDFs.
//!
//! circex turns an unstructured page-text stream (possibly OCR-noisy)
//! into an ordered set of paragraph records with inferred sub-headings,
//! a circular/reference number, and an effective date, using layout and
//! lexical heuristics — no schema required. The records flatten into a
//! tabular export with one row per paragraph.
//!
//! ## Quick Start
//!
//! ```no_run
//! use circex::extract_file;
//!
//! fn main() -> circex::Result<()> {
//!     let extraction = extract_file("circular.pdf")?;
//!     println!("sheet number: {}", extraction.metadata.sheet_number);
//!     extraction.to_csv("circular.csv")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Page source**: text layer per page, with an OCR fallback
//!   (`pdftoppm` + `tesseract`) for image-only pages; unreadable pages
//!   degrade to empty text instead of failing.
//! - **Metadata**: ordered regex pattern tables for the circular number
//!   and effective date; first match in priority order wins.
//! - **Main heading**: the opening lines before the first blank line.
//! - **Segmentation**: numbered-paragraph boundaries (`N.` at line
//!   start), falling back to blank-line blocks.
//! - **Sub-headings**: the short line preceding each paragraph's first
//!   occurrence in the text, or a synthesized opening-words fallback.
//!
//! The heuristics are deliberately best-effort and deterministic; see
//! the module docs in [`segment`] for the exact contracts.

pub mod error;
pub mod export;
pub mod model;
pub mod pipeline;
pub mod segment;
pub mod source;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{preview, JsonFormat, PREVIEW_ROWS};
pub use model::{CircularMetadata, OutputRow, PageText, ParagraphRecord};
pub use pipeline::{run, ExtractOptions, Extraction};
pub use source::{MemoryPageSource, OcrEngine, PageSource, PdfPageSource, TesseractOcr};

use std::path::Path;

/// Extract a PDF file with default options.
///
/// # Example
///
/// ```no_run
/// let extraction = circex::extract_file("circular.pdf").unwrap();
/// println!("{} paragraphs", extraction.paragraph_count());
/// ```
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<Extraction> {
    extract_file_with_options(path, ExtractOptions::default())
}

/// Extract a PDF file with custom options.
///
/// # Example
///
/// ```no_run
/// use circex::{extract_file_with_options, ExtractOptions};
///
/// let options = ExtractOptions::new().with_ocr(false);
/// let extraction = extract_file_with_options("circular.pdf", options).unwrap();
/// ```
pub fn extract_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ExtractOptions,
) -> Result<Extraction> {
    let mut source = PdfPageSource::open(path)?.with_ocr_resolution(options.ocr_resolution);
    if !options.ocr {
        source = source.without_ocr();
    }
    pipeline::run(&mut source, &options)
}

/// Run the pipeline over any page source.
///
/// Useful for embedding: supply a [`MemoryPageSource`] (or your own
/// [`PageSource`] implementation) when the page text does not come from
/// a PDF on disk.
///
/// # Example
///
/// ```
/// use circex::{extract_pages, ExtractOptions, MemoryPageSource};
///
/// let mut source = MemoryPageSource::from_texts(
///     "notice.pdf",
///     ["Circular No. A/1\n\n1. First provision.\n2. Second provision."],
/// );
/// let extraction = extract_pages(&mut source, &ExtractOptions::default()).unwrap();
/// assert_eq!(extraction.paragraph_count(), 2);
/// ```
pub fn extract_pages(
    source: &mut dyn PageSource,
    options: &ExtractOptions,
) -> Result<Extraction> {
    pipeline::run(source, options)
}

/// Builder for configuring and running an extraction.
///
/// # Example
///
/// ```no_run
/// use circex::Circex;
///
/// let extraction = Circex::new()
///     .without_ocr()
///     .snippet_length(80)
///     .extract("circular.pdf")?;
/// extraction.to_csv("circular.csv")?;
/// # Ok::<(), circex::Error>(())
/// ```
pub struct Circex {
    options: ExtractOptions,
}

impl Circex {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: ExtractOptions::default(),
        }
    }

    /// Disable the OCR fallback.
    pub fn without_ocr(mut self) -> Self {
        self.options = self.options.with_ocr(false);
        self
    }

    /// Set the OCR rasterization resolution in DPI.
    pub fn ocr_resolution(mut self, dpi: u32) -> Self {
        self.options = self.options.with_ocr_resolution(dpi);
        self
    }

    /// Set the main-heading line limit.
    pub fn heading_line_limit(mut self, lines: usize) -> Self {
        self.options = self.options.with_heading_line_limit(lines);
        self
    }

    /// Set the paragraph-relocation snippet length.
    pub fn snippet_length(mut self, chars: usize) -> Self {
        self.options = self.options.with_snippet_length(chars);
        self
    }

    /// Set the heading lookback window.
    pub fn lookback_window(mut self, chars: usize) -> Self {
        self.options = self.options.with_lookback_window(chars);
        self
    }

    /// Set the accepted-heading word cap.
    pub fn max_heading_words(mut self, words: usize) -> Self {
        self.options = self.options.with_max_heading_words(words);
        self
    }

    /// Run the extraction over a PDF file.
    pub fn extract<P: AsRef<Path>>(self, path: P) -> Result<Extraction> {
        extract_file_with_options(path, self.options)
    }

    /// Run the extraction over an arbitrary page source.
    pub fn extract_from(self, source: &mut dyn PageSource) -> Result<Extraction> {
        pipeline::run(source, &self.options)
    }
}

impl Default for Circex {
    fn default() -> Self {
        Self::new()
    }
}
