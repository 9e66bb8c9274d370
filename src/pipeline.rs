//! Pipeline orchestration.
//!
//! Runs the passes strictly forward: page source → concatenated text →
//! {metadata, main heading, segmentation} → parent pass → heading
//! assignment → [`Extraction`]. Everything is single-threaded and
//! deterministic: running twice on an unchanged document yields
//! identical rows.

use log::{debug, info};

use crate::error::{Error, Result};
use crate::export::{self, JsonFormat};
use crate::model::{CircularMetadata, OutputRow, ParagraphRecord};
use crate::segment::{
    assign_headings, detect_parent_child, extract_main_heading, find_sheet_and_date,
    HeadingOptions,
};
use crate::source::PageSource;

/// Options for a pipeline run.
///
/// All knobs carry the documented defaults; the OCR fields only apply
/// when the entry points construct a [`crate::source::PdfPageSource`]
/// themselves.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Whether to use the OCR fallback for blank pages (if available).
    pub ocr: bool,

    /// OCR rasterization resolution in DPI.
    pub ocr_resolution: u32,

    /// Maximum opening lines scanned for the main heading.
    pub heading_line_limit: usize,

    /// Snippet length (characters) for relocating paragraphs.
    pub snippet_length: usize,

    /// Lookback window (characters) before a relocated paragraph.
    pub lookback_window: usize,

    /// Maximum word count for an accepted heading candidate.
    pub max_heading_words: usize,

    /// Word count of the synthesized fallback heading.
    pub fallback_heading_words: usize,
}

impl ExtractOptions {
    /// Create options with the documented defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the OCR fallback.
    pub fn with_ocr(mut self, ocr: bool) -> Self {
        self.ocr = ocr;
        self
    }

    /// Set the OCR rasterization resolution in DPI.
    pub fn with_ocr_resolution(mut self, dpi: u32) -> Self {
        self.ocr_resolution = dpi;
        self
    }

    /// Set the main-heading line limit.
    pub fn with_heading_line_limit(mut self, lines: usize) -> Self {
        self.heading_line_limit = lines;
        self
    }

    /// Set the paragraph-relocation snippet length.
    pub fn with_snippet_length(mut self, chars: usize) -> Self {
        self.snippet_length = chars;
        self
    }

    /// Set the heading lookback window.
    pub fn with_lookback_window(mut self, chars: usize) -> Self {
        self.lookback_window = chars;
        self
    }

    /// Set the accepted-heading word cap.
    pub fn with_max_heading_words(mut self, words: usize) -> Self {
        self.max_heading_words = words;
        self
    }

    pub(crate) fn heading_options(&self) -> HeadingOptions {
        HeadingOptions {
            snippet_length: self.snippet_length,
            lookback_window: self.lookback_window,
            max_heading_words: self.max_heading_words,
            fallback_heading_words: self.fallback_heading_words,
        }
    }

    fn validate(&self) -> Result<()> {
        if self.snippet_length == 0 {
            return Err(Error::InvalidOptions(
                "snippet_length must be greater than zero".to_string(),
            ));
        }
        if self.fallback_heading_words == 0 {
            return Err(Error::InvalidOptions(
                "fallback_heading_words must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            ocr: true,
            ocr_resolution: 300,
            heading_line_limit: 15,
            snippet_length: 60,
            lookback_window: 400,
            max_heading_words: 10,
            fallback_heading_words: 8,
        }
    }
}

/// The result of a pipeline run over one document.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Source file name.
    pub file_name: String,

    /// Document-level metadata, denormalized onto every row.
    pub metadata: CircularMetadata,

    /// Paragraph records in document order.
    pub paragraphs: Vec<ParagraphRecord>,
}

impl Extraction {
    /// Number of paragraphs (== number of output rows).
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Whether the document yielded no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Build the flat output rows, `Seq` numbered densely from 1 in
    /// paragraph order.
    pub fn rows(&self) -> Vec<OutputRow> {
        self.paragraphs
            .iter()
            .enumerate()
            .map(|(i, p)| OutputRow::build(i + 1, &self.file_name, &self.metadata, p))
            .collect()
    }

    /// Write the rows as a CSV artifact.
    pub fn to_csv<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        export::to_csv_file(&self.rows(), path)
    }

    /// Render the rows as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        export::to_json(&self.rows(), format)
    }
}

/// Run the full pipeline over a page source.
pub fn run(source: &mut dyn PageSource, options: &ExtractOptions) -> Result<Extraction> {
    options.validate()?;

    let pages = source.pages()?;
    debug!("read {} pages from {}", pages.len(), source.file_name());
    let full_text = crate::model::full_text(&pages);

    let (sheet_number, effective_date) = find_sheet_and_date(&full_text);
    let main_heading = extract_main_heading(&full_text, options.heading_line_limit);
    let metadata = CircularMetadata {
        sheet_number,
        effective_date,
        main_heading,
    };

    let mut paragraphs = crate::segment::split_into_paragraphs(&full_text);
    detect_parent_child(&mut paragraphs);
    assign_headings(&full_text, &mut paragraphs, &options.heading_options());

    info!(
        "{}: {} paragraphs, sheet {:?}, effective {:?}",
        source.file_name(),
        paragraphs.len(),
        metadata.sheet_number,
        metadata.effective_date
    );

    Ok(Extraction {
        file_name: source.file_name().to_string(),
        metadata,
        paragraphs,
    })
}
