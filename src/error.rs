//! Error types for the circex library.

use std::io;
use thiserror::Error;

/// Result type alias for circex operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during extraction.
///
/// Only two conditions are fatal for a run: failing to open the source
/// document and failing to write the output artifact. Page-level
/// extraction failures degrade to empty page text, and heuristic misses
/// resolve to documented sentinel values; neither surfaces as an error.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source document could not be opened or read as a PDF.
    #[error("Cannot open document: {0}")]
    DocumentOpen(String),

    /// Error extracting the text layer from the document.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Error writing the tabular output artifact.
    #[error("CSV output error: {0}")]
    Csv(#[from] csv::Error),

    /// Error serializing rows to JSON.
    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    /// An OCR subprocess failed outright.
    #[error("OCR error: {0}")]
    Ocr(String),

    /// Invalid extraction options.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

impl From<pdf_extract::OutputError> for Error {
    fn from(err: pdf_extract::OutputError) -> Self {
        Error::TextExtract(err.to_string())
    }
}
