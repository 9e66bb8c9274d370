//! PDF-backed page source.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::ocr::{OcrEngine, TesseractOcr};
use super::PageSource;
use crate::error::{Error, Result};
use crate::model::PageText;

/// Page source reading the PDF text layer, with a per-page OCR fallback
/// for pages whose text layer is blank.
///
/// Pages are read strictly sequentially, one attempt per page per
/// method. The document is opened for the duration of a single
/// [`PageSource::pages`] call and released before it returns.
pub struct PdfPageSource {
    path: PathBuf,
    file_name: String,
    ocr: Option<Box<dyn OcrEngine>>,
    ocr_resolution: u32,
}

impl PdfPageSource {
    /// Open a PDF, auto-detecting the OCR toolchain.
    ///
    /// Fails only if the file cannot be read at all; a missing OCR
    /// toolchain silently disables the fallback.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let ocr = TesseractOcr::detect().map(|e| Box::new(e) as Box<dyn OcrEngine>);
        Self::open_with(path, ocr)
    }

    /// Open a PDF with an explicit OCR strategy (`None` disables OCR).
    pub fn open_with<P: AsRef<Path>>(path: P, ocr: Option<Box<dyn OcrEngine>>) -> Result<Self> {
        let path = path.as_ref();
        path.metadata()
            .map_err(|e| Error::DocumentOpen(format!("{}: {}", path.display(), e)))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(Self {
            path: path.to_path_buf(),
            file_name,
            ocr,
            ocr_resolution: 300,
        })
    }

    /// Set the OCR rasterization resolution in DPI (default 300).
    pub fn with_ocr_resolution(mut self, dpi: u32) -> Self {
        self.ocr_resolution = dpi;
        self
    }

    /// Disable the OCR fallback.
    pub fn without_ocr(mut self) -> Self {
        self.ocr = None;
        self
    }

    /// Whether an OCR engine is configured.
    pub fn has_ocr(&self) -> bool {
        self.ocr.is_some()
    }
}

impl PageSource for PdfPageSource {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn pages(&mut self) -> Result<Vec<PageText>> {
        let layer = pdf_extract::extract_text_by_pages(&self.path)
            .map_err(|e| Error::DocumentOpen(format!("{}: {}", self.path.display(), e)))?;

        let mut pages = Vec::with_capacity(layer.len());
        for (i, text) in layer.into_iter().enumerate() {
            let number = i as u32 + 1;
            if !text.trim().is_empty() {
                pages.push(PageText::new(number, text));
                continue;
            }

            // Blank text layer: try OCR once, degrade to empty text on
            // any failure or when no engine is configured.
            let text = match &self.ocr {
                Some(engine) => {
                    debug!("page {}: blank text layer, running OCR", number);
                    match engine.page_to_text(&self.path, number, self.ocr_resolution) {
                        Ok(ocr_text) => ocr_text,
                        Err(e) => {
                            warn!("page {}: OCR failed ({}), keeping empty text", number, e);
                            String::new()
                        }
                    }
                }
                None => String::new(),
            };
            pages.push(PageText::new(number, text));
        }
        Ok(pages)
    }
}
