//! OCR fallback for image-only pages.
//!
//! Rasterizes a single page with `pdftoppm` and feeds it to
//! `tesseract`. Availability of both tools is detected once at
//! construction via [`TesseractOcr::detect`]; an absent toolchain is a
//! configuration fact, and the page source degrades to empty text
//! without consulting OCR at all.

use std::path::Path;
use std::process::{Command, Stdio};

use log::debug;

use crate::error::{Error, Result};

/// Strategy interface for rasterize-and-recognize page OCR.
pub trait OcrEngine {
    /// Recognize the text of one page (1-indexed) of `pdf`, rasterized
    /// at `dpi`. A failed recognition is an error; the caller treats it
    /// as an unreadable page, never as a fatal condition.
    fn page_to_text(&self, pdf: &Path, page: u32, dpi: u32) -> Result<String>;
}

/// OCR engine shelling out to `pdftoppm` and `tesseract`.
#[derive(Debug, Clone, Copy)]
pub struct TesseractOcr;

impl TesseractOcr {
    /// Detect the OCR toolchain. Returns `None` when either tool is not
    /// on `PATH`.
    pub fn detect() -> Option<Self> {
        if command_available("pdftoppm") && command_available("tesseract") {
            Some(Self)
        } else {
            debug!("pdftoppm/tesseract not available, OCR fallback disabled");
            None
        }
    }
}

impl OcrEngine for TesseractOcr {
    fn page_to_text(&self, pdf: &Path, page: u32, dpi: u32) -> Result<String> {
        let scratch = tempfile::tempdir()?;
        let prefix = scratch.path().join("page");

        let status = Command::new("pdftoppm")
            .arg("-f")
            .arg(page.to_string())
            .arg("-l")
            .arg(page.to_string())
            .arg("-r")
            .arg(dpi.to_string())
            .arg("-png")
            .arg("-singlefile")
            .arg(pdf)
            .arg(&prefix)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|e| Error::Ocr(format!("pdftoppm: {}", e)))?;
        if !status.success() {
            return Err(Error::Ocr(format!(
                "pdftoppm exited with {} for page {}",
                status, page
            )));
        }

        let image = prefix.with_extension("png");
        let output = Command::new("tesseract")
            .arg(&image)
            .arg("stdout")
            .stderr(Stdio::null())
            .output()
            .map_err(|e| Error::Ocr(format!("tesseract: {}", e)))?;
        if !output.status.success() {
            return Err(Error::Ocr(format!(
                "tesseract exited with {} for page {}",
                output.status, page
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Check whether an external command can be spawned at all.
fn command_available(name: &str) -> bool {
    Command::new(name)
        .arg("-v")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_available_for_missing_binary() {
        assert!(!command_available("definitely-not-a-real-binary-xyz"));
    }
}
