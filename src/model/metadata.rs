//! Document-level metadata.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel value for metadata fields where no pattern matched.
///
/// A single space, not an empty string: downstream consumers rely on the
/// distinction between "not found" and "found empty".
pub const NOT_FOUND: &str = " ";

/// Metadata derived once from the full document text.
///
/// Attached identically to every output row; intentionally denormalized
/// for the flat tabular export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircularMetadata {
    /// Circular / file / reference number, or [`NOT_FOUND`].
    pub sheet_number: String,

    /// Effective date as stated in the document body, or [`NOT_FOUND`].
    pub effective_date: String,

    /// Main document title, joined from the opening lines; may be empty.
    pub main_heading: String,
}

impl CircularMetadata {
    /// Create metadata with both lookup fields set to the sentinel.
    pub fn not_found() -> Self {
        Self {
            sheet_number: NOT_FOUND.to_string(),
            effective_date: NOT_FOUND.to_string(),
            main_heading: String::new(),
        }
    }

    /// Whether a sheet number was actually found.
    pub fn has_sheet_number(&self) -> bool {
        self.sheet_number != NOT_FOUND
    }

    /// Whether an effective date was actually found.
    pub fn has_effective_date(&self) -> bool {
        self.effective_date != NOT_FOUND
    }

    /// Best-effort parse of the effective date.
    ///
    /// The raw string remains authoritative for export; this helper only
    /// covers the `D Month YYYY` form the date patterns capture.
    pub fn effective_date_parsed(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.effective_date.trim(), "%d %B %Y").ok()
    }
}

impl Default for CircularMetadata {
    fn default() -> Self {
        Self::not_found()
    }
}
