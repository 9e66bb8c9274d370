//! Circular number and effective date extraction.
//!
//! Both lookups run an ordered list of case-insensitive patterns over
//! the full document text; the first pattern that matches anywhere
//! wins and the rest are not tried. Specific patterns are ordered
//! before generic ones so a stray "No." elsewhere in the text cannot
//! pre-empt an explicit "Circular No.".

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::model::metadata::NOT_FOUND;

/// Ordered sheet-number patterns, highest priority first.
const SHEET_PATTERN_SOURCES: &[&str] = &[
    r"(?i)Circular No\.?\s*([A-Za-z0-9/().\- ]+)",
    r"(?i)No\.?\s*([A-Za-z0-9/().\- ]{3,30})",
    r"(?i)\bFile No\.?\s*[:\-]?\s*([A-Za-z0-9/().\- ]+)",
    r"(?i)\bDO No\.?\s*[:\-]?\s*([A-Za-z0-9/().\- ]+)",
];

/// Ordered effective-date patterns, highest priority first. The bare
/// `D Month YYYY` form is last so it only fires when no explicit
/// effective-date phrasing exists.
const DATE_PATTERN_SOURCES: &[&str] = &[
    r"(?i)Effective\s+from\s+([0-9]{1,2}\s+[A-Za-z]+\s+[0-9]{4})",
    r"(?i)Effective\s+Date\s*[:\-]\s*([0-9]{1,2}\s+[A-Za-z]+\s+[0-9]{4})",
    r"(?i)with effect from\s+([0-9]{1,2}\s+[A-Za-z]+\s+[0-9]{4})",
    r"(?i)\b([0-9]{1,2}\s+(?:January|February|March|April|May|June|July|August|September|October|November|December)\s+[0-9]{4})\b",
];

static SHEET_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(SHEET_PATTERN_SOURCES));
static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| compile(DATE_PATTERN_SOURCES));

fn compile(sources: &[&str]) -> Vec<Regex> {
    sources
        .iter()
        .map(|src| Regex::new(src).expect("pattern table entry must compile"))
        .collect()
}

/// Run an ordered pattern table; first match wins.
fn first_capture(patterns: &[Regex], text: &str) -> Option<String> {
    for (priority, pattern) in patterns.iter().enumerate() {
        if let Some(caps) = pattern.captures(text) {
            let value = caps.get(1).map(|m| m.as_str().trim().to_string())?;
            debug!("pattern priority {} matched: {:?}", priority, value);
            return Some(value);
        }
    }
    None
}

/// Extract `(sheet_number, effective_date)` from the full document text.
///
/// Each value defaults to the single-space [`NOT_FOUND`] sentinel when
/// no pattern in its table matches.
pub fn find_sheet_and_date(full_text: &str) -> (String, String) {
    let sheet = first_capture(&SHEET_PATTERNS, full_text)
        .unwrap_or_else(|| NOT_FOUND.to_string());
    let eff_date = first_capture(&DATE_PATTERNS, full_text)
        .unwrap_or_else(|| NOT_FOUND.to_string());
    (sheet, eff_date)
}
