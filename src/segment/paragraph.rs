//! Paragraph segmentation.
//!
//! Primary mode keys on the numbered-paragraph convention of formal
//! circulars: a 1-3 digit label followed by a period at the start of a
//! line. When a document carries no such markers at all, segmentation
//! falls back to blank-line-delimited blocks with sequential labels.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::model::ParagraphRecord;

/// A numbered-paragraph boundary: a line-start `N.` marker.
static BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*(\d{1,3}\.)\s*").expect("boundary pattern"));

/// Same marker, anchored at the start of a trimmed block, for stripping
/// the label off the paragraph body exactly once.
static LEADING_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d{1,3}\.\s*").expect("leading marker pattern"));

/// Blank-line separator for the fallback mode.
static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("blank line pattern"));

/// Split the full document text into ordered paragraph records.
///
/// Labels are taken verbatim from the document: they need not be unique,
/// monotonic, or gap-free, and no renumbering or validation happens.
/// Order is document position, not numeric value.
pub fn split_into_paragraphs(full_text: &str) -> Vec<ParagraphRecord> {
    let text = full_text.replace("\r\n", "\n").replace('\r', "\n");

    let starts: Vec<(usize, String)> = BOUNDARY
        .captures_iter(&text)
        .map(|caps| {
            let whole = caps.get(0).expect("match");
            let label = caps.get(1).expect("group").as_str();
            (whole.start(), label.trim_end_matches('.').to_string())
        })
        .collect();

    if starts.is_empty() {
        debug!("no numbered-paragraph boundaries, using blank-line fallback");
        return split_blocks(&text);
    }
    debug!("found {} numbered-paragraph boundaries", starts.len());

    let mut paragraphs = Vec::with_capacity(starts.len());
    for (i, (pos, label)) in starts.iter().enumerate() {
        let end = starts.get(i + 1).map_or(text.len(), |(next, _)| *next);
        let block = text[*pos..end].trim();
        let body = LEADING_MARKER.replace(block, "");
        paragraphs.push(ParagraphRecord::new(label.clone(), body.into_owned()));
    }
    paragraphs
}

/// Fallback segmentation: blank-line-delimited blocks, labeled 1..k.
fn split_blocks(text: &str) -> Vec<ParagraphRecord> {
    BLANK_LINE
        .split(text)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .enumerate()
        .map(|(idx, block)| ParagraphRecord::new((idx + 1).to_string(), block))
        .collect()
}

/// Parent/child hierarchy pass.
///
/// Reserved: hierarchy inference is not implemented, and this pass only
/// guarantees the `parent` field is present and empty on every record.
pub fn detect_parent_child(paragraphs: &mut [ParagraphRecord]) {
    for p in paragraphs.iter_mut() {
        p.parent = String::new();
    }
}
