//! Paragraph-level types.

use serde::{Deserialize, Serialize};

/// A single segmented paragraph.
///
/// Created by the paragraph segmenter with `number` and `text` set;
/// the heading assigner fills in `heading` in place afterwards.
/// Record order mirrors document order and drives the output `Seq`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParagraphRecord {
    /// Paragraph label as found in the document (e.g. `"44"`), or a
    /// sequential fallback label when no numbering was detected.
    /// Labels are preserved verbatim: duplicates and gaps are kept.
    pub number: String,

    /// Paragraph body, trimmed, with the leading `N.` marker stripped.
    pub text: String,

    /// Parent paragraph label. Reserved for hierarchy detection, which
    /// is not implemented; always empty.
    pub parent: String,

    /// Inferred sub-heading; may be empty.
    pub heading: String,
}

impl ParagraphRecord {
    /// Create a new paragraph record with no heading assigned yet.
    pub fn new(number: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            text: text.into(),
            parent: String::new(),
            heading: String::new(),
        }
    }

    /// Number of whitespace-separated words in the paragraph body.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
