//! Heuristic analysis passes over the full document text.
//!
//! Everything here operates on the concatenated page text and is pure
//! and deterministic: ordered regex pattern tables for metadata,
//! positional heuristics for the main title, numbered-boundary
//! segmentation for paragraphs, and lookback-based sub-heading
//! assignment. Pattern tables are declared as explicit ordered lists so
//! the priority contract stays auditable.

pub mod heading;
pub mod metadata;
pub mod paragraph;

pub use heading::{assign_headings, extract_main_heading, HeadingOptions};
pub use metadata::find_sheet_and_date;
pub use paragraph::{detect_parent_child, split_into_paragraphs};
