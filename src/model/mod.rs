//! Data model for circular extraction.
//!
//! The model mirrors the flow of the pipeline: [`PageText`] is what the
//! page source produces, [`ParagraphRecord`] is what segmentation
//! produces, [`CircularMetadata`] is derived once per document, and
//! [`OutputRow`] is the flat export shape joining all of them.

pub(crate) mod metadata;
mod page;
mod paragraph;
mod row;

pub use metadata::{CircularMetadata, NOT_FOUND};
pub use page::{full_text, PageText};
pub use paragraph::ParagraphRecord;
pub use row::OutputRow;
