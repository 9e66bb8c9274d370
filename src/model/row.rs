//! Flat export rows.

use serde::{Deserialize, Serialize};

use super::{CircularMetadata, ParagraphRecord};

/// One row of the tabular export: one paragraph with the document
/// metadata denormalized onto it.
///
/// The serde field order *is* the column contract:
/// `Seq, FileName, SheetNumber, EffectiveDate, MainHeading, ParaNumber,
/// ParentPara, Heading, ParagraphText`. The CSV header is generated from
/// this declaration, so the columns written can never drift from the
/// rows built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    /// Dense 1-based sequence number, in paragraph order.
    #[serde(rename = "Seq")]
    pub seq: usize,

    /// Source file name (not the full path).
    #[serde(rename = "FileName")]
    pub file_name: String,

    /// Circular / file / reference number.
    #[serde(rename = "SheetNumber")]
    pub sheet_number: String,

    /// Effective date as found in the document.
    #[serde(rename = "EffectiveDate")]
    pub effective_date: String,

    /// Main document title.
    #[serde(rename = "MainHeading")]
    pub main_heading: String,

    /// Paragraph label as found (or sequential fallback).
    #[serde(rename = "ParaNumber")]
    pub para_number: String,

    /// Reserved; always empty.
    #[serde(rename = "ParentPara")]
    pub parent_para: String,

    /// Inferred sub-heading.
    #[serde(rename = "Heading")]
    pub heading: String,

    /// Full paragraph body.
    #[serde(rename = "ParagraphText")]
    pub paragraph_text: String,
}

impl OutputRow {
    /// Build a row from a paragraph and its document context.
    pub fn build(
        seq: usize,
        file_name: &str,
        metadata: &CircularMetadata,
        paragraph: &ParagraphRecord,
    ) -> Self {
        Self {
            seq,
            file_name: file_name.to_string(),
            sheet_number: metadata.sheet_number.clone(),
            effective_date: metadata.effective_date.clone(),
            main_heading: metadata.main_heading.clone(),
            para_number: paragraph.number.clone(),
            parent_para: paragraph.parent.clone(),
            heading: paragraph.heading.clone(),
            paragraph_text: paragraph.text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_row() {
        let meta = CircularMetadata {
            sheet_number: "DBR.123/2020".to_string(),
            effective_date: "1 April 2021".to_string(),
            main_heading: "Master Circular".to_string(),
        };
        let mut para = ParagraphRecord::new("7", "Banks shall report quarterly.");
        para.heading = "Reporting".to_string();

        let row = OutputRow::build(1, "circular.pdf", &meta, &para);
        assert_eq!(row.seq, 1);
        assert_eq!(row.file_name, "circular.pdf");
        assert_eq!(row.sheet_number, "DBR.123/2020");
        assert_eq!(row.main_heading, "Master Circular");
        assert_eq!(row.para_number, "7");
        assert_eq!(row.parent_para, "");
        assert_eq!(row.heading, "Reporting");
        assert_eq!(row.paragraph_text, "Banks shall report quarterly.");
    }

    #[test]
    fn test_column_order() {
        // The serde field names double as the CSV header.
        let row = OutputRow::build(
            1,
            "f.pdf",
            &CircularMetadata::not_found(),
            &ParagraphRecord::new("1", "text"),
        );
        let json = serde_json::to_string(&row).unwrap();
        let keys: Vec<&str> = [
            "Seq",
            "FileName",
            "SheetNumber",
            "EffectiveDate",
            "MainHeading",
            "ParaNumber",
            "ParentPara",
            "Heading",
            "ParagraphText",
        ]
        .to_vec();
        let mut last = 0;
        for key in keys {
            let pos = json.find(&format!("\"{}\"", key)).unwrap();
            assert!(pos >= last, "column {} out of order", key);
            last = pos;
        }
    }
}
