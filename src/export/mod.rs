//! Output rendering: CSV artifact, JSON, and console preview.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::info;

use crate::error::Result;
use crate::model::OutputRow;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonFormat {
    /// Pretty-printed with indentation.
    Pretty,
    /// Single-line compact output.
    Compact,
}

/// Write rows to a CSV file.
///
/// The header row comes from the serde declaration of [`OutputRow`], so
/// the columns written always match the rows built. Rows are expected
/// to be fully built before calling: if file creation fails, no partial
/// artifact exists.
pub fn to_csv_file<P: AsRef<Path>>(rows: &[OutputRow], path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    to_csv_writer(rows, file)?;
    info!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}

/// Write rows as CSV to any writer.
pub fn to_csv_writer<W: Write>(rows: &[OutputRow], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Render rows as JSON.
pub fn to_json(rows: &[OutputRow], format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(rows)?,
        JsonFormat::Compact => serde_json::to_string(rows)?,
    };
    Ok(json)
}

/// Default row count for the console preview.
pub const PREVIEW_ROWS: usize = 40;

/// Human-readable dump of the first `limit` rows, for console
/// inspection. Not part of the persisted artifact's contract.
pub fn preview(rows: &[OutputRow], limit: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>4}  {:<8}  {:<32}  {}\n",
        "Seq", "Para", "Heading", "ParagraphText"
    ));
    for row in rows.iter().take(limit) {
        out.push_str(&format!(
            "{:>4}  {:<8}  {:<32}  {}\n",
            row.seq,
            truncate(&row.para_number, 8),
            truncate(&row.heading, 32),
            truncate(&row.paragraph_text, 80),
        ));
    }
    if rows.len() > limit {
        out.push_str(&format!("... {} more rows\n", rows.len() - limit));
    }
    out
}

/// Truncate to at most `max` characters, marking elision.
fn truncate(s: &str, max: usize) -> String {
    let flat = s.replace(['\n', '\r'], " ");
    if flat.chars().count() <= max {
        flat
    } else {
        let cut: String = flat.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CircularMetadata, ParagraphRecord};

    fn sample_rows() -> Vec<OutputRow> {
        let meta = CircularMetadata {
            sheet_number: "DBR.1/2020".to_string(),
            effective_date: "1 April 2021".to_string(),
            main_heading: "Master Circular".to_string(),
        };
        let p1 = ParagraphRecord::new("1", "First paragraph, with a comma.");
        let p2 = ParagraphRecord::new("2", "Second \"quoted\" paragraph.");
        vec![
            OutputRow::build(1, "c.pdf", &meta, &p1),
            OutputRow::build(2, "c.pdf", &meta, &p2),
        ]
    }

    #[test]
    fn test_csv_header_and_rows() {
        let mut buf = Vec::new();
        to_csv_writer(&sample_rows(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Seq,FileName,SheetNumber,EffectiveDate,MainHeading,ParaNumber,ParentPara,Heading,ParagraphText"
        );
        // Commas and quotes in fields are escaped, not column breaks.
        let row1 = lines.next().unwrap();
        assert!(row1.starts_with("1,c.pdf,DBR.1/2020,1 April 2021,Master Circular,1,,"));
        assert!(row1.contains("\"First paragraph, with a comma.\""));
    }

    #[test]
    fn test_csv_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let rows = sample_rows();
        to_csv_file(&rows, &path).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let back: Vec<OutputRow> = rdr.deserialize().map(|r| r.unwrap()).collect();
        assert_eq!(back, rows);
    }

    #[test]
    fn test_json_formats() {
        let rows = sample_rows();
        let pretty = to_json(&rows, JsonFormat::Pretty).unwrap();
        let compact = to_json(&rows, JsonFormat::Compact).unwrap();
        assert!(pretty.contains('\n'));
        assert!(!compact.contains('\n'));
        assert!(compact.contains("\"SheetNumber\":\"DBR.1/2020\""));
    }

    #[test]
    fn test_preview_limit() {
        let rows = sample_rows();
        let dump = preview(&rows, 1);
        assert!(dump.contains("... 1 more rows"));
        assert!(dump.lines().next().unwrap().contains("Seq"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly10!", 10), "exactly10!");
        let cut = truncate("a much longer string than allowed", 10);
        assert_eq!(cut.chars().count(), 10);
        assert!(cut.ends_with('…'));
    }
}
