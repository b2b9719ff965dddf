// src/decode/mod.rs

pub mod csv;
pub mod sheet;

use crate::error::IngestError;

/// One decoded source row. `line` is the 1-based physical row in the file,
/// header included, so failures can point at the row the uploader sees in
/// their spreadsheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub line: usize,
    pub cells: Vec<String>,
}

/// The two accepted upload formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Xlsx,
}

impl SourceFormat {
    /// Dispatch on the file-name suffix, case-insensitive.
    pub fn from_file_name(name: &str) -> Result<Self, IngestError> {
        let lower = name.to_lowercase();
        if lower.ends_with(".csv") {
            Ok(Self::Csv)
        } else if lower.ends_with(".xlsx") {
            Ok(Self::Xlsx)
        } else {
            Err(IngestError::UnsupportedFormat {
                name: name.to_string(),
            })
        }
    }
}

/// Decode the raw bytes of an upload into rows, header first. A file with
/// no rows at all has no header either and is rejected here.
pub fn decode(format: SourceFormat, bytes: &[u8]) -> Result<Vec<RawRow>, IngestError> {
    let rows = match format {
        SourceFormat::Csv => csv::decode_text(&String::from_utf8_lossy(bytes)),
        SourceFormat::Xlsx => sheet::decode_workbook(bytes)?,
    };
    if rows.is_empty() {
        return Err(IngestError::EmptySource);
    }
    Ok(rows)
}
