// src/decode/sheet.rs

use std::io::Cursor;

use calamine::{Data, Range, Reader, Xlsx};
use tracing::debug;

use super::RawRow;
use crate::error::IngestError;

/// Read the first sheet of an xlsx workbook into rows. Only the first
/// sheet is consulted; the workbook handle lives no longer than this call.
pub fn decode_workbook(bytes: &[u8]) -> Result<Vec<RawRow>, IngestError> {
    let mut workbook = Xlsx::new(Cursor::new(bytes))?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Err(IngestError::EmptySource),
    };
    debug!(rows = range.height(), cols = range.width(), "sheet range loaded");
    Ok(rows_from_range(&range))
}

/// Flatten a sheet range into rows. A cell inside a present row that holds
/// nothing decodes to an empty string; short rows are padded by the range
/// itself, so trailing blanks never shift the remaining columns. A row
/// with no populated cell at all contributes nothing.
pub(crate) fn rows_from_range(range: &Range<Data>) -> Vec<RawRow> {
    let first_line = range.start().map(|(r, _)| r as usize + 1).unwrap_or(1);
    range
        .rows()
        .enumerate()
        .filter_map(|(i, cells)| {
            let cells: Vec<String> = cells.iter().map(cell_text).collect();
            if cells.iter().all(String::is_empty) {
                return None;
            }
            Some(RawRow {
                line: first_line + i,
                cells,
            })
        })
        .collect()
}

/// Render one cell to the text the row pipeline sees. Numeric cells that
/// hold a whole number render without a fractional part, so an id typed as
/// a number comes out as `123`, not `123.0`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Bool(b) => b.to_string().to_uppercase(),
        Data::DateTime(dt) => dt.as_f64().to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::Error(e) => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_cells_decode_to_empty_string() {
        // 2 rows x 3 cols, second row only has its first cell populated
        let mut range = Range::new((0, 0), (1, 2));
        range.set_value((0, 0), Data::String("a".into()));
        range.set_value((0, 1), Data::String("b".into()));
        range.set_value((0, 2), Data::String("c".into()));
        range.set_value((1, 0), Data::String("x".into()));

        let rows = rows_from_range(&range);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].cells, vec!["x", "", ""]);
    }

    #[test]
    fn fully_empty_rows_contribute_nothing() {
        // row index 1 stays empty between two populated rows
        let mut range = Range::new((0, 0), (2, 1));
        range.set_value((0, 0), Data::String("h1".into()));
        range.set_value((0, 1), Data::String("h2".into()));
        range.set_value((2, 0), Data::String("x".into()));
        range.set_value((2, 1), Data::String("y".into()));

        let rows = rows_from_range(&range);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line, 1);
        assert_eq!(rows[1].line, 3);
        assert_eq!(rows[1].cells, vec!["x", "y"]);
    }

    #[test]
    fn line_numbers_follow_the_sheet_when_data_starts_lower() {
        // header on sheet row 3 (index 2)
        let mut range = Range::new((2, 0), (3, 0));
        range.set_value((2, 0), Data::String("h".into()));
        range.set_value((3, 0), Data::String("v".into()));

        let rows = rows_from_range(&range);
        assert_eq!(rows[0].line, 3);
        assert_eq!(rows[1].line, 4);
    }

    #[test]
    fn cell_text_renders_each_kind() {
        assert_eq!(cell_text(&Data::Empty), "");
        assert_eq!(cell_text(&Data::String("  C1  ".into())), "C1");
        assert_eq!(cell_text(&Data::Int(42)), "42");
        assert_eq!(cell_text(&Data::Float(123.0)), "123");
        assert_eq!(cell_text(&Data::Float(1.5)), "1.5");
        assert_eq!(cell_text(&Data::Bool(true)), "TRUE");
    }
}
