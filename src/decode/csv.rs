// src/decode/csv.rs

use super::RawRow;

/// Split CSV text into rows, one per physical line, cells by plain comma
/// split. Quoting is not part of this format: an embedded comma starts a
/// new cell. Lines with no content at all carry no data and are dropped,
/// the same way an empty spreadsheet row is.
pub fn decode_text(text: &str) -> Vec<RawRow> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| RawRow {
            line: i + 1,
            cells: line.split(',').map(str::to_string).collect(),
        })
        .collect()
}
