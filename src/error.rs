// src/error.rs

use std::fmt;

use thiserror::Error;

/// One broken rule on a single field of a single row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub field: &'static str,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn list_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Everything that can abort an upload. Each variant carries what the
/// uploader needs to fix the file in one pass: the full missing-header
/// list, every violated rule, and the 1-based row a failure came from.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("file is empty or missing headers")]
    EmptySource,

    #[error("unsupported file type: {name}")]
    UnsupportedFormat { name: String },

    #[error("missing or incorrect headers: {}", .missing.join(", "))]
    MissingHeaders { missing: Vec<String> },

    #[error("row {line}: expected {expected} columns, found {found}")]
    MalformedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("row {line}: {}", list_violations(.violations))]
    InvalidRow {
        line: usize,
        violations: Vec<Violation>,
    },

    #[error("row {line}: duplicate of an earlier row")]
    DuplicateRow { line: usize },

    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    #[error("storage write failed: {0}")]
    Store(#[source] anyhow::Error),
}
