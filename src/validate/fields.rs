// src/validate/fields.rs

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{IngestError, Violation};
use crate::model::IntakeRecord;

/// Fields that must hold a non-blank value.
const REQUIRED: [&str; 4] = ["carrierId", "accountId", "groupId", "planType"];

/// Flag fields that must be exactly `Y` or `N`. A blank flag fails too:
/// the pattern does not match the empty string.
const YES_NO: [&str; 3] = ["mailOrderPharmacy", "prospectClient", "editMember"];

static YES_NO_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new("^[YN]$").expect("yes/no pattern"));

/// Apply the per-field contract to one record. Every rule is evaluated,
/// never just the first broken one, so a single error report carries the
/// complete fix list for the row.
pub fn validate_record(record: &IntakeRecord, line: usize) -> Result<(), IngestError> {
    let mut violations = Vec::new();
    for (field, value) in record.fields() {
        if REQUIRED.contains(&field) && value.trim().is_empty() {
            violations.push(Violation {
                field,
                message: format!("{} is required", field),
            });
        }
        if YES_NO.contains(&field) && !YES_NO_PATTERN.is_match(value) {
            violations.push(Violation {
                field,
                message: format!("{} must be 'Y' or 'N'", field),
            });
        }
    }
    if violations.is_empty() {
        Ok(())
    } else {
        Err(IngestError::InvalidRow { line, violations })
    }
}
