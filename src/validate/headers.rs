// src/validate/headers.rs

use std::collections::HashMap;

use crate::decode::RawRow;
use crate::error::IngestError;

/// Canonical (lowercased) names of the columns every upload must contain,
/// in the order `IntakeRecord` fields are laid out. Column order in the
/// file is free; casing is free; extra columns are tolerated.
pub const REQUIRED_FIELDS: [&str; 10] = [
    "carrierid",
    "accountid",
    "groupid",
    "plantype",
    "mailorderpharmacy",
    "prospectclient",
    "editmember",
    "entitlements",
    "accesserrormessage",
    "notes",
];

/// Where each required field sits in one particular file.
///
/// Built from the validated header row, then applied to every data row of
/// that file, so a reordered upload is read correctly instead of merely
/// passing the header check.
#[derive(Debug, Clone)]
pub struct HeaderMap {
    index: [usize; REQUIRED_FIELDS.len()],
}

impl HeaderMap {
    /// Check the header row and resolve each required field to its column.
    /// Every missing name is collected before failing, so one error names
    /// the complete remediation list.
    pub fn from_header(header: &RawRow) -> Result<Self, IngestError> {
        let seen: HashMap<String, usize> = header
            .cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (cell.trim().to_lowercase(), i))
            .collect();

        let mut index = [0usize; REQUIRED_FIELDS.len()];
        let mut missing = Vec::new();
        for (slot, name) in REQUIRED_FIELDS.iter().enumerate() {
            match seen.get(*name) {
                Some(&col) => index[slot] = col,
                None => missing.push((*name).to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(IngestError::MissingHeaders { missing });
        }
        Ok(Self { index })
    }

    /// Cells a data row must reach for every mapped column to exist.
    pub fn min_width(&self) -> usize {
        self.index.iter().max().map(|m| m + 1).unwrap_or(0)
    }

    /// Pull the mapped cells out of `row` in canonical field order.
    pub fn project<'a>(&self, row: &'a RawRow) -> Result<Vec<&'a str>, IngestError> {
        let need = self.min_width();
        if row.cells.len() < need {
            return Err(IngestError::MalformedRow {
                line: row.line,
                expected: need,
                found: row.cells.len(),
            });
        }
        Ok(self.index.iter().map(|&col| row.cells[col].as_str()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cells: &[&str]) -> RawRow {
        RawRow {
            line: 1,
            cells: cells.iter().map(|c| c.to_string()).collect(),
        }
    }

    const CANONICAL: [&str; 10] = [
        "carrierId",
        "accountId",
        "groupId",
        "planType",
        "mailOrderPharmacy",
        "prospectClient",
        "editMember",
        "entitlements",
        "accessErrorMessage",
        "notes",
    ];

    #[test]
    fn canonical_header_passes() {
        assert!(HeaderMap::from_header(&header(&CANONICAL)).is_ok());
    }

    #[test]
    fn any_casing_and_padding_passes() {
        let cells: Vec<String> = CANONICAL.iter().map(|c| format!("  {}  ", c.to_uppercase())).collect();
        let row = RawRow { line: 1, cells };
        assert!(HeaderMap::from_header(&row).is_ok());
    }

    #[test]
    fn any_permutation_passes_and_maps_columns() {
        let map = HeaderMap::from_header(&header(&[
            "PlanType",
            "CarrierID",
            "notes",
            "GroupId",
            "AccountID",
            "EditMember",
            "ProspectClient",
            "MailOrderPharmacy",
            "AccessErrorMessage",
            "Entitlements",
        ]))
        .unwrap();

        let data = RawRow {
            line: 2,
            cells: ["PPO", "C1", "n", "G1", "A1", "N", "Y", "N", "", "R1"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
        };
        let cells = map.project(&data).unwrap();
        assert_eq!(cells[0], "C1"); // carrierid
        assert_eq!(cells[3], "PPO"); // plantype
        assert_eq!(cells[9], "n"); // notes
    }

    #[test]
    fn extra_columns_are_tolerated() {
        let mut cells: Vec<&str> = CANONICAL.to_vec();
        cells.push("somethingElse");
        assert!(HeaderMap::from_header(&header(&cells)).is_ok());
    }

    #[test]
    fn every_missing_name_is_reported_at_once() {
        match HeaderMap::from_header(&header(&[
            "accountId",
            "groupId",
            "planType",
            "mailOrderPharmacy",
            "editMember",
            "entitlements",
            "accessErrorMessage",
        ])) {
            Err(IngestError::MissingHeaders { missing }) => {
                assert_eq!(missing, vec!["carrierid", "prospectclient", "notes"]);
            }
            other => panic!("expected MissingHeaders, got {:?}", other),
        }
    }

    #[test]
    fn min_width_covers_the_rightmost_mapped_column() {
        let map = HeaderMap::from_header(&header(&CANONICAL)).unwrap();
        assert_eq!(map.min_width(), 10);

        let mut with_extra: Vec<&str> = vec!["ignored"];
        with_extra.extend_from_slice(&CANONICAL);
        let map = HeaderMap::from_header(&header(&with_extra)).unwrap();
        assert_eq!(map.min_width(), 11);
    }
}
