// src/model/intake.rs

use serde::{Deserialize, Serialize};

use crate::decode::RawRow;
use crate::error::IngestError;
use crate::validate::HeaderMap;

/// One data row of an upload, field for field, before conversion.
///
/// Equality and hashing cover every field; the batch dedup step keys on
/// that, so two rows with identical values collapse to one record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub carrier_id: String,
    pub account_id: String,
    pub group_id: String,
    pub plan_type: String,
    pub mail_order_pharmacy: String,
    pub prospect_client: String,
    pub edit_member: String,
    pub entitlements: String,
    pub access_error_message: String,
    pub notes: String,
}

impl IntakeRecord {
    /// Build a record from a decoded row, reading each field out of the
    /// column the validated header mapped it to.
    pub fn from_row(row: &RawRow, map: &HeaderMap) -> Result<Self, IngestError> {
        let cells = map.project(row)?;
        Ok(Self {
            carrier_id: cells[0].to_string(),
            account_id: cells[1].to_string(),
            group_id: cells[2].to_string(),
            plan_type: cells[3].to_string(),
            mail_order_pharmacy: cells[4].to_string(),
            prospect_client: cells[5].to_string(),
            edit_member: cells[6].to_string(),
            entitlements: cells[7].to_string(),
            access_error_message: cells[8].to_string(),
            notes: cells[9].to_string(),
        })
    }

    /// Field name / value pairs in canonical column order. The field
    /// validator walks this to apply its rules.
    pub fn fields(&self) -> [(&'static str, &str); 10] {
        [
            ("carrierId", self.carrier_id.as_str()),
            ("accountId", self.account_id.as_str()),
            ("groupId", self.group_id.as_str()),
            ("planType", self.plan_type.as_str()),
            ("mailOrderPharmacy", self.mail_order_pharmacy.as_str()),
            ("prospectClient", self.prospect_client.as_str()),
            ("editMember", self.edit_member.as_str()),
            ("entitlements", self.entitlements.as_str()),
            ("accessErrorMessage", self.access_error_message.as_str()),
            ("notes", self.notes.as_str()),
        ]
    }
}
