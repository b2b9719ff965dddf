// src/model/profile.rs

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The persisted form of one validated upload row.
///
/// Audit fields (`created_by`, `created_at`) come from the batch context,
/// never from the file. `created_at` is identical for every profile of one
/// batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub carrier_id: String,
    pub account_id: String,
    pub group_id: String,
    pub plan_type: String,
    pub mail_order_pharmacy: String,
    pub prospect_client: String,
    pub edit_member: String,
    /// The upload's `entitlements` column lands here.
    pub access_role: String,
    pub access_error_message: String,
    pub created_by: String,
    pub created_at: DateTime<FixedOffset>,
    /// Owned notes; empty when the source row had a blank notes cell,
    /// never absent.
    pub notes: Vec<ProfileNote>,
}

/// A note attached to exactly one profile. `profile_id` points back at the
/// owner and is set when the note is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileNote {
    pub profile_id: Uuid,
    pub note_content: String,
    pub created_by: String,
    pub created_at: DateTime<FixedOffset>,
    pub effective_date: DateTime<FixedOffset>,
}
