// src/ingest/convert.rs

use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

use crate::model::{IntakeRecord, Profile, ProfileNote};

/// Context shared by every record of one batch: who uploaded, the caller's
/// correlation id, and the one timestamp the whole batch is stamped with.
#[derive(Debug, Clone)]
pub struct BatchContext {
    pub user_id: String,
    pub correlation_id: String,
    pub timestamp: DateTime<FixedOffset>,
}

/// Map one validated intake record to its persisted form.
///
/// Content fields copy verbatim, `entitlements` lands as the access role,
/// and the audit fields come from the batch context, never from the file.
/// A non-blank notes cell becomes exactly one owned note whose
/// back-reference is set here, before anything is persisted.
pub fn to_profile(record: &IntakeRecord, ctx: &BatchContext) -> Profile {
    let id = Uuid::new_v4();

    let trimmed = record.notes.trim();
    let notes = if trimmed.is_empty() {
        Vec::new()
    } else {
        vec![ProfileNote {
            profile_id: id,
            note_content: trimmed.to_string(),
            created_by: ctx.user_id.clone(),
            created_at: ctx.timestamp,
            effective_date: ctx.timestamp,
        }]
    };

    Profile {
        id,
        carrier_id: record.carrier_id.clone(),
        account_id: record.account_id.clone(),
        group_id: record.group_id.clone(),
        plan_type: record.plan_type.clone(),
        mail_order_pharmacy: record.mail_order_pharmacy.clone(),
        prospect_client: record.prospect_client.clone(),
        edit_member: record.edit_member.clone(),
        access_role: record.entitlements.clone(),
        access_error_message: record.access_error_message.clone(),
        created_by: ctx.user_id.clone(),
        created_at: ctx.timestamp,
        notes,
    }
}
