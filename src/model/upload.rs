// src/model/upload.rs

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use super::Profile;

/// An upload as it arrives: original name, declared content type and the
/// raw bytes. The pipeline never touches the filesystem to read it.
#[derive(Debug, Clone)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// The retained original file, persisted once per batch next to the
/// records parsed out of it.
#[derive(Debug, Clone)]
pub struct UploadArtifact {
    pub file_name: String,
    pub data: Vec<u8>,
    pub created_by: String,
    pub created_at: DateTime<FixedOffset>,
}

/// What a successful batch returns to the caller.
#[derive(Debug, Serialize)]
pub struct IngestionSummary {
    pub resp_code: String,
    pub messages: Vec<String>,
    pub correlation_id: String,
    pub file_name: String,
    pub file_type: String,
    pub file_size: usize,
    /// Rows dropped by the merge dedup policy. Zero under reject, which
    /// aborts instead.
    pub duplicates_discarded: usize,
    pub profiles: Vec<Profile>,
}
