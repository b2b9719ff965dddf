// src/ingest/mod.rs

pub mod convert;

pub use convert::{to_profile, BatchContext};

use std::collections::HashSet;

use chrono::{FixedOffset, Utc};
use once_cell::sync::Lazy;
use tracing::{info, instrument, warn};

use crate::decode::{self, SourceFormat};
use crate::error::IngestError;
use crate::model::{IngestionSummary, IntakeRecord, Profile, UploadArtifact, UploadFile};
use crate::store::RecordStore;
use crate::validate::{validate_record, HeaderMap};

/// US-Central civil offset. Every timestamp in a batch uses it so records
/// compare stably regardless of where the process runs.
static CENTRAL: Lazy<FixedOffset> =
    Lazy::new(|| FixedOffset::west_opt(6 * 3600).expect("UTC-6 offset"));

/// What to do when two data rows carry identical field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupPolicy {
    /// Collapse duplicates into one record and report how many were
    /// dropped. This is the historical behavior of the upload flow.
    #[default]
    Merge,
    /// Abort the batch at the first duplicate row.
    Reject,
}

/// Runs one uploaded file through decode, validation, dedup, conversion
/// and persistence. One instance can serve many batches; batches share
/// nothing but the store behind it.
pub struct Ingestor<S> {
    store: S,
    dedup: DedupPolicy,
}

impl<S: RecordStore> Ingestor<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            dedup: DedupPolicy::default(),
        }
    }

    pub fn with_dedup_policy(mut self, dedup: DedupPolicy) -> Self {
        self.dedup = dedup;
        self
    }

    /// Run one batch, stamping it with the current wall clock in the fixed
    /// central offset. This is the only place the pipeline reads ambient
    /// time; everything downstream takes the stamp as a parameter.
    pub fn ingest(
        &self,
        upload: &UploadFile,
        user_id: &str,
        correlation_id: &str,
    ) -> Result<IngestionSummary, IngestError> {
        let ctx = BatchContext {
            user_id: user_id.to_string(),
            correlation_id: correlation_id.to_string(),
            timestamp: Utc::now().with_timezone(&CENTRAL),
        };
        self.ingest_at(upload, &ctx)
    }

    /// Run one batch under an explicit batch context.
    ///
    /// All-or-nothing: any decode, header or row failure aborts before the
    /// store is touched. The two store writes (profiles, then the
    /// artifact) are not atomic; if the artifact write fails the profile
    /// write stays applied. `delete_artifact` is the compensation hook for
    /// callers that need to unwind the other direction.
    #[instrument(level = "info", skip_all, fields(file = %upload.file_name))]
    pub fn ingest_at(
        &self,
        upload: &UploadFile,
        ctx: &BatchContext,
    ) -> Result<IngestionSummary, IngestError> {
        // 1) dispatch on the suffix, decode every row
        let format = SourceFormat::from_file_name(&upload.file_name)?;
        let rows = decode::decode(format, &upload.bytes)?;
        let Some((header, data_rows)) = rows.split_first() else {
            return Err(IngestError::EmptySource);
        };

        // 2) header schema check + per-file column map
        let map = HeaderMap::from_header(header)?;
        info!(rows = data_rows.len(), "headers validated");

        // 3) row pass: build and validate, any bad row rejects the file
        let mut records: Vec<(usize, IntakeRecord)> = Vec::with_capacity(data_rows.len());
        for row in data_rows {
            let record = IntakeRecord::from_row(row, &map)?;
            validate_record(&record, row.line)?;
            records.push((row.line, record));
        }

        // 4) dedup on full structural equality
        let mut seen: HashSet<IntakeRecord> = HashSet::with_capacity(records.len());
        let mut unique: Vec<IntakeRecord> = Vec::with_capacity(records.len());
        let mut discarded = 0usize;
        for (line, record) in records {
            if seen.insert(record.clone()) {
                unique.push(record);
            } else {
                match self.dedup {
                    DedupPolicy::Merge => discarded += 1,
                    DedupPolicy::Reject => return Err(IngestError::DuplicateRow { line }),
                }
            }
        }
        if discarded > 0 {
            warn!(discarded, "identical rows merged");
        }

        // 5) convert under the single batch stamp
        let profiles: Vec<Profile> = unique.iter().map(|r| to_profile(r, ctx)).collect();

        // 6) persist the records, then the original file
        if !profiles.is_empty() {
            self.store
                .save_profiles(&profiles)
                .map_err(IngestError::Store)?;
        }
        let artifact = UploadArtifact {
            file_name: upload.file_name.clone(),
            data: upload.bytes.clone(),
            created_by: ctx.user_id.clone(),
            created_at: ctx.timestamp,
        };
        self.store
            .save_artifact(&artifact)
            .map_err(IngestError::Store)?;
        info!(profiles = profiles.len(), "batch persisted");

        // 7) summary back to the caller
        Ok(IngestionSummary {
            resp_code: "201".to_string(),
            messages: vec!["profile details saved successfully".to_string()],
            correlation_id: ctx.correlation_id.clone(),
            file_name: upload.file_name.clone(),
            file_type: upload.content_type.clone(),
            file_size: upload.size(),
            duplicates_discarded: discarded,
            profiles,
        })
    }

    /// Remove a previously stored upload artifact by its file name.
    pub fn delete_artifact(&self, file_name: &str) -> Result<(), IngestError> {
        self.store
            .delete_artifact(file_name)
            .map_err(IngestError::Store)
    }
}
