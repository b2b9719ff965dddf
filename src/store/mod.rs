// src/store/mod.rs

pub mod fs;

pub use fs::JsonStore;

use anyhow::Result;

use crate::model::{Profile, UploadArtifact};

/// Where a finished batch lands. The pipeline only ever calls these three
/// operations; a deployment with a real database supplies its own
/// implementation.
pub trait RecordStore {
    /// Persist every profile of one batch.
    fn save_profiles(&self, profiles: &[Profile]) -> Result<()>;

    /// Persist the original uploaded file alongside the records.
    fn save_artifact(&self, artifact: &UploadArtifact) -> Result<()>;

    /// Remove a stored artifact by its original file name.
    fn delete_artifact(&self, file_name: &str) -> Result<()>;
}
