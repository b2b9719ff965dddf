// src/store/fs.rs

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, Utc};
use glob::glob;
use serde::Serialize;
use tracing::info;

use super::RecordStore;
use crate::model::{Profile, UploadArtifact};

/// Directory-backed store: one JSON document per profile batch, artifact
/// bytes next to a JSON metadata sidecar. Good enough for local runs and
/// tests; a service fronting a database implements `RecordStore` itself.
pub struct JsonStore {
    profiles_dir: PathBuf,
    artifacts_dir: PathBuf,
}

#[derive(Serialize)]
struct ArtifactMeta<'a> {
    file_name: &'a str,
    created_by: &'a str,
    created_at: DateTime<FixedOffset>,
    size: usize,
}

impl JsonStore {
    /// Open (and create if needed) a store rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let profiles_dir = root.join("profiles");
        let artifacts_dir = root.join("artifacts");
        for dir in [&profiles_dir, &artifacts_dir] {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating store directory {:?}", dir))?;
        }
        Ok(Self {
            profiles_dir,
            artifacts_dir,
        })
    }
}

impl RecordStore for JsonStore {
    fn save_profiles(&self, profiles: &[Profile]) -> Result<()> {
        let ts = Utc::now().timestamp_micros();
        let path = self.profiles_dir.join(format!("batch_{}.json", ts));
        let file = fs::File::create(&path)
            .with_context(|| format!("creating batch file {:?}", path))?;
        serde_json::to_writer_pretty(file, profiles).context("writing profile batch")?;
        info!(count = profiles.len(), path = %path.display(), "profile batch written");
        Ok(())
    }

    fn save_artifact(&self, artifact: &UploadArtifact) -> Result<()> {
        let data_path = self.artifacts_dir.join(&artifact.file_name);
        fs::write(&data_path, &artifact.data)
            .with_context(|| format!("writing artifact {:?}", data_path))?;

        let meta_path = self
            .artifacts_dir
            .join(format!("{}.meta.json", artifact.file_name));
        let meta = ArtifactMeta {
            file_name: &artifact.file_name,
            created_by: &artifact.created_by,
            created_at: artifact.created_at,
            size: artifact.data.len(),
        };
        let file = fs::File::create(&meta_path)
            .with_context(|| format!("creating artifact metadata {:?}", meta_path))?;
        serde_json::to_writer_pretty(file, &meta).context("writing artifact metadata")?;
        Ok(())
    }

    fn delete_artifact(&self, file_name: &str) -> Result<()> {
        let pattern = format!("{}/{}*", self.artifacts_dir.display(), file_name);
        for entry in glob(&pattern).context("scanning artifacts")? {
            let path = entry.context("reading artifact dir entry")?;
            fs::remove_file(&path).with_context(|| format!("deleting {:?}", path))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;
    use uuid::Uuid;

    fn stamp() -> DateTime<FixedOffset> {
        FixedOffset::west_opt(6 * 3600)
            .unwrap()
            .with_ymd_and_hms(2024, 5, 2, 9, 30, 0)
            .unwrap()
    }

    fn profile() -> Profile {
        Profile {
            id: Uuid::new_v4(),
            carrier_id: "C1".into(),
            account_id: "A1".into(),
            group_id: "G1".into(),
            plan_type: "PPO".into(),
            mail_order_pharmacy: "N".into(),
            prospect_client: "Y".into(),
            edit_member: "N".into(),
            access_role: "R1".into(),
            access_error_message: String::new(),
            created_by: "u1".into(),
            created_at: stamp(),
            notes: Vec::new(),
        }
    }

    #[test]
    fn profile_batch_round_trips_through_disk() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        store.save_profiles(&[profile(), profile()]).unwrap();

        let batch_files: Vec<_> = fs::read_dir(dir.path().join("profiles"))
            .unwrap()
            .filter_map(|e| e.ok().map(|e| e.path()))
            .collect();
        assert_eq!(batch_files.len(), 1);

        let body = fs::read_to_string(&batch_files[0]).unwrap();
        let loaded: Vec<Profile> = serde_json::from_str(&body).unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].carrier_id, "C1");
        assert_eq!(loaded[0].created_at, stamp());
    }

    #[test]
    fn artifact_lands_with_its_metadata_and_deletes_by_name() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        let artifact = UploadArtifact {
            file_name: "profiles.csv".into(),
            data: b"carrierId,accountId\n".to_vec(),
            created_by: "u1".into(),
            created_at: stamp(),
        };
        store.save_artifact(&artifact).unwrap();

        let data_path = dir.path().join("artifacts").join("profiles.csv");
        let meta_path = dir.path().join("artifacts").join("profiles.csv.meta.json");
        assert_eq!(fs::read(&data_path).unwrap(), artifact.data);
        let meta: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&meta_path).unwrap()).unwrap();
        assert_eq!(meta["created_by"], "u1");
        assert_eq!(meta["size"], 20);

        store.delete_artifact("profiles.csv").unwrap();
        assert!(!data_path.exists());
        assert!(!meta_path.exists());
    }

    #[test]
    fn deleting_an_unknown_artifact_is_a_no_op() {
        let dir = tempdir().unwrap();
        let store = JsonStore::new(dir.path()).unwrap();
        assert!(store.delete_artifact("never-uploaded.csv").is_ok());
    }
}
