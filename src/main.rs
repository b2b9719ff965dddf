use anyhow::{Context, Result};
use profileloader::{DedupPolicy, Ingestor, JsonStore, UploadFile};
use std::{env, fs, path::Path, process};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

fn usage() -> ! {
    eprintln!("usage: profileloader <file.csv|file.xlsx> [user-id]");
    eprintln!("       profileloader delete <file-name>");
    process::exit(2);
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();

    // ─── 2) parse args ───────────────────────────────────────────────
    let args: Vec<String> = env::args().collect();
    let store = JsonStore::new("store")?;
    let ingestor = Ingestor::new(store).with_dedup_policy(DedupPolicy::Merge);

    let (path, user_id) = match args.as_slice() {
        [_, cmd, name] if cmd == "delete" => {
            ingestor.delete_artifact(name)?;
            info!(name = %name, "artifact deleted");
            return Ok(());
        }
        [_, path] => (path.clone(), "system".to_string()),
        [_, path, user] => (path.clone(), user.clone()),
        _ => usage(),
    };

    // ─── 3) read the upload ──────────────────────────────────────────
    let bytes = fs::read(&path).with_context(|| format!("reading {}", path))?;
    let file_name = Path::new(&path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path.as_str())
        .to_string();
    let content_type = if file_name.to_lowercase().ends_with(".xlsx") {
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    } else {
        "text/csv"
    };
    let upload = UploadFile::new(file_name, content_type, bytes);
    info!(file = %upload.file_name, size = upload.size(), "upload read");

    // ─── 4) run the batch ────────────────────────────────────────────
    let correlation_id = Uuid::new_v4().to_string();
    let summary = ingestor.ingest(&upload, &user_id, &correlation_id)?;
    info!(
        profiles = summary.profiles.len(),
        duplicates = summary.duplicates_discarded,
        "ingestion complete"
    );

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
