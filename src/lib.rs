pub mod decode;
pub mod error;
pub mod ingest;
pub mod model;
pub mod store;
pub mod validate;

pub use error::{IngestError, Violation};
pub use ingest::{to_profile, BatchContext, DedupPolicy, Ingestor};
pub use model::{
    IngestionSummary, IntakeRecord, Profile, ProfileNote, UploadArtifact, UploadFile,
};
pub use store::{JsonStore, RecordStore};
