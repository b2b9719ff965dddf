pub mod intake;
pub mod profile;
pub mod upload;

pub use intake::IntakeRecord;
pub use profile::{Profile, ProfileNote};
pub use upload::{IngestionSummary, UploadArtifact, UploadFile};
