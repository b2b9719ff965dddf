pub mod fields;
pub mod headers;

pub use fields::validate_record;
pub use headers::{HeaderMap, REQUIRED_FIELDS};
