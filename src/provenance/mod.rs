//! Provenance trail: which upstream file and field produced each summary value

mod trail;
pub mod types;

pub use trail::trace_fields;
pub use types::{ProvenanceRow, DEFAULT_SOURCE, NOT_APPLICABLE};
