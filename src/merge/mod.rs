//! Merging IT and NX domain items into TO summary records

mod fields;
mod join;
mod lookup;
mod merger;
mod resolve;

pub use fields::{FieldSource, SummaryField, ToSummary, FIELD_COUNT};
pub use join::JoinStrategy;
pub use lookup::{matches_any_identity, matches_nx_identity, matches_project, LookupChain, Matched, Matcher};
pub use merger::{discover_projects, MergeOutput, MergedRecord, RecordMerger};
pub use resolve::{resolve_ip, resolve_summary, IpResolution, ProjectSources};
