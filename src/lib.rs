//! TO Summary: merges IT and NX domain extractions into report records
//!
//! Five JSON collections of tagged rows (IT allproject, IT DV tasks, IT
//! supplemental, NX examples, NX supplemental) are joined per project into a
//! fixed 33-field TO summary, with a provenance trail recording which upstream
//! file and field produced every value.
//!
//! # Example
//!
//! ```
//! use to_summary::{Collection, DomainCollections, DomainItem, RecordMerger, SummaryField};
//!
//! let collections = DomainCollections::new().with(
//!     Collection::ItDvTasks,
//!     vec![DomainItem::new("dv_tasks.xlsx")
//!         .with_field("Project", "PRJ_A")
//!         .with_field("DD", "Alice")],
//! );
//! let output = RecordMerger::new().merge(&collections);
//! assert_eq!(output.records[0].to_summary.get(SummaryField::Dd), "Alice");
//! ```

pub mod config;
pub mod domain;
mod error;
pub mod merge;
pub mod provenance;
pub mod report;

pub use config::{InputPaths, OutputPaths, ReportConfig};
pub use domain::{Collection, DomainCollections, DomainItem};
pub use error::{SummaryError, SummaryResult};
pub use merge::{JoinStrategy, MergeOutput, MergedRecord, RecordMerger, SummaryField, ToSummary};
pub use provenance::ProvenanceRow;
pub use report::{run, RunReport};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
