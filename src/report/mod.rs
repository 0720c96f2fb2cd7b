//! Report run: load, merge, write
//!
//! `run` is the whole batch job. It reads the five collections named by a
//! `ReportConfig`, merges them, and overwrites both output files.

mod csv;
mod digest;
mod writer;

pub use csv::{escape_csv_field, render_field_mapping, FIELD_MAPPING_HEADER};
pub use digest::record_digest;
pub use writer::{write_field_mapping_csv, write_summary_json};

use crate::config::ReportConfig;
use crate::domain::{Collection, DomainCollections};
use crate::error::SummaryResult;
use crate::merge::{MergedRecord, RecordMerger};
use std::path::PathBuf;

/// Outcome of one report run
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Items loaded per collection, in load order
    pub loaded: Vec<(Collection, usize)>,
    pub records: Vec<MergedRecord>,
    pub provenance_rows: usize,
    pub summary_json: PathBuf,
    pub field_mapping_csv: PathBuf,
}

/// Run the report end to end
pub fn run(config: &ReportConfig) -> SummaryResult<RunReport> {
    let collections = DomainCollections::load(config)?;
    let output = RecordMerger::new().with_join(config.join).merge(&collections);

    let summary_json = config.summary_json_path();
    let field_mapping_csv = config.field_mapping_csv_path();
    write_summary_json(&summary_json, &output.records)?;
    write_field_mapping_csv(&field_mapping_csv, &output.provenance)?;

    Ok(RunReport {
        loaded: collections.counts(),
        records: output.records,
        provenance_rows: output.provenance.len(),
        summary_json,
        field_mapping_csv,
    })
}
