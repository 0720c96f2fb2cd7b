//! Writes the merged-record JSON and the field-mapping CSV

use super::csv::render_field_mapping;
use crate::error::{SummaryError, SummaryResult};
use crate::merge::MergedRecord;
use crate::provenance::ProvenanceRow;
use std::path::Path;

/// Write merged records as a pretty-printed JSON array, replacing any
/// existing file
pub fn write_summary_json(path: &Path, records: &[MergedRecord]) -> SummaryResult<()> {
    let json = serde_json::to_string_pretty(records)?;
    write_file(path, &json)?;
    tracing::info!(path = %path.display(), records = records.len(), "wrote summary JSON");
    Ok(())
}

/// Write the provenance trail as the field-mapping CSV, replacing any
/// existing file
pub fn write_field_mapping_csv(path: &Path, rows: &[ProvenanceRow]) -> SummaryResult<()> {
    write_file(path, &render_field_mapping(rows))?;
    tracing::info!(path = %path.display(), rows = rows.len(), "wrote field mapping CSV");
    Ok(())
}

fn write_file(path: &Path, contents: &str) -> SummaryResult<()> {
    let to_write_error = |source: std::io::Error| SummaryError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(to_write_error)?;
    }
    std::fs::write(path, contents).map_err(to_write_error)
}
