//! Provenance row type

use crate::merge::SummaryField;
use serde::{Deserialize, Serialize};

/// Source label for values no upstream field accounts for
pub const DEFAULT_SOURCE: &str = "default/computed";

/// Field and value marker for unresolved provenance
pub const NOT_APPLICABLE: &str = "N/A";

/// Audit record: one summary field of one project and where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvenanceRow {
    pub project: String,
    pub field_name: String,
    pub resolved_value: String,
    pub source_file: String,
    pub original_field_name: String,
    pub original_value: String,
}

impl ProvenanceRow {
    /// Row for a value traced to `original_field_name` in `source_file`
    pub fn traced(
        project: impl Into<String>,
        field: SummaryField,
        resolved_value: impl Into<String>,
        source_file: impl Into<String>,
        original_field_name: impl Into<String>,
        original_value: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            field_name: field.to_string(),
            resolved_value: resolved_value.into(),
            source_file: source_file.into(),
            original_field_name: original_field_name.into(),
            original_value: original_value.into(),
        }
    }

    /// Row for a value no upstream field accounts for
    pub fn untraced(
        project: impl Into<String>,
        field: SummaryField,
        resolved_value: impl Into<String>,
    ) -> Self {
        Self::traced(
            project,
            field,
            resolved_value,
            DEFAULT_SOURCE,
            NOT_APPLICABLE,
            NOT_APPLICABLE,
        )
    }

    pub fn is_traced(&self) -> bool {
        self.source_file != DEFAULT_SOURCE
    }

    /// Column values in field-mapping CSV order
    pub fn columns(&self) -> [&str; 6] {
        [
            self.project.as_str(),
            self.field_name.as_str(),
            self.resolved_value.as_str(),
            self.source_file.as_str(),
            self.original_field_name.as_str(),
            self.original_value.as_str(),
        ]
    }
}
