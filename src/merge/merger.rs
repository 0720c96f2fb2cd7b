//! Record merger: one TO summary record per discovered project

use super::fields::{SummaryField, ToSummary};
use super::join::JoinStrategy;
use super::resolve::{resolve_summary, ProjectSources};
use crate::domain::{Collection, DomainCollections, DomainItem};
use crate::provenance::{trace_fields, ProvenanceRow};
use serde::Serialize;
use std::collections::HashSet;

/// One project's merged report entry, with the upstream items it drew on
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedRecord {
    pub example_id: String,
    pub project: String,
    pub ip: String,
    pub it_domain_original: Option<DomainItem>,
    pub it_domain_supplemental: Option<DomainItem>,
    pub nx_domain_original: Option<DomainItem>,
    pub nx_domain_supplemental: Option<DomainItem>,
    pub to_summary: ToSummary,
}

/// Everything a merge produces
#[derive(Debug, Clone, Default)]
pub struct MergeOutput {
    pub records: Vec<MergedRecord>,
    /// One row per record × summary field, in record then field order
    pub provenance: Vec<ProvenanceRow>,
}

/// Merges IT and NX collections into TO summary records
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordMerger {
    pub join: JoinStrategy,
}

impl RecordMerger {
    /// Create a merger using the positional supplemental join
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a specific join strategy
    pub fn with_join(mut self, join: JoinStrategy) -> Self {
        self.join = join;
        self
    }

    /// Merge all collections into records and their provenance trail
    pub fn merge(&self, collections: &DomainCollections) -> MergeOutput {
        let projects = discover_projects(collections);
        tracing::info!(count = projects.len(), ?projects, "discovered projects");

        let mut output = MergeOutput::default();
        for (position, project) in projects.iter().enumerate() {
            let sources = ProjectSources::gather(project, position, collections, self.join);
            let to_summary = resolve_summary(&sources);
            output.provenance.extend(trace_fields(&sources, &to_summary));
            output.records.push(MergedRecord {
                example_id: format!("TO_Summary_Example_{}", position + 1),
                project: to_summary.get(SummaryField::Project).to_string(),
                ip: to_summary.get(SummaryField::Ip).to_string(),
                it_domain_original: sources.it_original.map(|m| m.item.clone()),
                it_domain_supplemental: sources.it_supplemental.cloned(),
                nx_domain_original: sources.nx_original.cloned(),
                nx_domain_supplemental: sources.nx_supplemental.cloned(),
                to_summary,
            });
        }
        output
    }
}

/// Distinct project keys: DV-task projects first, then allproject-only
/// projects, each in first-seen order. Items without a non-empty string
/// `Project` are skipped.
pub fn discover_projects(collections: &DomainCollections) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut projects = Vec::new();

    for collection in [Collection::ItDvTasks, Collection::ItAllProject] {
        for item in collections.get(collection) {
            match item.text_field("Project") {
                Some(project) if !project.is_empty() => {
                    if seen.insert(project) {
                        projects.push(project.to_string());
                    }
                }
                _ => {}
            }
        }
    }

    projects
}
