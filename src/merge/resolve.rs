//! Per-project source gathering and field resolution

use super::fields::{FieldSource, SummaryField, ToSummary};
use super::join::JoinStrategy;
use super::lookup::{matches_nx_identity, matches_project, LookupChain, Matched};
use crate::domain::{Collection, DomainCollections, DomainItem};

/// Every upstream item that contributes to one project's summary
#[derive(Debug, Clone, Copy)]
pub struct ProjectSources<'a> {
    /// Project key
    pub project: &'a str,
    /// 0-based position in the derived project list
    pub position: usize,
    pub dv_task: Option<&'a DomainItem>,
    pub allproject: Option<&'a DomainItem>,
    /// DV-task match, else allproject match
    pub it_original: Option<Matched<'a>>,
    pub nx_original: Option<&'a DomainItem>,
    pub it_supplemental: Option<&'a DomainItem>,
    pub nx_supplemental: Option<&'a DomainItem>,
}

impl<'a> ProjectSources<'a> {
    /// Locate the items for `project` across all collections
    pub fn gather(
        project: &'a str,
        position: usize,
        collections: &'a DomainCollections,
        join: JoinStrategy,
    ) -> Self {
        let dv_tasks = collections.get(Collection::ItDvTasks);
        let allproject = collections.get(Collection::ItAllProject);

        let dv_task = LookupChain::new()
            .then(Collection::ItDvTasks, dv_tasks, matches_project)
            .first_match(project)
            .map(|m| m.item);
        let allproject_item = LookupChain::new()
            .then(Collection::ItAllProject, allproject, matches_project)
            .first_match(project)
            .map(|m| m.item);
        let it_original = LookupChain::new()
            .then(Collection::ItDvTasks, dv_tasks, matches_project)
            .then(Collection::ItAllProject, allproject, matches_project)
            .first_match(project);
        let nx_original = LookupChain::new()
            .then(
                Collection::NxExamples,
                collections.get(Collection::NxExamples),
                matches_nx_identity,
            )
            .first_match(project)
            .map(|m| m.item);

        let it_supplemental =
            join.supplemental(collections.get(Collection::ItSupplemental), position, project);
        let nx_supplemental =
            join.supplemental(collections.get(Collection::NxSupplemental), position, project);

        tracing::debug!(
            project,
            position,
            dv_task = dv_task.is_some(),
            allproject = allproject_item.is_some(),
            nx_original = nx_original.is_some(),
            it_supplemental = it_supplemental.is_some(),
            nx_supplemental = nx_supplemental.is_some(),
            "gathered project sources"
        );

        Self {
            project,
            position,
            dv_task,
            allproject: allproject_item,
            it_original,
            nx_original,
            it_supplemental,
            nx_supplemental,
        }
    }
}

/// IP and postfix derived from the IT records
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IpResolution {
    pub ip: String,
    /// Only set by the colon split of an allproject `IP`. The summary's
    /// `IP Postfix` column always comes from the IT supplemental item.
    pub postfix: String,
}

/// Resolve `IP` from the DV-task item, else from the allproject item.
///
/// A DV-task `IP` is taken verbatim. An allproject `IP` is ignored when empty
/// or the literal header text `"IP"`, and `"NAME:POSTFIX"` splits on the
/// first colon with both halves trimmed.
pub fn resolve_ip(dv_task: Option<&DomainItem>, allproject: Option<&DomainItem>) -> IpResolution {
    if let Some(dv) = dv_task {
        return IpResolution {
            ip: dv.field_or_empty("IP"),
            postfix: String::new(),
        };
    }

    let Some(raw) = allproject.map(|item| item.field_or_empty("IP")) else {
        return IpResolution::default();
    };
    if raw.is_empty() || raw == "IP" {
        return IpResolution::default();
    }

    match raw.split_once(':') {
        Some((ip, postfix)) => IpResolution {
            ip: ip.trim().to_string(),
            postfix: postfix.trim().to_string(),
        },
        None => IpResolution {
            ip: raw,
            postfix: String::new(),
        },
    }
}

/// Build the full 33-field summary for one project
pub fn resolve_summary(sources: &ProjectSources<'_>) -> ToSummary {
    let ip = resolve_ip(sources.dv_task, sources.allproject);
    let mut summary = ToSummary::new();
    for field in SummaryField::ALL {
        summary.set(field, resolve_field(field, sources, &ip));
    }
    summary
}

fn resolve_field(field: SummaryField, sources: &ProjectSources<'_>, ip: &IpResolution) -> String {
    let from = |item: Option<&DomainItem>, key: &str| {
        item.map(|item| item.field_or_empty(key)).unwrap_or_default()
    };

    match field.source() {
        FieldSource::Project => sources
            .dv_task
            .or(sources.allproject)
            .and_then(|item| item.field("Project"))
            .unwrap_or_else(|| sources.project.to_string()),
        FieldSource::SpipIp => from(sources.allproject, "IP"),
        FieldSource::Ip => ip.ip.clone(),
        FieldSource::AlternativeName => match (sources.dv_task, sources.allproject) {
            (Some(dv), _) => dv.field_or_empty("Alternative Name"),
            (None, Some(all)) => all.field_or_empty("Summary"),
            (None, None) => String::new(),
        },
        FieldSource::DvTask(key) => from(sources.dv_task, key),
        FieldSource::ItSupplemental => from(sources.it_supplemental, field.key()),
        FieldSource::NxSupplemental => from(sources.nx_supplemental, field.key()),
    }
}
