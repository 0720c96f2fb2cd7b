//! Reconstructs the provenance of every summary field
//!
//! Fields with a single well-defined upstream (`Index`, `SPIP_IP`, `DD`,
//! `BU`, `IP Postfix` and the NX supplemental version/path/timestamp fields)
//! are traced to that upstream only. Everything else is traced through the
//! generic chain: IT original, IT supplemental, NX original, NX supplemental,
//! first item carrying the field name wins. The IT original is labeled with
//! its collection's file name, other items with the basename of their source.

use super::types::ProvenanceRow;
use crate::domain::{Collection, DomainItem};
use crate::merge::{ProjectSources, SummaryField, ToSummary};

/// Where a value was found
struct Origin {
    source_file: String,
    field: &'static str,
    value: String,
}

impl Origin {
    fn new(source_file: impl Into<String>, item: &DomainItem, field: &'static str) -> Self {
        Self {
            source_file: source_file.into(),
            field,
            value: item.field_or_empty(field),
        }
    }

    fn from_collection(collection: Collection, item: &DomainItem, field: &'static str) -> Self {
        Self::new(collection.file_name(), item, field)
    }

    fn from_item(item: &DomainItem, field: &'static str) -> Self {
        Self::new(item.source_basename(), item, field)
    }
}

/// One provenance row per summary field, in report order
pub fn trace_fields(sources: &ProjectSources<'_>, summary: &ToSummary) -> Vec<ProvenanceRow> {
    summary
        .iter()
        .map(|(field, value)| match trace_field(field, sources) {
            Some(origin) => ProvenanceRow::traced(
                sources.project,
                field,
                value,
                origin.source_file,
                origin.field,
                origin.value,
            ),
            None => ProvenanceRow::untraced(sources.project, field, value),
        })
        .collect()
}

fn trace_field(field: SummaryField, sources: &ProjectSources<'_>) -> Option<Origin> {
    use SummaryField::*;

    let key = field.key();
    match field {
        Index => sources
            .dv_task
            .filter(|item| item.has_field(key))
            .map(|item| Origin::from_collection(Collection::ItDvTasks, item, key)),
        SpipIp => sources
            .allproject
            .filter(|item| item.has_field("IP"))
            .map(|item| Origin::from_collection(Collection::ItAllProject, item, "IP")),
        Dd | Bu => sources
            .dv_task
            .filter(|item| item.field(key).is_some_and(|v| !v.is_empty()))
            .map(|item| Origin::from_collection(Collection::ItDvTasks, item, key)),
        IpPostfix => sources
            .it_supplemental
            .filter(|item| item.has_field(key))
            .map(|item| Origin::from_item(item, key)),
        CoverageReportPath
        | SanitySvn
        | SanitySvnVer
        | ReleaseSvn
        | ReleaseSvnVer
        | GitPath
        | GitVersion
        | GoldenChecklist
        | GoldenChecklistVersion
        | ToDate
        | RtlLastUpdateTimestamp
        | ToReportCreationTimestamp => sources
            .nx_supplemental
            .filter(|item| item.has_field(key))
            .map(|item| Origin::from_item(item, key)),
        _ => trace_generic(field, sources),
    }
}

fn trace_generic(field: SummaryField, sources: &ProjectSources<'_>) -> Option<Origin> {
    let key = field.key();

    if let Some(matched) = sources.it_original.filter(|m| m.item.has_field(key)) {
        return Some(Origin::from_collection(matched.collection, matched.item, key));
    }

    let others = [
        sources.it_supplemental,
        sources.nx_original,
        sources.nx_supplemental,
    ];
    if let Some(item) = others.into_iter().flatten().find(|item| item.has_field(key)) {
        return Some(Origin::from_item(item, key));
    }

    // URL columns are named differently upstream
    let upstream = match field {
        SummaryField::SpipUrl => "SPIP",
        SummaryField::WikiUrl => "WIKI",
        _ => return None,
    };
    sources
        .it_original
        .filter(|m| m.item.has_field(upstream))
        .map(|m| Origin::from_collection(m.collection, m.item, upstream))
}
