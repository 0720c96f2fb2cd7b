//! Console digest of merged records

use crate::merge::{MergedRecord, SummaryField};
use std::fmt::Write;

const DIGEST_FIELDS: [(SummaryField, &str); 7] = [
    (SummaryField::Dd, "DD (Digital Designer)"),
    (SummaryField::Ad, "AD (Analog Designer)"),
    (SummaryField::Bu, "BU (Business Unit)"),
    (SummaryField::IpSubtype, "IP Subtype"),
    (SummaryField::LineCoverage, "Line Coverage"),
    (SummaryField::FsmCoverage, "FSM Coverage"),
    (SummaryField::GitVersion, "git version"),
];

/// Multi-line summary of one record, numbered from 1
pub fn record_digest(number: usize, record: &MergedRecord) -> String {
    let mut out = format!("Record {}: {} - {}", number, record.project, record.ip);
    for (field, label) in DIGEST_FIELDS {
        let _ = write!(out, "\n  {}: {}", label, record.to_summary.get(field));
    }
    if let Some(item) = &record.it_domain_original {
        let _ = write!(out, "\n  IT Domain original: {}", item.source);
    }
    if let Some(item) = &record.nx_domain_original {
        let _ = write!(out, "\n  NX Domain original: {}", item.source);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainItem;
    use crate::merge::ToSummary;

    fn record() -> MergedRecord {
        let mut to_summary = ToSummary::new();
        to_summary.set(SummaryField::Dd, "Alice");
        to_summary.set(SummaryField::GitVersion, "r42");
        MergedRecord {
            example_id: "TO_Summary_Example_1".into(),
            project: "PRJ_A".into(),
            ip: "IPA".into(),
            it_domain_original: Some(DomainItem::new("dv_tasks.xlsx")),
            it_domain_supplemental: None,
            nx_domain_original: None,
            nx_domain_supplemental: None,
            to_summary,
        }
    }

    #[test]
    fn digest_lists_key_fields_and_sources() {
        let digest = record_digest(1, &record());
        let lines: Vec<&str> = digest.lines().collect();

        assert_eq!(lines[0], "Record 1: PRJ_A - IPA");
        assert_eq!(lines[1], "  DD (Digital Designer): Alice");
        assert!(lines.contains(&"  git version: r42"));
        assert!(lines.contains(&"  AD (Analog Designer): "));
        assert_eq!(*lines.last().unwrap(), "  IT Domain original: dv_tasks.xlsx");
        assert!(!digest.contains("NX Domain original"));
    }
}
