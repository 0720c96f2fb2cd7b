//! The fixed 33-field TO summary schema

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Number of fields in every TO summary
pub const FIELD_COUNT: usize = 33;

/// One column of the TO summary, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryField {
    Index,
    Project,
    SpipIp,
    Ip,
    IpPostfix,
    IpSubtype,
    AlternativeName,
    LineCoverage,
    FsmCoverage,
    InterfaceToggleCoverage,
    ToggleCoverage,
    CoverageReportPath,
    Dv,
    Dd,
    Bu,
    SanitySvn,
    SanitySvnVer,
    ReleaseSvn,
    ReleaseSvnVer,
    GitPath,
    GitVersion,
    GoldenChecklist,
    GoldenChecklistVersion,
    ToDate,
    SpipUrl,
    WikiUrl,
    SpecVersion,
    SpecPath,
    RtlLastUpdateTimestamp,
    ToReportCreationTimestamp,
    Ad,
    InheritFromIp,
    ReuseIp,
}

/// Where a summary field's value is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    /// DV-task Project, then allproject Project, then the project key
    Project,
    /// allproject `IP`, verbatim
    SpipIp,
    /// DV-task `IP`, or the colon-split allproject `IP`
    Ip,
    /// DV-task `Alternative Name`, else allproject `Summary`
    AlternativeName,
    /// A DV-task field, possibly under a different upstream name
    DvTask(&'static str),
    /// Same-named field of the positional IT supplemental item
    ItSupplemental,
    /// Same-named field of the positional NX supplemental item
    NxSupplemental,
}

impl SummaryField {
    /// All fields in report order
    pub const ALL: [SummaryField; FIELD_COUNT] = [
        Self::Index,
        Self::Project,
        Self::SpipIp,
        Self::Ip,
        Self::IpPostfix,
        Self::IpSubtype,
        Self::AlternativeName,
        Self::LineCoverage,
        Self::FsmCoverage,
        Self::InterfaceToggleCoverage,
        Self::ToggleCoverage,
        Self::CoverageReportPath,
        Self::Dv,
        Self::Dd,
        Self::Bu,
        Self::SanitySvn,
        Self::SanitySvnVer,
        Self::ReleaseSvn,
        Self::ReleaseSvnVer,
        Self::GitPath,
        Self::GitVersion,
        Self::GoldenChecklist,
        Self::GoldenChecklistVersion,
        Self::ToDate,
        Self::SpipUrl,
        Self::WikiUrl,
        Self::SpecVersion,
        Self::SpecPath,
        Self::RtlLastUpdateTimestamp,
        Self::ToReportCreationTimestamp,
        Self::Ad,
        Self::InheritFromIp,
        Self::ReuseIp,
    ];

    /// Column name as it appears in the report
    pub fn key(self) -> &'static str {
        match self {
            Self::Index => "Index",
            Self::Project => "Project",
            Self::SpipIp => "SPIP_IP",
            Self::Ip => "IP",
            Self::IpPostfix => "IP Postfix",
            Self::IpSubtype => "IP Subtype",
            Self::AlternativeName => "Alternative Name",
            Self::LineCoverage => "Line Coverage",
            Self::FsmCoverage => "FSM Coverage",
            Self::InterfaceToggleCoverage => "Interface Toggle Coverage",
            Self::ToggleCoverage => "Toggle Coverage",
            Self::CoverageReportPath => "Coverage Report Path",
            Self::Dv => "DV",
            Self::Dd => "DD",
            Self::Bu => "BU",
            Self::SanitySvn => "sanity SVN",
            Self::SanitySvnVer => "sanity SVN ver",
            Self::ReleaseSvn => "release SVN",
            Self::ReleaseSvnVer => "release SVN ver",
            Self::GitPath => "git path",
            Self::GitVersion => "git version",
            Self::GoldenChecklist => "golden checklist",
            Self::GoldenChecklistVersion => "golden checklist version",
            Self::ToDate => "TO Date",
            Self::SpipUrl => "SPIP url",
            Self::WikiUrl => "Wiki url",
            Self::SpecVersion => "spec version",
            Self::SpecPath => "spec path",
            Self::RtlLastUpdateTimestamp => "RTL last update timestamp",
            Self::ToReportCreationTimestamp => "TO report creation timestamp",
            Self::Ad => "AD",
            Self::InheritFromIp => "Inherit from IP",
            Self::ReuseIp => "re-use IP",
        }
    }

    pub fn source(self) -> FieldSource {
        match self {
            Self::Project => FieldSource::Project,
            Self::SpipIp => FieldSource::SpipIp,
            Self::Ip => FieldSource::Ip,
            Self::AlternativeName => FieldSource::AlternativeName,
            Self::Index => FieldSource::DvTask("Index"),
            Self::Dv => FieldSource::DvTask("DV"),
            Self::Dd => FieldSource::DvTask("DD"),
            Self::Bu => FieldSource::DvTask("BU"),
            Self::SpipUrl => FieldSource::DvTask("SPIP"),
            Self::WikiUrl => FieldSource::DvTask("WIKI"),
            Self::IpPostfix
            | Self::IpSubtype
            | Self::SpecVersion
            | Self::SpecPath
            | Self::Ad
            | Self::InheritFromIp
            | Self::ReuseIp => FieldSource::ItSupplemental,
            Self::LineCoverage
            | Self::FsmCoverage
            | Self::InterfaceToggleCoverage
            | Self::ToggleCoverage
            | Self::CoverageReportPath
            | Self::SanitySvn
            | Self::SanitySvnVer
            | Self::ReleaseSvn
            | Self::ReleaseSvnVer
            | Self::GitPath
            | Self::GitVersion
            | Self::GoldenChecklist
            | Self::GoldenChecklistVersion
            | Self::ToDate
            | Self::RtlLastUpdateTimestamp
            | Self::ToReportCreationTimestamp => FieldSource::NxSupplemental,
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for SummaryField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A complete TO summary: one string per schema field, `""` when unresolved.
///
/// Serializes as a JSON object whose keys always appear in report order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToSummary {
    values: [String; FIELD_COUNT],
}

impl Default for ToSummary {
    fn default() -> Self {
        Self {
            values: std::array::from_fn(|_| String::new()),
        }
    }
}

impl ToSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: SummaryField) -> &str {
        &self.values[field.slot()]
    }

    pub fn set(&mut self, field: SummaryField, value: impl Into<String>) {
        self.values[field.slot()] = value.into();
    }

    /// Fields and values in report order
    pub fn iter(&self) -> impl Iterator<Item = (SummaryField, &str)> + '_ {
        SummaryField::ALL
            .iter()
            .map(move |&field| (field, self.get(field)))
    }
}

impl Serialize for ToSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FIELD_COUNT))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.key(), value)?;
        }
        map.end()
    }
}
