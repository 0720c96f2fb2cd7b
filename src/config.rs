//! Run configuration: where inputs are read from and outputs written to
//!
//! Every field has a default, so an empty YAML document (or no config file at
//! all) reproduces the working-directory layout the report has always used.

use crate::domain::Collection;
use crate::error::{SummaryError, SummaryResult};
use crate::merge::JoinStrategy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Locations of the five input collections, relative to the input root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputPaths {
    pub it_allproject: PathBuf,
    pub it_dv_tasks: PathBuf,
    pub it_supplemental: PathBuf,
    pub nx_examples: PathBuf,
    pub nx_supplemental: PathBuf,
}

impl Default for InputPaths {
    fn default() -> Self {
        Self {
            it_allproject: Collection::ItAllProject.default_path().into(),
            it_dv_tasks: Collection::ItDvTasks.default_path().into(),
            it_supplemental: Collection::ItSupplemental.default_path().into(),
            nx_examples: Collection::NxExamples.default_path().into(),
            nx_supplemental: Collection::NxSupplemental.default_path().into(),
        }
    }
}

impl InputPaths {
    pub fn path_for(&self, collection: Collection) -> &Path {
        match collection {
            Collection::ItAllProject => &self.it_allproject,
            Collection::ItDvTasks => &self.it_dv_tasks,
            Collection::ItSupplemental => &self.it_supplemental,
            Collection::NxExamples => &self.nx_examples,
            Collection::NxSupplemental => &self.nx_supplemental,
        }
    }
}

/// Output file names, relative to the output directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPaths {
    pub summary_json: PathBuf,
    pub field_mapping_csv: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self {
            summary_json: "to_summary_examples.json".into(),
            field_mapping_csv: "to_summary_field_mapping.csv".into(),
        }
    }
}

/// Configuration for one report run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub input_root: PathBuf,
    pub output_dir: PathBuf,
    pub inputs: InputPaths,
    pub outputs: OutputPaths,
    pub join: JoinStrategy,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_root: PathBuf::from("."),
            output_dir: PathBuf::from("."),
            inputs: InputPaths::default(),
            outputs: OutputPaths::default(),
            join: JoinStrategy::default(),
        }
    }
}

impl ReportConfig {
    /// Default layout with both inputs and outputs under `root`
    pub fn rooted_at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            input_root: root.clone(),
            output_dir: root,
            ..Self::default()
        }
    }

    /// Builder: set the join strategy
    pub fn with_join(mut self, join: JoinStrategy) -> Self {
        self.join = join;
        self
    }

    /// Parse a YAML document; omitted fields keep their defaults
    pub fn from_yaml_str(yaml: &str) -> Result<Self, serde_yaml::Error> {
        // serde_yaml rejects an empty document, which should mean "all defaults"
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    /// Load a YAML config file
    pub fn from_yaml_file(path: &Path) -> SummaryResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| SummaryError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&raw).map_err(|source| SummaryError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Full path of one input collection
    pub fn input_path(&self, collection: Collection) -> PathBuf {
        self.input_root.join(self.inputs.path_for(collection))
    }

    /// Full path of the merged-record JSON output
    pub fn summary_json_path(&self) -> PathBuf {
        self.output_dir.join(&self.outputs.summary_json)
    }

    /// Full path of the field-mapping CSV output
    pub fn field_mapping_csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.outputs.field_mapping_csv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_match_working_directory_layout() {
        let config = ReportConfig::default();
        assert_eq!(
            config.input_path(Collection::ItDvTasks),
            Path::new("./IT_Domain/ideal_IT_Domain_Data/it_domain_dv_tasks.json")
        );
        assert_eq!(
            config.summary_json_path(),
            Path::new("./to_summary_examples.json")
        );
        assert_eq!(
            config.field_mapping_csv_path(),
            Path::new("./to_summary_field_mapping.csv")
        );
        assert_eq!(config.join, JoinStrategy::Positional);
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(ReportConfig::from_yaml_str("").unwrap(), ReportConfig::default());
        assert_eq!(
            ReportConfig::from_yaml_str("  \n").unwrap(),
            ReportConfig::default()
        );
    }

    #[test]
    fn partial_yaml_overrides_only_named_fields() {
        let yaml = r#"
input_root: /data/extract
join: keyed
inputs:
  nx_examples: nx/examples.json
"#;
        let config = ReportConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.input_root, PathBuf::from("/data/extract"));
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.join, JoinStrategy::Keyed);
        assert_eq!(
            config.input_path(Collection::NxExamples),
            PathBuf::from("/data/extract/nx/examples.json")
        );
        assert_eq!(
            config.inputs.it_dv_tasks,
            PathBuf::from(Collection::ItDvTasks.default_path())
        );
    }

    #[test]
    fn unknown_join_strategy_is_rejected() {
        assert!(ReportConfig::from_yaml_str("join: fuzzy").is_err());
    }

    #[test]
    fn config_file_errors_carry_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.yaml");
        assert!(matches!(
            ReportConfig::from_yaml_file(&missing),
            Err(SummaryError::ConfigRead { .. })
        ));

        let bad = dir.path().join("bad.yaml");
        std::fs::write(&bad, "inputs: [not, a, map]").unwrap();
        let err = ReportConfig::from_yaml_file(&bad).unwrap_err();
        assert!(matches!(err, SummaryError::Config { .. }));
        assert!(err.to_string().contains("bad.yaml"));
    }
}
