//! Shared fixtures for TO summary integration tests
//!
//! Writes input collections into a temporary directory laid out like the
//! upstream extraction tree, and reads the generated outputs back.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::path::Path;
use tempfile::TempDir;
use to_summary::{Collection, ReportConfig};

/// A temporary input/output tree for one report run
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Config reading from and writing to the workspace root
    pub fn config(&self) -> ReportConfig {
        ReportConfig::rooted_at(self.root())
    }

    /// Write one collection at its default location
    pub fn write_collection(&self, collection: Collection, items: Value) {
        let path = self.root().join(collection.default_path());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, serde_json::to_string_pretty(&items).unwrap()).unwrap();
    }

    /// Write raw text at a collection's default location
    pub fn write_raw(&self, collection: Collection, text: &str) {
        let path = self.root().join(collection.default_path());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, text).unwrap();
    }

    /// Parsed `to_summary_examples.json`
    pub fn summary_json(&self) -> Vec<Value> {
        let text = std::fs::read_to_string(self.config().summary_json_path()).unwrap();
        serde_json::from_str(&text).unwrap()
    }

    /// Raw `to_summary_field_mapping.csv`
    pub fn field_mapping(&self) -> String {
        std::fs::read_to_string(self.config().field_mapping_csv_path()).unwrap()
    }
}

/// `{source, data}` item
pub fn item(source: &str, data: Value) -> Value {
    json!({ "source": source, "data": data })
}

/// The NX-supplemental summary columns
pub const NX_FIELDS: [&str; 16] = [
    "Line Coverage",
    "FSM Coverage",
    "Interface Toggle Coverage",
    "Toggle Coverage",
    "Coverage Report Path",
    "sanity SVN",
    "sanity SVN ver",
    "release SVN",
    "release SVN ver",
    "git path",
    "git version",
    "golden checklist",
    "golden checklist version",
    "TO Date",
    "RTL last update timestamp",
    "TO report creation timestamp",
];
