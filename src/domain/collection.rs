//! The five upstream collections and how they are loaded from disk

use super::item::DomainItem;
use crate::config::ReportConfig;
use crate::error::{SummaryError, SummaryResult};
use std::path::Path;

/// Identifies one of the five upstream collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    ItAllProject,
    ItDvTasks,
    ItSupplemental,
    NxExamples,
    NxSupplemental,
}

impl Collection {
    /// All collections in load order
    pub const ALL: [Collection; 5] = [
        Collection::ItAllProject,
        Collection::ItDvTasks,
        Collection::ItSupplemental,
        Collection::NxExamples,
        Collection::NxSupplemental,
    ];

    /// Path relative to the input root
    pub fn default_path(self) -> &'static str {
        match self {
            Self::ItAllProject => "IT_Domain/ideal_IT_Domain_Data/it_domain_allproject.json",
            Self::ItDvTasks => "IT_Domain/ideal_IT_Domain_Data/it_domain_dv_tasks.json",
            Self::ItSupplemental => "IT_Domain/ideal_IT_Domain_Data/it-domain-to-be-added.json",
            Self::NxExamples => "NX_Domain/ideal_NX_Domain_Data/nx_domain_examples.json",
            Self::NxSupplemental => "NX_Domain/ideal_NX_Domain_Data/nx-domain-to-be-added.json",
        }
    }

    /// File name used as the provenance label for items of this collection
    pub fn file_name(self) -> &'static str {
        let path = self.default_path();
        path.rsplit('/').next().unwrap_or(path)
    }

    /// Human-readable name for progress output
    pub fn description(self) -> &'static str {
        match self {
            Self::ItAllProject => "IT Domain allproject",
            Self::ItDvTasks => "IT Domain DV tasks",
            Self::ItSupplemental => "IT Domain supplemental",
            Self::NxExamples => "NX Domain examples",
            Self::NxSupplemental => "NX Domain supplemental",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// All upstream collections for one run
#[derive(Debug, Clone, Default)]
pub struct DomainCollections {
    pub it_allproject: Vec<DomainItem>,
    pub it_dv_tasks: Vec<DomainItem>,
    pub it_supplemental: Vec<DomainItem>,
    pub nx_examples: Vec<DomainItem>,
    pub nx_supplemental: Vec<DomainItem>,
}

impl DomainCollections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every collection named by `config`.
    ///
    /// Absent files become empty collections; unreadable or malformed files
    /// are errors.
    pub fn load(config: &ReportConfig) -> SummaryResult<Self> {
        let mut collections = Self::new();
        for collection in Collection::ALL {
            let items = load_collection(&config.input_path(collection))?;
            tracing::info!(%collection, count = items.len(), "loaded collection");
            *collections.get_mut(collection) = items;
        }
        Ok(collections)
    }

    /// Items of one collection
    pub fn get(&self, collection: Collection) -> &[DomainItem] {
        match collection {
            Collection::ItAllProject => &self.it_allproject,
            Collection::ItDvTasks => &self.it_dv_tasks,
            Collection::ItSupplemental => &self.it_supplemental,
            Collection::NxExamples => &self.nx_examples,
            Collection::NxSupplemental => &self.nx_supplemental,
        }
    }

    fn get_mut(&mut self, collection: Collection) -> &mut Vec<DomainItem> {
        match collection {
            Collection::ItAllProject => &mut self.it_allproject,
            Collection::ItDvTasks => &mut self.it_dv_tasks,
            Collection::ItSupplemental => &mut self.it_supplemental,
            Collection::NxExamples => &mut self.nx_examples,
            Collection::NxSupplemental => &mut self.nx_supplemental,
        }
    }

    /// Builder: replace one collection's items
    pub fn with(mut self, collection: Collection, items: Vec<DomainItem>) -> Self {
        *self.get_mut(collection) = items;
        self
    }

    /// Item count per collection, in load order
    pub fn counts(&self) -> Vec<(Collection, usize)> {
        Collection::ALL
            .iter()
            .map(|&c| (c, self.get(c).len()))
            .collect()
    }
}

/// Load one JSON array of domain items. A missing file yields an empty list.
pub fn load_collection(path: &Path) -> SummaryResult<Vec<DomainItem>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "input file absent, using empty collection");
        return Ok(Vec::new());
    }

    let raw = std::fs::read_to_string(path).map_err(|source| SummaryError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| SummaryError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
