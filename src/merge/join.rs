//! How supplemental items are attached to projects

use super::lookup::matches_any_identity;
use crate::domain::DomainItem;
use serde::{Deserialize, Serialize};

/// Strategy for joining supplemental collections to the project list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinStrategy {
    /// The project at position `i` gets supplemental item `i`. Reproduces
    /// existing reports, but attaches data to the wrong project whenever the
    /// supplemental files are not ordered like the derived project list.
    #[default]
    Positional,
    /// First supplemental item whose `Project`, `PROJECT` or `IP` names the
    /// project.
    Keyed,
}

impl std::str::FromStr for JoinStrategy {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positional" => Ok(Self::Positional),
            "keyed" => Ok(Self::Keyed),
            _ => Err(format!("unknown join strategy: {}", s)),
        }
    }
}

impl std::fmt::Display for JoinStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Positional => f.write_str("positional"),
            Self::Keyed => f.write_str("keyed"),
        }
    }
}

impl JoinStrategy {
    /// Pick the supplemental item for the project at `position`
    pub fn supplemental<'a>(
        self,
        items: &'a [DomainItem],
        position: usize,
        project: &str,
    ) -> Option<&'a DomainItem> {
        match self {
            Self::Positional => {
                let item = items.get(position)?;
                if let Some(named) = named_project(item) {
                    if named != project {
                        tracing::warn!(
                            project,
                            position,
                            supplemental_project = named,
                            source = %item.source,
                            "positional join attaches a supplemental item naming another project"
                        );
                    }
                }
                Some(item)
            }
            Self::Keyed => items.iter().find(|item| matches_any_identity(item, project)),
        }
    }
}

/// Project a supplemental item claims to describe, if it says
fn named_project(item: &DomainItem) -> Option<&str> {
    item.text_field("Project").or_else(|| item.text_field("PROJECT"))
}
