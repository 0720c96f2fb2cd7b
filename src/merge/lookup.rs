//! Prioritized lookup across collections
//!
//! A `LookupChain` is an ordered list of `(collection, matcher)` steps. The
//! first item accepted by a step's matcher wins; later steps are only
//! consulted when every earlier collection has no match.

use crate::domain::{Collection, DomainItem};

/// Decides whether an item belongs to a project key
pub type Matcher = fn(&DomainItem, &str) -> bool;

/// An item found by a lookup, with the collection it came from
#[derive(Debug, Clone, Copy)]
pub struct Matched<'a> {
    pub collection: Collection,
    pub item: &'a DomainItem,
}

#[derive(Clone, Copy)]
struct LookupStep<'a> {
    collection: Collection,
    items: &'a [DomainItem],
    matcher: Matcher,
}

/// Ordered fallback chain of lookups
#[derive(Clone, Default)]
pub struct LookupChain<'a> {
    steps: Vec<LookupStep<'a>>,
}

impl<'a> LookupChain<'a> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step, consulted after all existing ones
    pub fn then(mut self, collection: Collection, items: &'a [DomainItem], matcher: Matcher) -> Self {
        self.steps.push(LookupStep {
            collection,
            items,
            matcher,
        });
        self
    }

    /// First item matching `key`, scanning steps in order
    pub fn first_match(&self, key: &str) -> Option<Matched<'a>> {
        self.steps.iter().find_map(|step| {
            step.items
                .iter()
                .find(|item| (step.matcher)(item, key))
                .map(|item| Matched {
                    collection: step.collection,
                    item,
                })
        })
    }
}

/// IT items join on their `Project` field
pub fn matches_project(item: &DomainItem, key: &str) -> bool {
    item.text_field("Project") == Some(key)
}

/// NX example items join on `PROJECT` or `IP`
pub fn matches_nx_identity(item: &DomainItem, key: &str) -> bool {
    item.text_field("PROJECT") == Some(key) || item.text_field("IP") == Some(key)
}

/// Supplemental items, when joined by key, may name the project under any
/// of the IT or NX identity fields
pub fn matches_any_identity(item: &DomainItem, key: &str) -> bool {
    matches_project(item, key) || matches_nx_identity(item, key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(source: &str, project: &str) -> DomainItem {
        DomainItem::new(source).with_field("Project", project)
    }

    #[test]
    fn empty_chain_finds_nothing() {
        assert!(LookupChain::new().first_match("PRJ_A").is_none());
    }

    #[test]
    fn earlier_collection_wins() {
        let dv = vec![item("dv_tasks.xlsx", "PRJ_A")];
        let all = vec![item("allproject.xlsx", "PRJ_A")];
        let chain = LookupChain::new()
            .then(Collection::ItDvTasks, &dv, matches_project)
            .then(Collection::ItAllProject, &all, matches_project);

        let found = chain.first_match("PRJ_A").unwrap();
        assert_eq!(found.collection, Collection::ItDvTasks);
        assert_eq!(found.item.source, "dv_tasks.xlsx");
    }

    #[test]
    fn falls_back_to_later_collection() {
        let dv = vec![item("dv_tasks.xlsx", "PRJ_A")];
        let all = vec![item("allproject.xlsx", "PRJ_B")];
        let chain = LookupChain::new()
            .then(Collection::ItDvTasks, &dv, matches_project)
            .then(Collection::ItAllProject, &all, matches_project);

        let found = chain.first_match("PRJ_B").unwrap();
        assert_eq!(found.collection, Collection::ItAllProject);
        assert!(chain.first_match("PRJ_C").is_none());
    }

    #[test]
    fn first_match_within_collection_wins() {
        let dv = vec![
            item("first", "PRJ_A"),
            item("second", "PRJ_A"),
        ];
        let chain = LookupChain::new().then(Collection::ItDvTasks, &dv, matches_project);
        assert_eq!(chain.first_match("PRJ_A").unwrap().item.source, "first");
    }

    #[test]
    fn nx_identity_matches_project_or_ip() {
        let by_project = DomainItem::new("nx").with_field("PROJECT", "PRJ_A");
        let by_ip = DomainItem::new("nx").with_field("IP", "PRJ_A");
        let neither = DomainItem::new("nx").with_field("Project", "PRJ_A");

        assert!(matches_nx_identity(&by_project, "PRJ_A"));
        assert!(matches_nx_identity(&by_ip, "PRJ_A"));
        assert!(!matches_nx_identity(&neither, "PRJ_A"));
        assert!(matches_any_identity(&neither, "PRJ_A"));
    }
}
