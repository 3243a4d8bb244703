//! Lazy materialization index
//!
//! Generator-produced subtasks are pulled out of the registry up front and
//! grouped by the generator that declared them. A group goes back into the
//! registry, whole, the first time any of its members is referenced.
//!
//! Grouping uses the `subtask_of` marker on each node rather than the shape
//! of its name, so a standalone task `build:release` is never mistaken for a
//! subtask of a generator called `build`.

use super::registry::Registry;
use super::task::{TaskNode, SUBTASK_SEPARATOR};
use std::collections::BTreeMap;

/// Subtasks not yet promoted into the registry, keyed by generator name
#[derive(Debug, Clone, Default)]
pub struct PendingIndex {
    groups: BTreeMap<String, BTreeMap<String, TaskNode>>,
}

impl PendingIndex {
    /// Remove every subtask from `registry` and group it by its parent marker
    pub fn extract(registry: &mut Registry) -> Self {
        let subtasks: Vec<String> = registry
            .iter_ordered()
            .filter(|task| task.is_subtask())
            .map(|task| task.name.clone())
            .collect();

        let mut index = Self::default();
        for name in subtasks {
            if let Some(node) = registry.remove(&name) {
                index.insert(node);
            }
        }

        log::debug!(
            "Deferred {} subtasks in {} generator groups",
            index.len(),
            index.group_count()
        );
        index
    }

    /// Add a node under its parent group. Nodes without a marker are ignored.
    pub fn insert(&mut self, node: TaskNode) {
        let Some(parent) = node.subtask_of.clone() else {
            return;
        };
        self.groups
            .entry(parent)
            .or_default()
            .insert(node.name.clone(), node);
    }

    /// Promote the group holding `name` into `registry`.
    ///
    /// Tries the generator named by the part of `name` before the first
    /// separator, then falls back to searching every group for `name`.
    /// The first guess only counts if that group really owns `name`; an
    /// unrelated generator sharing the prefix is left pending.
    /// Returns how many nodes were promoted; zero means `name` is not pending.
    pub fn materialize(&mut self, name: &str, registry: &mut Registry) -> usize {
        let candidate = name
            .split_once(SUBTASK_SEPARATOR)
            .map_or(name, |(head, _)| head);

        let owns_name = self
            .groups
            .get(candidate)
            .is_some_and(|members| members.contains_key(name));
        if owns_name {
            return self.promote(candidate, registry);
        }

        let owner = self
            .groups
            .iter()
            .find(|(_, members)| members.contains_key(name))
            .map(|(parent, _)| parent.clone());

        match owner {
            Some(parent) => self.promote(&parent, registry),
            None => 0,
        }
    }

    fn promote(&mut self, parent: &str, registry: &mut Registry) -> usize {
        let Some(members) = self.groups.remove(parent) else {
            return 0;
        };
        let count = members.len();
        for (_, node) in members {
            registry.insert(node);
        }
        log::debug!("Materialized {} subtasks of \"{}\"", count, parent);
        count
    }

    /// Whether `name` is waiting in some group
    pub fn contains(&self, name: &str) -> bool {
        self.groups.values().any(|members| members.contains_key(name))
    }

    pub fn contains_group(&self, parent: &str) -> bool {
        self.groups.contains_key(parent)
    }

    /// Total pending nodes
    pub fn len(&self) -> usize {
        self.groups.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}
