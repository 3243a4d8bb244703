//! Graph description - ordered, serializable view of the reachable tasks

use super::registry::Registry;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One task and its dependencies, each list sorted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEntry {
    pub name: String,
    #[serde(rename = "task_dep")]
    pub required: Vec<String>,
    pub setup: Vec<String>,
    #[serde(rename = "calc_dep")]
    pub calculated: Vec<String>,
}

impl GraphEntry {
    /// Whether the task declares no dependencies of any kind
    pub fn is_leaf(&self) -> bool {
        self.required.is_empty() && self.setup.is_empty() && self.calculated.is_empty()
    }
}

/// Deterministic order for `nodes`.
///
/// Follows `def_order`; names it does not mention go last, sorted.
pub fn ordered_names(def_order: &[String], nodes: &HashSet<String>) -> Vec<String> {
    let mut ordered: Vec<String> = def_order
        .iter()
        .filter(|name| nodes.contains(*name))
        .cloned()
        .collect();

    if ordered.len() != nodes.len() {
        let seen: HashSet<&str> = ordered.iter().map(String::as_str).collect();
        let mut remaining: Vec<String> = nodes
            .iter()
            .filter(|name| !seen.contains(name.as_str()))
            .cloned()
            .collect();
        remaining.sort();
        ordered.extend(remaining);
    }

    ordered
}

/// Build one entry per reachable task, in presentation order
pub fn describe(registry: &Registry, nodes: &HashSet<String>) -> Vec<GraphEntry> {
    ordered_names(registry.def_order(), nodes)
        .into_iter()
        .filter_map(|name| {
            let task = registry.get(&name)?;
            Some(GraphEntry {
                required: sorted(&task.task_dep),
                setup: sorted(&task.setup),
                calculated: sorted(&task.calc_dep),
                name,
            })
        })
        .collect()
}

fn sorted(names: &[String]) -> Vec<String> {
    let mut names = names.to_vec();
    names.sort();
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::task::TaskNode;

    fn set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_definition_order_wins() {
        let def_order: Vec<String> = ["t3", "t1", "g1"].iter().map(|n| n.to_string()).collect();
        let ordered = ordered_names(&def_order, &set(&["g1", "t1", "t3"]));
        assert_eq!(ordered, vec!["t3", "t1", "g1"]);
    }

    #[test]
    fn test_unlisted_names_sorted_last() {
        let def_order = vec!["b".to_string()];
        let ordered = ordered_names(&def_order, &set(&["z", "b", "a"]));
        assert_eq!(ordered, vec!["b", "a", "z"]);
    }

    #[test]
    fn test_dependency_lists_sorted() {
        let registry = Registry::from_nodes(vec![TaskNode::new("main")
            .with_task_dep(["zz", "aa", "mm"])
            .with_setup(["s2", "s1"])
            .with_calc_dep(["c"])])
        .unwrap();

        let entries = describe(&registry, &set(&["main"]));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].required, vec!["aa", "mm", "zz"]);
        assert_eq!(entries[0].setup, vec!["s1", "s2"]);
        assert_eq!(entries[0].calculated, vec!["c"]);
        assert!(!entries[0].is_leaf());
    }

    #[test]
    fn test_json_field_names() {
        let entry = GraphEntry {
            name: "main".to_string(),
            required: vec!["a".to_string()],
            setup: vec![],
            calculated: vec!["dep".to_string()],
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "main",
                "task_dep": ["a"],
                "setup": [],
                "calc_dep": ["dep"],
            })
        );
    }
}
