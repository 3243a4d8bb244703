//! Task registry - active tasks by name plus their definition order

use super::task::TaskNode;
use crate::error::{Error, Result};
use std::collections::HashMap;

/// Active task table.
///
/// `def_order` is captured once at construction and is the only source of
/// presentation order; the map itself is never iterated for output.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    tasks: HashMap<String, TaskNode>,
    def_order: Vec<String>,
}

impl Registry {
    /// Build a registry from nodes in the order they were declared
    pub fn from_nodes(nodes: impl IntoIterator<Item = TaskNode>) -> Result<Self> {
        let mut registry = Self::default();
        for node in nodes {
            if node.name.is_empty() {
                return Err(Error::EmptyTaskName);
            }
            if registry.tasks.contains_key(&node.name) {
                return Err(Error::DuplicateTask(node.name));
            }
            registry.def_order.push(node.name.clone());
            registry.tasks.insert(node.name.clone(), node);
        }
        Ok(registry)
    }

    /// Get task by name
    pub fn get(&self, name: &str) -> Option<&TaskNode> {
        self.tasks.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tasks.contains_key(name)
    }

    /// Names in the order they were originally declared
    pub fn def_order(&self) -> &[String] {
        &self.def_order
    }

    /// Active tasks in definition order
    pub fn iter_ordered(&self) -> impl Iterator<Item = &TaskNode> {
        self.def_order.iter().filter_map(|name| self.tasks.get(name))
    }

    /// Consume the registry, yielding active tasks in definition order
    pub fn into_nodes(self) -> Vec<TaskNode> {
        let Self { mut tasks, def_order } = self;
        def_order
            .iter()
            .filter_map(|name| tasks.remove(name))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Put a node (back) into the active table. Definition order is untouched.
    pub(crate) fn insert(&mut self, node: TaskNode) {
        self.tasks.insert(node.name.clone(), node);
    }

    /// Take a node out of the active table. Definition order is untouched.
    pub(crate) fn remove(&mut self, name: &str) -> Option<TaskNode> {
        self.tasks.remove(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_def_order_preserved() {
        let registry = Registry::from_nodes(vec![
            TaskNode::new("zeta"),
            TaskNode::new("alpha"),
            TaskNode::new("mid"),
        ])
        .unwrap();

        assert_eq!(registry.def_order(), &["zeta", "alpha", "mid"]);
        let names: Vec<&str> = registry.iter_ordered().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = Registry::from_nodes(vec![TaskNode::new("a"), TaskNode::new("a")]).unwrap_err();
        assert!(matches!(err, Error::DuplicateTask(name) if name == "a"));
    }

    #[test]
    fn test_empty_name_rejected() {
        let err = Registry::from_nodes(vec![TaskNode::new("")]).unwrap_err();
        assert!(matches!(err, Error::EmptyTaskName));
    }

    #[test]
    fn test_into_nodes_ordered() {
        let registry =
            Registry::from_nodes(vec![TaskNode::new("b"), TaskNode::new("a")]).unwrap();
        let names: Vec<String> = registry.into_nodes().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_remove_keeps_def_order() {
        let mut registry =
            Registry::from_nodes(vec![TaskNode::new("a"), TaskNode::new("b")]).unwrap();
        let node = registry.remove("a").unwrap();
        assert!(!registry.contains("a"));
        assert_eq!(registry.def_order(), &["a", "b"]);

        registry.insert(node);
        assert!(registry.contains("a"));
        assert_eq!(registry.len(), 2);
    }
}
