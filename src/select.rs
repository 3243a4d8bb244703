//! Task selection and validation
//!
//! Runs before inspection, over every defined task (subtasks included):
//! wildcard `task_dep` entries are expanded, every required and setup
//! dependency is checked to exist, and command-line names are resolved to
//! root tasks.

use crate::config::Config;
use crate::core::{Registry, TaskNode};
use crate::error::{Error, Result};
use regex::Regex;
use std::collections::HashSet;

/// Shell-style name pattern: `*` matches any run of characters, `?` one
#[derive(Debug, Clone)]
pub struct NamePattern {
    regex: Regex,
}

impl NamePattern {
    /// Whether `name` should be treated as a pattern at all
    pub fn is_pattern(name: &str) -> bool {
        name.contains(['*', '?'])
    }

    pub fn new(pattern: &str) -> Result<Self> {
        let mut source = String::with_capacity(pattern.len() + 2);
        source.push('^');
        for ch in pattern.chars() {
            match ch {
                '*' => source.push_str(".*"),
                '?' => source.push('.'),
                _ => source.push_str(&regex::escape(ch.encode_utf8(&mut [0; 4]))),
            }
        }
        source.push('$');

        let regex = Regex::new(&source).map_err(|source| Error::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}

/// Expand wildcard dependencies and check that every required and setup
/// dependency names a defined task. Calculated dependencies are not checked.
pub fn validate(registry: Registry) -> Result<Registry> {
    let names: Vec<String> = registry.def_order().to_vec();
    let known: HashSet<&str> = names.iter().map(String::as_str).collect();

    let mut nodes = registry.into_nodes();
    for node in &mut nodes {
        node.task_dep = expand_wildcards(node, &names)?;

        if let Some(dep) = node
            .traversable_deps()
            .find(|dep| !known.contains(dep))
        {
            return Err(Error::UnknownDependency {
                task: node.name.clone(),
                dep: dep.to_string(),
            });
        }
    }

    Registry::from_nodes(nodes)
}

fn expand_wildcards(node: &TaskNode, names: &[String]) -> Result<Vec<String>> {
    let mut expanded = Vec::with_capacity(node.task_dep.len());
    for dep in &node.task_dep {
        if !NamePattern::is_pattern(dep) {
            expanded.push(dep.clone());
            continue;
        }

        let pattern = NamePattern::new(dep)?;
        let before = expanded.len();
        expanded.extend(
            names
                .iter()
                .filter(|name| **name != node.name && pattern.matches(name))
                .cloned(),
        );
        if expanded.len() == before {
            return Err(Error::UnknownDependency {
                task: node.name.clone(),
                dep: dep.clone(),
            });
        }
        log::debug!(
            "Expanded \"{}\" of task \"{}\" to {} tasks",
            dep,
            node.name,
            expanded.len() - before
        );
    }
    Ok(expanded)
}

/// Resolve command-line names into root tasks.
///
/// With no names, falls back to the configured default tasks, then to every
/// task that is not a generated subtask. Duplicates keep their first position.
pub fn select(registry: &Registry, requested: &[String], config: &Config) -> Result<Vec<String>> {
    let roots = if !requested.is_empty() {
        resolve_all(registry, requested)?
    } else if let Some(defaults) = &config.default_tasks {
        resolve_all(registry, defaults)?
    } else {
        registry
            .iter_ordered()
            .filter(|task| !task.is_subtask())
            .map(|task| task.name.clone())
            .collect()
    };

    let mut seen = HashSet::new();
    let roots: Vec<String> = roots
        .into_iter()
        .filter(|name| seen.insert(name.clone()))
        .collect();
    log::info!("Selected {} root tasks", roots.len());
    Ok(roots)
}

fn resolve_all(registry: &Registry, names: &[String]) -> Result<Vec<String>> {
    let mut roots = Vec::new();
    for name in names {
        roots.extend(resolve(registry, name)?);
    }
    Ok(roots)
}

/// One requested name: exact task, then pattern, then target file
fn resolve(registry: &Registry, name: &str) -> Result<Vec<String>> {
    if registry.contains(name) {
        return Ok(vec![name.to_string()]);
    }

    if NamePattern::is_pattern(name) {
        let pattern = NamePattern::new(name)?;
        let matched: Vec<String> = registry
            .iter_ordered()
            .filter(|task| pattern.matches(&task.name))
            .map(|task| task.name.clone())
            .collect();
        if !matched.is_empty() {
            return Ok(matched);
        }
    }

    registry
        .iter_ordered()
        .find(|task| task.targets.iter().any(|target| target == name))
        .map(|task| vec![task.name.clone()])
        .ok_or_else(|| Error::TaskNotFound(name.to_string()))
}
