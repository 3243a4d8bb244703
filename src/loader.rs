//! Task file loader - parses a YAML task file into a registry
//!
//! ```yaml
//! config:
//!   default_tasks: [test]
//! tasks:
//!   - name: compile
//!     actions: ["cargo build"]
//!   - name: test
//!     task_dep: [compile]
//!     setup: [start_db]
//!   - name: start_db
//!   - name: lint
//!     subtasks:
//!       - name: fmt
//!       - name: clippy
//!         task_dep: [compile]
//! ```
//!
//! A task with `subtasks` is a generator: each subtask becomes
//! `<generator>:<subtask>` and the generator depends on all of them.

use crate::config::Config;
use crate::core::{Registry, TaskNode, SUBTASK_SEPARATOR};
use crate::error::{Error, Result};
use serde::de::IgnoredAny;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Task file names tried, in order, when no file is given
pub const TASK_FILE_CANDIDATES: &[&str] = &["tasks.yml", "tasks.yaml", ".taskgraph/tasks.yml"];

/// A task as written in the task file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaskDef {
    pub name: String,
    #[serde(default)]
    pub task_dep: Vec<String>,
    #[serde(default)]
    pub setup: Vec<String>,
    #[serde(default)]
    pub calc_dep: Vec<String>,
    pub subtask_of: Option<String>,
    /// Free-form description; accepted and skipped
    #[serde(default, rename = "doc")]
    _doc: Option<IgnoredAny>,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub targets: Vec<String>,
    /// Present on generators only
    pub subtasks: Option<Vec<TaskDef>>,
}

impl TaskDef {
    fn into_node(self) -> TaskNode {
        TaskNode {
            name: self.name,
            task_dep: self.task_dep,
            setup: self.setup,
            calc_dep: self.calc_dep,
            subtask_of: self.subtask_of,
            actions: self.actions,
            targets: self.targets,
        }
    }
}

/// Parsed task file contents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskFile {
    #[serde(default)]
    pub config: Config,
    #[serde(default)]
    pub tasks: Vec<TaskDef>,
}

impl TaskFile {
    /// Load task file from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_str_at(&content, path)
    }

    /// Parse YAML content; `path` is only used in error messages
    pub fn from_str_at(content: &str, path: &Path) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Auto-detect the task file in `dir`
    /// Priority:
    /// 1. tasks.yml
    /// 2. tasks.yaml
    /// 3. .taskgraph/tasks.yml
    pub fn locate(dir: &Path) -> Result<PathBuf> {
        TASK_FILE_CANDIDATES
            .iter()
            .map(|candidate| dir.join(candidate))
            .find(|path| path.is_file())
            .ok_or_else(|| Error::NoTaskFile {
                tried: TASK_FILE_CANDIDATES.iter().map(|c| c.to_string()).collect(),
            })
    }

    /// Expand generators and build the registry in definition order
    pub fn into_registry(self) -> Result<Registry> {
        let mut nodes = Vec::new();
        for def in self.tasks {
            nodes.extend(expand(def)?);
        }
        log::info!("Loaded {} tasks", nodes.len());
        Registry::from_nodes(nodes)
    }
}

/// Turn one definition into its task plus any generated subtasks
fn expand(mut def: TaskDef) -> Result<Vec<TaskNode>> {
    let Some(subtasks) = def.subtasks.take() else {
        return Ok(vec![def.into_node()]);
    };
    let mut node = def.into_node();
    if node.name.is_empty() {
        return Err(Error::EmptyTaskName);
    }

    let mut generated = Vec::with_capacity(subtasks.len());
    for sub in subtasks {
        if sub.name.is_empty() {
            return Err(Error::EmptyTaskName);
        }
        if sub.subtasks.is_some() {
            return Err(Error::NestedSubtasks {
                generator: node.name.clone(),
                subtask: sub.name,
            });
        }
        let mut sub = sub.into_node();
        sub.name = format!("{}{}{}", node.name, SUBTASK_SEPARATOR, sub.name);
        sub.subtask_of = Some(node.name.clone());
        generated.push(sub);
    }

    node.task_dep.extend(generated.iter().map(|sub| sub.name.clone()));

    let mut nodes = Vec::with_capacity(generated.len() + 1);
    nodes.push(node);
    nodes.extend(generated);
    Ok(nodes)
}
