//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for library operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading, selecting or inspecting tasks
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid task file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("no task file found (looked for {})", .tried.join(", "))]
    NoTaskFile { tried: Vec<String> },

    #[error("task name must not be empty")]
    EmptyTaskName,

    #[error("task \"{0}\" is defined more than once")]
    DuplicateTask(String),

    #[error("subtask \"{subtask}\" of generator \"{generator}\" cannot declare its own subtasks")]
    NestedSubtasks { generator: String, subtask: String },

    #[error("dependency \"{dep}\" of task \"{task}\" does not exist")]
    UnknownDependency { task: String, dep: String },

    #[error("task \"{0}\" not found")]
    TaskNotFound(String),

    #[error("invalid name pattern \"{pattern}\": {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("dependency \"{0}\" could not be resolved")]
    Unresolved(String),
}
