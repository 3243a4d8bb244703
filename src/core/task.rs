//! Task node - a single task definition as seen by the inspector

/// Separator between a generator name and the name of a subtask it produced
pub const SUBTASK_SEPARATOR: char = ':';

/// A task definition.
///
/// Nodes are built once by the loader. The inspector never edits their
/// dependency lists, it only moves whole nodes between the pending index
/// and the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskNode {
    pub name: String,
    /// Required dependencies ("must complete before this task runs")
    pub task_dep: Vec<String>,
    /// Setup tasks, run once before this task
    pub setup: Vec<String>,
    /// Dependencies only known at execution time, never traversed
    pub calc_dep: Vec<String>,
    /// Generator that produced this task, if any
    pub subtask_of: Option<String>,
    /// Carried for completeness, never executed here
    pub actions: Vec<String>,
    /// Files this task produces
    pub targets: Vec<String>,
}

impl TaskNode {
    /// Create a task with no dependencies
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_task_dep<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.task_dep = deps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_setup<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.setup = deps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_calc_dep<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.calc_dep = deps.into_iter().map(Into::into).collect();
        self
    }

    /// Mark this task as produced by the generator `parent`
    pub fn subtask_of(mut self, parent: impl Into<String>) -> Self {
        self.subtask_of = Some(parent.into());
        self
    }

    /// Whether a generator produced this task
    pub fn is_subtask(&self) -> bool {
        self.subtask_of.is_some()
    }

    /// Names the traversal follows: required deps, then setup tasks
    pub fn traversable_deps(&self) -> impl Iterator<Item = &str> {
        self.task_dep
            .iter()
            .chain(self.setup.iter())
            .map(String::as_str)
    }
}
