//! taskgraph - read-only dependency graph inspector for task definitions
//!
//! Given the tasks selected on the command line, computes every task they
//! transitively require (following required and setup dependencies,
//! materializing generator subtasks on demand) and renders the result in a
//! stable order. No task action is ever run.

pub mod config;
pub mod core;
pub mod error;
pub mod loader;
pub mod render;
pub mod select;

// Re-exports
pub use config::Config;
pub use crate::core::{GraphEntry, PendingIndex, Registry, TaskNode};
pub use error::{Error, Result};
pub use loader::TaskFile;
pub use render::OutputFormat;

/// Describe the dependency graph reachable from `roots`.
///
/// `registry` must already be validated. Generator subtasks are moved into a
/// pending index first and only promoted back when referenced. With `strict`
/// set, a dependency that cannot be found even after materialization is an
/// error; otherwise it is left out of the result.
pub fn inspect(mut registry: Registry, roots: &[String], strict: bool) -> Result<Vec<GraphEntry>> {
    let mut pending = PendingIndex::extract(&mut registry);
    let reachable = crate::core::collect_reachable(roots, &mut registry, &mut pending);

    log::info!(
        "Reached {} tasks, materialized {} subtasks, {} unresolved",
        reachable.nodes.len(),
        reachable.materialized,
        reachable.unresolved.len()
    );

    if strict {
        if let Some(name) = reachable.unresolved.first() {
            return Err(Error::Unresolved(name.clone()));
        }
    }

    Ok(crate::core::describe(&registry, &reachable.nodes))
}
