//! Graph traversal - breadth-first walk over required and setup edges

use super::lazy::PendingIndex;
use super::registry::Registry;
use std::collections::{HashSet, VecDeque};

/// Outcome of a traversal
#[derive(Debug, Clone, Default)]
pub struct Reachable {
    /// Every task reachable from the roots, roots included
    pub nodes: HashSet<String>,
    /// Referenced names that exist neither in the registry nor in a pending group,
    /// in the order they were first met
    pub unresolved: Vec<String>,
    /// Subtasks promoted out of the pending index along the way
    pub materialized: usize,
}

/// Collect every task reachable from `roots`.
///
/// Missing names are promoted from `pending` on first reference. Names that
/// still cannot be found are left out of the result; reporting them is up to
/// the caller. Calculated dependencies are never followed.
pub fn collect_reachable(
    roots: &[String],
    registry: &mut Registry,
    pending: &mut PendingIndex,
) -> Reachable {
    let mut result = Reachable::default();
    let mut visited: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<String> = roots.iter().cloned().collect();

    while let Some(name) = queue.pop_front() {
        if !visited.insert(name.clone()) {
            continue;
        }

        if !registry.contains(&name) {
            result.materialized += pending.materialize(&name, registry);
        }

        let Some(task) = registry.get(&name) else {
            log::debug!("Dropping unresolved task reference \"{}\"", name);
            result.unresolved.push(name);
            continue;
        };

        queue.extend(
            task.traversable_deps()
                .filter(|dep| !visited.contains(*dep))
                .map(str::to_string),
        );
        result.nodes.insert(name);
    }

    result
}
