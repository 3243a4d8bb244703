//! Core engine - task registry, lazy subtask index, traversal and ordering

mod graph;
mod lazy;
mod registry;
mod task;
mod traversal;

pub use graph::{describe, ordered_names, GraphEntry};
pub use lazy::PendingIndex;
pub use registry::Registry;
pub use task::{TaskNode, SUBTASK_SEPARATOR};
pub use traversal::{collect_reachable, Reachable};
