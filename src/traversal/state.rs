use super::TreePath;
use std::collections::HashMap;

/// Per-traversal bookkeeping: which positions have been discovered and which have already had
/// their children enqueued.
///
/// A fresh state is created at the start of every traversal call and dropped when it returns;
/// it is never shared between traversals. Entries are keyed by [`TreePath`], the synthetic node
/// identity, and obey two invariants:
/// - discovery is idempotent: once a position is recorded it is never overwritten, so a node
///   rediscovered by the postorder requeue keeps its original entry;
/// - the visited flag only ever goes from `false` to `true`.
///
/// Visit callbacks receive the state read-only together with the current node's path; the
/// postorder machinery uses [`visited`](#method.visited) to tell the descent phase of a branch
/// node from its unwind phase.
///
/// [`TreePath`]: struct.TreePath.html " "
#[derive(Debug, Default)]
pub struct TraversalState {
    entries: HashMap<TreePath, NodeState>,
}

#[derive(Copy, Clone, Debug, Default)]
struct NodeState {
    visited: bool,
}

impl TraversalState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records a position, keeping any existing entry untouched.
    pub(crate) fn discover(&mut self, path: TreePath) {
        self.entries.entry(path).or_default();
    }

    /// Flags a position as visited. False to true only; never cleared.
    pub(crate) fn mark_visited(&mut self, path: &TreePath) {
        if let Some(entry) = self.entries.get_mut(path) {
            entry.visited = true;
        }
    }

    /// Returns `true` if the node at `path` has already had children enqueued for it.
    ///
    /// Leaves never get the flag: there is nothing to enqueue below them.
    #[inline]
    pub fn visited(&self, path: &TreePath) -> bool {
        self.entries.get(path).map_or(false, |entry| entry.visited)
    }

    /// Returns `true` if the position has been discovered by this traversal.
    #[inline]
    pub fn discovered(&self, path: &TreePath) -> bool {
        self.entries.contains_key(path)
    }

    /// Returns the number of positions discovered so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been discovered yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
