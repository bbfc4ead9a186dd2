//! Johnson's block/unblock bookkeeping.
//!
//! Every vertex carries a `blocked` flag and a blocking set `B[v]`: the
//! vertices whose exploration found no circuit and is pending `v` becoming
//! unblocked. A blocked vertex is never re-entered by the search until some
//! circuit-closing path runs through one of the vertices it waits on.
//!
//! The state belongs to a single search root and is reset before the next
//! one; nothing carries over between roots.
use crate::list::OrderedList;

/// Per-vertex blocked flags and blocking sets for one search root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockingState {
    blocked: Vec<bool>,
    pending: Vec<OrderedList<usize>>,
}

impl BlockingState {
    /// Creates an all-clear state for `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            blocked: vec![false; vertex_count],
            pending: vec![OrderedList::new(); vertex_count],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.blocked.len()
    }

    /// Clears every flag and empties every blocking set.
    pub fn reset(&mut self) {
        self.blocked.fill(false);
        for set in &mut self.pending {
            set.clear();
        }
    }

    pub fn block(&mut self, vertex: usize) {
        self.blocked[vertex] = true;
    }

    pub fn is_blocked(&self, vertex: usize) -> bool {
        self.blocked[vertex]
    }

    /// Records that `waiter` is pending `vertex` being unblocked.
    ///
    /// Returns `false` if `waiter` was already in `B[vertex]`; blocking sets
    /// never hold duplicates.
    pub fn defer(&mut self, vertex: usize, waiter: usize) -> bool {
        let set = &mut self.pending[vertex];
        if set.contains(&waiter) {
            return false;
        }
        set.push(waiter);
        true
    }

    /// The blocking set `B[vertex]`.
    pub fn pending(&self, vertex: usize) -> &OrderedList<usize> {
        &self.pending[vertex]
    }

    /// Unblocks `vertex` and, transitively, every blocked vertex waiting on
    /// it.
    ///
    /// Each member `w` of a drained `B[u]` is removed with all its
    /// occurrences in one step and visited once; `w` is unblocked in turn only
    /// if it is still blocked. Blocking sets of vertices that were not blocked
    /// when reached are left untouched. Uses an explicit work list, so the
    /// call depth does not grow with the length of the waiting chain.
    pub fn unblock(&mut self, vertex: usize) {
        self.blocked[vertex] = false;
        let mut work = vec![vertex];
        while let Some(u) = work.pop() {
            while let Some(&w) = self.pending[u].first() {
                self.pending[u].remove_all(&w);
                if self.blocked[w] {
                    self.blocked[w] = false;
                    work.push(w);
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
