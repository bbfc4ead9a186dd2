/// Johnson's CIRCUIT procedure for a single root.
///
/// A search from root `s` explores only vertices `>= s`. Every circuit it
/// closes therefore has `s` as its minimum vertex, so sweeping `s` from `0`
/// to `n - 1` finds each elementary circuit exactly once.
///
/// # Visit
///
/// `visit(v)` pushes `v` on the path and blocks it, then scans the successors
/// of `v` in order, skipping any below the root:
///
/// - a successor equal to the root closes a circuit; the path (root to `v`)
///   is handed to the callback and the scan continues;
/// - an unblocked successor is visited recursively.
///
/// If any circuit was found through `v`, `v` is unblocked (transitively
/// releasing its waiters). Otherwise `v` is added to the blocking set of each
/// in-range successor and stays blocked until one of them is unblocked.
///
/// # Resource contract
///
/// `visit` recurses once per path vertex, so the call depth reaches the
/// vertex count in the worst case. See
/// [`required_stack_size`](super::required_stack_size).
use crate::blocking::BlockingState;
use crate::error::InvariantViolation;
use crate::graph::Successors;
use crate::path::PathStack;

/// Reusable search state: blocking bookkeeping and the current path.
///
/// One instance serves any number of roots in sequence; [`CircuitSearch::search`]
/// resets the state before each root.
#[derive(Debug)]
pub struct CircuitSearch<'a> {
    successors: &'a Successors,
    blocking: BlockingState,
    path: PathStack,
    root: usize,
}

impl<'a> CircuitSearch<'a> {
    pub fn new(successors: &'a Successors) -> Self {
        let vertex_count = successors.vertex_count();
        Self {
            successors,
            blocking: BlockingState::new(vertex_count),
            path: PathStack::with_limit(vertex_count),
            root: 0,
        }
    }

    /// Finds every circuit whose minimum vertex is `root`, calling
    /// `on_circuit` with each one in discovery order.
    ///
    /// The slice passed to `on_circuit` starts at `root` and is only valid for
    /// the duration of the call; copy it to keep it.
    ///
    /// Returns `true` if at least one circuit was found.
    ///
    /// # Errors
    ///
    /// - [`InvariantViolation::RootOutOfRange`] if `root` is not a vertex.
    /// - Any error returned by `on_circuit`, which aborts the search at once.
    /// - [`InvariantViolation::PathOverflow`] if the blocking guard ever lets
    ///   a vertex onto the path twice.
    pub fn search<F, E>(&mut self, root: usize, on_circuit: &mut F) -> Result<bool, E>
    where
        F: FnMut(&[usize]) -> Result<(), E>,
        E: From<InvariantViolation>,
    {
        let vertex_count = self.successors.vertex_count();
        if root >= vertex_count {
            return Err(InvariantViolation::RootOutOfRange { root, vertex_count }.into());
        }
        self.blocking.reset();
        self.path.clear();
        self.root = root;
        self.visit(root, on_circuit)
    }

    fn visit<F, E>(&mut self, vertex: usize, on_circuit: &mut F) -> Result<bool, E>
    where
        F: FnMut(&[usize]) -> Result<(), E>,
        E: From<InvariantViolation>,
    {
        self.path.push(vertex)?;
        self.blocking.block(vertex);

        let successors = self.successors;
        let mut found = false;
        for &next in successors.of(vertex) {
            if next < self.root {
                continue;
            }
            if next == self.root {
                on_circuit(self.path.as_slice())?;
                found = true;
            } else if !self.blocking.is_blocked(next) && self.visit(next, on_circuit)? {
                found = true;
            }
        }

        if found {
            self.blocking.unblock(vertex);
        } else {
            for &next in successors.of(vertex) {
                if next >= self.root {
                    self.blocking.defer(next, vertex);
                }
            }
        }

        self.path.pop();
        Ok(found)
    }

    /// Blocking state as left by the last search.
    pub fn blocking(&self) -> &BlockingState {
        &self.blocking
    }

    /// The current path; empty between searches.
    pub fn path(&self) -> &PathStack {
        &self.path
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
