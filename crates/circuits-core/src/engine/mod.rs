/// Enumeration drivers.
///
/// A driver sweeps the search root from `0` to `n - 1`, resetting the
/// blocking state before each root and folding every closed circuit into a
/// [`CircuitStats`]. Roots are independent given a fresh blocking state and
/// the immutable graph, which [`enumerate_parallel`] exploits.
///
/// | Driver | Threads | Streams circuits |
/// |---|---|---|
/// | [`enumerate`] | caller's | no |
/// | [`enumerate_with`] | caller's | yes, in discovery order |
/// | [`enumerate_parallel`] | `config.threads` workers | no |
///
/// All three return identical statistics for the same graph and policy.
pub mod parallel;
pub mod search;

pub use parallel::enumerate_parallel;
pub use search::CircuitSearch;

use crate::config::EnumerationConfig;
use crate::error::InvariantViolation;
use crate::graph::{ArcGraph, Successors};
use crate::stats::CircuitStats;

/// Stack bytes budgeted per recursive `visit` frame.
const FRAME_BYTES: usize = 512;

/// Stack reserved on top of the recursion budget.
const BASE_STACK_BYTES: usize = 2 * 1024 * 1024;

/// Stack size a thread needs to run a search over `vertex_count` vertices.
///
/// The search recurses once per vertex on the current path, and a path may
/// hold every vertex.
pub fn required_stack_size(vertex_count: usize) -> usize {
    BASE_STACK_BYTES.saturating_add(vertex_count.saturating_mul(FRAME_BYTES))
}

/// Enumerates every elementary circuit of `graph` and returns the aggregate
/// statistics.
///
/// Runs on the calling thread; see [`required_stack_size`].
///
/// # Errors
///
/// [`InvariantViolation`] if an internal contract breaks. Valid graphs never
/// produce one.
pub fn enumerate(
    graph: &ArcGraph,
    config: &EnumerationConfig,
) -> Result<CircuitStats, InvariantViolation> {
    enumerate_with(graph, config, |_| Ok(()))
}

/// Like [`enumerate`], additionally calling `visitor` with every circuit in
/// discovery order: roots ascending, then depth-first in adjacency order.
///
/// Each circuit starts at its minimum vertex. The slice is only valid during
/// the call. An error from `visitor` stops the enumeration immediately; no
/// further roots are searched.
///
/// # Errors
///
/// The first error returned by `visitor`, or an [`InvariantViolation`]
/// converted into `E`.
pub fn enumerate_with<V, E>(
    graph: &ArcGraph,
    config: &EnumerationConfig,
    mut visitor: V,
) -> Result<CircuitStats, E>
where
    V: FnMut(&[usize]) -> Result<(), E>,
    E: From<InvariantViolation>,
{
    let successors = Successors::new(graph, config.multi_arcs);
    let mut stats = CircuitStats::new(graph.vertex_count());
    let mut search = CircuitSearch::new(&successors);

    for root in 0..graph.vertex_count() {
        log::debug!("searching circuits rooted at {root}");
        search.search(root, &mut |circuit: &[usize]| -> Result<(), E> {
            stats.record(circuit)?;
            log::trace!("circuit {circuit:?}");
            visitor(circuit)
        })?;
    }

    Ok(stats)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
