//! Root-parallel enumeration.
//!
//! Workers pull roots from a shared counter, so each worker sees its roots
//! in ascending order. Every worker owns its own [`CircuitSearch`] (blocking
//! state and path) and its own [`CircuitStats`]; the graph's successor lists
//! are shared read-only. Worker results are folded with
//! [`CircuitStats::merge`], whose lower-root tie-break reproduces the
//! sequential first-found longest circuit.
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;

use crate::config::EnumerationConfig;
use crate::engine::{CircuitSearch, enumerate, required_stack_size};
use crate::error::{InvariantViolation, ParallelError};
use crate::graph::{ArcGraph, Successors};
use crate::stats::CircuitStats;

/// Enumerates every elementary circuit of `graph` on `config.threads` worker
/// threads (`0` = available parallelism, capped at the vertex count).
///
/// Falls back to [`enumerate`] on the calling thread when a single worker
/// would be used. The returned statistics equal those of [`enumerate`].
///
/// # Errors
///
/// - [`ParallelError::Spawn`] if a worker thread cannot be started.
/// - [`ParallelError::WorkerPanicked`] if a worker panics.
/// - [`ParallelError::Invariant`] if a worker hits an invariant violation.
pub fn enumerate_parallel(
    graph: &ArcGraph,
    config: &EnumerationConfig,
) -> Result<CircuitStats, ParallelError> {
    let vertex_count = graph.vertex_count();
    let workers = worker_count(config.threads, vertex_count);
    if workers <= 1 {
        return Ok(enumerate(graph, config)?);
    }

    let successors = Successors::new(graph, config.multi_arcs);
    let next_root = AtomicUsize::new(0);
    let stack_size = required_stack_size(vertex_count);
    log::debug!("enumerating {vertex_count} roots on {workers} workers");

    let partials: Result<Vec<CircuitStats>, ParallelError> = thread::scope(|scope| {
        let mut handles = Vec::with_capacity(workers);
        let mut spawn_error = None;
        for worker in 0..workers {
            let successors = &successors;
            let next_root = &next_root;
            let spawned = thread::Builder::new()
                .name(format!("circuits-{worker}"))
                .stack_size(stack_size)
                .spawn_scoped(scope, move || run_worker(worker, successors, next_root));
            match spawned {
                Ok(handle) => handles.push((worker, handle)),
                Err(e) => {
                    // Exhaust the counter so the workers already started stop.
                    next_root.store(vertex_count, Ordering::Relaxed);
                    spawn_error = Some(ParallelError::Spawn {
                        worker,
                        detail: e.to_string(),
                    });
                    break;
                }
            }
        }

        let joined: Vec<Result<CircuitStats, ParallelError>> = handles
            .into_iter()
            .map(|(worker, handle)| match handle.join() {
                Ok(result) => result.map_err(ParallelError::from),
                Err(_) => Err(ParallelError::WorkerPanicked { worker }),
            })
            .collect();
        match spawn_error {
            Some(e) => Err(e),
            None => joined.into_iter().collect(),
        }
    });

    let mut stats = CircuitStats::new(vertex_count);
    for partial in &partials? {
        stats.merge(partial)?;
    }
    Ok(stats)
}

/// Searches roots from the shared counter until it runs past the last vertex.
fn run_worker(
    worker: usize,
    successors: &Successors,
    next_root: &AtomicUsize,
) -> Result<CircuitStats, InvariantViolation> {
    let vertex_count = successors.vertex_count();
    let mut stats = CircuitStats::new(vertex_count);
    let mut search = CircuitSearch::new(successors);
    let mut roots = 0usize;

    loop {
        let root = next_root.fetch_add(1, Ordering::Relaxed);
        if root >= vertex_count {
            break;
        }
        log::debug!("worker {worker}: searching circuits rooted at {root}");
        search.search(root, &mut |circuit: &[usize]| stats.record(circuit))?;
        roots += 1;
    }

    log::debug!(
        "worker {worker}: finished {roots} roots, {} circuits",
        stats.total()
    );
    Ok(stats)
}

/// Number of workers to start for `requested` threads over `vertex_count`
/// roots.
fn worker_count(requested: usize, vertex_count: usize) -> usize {
    let requested = if requested == 0 {
        thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
    } else {
        requested
    };
    requested.min(vertex_count)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
