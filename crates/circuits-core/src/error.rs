/// Error types shared across the circuit enumeration engine.
///
/// - [`GraphBuildError`]: external input that cannot form a graph. Reachable
///   from user data; callers are expected to report it.
/// - [`InvariantViolation`]: a broken internal contract, such as an
///   out-of-range vertex inside the engine or a path deeper than the vertex
///   count. Valid input never produces one. The engine returns it at once
///   rather than continue with corrupt statistics.
/// - [`ParallelError`]: worker-thread failures of the parallel driver.
use std::fmt;

// ---------------------------------------------------------------------------
// GraphBuildError
// ---------------------------------------------------------------------------

/// Errors that can occur while building an [`ArcGraph`](crate::graph::ArcGraph).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphBuildError {
    /// An arc endpoint is not a vertex of the graph.
    VertexOutOfRange {
        /// Source vertex of the offending arc.
        source: usize,
        /// Target vertex of the offending arc.
        target: usize,
        /// Number of vertices the graph was declared with.
        vertex_count: usize,
    },
}

impl fmt::Display for GraphBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphBuildError::VertexOutOfRange {
                source,
                target,
                vertex_count,
            } => write!(
                f,
                "arc {source} -> {target} references a vertex outside 0..{vertex_count}"
            ),
        }
    }
}

impl std::error::Error for GraphBuildError {}

// ---------------------------------------------------------------------------
// InvariantViolation
// ---------------------------------------------------------------------------

/// A violated internal contract of the enumeration engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A search was started from a vertex that is not in the graph.
    RootOutOfRange {
        /// The requested root.
        root: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// The path stack would grow beyond its limit (the vertex count).
    PathOverflow {
        /// Maximum number of vertices the stack may hold.
        limit: usize,
    },
    /// A circuit handed to the statistics collector is empty or longer than
    /// the vertex count.
    CircuitLengthOutOfRange {
        /// Length of the rejected circuit.
        length: usize,
        /// Number of vertices the collector was sized for.
        vertex_count: usize,
    },
    /// A circuit handed to the statistics collector names an unknown vertex.
    VertexOutOfRange {
        /// The offending vertex.
        vertex: usize,
        /// Number of vertices the collector was sized for.
        vertex_count: usize,
    },
    /// Two statistics collectors sized for different graphs were merged.
    GraphMismatch {
        /// Vertex count of the receiving collector.
        expected: usize,
        /// Vertex count of the collector being merged in.
        actual: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::RootOutOfRange { root, vertex_count } => {
                write!(f, "search root {root} is outside 0..{vertex_count}")
            }
            InvariantViolation::PathOverflow { limit } => {
                write!(f, "path stack exceeded its limit of {limit} vertices")
            }
            InvariantViolation::CircuitLengthOutOfRange {
                length,
                vertex_count,
            } => write!(
                f,
                "circuit of length {length} cannot exist in a graph of {vertex_count} vertices"
            ),
            InvariantViolation::VertexOutOfRange {
                vertex,
                vertex_count,
            } => write!(f, "circuit vertex {vertex} is outside 0..{vertex_count}"),
            InvariantViolation::GraphMismatch { expected, actual } => write!(
                f,
                "cannot merge statistics for {actual} vertices into statistics for {expected}"
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}

// ---------------------------------------------------------------------------
// ParallelError
// ---------------------------------------------------------------------------

/// Errors from [`enumerate_parallel`](crate::engine::enumerate_parallel).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParallelError {
    /// The operating system refused to start a worker thread.
    Spawn {
        /// Index of the worker that could not be started.
        worker: usize,
        /// The underlying I/O error message.
        detail: String,
    },
    /// A worker thread panicked before returning its statistics.
    WorkerPanicked {
        /// Index of the worker.
        worker: usize,
    },
    /// A worker hit an engine invariant violation.
    Invariant(InvariantViolation),
}

impl fmt::Display for ParallelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParallelError::Spawn { worker, detail } => {
                write!(f, "failed to start worker {worker}: {detail}")
            }
            ParallelError::WorkerPanicked { worker } => write!(f, "worker {worker} panicked"),
            ParallelError::Invariant(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParallelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParallelError::Invariant(e) => Some(e),
            ParallelError::Spawn { .. } | ParallelError::WorkerPanicked { .. } => None,
        }
    }
}

impl From<InvariantViolation> for ParallelError {
    fn from(e: InvariantViolation) -> Self {
        ParallelError::Invariant(e)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_out_of_range_names_the_arc() {
        let e = GraphBuildError::VertexOutOfRange {
            source: 3,
            target: 17,
            vertex_count: 16,
        };
        let msg = e.to_string();
        assert!(msg.contains("3 -> 17"), "message: {msg}");
        assert!(msg.contains("0..16"), "message: {msg}");
    }

    #[test]
    fn invariant_messages_are_distinct() {
        let msgs = [
            InvariantViolation::RootOutOfRange {
                root: 9,
                vertex_count: 4,
            },
            InvariantViolation::PathOverflow { limit: 4 },
            InvariantViolation::CircuitLengthOutOfRange {
                length: 0,
                vertex_count: 4,
            },
            InvariantViolation::VertexOutOfRange {
                vertex: 7,
                vertex_count: 4,
            },
            InvariantViolation::GraphMismatch {
                expected: 4,
                actual: 5,
            },
        ]
        .map(|e| e.to_string());
        for (i, a) in msgs.iter().enumerate() {
            for b in &msgs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn parallel_error_wraps_invariant() {
        let e = ParallelError::from(InvariantViolation::PathOverflow { limit: 2 });
        assert_eq!(e.to_string(), "path stack exceeded its limit of 2 vertices");
        assert!(std::error::Error::source(&e).is_some());
        let spawn = ParallelError::Spawn {
            worker: 3,
            detail: "resource temporarily unavailable".to_owned(),
        };
        assert!(spawn.to_string().contains("worker 3"));
    }

    #[test]
    fn errors_are_std_errors() {
        let e: Box<dyn std::error::Error> = Box::new(InvariantViolation::PathOverflow { limit: 1 });
        assert!(!e.to_string().is_empty());
    }
}
