#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod blocking;
pub mod config;
pub mod edge_list;
pub mod engine;
pub mod error;
pub mod graph;
pub mod list;
pub mod path;
pub mod stats;

pub use blocking::BlockingState;
pub use config::{EnumerationConfig, MultiArcPolicy};
pub use edge_list::{EdgeList, Truncation, parse_edge_list};
pub use engine::{
    CircuitSearch, enumerate, enumerate_parallel, enumerate_with, required_stack_size,
};
pub use error::{GraphBuildError, InvariantViolation, ParallelError};
pub use graph::{ArcGraph, Successors};
pub use list::OrderedList;
pub use path::PathStack;
pub use stats::CircuitStats;

/// Returns the version string of this crate.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_not_empty() {
        assert!(!version().is_empty());
    }
}
