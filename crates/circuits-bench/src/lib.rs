//! Graph generator, reference oracle and benchmark utilities for
//! `circuits-core`.
//!
//! This crate provides deterministic generation of directed multigraphs for
//! benchmarking and property-based testing, plus an independent brute-force
//! circuit enumeration to check the engine against.

use circuits_core::{ArcGraph, GraphBuildError, parse_edge_list};

pub mod correctness;
pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_graph};

/// Vertex count of the figure-10 regression graph.
pub const FIGURE10_VERTICES: usize = 16;

const FIGURE10_EDGES: &str = include_str!("../../../tests/fixtures/hawick-figure10.txt");

/// The 16-vertex regression graph (figure 10 of Hawick and James), with
/// self-arcs at 3, 8, 9 and 12 and a doubled arc `12 -> 1`.
///
/// # Errors
///
/// Only if the shared fixture file has been edited to name a vertex
/// outside `0..16`.
pub fn figure10() -> Result<ArcGraph, GraphBuildError> {
    ArcGraph::from_arcs(FIGURE10_VERTICES, parse_edge_list(FIGURE10_EDGES).arcs)
}
