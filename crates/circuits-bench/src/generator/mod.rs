//! Directed multigraph generator.
//!
//! Produces [`ArcGraph`] instances whose arcs mostly join nearby vertices
//! (within a fixed window, wrapping around), sprinkled with self-arcs and
//! repeated arcs. The locality keeps circuit counts in a range where a full
//! enumeration finishes quickly, while the wrap-around still allows circuits
//! through every vertex.

pub mod topology;

use circuits_core::ArcGraph;
use rand::SeedableRng;
use rand::rngs::StdRng;

use topology::build_local_multigraph;

/// Configuration for the graph generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of vertices.
    pub num_vertices: usize,
    /// Number of arcs, repeats and self-arcs included.
    pub num_arcs: usize,
    /// Largest distance between the endpoints of an ordinary arc.
    pub window: usize,
    /// Fraction of arcs that are self-arcs (0.0-1.0).
    pub self_arc_ratio: f64,
    /// Fraction of arcs that repeat an earlier arc (0.0-1.0).
    pub multi_arc_ratio: f64,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 16 vertices, 48 arcs; tens of circuits.
    Small,
    /// 64 vertices, 192 arcs; a few hundred circuits.
    Medium,
    /// 256 vertices, 768 arcs; around a thousand circuits.
    Large,
    /// 1024 vertices, 3072 arcs; thousands of circuits.
    XLarge,
}

impl SizeTier {
    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let num_vertices = match self {
            SizeTier::Small => 16,
            SizeTier::Medium => 64,
            SizeTier::Large => 256,
            SizeTier::XLarge => 1024,
        };
        GeneratorConfig {
            seed,
            num_vertices,
            num_arcs: num_vertices * 3,
            window: 4,
            self_arc_ratio: 0.05,
            multi_arc_ratio: 0.1,
        }
    }

    /// Short label used in benchmark ids.
    pub fn label(self) -> &'static str {
        match self {
            SizeTier::Small => "S",
            SizeTier::Medium => "M",
            SizeTier::Large => "L",
            SizeTier::XLarge => "XL",
        }
    }
}

/// Generates a multigraph from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`.
pub fn generate_graph(config: &GeneratorConfig) -> ArcGraph {
    let mut rng = StdRng::seed_from_u64(config.seed);
    build_local_multigraph(config, &mut rng)
}
