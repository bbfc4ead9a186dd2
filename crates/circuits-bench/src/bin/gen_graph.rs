//! Writes a generated benchmark graph as an edge list on stdout.
//!
//! The vertex count goes to stderr, so the output can be piped straight into
//! `circuits`:
//!
//! ```text
//! gen-graph m 7 | circuits 64 --count-only
//! ```

use std::error::Error;
use std::io::{BufWriter, Write};

use circuits_bench::{SizeTier, generate_graph};
use clap::{Parser, ValueEnum};

/// Size tier argument, named by its benchmark label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Tier {
    /// 16 vertices.
    #[value(name = "s")]
    Small,
    /// 64 vertices.
    #[value(name = "m")]
    Medium,
    /// 256 vertices.
    #[value(name = "l")]
    Large,
    /// 1024 vertices.
    #[value(name = "xl")]
    XLarge,
}

impl From<Tier> for SizeTier {
    fn from(tier: Tier) -> Self {
        match tier {
            Tier::Small => SizeTier::Small,
            Tier::Medium => SizeTier::Medium,
            Tier::Large => SizeTier::Large,
            Tier::XLarge => SizeTier::XLarge,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "gen-graph",
    version,
    about = "Write a generated benchmark multigraph as a `source target` edge list"
)]
struct Args {
    /// Size tier of the generated graph.
    #[arg(value_enum)]
    tier: Tier,

    /// Seed for the random generator; the same seed gives the same graph.
    #[arg(default_value_t = 42)]
    seed: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let tier = SizeTier::from(args.tier);
    let seed = args.seed;

    let graph = generate_graph(&tier.config(seed));
    eprintln!(
        "{} vertices, {} arcs (tier {}, seed {seed})",
        graph.vertex_count(),
        graph.arc_count(),
        tier.label()
    );

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for (source, target) in graph.arcs() {
        writeln!(out, "{source} {target}")?;
    }
    out.flush()?;
    Ok(())
}
