//! Clap CLI definition: root struct and shared argument types.
use std::path::PathBuf;

use circuits_core::MultiArcPolicy;
use clap::{Parser, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for the run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text: `Cycle:` listing followed by a summary (default).
    Human,
    /// A single pretty-printed JSON object.
    Json,
}

/// How repeated arcs between the same pair of vertices are counted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MultiArcs {
    /// Count every distinct circuit once (default).
    Collapse,
    /// Traverse every repeated arc, counting circuits with arc multiplicity.
    Multiplicity,
}

impl From<MultiArcs> for MultiArcPolicy {
    fn from(value: MultiArcs) -> Self {
        match value {
            MultiArcs::Collapse => MultiArcPolicy::Collapse,
            MultiArcs::Multiplicity => MultiArcPolicy::Multiplicity,
        }
    }
}

/// Root CLI struct for the `circuits` binary.
#[derive(Parser, Debug)]
#[command(
    name = "circuits",
    version,
    about = "Enumerate the elementary circuits of a directed multigraph",
    long_about = "Enumerates every elementary circuit of a directed graph that may contain\n\
                  self-arcs and repeated arcs, using Johnson's algorithm.\n\
                  The graph is read as whitespace-separated `source target` pairs;\n\
                  a token such as `3abc` reads as vertex 3 and then ends the input,\n\
                  and a token that does not start with a digit ends it at once."
)]
pub struct Cli {
    /// Number of vertices; arcs must use vertices 0..NUM_VERTICES.
    #[arg(value_name = "NUM_VERTICES", value_parser = clap::value_parser!(u64).range(1..))]
    pub num_vertices: u64,

    /// Edge list path, or `-` for stdin.
    #[arg(long, short = 'i', value_name = "FILE", default_value = "-")]
    pub input: PathOrStdin,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human")]
    pub format: OutputFormat,

    /// Only print the summary, not the individual circuits.
    #[arg(long)]
    pub count_only: bool,

    /// Echo the vertex count and every arc read before enumerating.
    #[arg(long)]
    pub echo_arcs: bool,

    /// Treatment of repeated arcs: collapse (default) or multiplicity.
    #[arg(long, value_name = "POLICY", default_value = "collapse")]
    pub multi_arcs: MultiArcs,

    /// Number of worker threads (0 = one per CPU). Requires `--count-only`.
    #[arg(long, short = 'j', value_name = "N", requires = "count_only")]
    pub jobs: Option<usize>,

    /// Maximum input size in bytes.
    ///
    /// Can also be set via the `CIRCUITS_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 268435456 (256 MB).
    #[arg(long, env = "CIRCUITS_MAX_FILE_SIZE", default_value = "268435456")]
    pub max_file_size: u64,

    /// Only log errors to stderr (incompatible with `--verbose`).
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log run metadata and per-root progress to stderr (incompatible with
    /// `--quiet`).
    #[arg(long, short = 'v', conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// Log level selected by `--quiet` / `--verbose`.
    pub fn log_level(&self) -> log::LevelFilter {
        if self.quiet {
            log::LevelFilter::Error
        } else if self.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        }
    }
}

#[cfg(test)]
mod tests;
