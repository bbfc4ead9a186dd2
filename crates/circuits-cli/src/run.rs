//! The enumeration run behind `circuits <NUM_VERTICES>`.
//!
//! Parses the edge list, builds the graph, enumerates its circuits and writes
//! the result to stdout in the requested format. The work happens on a
//! dedicated thread whose stack is sized for the recursion depth the search
//! can reach on the given vertex count.
use std::cell::Cell;
use std::io::{self, BufWriter, Write};
use std::thread;
use std::time::Instant;

use circuits_core::{
    ArcGraph, CircuitStats, EdgeList, EnumerationConfig, InvariantViolation, enumerate,
    enumerate_parallel, enumerate_with, parse_edge_list, required_stack_size,
};
use serde::ser::{Error as _, Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::OutputFormat;
use crate::error::CliError;
use crate::format::{
    JsonHeader, header_entries, stats_entries, write_arc_echo, write_circuit,
    write_summary_human,
};

/// Settings for one run, resolved from the command line.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub vertex_count: usize,
    pub format: OutputFormat,
    pub count_only: bool,
    pub echo_arcs: bool,
    pub config: EnumerationConfig,
    /// Use the parallel driver (`--jobs`).
    pub parallel: bool,
}

// ---------------------------------------------------------------------------
// run
// ---------------------------------------------------------------------------

/// Runs the enumeration over `content` and writes the output to stdout.
///
/// # Errors
///
/// - [`CliError`] exit code 2 if an arc is out of range or stdout fails.
/// - [`CliError`] exit code 1 if the enumeration thread cannot be started or
///   the enumeration fails.
pub fn run(content: &str, options: &RunOptions) -> Result<(), CliError> {
    let stack_size = required_stack_size(options.vertex_count);
    thread::scope(|scope| {
        let handle = thread::Builder::new()
            .name("enumerate".to_owned())
            .stack_size(stack_size)
            .spawn_scoped(scope, || {
                let stdout = io::stdout();
                let mut out = BufWriter::new(stdout.lock());
                execute(content, options, &mut out)?;
                out.flush().map_err(stdout_error)
            })
            .map_err(|e| CliError::Enumeration {
                detail: format!("cannot start enumeration thread: {e}"),
            })?;
        handle.join().map_err(|_| CliError::Enumeration {
            detail: "enumeration thread panicked".to_owned(),
        })?
    })
}

/// Runs the enumeration over `content`, writing the output to `out`.
///
/// # Errors
///
/// See [`run`].
pub fn execute<W: Write>(
    content: &str,
    options: &RunOptions,
    out: &mut W,
) -> Result<(), CliError> {
    let list = parse_edge_list(content);
    warn_if_truncated(&list);

    let graph = ArcGraph::from_arcs(options.vertex_count, list.arcs.iter().copied())?;
    log::info!(
        "{} vertices, {} arcs, multi-arcs {}",
        graph.vertex_count(),
        graph.arc_count(),
        options.config.multi_arcs.as_str()
    );

    let started = Instant::now();
    match options.format {
        OutputFormat::Human => write_human(&graph, &list, options, out)?,
        OutputFormat::Json => write_json(&graph, &list, options, out)?,
    }
    log::info!("finished in {:.3?}", started.elapsed());
    Ok(())
}

// ---------------------------------------------------------------------------
// Output modes
// ---------------------------------------------------------------------------

fn write_human<W: Write>(
    graph: &ArcGraph,
    list: &EdgeList,
    options: &RunOptions,
    out: &mut W,
) -> Result<(), CliError> {
    if options.echo_arcs {
        write_arc_echo(out, options.vertex_count, &list.arcs).map_err(stdout_error)?;
    }

    let stats = if options.count_only {
        count(graph, options)?
    } else {
        enumerate_with(graph, &options.config, |circuit| {
            write_circuit(out, circuit).map_err(stdout_error)
        })?
    };
    log::info!("{} circuits", stats.total());

    write_summary_human(out, &stats, graph.arc_count()).map_err(stdout_error)
}

/// Writes the JSON report, streaming the circuit list while it is found.
fn write_json<W: Write>(
    graph: &ArcGraph,
    list: &EdgeList,
    options: &RunOptions,
    out: &mut W,
) -> Result<(), CliError> {
    let header = JsonHeader {
        vertex_count: graph.vertex_count(),
        arc_count: graph.arc_count(),
        policy: options.config.multi_arcs,
        arcs: options.echo_arcs.then_some(list.arcs.as_slice()),
    };

    let mut serializer = serde_json::Serializer::pretty(&mut *out);
    let mut map = (&mut serializer).serialize_map(None).map_err(json_error)?;
    for (key, value) in header_entries(&header) {
        map.serialize_entry(key, &value).map_err(json_error)?;
    }

    let stats = if options.count_only {
        count(graph, options)?
    } else {
        let stream = CircuitStream::new(graph, &options.config);
        let written = map.serialize_entry("circuits", &stream);
        stream.finish(written)?
    };
    log::info!("{} circuits", stats.total());

    for (key, value) in stats_entries(&stats) {
        map.serialize_entry(key, &value).map_err(json_error)?;
    }
    SerializeMap::end(map).map_err(json_error)?;
    writeln!(out).map_err(stdout_error)
}

/// Statistics only, on the parallel driver when requested.
fn count(graph: &ArcGraph, options: &RunOptions) -> Result<CircuitStats, CliError> {
    if options.parallel {
        Ok(enumerate_parallel(graph, &options.config)?)
    } else {
        Ok(enumerate(graph, &options.config)?)
    }
}

// ---------------------------------------------------------------------------
// Streamed circuit list
// ---------------------------------------------------------------------------

/// Why a streamed listing stopped early.
enum Halt<E> {
    Write(E),
    Invariant(InvariantViolation),
}

impl<E> From<InvariantViolation> for Halt<E> {
    fn from(e: InvariantViolation) -> Self {
        Halt::Invariant(e)
    }
}

/// The `circuits` array of the JSON report.
///
/// Serializing it runs the enumeration and writes every circuit as soon as
/// it is found, so the list is never held in memory. A failed write ends the
/// enumeration. The statistics are kept for [`CircuitStream::finish`].
struct CircuitStream<'a> {
    graph: &'a ArcGraph,
    config: &'a EnumerationConfig,
    outcome: Cell<Option<Result<CircuitStats, InvariantViolation>>>,
}

impl<'a> CircuitStream<'a> {
    fn new(graph: &'a ArcGraph, config: &'a EnumerationConfig) -> Self {
        Self {
            graph,
            config,
            outcome: Cell::new(None),
        }
    }

    /// Statistics of the enumeration, given the result of serializing the
    /// stream.
    fn finish(self, written: Result<(), serde_json::Error>) -> Result<CircuitStats, CliError> {
        match self.outcome.into_inner() {
            Some(Err(e)) => Err(e.into()),
            Some(Ok(stats)) => {
                written.map_err(json_error)?;
                Ok(stats)
            }
            None => {
                written.map_err(json_error)?;
                Err(CliError::Enumeration {
                    detail: "the circuit list was never serialized".to_owned(),
                })
            }
        }
    }
}

impl Serialize for CircuitStream<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(None)?;
        let listed = enumerate_with(self.graph, self.config, |circuit| {
            seq.serialize_element(circuit).map_err(Halt::Write)
        });
        match listed {
            Ok(stats) => {
                self.outcome.set(Some(Ok(stats)));
                seq.end()
            }
            Err(Halt::Write(e)) => Err(e),
            Err(Halt::Invariant(e)) => {
                let message = e.to_string();
                self.outcome.set(Some(Err(e)));
                Err(S::Error::custom(message))
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn warn_if_truncated(list: &EdgeList) {
    let Some(truncation) = &list.truncated else {
        return;
    };
    if truncation.unpaired {
        log::warn!(
            "ignoring unpaired trailing token {:?}; {} arcs read",
            truncation.token,
            list.arcs.len()
        );
    } else {
        log::warn!(
            "input ends at token {} ({:?}); {} arcs read",
            truncation.token_index + 1,
            truncation.token,
            list.arcs.len()
        );
    }
}

fn stdout_error(e: io::Error) -> CliError {
    CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    }
}

fn json_error(e: serde_json::Error) -> CliError {
    stdout_error(io::Error::from(e))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
