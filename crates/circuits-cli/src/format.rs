/// Output rendering: human-readable text and JSON.
///
/// - **Human mode** (default): the optional arc echo, one `Cycle:` block per
///   circuit in discovery order, then a summary of the statistics.
/// - **JSON mode**: a single pretty-printed object. The header fields come
///   first, then the circuit list (unless suppressed) and the statistics.
///
/// Every writer takes a generic [`Write`] so tests can render into a buffer.
use std::io::{self, Write};

use circuits_core::{CircuitStats, MultiArcPolicy};
use serde_json::{Map, Value, json};

// ---------------------------------------------------------------------------
// Human mode
// ---------------------------------------------------------------------------

/// Writes `num_vertices = N` followed by one `source -> target` line per arc.
pub fn write_arc_echo<W: Write>(
    w: &mut W,
    vertex_count: usize,
    arcs: &[(usize, usize)],
) -> io::Result<()> {
    writeln!(w, "num_vertices = {vertex_count}")?;
    for (source, target) in arcs {
        writeln!(w, "{source} -> {target}")?;
    }
    Ok(())
}

/// Writes one circuit as a `Cycle:` header and a line of vertices.
pub fn write_circuit<W: Write>(w: &mut W, circuit: &[usize]) -> io::Result<()> {
    writeln!(w, "Cycle:")?;
    writeln!(w, "{}", join_vertices(circuit))
}

/// Writes the summary block.
pub fn write_summary_human<W: Write>(
    w: &mut W,
    stats: &CircuitStats,
    arc_count: usize,
) -> io::Result<()> {
    writeln!(w, "circuits: {}", stats.total())?;
    writeln!(w, "arcs: {arc_count}")?;
    writeln!(w, "longest: {}", stats.longest_len())?;
    if !stats.longest().is_empty() {
        writeln!(w, "  {}", join_vertices(stats.longest()))?;
    }

    writeln!(w, "length histogram:")?;
    for (length, count) in stats.lengths() {
        writeln!(w, "  {length}: {count}")?;
    }

    writeln!(w, "vertex popularity:")?;
    for (length, _) in stats.lengths() {
        let Some(row) = stats.popularity_row(length) else {
            continue;
        };
        let pairs: Vec<String> = row
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(vertex, count)| format!("{vertex}:{count}"))
            .collect();
        writeln!(w, "  {length}: {}", pairs.join(" "))?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON mode
// ---------------------------------------------------------------------------

/// Report fields that are known before enumeration starts.
#[derive(Debug)]
pub struct JsonHeader<'a> {
    pub vertex_count: usize,
    pub arc_count: usize,
    pub policy: MultiArcPolicy,
    /// The echoed arcs; `None` without `--echo-arcs`.
    pub arcs: Option<&'a [(usize, usize)]>,
}

/// Leading fields of the JSON report, in output order.
pub fn header_entries(header: &JsonHeader<'_>) -> Vec<(&'static str, Value)> {
    let mut entries = vec![
        ("num_vertices", json!(header.vertex_count)),
        ("num_arcs", json!(header.arc_count)),
        ("multi_arcs", json!(header.policy.as_str())),
    ];
    if let Some(arcs) = header.arcs {
        entries.push(("arcs", json!(arcs)));
    }
    entries
}

/// Trailing fields of the JSON report, written once the run is over.
pub fn stats_entries(stats: &CircuitStats) -> Vec<(&'static str, Value)> {
    let mut histogram = Map::new();
    let mut popularity = Map::new();
    for (length, count) in stats.lengths() {
        histogram.insert(length.to_string(), json!(count));
        if let Some(row) = stats.popularity_row(length) {
            popularity.insert(length.to_string(), json!(row));
        }
    }

    vec![
        ("total", json!(stats.total())),
        ("length_histogram", Value::Object(histogram)),
        ("vertex_popularity", Value::Object(popularity)),
        ("longest", json!(stats.longest())),
    ]
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn join_vertices(vertices: &[usize]) -> String {
    vertices
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
