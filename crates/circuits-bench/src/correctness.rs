//! Reference enumeration and invariant checkers for correctness validation.
//!
//! [`reference_circuits`] is deliberately naive: for every root `r` it builds
//! the petgraph subgraph induced on vertices `>= r` (repeated arcs merged)
//! and asks [`petgraph::algo::all_simple_paths`] for every path from a
//! successor of `r` back to `r`. It shares no code with the engine.

use std::collections::HashSet;

use circuits_core::{ArcGraph, CircuitStats};
use petgraph::algo::all_simple_paths;
use petgraph::graph::{DiGraph, NodeIndex};

/// Every elementary circuit of `graph`, each starting at its minimum vertex,
/// sorted lexicographically. Repeated arcs count once.
pub fn reference_circuits(graph: &ArcGraph) -> Vec<Vec<usize>> {
    let n = graph.vertex_count();
    let mut circuits = Vec::new();

    for root in 0..n {
        let mut sub: DiGraph<usize, ()> = DiGraph::new();
        let nodes: Vec<NodeIndex> = (root..n).map(|v| sub.add_node(v)).collect();
        let index = |v: usize| nodes[v - root];
        for (source, target) in graph.arcs() {
            if source >= root && target >= root {
                sub.update_edge(index(source), index(target), ());
            }
        }

        let root_index = index(root);
        let starts: Vec<NodeIndex> = sub.neighbors(root_index).collect();
        for start in starts {
            if start == root_index {
                circuits.push(vec![root]);
                continue;
            }
            for path in all_simple_paths::<Vec<NodeIndex>, _>(&sub, start, root_index, 0, None) {
                let mut circuit = Vec::with_capacity(path.len());
                circuit.push(root);
                circuit.extend(path[..path.len() - 1].iter().map(|&i| sub[i]));
                circuits.push(circuit);
            }
        }
    }

    circuits.sort();
    circuits
}

/// Statistics recorded from `circuits` in the given order.
///
/// # Errors
///
/// A message naming the first circuit the collector rejects.
pub fn stats_from(vertex_count: usize, circuits: &[Vec<usize>]) -> Result<CircuitStats, String> {
    let mut stats = CircuitStats::new(vertex_count);
    for circuit in circuits {
        stats
            .record(circuit)
            .map_err(|e| format!("circuit {circuit:?} rejected: {e}"))?;
    }
    Ok(stats)
}

/// Verifies that `circuit` is elementary in `graph`:
/// - non-empty and starts at its minimum vertex
/// - no repeated vertex
/// - each consecutive pair, and the last-to-first pair, is a real arc
pub fn check_circuit(graph: &ArcGraph, circuit: &[usize]) -> Result<(), String> {
    let Some(&root) = circuit.first() else {
        return Err("circuit is empty".to_owned());
    };
    if circuit.iter().any(|&v| v >= graph.vertex_count()) {
        return Err(format!("circuit {circuit:?} leaves the graph"));
    }
    if circuit.iter().any(|&v| v < root) {
        return Err(format!("circuit {circuit:?} does not start at its minimum"));
    }
    let unique: HashSet<_> = circuit.iter().collect();
    if unique.len() != circuit.len() {
        return Err(format!("circuit {circuit:?} repeats a vertex"));
    }
    for (i, &v) in circuit.iter().enumerate() {
        let next = circuit[(i + 1) % circuit.len()];
        if !graph.neighbors(v).contains(&next) {
            return Err(format!("circuit {circuit:?} uses missing arc {v} -> {next}"));
        }
    }
    Ok(())
}

/// Verifies the internal consistency of `stats`:
/// - the histogram sums to the total and bucket `0` is empty
/// - each popularity row sums to `length * count`
/// - the longest circuit has the largest non-empty length
pub fn check_stats(stats: &CircuitStats) -> Result<(), String> {
    if stats.histogram_sum() != stats.total() {
        return Err(format!(
            "histogram sums to {}, total is {}",
            stats.histogram_sum(),
            stats.total()
        ));
    }
    if stats.length_count(0) != 0 {
        return Err("length-0 bucket is non-empty".to_owned());
    }
    for (length, count) in stats.lengths() {
        let row = stats
            .popularity_row(length)
            .ok_or_else(|| format!("no popularity row for length {length}"))?;
        let memberships: u64 = row.iter().sum();
        if memberships != count * length as u64 {
            return Err(format!(
                "popularity row {length} sums to {memberships}, expected {}",
                count * length as u64
            ));
        }
    }
    let longest_bucket = stats.lengths().map(|(length, _)| length).max().unwrap_or(0);
    if stats.longest_len() != longest_bucket {
        return Err(format!(
            "longest circuit has {} vertices, largest bucket is {longest_bucket}",
            stats.longest_len()
        ));
    }
    Ok(())
}

/// Compares engine statistics to reference statistics field by field.
///
/// The longest circuit is compared by length only, since discovery order is
/// engine-specific.
pub fn check_matches_reference(
    actual: &CircuitStats,
    reference: &CircuitStats,
) -> Result<(), String> {
    if actual.total() != reference.total() {
        return Err(format!(
            "total mismatch: engine={}, reference={}",
            actual.total(),
            reference.total()
        ));
    }
    if actual.length_histogram() != reference.length_histogram() {
        return Err(format!(
            "histogram mismatch: engine={:?}, reference={:?}",
            actual.length_histogram(),
            reference.length_histogram()
        ));
    }
    for length in 1..=actual.vertex_count() {
        if actual.popularity_row(length) != reference.popularity_row(length) {
            return Err(format!("popularity mismatch at length {length}"));
        }
    }
    if actual.longest_len() != reference.longest_len() {
        return Err(format!(
            "longest length mismatch: engine={}, reference={}",
            actual.longest_len(),
            reference.longest_len()
        ));
    }
    Ok(())
}
