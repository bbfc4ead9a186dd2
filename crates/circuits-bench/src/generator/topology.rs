//! Topology builders: the seeded local multigraph used by the size tiers,
//! plus fixed shapes with known circuit counts.

use circuits_core::ArcGraph;
use rand::Rng;
use rand::rngs::StdRng;

use super::GeneratorConfig;

/// Builds the random local multigraph described by `config`.
///
/// Arc endpoints are always in range, so construction cannot fail.
pub fn build_local_multigraph(config: &GeneratorConfig, rng: &mut StdRng) -> ArcGraph {
    let n = config.num_vertices;
    if n == 0 {
        return ArcGraph::empty(0);
    }
    let window = config.window.clamp(1, n.max(2) - 1);

    let mut arcs: Vec<(usize, usize)> = Vec::with_capacity(config.num_arcs);
    for _ in 0..config.num_arcs {
        let roll: f64 = rng.r#gen();
        if !arcs.is_empty() && roll < config.multi_arc_ratio {
            let repeat = arcs[rng.gen_range(0..arcs.len())];
            arcs.push(repeat);
            continue;
        }
        let source = rng.gen_range(0..n);
        if n == 1 || roll < config.multi_arc_ratio + config.self_arc_ratio {
            arcs.push((source, source));
            continue;
        }
        let offset = rng.gen_range(1..=window);
        let target = if rng.gen_bool(0.5) {
            (source + offset) % n
        } else {
            (source + n - offset) % n
        };
        arcs.push((source, target));
    }

    from_in_range(n, arcs)
}

/// Every ordered pair of distinct vertices joined by one arc.
///
/// Has `sum over k in 2..=n of C(n, k) * (k - 1)!` elementary circuits.
pub fn complete_digraph(n: usize) -> ArcGraph {
    let arcs = (0..n).flat_map(|a| (0..n).filter(move |&b| b != a).map(move |b| (a, b)));
    from_in_range(n, arcs)
}

/// A single directed cycle `0 -> 1 -> ... -> n-1 -> 0`.
pub fn ring(n: usize) -> ArcGraph {
    from_in_range(n, (0..n).map(|i| (i, (i + 1) % n)))
}

/// Vertices `0..n` where every vertex has a self-arc and an arc to every
/// higher vertex. Acyclic apart from the `n` self-arcs.
pub fn self_looped_dag(n: usize) -> ArcGraph {
    let arcs = (0..n).flat_map(|a| (a..n).map(move |b| (a, b)));
    from_in_range(n, arcs)
}

fn from_in_range<I>(n: usize, arcs: I) -> ArcGraph
where
    I: IntoIterator<Item = (usize, usize)>,
{
    // Callers only produce endpoints below `n`.
    ArcGraph::from_arcs(n, arcs).unwrap_or_else(|_| ArcGraph::empty(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_digraph_arc_count() {
        assert_eq!(complete_digraph(5).arc_count(), 20);
        assert_eq!(complete_digraph(1).arc_count(), 0);
    }

    #[test]
    fn ring_and_dag_shapes() {
        assert_eq!(ring(4).neighbors(3), &[0]);
        let dag = self_looped_dag(3);
        assert_eq!(dag.neighbors(0), &[0, 1, 2]);
        assert_eq!(dag.arc_count(), 6);
    }
}
