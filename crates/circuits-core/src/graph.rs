/// Adjacency-list multigraph over the vertices `0..n`.
///
/// [`ArcGraph`] stores, for every vertex, the ordered multiset of its arc
/// targets. Self-arcs and repeated arcs are kept exactly as given: a repeated
/// pair is a multi-arc, not an input error. The graph is immutable once
/// built.
///
/// [`Successors`] is the traversal view the search engine reads. It is
/// derived from an [`ArcGraph`] under a [`MultiArcPolicy`] once per run and
/// shared by every search of that run.
use std::collections::HashSet;

use petgraph::graph::{DiGraph, IndexType, NodeIndex};

use crate::config::MultiArcPolicy;
use crate::error::GraphBuildError;
use crate::list::OrderedList;

// ---------------------------------------------------------------------------
// ArcGraph
// ---------------------------------------------------------------------------

/// A directed multigraph with self-arcs, indexed by `usize` vertex ordinals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcGraph {
    adjacency: Vec<OrderedList<usize>>,
    arc_count: usize,
}

impl ArcGraph {
    /// Creates a graph with `vertex_count` vertices and no arcs.
    pub fn empty(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![OrderedList::new(); vertex_count],
            arc_count: 0,
        }
    }

    /// Builds a graph from `(source, target)` pairs, in order.
    ///
    /// The order of `arcs` fixes the adjacency order of every vertex, which in
    /// turn fixes the order circuits are discovered in.
    ///
    /// # Errors
    ///
    /// [`GraphBuildError::VertexOutOfRange`] for the first arc with an
    /// endpoint `>= vertex_count`.
    pub fn from_arcs<I>(vertex_count: usize, arcs: I) -> Result<Self, GraphBuildError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::empty(vertex_count);
        for (source, target) in arcs {
            graph.add_arc(source, target)?;
        }
        Ok(graph)
    }

    /// Builds a graph from a petgraph [`DiGraph`], keeping node indices and
    /// edge insertion order. Node and edge weights are ignored.
    pub fn from_petgraph<N, E, Ix: IndexType>(graph: &DiGraph<N, E, Ix>) -> Self {
        let mut result = Self::empty(graph.node_count());
        for edge in graph.raw_edges() {
            let (source, target) = (edge.source().index(), edge.target().index());
            result.adjacency[source].push(target);
            result.arc_count += 1;
        }
        result
    }

    /// Converts to a petgraph [`DiGraph`] with one node per vertex and one
    /// edge per arc (multi-arcs included).
    pub fn to_petgraph(&self) -> DiGraph<(), ()> {
        let mut graph = DiGraph::with_capacity(self.vertex_count(), self.arc_count);
        for _ in 0..self.vertex_count() {
            graph.add_node(());
        }
        for (source, target) in self.arcs() {
            graph.add_edge(NodeIndex::new(source), NodeIndex::new(target), ());
        }
        graph
    }

    fn add_arc(&mut self, source: usize, target: usize) -> Result<(), GraphBuildError> {
        let vertex_count = self.vertex_count();
        if source >= vertex_count || target >= vertex_count {
            return Err(GraphBuildError::VertexOutOfRange {
                source,
                target,
                vertex_count,
            });
        }
        self.adjacency[source].push(target);
        self.arc_count += 1;
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of arcs, i.e. the sum of out-degrees with multi-arcs
    /// counted once per occurrence.
    pub fn arc_count(&self) -> usize {
        self.arc_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Arc targets of `vertex` in insertion order, repeats included.
    ///
    /// # Panics
    ///
    /// If `vertex >= self.vertex_count()`.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        self.adjacency[vertex].as_slice()
    }

    /// Arc targets of `vertex` with repeats dropped, in order of first
    /// occurrence.
    ///
    /// # Panics
    ///
    /// If `vertex >= self.vertex_count()`.
    pub fn distinct_neighbors(&self, vertex: usize) -> Vec<usize> {
        let targets = self.neighbors(vertex);
        let mut seen: HashSet<usize> = HashSet::with_capacity(targets.len());
        targets
            .iter()
            .copied()
            .filter(|&target| seen.insert(target))
            .collect()
    }

    /// Every arc as `(source, target)`, grouped by source in ascending order
    /// and in insertion order within a source.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(source, targets)| targets.iter().map(move |&target| (source, target)))
    }
}

// ---------------------------------------------------------------------------
// Successors
// ---------------------------------------------------------------------------

/// Per-vertex successor lists as traversed by the search engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successors {
    lists: Vec<Vec<usize>>,
    policy: MultiArcPolicy,
}

impl Successors {
    /// Derives the successor lists of `graph` under `policy`.
    pub fn new(graph: &ArcGraph, policy: MultiArcPolicy) -> Self {
        let lists = (0..graph.vertex_count())
            .map(|v| match policy {
                MultiArcPolicy::Collapse => graph.distinct_neighbors(v),
                MultiArcPolicy::Multiplicity => graph.neighbors(v).to_vec(),
            })
            .collect();
        Self { lists, policy }
    }

    /// Successors of `vertex`.
    ///
    /// # Panics
    ///
    /// If `vertex >= self.vertex_count()`.
    pub fn of(&self, vertex: usize) -> &[usize] {
        &self.lists[vertex]
    }

    pub fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    pub fn policy(&self) -> MultiArcPolicy {
        self.policy
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
