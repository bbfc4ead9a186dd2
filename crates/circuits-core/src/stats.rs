/// Aggregate statistics over every circuit found in a run.
///
/// [`CircuitStats`] is updated synchronously each time the search engine
/// closes a circuit, and is the final output of an enumeration:
///
/// - total number of circuits;
/// - histogram of circuit lengths (`1..=n`; length `0` cannot occur);
/// - vertex popularity: for each length, how many circuits of that length
///   contain each vertex;
/// - the first longest circuit in discovery order. Only a strictly longer
///   circuit replaces it, and it is stored as an independent copy of the path
///   at discovery time.
///
/// The invariant `total == sum(length_histogram)` holds after every call.
use serde::Serialize;

use crate::error::InvariantViolation;

/// Circuit counters for a graph of a fixed vertex count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CircuitStats {
    vertex_count: usize,
    total: u64,
    /// Indexed by circuit length; `length_histogram.len() == vertex_count + 1`.
    length_histogram: Vec<u64>,
    /// Indexed by `[length][vertex]`. A row stays empty until the first
    /// circuit of that length is recorded.
    vertex_popularity: Vec<Vec<u64>>,
    longest: Vec<usize>,
}

impl CircuitStats {
    /// Creates zeroed statistics for a graph of `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            total: 0,
            length_histogram: vec![0; vertex_count + 1],
            vertex_popularity: vec![Vec::new(); vertex_count + 1],
            longest: Vec::new(),
        }
    }

    /// Records one circuit, given as its vertex sequence from the root.
    ///
    /// Nothing is updated when the circuit is rejected.
    ///
    /// # Errors
    ///
    /// - [`InvariantViolation::CircuitLengthOutOfRange`] if `circuit` is empty
    ///   or longer than the vertex count.
    /// - [`InvariantViolation::VertexOutOfRange`] if `circuit` names a vertex
    ///   `>= vertex_count`.
    pub fn record(&mut self, circuit: &[usize]) -> Result<(), InvariantViolation> {
        let length = circuit.len();
        if length == 0 || length > self.vertex_count {
            return Err(InvariantViolation::CircuitLengthOutOfRange {
                length,
                vertex_count: self.vertex_count,
            });
        }
        if let Some(&vertex) = circuit.iter().find(|&&v| v >= self.vertex_count) {
            return Err(InvariantViolation::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count,
            });
        }

        self.total += 1;
        self.length_histogram[length] += 1;

        let row = &mut self.vertex_popularity[length];
        if row.is_empty() {
            row.resize(self.vertex_count, 0);
        }
        for &vertex in circuit {
            row[vertex] += 1;
        }

        if length > self.longest.len() {
            self.longest = circuit.to_vec();
        }
        Ok(())
    }

    /// Folds `other` into `self`.
    ///
    /// Counters are summed. The longest circuit becomes the strictly longer
    /// of the two; on equal length the one with the lower root (its first
    /// vertex) is kept. Since the sequential driver visits roots in ascending
    /// order, merging per-root or per-worker results this way reproduces its
    /// first-found longest circuit, provided no root contributes to both
    /// sides.
    ///
    /// # Errors
    ///
    /// [`InvariantViolation::GraphMismatch`] if the vertex counts differ.
    pub fn merge(&mut self, other: &CircuitStats) -> Result<(), InvariantViolation> {
        if other.vertex_count != self.vertex_count {
            return Err(InvariantViolation::GraphMismatch {
                expected: self.vertex_count,
                actual: other.vertex_count,
            });
        }

        self.total += other.total;
        for (mine, theirs) in self.length_histogram.iter_mut().zip(&other.length_histogram) {
            *mine += theirs;
        }
        for (mine, theirs) in self
            .vertex_popularity
            .iter_mut()
            .zip(&other.vertex_popularity)
        {
            if theirs.is_empty() {
                continue;
            }
            if mine.is_empty() {
                mine.resize(self.vertex_count, 0);
            }
            for (m, t) in mine.iter_mut().zip(theirs) {
                *m += t;
            }
        }

        let replace = match (other.longest.first(), self.longest.first()) {
            (None, _) => false,
            (Some(_), None) => true,
            (Some(their_root), Some(my_root)) => {
                other.longest.len() > self.longest.len()
                    || (other.longest.len() == self.longest.len() && their_root < my_root)
            }
        };
        if replace {
            self.longest.clone_from(&other.longest);
        }
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Number of circuits recorded.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// The full histogram, indexed by length (`0..=vertex_count`).
    pub fn length_histogram(&self) -> &[u64] {
        &self.length_histogram
    }

    /// Number of circuits of exactly `length` vertices; `0` for any length
    /// outside `1..=vertex_count`.
    pub fn length_count(&self, length: usize) -> u64 {
        self.length_histogram.get(length).copied().unwrap_or(0)
    }

    /// Non-zero histogram buckets as `(length, count)`, ascending by length.
    pub fn lengths(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.length_histogram
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .map(|(length, &count)| (length, count))
    }

    /// How many circuits of `length` vertices contain `vertex`.
    pub fn popularity(&self, length: usize, vertex: usize) -> u64 {
        self.vertex_popularity
            .get(length)
            .and_then(|row| row.get(vertex))
            .copied()
            .unwrap_or(0)
    }

    /// Per-vertex counts for circuits of `length` vertices, or `None` when no
    /// such circuit was recorded.
    pub fn popularity_row(&self, length: usize) -> Option<&[u64]> {
        self.vertex_popularity
            .get(length)
            .filter(|row| !row.is_empty())
            .map(Vec::as_slice)
    }

    /// The first circuit found among the longest ones; empty if none.
    pub fn longest(&self) -> &[usize] {
        &self.longest
    }

    pub fn longest_len(&self) -> usize {
        self.longest.len()
    }

    /// Sum of all histogram buckets; always equal to [`CircuitStats::total`].
    pub fn histogram_sum(&self) -> u64 {
        self.length_histogram.iter().sum()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
