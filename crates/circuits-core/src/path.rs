//! The candidate circuit: the path from the search root to the vertex being
//! visited.
use crate::error::InvariantViolation;

/// A bounded stack of vertices.
///
/// The bound is the vertex count of the graph: an elementary path can never
/// hold more vertices than that, so exceeding it means the blocking guard
/// failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathStack {
    vertices: Vec<usize>,
    limit: usize,
}

impl PathStack {
    /// Creates an empty stack that may hold at most `limit` vertices.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(limit),
            limit,
        }
    }

    /// Pushes `vertex` on top of the stack.
    ///
    /// # Errors
    ///
    /// [`InvariantViolation::PathOverflow`] if the stack is already full.
    pub fn push(&mut self, vertex: usize) -> Result<(), InvariantViolation> {
        if self.vertices.len() >= self.limit {
            return Err(InvariantViolation::PathOverflow { limit: self.limit });
        }
        self.vertices.push(vertex);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<usize> {
        self.vertices.pop()
    }

    pub fn last(&self) -> Option<usize> {
        self.vertices.last().copied()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// The path from the bottom (the root) to the top of the stack.
    pub fn as_slice(&self) -> &[usize] {
        &self.vertices
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn push_pop_is_lifo() {
        let mut path = PathStack::with_limit(3);
        path.push(4).expect("room");
        path.push(7).expect("room");
        assert_eq!(path.last(), Some(7));
        assert_eq!(path.as_slice(), &[4, 7]);
        assert_eq!(path.pop(), Some(7));
        assert_eq!(path.pop(), Some(4));
        assert_eq!(path.pop(), None);
        assert!(path.is_empty());
    }

    #[test]
    fn push_beyond_limit_fails() {
        let mut path = PathStack::with_limit(1);
        path.push(0).expect("room");
        assert_eq!(
            path.push(1),
            Err(InvariantViolation::PathOverflow { limit: 1 })
        );
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn clear_empties() {
        let mut path = PathStack::with_limit(2);
        path.push(1).expect("room");
        path.clear();
        assert!(path.is_empty());
        assert_eq!(path.limit(), 2);
    }
}
