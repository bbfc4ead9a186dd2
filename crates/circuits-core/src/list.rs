//! Growable, order-preserving list with bulk removal by value.
//!
//! [`OrderedList`] backs both the adjacency lists of an
//! [`ArcGraph`](crate::graph::ArcGraph), where repeated values are meaningful
//! (multi-arcs), and the blocking sets of a
//! [`BlockingState`](crate::blocking::BlockingState), where callers keep
//! values unique by checking [`OrderedList::contains`] before every
//! [`OrderedList::push`].

/// An ordered multiset of values.
///
/// Insertion order is preserved by every operation, including
/// [`OrderedList::remove_all`]. No deduplication happens implicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedList<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> OrderedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of values currently stored, counting repeats.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends `value` at the end. Does not check for an existing copy.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes every value, keeping the allocation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> OrderedList<T> {
    /// Returns `true` if at least one copy of `value` is stored.
    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Removes every occurrence of `value` and returns how many were removed.
    ///
    /// The remaining values keep their relative order.
    pub fn remove_all(&mut self, value: &T) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item != value);
        before - self.items.len()
    }
}

impl<T> FromIterator<T> for OrderedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for OrderedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a OrderedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_list_is_empty() {
        let list: OrderedList<usize> = OrderedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert_eq!(list.first(), None);
    }

    #[test]
    fn push_keeps_duplicates_in_order() {
        let mut list = OrderedList::with_capacity(4);
        list.push(3);
        list.push(1);
        list.push(3);
        assert_eq!(list.as_slice(), &[3, 1, 3]);
        assert!(list.contains(&1));
        assert!(!list.contains(&2));
    }

    #[test]
    fn remove_all_returns_occurrence_count() {
        let mut list: OrderedList<usize> = [5, 2, 5, 7, 5, 2].into_iter().collect();
        assert_eq!(list.remove_all(&5), 3);
        assert_eq!(list.as_slice(), &[2, 7, 2]);
    }

    #[test]
    fn remove_all_preserves_relative_order() {
        let mut list: OrderedList<usize> = [9, 1, 4, 1, 8, 1, 3].into_iter().collect();
        assert_eq!(list.remove_all(&1), 3);
        assert_eq!(list.as_slice(), &[9, 4, 8, 3]);
    }

    #[test]
    fn remove_all_of_absent_value_is_noop() {
        let mut list: OrderedList<usize> = [1, 2, 3].into_iter().collect();
        assert_eq!(list.remove_all(&42), 0);
        assert_eq!(list.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn remove_all_can_empty_the_list() {
        let mut list: OrderedList<usize> = [6, 6, 6].into_iter().collect();
        assert_eq!(list.remove_all(&6), 3);
        assert!(list.is_empty());
    }

    #[test]
    fn clear_then_reuse() {
        let mut list: OrderedList<usize> = [1, 2].into_iter().collect();
        list.clear();
        assert!(list.is_empty());
        list.extend([4, 4]);
        assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![4, 4]);
    }
}
