//! A binary min-heap with an injected comparator: [`MinHeap`].
//!
//! Used as the frontier for Dijkstra and A*. Decrease-key is handled by
//! the *consumer* as "insert a fresher copy": when a better distance is
//! found for a queued element, a second entry is inserted rather than
//! updated in place, and pops of an already-finalized element are skipped
//! as stale. This trades at most one extra heap entry per relaxation for a
//! much simpler heap.

use std::cmp::Ordering;
use std::fmt;

/// Error returned by [`MinHeap::extract_min`] on an empty heap.
///
/// Internal misuse only: the search engines never pop past exhaustion, so
/// this does not surface through the public run API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyQueueError;

impl fmt::Display for EmptyQueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("extract_min on an empty queue")
    }
}

impl std::error::Error for EmptyQueueError {}

/// A binary min-heap over `T`, ordered by a comparator supplied at
/// construction.
///
/// Ties are broken by heap position, which is not insertion-stable.
pub struct MinHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    items: Vec<T>,
    cmp: C,
}

impl<T, C> MinHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Create an empty heap ordered by `cmp`.
    pub fn new(cmp: C) -> Self {
        Self { items: Vec::new(), cmp }
    }

    /// Create an empty heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the heap is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the minimum element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Insert an element in O(log n): append as the last leaf, then sift
    /// up by repeated parent comparisons.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the minimum element in O(log n): swap the root
    /// with the last leaf, remove it, then sift the new root down, always
    /// swapping with the smaller child.
    pub fn extract_min(&mut self) -> Result<T, EmptyQueueError> {
        if self.items.is_empty() {
            return Err(EmptyQueueError);
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let min = self.items.pop().ok_or(EmptyQueueError)?;
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if (self.cmp)(&self.items[i], &self.items[parent]) == Ordering::Less {
                self.items.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * i + 1;
            let right = 2 * i + 2;
            let mut smallest = i;
            if left < len && (self.cmp)(&self.items[left], &self.items[smallest]) == Ordering::Less {
                smallest = left;
            }
            if right < len && (self.cmp)(&self.items[right], &self.items[smallest]) == Ordering::Less
            {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.items.swap(i, smallest);
            i = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int_heap() -> MinHeap<i32, fn(&i32, &i32) -> Ordering> {
        MinHeap::new(i32::cmp)
    }

    #[test]
    fn pops_in_ascending_order() {
        let mut h = int_heap();
        for v in [5, 3, 8, 1, 9, 2, 7, 4, 6, 0] {
            h.insert(v);
        }
        let mut out = Vec::new();
        while let Ok(v) = h.extract_min() {
            out.push(v);
        }
        assert_eq!(out, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn empty_heap_reports_error() {
        let mut h = int_heap();
        assert_eq!(h.extract_min(), Err(EmptyQueueError));
        h.insert(1);
        assert_eq!(h.extract_min(), Ok(1));
        assert_eq!(h.extract_min(), Err(EmptyQueueError));
    }

    #[test]
    fn duplicate_keys_all_come_out() {
        let mut h = int_heap();
        for v in [2, 2, 1, 2, 1] {
            h.insert(v);
        }
        let mut out = Vec::new();
        while let Ok(v) = h.extract_min() {
            out.push(v);
        }
        assert_eq!(out, vec![1, 1, 2, 2, 2]);
    }

    #[test]
    fn comparator_is_injected() {
        // A reversed comparator turns the heap into a max-heap.
        let mut h: MinHeap<i32, _> = MinHeap::new(|a: &i32, b: &i32| b.cmp(a));
        for v in [3, 1, 4, 1, 5] {
            h.insert(v);
        }
        assert_eq!(h.extract_min(), Ok(5));
        assert_eq!(h.extract_min(), Ok(4));
    }

    #[test]
    fn interleaved_insert_and_extract() {
        let mut h = int_heap();
        h.insert(4);
        h.insert(2);
        assert_eq!(h.extract_min(), Ok(2));
        h.insert(1);
        h.insert(3);
        assert_eq!(h.extract_min(), Ok(1));
        assert_eq!(h.extract_min(), Ok(3));
        assert_eq!(h.extract_min(), Ok(4));
        assert!(h.is_empty());
    }

    #[test]
    fn peek_does_not_remove() {
        let mut h = int_heap();
        h.insert(2);
        h.insert(1);
        assert_eq!(h.peek(), Some(&1));
        assert_eq!(h.len(), 2);
    }
}
