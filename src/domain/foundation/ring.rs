//! Fixed-capacity ring buffer with oldest-first eviction.
//!
//! Backs every bounded sequence in a journey (mood history, recently served
//! items). Capacity is fixed at construction so the length bound holds by
//! construction: pushing into a full ring overwrites the oldest slot.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Fixed-capacity FIFO ring backed by a slot arena and a head index.
#[derive(Debug, Clone)]
pub struct BoundedRing<T> {
    slots: Vec<T>,
    /// Index of the oldest element once the arena is full.
    head: usize,
    capacity: usize,
}

impl<T> BoundedRing<T> {
    /// Creates an empty ring holding at most `capacity` elements.
    ///
    /// A zero-capacity ring accepts pushes and retains nothing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            head: 0,
            capacity,
        }
    }

    /// Appends an element, returning the evicted oldest element if full.
    pub fn push(&mut self, value: T) -> Option<T> {
        if self.capacity == 0 {
            return Some(value);
        }
        if self.slots.len() < self.capacity {
            self.slots.push(value);
            return None;
        }
        let evicted = std::mem::replace(&mut self.slots[self.head], value);
        self.head = (self.head + 1) % self.capacity;
        Some(evicted)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        let (newer, older) = self.slots.split_at(self.head);
        older.iter().chain(newer.iter())
    }

    /// Iterates the `n` most recent elements, newest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &T> + '_ {
        self.iter().rev().take(n)
    }

    /// Returns the newest element.
    pub fn latest(&self) -> Option<&T> {
        self.iter().next_back()
    }

    /// Returns the oldest element.
    pub fn oldest(&self) -> Option<&T> {
        self.iter().next()
    }
}

impl<T: Clone> BoundedRing<T> {
    /// Copies the contents into a Vec, oldest first.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for BoundedRing<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity == other.capacity && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BoundedRing<T> {}

impl<T: Serialize> Serialize for BoundedRing<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let items: Vec<&T> = self.iter().collect();
        let mut state = serializer.serialize_struct("BoundedRing", 2)?;
        state.serialize_field("capacity", &self.capacity)?;
        state.serialize_field("items", &items)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn push_below_capacity_keeps_everything() {
        let mut ring = BoundedRing::with_capacity(3);
        assert_eq!(ring.push(1), None);
        assert_eq!(ring.push(2), None);
        assert_eq!(ring.to_vec(), vec![1, 2]);
        assert_eq!(ring.oldest(), Some(&1));
        assert_eq!(ring.latest(), Some(&2));
    }

    #[test]
    fn push_when_full_evicts_oldest() {
        let mut ring = BoundedRing::with_capacity(3);
        for i in 1..=3 {
            ring.push(i);
        }
        assert_eq!(ring.push(4), Some(1));
        assert_eq!(ring.push(5), Some(2));
        assert_eq!(ring.to_vec(), vec![3, 4, 5]);
        assert_eq!(ring.len(), 3);
    }

    #[test]
    fn recent_returns_newest_first() {
        let mut ring = BoundedRing::with_capacity(4);
        for i in 1..=6 {
            ring.push(i);
        }
        let recent: Vec<_> = ring.recent(2).copied().collect();
        assert_eq!(recent, vec![6, 5]);
    }

    #[test]
    fn zero_capacity_retains_nothing() {
        let mut ring = BoundedRing::with_capacity(0);
        assert_eq!(ring.push("a"), Some("a"));
        assert!(ring.is_empty());
        assert_eq!(ring.latest(), None);
    }

    #[test]
    fn equality_ignores_physical_layout() {
        let mut wrapped = BoundedRing::with_capacity(2);
        for i in 1..=3 {
            wrapped.push(i);
        }
        let mut straight = BoundedRing::with_capacity(2);
        straight.push(2);
        straight.push(3);
        assert_eq!(wrapped, straight);
    }

    #[test]
    fn serializes_in_logical_order() {
        let mut ring = BoundedRing::with_capacity(2);
        for i in 1..=3 {
            ring.push(i);
        }
        let json = serde_json::to_string(&ring).unwrap();
        assert_eq!(json, r#"{"capacity":2,"items":[2,3]}"#);
    }

    proptest! {
        #[test]
        fn length_never_exceeds_capacity(cap in 0usize..25, values in prop::collection::vec(any::<i32>(), 0..100)) {
            let mut ring = BoundedRing::with_capacity(cap);
            for v in &values {
                ring.push(*v);
                prop_assert!(ring.len() <= cap);
            }
            let expected: Vec<i32> = values.iter().rev().take(cap).rev().copied().collect();
            prop_assert_eq!(ring.to_vec(), expected);
        }
    }
}
