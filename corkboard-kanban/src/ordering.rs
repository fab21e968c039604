//! Ordered child-id sequences.
//!
//! A parent (workspace, board, list) owns one `ChildSequence` per child kind.
//! The index of an id inside the sequence is its display position; entities
//! never store a rank of their own. Every mutation keeps the sequence free of
//! duplicates.

use serde::{Deserialize, Serialize};

/// Clamp a requested index into `0..=len`.
///
/// Negative targets land at the front, targets past the end append.
pub fn clamp_index(target: i64, len: usize) -> usize {
    if target <= 0 {
        0
    } else {
        (target as u64).min(len as u64) as usize
    }
}

/// An ordered, duplicate-free sequence of child ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChildSequence<T>(Vec<T>);

impl<T> Default for ChildSequence<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T: PartialEq + Clone> ChildSequence<T> {
    /// An empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of children
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no children
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate children in display order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    /// Children in display order
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Child at `index`
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Whether `child` is in this sequence
    pub fn contains(&self, child: &T) -> bool {
        self.0.contains(child)
    }

    /// Position of `child`, if present
    pub fn position(&self, child: &T) -> Option<usize> {
        self.0.iter().position(|c| c == child)
    }

    /// Append `child` at the end and return its position.
    ///
    /// A child already present keeps its place.
    pub fn append(&mut self, child: T) -> usize {
        if let Some(existing) = self.position(&child) {
            return existing;
        }
        self.0.push(child);
        self.0.len() - 1
    }

    /// Remove `child`, returning the index it occupied.
    ///
    /// Absent children are a no-op so cascades can call this repeatedly.
    pub fn remove(&mut self, child: &T) -> Option<usize> {
        let index = self.position(child)?;
        self.0.remove(index);
        Some(index)
    }

    /// Insert `child` at `clamp(target, 0, len)` and return the index used.
    ///
    /// If the child is already present it is moved instead of duplicated.
    pub fn insert_clamped(&mut self, child: T, target: i64) -> usize {
        self.remove(&child);
        let index = clamp_index(target, self.0.len());
        self.0.insert(index, child);
        index
    }

    /// Move an existing `child` to `target` within this sequence.
    ///
    /// Returns the new index, or `None` if the child is not a member.
    pub fn move_to(&mut self, child: &T, target: i64) -> Option<usize> {
        self.position(child)?;
        Some(self.insert_clamped(child.clone(), target))
    }

    /// Ids that occur more than once
    pub fn duplicates(&self) -> Vec<&T> {
        let mut seen: Vec<&T> = Vec::with_capacity(self.0.len());
        let mut dups = Vec::new();
        for child in &self.0 {
            if seen.contains(&child) {
                dups.push(child);
            } else {
                seen.push(child);
            }
        }
        dups
    }
}

impl<T: PartialEq + Clone> FromIterator<T> for ChildSequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut seq = Self::new();
        for child in iter {
            seq.append(child);
        }
        seq
    }
}

impl<'a, T> IntoIterator for &'a ChildSequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(items: &[&str]) -> ChildSequence<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn names(seq: &ChildSequence<String>) -> Vec<&str> {
        seq.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_clamp_index() {
        assert_eq!(clamp_index(-3, 4), 0);
        assert_eq!(clamp_index(0, 4), 0);
        assert_eq!(clamp_index(2, 4), 2);
        assert_eq!(clamp_index(4, 4), 4);
        assert_eq!(clamp_index(99, 4), 4);
        assert_eq!(clamp_index(i64::MAX, 0), 0);
    }

    #[test]
    fn test_append_returns_previous_length() {
        let mut s = ChildSequence::new();
        assert_eq!(s.append("a".to_string()), 0);
        assert_eq!(s.append("b".to_string()), 1);
        // already present: no duplicate
        assert_eq!(s.append("a".to_string()), 0);
        assert_eq!(names(&s), ["a", "b"]);
    }

    #[test]
    fn test_remove_preserves_order_and_tolerates_absent() {
        let mut s = seq(&["a", "b", "c"]);
        assert_eq!(s.remove(&"b".to_string()), Some(1));
        assert_eq!(names(&s), ["a", "c"]);
        assert_eq!(s.remove(&"b".to_string()), None);
        assert_eq!(names(&s), ["a", "c"]);
    }

    #[test]
    fn test_move_within_sequence() {
        let mut s = seq(&["a", "b", "c", "d"]);
        assert_eq!(s.move_to(&"a".to_string(), 2), Some(2));
        assert_eq!(names(&s), ["b", "c", "a", "d"]);

        assert_eq!(s.move_to(&"d".to_string(), -1), Some(0));
        assert_eq!(names(&s), ["d", "b", "c", "a"]);

        assert_eq!(s.move_to(&"b".to_string(), 100), Some(3));
        assert_eq!(names(&s), ["d", "c", "a", "b"]);

        assert_eq!(s.move_to(&"zzz".to_string(), 0), None);
    }

    #[test]
    fn test_move_to_current_index_is_identity() {
        let original = seq(&["a", "b", "c"]);
        for (i, id) in ["a", "b", "c"].iter().enumerate() {
            let mut s = original.clone();
            s.move_to(&id.to_string(), i as i64);
            assert_eq!(s, original);
        }
    }

    #[test]
    fn test_insert_clamped_does_not_duplicate() {
        let mut s = seq(&["a", "b"]);
        s.insert_clamped("a".to_string(), 5);
        assert_eq!(names(&s), ["b", "a"]);
        assert!(s.duplicates().is_empty());
    }
}
