//! Insertion-ordered sets of ids (board members, card assignees)

use serde::{Deserialize, Serialize};

/// A set of ids that remembers insertion order.
///
/// Each id appears at most once; inserting an existing id is a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdSet<T>(Vec<T>);

impl<T> Default for IdSet<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T: PartialEq> IdSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `id`; returns false if it was already present
    pub fn insert(&mut self, id: T) -> bool {
        if self.0.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    /// Remove `id`; returns false if it was not present
    pub fn remove(&mut self, id: &T) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| existing != id);
        self.0.len() != before
    }

    pub fn contains(&self, id: &T) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// True if any id occurs twice (only possible via deserialization)
    pub fn has_duplicates(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .any(|(i, id)| self.0[..i].contains(id))
    }
}

impl<T: PartialEq> FromIterator<T> for IdSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl<'a, T> IntoIterator for &'a IdSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_idempotent() {
        let mut set = IdSet::new();
        assert!(set.insert("user-2"));
        assert!(!set.insert("user-2"));
        assert_eq!(set.as_slice(), ["user-2"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut set: IdSet<&str> = ["a", "b"].into_iter().collect();
        assert!(!set.remove(&"c"));
        assert!(set.remove(&"a"));
        assert_eq!(set.as_slice(), ["b"]);
    }

    #[test]
    fn test_detects_deserialized_duplicates() {
        let set: IdSet<String> = serde_json::from_str(r#"["a","b","a"]"#).unwrap();
        assert!(set.has_duplicates());
    }
}
