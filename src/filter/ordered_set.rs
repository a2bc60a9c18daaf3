//! Insertion-ordered string set used for facet selections.

use std::collections::HashSet;

/// A set of strings that iterates in insertion order.
///
/// Removing and re-inserting a key moves it to the end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderedSet {
    order: Vec<String>,
    index: HashSet<String>,
}

impl OrderedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `key`, returning `false` if it was already present.
    pub fn insert(&mut self, key: &str) -> bool {
        if self.index.contains(key) {
            return false;
        }
        self.index.insert(key.to_string());
        self.order.push(key.to_string());
        true
    }

    /// Remove `key`, returning `false` if it was absent.
    pub fn remove(&mut self, key: &str) -> bool {
        if !self.index.remove(key) {
            return false;
        }
        self.order.retain(|k| k != key);
        true
    }

    /// Flip membership of `key`. Returns whether the key is now present.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.remove(key) {
            false
        } else {
            self.insert(key)
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains(key)
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.order
    }
}

impl<'a> FromIterator<&'a str> for OrderedSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = OrderedSet::new();
        for key in iter {
            set.insert(key);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let set: OrderedSet = ["c", "a", "b"].into_iter().collect();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_duplicate_insert_ignored() {
        let mut set = OrderedSet::new();
        assert!(set.insert("a"));
        assert!(!set.insert("a"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_reinsert_moves_to_end() {
        let mut set: OrderedSet = ["a", "b", "c"].into_iter().collect();
        set.toggle("a");
        set.toggle("a");
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_toggle_reports_membership() {
        let mut set = OrderedSet::new();
        assert!(set.toggle("x"));
        assert!(set.contains("x"));
        assert!(!set.toggle("x"));
        assert!(!set.contains("x"));
        assert!(set.is_empty());
    }
}
