use std::collections::HashSet;
use std::hash::Hash;

/// Order-preserving de-duplication for slices.
pub trait UniqueExt<T> {
    /// Distinct elements in first-seen order.
    fn unique(&self) -> Vec<T>;
}

impl<T: Eq + Hash + Clone> UniqueExt<T> for [T] {
    fn unique(&self) -> Vec<T> {
        let mut seen = HashSet::with_capacity(self.len());
        self.iter()
            .filter(|item| seen.insert(*item))
            .cloned()
            .collect()
    }
}
