//! Storage for discovered irreducible polynomials.

use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A place to keep irreducible polynomials found by a search, keyed by
/// characteristic and degree.
///
/// Saving the same polynomial twice for the same key is not an error and
/// does not create a duplicate.
pub trait PolynomialStore {
    /// Record polynomials of the given degree over GF(p).
    ///
    /// Returns how many of them were not already stored.
    ///
    /// # Errors
    ///
    /// Backends that persist outside the process report their failures here.
    fn save(&mut self, p: u64, degree: usize, polynomials: &[Vec<u64>]) -> Result<usize>;

    /// Load every stored polynomial of the given degree over GF(p), in
    /// lexicographic coefficient order.
    ///
    /// # Errors
    ///
    /// Backends that persist outside the process report their failures here.
    fn load(&self, p: u64, degree: usize) -> Result<Vec<Vec<u64>>>;
}

/// An in-memory [`PolynomialStore`].
///
/// # Example
///
/// ```
/// use gfcalc::search::{MemoryStore, PolynomialStore};
///
/// let mut store = MemoryStore::new();
/// assert_eq!(store.save(2, 2, &[vec![1, 1, 1]]).unwrap(), 1);
/// assert_eq!(store.save(2, 2, &[vec![1, 1, 1]]).unwrap(), 0);
/// assert_eq!(store.load(2, 2).unwrap(), vec![vec![1, 1, 1]]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MemoryStore {
    polynomials: BTreeMap<u64, BTreeMap<usize, BTreeSet<Vec<u64>>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored polynomials across all keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polynomials
            .values()
            .flat_map(BTreeMap::values)
            .map(BTreeSet::len)
            .sum()
    }

    /// Check if nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The (p, degree) keys that hold at least one polynomial.
    pub fn keys(&self) -> impl Iterator<Item = (u64, usize)> + '_ {
        self.polynomials
            .iter()
            .flat_map(|(&p, by_degree)| by_degree.keys().map(move |&n| (p, n)))
    }
}

impl PolynomialStore for MemoryStore {
    fn save(&mut self, p: u64, degree: usize, polynomials: &[Vec<u64>]) -> Result<usize> {
        if polynomials.is_empty() {
            return Ok(0);
        }

        let set = self
            .polynomials
            .entry(p)
            .or_default()
            .entry(degree)
            .or_default();
        let inserted = polynomials
            .iter()
            .filter(|poly| set.insert((*poly).clone()))
            .count();
        Ok(inserted)
    }

    fn load(&self, p: u64, degree: usize) -> Result<Vec<Vec<u64>>> {
        Ok(self
            .polynomials
            .get(&p)
            .and_then(|by_degree| by_degree.get(&degree))
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_deduplicates() {
        let mut store = MemoryStore::new();
        let polys = vec![vec![1, 0, 1, 1], vec![1, 1, 0, 1]];

        assert_eq!(store.save(2, 3, &polys).unwrap(), 2);
        assert_eq!(store.save(2, 3, &polys).unwrap(), 0);
        assert_eq!(store.save(2, 3, &[vec![1, 0, 1, 1], vec![1, 1, 1]]).unwrap(), 1);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_keys_are_separate() {
        let mut store = MemoryStore::new();
        store.save(2, 2, &[vec![1, 1, 1]]).unwrap();
        store.save(3, 2, &[vec![1, 0, 1]]).unwrap();

        assert_eq!(store.load(2, 2).unwrap(), vec![vec![1, 1, 1]]);
        assert_eq!(store.load(3, 2).unwrap(), vec![vec![1, 0, 1]]);
        assert!(store.load(5, 2).unwrap().is_empty());
        assert!(store.load(2, 3).unwrap().is_empty());
        assert_eq!(store.keys().collect::<Vec<_>>(), vec![(2, 2), (3, 2)]);
    }

    #[test]
    fn test_empty_save_creates_no_key() {
        let mut store = MemoryStore::new();
        assert_eq!(store.save(2, 2, &[]).unwrap(), 0);
        assert!(store.is_empty());
        assert_eq!(store.keys().count(), 0);
    }

    #[test]
    fn test_load_is_sorted() {
        let mut store = MemoryStore::new();
        store
            .save(3, 2, &[vec![2, 2, 1], vec![1, 0, 1], vec![1, 2, 2]])
            .unwrap();
        assert_eq!(
            store.load(3, 2).unwrap(),
            vec![vec![1, 0, 1], vec![1, 2, 2], vec![2, 2, 1]]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let mut store = MemoryStore::new();
        store.save(2, 3, &[vec![1, 0, 1, 1]]).unwrap();
        store.save(5, 2, &[vec![1, 0, 2]]).unwrap();

        let json = serde_json::to_string(&store).unwrap();
        let restored: MemoryStore = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, store);
    }
}
