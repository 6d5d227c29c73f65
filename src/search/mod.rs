//! Batched search for irreducible polynomials.
//!
//! The candidates of degree n over GF(p) are numbered 0 to (p - 1) * p^n - 1.
//! For index i, the leading coefficient is i / p^n + 1, and digit k of
//! i mod p^n in base p is the coefficient of x^k. A search scans that range
//! in windows of `batch_size` candidates, testing each with Ben-Or's
//! algorithm. Candidates are independent, so each window is a parallel map
//! when the `parallel` feature is enabled.
//!
//! # Example
//!
//! ```
//! use gfcalc::search::{IrreducibleSearch, SearchConfig};
//!
//! let search = IrreducibleSearch::new(2, 3)
//!     .unwrap()
//!     .with_config(SearchConfig::new().batch_size(4))
//!     .unwrap();
//!
//! let first = search.run_batch(0).unwrap();
//! assert_eq!(first.found, vec![vec![1, 0, 1, 1]]); // x^3 + x + 1
//!
//! let second = search.run_batch(first.next_offset).unwrap();
//! assert_eq!(second.found, vec![vec![1, 1, 0, 1]]); // x^3 + x^2 + 1
//! assert!(second.exhausted);
//! ```

mod store;

pub use store::{MemoryStore, PolynomialStore};

use log::{debug, trace};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::gf::exp::field_order;
use crate::gf::is_irreducible;
use crate::utils::is_prime;

/// Default number of candidates scanned per batch.
pub const DEFAULT_BATCH_SIZE: usize = 10_000;

/// Runtime settings for an [`IrreducibleSearch`].
///
/// # Example
///
/// ```
/// use gfcalc::search::SearchConfig;
///
/// let config = SearchConfig::new().batch_size(512).parallel(false);
/// assert_eq!(config.get_batch_size(), 512);
/// assert!(!config.is_parallel());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    batch_size: usize,
    parallel: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel: true,
        }
    }
}

impl SearchConfig {
    /// Create a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of candidates scanned per batch.
    #[must_use]
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Scan candidates in parallel.
    ///
    /// Has no effect unless the `parallel` feature is enabled.
    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Get the batch size.
    #[must_use]
    pub fn get_batch_size(&self) -> usize {
        self.batch_size
    }

    /// Check whether batches are scanned in parallel.
    #[must_use]
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(Error::invalid_params("batch size must be at least 1"));
        }
        Ok(())
    }
}

/// The outcome of scanning one window of candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchBatch {
    /// Index of the first candidate scanned.
    pub offset: u128,
    /// Index to pass to the next call to continue the search.
    pub next_offset: u128,
    /// Number of candidates scanned.
    pub scanned: usize,
    /// Irreducible candidates, sorted by coefficients.
    pub found: Vec<Vec<u64>>,
    /// Whether the candidate range ends at `next_offset`.
    pub exhausted: bool,
}

/// A search for irreducible polynomials of fixed degree over GF(p).
#[derive(Debug, Clone)]
pub struct IrreducibleSearch {
    p: u64,
    degree: usize,
    config: SearchConfig,
    /// p^n, the number of candidates per leading coefficient.
    block: Option<u128>,
    /// (p - 1) * p^n.
    total: Option<u128>,
}

impl IrreducibleSearch {
    /// Create a search over polynomials of degree `degree` over GF(p).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCharacteristic`] if `p` is not prime, or
    /// [`Error::InvalidParams`] if `degree` is 0.
    pub fn new(p: u64, degree: usize) -> Result<Self> {
        if !is_prime(p) {
            return Err(Error::InvalidCharacteristic(p));
        }
        if degree == 0 {
            return Err(Error::invalid_params("degree must be at least 1"));
        }

        let block = field_order(p, degree);
        let total = block.and_then(|b| b.checked_mul(u128::from(p - 1)));
        Ok(Self {
            p,
            degree,
            config: SearchConfig::default(),
            block,
            total,
        })
    }

    /// Replace the search settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] if the batch size is 0.
    pub fn with_config(mut self, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Get the characteristic.
    #[must_use]
    pub fn characteristic(&self) -> u64 {
        self.p
    }

    /// Get the degree of the candidates.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Get the settings.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Number of candidates, (p - 1) * p^n, or `None` if it exceeds `u128`.
    #[must_use]
    pub fn total_candidates(&self) -> Option<u128> {
        self.total
    }

    /// The candidate polynomial at `index`, highest degree first.
    ///
    /// Returns `None` if `index` is at or past [`total_candidates`](Self::total_candidates).
    ///
    /// # Example
    ///
    /// ```
    /// use gfcalc::search::IrreducibleSearch;
    ///
    /// let search = IrreducibleSearch::new(2, 3).unwrap();
    /// assert_eq!(search.candidate(0), Some(vec![1, 0, 0, 0])); // x^3
    /// assert_eq!(search.candidate(3), Some(vec![1, 0, 1, 1])); // x^3 + x + 1
    /// assert_eq!(search.candidate(8), None);
    /// ```
    #[must_use]
    pub fn candidate(&self, index: u128) -> Option<Vec<u64>> {
        if matches!(self.total, Some(total) if index >= total) {
            return None;
        }

        let p = u128::from(self.p);
        let (leading, mut rest) = match self.block {
            Some(block) => (index / block + 1, index % block),
            // Beyond u128 every representable index has leading coefficient 1
            None => (1, index),
        };

        let mut coeffs = vec![0u64; self.degree + 1];
        coeffs[0] = leading as u64;
        for c in coeffs[1..].iter_mut().rev() {
            *c = (rest % p) as u64;
            rest /= p;
        }
        Some(coeffs)
    }

    /// Scan the window of up to `batch_size` candidates starting at `offset`.
    ///
    /// Running the same offset twice yields the same batch. An offset at or
    /// past the end yields an empty, exhausted batch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] if the configured batch size is 0.
    pub fn run_batch(&self, offset: u128) -> Result<SearchBatch> {
        self.config.validate()?;

        let limit = self.total.unwrap_or(u128::MAX);
        let end = offset
            .saturating_add(self.config.batch_size as u128)
            .min(limit)
            .max(offset);
        let scanned = (end - offset) as usize;

        let mut found = self.scan(offset, scanned);
        found.sort_unstable();

        debug!(
            "GF({})^{} batch at {offset}: scanned {scanned}, found {}",
            self.p,
            self.degree,
            found.len()
        );

        Ok(SearchBatch {
            offset,
            next_offset: end,
            scanned,
            found,
            exhausted: end >= limit,
        })
    }

    /// [`run_batch`](Self::run_batch), then save what was found into `store`.
    ///
    /// # Errors
    ///
    /// Fails if the batch cannot run or the store rejects the save.
    pub fn run_batch_with_store<S>(&self, offset: u128, store: &mut S) -> Result<SearchBatch>
    where
        S: PolynomialStore + ?Sized,
    {
        let batch = self.run_batch(offset)?;
        let inserted = store.save(self.p, self.degree, &batch.found)?;
        trace!("stored {inserted} new polynomials for GF({})^{}", self.p, self.degree);
        Ok(batch)
    }

    /// Scan every candidate and return all irreducible polynomials, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParams`] if the candidate count does not fit
    /// in a `u128` or the batch size is 0.
    pub fn find_all(&self) -> Result<Vec<Vec<u64>>> {
        if self.total.is_none() {
            return Err(Error::invalid_params(format!(
                "search space for degree {} over GF({}) is too large to enumerate",
                self.degree, self.p
            )));
        }

        let mut found = Vec::new();
        let mut offset = 0;
        loop {
            let batch = self.run_batch(offset)?;
            found.extend(batch.found);
            if batch.exhausted {
                break;
            }
            offset = batch.next_offset;
        }

        found.sort_unstable();
        Ok(found)
    }

    fn test_candidate(&self, index: u128) -> Option<Vec<u64>> {
        let candidate = self.candidate(index)?;
        if is_irreducible(self.p, &candidate) {
            trace!("irreducible candidate {index}: {candidate:?}");
            Some(candidate)
        } else {
            None
        }
    }

    #[cfg(feature = "parallel")]
    fn scan(&self, offset: u128, count: usize) -> Vec<Vec<u64>> {
        if self.config.parallel {
            (0..count)
                .into_par_iter()
                .filter_map(|i| self.test_candidate(offset + i as u128))
                .collect()
        } else {
            self.scan_sequential(offset, count)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn scan(&self, offset: u128, count: usize) -> Vec<Vec<u64>> {
        self.scan_sequential(offset, count)
    }

    fn scan_sequential(&self, offset: u128, count: usize) -> Vec<Vec<u64>> {
        (0..count)
            .filter_map(|i| self.test_candidate(offset + i as u128))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_validates() {
        assert_eq!(
            IrreducibleSearch::new(4, 2).unwrap_err(),
            Error::InvalidCharacteristic(4)
        );
        assert!(matches!(
            IrreducibleSearch::new(2, 0),
            Err(Error::InvalidParams { .. })
        ));
        assert!(matches!(
            IrreducibleSearch::new(2, 3)
                .unwrap()
                .with_config(SearchConfig::new().batch_size(0)),
            Err(Error::InvalidParams { .. })
        ));
    }

    #[test]
    fn test_total_candidates() {
        assert_eq!(IrreducibleSearch::new(2, 3).unwrap().total_candidates(), Some(8));
        assert_eq!(IrreducibleSearch::new(3, 2).unwrap().total_candidates(), Some(18));
        assert_eq!(IrreducibleSearch::new(2, 200).unwrap().total_candidates(), None);
    }

    #[test]
    fn test_candidate_enumeration() {
        let search = IrreducibleSearch::new(3, 2).unwrap();
        assert_eq!(search.candidate(0), Some(vec![1, 0, 0]));
        assert_eq!(search.candidate(1), Some(vec![1, 0, 1]));
        assert_eq!(search.candidate(3), Some(vec![1, 1, 0]));
        assert_eq!(search.candidate(8), Some(vec![1, 2, 2]));
        assert_eq!(search.candidate(9), Some(vec![2, 0, 0]));
        assert_eq!(search.candidate(17), Some(vec![2, 2, 2]));

        // Every candidate appears exactly once
        let mut all: Vec<_> = (0..18).filter_map(|i| search.candidate(i)).collect();
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 18);
    }

    #[test]
    fn test_candidate_out_of_range() {
        // (2 - 1) * 2^3 = 8 candidates; index 8 would otherwise wrap to leading 2
        let search = IrreducibleSearch::new(2, 3).unwrap();
        assert_eq!(search.candidate(7), Some(vec![1, 1, 1, 1]));
        assert_eq!(search.candidate(8), None);
        assert_eq!(search.candidate(1000), None);
        assert_eq!(search.candidate(u128::MAX), None);

        let search = IrreducibleSearch::new(3, 2).unwrap();
        assert_eq!(search.candidate(18), None);
    }

    #[test]
    fn test_candidate_beyond_u128() {
        let search = IrreducibleSearch::new(2, 200).unwrap();
        let c = search.candidate(5).unwrap();
        assert_eq!(c.len(), 201);
        assert_eq!(c[0], 1);
        assert_eq!(&c[198..], &[1, 0, 1]);
        assert!(search.candidate(u128::MAX).is_some());
    }

    #[test]
    fn test_gf2_degree3_scenario() {
        let search = IrreducibleSearch::new(2, 3).unwrap();
        let found = search.find_all().unwrap();

        assert!(found.contains(&vec![1, 0, 1, 1])); // x^3 + x + 1
        assert!(found.contains(&vec![1, 1, 0, 1])); // x^3 + x^2 + 1
        assert!(!found.contains(&vec![1, 0, 0, 0])); // x^3
        assert!(!found.contains(&vec![1, 1, 0, 0])); // x^3 + x^2
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_non_monic_candidates_are_included() {
        // Monic irreducible quadratics over GF(3): x^2 + 1, x^2 + x + 2, x^2 + 2x + 2
        let found = IrreducibleSearch::new(3, 2).unwrap().find_all().unwrap();
        assert_eq!(
            found,
            vec![
                vec![1, 0, 1],
                vec![1, 1, 2],
                vec![1, 2, 2],
                vec![2, 0, 2],
                vec![2, 1, 1],
                vec![2, 2, 1],
            ]
        );
    }

    #[test]
    fn test_batches_resume_and_cover_range() {
        let search = IrreducibleSearch::new(2, 4)
            .unwrap()
            .with_config(SearchConfig::new().batch_size(5))
            .unwrap();

        let mut offset = 0;
        let mut found = Vec::new();
        let mut batches = 0;
        loop {
            let batch = search.run_batch(offset).unwrap();
            assert_eq!(batch.offset, offset);
            assert_eq!(batch.next_offset, offset + batch.scanned as u128);
            found.extend(batch.found);
            batches += 1;
            if batch.exhausted {
                break;
            }
            offset = batch.next_offset;
        }

        // 16 candidates in windows of 5
        assert_eq!(batches, 4);
        assert_eq!(offset, 15);
        found.sort();
        assert_eq!(found, vec![vec![1, 0, 0, 1, 1], vec![1, 1, 0, 0, 1], vec![1, 1, 1, 1, 1]]);
    }

    #[test]
    fn test_batch_past_end() {
        let search = IrreducibleSearch::new(2, 3).unwrap();
        let batch = search.run_batch(100).unwrap();
        assert_eq!(batch.scanned, 0);
        assert!(batch.found.is_empty());
        assert!(batch.exhausted);
        assert_eq!(batch.next_offset, 100);
    }

    #[test]
    fn test_batches_are_idempotent() {
        let search = IrreducibleSearch::new(5, 3)
            .unwrap()
            .with_config(SearchConfig::new().batch_size(97))
            .unwrap();
        let first = search.run_batch(194).unwrap();
        let second = search.run_batch(194).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let base = IrreducibleSearch::new(3, 4).unwrap();
        let parallel = base
            .clone()
            .with_config(SearchConfig::new().batch_size(50).parallel(true))
            .unwrap();
        let sequential = base
            .with_config(SearchConfig::new().batch_size(50).parallel(false))
            .unwrap();

        assert_eq!(parallel.find_all().unwrap(), sequential.find_all().unwrap());
    }

    #[test]
    fn test_found_count_gf3_degree4() {
        // 18 monic irreducible quartics over GF(3), times 2 leading coefficients
        let found = IrreducibleSearch::new(3, 4).unwrap().find_all().unwrap();
        assert_eq!(found.len(), 36);
    }

    #[test]
    fn test_run_batch_with_store() {
        let search = IrreducibleSearch::new(2, 3)
            .unwrap()
            .with_config(SearchConfig::new().batch_size(4))
            .unwrap();
        let mut store = MemoryStore::new();

        let first = search.run_batch_with_store(0, &mut store).unwrap();
        search.run_batch_with_store(first.next_offset, &mut store).unwrap();
        // Re-running a batch does not duplicate entries
        search.run_batch_with_store(0, &mut store).unwrap();

        assert_eq!(
            store.load(2, 3).unwrap(),
            vec![vec![1, 0, 1, 1], vec![1, 1, 0, 1]]
        );
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_find_all_rejects_unbounded_space() {
        let search = IrreducibleSearch::new(2, 200).unwrap();
        assert!(matches!(search.find_all(), Err(Error::InvalidParams { .. })));
        // Individual batches still work
        let batch = search
            .clone()
            .with_config(SearchConfig::new().batch_size(8))
            .unwrap()
            .run_batch(0)
            .unwrap();
        assert_eq!(batch.scanned, 8);
        assert!(!batch.exhausted);
    }
}
