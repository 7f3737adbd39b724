//! Ranked autocomplete index.
//!
//! Built once from a candidate list and queried per keystroke. Matching is a
//! case-insensitive, unanchored substring test against each candidate's
//! search terms. Rank order is fixed at build time, so a query is a single
//! filtering pass over pre-sorted candidates with no per-query sort and no
//! chance of emitting a candidate twice.

use crate::candidate::{normalize, Candidate, IndexedCandidate};
use crate::ranking::{rank_order, RankKey};

/// Immutable index over a candidate list. Rebuild it when the list changes.
#[derive(Debug)]
pub struct Autocomplete<T> {
    candidates: Vec<IndexedCandidate<T>>,
    /// Candidate positions, best rank first.
    ranked: Vec<usize>,
}

impl<T> Autocomplete<T> {
    /// Build the index. Never fails; candidates without search terms are kept
    /// (they only match the empty query) and reported as a warning.
    pub fn new<I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = Candidate<T>>,
    {
        let candidates: Vec<IndexedCandidate<T>> = candidates
            .into_iter()
            .enumerate()
            .map(|(position, candidate)| IndexedCandidate::new(candidate, position))
            .collect();

        for (position, indexed) in candidates.iter().enumerate() {
            if !indexed.has_terms() {
                tracing::warn!(position, "autocomplete candidate has no search terms");
            }
        }

        let keys: Vec<RankKey> = candidates.iter().map(IndexedCandidate::rank_key).collect();
        let ranked = rank_order(&keys);

        tracing::trace!(candidates = candidates.len(), "built autocomplete index");

        Self { candidates, ranked }
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidates in their original input order.
    pub fn candidates(&self) -> impl Iterator<Item = &Candidate<T>> + '_ {
        self.candidates.iter().map(IndexedCandidate::candidate)
    }

    /// Keys of every matching candidate, best first.
    pub fn suggestions(&self, query: &str) -> Vec<&T> {
        self.ranked_matches(query, usize::MAX)
            .into_iter()
            .map(|candidate| &candidate.key)
            .collect()
    }

    /// The first `limit` entries of [`Autocomplete::suggestions`].
    pub fn suggestions_with_limit(&self, query: &str, limit: usize) -> Vec<&T> {
        self.ranked_matches(query, limit)
            .into_iter()
            .map(|candidate| &candidate.key)
            .collect()
    }

    /// Full candidate records of every match, best first.
    pub fn ranked_matches(&self, query: &str, limit: usize) -> Vec<&Candidate<T>> {
        let query_lower = normalize(query);

        #[cfg(feature = "perf-log")]
        let t0 = std::time::Instant::now();

        let matches: Vec<&Candidate<T>> = self
            .ranked
            .iter()
            .map(|&position| &self.candidates[position])
            .filter(|indexed| indexed.matches(&query_lower))
            .take(limit)
            .map(IndexedCandidate::candidate)
            .collect();

        #[cfg(feature = "perf-log")]
        tracing::debug!(
            elapsed_us = t0.elapsed().as_micros() as u64,
            candidates = self.candidates.len(),
            matched = matches.len(),
            "[perf] autocomplete query"
        );

        matches
    }
}

impl<T> Default for Autocomplete<T> {
    fn default() -> Self {
        Self {
            candidates: Vec::new(),
            ranked: Vec::new(),
        }
    }
}

impl<T> FromIterator<Candidate<T>> for Autocomplete<T> {
    fn from_iter<I: IntoIterator<Item = Candidate<T>>>(iter: I) -> Self {
        Self::new(iter)
    }
}
