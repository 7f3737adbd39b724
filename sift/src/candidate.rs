//! Autocomplete candidate with its normalized search terms.
//!
//! Module isolation ensures no code outside this module can mutate a stored
//! candidate's terms after construction, so the lowercased copies can never
//! drift from the originals.

use crate::ranking::RankKey;

/// An item eligible for suggestion.
///
/// `key` is the caller's payload and is never inspected. Search terms are
/// matched case-insensitively; `importance` breaks ties, higher first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<T> {
    pub key: T,
    pub search_terms: Vec<String>,
    pub importance: i64,
}

impl<T> Candidate<T> {
    pub fn new<I, S>(key: T, search_terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key,
            search_terms: search_terms.into_iter().map(Into::into).collect(),
            importance: 0,
        }
    }

    pub fn with_importance(mut self, importance: i64) -> Self {
        self.importance = importance;
        self
    }
}

/// A candidate as held by the index: original record, insertion position and
/// lowercased terms.
#[derive(Debug)]
pub(crate) struct IndexedCandidate<T> {
    candidate: Candidate<T>,
    position: usize,
    terms_lower: Vec<String>,
}

impl<T> IndexedCandidate<T> {
    pub(crate) fn new(candidate: Candidate<T>, position: usize) -> Self {
        let terms_lower = candidate
            .search_terms
            .iter()
            .map(|term| normalize(term))
            .collect();
        Self {
            candidate,
            position,
            terms_lower,
        }
    }

    pub(crate) fn candidate(&self) -> &Candidate<T> {
        &self.candidate
    }

    pub(crate) fn has_terms(&self) -> bool {
        !self.terms_lower.is_empty()
    }

    pub(crate) fn rank_key(&self) -> RankKey {
        RankKey::new(self.candidate.importance, self.position)
    }

    /// Unanchored substring test against every term. The empty query matches
    /// everything, including candidates that have no terms at all.
    pub(crate) fn matches(&self, query_lower: &str) -> bool {
        query_lower.is_empty()
            || self
                .terms_lower
                .iter()
                .any(|term| term.contains(query_lower))
    }
}

/// Case-folding used for both terms and queries.
pub(crate) fn normalize(text: &str) -> String {
    text.to_lowercase()
}
