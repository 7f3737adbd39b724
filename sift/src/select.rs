//! Select picker search session.
//!
//! Holds a picker's option list together with the autocomplete index built
//! from it, plus the small amount of controller state the picker needs: the
//! current search term, whether the picker is showing, and where to scroll so
//! the selected row is visible.

use crate::autocomplete::Autocomplete;
use crate::candidate::Candidate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Height of a single picker row, in points.
pub const ROW_HEIGHT: f64 = 40.0;

/// A picker row.
///
/// Options without search terms can't be found by typing; they are still
/// listed when the search term is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOption<V> {
    pub value: V,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_terms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_importance: Option<i64>,
}

impl<V> SelectOption<V> {
    pub fn new(value: V, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
            search_terms: None,
            search_importance: None,
        }
    }

    pub fn with_search_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.search_terms = Some(terms.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_search_importance(mut self, importance: i64) -> Self {
        self.search_importance = Some(importance);
        self
    }

    /// Candidate keyed by this option's position in its list.
    ///
    /// An option with missing or empty search terms gets no terms and
    /// importance 0, regardless of its `search_importance`.
    pub(crate) fn to_candidate(&self, position: usize) -> Candidate<usize> {
        match self.search_terms.as_deref() {
            Some(terms) if !terms.is_empty() => Candidate::new(position, terms.iter().cloned())
                .with_importance(self.search_importance.unwrap_or(0)),
            _ => {
                tracing::warn!(position, label = %self.label, "select option has no search terms");
                Candidate::new(position, Vec::<String>::new())
            }
        }
    }
}

/// Search state for one picker instance.
#[derive(Debug)]
pub struct SelectSearch<V> {
    options: Arc<[SelectOption<V>]>,
    autocomplete: Autocomplete<usize>,
    search_term: String,
    visible: bool,
}

impl<V> SelectSearch<V> {
    pub fn new(options: impl Into<Arc<[SelectOption<V>]>>) -> Self {
        let options = options.into();
        let autocomplete = build_index(&options);
        Self {
            options,
            autocomplete,
            search_term: String::new(),
            visible: false,
        }
    }

    /// Replace the option list. The index is rebuilt from scratch; the
    /// current search term is kept.
    pub fn set_options(&mut self, options: impl Into<Arc<[SelectOption<V>]>>) {
        let options = options.into();
        self.autocomplete = build_index(&options);
        self.options = options;
    }

    pub fn options(&self) -> &[SelectOption<V>] {
        &self.options
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Showing or hiding the picker always clears the search term.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.search_term.clear();
    }

    /// Rows to display: every option when nothing has been typed, otherwise
    /// the ranked suggestions for the search term.
    pub fn results(&self) -> Vec<&SelectOption<V>> {
        if self.search_term.is_empty() {
            self.options.iter().collect()
        } else {
            self.suggest(&self.search_term)
        }
    }

    /// The first `limit` rows of [`SelectSearch::results`].
    pub fn results_with_limit(&self, limit: usize) -> Vec<&SelectOption<V>> {
        if self.search_term.is_empty() {
            self.options.iter().take(limit).collect()
        } else {
            self.autocomplete
                .suggestions_with_limit(&self.search_term, limit)
                .into_iter()
                .map(|&position| &self.options[position])
                .collect()
        }
    }

    /// Ranked suggestions for an arbitrary query, independent of the stored
    /// search term.
    pub fn suggest(&self, query: &str) -> Vec<&SelectOption<V>> {
        self.autocomplete
            .suggestions(query)
            .into_iter()
            .map(|&position| &self.options[position])
            .collect()
    }

    /// Position of `value` in the full option list.
    pub fn selected_index(&self, value: &V) -> Option<usize>
    where
        V: PartialEq,
    {
        self.options.iter().position(|option| &option.value == value)
    }

    /// Scroll offset that roughly centers the selected row in a viewport of
    /// `viewport_height` points.
    ///
    /// Only applies while the picker is visible with a blank search term and
    /// a selected value that is in the list; otherwise the list scrolls to
    /// the top. The offset is not clamped and may be negative near the top.
    pub fn scroll_offset(&self, selected: Option<&V>, viewport_height: f64) -> f64
    where
        V: PartialEq,
    {
        if !self.visible || !self.search_term.trim().is_empty() {
            return 0.0;
        }
        match selected.and_then(|value| self.selected_index(value)) {
            Some(index) => index as f64 * ROW_HEIGHT - viewport_height / 2.0 + ROW_HEIGHT,
            None => 0.0,
        }
    }
}

fn build_index<V>(options: &[SelectOption<V>]) -> Autocomplete<usize> {
    options
        .iter()
        .enumerate()
        .map(|(position, option)| option.to_candidate(position))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn institution_options() -> Vec<SelectOption<&'static str>> {
        vec![
            SelectOption::new("musee-picasso-paris", "Musée Picasso Paris")
                .with_search_terms(["Musée Picasso Paris", "Musee Picasso Paris"]),
            SelectOption::new("fondation-beyeler", "Fondation Beyeler")
                .with_search_terms(["Fondation Beyeler"]),
            SelectOption::new("tate", "Tate")
                .with_search_terms(["Tate", "Tate Modern"])
                .with_search_importance(2),
        ]
    }

    fn values(rows: Vec<&SelectOption<&'static str>>) -> Vec<&'static str> {
        rows.into_iter().map(|row| row.value).collect()
    }

    #[test]
    fn test_empty_search_term_lists_everything_in_order() {
        let search = SelectSearch::new(institution_options());
        assert_eq!(
            values(search.results()),
            vec!["musee-picasso-paris", "fondation-beyeler", "tate"]
        );
    }

    #[test]
    fn test_search_term_filters_and_ranks() {
        let mut search = SelectSearch::new(institution_options());
        search.set_search_term("e");
        assert_eq!(
            values(search.results()),
            vec!["tate", "musee-picasso-paris", "fondation-beyeler"]
        );
        search.set_search_term("pic");
        assert_eq!(values(search.results()), vec!["musee-picasso-paris"]);
    }

    #[test]
    fn test_results_with_limit() {
        let mut search = SelectSearch::new(institution_options());
        assert_eq!(
            values(search.results_with_limit(2)),
            vec!["musee-picasso-paris", "fondation-beyeler"]
        );
        assert_eq!(search.results_with_limit(10).len(), 3);

        search.set_search_term("e");
        assert_eq!(values(search.results_with_limit(2)), vec!["tate", "musee-picasso-paris"]);
        assert!(search.results_with_limit(0).is_empty());
    }

    #[test]
    fn test_visibility_change_resets_search_term() {
        let mut search = SelectSearch::new(institution_options());
        search.set_search_term("tate");
        search.set_visible(true);
        assert_eq!(search.search_term(), "");
        assert!(search.is_visible());
        search.set_search_term("tate");
        search.set_visible(false);
        assert_eq!(search.search_term(), "");
    }

    #[test]
    fn test_option_without_terms_is_listed_but_not_searchable() {
        let mut options = institution_options();
        options.push(SelectOption::new("all", "All"));
        let mut search = SelectSearch::new(options);
        assert_eq!(search.results().len(), 4);
        search.set_search_term("all");
        assert!(search.results().is_empty());
    }

    #[test]
    fn test_empty_terms_ignore_importance() {
        let options = vec![
            SelectOption::new(1, "One").with_search_terms(["one"]),
            SelectOption::new(2, "Two")
                .with_search_terms(Vec::<String>::new())
                .with_search_importance(10),
        ];
        let search = SelectSearch::new(options);
        let ranked: Vec<i32> = search.suggest("").into_iter().map(|o| o.value).collect();
        assert_eq!(ranked, vec![1, 2]);
    }

    #[test]
    fn test_set_options_rebuilds_index_and_keeps_term() {
        let mut search = SelectSearch::new(institution_options());
        search.set_search_term("moma");
        assert!(search.results().is_empty());

        search.set_options(vec![SelectOption::new("moma", "MoMA").with_search_terms(["MoMA"])]);
        assert_eq!(search.search_term(), "moma");
        assert_eq!(values(search.results()), vec!["moma"]);
        assert_eq!(search.options().len(), 1);
    }

    #[test]
    fn test_selected_index() {
        let search = SelectSearch::new(institution_options());
        assert_eq!(search.selected_index(&"tate"), Some(2));
        assert_eq!(search.selected_index(&"moma"), None);
    }

    #[test]
    fn test_scroll_offset_centers_selected_row() {
        let mut search = SelectSearch::new(institution_options());
        search.set_visible(true);
        // 2 * 40 - 200 / 2 + 40
        assert_eq!(search.scroll_offset(Some(&"tate"), 200.0), 20.0);
        assert_eq!(search.scroll_offset(Some(&"musee-picasso-paris"), 200.0), -60.0);
    }

    #[test]
    fn test_scroll_offset_is_zero_otherwise() {
        let mut search = SelectSearch::new(institution_options());
        assert_eq!(search.scroll_offset(Some(&"tate"), 200.0), 0.0);

        search.set_visible(true);
        assert_eq!(search.scroll_offset(None, 200.0), 0.0);
        assert_eq!(search.scroll_offset(Some(&"moma"), 200.0), 0.0);

        search.set_search_term("ta");
        assert_eq!(search.scroll_offset(Some(&"tate"), 200.0), 0.0);

        // whitespace-only terms still count as blank for scrolling
        search.set_search_term("  ");
        assert_eq!(search.scroll_offset(Some(&"tate"), 200.0), 20.0);
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"[
            {"value": "tate", "label": "Tate", "searchTerms": ["Tate"], "searchImportance": 3},
            {"value": "all", "label": "All"}
        ]"#;
        let options: Vec<SelectOption<String>> = serde_json::from_str(json).unwrap();
        assert_eq!(options[0].search_terms.as_deref(), Some(&["Tate".to_string()][..]));
        assert_eq!(options[0].search_importance, Some(3));
        assert_eq!(options[1].search_terms, None);
        assert_eq!(options[1].search_importance, None);
    }
}
