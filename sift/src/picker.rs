//! SelectPicker - picker search session exported over UniFFI.
//!
//! Concurrency Model:
//! - The host calls in from its UI thread; every method is synchronous and
//!   does no I/O.
//! - The session sits behind a `RwLock` only because UniFFI objects must be
//!   `Send + Sync`. Option changes replace the session's index wholesale.

use crate::interface::{PickerOption, SiftError};
use crate::options;
use crate::select::{SelectOption, SelectSearch};
use parking_lot::RwLock;

#[derive(uniffi::Object)]
pub struct SelectPicker {
    session: RwLock<SelectSearch<String>>,
}

// Internal implementation (not exported via FFI)
impl SelectPicker {
    fn from_select_options(options: Vec<SelectOption<String>>) -> Self {
        Self {
            session: RwLock::new(SelectSearch::new(options)),
        }
    }

    fn to_picker_options(rows: Vec<&SelectOption<String>>) -> Vec<PickerOption> {
        rows.into_iter().map(PickerOption::from).collect()
    }
}

// FFI-exported constructors (must be in standalone impl block)
#[uniffi::export]
impl SelectPicker {
    #[uniffi::constructor]
    pub fn new(options: Vec<PickerOption>) -> Self {
        Self::from_select_options(options.into_iter().map(SelectOption::from).collect())
    }

    /// Build a picker from a JSON option list (see `options` module for the format).
    #[uniffi::constructor]
    pub fn from_json(json: String) -> Result<Self, SiftError> {
        Ok(Self::from_select_options(options::from_json_str(&json)?))
    }
}

#[uniffi::export]
impl SelectPicker {
    /// Replace the option list and rebuild the index.
    pub fn set_options(&self, options: Vec<PickerOption>) {
        let options: Vec<SelectOption<String>> = options.into_iter().map(SelectOption::from).collect();
        self.session.write().set_options(options);
    }

    pub fn option_count(&self) -> u64 {
        self.session.read().options().len() as u64
    }

    pub fn search_term(&self) -> String {
        self.session.read().search_term().to_string()
    }

    pub fn set_search_term(&self, term: String) {
        self.session.write().set_search_term(term);
    }

    /// Show or hide the picker. Clears the search term either way.
    pub fn set_visible(&self, visible: bool) {
        self.session.write().set_visible(visible);
    }

    /// Rows to display for the current search term.
    pub fn results(&self) -> Vec<PickerOption> {
        let session = self.session.read();
        Self::to_picker_options(session.results())
    }

    /// Ranked suggestions for `query`, ignoring the stored search term.
    pub fn suggest(&self, query: String) -> Vec<PickerOption> {
        let session = self.session.read();
        Self::to_picker_options(session.suggest(&query))
    }

    pub fn selected_index(&self, value: String) -> Option<u64> {
        self.session.read().selected_index(&value).map(|i| i as u64)
    }

    /// Offset that centers the selected row, or 0 when it doesn't apply.
    pub fn scroll_offset(&self, value: Option<String>, viewport_height: f64) -> Result<f64, SiftError> {
        if !viewport_height.is_finite() || viewport_height < 0.0 {
            return Err(SiftError::InvalidInput(format!(
                "viewport height must be a non-negative number, got {viewport_height}"
            )));
        }
        Ok(self.session.read().scroll_offset(value.as_ref(), viewport_height))
    }
}
