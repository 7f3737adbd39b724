//! Sift FFI Interface Definition
//!
//! This file defines the public types exposed to Swift and Kotlin via UniFFI.
//! The exported object itself lives in `picker.rs`.

use crate::options::OptionsError;
use crate::select::SelectOption;
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDS (Structs)
// ═══════════════════════════════════════════════════════════════════════════════

/// A picker row as seen by the host app.
///
/// An empty `search_terms` list means the row can't be found by typing.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct PickerOption {
    pub value: String,
    pub label: String,
    pub search_terms: Vec<String>,
    pub search_importance: Option<i64>,
}

impl From<PickerOption> for SelectOption<String> {
    fn from(option: PickerOption) -> Self {
        Self {
            value: option.value,
            label: option.label,
            search_terms: Some(option.search_terms),
            search_importance: option.search_importance,
        }
    }
}

impl From<&SelectOption<String>> for PickerOption {
    fn from(option: &SelectOption<String>) -> Self {
        Self {
            value: option.value.clone(),
            label: option.label.clone(),
            search_terms: option.search_terms.clone().unwrap_or_default(),
            search_importance: option.search_importance,
        }
    }
}

/// Error type for Sift operations
#[derive(Debug, Error, uniffi::Error)]
pub enum SiftError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Options error: {0}")]
    OptionsError(String),
}

impl From<OptionsError> for SiftError {
    fn from(e: OptionsError) -> Self {
        SiftError::OptionsError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picker_option_conversions() {
        let option = PickerOption {
            value: "tate".into(),
            label: "Tate".into(),
            search_terms: vec!["Tate".into()],
            search_importance: Some(1),
        };
        let select: SelectOption<String> = option.clone().into();
        assert_eq!(select.search_terms, Some(vec!["Tate".to_string()]));
        assert_eq!(PickerOption::from(&select), option);
    }

    #[test]
    fn test_missing_terms_become_empty_list() {
        let select = SelectOption::new("all".to_string(), "All");
        let option = PickerOption::from(&select);
        assert!(option.search_terms.is_empty());
        assert_eq!(option.search_importance, None);
    }

    #[test]
    fn test_options_error_converts() {
        let err = crate::options::from_json_str("not json").unwrap_err();
        let sift: SiftError = err.into();
        assert!(matches!(sift, SiftError::OptionsError(_)));
        assert!(sift.to_string().starts_with("Options error: invalid options JSON"));
    }
}
