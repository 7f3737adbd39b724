//! Loading picker option lists from JSON.
//!
//! The format is a JSON array of option objects:
//! `{"value": "tate", "label": "Tate", "searchTerms": ["Tate"], "searchImportance": 1}`.
//! `searchTerms` and `searchImportance` are optional.

use crate::select::SelectOption;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("failed to read options file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid options JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type OptionsResult<T> = Result<T, OptionsError>;

pub fn from_json_str(json: &str) -> OptionsResult<Vec<SelectOption<String>>> {
    Ok(serde_json::from_str(json)?)
}

pub fn from_json_file(path: impl AsRef<Path>) -> OptionsResult<Vec<SelectOption<String>>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let options = from_json_str(&json)?;
    tracing::debug!(path = %path.display(), count = options.len(), "loaded select options");
    Ok(options)
}
