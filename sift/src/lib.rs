//! Sift - ranked autocomplete for option pickers
//!
//! This library implements the search behind a select picker: an immutable
//! index over a candidate list that answers case-insensitive substring
//! queries, ranked by importance and then input order.
//!
//! Types are exported via UniFFI proc-macros (#[derive(uniffi::Record/Object)]).

pub mod autocomplete;
pub mod candidate;
pub mod interface;
pub mod options;
mod picker;
pub mod ranking;
pub mod select;

pub use autocomplete::Autocomplete;
pub use candidate::Candidate;
pub use interface::*;
pub use picker::SelectPicker;
pub use select::{SelectOption, SelectSearch};

uniffi::setup_scaffolding!("sift");
