//! Input-side error taxonomy.
//!
//! The merge core is total and never fails; everything that can go wrong
//! happens before it runs, while turning raw text into a mapping document.

use thiserror::Error;

/// Why an input blob was rejected before reaching the merge core.
#[derive(Error, Debug)]
pub enum InputError {
    /// The text is not well-formed JSON.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// The text parsed, but the top-level value is not a JSON object.
    #[error("top-level value must be a JSON object")]
    NotAnObject,
}
