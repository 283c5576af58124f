//! Core logic behind the `geyser-merge` binary.
//!
//! Turns two raw JSON text blobs into the pretty-printed merged document,
//! its statistics, and the file name it should be saved under. File and
//! terminal I/O stay in the binary entry point.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::document::{merge_documents, MergeResult};
use crate::error::InputError;
use crate::output::{output_file_name, to_pretty_json};
use crate::stats::Stats;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum CliError {
    /// The first input file was rejected.
    BaseInput(InputError),
    /// The second input file was rejected.
    IncomingInput(InputError),
    /// The merged document could not be serialized.
    Serialize(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::BaseInput(e)     => write!(f, "first file: {e}"),
            CliError::IncomingInput(e) => write!(f, "second file: {e}"),
            CliError::Serialize(e)     => write!(f, "{e}"),
        }
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────

/// Parse one input blob into a mapping document.
///
/// Rejects malformed JSON and any top-level value that is not an object
/// (arrays, scalars and null included); the merge core never sees either.
pub fn parse_document(text: &str) -> Result<Value, InputError> {
    let value: Value = serde_json::from_str(text)?;
    if !value.is_object() {
        return Err(InputError::NotAnObject);
    }
    Ok(value)
}

// ── Merging ───────────────────────────────────────────────────────────────

/// Everything the binary needs to persist and report one merge.
#[derive(Debug)]
pub struct MergeOutcome {
    /// Pretty-printed merged document.
    pub json: String,
    /// Statistics over the merged document.
    pub stats: Stats,
    /// Whether the alphabetic key pass found an `items` map to sort.
    pub sorted: bool,
    /// Suggested file name, derived from `sorted` and `now`.
    pub file_name: String,
}

/// Merge two mapping files given as raw JSON text.
///
/// `now` feeds the suggested file name; callers pass `Utc::now()` outside
/// of tests.
pub fn merge_mapping_files(
    base_text: &str,
    incoming_text: &str,
    now: DateTime<Utc>,
) -> Result<MergeOutcome, CliError> {
    let base = parse_document(base_text).map_err(CliError::BaseInput)?;
    let incoming = parse_document(incoming_text).map_err(CliError::IncomingInput)?;
    let MergeResult { document, sorted } = merge_documents(&base, incoming);
    let stats = crate::stats::compute_stats(&document);
    let json = to_pretty_json(&document).map_err(CliError::Serialize)?;
    let file_name = output_file_name(sorted, now);
    Ok(MergeOutcome {
        json,
        stats,
        sorted,
        file_name,
    })
}
