//! Textual output: pretty printing and the persisted-file naming convention.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// Serialize `doc` as pretty-printed JSON with 2-space indentation.
///
/// The indentation is part of the output contract; consumers diff merged
/// mapping files.
pub fn to_pretty_json(doc: &Value) -> serde_json::Result<String> {
    serde_json::to_string_pretty(doc)
}

/// File name for a persisted merge result.
///
/// Encodes whether the alphabetic key pass ran, plus a second-resolution
/// UTC timestamp with colons replaced by hyphens for filesystem safety.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use geyser_merge::output::output_file_name;
///
/// let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
/// assert_eq!(
///     output_file_name(true, at),
///     "geyser_mappings_merged_sorted_2024-06-01T12-00-00.json"
/// );
/// ```
pub fn output_file_name(sorted: bool, now: DateTime<Utc>) -> String {
    let timestamp = now.format("%Y-%m-%dT%H-%M-%S");
    if sorted {
        format!("geyser_mappings_merged_sorted_{timestamp}.json")
    } else {
        format!("geyser_mappings_merged_{timestamp}.json")
    }
}
