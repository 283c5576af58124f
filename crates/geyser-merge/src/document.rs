//! Mapping-document conventions and the merge pipeline.
//!
//! A mapping document is any JSON object. By convention it may carry a
//! top-level `items` object whose values are arrays of item records; nothing
//! here validates that shape. Every operation is total over arbitrary values
//! and skips substructures that do not match the convention.

use serde_json::Value;

use crate::merge::deep_merge;
use crate::sort::{sort_by_model_data, sort_keys_alphabetically};
use crate::stats::{compute_stats, Stats};

/// Top-level field holding the per-type item arrays.
pub const ITEMS_FIELD: &str = "items";

/// Item-record field used as the dedup identity and the numeric sort key.
pub const MODEL_DATA_FIELD: &str = "custom_model_data";

/// Item-record field feeding the name statistics.
pub const NAME_FIELD: &str = "name";

/// Outcome of one merge invocation.
///
/// Owns the merged document. `sorted` records whether the alphabetic key
/// pass found an `items` map to reorder. A fresh `MergeResult` is produced
/// per merge; nothing is cached across invocations.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeResult {
    pub document: Value,
    pub sorted: bool,
}

impl MergeResult {
    /// Summary statistics for the merged document, recomputed on every call.
    pub fn stats(&self) -> Stats {
        compute_stats(&self.document)
    }
}

/// Merge `incoming` into a copy of `base` and run both sort passes.
///
/// `base` is never mutated; `incoming` is consumed. The numeric pass always
/// runs; the alphabetic pass reports through [`MergeResult::sorted`] whether
/// it had an `items` map to work on.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use geyser_merge::document::merge_documents;
///
/// let base = json!({"items": {"tool": [{"custom_model_data": 5}]}});
/// let incoming = json!({"items": {"tool": [{"custom_model_data": 2}]}});
/// let result = merge_documents(&base, incoming);
///
/// assert!(result.sorted);
/// let tool = result.document["items"]["tool"].as_array().unwrap();
/// assert_eq!(tool[0]["custom_model_data"], 2);
/// assert_eq!(tool[1]["custom_model_data"], 5);
/// ```
pub fn merge_documents(base: &Value, incoming: Value) -> MergeResult {
    let mut document = deep_merge(base, incoming);
    sort_by_model_data(&mut document);
    let sorted = sort_keys_alphabetically(&mut document);
    MergeResult { document, sorted }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pipeline_merges_sorts_and_flags() {
        let base = json!({"items": {"minecraft:stick": [{"custom_model_data": 3}]}});
        let incoming = json!({"items": {"minecraft:apple": [{"custom_model_data": 1}]}});
        let result = merge_documents(&base, incoming);

        assert!(result.sorted);
        let keys: Vec<&String> = result.document["items"].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["minecraft:apple", "minecraft:stick"]);
    }

    #[test]
    fn pipeline_without_items_reports_unsorted() {
        let base = json!({"format_version": 1});
        let incoming = json!({"format_version": 2});
        let result = merge_documents(&base, incoming);

        assert!(!result.sorted);
        assert_eq!(result.document, json!({"format_version": 2}));
    }

    #[test]
    fn base_document_is_left_untouched() {
        let base = json!({"items": {"tool": [{"custom_model_data": 9}]}});
        let before = base.clone();
        let _ = merge_documents(&base, json!({"items": {"tool": [{"custom_model_data": 1}]}}));
        assert_eq!(base, before);
    }

    #[test]
    fn stats_track_the_current_document() {
        let base = json!({"items": {"tool": [{"custom_model_data": 1, "name": "Axe"}]}});
        let result = merge_documents(&base, json!({}));
        let stats = result.stats();
        assert_eq!(stats.total_items, 1);
        assert_eq!(stats.longest_name, "Axe");
    }
}
