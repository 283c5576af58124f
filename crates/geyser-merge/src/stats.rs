//! Summary statistics over a merged mapping document.

use std::fmt;

use serde_json::Value;

use crate::document::{ITEMS_FIELD, NAME_FIELD};

/// Figures derived from a merged document.
///
/// Always recomputed from scratch by [`compute_stats`]; nothing is tracked
/// incrementally. Name lengths are counted in UTF-16 code units.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stats {
    /// Entries across every array under `items`.
    pub total_items: usize,
    /// Keys under `items`, whether or not their value is an array.
    pub unique_type_count: usize,
    /// Length of the longest non-empty `name`.
    pub longest_name_length: usize,
    /// First name reaching `longest_name_length`, in `items` iteration order.
    pub longest_name: String,
    /// Rounded mean name length over all entries, named or not.
    pub average_name_length: usize,
}

/// Compute summary statistics for `doc`.
///
/// Total and read-only: a document without an `items` object yields the
/// all-zero default. Every key under `items` counts one type even when its
/// value is not an array; only array values contribute entries. Entries
/// whose `name` is a non-empty string feed the length sum and the
/// longest-name tracking (strict `>`, so the first name to reach a given
/// length wins ties). The average divides by the total entry count, not by
/// the count of entries that carry a `name`.
pub fn compute_stats(doc: &Value) -> Stats {
    let items = match doc.get(ITEMS_FIELD) {
        Some(Value::Object(items)) => items,
        _ => return Stats::default(),
    };
    let mut stats = Stats::default();
    let mut name_length_sum = 0usize;
    for value in items.values() {
        stats.unique_type_count += 1;
        let entries = match value {
            Value::Array(entries) => entries,
            _ => continue,
        };
        for entry in entries {
            stats.total_items += 1;
            let name = match entry.get(NAME_FIELD) {
                Some(Value::String(name)) if !name.is_empty() => name,
                _ => continue,
            };
            let length = name.encode_utf16().count();
            name_length_sum += length;
            if length > stats.longest_name_length {
                stats.longest_name_length = length;
                stats.longest_name = name.clone();
            }
        }
    }
    if stats.total_items > 0 {
        stats.average_name_length =
            (name_length_sum as f64 / stats.total_items as f64).round() as usize;
    }
    stats
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total items:         {}", self.total_items)?;
        writeln!(f, "unique types:        {}", self.unique_type_count)?;
        if self.longest_name.is_empty() {
            writeln!(f, "longest name:        none")?;
        } else {
            writeln!(
                f,
                "longest name:        {} chars ({})",
                self.longest_name_length, self.longest_name
            )?;
        }
        write!(f, "average name length: {} chars", self.average_name_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_items_yields_all_zero_stats() {
        assert_eq!(compute_stats(&json!({"other": 1})), Stats::default());
        assert_eq!(compute_stats(&json!({"items": "not a map"})), Stats::default());
    }

    #[test]
    fn every_key_counts_a_type_even_on_mismatch() {
        let doc = json!({"items": {
            "tool": [{"name": "Axe"}],
            "broken": "not an array",
        }});
        let stats = compute_stats(&doc);
        assert_eq!(stats.unique_type_count, 2);
        assert_eq!(stats.total_items, 1);
    }

    #[test]
    fn empty_and_missing_names_are_skipped() {
        let doc = json!({"items": {"tool": [
            {"name": ""},
            {"custom_model_data": 1},
            {"name": "Pick"},
            7,
        ]}});
        let stats = compute_stats(&doc);
        assert_eq!(stats.total_items, 4);
        assert_eq!(stats.longest_name, "Pick");
        // Sum 4 over 4 entries, not over the single named entry.
        assert_eq!(stats.average_name_length, 1);
    }

    #[test]
    fn first_name_to_reach_the_max_wins_ties() {
        let doc = json!({"items": {"tool": [
            {"name": "Axe"},
            {"name": "Ore"},
        ]}});
        let stats = compute_stats(&doc);
        assert_eq!(stats.longest_name_length, 3);
        assert_eq!(stats.longest_name, "Axe");
    }

    #[test]
    fn average_rounds_to_nearest() {
        // Lengths 3 + 4 + 3 = 10 over 3 entries: round(3.33) = 3.
        let doc = json!({"items": {"tool": [
            {"name": "Axe"}, {"name": "Pick"}, {"name": "Ore"},
        ]}});
        assert_eq!(compute_stats(&doc).average_name_length, 3);

        // Lengths 3 + 4 = 7 over 2 entries: round(3.5) = 4.
        let doc = json!({"items": {"tool": [{"name": "Axe"}, {"name": "Pick"}]}});
        assert_eq!(compute_stats(&doc).average_name_length, 4);
    }

    #[test]
    fn name_lengths_count_utf16_code_units() {
        // U+1F345 is two UTF-16 code units.
        let doc = json!({"items": {"tool": [{"name": "🍅"}]}});
        let stats = compute_stats(&doc);
        assert_eq!(stats.longest_name_length, 2);
        assert_eq!(stats.average_name_length, 2);
    }

    #[test]
    fn display_renders_a_summary_block() {
        let doc = json!({"items": {"tool": [{"name": "Axe"}]}});
        let rendered = compute_stats(&doc).to_string();
        assert!(rendered.contains("total items:         1"));
        assert!(rendered.contains("longest name:        3 chars (Axe)"));
    }
}
