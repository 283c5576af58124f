use serde_json::Value;

use super::dedup::merge_item_arrays;

/// Recursively merge `incoming` into a structural copy of `base`.
///
/// The merge is total: it cannot fail for any pair of JSON values. Each key
/// of `incoming` is resolved against the copy as follows:
///
/// - key absent in the copy: the incoming value is moved in as-is;
/// - both values are objects: merged recursively;
/// - both values are arrays: concatenated with identity-keyed
///   deduplication (see [`merge_item_arrays`]);
/// - anything else, including type mismatches: the incoming value
///   overwrites the existing one.
///
/// Keys present only in `base` are preserved untouched. Output key order is
/// `base`'s order followed by incoming-only keys in `incoming`'s order.
/// When either side is not an object there are no keys or slots to combine,
/// and the copy of `base` is returned unchanged.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use geyser_merge::merge::deep_merge;
///
/// let base = json!({"a": 1, "nested": {"x": true}});
/// let incoming = json!({"nested": {"y": false}, "b": 2});
/// let merged = deep_merge(&base, incoming);
///
/// assert_eq!(merged, json!({"a": 1, "nested": {"x": true, "y": false}, "b": 2}));
/// ```
pub fn deep_merge(base: &Value, incoming: Value) -> Value {
    let mut result = base.clone();
    if let (Value::Object(out), Value::Object(entries)) = (&mut result, incoming) {
        for (key, value) in entries {
            match out.get_mut(&key) {
                None => {
                    out.insert(key, value);
                }
                Some(slot) => match (slot, value) {
                    (slot @ Value::Object(_), value @ Value::Object(_)) => {
                        let merged = deep_merge(slot, value);
                        *slot = merged;
                    }
                    (Value::Array(existing), Value::Array(incoming)) => {
                        merge_item_arrays(existing, incoming);
                    }
                    (slot, value) => *slot = value,
                },
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn incoming_only_keys_are_appended_in_incoming_order() {
        let base = json!({"a": 1});
        let merged = deep_merge(&base, json!({"c": 3, "b": 2}));
        let keys: Vec<&String> = merged.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["a", "c", "b"]);
    }

    #[test]
    fn base_keys_keep_their_order_when_overwritten() {
        let base = json!({"a": 1, "b": 2, "c": 3});
        let merged = deep_merge(&base, json!({"b": 20}));
        let keys: Vec<&String> = merged.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["a", "b", "c"]);
        assert_eq!(merged["b"], 20);
    }

    #[test]
    fn nested_objects_merge_recursively() {
        let base = json!({"o": {"x": 1, "deep": {"kept": true}}});
        let merged = deep_merge(&base, json!({"o": {"y": 2, "deep": {"added": false}}}));
        assert_eq!(
            merged,
            json!({"o": {"x": 1, "deep": {"kept": true, "added": false}, "y": 2}})
        );
    }

    #[test]
    fn scalar_conflict_is_last_writer_wins() {
        let base = json!({"v": "old"});
        assert_eq!(deep_merge(&base, json!({"v": "new"}))["v"], "new");
    }

    #[test]
    fn type_mismatch_is_last_writer_wins() {
        let base = json!({"v": {"was": "object"}});
        assert_eq!(deep_merge(&base, json!({"v": [1, 2]}))["v"], json!([1, 2]));

        let base = json!({"v": [1, 2]});
        assert_eq!(deep_merge(&base, json!({"v": {"now": "object"}}))["v"], json!({"now": "object"}));
    }

    #[test]
    fn null_conflicts_do_not_recurse() {
        let base = json!({"v": null});
        assert_eq!(deep_merge(&base, json!({"v": {"a": 1}}))["v"], json!({"a": 1}));

        let base = json!({"v": {"a": 1}});
        assert_eq!(deep_merge(&base, json!({"v": null}))["v"], Value::Null);
    }

    #[test]
    fn merging_the_empty_object_is_identity() {
        let base = json!({"items": {"tool": [{"custom_model_data": 1}]}, "extra": [1, 2]});
        assert_eq!(deep_merge(&base, json!({})), base);
    }

    #[test]
    fn non_object_inputs_pass_the_base_copy_through() {
        assert_eq!(deep_merge(&json!({"a": 1}), json!(42)), json!({"a": 1}));
        assert_eq!(deep_merge(&json!(42), json!({"a": 1})), json!(42));
    }

    #[test]
    fn base_is_never_mutated() {
        let base = json!({"o": {"x": 1}, "arr": [{"custom_model_data": 1}]});
        let before = base.clone();
        let _ = deep_merge(
            &base,
            json!({"o": {"x": 2}, "arr": [{"custom_model_data": 2}]}),
        );
        assert_eq!(base, before);
    }
}
