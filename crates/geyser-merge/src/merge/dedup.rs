use serde_json::Value;

use crate::document::MODEL_DATA_FIELD;

/// Append the entries of `incoming` to `existing`, dropping those whose
/// identity already occurs in `existing`.
///
/// The identity of an entry is its `custom_model_data` value; entries
/// without one (including non-object entries) all share a single "absent"
/// identity. The filter compares against the entries `existing` held on
/// entry, so incoming entries are not deduplicated against each other: two
/// incoming entries carrying the same novel identity are both appended. A
/// dropped entry is dropped whole; none of its other fields are merged.
///
/// No element of `existing` is ever removed or reordered.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use geyser_merge::merge::merge_item_arrays;
///
/// let mut existing = vec![json!({"custom_model_data": 1, "name": "A"})];
/// let incoming = vec![
///     json!({"custom_model_data": 1, "name": "B"}),
///     json!({"custom_model_data": 2, "name": "C"}),
/// ];
/// merge_item_arrays(&mut existing, incoming);
///
/// assert_eq!(existing.len(), 2);
/// assert_eq!(existing[0]["name"], "A");
/// assert_eq!(existing[1]["name"], "C");
/// ```
pub fn merge_item_arrays(existing: &mut Vec<Value>, incoming: Vec<Value>) {
    let kept: Vec<Value> = {
        let seen: Vec<Option<&Value>> = existing.iter().map(identity_of).collect();
        incoming
            .into_iter()
            .filter(|entry| !seen.iter().any(|known| identity_eq(*known, identity_of(entry))))
            .collect()
    };
    existing.extend(kept);
}

fn identity_of(entry: &Value) -> Option<&Value> {
    entry.get(MODEL_DATA_FIELD)
}

/// Value equality on identity keys. Numbers compare numerically, so integer
/// and float spellings of the same identity collide.
fn identity_eq(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => a == b,
        },
        _ => false,
    }
}
