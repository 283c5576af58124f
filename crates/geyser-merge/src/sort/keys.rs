use serde_json::Value;

use crate::document::ITEMS_FIELD;

/// Namespace removed from keys before comparing them.
const STRIPPED_NAMESPACE: &str = "minecraft:";

/// Reorder the keys of `items` ascending by normalized key.
///
/// The normalized key removes the first occurrence of the `minecraft:`
/// namespace anywhere in the key, not only as a prefix, then lowercases the
/// remainder. Comparison is Unicode code point order. Normalization affects
/// ordering only; keys and their values are reassigned verbatim, and the
/// sort is stable for keys that normalize equal.
///
/// Returns `false` without touching the document when there is no `items`
/// object to sort.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use geyser_merge::sort::sort_keys_alphabetically;
///
/// let mut doc = json!({"items": {"minecraft:stick": [], "minecraft:apple": []}});
/// assert!(sort_keys_alphabetically(&mut doc));
///
/// let keys: Vec<&String> = doc["items"].as_object().unwrap().keys().collect();
/// assert_eq!(keys, ["minecraft:apple", "minecraft:stick"]);
/// ```
pub fn sort_keys_alphabetically(doc: &mut Value) -> bool {
    let items = match doc.get_mut(ITEMS_FIELD) {
        Some(Value::Object(items)) => items,
        _ => return false,
    };
    let mut entries: Vec<(String, Value)> = std::mem::take(items).into_iter().collect();
    entries.sort_by_cached_key(|(key, _)| normalize_key(key));
    *items = entries.into_iter().collect();
    true
}

/// Comparison key for an `items` entry; never stored back.
fn normalize_key(key: &str) -> String {
    key.replacen(STRIPPED_NAMESPACE, "", 1).to_lowercase()
}
