use serde_json::Value;

use crate::document::{ITEMS_FIELD, MODEL_DATA_FIELD};

/// Stable-sort every array under `items` ascending by its entries'
/// `custom_model_data`.
///
/// The sort key is read as a number and defaults to 0 when the field is
/// absent or not a number, so unkeyed entries sort before keyed ones while
/// keeping their relative order. Non-array values under `items` are left
/// untouched; a document without an `items` object is a no-op.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use geyser_merge::sort::sort_by_model_data;
///
/// let mut doc = json!({"items": {"tool": [
///     {"custom_model_data": 5, "name": "Axe"},
///     {"custom_model_data": 2, "name": "Pick"},
/// ]}});
/// sort_by_model_data(&mut doc);
///
/// assert_eq!(doc["items"]["tool"][0]["name"], "Pick");
/// assert_eq!(doc["items"]["tool"][1]["name"], "Axe");
/// ```
pub fn sort_by_model_data(doc: &mut Value) {
    let items = match doc.get_mut(ITEMS_FIELD) {
        Some(Value::Object(items)) => items,
        _ => return,
    };
    for value in items.values_mut() {
        if let Value::Array(entries) = value {
            entries.sort_by(|a, b| model_data_of(a).total_cmp(&model_data_of(b)));
        }
    }
}

fn model_data_of(entry: &Value) -> f64 {
    entry
        .get(MODEL_DATA_FIELD)
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}
