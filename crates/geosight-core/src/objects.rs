//! Per-category counts of detected objects.

use std::collections::BTreeMap;

use serde_json::Value;

/// Metadata keys start with `_` or contain `__` anywhere.
fn is_meta_key(key: &str) -> bool {
    key.starts_with('_') || key.contains("__")
}

/// Count detected items per category.
///
/// Every non-metadata key holding an array contributes its length (an empty
/// array counts as 0). Keys holding anything else are left out entirely.
pub fn tally(detections: &Value) -> BTreeMap<String, usize> {
    let Some(map) = detections.as_object() else {
        return BTreeMap::new();
    };

    map.iter()
        .filter(|(key, _)| !is_meta_key(key))
        .filter_map(|(key, value)| value.as_array().map(|items| (key.clone(), items.len())))
        .collect()
}
