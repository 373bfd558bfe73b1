//! Dominant land cover selection from a classification result.

use serde_json::Value;

/// Pick the category with the highest `percentage` from
/// `land_cover.classifications`.
///
/// Entries whose detail is not an object, or whose `percentage` is not a
/// number, are skipped. On a tie the first entry in document order wins.
/// Returns `(None, 0.0)` when there is no valid candidate.
pub fn dominant_class(land_cover: &Value) -> (Option<String>, f64) {
    let Some(classifications) = land_cover.get("classifications").and_then(Value::as_object) else {
        return (None, 0.0);
    };

    let mut best: Option<(&str, f64)> = None;
    for (name, detail) in classifications {
        let Some(pct) = detail
            .as_object()
            .and_then(|d| d.get("percentage"))
            .and_then(Value::as_f64)
        else {
            continue;
        };
        if best.map_or(true, |(_, top)| pct > top) {
            best = Some((name.as_str(), pct));
        }
    }

    match best {
        Some((name, pct)) => (Some(name.to_string()), pct),
        None => (None, 0.0),
    }
}
