use crate::payload::{display_value, AnalysisResult};

/// Vegetation clearing estimate from `vegetation.density`.
///
/// Unrecognised densities echo the value as supplied, before lower-casing.
pub fn clearing_estimate(analysis: &AnalysisResult) -> String {
    let density = analysis.field("vegetation", "density").normalized();

    match density.as_deref() {
        Some("dense") => "Significant clearing required (high vegetation density)".to_string(),
        Some("moderate") => "Moderate clearing required".to_string(),
        Some("sparse") | Some("low") => "Minimal clearing required (sparse vegetation)".to_string(),
        _ => {
            let original = analysis
                .object("vegetation")
                .and_then(|v| v.get("density"))
                .map_or_else(|| "Unknown".to_string(), display_value);
            format!("Clearing requirements to be determined (Vegetation density: {original})")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn estimate(v: Value) -> String {
        clearing_estimate(&AnalysisResult::from_value(v))
    }

    #[test]
    fn known_densities_any_case() {
        assert_eq!(
            estimate(json!({"vegetation": {"density": "Dense"}})),
            "Significant clearing required (high vegetation density)"
        );
        assert_eq!(estimate(json!({"vegetation": {"density": "MODERATE"}})), "Moderate clearing required");
        assert_eq!(
            estimate(json!({"vegetation": {"density": "Sparse"}})),
            "Minimal clearing required (sparse vegetation)"
        );
        assert_eq!(
            estimate(json!({"vegetation": {"density": "low"}})),
            "Minimal clearing required (sparse vegetation)"
        );
    }

    #[test]
    fn nested_description_is_used() {
        assert_eq!(
            estimate(json!({"vegetation": {"density": {"description": "Dense"}}})),
            "Significant clearing required (high vegetation density)"
        );
    }

    #[test]
    fn unrecognised_density_echoes_original() {
        assert_eq!(
            estimate(json!({"vegetation": {"density": "Very High"}})),
            "Clearing requirements to be determined (Vegetation density: Very High)"
        );
        assert_eq!(
            estimate(json!({"vegetation": {"density": {"description": "Mixed"}}})),
            r#"Clearing requirements to be determined (Vegetation density: {"description":"Mixed"})"#
        );
        assert_eq!(
            estimate(json!({"vegetation": {"density": null}})),
            "Clearing requirements to be determined (Vegetation density: null)"
        );
    }

    #[test]
    fn absent_vegetation_is_unknown() {
        let unknown = "Clearing requirements to be determined (Vegetation density: Unknown)";
        assert_eq!(estimate(json!({})), unknown);
        assert_eq!(estimate(json!({"vegetation": null})), unknown);
        assert_eq!(estimate(json!({"vegetation": {"types": ["Trees"]}})), unknown);
    }
}
