use crate::payload::AnalysisResult;
use crate::project::ProjectType;

use super::{terrain_type, vegetation_density};

pub const VERIFY_FINDINGS: &str = "Verify all findings with detailed ground surveys before final design";

/// Recommendations tailored to the site and the kind of project, always
/// ending with the ground-survey reminder.
pub fn project_recommendations(analysis: &AnalysisResult, project_type: &ProjectType) -> Vec<String> {
    let mut recs = Vec::new();

    if terrain_type(analysis).contains("steep") {
        recs.push("Consider detailed topographical survey to plan for earthworks".to_string());
    }
    if vegetation_density(analysis) == "dense" {
        recs.push("Plan for significant vegetation clearing and consider environmental permits".to_string());
    }
    if !analysis.list("water_bodies").is_empty() {
        recs.push("Detailed hydrological study recommended for water crossing designs".to_string());
    }
    if analysis.count("objects", "buildings") > 0 {
        recs.push("Conduct social impact assessment due to proximity to existing structures".to_string());
    }

    // Road and Building match as substrings so "Rural Road" or "Building
    // Extension" still get their family's item.
    let name = project_type.name();
    let specific = if name.contains("Road") {
        Some("Consider geotechnical investigation for pavement design")
    } else if name == "Pipeline" {
        Some("Assess soil conditions for trench stability")
    } else if name == "Transmission Line" {
        Some("Evaluate tower/pole placement locations based on terrain")
    } else if name == "Solar Farm" {
        Some("Conduct detailed solar radiation study for optimal panel orientation")
    } else if name.contains("Building") {
        Some("Conduct foundation investigation and soil testing")
    } else {
        None
    };
    recs.extend(specific.map(str::to_string));

    recs.push(VERIFY_FINDINGS.to_string());
    recs
}
