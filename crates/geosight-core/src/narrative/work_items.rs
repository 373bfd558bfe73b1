use crate::payload::{any_mentions, AnalysisResult};

use super::{is_rugged, terrain_type};

pub const WATERWAY_CROSSING: &str =
    "Waterway crossing structures potentially required (e.g., culverts, bridges)";
pub const EARTHWORKS: &str =
    "Significant earthworks likely required for terrain management (cutting/filling)";
pub const SITE_CLEARING: &str = "General site clearing and preparation";

/// Major work items in fixed order: waterway crossings, earthworks,
/// structure relocation, then general site clearing, which is always last.
pub fn major_work_items(analysis: &AnalysisResult) -> Vec<String> {
    let mut items = Vec::new();

    if any_mentions(analysis.list("water_bodies"), &["stream", "water", "river"]) {
        items.push(WATERWAY_CROSSING.to_string());
    }

    if is_rugged(&terrain_type(analysis)) {
        items.push(EARTHWORKS.to_string());
    }

    let buildings = analysis.count("objects", "buildings");
    let other = analysis.count("objects", "other_structures");
    if buildings > 0 || other > 0 {
        items.push(format!(
            "Potential structure relocation/demolition for {buildings} building(s) and {other} other structure(s)"
        ));
    }

    items.push(SITE_CLEARING.to_string());
    items
}
