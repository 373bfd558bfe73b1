use crate::payload::{any_mentions, AnalysisResult};

use super::{is_rugged, terrain_type, vegetation_density};

pub const ENVIRONMENTAL_PERMITS: &str = "Proximity to water bodies or protected areas may require environmental permits and mitigation measures.";
pub const DENSE_VEGETATION: &str = "Dense vegetation may increase clearing costs, project duration, and require specialized equipment.";
pub const NO_MAJOR_RISKS: &str = "No major risks identified from preliminary analysis, but comprehensive ground survey is essential.";
pub const IMAGERY_LIMITATION: &str = "Satellite imagery analysis provides a preliminary overview and may not reveal all subsurface conditions (e.g., soil type, utilities).";
pub const GROUND_VERIFICATION: &str = "Ground verification, geotechnical investigations, and detailed site surveys are strongly recommended before detailed planning and design.";

/// Buildings above this count raise a social-impact risk.
const MULTIPLE_STRUCTURES: usize = 2;

/// Potential risks: triggered items (terrain, constraints, vegetation,
/// buildings) in that order, or a single "no major risks" line when none
/// trigger, followed by the two standing disclaimers.
pub fn potential_risks(analysis: &AnalysisResult) -> Vec<String> {
    let mut risks = Vec::new();

    let terrain = terrain_type(analysis);
    if is_rugged(&terrain) {
        risks.push(format!(
            "Terrain challenges ({terrain}) may increase construction complexity, time, and cost."
        ));
    }

    if any_mentions(analysis.list("constraints"), &["water", "river", "protected"]) {
        risks.push(ENVIRONMENTAL_PERMITS.to_string());
    }

    if vegetation_density(analysis) == "dense" {
        risks.push(DENSE_VEGETATION.to_string());
    }

    let buildings = analysis.count("objects", "buildings");
    if buildings > MULTIPLE_STRUCTURES {
        risks.push(format!(
            "Proximity to multiple structures ({buildings} buildings detected) may introduce social impacts, require detailed surveys, and potential resettlement planning."
        ));
    }

    if risks.is_empty() {
        risks.push(NO_MAJOR_RISKS.to_string());
    }

    risks.push(IMAGERY_LIMITATION.to_string());
    risks.push(GROUND_VERIFICATION.to_string());
    risks
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn risks(v: Value) -> Vec<String> {
        potential_risks(&AnalysisResult::from_value(v))
    }

    fn ends_with_disclaimers(r: &[String]) -> bool {
        r.len() >= 2 && r[r.len() - 2] == IMAGERY_LIMITATION && r[r.len() - 1] == GROUND_VERIFICATION
    }

    #[test]
    fn steep_terrain_is_lower_cased_in_message() {
        let r = risks(json!({"terrain": {"type": "Steep slopes and mountainous"}}));
        assert_eq!(
            r[0],
            "Terrain challenges (steep slopes and mountainous) may increase construction complexity, time, and cost."
        );
        assert!(ends_with_disclaimers(&r));
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn water_or_protected_constraints() {
        let r = risks(json!({"constraints": ["Near river", "Protected wetland adjacent"]}));
        assert_eq!(r, vec![ENVIRONMENTAL_PERMITS, IMAGERY_LIMITATION, GROUND_VERIFICATION]);
    }

    #[test]
    fn dense_vegetation_any_case() {
        assert!(risks(json!({"vegetation": {"density": "dense"}})).contains(&DENSE_VEGETATION.to_string()));
        assert!(risks(json!({"vegetation": {"density": "Dense"}})).contains(&DENSE_VEGETATION.to_string()));
    }

    #[test]
    fn building_threshold_is_strictly_above_two() {
        let three = risks(json!({"objects": {"buildings": [{}, {}, {}]}}));
        assert_eq!(
            three[0],
            "Proximity to multiple structures (3 buildings detected) may introduce social impacts, require detailed surveys, and potential resettlement planning."
        );
        let two = risks(json!({"objects": {"buildings": [{}, {}]}}));
        assert!(!two.iter().any(|r| r.contains("Proximity to multiple structures")));
        assert_eq!(two[0], NO_MAJOR_RISKS);
    }

    #[test]
    fn multiple_triggers_in_order() {
        let r = risks(json!({
            "objects": {"buildings": [{}, {}, {}, {}, {}]},
            "vegetation": {"density": "Dense"},
            "constraints": ["Protected area nearby"],
            "terrain": {"type": "Hilly"},
        }));
        assert_eq!(r.len(), 6);
        assert_eq!(r[0], "Terrain challenges (hilly) may increase construction complexity, time, and cost.");
        assert_eq!(r[1], ENVIRONMENTAL_PERMITS);
        assert_eq!(r[2], DENSE_VEGETATION);
        assert!(r[3].starts_with("Proximity to multiple structures (5 buildings detected)"));
        assert!(!r.contains(&NO_MAJOR_RISKS.to_string()));
        assert!(ends_with_disclaimers(&r));
    }

    #[test]
    fn fallback_only_when_nothing_triggers() {
        let r = risks(json!({
            "terrain": {"type": "Flat"},
            "constraints": ["Open area"],
            "vegetation": {"density": "Sparse"},
            "objects": {"buildings": []},
        }));
        assert_eq!(r, vec![NO_MAJOR_RISKS, IMAGERY_LIMITATION, GROUND_VERIFICATION]);
        assert_eq!(risks(json!({})), vec![NO_MAJOR_RISKS, IMAGERY_LIMITATION, GROUND_VERIFICATION]);
    }

    #[test]
    fn malformed_sections_do_not_trigger() {
        let r = risks(json!({
            "terrain": ["steep"],
            "constraints": "river",
            "vegetation": "dense",
            "objects": {"buildings": "many"},
        }));
        assert_eq!(r, vec![NO_MAJOR_RISKS, IMAGERY_LIMITATION, GROUND_VERIFICATION]);
    }
}
