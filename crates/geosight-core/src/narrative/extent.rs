use crate::project::ProjectDetails;

const KM_PER_POINT: f64 = 0.5;
const SQ_KM_PER_POINT: f64 = 0.25;

/// Rough project size from the number of boundary points.
///
/// Linear projects (road, pipeline, transmission line) report a length and
/// need at least two points; everything else reports an area, which may be
/// zero. This is a placeholder proxy, not a measurement.
pub fn project_extent(project: &ProjectDetails) -> String {
    let count = project.point_count();
    if project.project_type.is_linear() {
        if count < 2 {
            return "Unable to calculate length (insufficient points)".to_string();
        }
        // `{:?}` keeps the trailing ".0" on whole numbers.
        format!(
            "Approximately {:?} km (Simplified calculation based on point count)",
            count as f64 * KM_PER_POINT
        )
    } else {
        format!(
            "Project area: approximately {:?} sq km (Simplified calculation based on point count)",
            count as f64 * SQ_KM_PER_POINT
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn project(kind: &str, coords: Value) -> ProjectDetails {
        ProjectDetails::new("Test", kind, coords)
    }

    #[test]
    fn road_with_three_points() {
        let p = project("Road", json!([[0, 0], [0, 1], [1, 1]]));
        assert_eq!(project_extent(&p), "Approximately 1.5 km (Simplified calculation based on point count)");
    }

    #[test]
    fn pipeline_with_five_points() {
        let p = project("Pipeline", json!([[0, 0], [0, 1], [1, 1], [1, 2], [2, 2]]));
        assert_eq!(project_extent(&p), "Approximately 2.5 km (Simplified calculation based on point count)");
    }

    #[test]
    fn whole_kilometres_keep_decimal() {
        let p = project("Road", json!([[0, 0], [0, 1]]));
        assert_eq!(project_extent(&p), "Approximately 1.0 km (Simplified calculation based on point count)");
    }

    #[test]
    fn transmission_line_needs_two_points() {
        let insufficient = "Unable to calculate length (insufficient points)";
        assert_eq!(project_extent(&project("Transmission Line", json!([[0, 0]]))), insufficient);
        assert_eq!(project_extent(&project("Transmission Line", json!([]))), insufficient);
        assert_eq!(project_extent(&project("Road", Value::Null)), insufficient);
    }

    #[test]
    fn areal_types() {
        assert_eq!(
            project_extent(&project("Solar Farm", json!([[0, 0], [0, 1], [1, 1], [1, 0]]))),
            "Project area: approximately 1.0 sq km (Simplified calculation based on point count)"
        );
        assert_eq!(
            project_extent(&project("Building Complex", json!([[0, 0], [0, 1], [1, 1], [1, 0], [0.5, 0.5]]))),
            "Project area: approximately 1.25 sq km (Simplified calculation based on point count)"
        );
        assert_eq!(
            project_extent(&project("Wind Farm", json!([]))),
            "Project area: approximately 0.0 sq km (Simplified calculation based on point count)"
        );
    }
}
