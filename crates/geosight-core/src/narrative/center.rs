use serde_json::Value;

use crate::geo::{centroid, parse_polygon};

/// Mean latitude and longitude of the boundary as `"{lat}, {lng}"` with six
/// decimals.
///
/// No points gives `"Unknown"`. A malformed boundary is logged and reported
/// as text rather than failing the report.
pub fn center_point(coordinates: &Value) -> String {
    match parse_polygon(coordinates) {
        Ok(points) => match centroid(&points) {
            Some(c) => format!("{:.6}, {:.6}", c.lat, c.lon),
            None => "Unknown".to_string(),
        },
        Err(e) => {
            log::error!("error calculating center coordinates: {e}; coordinates: {coordinates}");
            format!("Error calculating center ({e})")
        }
    }
}
