pub mod area;
pub mod coords;

pub use area::{area_sq_km, EARTH_RADIUS_KM};
pub use coords::{bounds, centroid, parse_polygon, Bounds, LatLon};
