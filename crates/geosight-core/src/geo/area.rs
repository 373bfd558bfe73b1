//! Planar polygon area estimate.
//!
//! Each edge is projected onto a local equirectangular plane in kilometres:
//!   y = R · lat
//!   x = R · lon · cos((lat_i + lat_j) / 2)
//! where the cosine scale uses the mean latitude of that edge's two endpoints,
//! so neighbouring edges carry slightly different horizontal scales. The
//! shoelace sum over the projected edges gives the area.
//!
//! This is not a geodesic area. Large polygons, or ones spanning wide longitude
//! ranges, are distorted. Longitudes are used as given: a ring crossing the
//! antimeridian (+180 → -180) is NOT unwrapped and will come out wrong.

use super::coords::LatLon;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Approximate area enclosed by `points`, in square kilometres.
///
/// Returns exactly 0.0 for fewer than three points. The ring is closed
/// implicitly; the first point need not be repeated.
pub fn area_sq_km(points: &[LatLon]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..n {
        let (lat_i, lon_i) = points[i].to_radians();
        let (lat_j, lon_j) = points[(i + 1) % n].to_radians();
        let scale = ((lat_i + lat_j) / 2.0).cos();

        let x_i = EARTH_RADIUS_KM * lon_i * scale;
        let y_i = EARTH_RADIUS_KM * lat_i;
        let x_j = EARTH_RADIUS_KM * lon_j * scale;
        let y_j = EARTH_RADIUS_KM * lat_j;

        sum += x_i * y_j - x_j * y_i;
    }

    sum.abs() / 2.0
}
