//! Geographic coordinate types and polygon helpers.
//! All coordinate math uses f64 for precision.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GeometryError;
use crate::payload::kind_name;

/// A point in geographic coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    /// Latitude in degrees, -90 to +90.
    pub lat: f64,
    /// Longitude in degrees. Not wrapped; used as given.
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Convert to radians.
    pub fn to_radians(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lon.to_radians())
    }
}

/// Axis-aligned extent of a polygon, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

/// Returns the max/min latitude and longitude of the polygon, or `None` if it
/// has no points.
pub fn bounds(points: &[LatLon]) -> Option<Bounds> {
    let first = points.first()?;
    let init = Bounds { north: first.lat, south: first.lat, east: first.lon, west: first.lon };
    Some(points[1..].iter().fold(init, |b, p| Bounds {
        north: b.north.max(p.lat),
        south: b.south.min(p.lat),
        east: b.east.max(p.lon),
        west: b.west.min(p.lon),
    }))
}

/// Arithmetic mean of all latitudes and all longitudes.
pub fn centroid(points: &[LatLon]) -> Option<LatLon> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (lat_sum, lon_sum) = points
        .iter()
        .fold((0.0, 0.0), |(la, lo), p| (la + p.lat, lo + p.lon));
    Some(LatLon::new(lat_sum / n, lon_sum / n))
}

/// Read a polygon from its wire form: an array of `[lat, lon]` arrays.
///
/// `null` reads as an empty polygon. Components past the second are ignored.
pub fn parse_polygon(value: &Value) -> Result<Vec<LatLon>, GeometryError> {
    let items = match value {
        Value::Null => return Ok(Vec::new()),
        Value::Array(items) => items,
        other => return Err(GeometryError::NotASequence { found: kind_name(other) }),
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let pair = item.as_array().ok_or(GeometryError::MalformedPoint { index })?;
            match (pair.first().and_then(Value::as_f64), pair.get(1).and_then(Value::as_f64)) {
                (Some(lat), Some(lon)) => Ok(LatLon::new(lat, lon)),
                _ => Err(GeometryError::MalformedPoint { index }),
            }
        })
        .collect()
}
