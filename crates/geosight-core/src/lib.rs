//! Core of the GeoSight preliminary DPR generator.
//!
//! Turns a drawn project boundary and a loosely-typed analysis payload into
//! the content of a preliminary Detailed Project Report: planar area
//! estimates, dominant land cover, object tallies and the rule-based scope
//! and risk narratives.

pub mod error;
pub mod geo;
pub mod land_cover;
pub mod narrative;
pub mod objects;
pub mod payload;
pub mod project;
pub mod render;
pub mod report;

pub use error::{GeometryError, ReportError};
pub use geo::{area_sq_km, Bounds, LatLon};
pub use payload::AnalysisResult;
pub use project::{ProjectDetails, ProjectType};
pub use report::{assemble, assemble_at, ReportContent};
