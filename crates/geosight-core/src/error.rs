//! Error types for GeoSight core operations.

use thiserror::Error;

/// Failures while reading a polygon out of a raw JSON value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("coordinates are not a sequence (got {found})")]
    NotASequence { found: &'static str },

    #[error("point {index} is not a [lat, lon] pair of numbers")]
    MalformedPoint { index: usize },
}

/// Fatal report construction errors. Everything below the report boundary
/// degrades to placeholder text instead of failing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("project details are missing")]
    MissingProject,

    #[error("analysis results are missing or empty")]
    MissingAnalysis,
}
