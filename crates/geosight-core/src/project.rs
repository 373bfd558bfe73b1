use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::GeometryError;
use crate::geo::{parse_polygon, LatLon};

/// Kind of infrastructure being assessed.
///
/// Serialized as its display name ("Transmission Line", "Solar Farm", ...).
/// Unrecognised names are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectType {
    Road,
    Pipeline,
    TransmissionLine,
    SolarFarm,
    BuildingComplex,
    Other(String),
}

impl ProjectType {
    pub fn name(&self) -> &str {
        match self {
            ProjectType::Road => "Road",
            ProjectType::Pipeline => "Pipeline",
            ProjectType::TransmissionLine => "Transmission Line",
            ProjectType::SolarFarm => "Solar Farm",
            ProjectType::BuildingComplex => "Building Complex",
            ProjectType::Other(name) => name,
        }
    }

    /// Linear projects are sized by length, everything else by area.
    pub fn is_linear(&self) -> bool {
        matches!(self, ProjectType::Road | ProjectType::Pipeline | ProjectType::TransmissionLine)
    }
}

impl From<String> for ProjectType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "Road" => ProjectType::Road,
            "Pipeline" => ProjectType::Pipeline,
            "Transmission Line" => ProjectType::TransmissionLine,
            "Solar Farm" => ProjectType::SolarFarm,
            "Building Complex" => ProjectType::BuildingComplex,
            _ => ProjectType::Other(name),
        }
    }
}

impl From<&str> for ProjectType {
    fn from(name: &str) -> Self {
        ProjectType::from(name.to_string())
    }
}

impl From<ProjectType> for String {
    fn from(t: ProjectType) -> Self {
        t.name().to_string()
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Project record as handed over by the persistence layer.
///
/// `coordinates` stays a raw JSON value so that a malformed boundary still
/// produces a report with degraded location text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub name: String,
    #[serde(rename = "type")]
    pub project_type: ProjectType,
    #[serde(default)]
    pub coordinates: Value,
}

impl ProjectDetails {
    pub fn new(name: impl Into<String>, project_type: impl Into<ProjectType>, coordinates: Value) -> Self {
        Self { name: name.into(), project_type: project_type.into(), coordinates }
    }

    /// Number of boundary entries; 0 if `coordinates` is not an array.
    pub fn point_count(&self) -> usize {
        self.coordinates.as_array().map_or(0, Vec::len)
    }

    pub fn polygon(&self) -> Result<Vec<LatLon>, GeometryError> {
        parse_polygon(&self.coordinates)
    }
}
