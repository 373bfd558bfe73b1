//! Report assembly: project record + analysis payload → report content.
//!
//! This is the only fallible boundary of the core. A missing project or a
//! missing/empty analysis is an error; anything malformed inside them
//! degrades to placeholder text in the affected entry.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::ReportError;
use crate::geo::{area_sq_km, bounds};
use crate::narrative::{
    center_point, clearing_estimate, complexity, major_work_items, potential_risks, project_extent,
    project_recommendations,
};
use crate::payload::AnalysisResult;
use crate::project::ProjectDetails;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const KEY_RECOMMENDATIONS: [&str; 4] = [
    "Conduct thorough ground truthing and site verification for all aspects identified in this report.",
    "Undertake detailed geotechnical investigations for foundation and earthworks design.",
    "Perform comprehensive environmental and social impact assessments (ESIA).",
    "Engage with local authorities and stakeholders regarding identified constraints and potential impacts.",
];

const APPENDICES: [&str; 5] = [
    "Appendix A: Annotated Project Area Map (showing boundary, key features)",
    "Appendix B: Land Cover Classification Map",
    "Appendix C: Detected Objects and Infrastructure Map",
    "Appendix D: Terrain Profile Map (if applicable)",
    "Appendix E: Constraints Map (e.g., highlighting water bodies, protected areas)",
];

/// Existing-conditions entries: (payload key, label, fallback when absent).
const CONDITIONS: [(&str, &str, Fallback); 7] = [
    ("land_cover", "Land Cover Analysis", Fallback::Status),
    ("objects", "Detected Objects and Infrastructure", Fallback::Status),
    ("terrain", "Terrain Profile", Fallback::Status),
    ("vegetation", "Vegetation Overview", Fallback::Status),
    ("water_bodies", "Water Bodies Identified", Fallback::Note("No specific water bodies identified or data not available.")),
    ("access_roads", "Accessibility Assessment", Fallback::Note("No specific access roads identified or data not available.")),
    ("constraints", "Potential Constraints Identified", Fallback::Note("No specific constraints identified or data not available.")),
];

#[derive(Clone, Copy)]
enum Fallback {
    Status,
    Note(&'static str),
}

impl Fallback {
    fn value(self) -> Value {
        match self {
            Fallback::Status => json!({"status": "No data available or error in analysis."}),
            Fallback::Note(note) => json!([note]),
        }
    }
}

/// Body of a report entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Body {
    Text(String),
    List(Vec<String>),
    /// Analysis data passed through untouched.
    Data(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub body: Body,
}

impl Entry {
    fn text(label: &str, text: impl Into<String>) -> Self {
        Self { label: Some(label.to_string()), body: Body::Text(text.into()) }
    }

    fn list<S: Into<String>>(label: &str, items: impl IntoIterator<Item = S>) -> Self {
        Self {
            label: Some(label.to_string()),
            body: Body::List(items.into_iter().map(Into::into).collect()),
        }
    }

    fn data(label: &str, value: Value) -> Self {
        Self { label: Some(label.to_string()), body: Body::Data(value) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Outline number, e.g. "4.0".
    pub number: String,
    pub title: String,
    pub entries: Vec<Entry>,
}

impl Section {
    fn new(number: &str, title: &str, entries: Vec<Entry>) -> Self {
        Self { number: number.to_string(), title: title.to_string(), entries }
    }

    pub fn entry(&self, label: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.label.as_deref() == Some(label))
    }
}

/// Everything the document renderer needs, in reading order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportContent {
    pub title: String,
    pub generated_at: String,
    pub sections: Vec<Section>,
}

impl ReportContent {
    pub fn section(&self, number: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.number == number)
    }
}

/// Assemble report content stamped with the current local time.
pub fn assemble(
    project: Option<&ProjectDetails>,
    analysis: Option<&AnalysisResult>,
) -> Result<ReportContent, ReportError> {
    assemble_at(project, analysis, chrono::Local::now().naive_local())
}

/// Assemble report content with an explicit generation time.
pub fn assemble_at(
    project: Option<&ProjectDetails>,
    analysis: Option<&AnalysisResult>,
    generated_at: NaiveDateTime,
) -> Result<ReportContent, ReportError> {
    let Some(project) = project else {
        log::error!("missing project details for report generation");
        return Err(ReportError::MissingProject);
    };
    let analysis = match analysis {
        Some(a) if !a.is_empty() => a,
        _ => {
            log::error!("missing analysis results for report on {:?}", project.name);
            return Err(ReportError::MissingAnalysis);
        }
    };
    log::debug!("assembling report for project: {}", project.name);

    let name = project.name.as_str();
    let kind = project.project_type.name();
    let center = center_point(&project.coordinates);
    let generated = generated_at.format(TIMESTAMP_FORMAT).to_string();

    let sections = vec![
        Section::new("1.0", "Introduction", vec![
            Entry::text("Project Name", name),
            Entry::text("Project Type", kind),
            Entry::text("Location (Center)", center.clone()),
            Entry::text("Generated Date", generated.clone()),
            Entry::text("Brief Scope", format!(
                "This document presents a preliminary assessment for the {kind} project, '{name}', based on automated analysis of available satellite imagery and geographical data. Its purpose is to provide initial insights for project planning and feasibility considerations."
            )),
        ]),
        site_section(project, &center),
        Section::new(
            "3.0",
            "Existing Site Conditions based on Imagery Analysis",
            CONDITIONS
                .iter()
                .map(|&(key, label, fallback)| {
                    Entry::data(label, analysis.section(key).cloned().unwrap_or_else(|| fallback.value()))
                })
                .collect(),
        ),
        Section::new("4.0", "Preliminary Scope Considerations", vec![
            Entry::text("Approximate Project Length/Area", project_extent(project)),
            Entry::text("Estimated Clearing Requirements", clearing_estimate(analysis)),
            Entry::list("Potential Major Work Items", major_work_items(analysis)),
            Entry::text("Estimated Project Complexity", complexity(analysis).to_string()),
        ]),
        Section::new("5.0", "Preliminary Risk Assessment & Recommendations", vec![
            Entry::list("Identified Potential Risks", potential_risks(analysis)),
            Entry::list("Key Recommendations", KEY_RECOMMENDATIONS),
            Entry::list(
                "Project-Specific Recommendations",
                project_recommendations(analysis, &project.project_type),
            ),
            Entry::text(
                "Disclaimer",
                "This is a high-level, preliminary risk assessment based on automated analysis of satellite imagery. It is not exhaustive. A comprehensive risk assessment requires detailed site investigations, engineering studies, and expert consultation.",
            ),
        ]),
        Section::new("6.0", "Visual Appendices (Illustrative)", vec![
            Entry::text(
                "Note",
                "The following are placeholders. In a full DPR, these sections would contain maps and imagery derived from the analysis.",
            ),
            Entry::list("Appendices List", APPENDICES),
        ]),
        Section::new("7.0", "Conclusion", vec![Entry {
            label: None,
            body: Body::Text(
                "This preliminary DPR provides an initial overview of the project based on automated analysis. \
                 The findings should be used to guide further detailed investigations, including mandatory ground surveys, \
                 to validate and expand upon these results for informed decision-making and detailed project planning."
                    .to_string(),
            ),
        }]),
    ];

    log::info!("report content assembled for {name}: {} sections", sections.len());
    Ok(ReportContent { title: format!("Preliminary DPR for {name}"), generated_at: generated, sections })
}

fn site_section(project: &ProjectDetails, center: &str) -> Section {
    let (extent, area) = match project.polygon() {
        Ok(points) => {
            let extent = bounds(&points).map_or_else(
                || "Unknown".to_string(),
                |b| format!("N {:.6}, S {:.6}, E {:.6}, W {:.6}", b.north, b.south, b.east, b.west),
            );
            let area = if points.len() < 3 {
                "Not applicable (fewer than three boundary points)".to_string()
            } else {
                format!("{:.2} sq km (planar approximation of the drawn boundary)", area_sq_km(&points))
            };
            (extent, area)
        }
        Err(e) => {
            log::debug!("boundary of {:?} unreadable: {e}", project.name);
            ("Unknown".to_string(), "Unknown (boundary could not be read)".to_string())
        }
    };

    Section::new("2.0", "Project Site Location & Description", vec![
        Entry::text("Geographic Coordinates", format!("Center: {center}. Full boundary coordinates are on record.")),
        Entry::text("Bounding Box", extent),
        Entry::text("Approximate Boundary Area", area),
        Entry::text(
            "General Description",
            "The project site characteristics detailed in this report are derived from automated analysis of satellite imagery. All findings, especially regarding terrain, land cover, and existing infrastructure, require comprehensive ground verification and site surveys prior to any detailed engineering design or construction activities.",
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(9, 30, 0).unwrap()
    }

    fn road() -> ProjectDetails {
        ProjectDetails::new("Test Highway", "Road", json!([[0, 0], [0, 1], [1, 1], [1, 0]]))
    }

    fn analysis() -> AnalysisResult {
        AnalysisResult::from_value(json!({
            "terrain": {"type": "Moderately Hilly"},
            "water_bodies": ["Small seasonal stream"],
        }))
    }

    #[test]
    fn missing_inputs_are_errors() {
        assert_eq!(assemble_at(None, Some(&analysis()), at()), Err(ReportError::MissingProject));
        assert_eq!(assemble_at(Some(&road()), None, at()), Err(ReportError::MissingAnalysis));
        assert_eq!(
            assemble_at(Some(&road()), Some(&AnalysisResult::default()), at()),
            Err(ReportError::MissingAnalysis)
        );
    }

    #[test]
    fn sections_in_outline_order() {
        let report = assemble_at(Some(&road()), Some(&analysis()), at()).unwrap();
        let numbers: Vec<&str> = report.sections.iter().map(|s| s.number.as_str()).collect();
        assert_eq!(numbers, ["1.0", "2.0", "3.0", "4.0", "5.0", "6.0", "7.0"]);
        assert_eq!(report.title, "Preliminary DPR for Test Highway");
        assert_eq!(report.generated_at, "2024-03-01 09:30:00");
    }

    #[test]
    fn blank_name_is_kept_verbatim() {
        let project = ProjectDetails::new("  ", "Road", json!([]));
        let report = assemble_at(Some(&project), Some(&analysis()), at()).unwrap();
        assert_eq!(report.title, "Preliminary DPR for   ");
        let intro = report.section("1.0").unwrap();
        assert_eq!(intro.entry("Project Name").unwrap().body, Body::Text("  ".into()));
    }

    #[test]
    fn site_section_uses_planar_area() {
        let report = assemble_at(Some(&road()), Some(&analysis()), at()).unwrap();
        let site = report.section("2.0").unwrap();
        assert_eq!(
            site.entry("Approximate Boundary Area").unwrap().body,
            Body::Text("12363.13 sq km (planar approximation of the drawn boundary)".into())
        );
        assert_eq!(
            site.entry("Bounding Box").unwrap().body,
            Body::Text("N 1.000000, S 0.000000, E 1.000000, W 0.000000".into())
        );
    }

    #[test]
    fn absent_conditions_use_fallbacks() {
        let report = assemble_at(Some(&road()), Some(&analysis()), at()).unwrap();
        let conditions = report.section("3.0").unwrap();
        assert_eq!(conditions.entries.len(), 7);
        assert_eq!(
            conditions.entry("Land Cover Analysis").unwrap().body,
            Body::Data(json!({"status": "No data available or error in analysis."}))
        );
        assert_eq!(
            conditions.entry("Water Bodies Identified").unwrap().body,
            Body::Data(json!(["Small seasonal stream"]))
        );
        assert_eq!(
            conditions.entry("Accessibility Assessment").unwrap().body,
            Body::Data(json!(["No specific access roads identified or data not available."]))
        );
    }

    #[test]
    fn malformed_boundary_degrades() {
        let broken = ProjectDetails::new("Broken", "Solar Farm", json!("nowhere"));
        let report = assemble_at(Some(&broken), Some(&analysis()), at()).unwrap();
        let intro = report.section("1.0").unwrap();
        match &intro.entry("Location (Center)").unwrap().body {
            Body::Text(t) => assert!(t.contains("Error calculating center")),
            other => panic!("unexpected body {other:?}"),
        }
        let site = report.section("2.0").unwrap();
        assert_eq!(
            site.entry("Approximate Boundary Area").unwrap().body,
            Body::Text("Unknown (boundary could not be read)".into())
        );
    }

    #[test]
    fn serializes_with_tagged_bodies() {
        let report = assemble_at(Some(&road()), Some(&analysis()), at()).unwrap();
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v["sections"][0]["entries"][0], json!({"label": "Project Name", "body": {"kind": "text", "value": "Test Highway"}}));
        assert!(v["sections"][6]["entries"][0].get("label").is_none());
    }
}
