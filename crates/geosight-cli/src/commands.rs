use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use geosight_core::geo::{bounds, centroid, parse_polygon, Bounds};
use geosight_core::land_cover::dominant_class;
use geosight_core::narrative::complexity::{complexity, Complexity};
use geosight_core::objects::tally;
use geosight_core::render::render_text;
use geosight_core::{area_sq_km, assemble, AnalysisResult, ProjectDetails, ReportContent};

use crate::config::OutputFormat;

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse JSON in {}", path.display()))
}

/// Render assembled content in the requested format.
pub fn render(report: &ReportContent, format: OutputFormat, header: &str) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report, header)),
        OutputFormat::Json => {
            let mut s = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
            s.push('\n');
            Ok(s)
        }
    }
}

/// Write to `output` if given, otherwise stdout.
pub fn emit(content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{content}"),
    }
    Ok(())
}

// ── area ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct AreaSummary {
    pub points: usize,
    pub area_sq_km: f64,
    pub center: Option<[f64; 2]>,
    pub bounds: Option<Bounds>,
}

/// Accepts either a bare `[[lat, lon], ...]` array or an object carrying it
/// under `coordinates`.
pub fn area_summary(input: &Value) -> Result<AreaSummary> {
    let coords = match input {
        Value::Object(map) => map.get("coordinates").unwrap_or(&Value::Null),
        other => other,
    };
    let points = parse_polygon(coords).context("Invalid polygon")?;
    Ok(AreaSummary {
        points: points.len(),
        area_sq_km: area_sq_km(&points),
        center: centroid(&points).map(|c| [c.lat, c.lon]),
        bounds: bounds(&points),
    })
}

pub fn area(path: &Path) -> Result<()> {
    let input: Value = read_json(path)?;
    let summary = area_summary(&input)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

// ── summarize ────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct DominantClass {
    pub name: Option<String>,
    pub percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct AnalysisSummary {
    pub dominant_land_cover: DominantClass,
    pub object_counts: BTreeMap<String, usize>,
    pub complexity: Complexity,
}

pub fn analysis_summary(analysis: &AnalysisResult) -> AnalysisSummary {
    let (name, percentage) = analysis.section("land_cover").map_or((None, 0.0), dominant_class);
    let object_counts = analysis.section("objects").map(tally).unwrap_or_default();
    AnalysisSummary {
        dominant_land_cover: DominantClass { name, percentage },
        object_counts,
        complexity: complexity(analysis),
    }
}

pub fn summarize(path: &Path) -> Result<()> {
    let analysis: AnalysisResult = read_json(path)?;
    println!("{}", serde_json::to_string_pretty(&analysis_summary(&analysis))?);
    Ok(())
}

// ── report ───────────────────────────────────────────────────────────────────

pub fn report(
    project_path: &Path,
    analysis_path: &Path,
    format: OutputFormat,
    header: &str,
    output: Option<&Path>,
) -> Result<()> {
    let project: ProjectDetails = read_json(project_path)?;
    let analysis: AnalysisResult = read_json(analysis_path)?;
    let content = assemble(Some(&project), Some(&analysis))
        .with_context(|| format!("Cannot build report for {:?}", project.name))?;
    emit(&render(&content, format, header)?, output)
}
