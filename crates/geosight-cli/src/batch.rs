//! Parallel report generation over a directory of job files.
//!
//! A job file is `{"project": {...}, "analysis": {...}}`. Either key may be
//! missing; such jobs fail with the core's report error and are counted, not
//! fatal to the rest of the batch.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use rayon::prelude::*;
use serde::Deserialize;

use geosight_core::{assemble, AnalysisResult, ProjectDetails};

use crate::commands::{read_json, render};
use crate::config::OutputFormat;

#[derive(Debug, Deserialize)]
pub struct Job {
    pub project: Option<ProjectDetails>,
    pub analysis: Option<AnalysisResult>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub written: usize,
    pub failed: Vec<PathBuf>,
}

/// All `*.json` files directly under `dir`, sorted by name.
pub fn job_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(dir)
        .with_context(|| format!("Failed to read job directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    files.sort();
    Ok(files)
}

fn run_job(path: &Path, out_dir: &Path, format: OutputFormat, header: &str) -> Result<PathBuf> {
    let job: Job = read_json(path)?;
    let content = assemble(job.project.as_ref(), job.analysis.as_ref())
        .with_context(|| format!("Job {} is incomplete", path.display()))?;

    let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default();
    let target = out_dir.join(format!("{stem}.{}", format.extension()));
    fs::write(&target, render(&content, format, header)?)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    Ok(target)
}

fn same_dir(a: &Path, b: &Path) -> Result<bool> {
    let a = fs::canonicalize(a).with_context(|| format!("Failed to resolve {}", a.display()))?;
    let b = fs::canonicalize(b).with_context(|| format!("Failed to resolve {}", b.display()))?;
    Ok(a == b)
}

/// Generate one report per job file in parallel.
pub fn run(dir: &Path, out_dir: &Path, format: OutputFormat, header: &str) -> Result<BatchSummary> {
    let files = job_files(dir)?;
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;
    if format == OutputFormat::Json && same_dir(dir, out_dir)? {
        bail!(
            "JSON reports would overwrite the job files in {}; choose another output directory",
            dir.display()
        );
    }
    log::info!("generating {} report(s) from {}", files.len(), dir.display());

    let results: Vec<(PathBuf, Result<PathBuf>)> = files
        .par_iter()
        .map(|path| (path.clone(), run_job(path, out_dir, format, header)))
        .collect();

    let mut summary = BatchSummary::default();
    for (path, result) in results {
        match result {
            Ok(target) => {
                log::debug!("{} -> {}", path.display(), target.display());
                summary.written += 1;
            }
            Err(e) => {
                log::error!("{}: {e:#}", path.display());
                summary.failed.push(path);
            }
        }
    }
    Ok(summary)
}
