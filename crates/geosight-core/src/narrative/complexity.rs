use std::fmt;

use serde::{Deserialize, Serialize};

use crate::payload::AnalysisResult;

use super::{terrain_type, vegetation_density};

/// Coarse construction complexity rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Complexity::Low => "Low",
            Complexity::Medium => "Medium",
            Complexity::High => "High",
        };
        f.write_str(s)
    }
}

const BASE_SCORE: i32 = 50;
const HIGH_THRESHOLD: i32 = 80;
const MEDIUM_THRESHOLD: i32 = 50;

/// Additive complexity score starting from a medium baseline of 50.
pub fn complexity_score(analysis: &AnalysisResult) -> i32 {
    let mut score = BASE_SCORE;

    let terrain = terrain_type(analysis);
    if terrain.contains("steep") {
        score += 15;
    } else if terrain.contains("flat") {
        score -= 10;
    }

    match vegetation_density(analysis).as_str() {
        "dense" => score += 15,
        "sparse" => score -= 10,
        _ => {}
    }

    if analysis.list("water_bodies").len() > 2 {
        score += 15;
    }
    if analysis.count("objects", "buildings") > 5 {
        score += 10;
    }
    if analysis.list("constraints").len() > 3 {
        score += 15;
    }

    score
}

/// Rate the project: 80 and above is high, 50 and above medium, else low.
pub fn complexity(analysis: &AnalysisResult) -> Complexity {
    match complexity_score(analysis) {
        s if s >= HIGH_THRESHOLD => Complexity::High,
        s if s >= MEDIUM_THRESHOLD => Complexity::Medium,
        _ => Complexity::Low,
    }
}
