//! Rule-based narrative generators for the report's scope and risk sections.
//!
//! Every generator is pure and total: absent or malformed analysis fields
//! fall through to the "unknown" / no-trigger branches.

pub mod center;
pub mod clearing;
pub mod complexity;
pub mod extent;
pub mod recommendations;
pub mod risks;
pub mod work_items;

pub use center::center_point;
pub use clearing::clearing_estimate;
pub use complexity::{complexity, Complexity};
pub use extent::project_extent;
pub use recommendations::project_recommendations;
pub use risks::potential_risks;
pub use work_items::major_work_items;

use crate::payload::AnalysisResult;

/// Terrain descriptions that imply heavy earthworks.
const RUGGED_TERRAIN: [&str; 3] = ["steep", "hilly", "mountainous"];

/// Lower-cased `terrain.type`, empty when absent.
fn terrain_type(analysis: &AnalysisResult) -> String {
    analysis.field("terrain", "type").normalized().unwrap_or_default()
}

fn is_rugged(terrain: &str) -> bool {
    RUGGED_TERRAIN.iter().any(|kw| terrain.contains(kw))
}

/// Lower-cased `vegetation.density`, empty when absent.
fn vegetation_density(analysis: &AnalysisResult) -> String {
    analysis.field("vegetation", "density").normalized().unwrap_or_default()
}
