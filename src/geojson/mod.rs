#[cfg(feature = "desktop")]
pub mod commands;
pub mod data;
pub mod document;
pub mod glass;
pub mod thumbnail;
pub mod workspace;

use std::path::Path;

pub use data::{GeoJsonData, LANDSCAPING_FNO_NAME};
pub use document::{generate, parse};
pub use glass::GlassMaterial;
pub use workspace::GeoJsonWorkspace;

use crate::projects::is_ground;

/// `SM_<project>_Ground.geojson`, `SM_<project>_<model>.geojson` or `SM_<project>.geojson`.
pub fn file_name(project_name: &str, model_name: &str, needs_model_suffix: bool) -> String {
    if is_ground(model_name) {
        format!("SM_{}_Ground.geojson", project_name)
    } else if needs_model_suffix {
        format!("SM_{}_{}.geojson", project_name, model_name)
    } else {
        format!("SM_{}.geojson", project_name)
    }
}

pub fn export_to_file(json: &str, path: &Path) -> anyhow::Result<()> {
    std::fs::write(path, json)
        .map_err(|e| anyhow::anyhow!("Failed to write {}: {}", path.display(), e))
}

pub fn load_from_file(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))
}
