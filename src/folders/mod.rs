use std::path::{Path, PathBuf};

/// Sub-folders created under a new project root.
pub const PROJECT_FOLDERS: [&str; 13] = [
    "source/maps",
    "source/mesh",
    "source/dwg",
    "source/pln",
    "source/pdf",
    "source/skp",
    "export/HP",
    "export/LP",
    "work/texture",
    "work/mesh",
    "work/bake",
    "work/AGR_Check/HP",
    "work/AGR_Check/LP",
];

pub fn project_path(base: &Path, project_name: &str) -> PathBuf {
    base.join(project_name)
}

/// Creates the working folder skeleton for a project.
///
/// Returns `Ok(false)` and leaves the disk untouched when the project folder already exists.
pub fn create_project_structure(base: &Path, project_name: &str) -> anyhow::Result<bool> {
    let root = project_path(base, project_name);
    if root.exists() {
        tracing::info!(path = %root.display(), "project folder already exists");
        return Ok(false);
    }

    for folder in PROJECT_FOLDERS {
        let path = root.join(folder);
        std::fs::create_dir_all(&path)
            .map_err(|e| anyhow::anyhow!("Failed to create {}: {}", path.display(), e))?;
    }
    tracing::info!(path = %root.display(), "project folders created");
    Ok(true)
}
