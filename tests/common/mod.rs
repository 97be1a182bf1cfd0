// Shared helpers for integration tests
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use agr_tools_lib::config::AppConfig;
use agr_tools_lib::projects::{Project, TextureSlot};
use image::{Rgb, RgbImage};
use tempfile::TempDir;

/// A scratch data folder that lives as long as the returned `TempDir`.
pub fn data_dir() -> (TempDir, AppConfig) {
    let tmp = TempDir::new().expect("Failed to create temp dir");
    let config = AppConfig::with_data_dir(tmp.path().join("Data"));
    config.ensure_data_dir().expect("Failed to create data dir");
    (tmp, config)
}

/// Writes a tiny PNG so exports have something to copy.
pub fn write_texture(dir: &Path, name: &str) -> PathBuf {
    std::fs::create_dir_all(dir).expect("Failed to create texture dir");
    let path = dir.join(name);
    RgbImage::from_pixel(4, 4, Rgb([120, 80, 40]))
        .save(&path)
        .expect("Failed to write texture");
    path
}

/// Project with `buildings` numbered models plus Ground.
pub fn project_with_buildings(name: &str, buildings: usize) -> Project {
    let mut project = Project::new(name);
    for _ in 1..buildings {
        project.add_model();
    }
    project
}

pub fn set_texture(project: &mut Project, model: usize, udim: u32, slot: TextureSlot, path: &Path) {
    project
        .model_mut(model)
        .and_then(|m| m.tile_mut(udim))
        .expect("Tile not found")
        .set_path(slot, Some(path.display().to_string()));
}
