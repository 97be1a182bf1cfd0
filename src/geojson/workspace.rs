use std::path::{Path, PathBuf};

use super::data::GeoJsonData;
use super::{document, file_name};
use crate::error::{AgrError, Result};
use crate::projects::{is_ground, Project};

/// GeoJSON metadata for every model of one project, kept in model order.
#[derive(Debug, Clone, Default)]
pub struct GeoJsonWorkspace {
    entries: Vec<(String, GeoJsonData)>,
}

impl GeoJsonWorkspace {
    pub fn for_project(project: &Project) -> Self {
        let entries = project
            .models
            .iter()
            .map(|model| {
                let data = if is_ground(&model.name) {
                    GeoJsonData::for_ground()
                } else {
                    GeoJsonData::default()
                };
                (model.name.clone(), data)
            })
            .collect();
        Self { entries }
    }

    /// Re-aligns entries with the project's current models, keeping data of models that still exist.
    pub fn refresh(&mut self, project: &Project) {
        let mut previous = std::mem::take(&mut self.entries);
        let fresh = Self::for_project(project);
        self.entries = fresh
            .entries
            .into_iter()
            .map(|(name, default)| {
                match previous.iter().position(|(existing, _)| *existing == name) {
                    Some(index) => previous.swap_remove(index),
                    None => (name, default),
                }
            })
            .collect();
    }

    pub fn model_names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn get(&self, model: &str) -> Option<&GeoJsonData> {
        self.entries.iter().find(|(name, _)| name == model).map(|(_, data)| data)
    }

    pub fn get_mut(&mut self, model: &str) -> Result<&mut GeoJsonData> {
        self.entries
            .iter_mut()
            .find(|(name, _)| name == model)
            .map(|(_, data)| data)
            .ok_or_else(|| AgrError::ModelNotFound(model.to_string()))
    }

    pub fn replace(&mut self, model: &str, data: GeoJsonData) -> Result<()> {
        data.validate_glasses()?;
        *self.get_mut(model)? = data;
        Ok(())
    }

    /// Propagates the common fields of the first building to every model except `edited_model`.
    ///
    /// Does nothing when the project has no building.
    pub fn sync_common_fields(&mut self, edited_model: &str) {
        let Some(source) = self
            .entries
            .iter()
            .find(|(name, _)| !is_ground(name))
            .map(|(_, data)| data.clone())
        else {
            return;
        };

        for (name, data) in self.entries.iter_mut() {
            if name.as_str() == edited_model {
                continue;
            }
            data.copy_common_fields_from(&source, is_ground(name));
        }
    }

    /// Writes `folder/<model>/<file name>` for every model; returns the number of files.
    pub fn export_all(&self, project: &Project, folder: &Path) -> anyhow::Result<u32> {
        let needs_suffix = project.needs_model_suffix();
        let mut count = 0;
        for (model, data) in &self.entries {
            let model_dir: PathBuf = folder.join(model);
            std::fs::create_dir_all(&model_dir)?;
            let path = model_dir.join(file_name(&project.name, model, needs_suffix));
            super::export_to_file(&document::generate(data), &path)?;
            count += 1;
        }
        tracing::info!(project = %project.name, count, "geojson export finished");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn project() -> Project {
        let mut project = Project::new("Park");
        project.add_model();
        project
    }

    #[test]
    fn ground_starts_with_landscaping_label() {
        let workspace = GeoJsonWorkspace::for_project(&project());
        let names: Vec<&str> = workspace.model_names().collect();
        assert_eq!(names, vec!["001", "002", "Ground"]);
        assert_eq!(workspace.get("Ground").unwrap().fno_name, super::super::LANDSCAPING_FNO_NAME);
        assert_eq!(workspace.get("001").unwrap().fno_name, "");
        assert!(workspace.get("003").is_none());
    }

    #[test]
    fn common_fields_follow_first_building() {
        let mut workspace = GeoJsonWorkspace::for_project(&project());
        {
            let first = workspace.get_mut("001").unwrap();
            first.address = "Lenina 1".to_string();
            first.h_otn = "40".to_string();
            first.fno_name = "Housing".to_string();
            first.coord_x = "37.1".to_string();
        }
        workspace.get_mut("Ground").unwrap().coord_x = "37.2".to_string();
        workspace.sync_common_fields("001");

        let second = workspace.get("002").unwrap();
        assert_eq!(second.address, "Lenina 1");
        assert_eq!(second.h_otn, "40");
        assert_eq!(second.fno_name, "Housing");
        assert_eq!(second.coord_x, "");

        let ground = workspace.get("Ground").unwrap();
        assert_eq!(ground.address, "Lenina 1");
        assert_eq!(ground.h_otn, "");
        assert_eq!(ground.fno_name, super::super::LANDSCAPING_FNO_NAME);
        assert_eq!(ground.coord_x, "37.2");
    }

    #[test]
    fn edited_model_is_left_alone() {
        let mut workspace = GeoJsonWorkspace::for_project(&project());
        workspace.get_mut("001").unwrap().address = "A".to_string();
        workspace.get_mut("002").unwrap().address = "B".to_string();
        workspace.sync_common_fields("002");
        assert_eq!(workspace.get("002").unwrap().address, "B");
        assert_eq!(workspace.get("Ground").unwrap().address, "A");
    }

    #[test]
    fn refresh_follows_model_list() {
        let mut project = project();
        let mut workspace = GeoJsonWorkspace::for_project(&project);
        workspace.get_mut("002").unwrap().address = "kept".to_string();

        project.remove_model(0).unwrap();
        project.add_model();
        workspace.refresh(&project);

        let names: Vec<&str> = workspace.model_names().collect();
        assert_eq!(names, vec!["002", "003", "Ground"]);
        assert_eq!(workspace.get("002").unwrap().address, "kept");
        assert_eq!(workspace.get("003").unwrap().address, "");
    }

    #[test]
    fn export_all_writes_one_folder_per_model() {
        let tmp = TempDir::new().unwrap();
        let project = project();
        let workspace = GeoJsonWorkspace::for_project(&project);

        assert_eq!(workspace.export_all(&project, tmp.path()).unwrap(), 3);
        assert!(tmp.path().join("001/SM_Park_001.geojson").is_file());
        assert!(tmp.path().join("002/SM_Park_002.geojson").is_file());
        assert!(tmp.path().join("Ground/SM_Park_Ground.geojson").is_file());
    }
}
