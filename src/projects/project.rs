use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::{is_ground, ModelData, GROUND};
use crate::error::{AgrError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Project {
    #[serde(default = "uuid::Uuid::new_v4")]
    pub id: uuid::Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub created_date: DateTime<Utc>,
    #[serde(default)]
    pub modified_date: DateTime<Utc>,
    #[serde(default)]
    pub models: Vec<ModelData>,
    /// 4-digit district code, empty when not chosen yet.
    #[serde(default)]
    pub district_code: String,
}

impl Project {
    /// A fresh project with the default `001` building and the `Ground` site.
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4(),
            name: name.into(),
            description: String::new(),
            created_date: now,
            modified_date: now,
            models: vec![ModelData::new("001"), ModelData::new(GROUND)],
            district_code: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Models that are numbered buildings, in project order.
    pub fn building_models(&self) -> impl Iterator<Item = &ModelData> {
        self.models.iter().filter(|m| !m.is_ground())
    }

    pub fn building_count(&self) -> usize {
        self.building_models().count()
    }

    /// Asset names carry the model name only when several buildings exist.
    pub fn needs_model_suffix(&self) -> bool {
        self.building_count() > 1
    }

    pub fn district(&self) -> Option<&str> {
        Some(self.district_code.as_str()).filter(|c| !c.is_empty())
    }

    pub fn model(&self, index: usize) -> Result<&ModelData> {
        let count = self.models.len();
        self.models
            .get(index)
            .ok_or(AgrError::ModelIndexOutOfRange { index, count })
    }

    pub fn model_mut(&mut self, index: usize) -> Result<&mut ModelData> {
        let count = self.models.len();
        self.models
            .get_mut(index)
            .ok_or(AgrError::ModelIndexOutOfRange { index, count })
    }

    pub fn model_index(&self, name: &str) -> Result<usize> {
        self.models
            .iter()
            .position(|m| m.name == name)
            .ok_or_else(|| AgrError::ModelNotFound(name.to_string()))
    }

    /// Name the next added model would get: highest numeric prefix plus one.
    pub fn next_model_name(&self) -> String {
        let max_number = self
            .models
            .iter()
            .filter_map(|m| {
                let prefix = m.name.split('_').next().unwrap_or("");
                prefix.trim().parse::<i32>().ok()
            })
            .fold(0, i32::max);

        format!("{:03}", i64::from(max_number) + 1)
    }

    /// Adds a numbered model before a trailing Ground model and returns its index.
    pub fn add_model(&mut self) -> usize {
        let name = self.next_model_name();
        let index = match self.models.last() {
            Some(last) if is_ground(&last.name) => self.models.len() - 1,
            _ => self.models.len(),
        };
        self.models.insert(index, ModelData::new(name));
        index
    }

    /// Inserts a deep copy named `<name>_copy` right after the source model.
    pub fn duplicate_model(&mut self, index: usize) -> Result<usize> {
        let source = self.model(index)?;
        let copy = source.clone_as(format!("{}_copy", source.name));
        self.models.insert(index + 1, copy);
        Ok(index + 1)
    }

    pub fn remove_model(&mut self, index: usize) -> Result<ModelData> {
        self.model(index)?;
        if self.models.len() <= 1 {
            return Err(AgrError::LastModel);
        }
        Ok(self.models.remove(index))
    }

    pub fn rename_model(&mut self, index: usize, new_name: impl Into<String>) -> Result<()> {
        self.model_mut(index)?.name = new_name.into();
        Ok(())
    }

    pub fn touch(&mut self) {
        self.modified_date = Utc::now();
    }

    pub(crate) fn normalize(&mut self) {
        if self.models.is_empty() {
            self.models = vec![ModelData::new("001"), ModelData::new(GROUND)];
        }
        for model in &mut self.models {
            model.normalize();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(project: &Project) -> Vec<&str> {
        project.models.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn new_project_has_default_models() {
        let project = Project::new("Tower");
        assert_eq!(names(&project), vec!["001", "Ground"]);
        assert!(!project.needs_model_suffix());
        assert_eq!(project.district(), None);
    }

    #[test]
    fn add_model_goes_before_ground() {
        let mut project = Project::new("Tower");
        let index = project.add_model();
        assert_eq!(index, 1);
        assert_eq!(names(&project), vec!["001", "002", "Ground"]);
        assert!(project.needs_model_suffix());
    }

    #[test]
    fn oversized_numeric_prefix_is_ignored() {
        let mut project = Project::new("Tower");
        project.models[0].name = "9223372036854775807".to_string();
        project.add_model();
        assert_eq!(names(&project), vec!["9223372036854775807", "001", "Ground"]);

        project.models[0].name = i32::MAX.to_string();
        assert_eq!(project.next_model_name(), "2147483648");
    }

    #[test]
    fn add_model_uses_max_numeric_prefix() {
        let mut project = Project::new("Tower");
        project.models[0].name = "007_west".to_string();
        project.models.insert(1, ModelData::new("annex"));
        project.models.insert(1, ModelData::new("003"));

        project.add_model();
        assert_eq!(names(&project), vec!["007_west", "003", "annex", "008", "Ground"]);
    }

    #[test]
    fn add_model_appends_without_trailing_ground() {
        let mut project = Project::new("Tower");
        project.models.swap(0, 1);
        project.add_model();
        assert_eq!(names(&project), vec!["Ground", "001", "002"]);
    }

    #[test]
    fn add_model_starts_at_one_without_numbers() {
        let mut project = Project::new("Tower");
        project.models[0].name = "Main".to_string();
        project.add_model();
        assert_eq!(project.models[1].name, "001");
    }

    #[test]
    fn duplicate_inserts_after_source() {
        let mut project = Project::new("Tower");
        project.models[0]
            .tile_mut(1002)
            .unwrap()
            .erm_path = Some("erm.png".to_string());

        let index = project.duplicate_model(0).unwrap();
        assert_eq!(index, 1);
        assert_eq!(names(&project), vec!["001", "001_copy", "Ground"]);
        assert_eq!(
            project.models[1].tile(1002).unwrap().erm_path.as_deref(),
            Some("erm.png")
        );
        assert!(project.duplicate_model(5).is_err());
    }

    #[test]
    fn last_model_cannot_be_removed() {
        let mut project = Project::new("Tower");
        project.remove_model(1).unwrap();
        assert!(matches!(project.remove_model(0), Err(AgrError::LastModel)));
        assert_eq!(names(&project), vec!["001"]);
        assert!(matches!(
            project.remove_model(3),
            Err(AgrError::ModelIndexOutOfRange { index: 3, count: 1 })
        ));
    }

    #[test]
    fn missing_fields_load_with_defaults() {
        let mut project: Project = serde_json::from_str(r#"{"Name":"Old"}"#).unwrap();
        project.normalize();
        assert_eq!(project.name, "Old");
        assert_eq!(project.district_code, "");
        assert_eq!(names(&project), vec!["001", "Ground"]);
    }
}
