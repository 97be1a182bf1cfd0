use std::path::PathBuf;

use chrono::Utc;

use super::project::Project;
use crate::broadcast::{self, BroadcastMessage};
use crate::config::AppConfig;
use crate::error::{AgrError, Result};
use crate::store::JsonStore;

/// All projects of the data folder, saved to `projects.json` after every change.
pub struct ProjectService {
    store: JsonStore<Project>,
}

impl ProjectService {
    pub fn open(config: &AppConfig) -> Self {
        Self::open_at(config.projects_path())
    }

    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        let mut store: JsonStore<Project> = JsonStore::open(path);
        for project in &mut store.items {
            project.normalize();
        }
        Self { store }
    }

    pub fn list(&self) -> &[Project] {
        &self.store.items
    }

    pub fn get(&self, id: uuid::Uuid) -> Result<&Project> {
        self.store
            .items
            .iter()
            .find(|p| p.id == id)
            .ok_or(AgrError::ProjectNotFound(id))
    }

    /// Finds a project by id string or, failing that, by exact name.
    pub fn find(&self, key: &str) -> Option<&Project> {
        if let Ok(id) = uuid::Uuid::parse_str(key) {
            if let Ok(project) = self.get(id) {
                return Some(project);
            }
        }
        self.store.items.iter().find(|p| p.name == key)
    }

    pub fn add(&mut self, mut project: Project) -> uuid::Uuid {
        let now = Utc::now();
        project.created_date = now;
        project.modified_date = now;
        let id = project.id;

        self.store.items.push(project);
        self.store.save_logged();
        broadcast::publish(BroadcastMessage::ProjectsChanged);
        id
    }

    /// Applies `mutate` to a working copy of one project. On success the copy replaces the
    /// stored project, gets a new modification time and is saved; on error nothing changes.
    pub fn update<R>(
        &mut self,
        id: uuid::Uuid,
        mutate: impl FnOnce(&mut Project) -> Result<R>,
    ) -> Result<R> {
        let project = self
            .store
            .items
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AgrError::ProjectNotFound(id))?;

        let mut draft = project.clone();
        let result = mutate(&mut draft)?;
        draft.touch();
        *project = draft;

        self.store.save_logged();
        broadcast::publish(BroadcastMessage::ProjectUpdated(id));
        Ok(result)
    }

    pub fn delete(&mut self, id: uuid::Uuid) -> Result<Project> {
        let index = self
            .store
            .items
            .iter()
            .position(|p| p.id == id)
            .ok_or(AgrError::ProjectNotFound(id))?;

        let removed = self.store.items.remove(index);
        self.store.save_logged();
        broadcast::publish(BroadcastMessage::ProjectsChanged);
        Ok(removed)
    }

    /// Deep copy with a new id and fresh timestamps, appended to the list.
    pub fn clone_project(&mut self, id: uuid::Uuid) -> Result<uuid::Uuid> {
        let mut clone = self.get(id)?.clone();
        clone.id = uuid::Uuid::new_v4();
        clone.name = format!("{} (copy)", clone.name);
        Ok(self.add(clone))
    }
}
