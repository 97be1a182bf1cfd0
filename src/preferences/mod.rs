use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PreferencesFile {
    #[serde(default)]
    current_project: Option<String>,
}

/// Small key/value state that survives restarts, such as the selected project.
pub struct Preferences {
    path: PathBuf,
    values: PreferencesFile,
}

impl Preferences {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = std::fs::read_to_string(&path)
            .ok()
            .and_then(|json| match serde_json::from_str(&json) {
                Ok(values) => Some(values),
                Err(e) => {
                    tracing::warn!(path = %path.display(), "ignoring unreadable preferences: {}", e);
                    None
                }
            })
            .unwrap_or_default();

        Self { path, values }
    }

    pub fn get_current_project(&self) -> Option<String> {
        self.values.current_project.clone()
    }

    pub fn current_project_id(&self) -> Option<uuid::Uuid> {
        self.values
            .current_project
            .as_deref()
            .and_then(|id| uuid::Uuid::parse_str(id).ok())
    }

    pub fn set_current_project(&mut self, project_id: Option<uuid::Uuid>) -> anyhow::Result<()> {
        self.values.current_project = project_id.map(|id| id.to_string());
        self.save()
    }

    fn save(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&self.values)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn current_project_persists() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("preferences.json");
        let id = uuid::Uuid::new_v4();

        let mut prefs = Preferences::open(&path);
        assert!(prefs.get_current_project().is_none());
        prefs.set_current_project(Some(id)).unwrap();

        let reopened = Preferences::open(&path);
        assert_eq!(reopened.current_project_id(), Some(id));
    }

    #[test]
    fn garbage_id_reads_as_none() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("preferences.json");
        std::fs::write(&path, r#"{"CurrentProject":"not-a-uuid"}"#).unwrap();

        let prefs = Preferences::open(&path);
        assert_eq!(prefs.get_current_project().as_deref(), Some("not-a-uuid"));
        assert_eq!(prefs.current_project_id(), None);
    }
}
