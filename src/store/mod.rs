use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};

/// A collection persisted as one pretty-printed JSON array.
///
/// Every save rewrites the whole file; there is no partial update.
pub struct JsonStore<T> {
    path: PathBuf,
    pub items: Vec<T>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Loads the collection, starting empty when the file is missing or unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = match read_collection(&path) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(path = %path.display(), "could not load collection: {:#}", e);
                Vec::new()
            }
        };

        Self { path, items }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.items)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    /// Saves and logs a failure instead of returning it; the in-memory state stays authoritative.
    pub fn save_logged(&self) {
        if let Err(e) = self.save() {
            tracing::warn!(path = %self.path.display(), "could not save collection: {:#}", e);
        }
    }
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let json = std::fs::read_to_string(path)?;
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(&json)?)
}
