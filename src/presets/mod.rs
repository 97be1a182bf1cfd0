#[cfg(feature = "desktop")]
pub mod commands;
pub mod glass_preset;
pub mod udim_preset;

use std::path::PathBuf;

use serde::{de::DeserializeOwned, Serialize};

use crate::broadcast::{self, BroadcastMessage};
use crate::config::AppConfig;
use crate::error::{AgrError, Result};
use crate::projects::UdimTile;
use crate::store::JsonStore;

pub use glass_preset::GlassPreset;
pub use udim_preset::UdimPreset;

/// A named, independently stored snapshot.
pub trait Preset: Serialize + DeserializeOwned {
    /// Published after the collection changes.
    const CHANGED: BroadcastMessage;

    fn id(&self) -> uuid::Uuid;
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
}

/// A flat preset collection saved wholesale after each change.
pub struct PresetService<P: Preset> {
    store: JsonStore<P>,
}

pub type UdimPresetService = PresetService<UdimPreset>;
pub type GlassPresetService = PresetService<GlassPreset>;

impl UdimPresetService {
    pub fn open(config: &AppConfig) -> Self {
        Self::open_at(config.udim_presets_path())
    }

    /// Copies the preset's texture paths onto `tile`.
    pub fn apply(&self, id: uuid::Uuid, tile: &mut UdimTile) -> Result<()> {
        self.get(id)?.apply_to(tile);
        Ok(())
    }
}

impl GlassPresetService {
    pub fn open(config: &AppConfig) -> Self {
        Self::open_at(config.glass_presets_path())
    }
}

impl<P: Preset> PresetService<P> {
    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonStore::open(path),
        }
    }

    pub fn list(&self) -> &[P] {
        &self.store.items
    }

    pub fn get(&self, id: uuid::Uuid) -> Result<&P> {
        self.store
            .items
            .iter()
            .find(|p| p.id() == id)
            .ok_or(AgrError::PresetNotFound(id))
    }

    /// Finds a preset by id string or, failing that, by exact name.
    pub fn find(&self, key: &str) -> Option<&P> {
        if let Ok(id) = uuid::Uuid::parse_str(key) {
            if let Ok(preset) = self.get(id) {
                return Some(preset);
            }
        }
        self.store.items.iter().find(|p| p.name() == key)
    }

    pub fn add(&mut self, preset: P) -> uuid::Uuid {
        let id = preset.id();
        self.store.items.push(preset);
        self.changed();
        id
    }

    pub fn delete(&mut self, id: uuid::Uuid) -> Result<P> {
        let index = self
            .store
            .items
            .iter()
            .position(|p| p.id() == id)
            .ok_or(AgrError::PresetNotFound(id))?;
        let removed = self.store.items.remove(index);
        self.changed();
        Ok(removed)
    }

    pub fn rename(&mut self, id: uuid::Uuid, new_name: impl Into<String>) -> Result<()> {
        let preset = self
            .store
            .items
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(AgrError::PresetNotFound(id))?;
        preset.set_name(new_name.into());
        self.changed();
        Ok(())
    }

    fn changed(&self) {
        self.store.save_logged();
        broadcast::publish(P::CHANGED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geojson::GlassMaterial;
    use tempfile::TempDir;

    #[test]
    fn udim_presets_survive_reload() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("presets.json");

        let mut tile = UdimTile::new(1001);
        tile.diffuse_path = Some("concrete_d.png".to_string());

        let mut service = UdimPresetService::open_at(&path);
        let id = service.add(UdimPreset::from_tile("Concrete", &tile));
        service.rename(id, "Concrete B").unwrap();

        let reloaded = UdimPresetService::open_at(&path);
        let preset = reloaded.get(id).unwrap();
        assert_eq!(preset.name, "Concrete B");
        assert_eq!(preset.diffuse_path.as_deref(), Some("concrete_d.png"));
        assert!(reloaded.find("Concrete B").is_some());

        let mut target = UdimTile::new(1005);
        target.name = "Roof".to_string();
        reloaded.apply(id, &mut target).unwrap();
        assert_eq!(target.diffuse_path.as_deref(), Some("concrete_d.png"));
        assert_eq!(target.name, "Roof");
        assert!(reloaded.apply(uuid::Uuid::new_v4(), &mut target).is_err());
    }

    #[test]
    fn glass_presets_delete() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("glass_presets.json");

        let mut service = GlassPresetService::open_at(&path);
        let material = GlassMaterial::new("Facade").with_rgb(40, 60, 80);
        let id = service.add(GlassPreset::from_material("Dark", &material));
        service.delete(id).unwrap();

        assert!(matches!(service.delete(id), Err(AgrError::PresetNotFound(_))));
        assert!(GlassPresetService::open_at(&path).list().is_empty());
    }
}
