use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Preset;
use crate::broadcast::BroadcastMessage;
use crate::geojson::GlassMaterial;

/// Named snapshot of a glass material's color and optical attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlassPreset {
    #[serde(default = "uuid::Uuid::new_v4")]
    pub id: uuid::Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub red: i32,
    #[serde(default)]
    pub green: i32,
    #[serde(default)]
    pub blue: i32,
    #[serde(default)]
    pub transparency: String,
    #[serde(default)]
    pub refraction: String,
    #[serde(default)]
    pub roughness: String,
    #[serde(default)]
    pub metallicity: String,
    #[serde(default)]
    pub created_date: DateTime<Utc>,
}

impl GlassPreset {
    pub fn from_material(name: impl Into<String>, material: &GlassMaterial) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            name: name.into(),
            red: material.red,
            green: material.green,
            blue: material.blue,
            transparency: material.transparency.clone(),
            refraction: material.refraction.clone(),
            roughness: material.roughness.clone(),
            metallicity: material.metallicity.clone(),
            created_date: Utc::now(),
        }
    }

    /// Overwrites every field except the material's name.
    pub fn apply_to(&self, material: &mut GlassMaterial) {
        material.red = self.red;
        material.green = self.green;
        material.blue = self.blue;
        material.transparency = self.transparency.clone();
        material.refraction = self.refraction.clone();
        material.roughness = self.roughness.clone();
        material.metallicity = self.metallicity.clone();
    }

    pub fn to_material(&self, material_name: impl Into<String>) -> GlassMaterial {
        let mut material = GlassMaterial::new(material_name);
        self.apply_to(&mut material);
        material
    }
}

impl Preset for GlassPreset {
    const CHANGED: BroadcastMessage = BroadcastMessage::GlassPresetsChanged;

    fn id(&self) -> uuid::Uuid {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_keeps_material_name() {
        let mut source = GlassMaterial::new("Facade").with_rgb(10, 20, 30);
        source.transparency = "0.8".to_string();
        let preset = GlassPreset::from_material("Blue tint", &source);

        let mut target = GlassMaterial::new("Lobby");
        preset.apply_to(&mut target);
        assert_eq!(target.name, "Lobby");
        assert_eq!((target.red, target.green, target.blue), (10, 20, 30));
        assert_eq!(target.transparency, "0.8");

        let fresh = preset.to_material("Atrium");
        assert_eq!(fresh.name, "Atrium");
        assert_eq!(fresh.blue, 30);
    }
}
