use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Preset;
use crate::broadcast::BroadcastMessage;
use crate::projects::UdimTile;

/// Named snapshot of a tile's three texture paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UdimPreset {
    #[serde(default = "uuid::Uuid::new_v4")]
    pub id: uuid::Uuid,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub diffuse_path: Option<String>,
    #[serde(default)]
    pub erm_path: Option<String>,
    #[serde(default)]
    pub normal_path: Option<String>,
    #[serde(default)]
    pub created_date: DateTime<Utc>,
}

impl UdimPreset {
    pub fn from_tile(name: impl Into<String>, tile: &UdimTile) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            name: name.into(),
            diffuse_path: tile.diffuse_path.clone(),
            erm_path: tile.erm_path.clone(),
            normal_path: tile.normal_path.clone(),
            created_date: Utc::now(),
        }
    }

    /// Overwrites the tile's texture paths; name and UDIM number are untouched.
    pub fn apply_to(&self, tile: &mut UdimTile) {
        tile.diffuse_path = self.diffuse_path.clone();
        tile.erm_path = self.erm_path.clone();
        tile.normal_path = self.normal_path.clone();
    }
}

impl Preset for UdimPreset {
    const CHANGED: BroadcastMessage = BroadcastMessage::UdimPresetsChanged;

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
