use serde::{Deserialize, Serialize};

/// Number of UDIM tiles in one row of the grid.
pub const ROW_LEN: u32 = 10;

/// First UDIM number of the bottom row.
pub const FIRST_UDIM: u32 = 1001;

/// Texture slot of a UDIM tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextureSlot {
    Diffuse,
    #[serde(rename = "ERM")]
    Erm,
    Normal,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 3] = [TextureSlot::Diffuse, TextureSlot::Erm, TextureSlot::Normal];

    /// Channel token used in exported texture file names.
    pub fn channel(self) -> &'static str {
        match self {
            TextureSlot::Diffuse => "Diffuse",
            TextureSlot::Erm => "ERM",
            TextureSlot::Normal => "Normal",
        }
    }
}

impl std::str::FromStr for TextureSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "diffuse" | "d" => Ok(TextureSlot::Diffuse),
            "erm" | "e" => Ok(TextureSlot::Erm),
            "normal" | "n" => Ok(TextureSlot::Normal),
            other => Err(format!("unknown texture slot '{}', expected diffuse, erm or normal", other)),
        }
    }
}

/// One tile of the UDIM grid with its three optional texture files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UdimTile {
    pub udim_number: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub diffuse_path: Option<String>,
    #[serde(default)]
    pub erm_path: Option<String>,
    #[serde(default)]
    pub normal_path: Option<String>,
}

impl UdimTile {
    pub fn new(udim_number: u32) -> Self {
        Self {
            udim_number,
            name: String::new(),
            diffuse_path: None,
            erm_path: None,
            normal_path: None,
        }
    }

    /// Name shown in the grid, "—" when the tile is unnamed.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "—"
        } else {
            &self.name
        }
    }

    pub fn path(&self, slot: TextureSlot) -> Option<&str> {
        let path = match slot {
            TextureSlot::Diffuse => &self.diffuse_path,
            TextureSlot::Erm => &self.erm_path,
            TextureSlot::Normal => &self.normal_path,
        };
        path.as_deref().filter(|p| !p.is_empty())
    }

    pub fn set_path(&mut self, slot: TextureSlot, path: Option<String>) {
        let target = match slot {
            TextureSlot::Diffuse => &mut self.diffuse_path,
            TextureSlot::Erm => &mut self.erm_path,
            TextureSlot::Normal => &mut self.normal_path,
        };
        *target = path;
    }

    pub fn has_diffuse(&self) -> bool {
        self.path(TextureSlot::Diffuse).is_some()
    }

    pub fn has_erm(&self) -> bool {
        self.path(TextureSlot::Erm).is_some()
    }

    pub fn has_normal(&self) -> bool {
        self.path(TextureSlot::Normal).is_some()
    }

    pub fn has_any_texture(&self) -> bool {
        self.has_diffuse() || self.has_erm() || self.has_normal()
    }

    /// Copies name and texture paths from `source`, keeping this tile's UDIM number.
    pub fn copy_from(&mut self, source: &UdimTile) {
        self.name = source.name.clone();
        self.diffuse_path = source.diffuse_path.clone();
        self.erm_path = source.erm_path.clone();
        self.normal_path = source.normal_path.clone();
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.diffuse_path = None;
        self.erm_path = None;
        self.normal_path = None;
    }
}

/// Builds the row whose first tile is `1001 + 10 * row_index`.
pub fn build_row(row_index: usize) -> Vec<UdimTile> {
    let start = FIRST_UDIM + row_index as u32 * ROW_LEN;
    (start..start + ROW_LEN).map(UdimTile::new).collect()
}
