use serde::{Deserialize, Serialize};

/// Glass material description embedded in a GeoJSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlassMaterial {
    pub name: String,
    pub red: i32,
    pub green: i32,
    pub blue: i32,
    #[serde(default)]
    pub transparency: String,
    #[serde(default)]
    pub refraction: String,
    #[serde(default)]
    pub roughness: String,
    #[serde(default)]
    pub metallicity: String,
}

impl GlassMaterial {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the color from raw user input, clamping each channel to 0..=255.
    pub fn with_rgb(mut self, red: i32, green: i32, blue: i32) -> Self {
        self.red = red.clamp(0, 255);
        self.green = green.clamp(0, 255);
        self.blue = blue.clamp(0, 255);
        self
    }

    pub fn rgb(&self) -> [u8; 3] {
        [
            self.red.clamp(0, 255) as u8,
            self.green.clamp(0, 255) as u8,
            self.blue.clamp(0, 255) as u8,
        ]
    }
}

impl std::fmt::Display for GlassMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} | RGB({}, {}, {})", self.name, self.red, self.green, self.blue)
    }
}
