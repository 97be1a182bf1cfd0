use std::path::Path;

use serde::{Deserialize, Serialize};

/// Administrative district with its 4-digit code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct District {
    pub number: String,
    pub name: String,
}

impl District {
    pub fn new(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for District {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.number, self.name)
    }
}

/// District list read from `districts.json` in the data folder.
#[derive(Debug, Clone, Default)]
pub struct DistrictCatalog {
    districts: Vec<District>,
}

impl DistrictCatalog {
    pub fn new(districts: Vec<District>) -> Self {
        Self { districts }
    }

    /// Missing file gives an empty catalog.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let json = std::fs::read_to_string(path)?;
        Ok(Self::new(serde_json::from_str(&json)?))
    }

    pub fn all(&self) -> &[District] {
        &self.districts
    }

    pub fn find(&self, code: &str) -> Option<&District> {
        self.districts.iter().find(|d| d.number == code)
    }

    /// Name contains `text` (ignoring case) or number contains `text`.
    pub fn search(&self, text: &str) -> Vec<&District> {
        let needle = text.to_lowercase();
        self.districts
            .iter()
            .filter(|d| d.name.to_lowercase().contains(&needle) || d.number.contains(text))
            .collect()
    }
}
