use std::path::{Path, PathBuf};

/// Environment variable overriding the data folder.
pub const DATA_DIR_ENV: &str = "AGR_DATA_DIR";

pub const PROJECTS_FILE: &str = "projects.json";
pub const UDIM_PRESETS_FILE: &str = "presets.json";
pub const GLASS_PRESETS_FILE: &str = "glass_presets.json";
pub const PREFERENCES_FILE: &str = "preferences.json";
pub const DISTRICTS_FILE: &str = "districts.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Folder holding every persisted JSON collection.
    pub data_dir: PathBuf,
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Resolves the data folder: explicit path, then `AGR_DATA_DIR`, then `Data/` beside the executable.
    pub fn resolve(data_dir: Option<PathBuf>) -> Self {
        let data_dir = data_dir
            .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
            .unwrap_or_else(default_data_dir);

        Self {
            data_dir,
            ..Self::default()
        }
    }

    pub fn with_data_dir(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Creates the data folder if needed.
    pub fn ensure_data_dir(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }

    pub fn projects_path(&self) -> PathBuf {
        self.data_dir.join(PROJECTS_FILE)
    }

    pub fn udim_presets_path(&self) -> PathBuf {
        self.data_dir.join(UDIM_PRESETS_FILE)
    }

    pub fn glass_presets_path(&self) -> PathBuf {
        self.data_dir.join(GLASS_PRESETS_FILE)
    }

    pub fn preferences_path(&self) -> PathBuf {
        self.data_dir.join(PREFERENCES_FILE)
    }

    pub fn districts_path(&self) -> PathBuf {
        self.data_dir.join(DISTRICTS_FILE)
    }
}

fn default_data_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Data")
}
