use thiserror::Error;

/// Errors raised by project, preset and GeoJSON operations.
#[derive(Debug, Error)]
pub enum AgrError {
    /// A project must keep at least one model.
    #[error("cannot remove the last remaining model")]
    LastModel,

    /// A model must keep at least one UDIM row.
    #[error("cannot remove the last remaining UDIM row")]
    LastRow,

    #[error("model index {index} is out of range (project has {count} models)")]
    ModelIndexOutOfRange { index: usize, count: usize },

    #[error("no model named '{0}'")]
    ModelNotFound(String),

    #[error("UDIM tile {0} does not exist in this model")]
    TileNotFound(u32),

    #[error("project {0} not found")]
    ProjectNotFound(uuid::Uuid),

    #[error("preset {0} not found")]
    PresetNotFound(uuid::Uuid),

    #[error("glass material index {index} is out of range ({count} materials)")]
    GlassIndexOutOfRange { index: usize, count: usize },

    /// Glass materials are keyed by name in the written document.
    #[error("a glass material named '{0}' already exists")]
    DuplicateGlassName(String),

    /// Wraps whatever went wrong while reading a GeoJSON document.
    #[error("GeoJSON parse error: {0}")]
    GeoJson(String),
}

pub type Result<T> = std::result::Result<T, AgrError>;
