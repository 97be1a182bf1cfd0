#[cfg(feature = "desktop")]
pub mod commands;
pub mod model;
pub mod project;
pub mod service;
pub mod udim;

pub use model::{is_ground, ModelData, GROUND};
pub use project::Project;
pub use service::ProjectService;
pub use udim::{TextureSlot, UdimTile};
