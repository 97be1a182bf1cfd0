pub mod broadcast;
pub mod config;
pub mod error;
pub mod folders;
pub mod geojson;
pub mod logging;
pub mod naming;
pub mod preferences;
pub mod presets;
pub mod projects;
pub mod ral;
pub mod store;
pub mod texture_export;

pub use config::AppConfig;
pub use error::{AgrError, Result};

#[cfg(feature = "desktop")]
use std::{collections::HashMap, sync::Mutex};

#[cfg(feature = "desktop")]
use tauri::Manager;

/// Services shared by every Tauri command.
#[cfg(feature = "desktop")]
pub struct AppState {
    pub config: AppConfig,
    pub projects: Mutex<projects::ProjectService>,
    pub udim_presets: Mutex<presets::UdimPresetService>,
    pub glass_presets: Mutex<presets::GlassPresetService>,
    pub preferences: Mutex<preferences::Preferences>,
    pub districts: naming::district::DistrictCatalog,
    /// GeoJSON editing sessions, per project.
    pub geojson: Mutex<HashMap<uuid::Uuid, geojson::GeoJsonWorkspace>>,
}

#[cfg(feature = "desktop")]
impl AppState {
    pub fn open(config: AppConfig) -> Self {
        let districts = naming::district::DistrictCatalog::load(&config.districts_path())
            .unwrap_or_else(|e| {
                tracing::warn!("could not load districts: {}", e);
                Default::default()
            });

        Self {
            projects: Mutex::new(projects::ProjectService::open(&config)),
            udim_presets: Mutex::new(presets::UdimPresetService::open(&config)),
            glass_presets: Mutex::new(presets::GlassPresetService::open(&config)),
            preferences: Mutex::new(preferences::Preferences::open(config.preferences_path())),
            districts,
            geojson: Mutex::new(HashMap::new()),
            config,
        }
    }
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let config = AppConfig::resolve(None);
    if let Err(e) = logging::init(&config) {
        eprintln!("Error initialising logging: {}", e);
    }
    if let Err(e) = config.ensure_data_dir() {
        tracing::warn!(path = %config.data_dir.display(), "could not create data folder: {}", e);
    }

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .setup(move |app| {
            let state = AppState::open(config);
            if let Some(id) = state.preferences.lock().ok().and_then(|p| p.current_project_id()) {
                tracing::info!(%id, "restoring current project");
            }
            app.manage(state);
            Ok(())
        })
        .plugin(tauri_plugin_opener::init())
        .invoke_handler(tauri::generate_handler![
            projects::commands::get_projects_list,
            projects::commands::get_current_project,
            projects::commands::select_project,
            projects::commands::create_project,
            projects::commands::delete_project,
            projects::commands::clone_project,
            projects::commands::set_district,
            projects::commands::add_model,
            projects::commands::duplicate_model,
            projects::commands::remove_model,
            projects::commands::rename_model,
            projects::commands::add_udim_row,
            projects::commands::remove_udim_row,
            projects::commands::set_tile_texture,
            projects::commands::rename_tile,
            projects::commands::clear_tile,
            projects::commands::create_project_folders,
            presets::commands::get_udim_presets,
            presets::commands::save_udim_preset,
            presets::commands::apply_udim_preset,
            presets::commands::rename_udim_preset,
            presets::commands::delete_udim_preset,
            presets::commands::get_glass_presets,
            presets::commands::save_glass_preset,
            presets::commands::delete_glass_preset,
            naming::commands::get_name_sheet,
            naming::commands::get_districts,
            naming::commands::search_districts,
            texture_export::commands::get_texture_name_template,
            texture_export::commands::export_model_textures,
            texture_export::commands::export_all_textures,
            geojson::commands::get_geojson_data,
            geojson::commands::update_geojson_data,
            geojson::commands::generate_geojson,
            geojson::commands::get_geojson_file_name,
            geojson::commands::export_geojson,
            geojson::commands::export_all_geojson,
            geojson::commands::load_geojson,
            geojson::commands::image_to_base64,
            ral::commands::search_ral_colors,
            ral::commands::save_ral_swatch,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
