use std::path::Path;

use crate::projects::commands::parse_id;
use crate::projects::Project;
use crate::AppState;

use super::{thumbnail, GeoJsonData, GeoJsonWorkspace};

/// Runs `f` on the project's editing session, creating or re-aligning it first.
fn with_workspace<R>(
    state: &AppState,
    project_id: &str,
    f: impl FnOnce(&Project, &mut GeoJsonWorkspace) -> Result<R, String>,
) -> Result<R, String> {
    let id = parse_id(project_id)?;
    let project = {
        let projects = state.projects.lock().map_err(|e| e.to_string())?;
        projects.get(id).cloned().map_err(|e| e.to_string())?
    };

    let mut sessions = state.geojson.lock().map_err(|e| e.to_string())?;
    let workspace = sessions
        .entry(id)
        .or_insert_with(|| GeoJsonWorkspace::for_project(&project));
    workspace.refresh(&project);
    f(&project, workspace)
}

#[tauri::command]
pub fn get_geojson_data(
    state: tauri::State<AppState>,
    project_id: String,
    model_name: String,
) -> Result<GeoJsonData, String> {
    with_workspace(&state, &project_id, |_, workspace| {
        workspace
            .get(&model_name)
            .cloned()
            .ok_or_else(|| format!("Model {} not found", model_name))
    })
}

/// Stores the edited data; with `sync_common` the shared fields are propagated to the other models.
#[tauri::command]
pub fn update_geojson_data(
    state: tauri::State<AppState>,
    project_id: String,
    model_name: String,
    data: GeoJsonData,
    sync_common: bool,
) -> Result<(), String> {
    with_workspace(&state, &project_id, |_, workspace| {
        workspace.replace(&model_name, data).map_err(|e| e.to_string())?;
        if sync_common {
            workspace.sync_common_fields(&model_name);
        }
        Ok(())
    })
}

#[tauri::command]
pub fn generate_geojson(data: GeoJsonData) -> Result<String, String> {
    data.validate_glasses().map_err(|e| e.to_string())?;
    Ok(super::generate(&data))
}

#[tauri::command]
pub fn get_geojson_file_name(
    state: tauri::State<AppState>,
    project_id: String,
    model_name: String,
) -> Result<String, String> {
    with_workspace(&state, &project_id, |project, _| {
        Ok(super::file_name(&project.name, &model_name, project.needs_model_suffix()))
    })
}

#[tauri::command]
pub fn export_geojson(data: GeoJsonData, file_path: String) -> Result<(), String> {
    data.validate_glasses().map_err(|e| e.to_string())?;
    super::export_to_file(&super::generate(&data), Path::new(&file_path)).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn export_all_geojson(
    state: tauri::State<AppState>,
    project_id: String,
    folder: String,
) -> Result<u32, String> {
    with_workspace(&state, &project_id, |project, workspace| {
        workspace
            .export_all(project, Path::new(&folder))
            .map_err(|e| e.to_string())
    })
}

#[tauri::command]
pub fn load_geojson(file_path: String) -> Result<GeoJsonData, String> {
    let json = super::load_from_file(Path::new(&file_path)).map_err(|e| e.to_string())?;
    super::parse(&json).map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn image_to_base64(file_path: String) -> Result<String, String> {
    thumbnail::image_to_base64(Path::new(&file_path)).map_err(|e| e.to_string())
}
