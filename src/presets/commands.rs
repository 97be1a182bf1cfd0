use crate::geojson::GlassMaterial;
use crate::projects::commands::parse_id;
use crate::projects::Project;
use crate::AppState;

use super::{GlassPreset, UdimPreset};

#[tauri::command]
pub fn get_udim_presets(state: tauri::State<AppState>) -> Result<Vec<UdimPreset>, String> {
    let presets = state.udim_presets.lock().map_err(|e| e.to_string())?;
    Ok(presets.list().to_vec())
}

/// Stores the texture paths of one tile under `name`.
#[tauri::command]
pub fn save_udim_preset(
    state: tauri::State<AppState>,
    name: String,
    project_id: String,
    model_index: usize,
    udim_number: u32,
) -> Result<String, String> {
    let id = parse_id(&project_id)?;
    let preset = {
        let projects = state.projects.lock().map_err(|e| e.to_string())?;
        let project = projects.get(id).map_err(|e| e.to_string())?;
        let model = project.model(model_index).map_err(|e| e.to_string())?;
        let tile = model
            .tile(udim_number)
            .ok_or_else(|| format!("Tile {} not found", udim_number))?;
        UdimPreset::from_tile(name, tile)
    };

    let mut presets = state.udim_presets.lock().map_err(|e| e.to_string())?;
    Ok(presets.add(preset).to_string())
}

#[tauri::command]
pub fn apply_udim_preset(
    state: tauri::State<AppState>,
    preset_id: String,
    project_id: String,
    model_index: usize,
    udim_number: u32,
) -> Result<Project, String> {
    let preset_id = parse_id(&preset_id)?;
    let id = parse_id(&project_id)?;

    let presets = state.udim_presets.lock().map_err(|e| e.to_string())?;
    let mut projects = state.projects.lock().map_err(|e| e.to_string())?;
    projects
        .update(id, |p| presets.apply(preset_id, p.model_mut(model_index)?.tile_mut(udim_number)?))
        .map_err(|e| e.to_string())?;
    projects.get(id).cloned().map_err(|e| e.to_string())
}

#[tauri::command]
pub fn rename_udim_preset(
    state: tauri::State<AppState>,
    preset_id: String,
    new_name: String,
) -> Result<(), String> {
    let id = parse_id(&preset_id)?;
    let mut presets = state.udim_presets.lock().map_err(|e| e.to_string())?;
    presets.rename(id, new_name).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn delete_udim_preset(state: tauri::State<AppState>, preset_id: String) -> Result<(), String> {
    let id = parse_id(&preset_id)?;
    let mut presets = state.udim_presets.lock().map_err(|e| e.to_string())?;
    presets.delete(id).map(|_| ()).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_glass_presets(state: tauri::State<AppState>) -> Result<Vec<GlassPreset>, String> {
    let presets = state.glass_presets.lock().map_err(|e| e.to_string())?;
    Ok(presets.list().to_vec())
}

#[tauri::command]
pub fn save_glass_preset(
    state: tauri::State<AppState>,
    name: String,
    material: GlassMaterial,
) -> Result<String, String> {
    let mut presets = state.glass_presets.lock().map_err(|e| e.to_string())?;
    Ok(presets.add(GlassPreset::from_material(name, &material)).to_string())
}

#[tauri::command]
pub fn delete_glass_preset(state: tauri::State<AppState>, preset_id: String) -> Result<(), String> {
    let id = parse_id(&preset_id)?;
    let mut presets = state.glass_presets.lock().map_err(|e| e.to_string())?;
    presets.delete(id).map(|_| ()).map_err(|e| e.to_string())
}
