use std::path::Path;
use std::str::FromStr;

use crate::folders;
use crate::AppState;

use super::{Project, TextureSlot};

pub(crate) fn parse_id(id: &str) -> Result<uuid::Uuid, String> {
    uuid::Uuid::from_str(id).map_err(|_| format!("Invalid id: {}", id))
}

/// Runs `mutate` on one project and returns the updated project for the UI.
fn mutate_project(
    state: &AppState,
    project_id: &str,
    mutate: impl FnOnce(&mut Project) -> crate::Result<()>,
) -> Result<Project, String> {
    let id = parse_id(project_id)?;
    let mut projects = state.projects.lock().map_err(|e| e.to_string())?;
    projects.update(id, mutate).map_err(|e| e.to_string())?;
    projects.get(id).cloned().map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_projects_list(state: tauri::State<AppState>) -> Vec<Project> {
    match state.projects.lock() {
        Ok(projects) => projects.list().to_vec(),
        Err(_) => Vec::new(),
    }
}

#[tauri::command]
pub fn get_current_project(state: tauri::State<AppState>) -> Option<Project> {
    let id = state.preferences.lock().ok()?.current_project_id()?;
    let projects = state.projects.lock().ok()?;
    projects.get(id).ok().cloned()
}

#[tauri::command]
pub fn select_project(state: tauri::State<AppState>, project_id: Option<String>) -> Result<(), String> {
    let id = project_id.as_deref().map(parse_id).transpose()?;
    let mut preferences = state.preferences.lock().map_err(|e| e.to_string())?;
    preferences.set_current_project(id).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn create_project(
    state: tauri::State<AppState>,
    project_name: String,
    description: Option<String>,
) -> Result<String, String> {
    if project_name.trim().is_empty() {
        return Err("Project name is required".to_string());
    }
    let project = Project::new(project_name.trim()).with_description(description.unwrap_or_default());
    let mut projects = state.projects.lock().map_err(|e| e.to_string())?;
    Ok(projects.add(project).to_string())
}

#[tauri::command]
pub fn delete_project(state: tauri::State<AppState>, project_id: String) -> Result<(), String> {
    let id = parse_id(&project_id)?;
    state
        .projects
        .lock()
        .map_err(|e| e.to_string())?
        .delete(id)
        .map_err(|e| e.to_string())?;

    let mut preferences = state.preferences.lock().map_err(|e| e.to_string())?;
    if preferences.current_project_id() == Some(id) {
        preferences.set_current_project(None).map_err(|e| e.to_string())?;
    }
    Ok(())
}

#[tauri::command]
pub fn clone_project(state: tauri::State<AppState>, project_id: String) -> Result<String, String> {
    let id = parse_id(&project_id)?;
    let mut projects = state.projects.lock().map_err(|e| e.to_string())?;
    projects
        .clone_project(id)
        .map(|id| id.to_string())
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn set_district(
    state: tauri::State<AppState>,
    project_id: String,
    district_code: Option<String>,
) -> Result<Project, String> {
    mutate_project(&state, &project_id, |p| {
        p.district_code = district_code.unwrap_or_default();
        Ok(())
    })
}

#[tauri::command]
pub fn add_model(state: tauri::State<AppState>, project_id: String) -> Result<Project, String> {
    mutate_project(&state, &project_id, |p| {
        p.add_model();
        Ok(())
    })
}

#[tauri::command]
pub fn duplicate_model(
    state: tauri::State<AppState>,
    project_id: String,
    model_index: usize,
) -> Result<Project, String> {
    mutate_project(&state, &project_id, |p| p.duplicate_model(model_index).map(|_| ()))
}

#[tauri::command]
pub fn remove_model(
    state: tauri::State<AppState>,
    project_id: String,
    model_index: usize,
) -> Result<Project, String> {
    mutate_project(&state, &project_id, |p| p.remove_model(model_index).map(|_| ()))
}

#[tauri::command]
pub fn rename_model(
    state: tauri::State<AppState>,
    project_id: String,
    model_index: usize,
    new_name: String,
) -> Result<Project, String> {
    mutate_project(&state, &project_id, |p| p.rename_model(model_index, new_name))
}

#[tauri::command]
pub fn add_udim_row(
    state: tauri::State<AppState>,
    project_id: String,
    model_index: usize,
) -> Result<Project, String> {
    mutate_project(&state, &project_id, |p| {
        p.model_mut(model_index)?.add_row();
        Ok(())
    })
}

#[tauri::command]
pub fn remove_udim_row(
    state: tauri::State<AppState>,
    project_id: String,
    model_index: usize,
) -> Result<Project, String> {
    mutate_project(&state, &project_id, |p| p.model_mut(model_index)?.remove_top_row())
}

#[tauri::command]
pub fn set_tile_texture(
    state: tauri::State<AppState>,
    project_id: String,
    model_index: usize,
    udim_number: u32,
    slot: String,
    path: Option<String>,
) -> Result<Project, String> {
    let slot = TextureSlot::from_str(&slot)?;
    mutate_project(&state, &project_id, |p| {
        p.model_mut(model_index)?.tile_mut(udim_number)?.set_path(slot, path);
        Ok(())
    })
}

#[tauri::command]
pub fn rename_tile(
    state: tauri::State<AppState>,
    project_id: String,
    model_index: usize,
    udim_number: u32,
    name: String,
) -> Result<Project, String> {
    mutate_project(&state, &project_id, |p| {
        p.model_mut(model_index)?.tile_mut(udim_number)?.name = name;
        Ok(())
    })
}

#[tauri::command]
pub fn clear_tile(
    state: tauri::State<AppState>,
    project_id: String,
    model_index: usize,
    udim_number: u32,
) -> Result<Project, String> {
    mutate_project(&state, &project_id, |p| {
        p.model_mut(model_index)?.tile_mut(udim_number)?.clear();
        Ok(())
    })
}

#[tauri::command]
pub fn create_project_folders(base_path: String, project_name: String) -> Result<bool, String> {
    folders::create_project_structure(Path::new(&base_path), &project_name).map_err(|e| e.to_string())
}
