use crate::projects::commands::parse_id;
use crate::AppState;

use super::district::District;
use super::NameSheet;

#[tauri::command]
pub fn get_name_sheet(state: tauri::State<AppState>, project_id: String) -> Result<NameSheet, String> {
    let id = parse_id(&project_id)?;
    let projects = state.projects.lock().map_err(|e| e.to_string())?;
    let project = projects.get(id).map_err(|e| e.to_string())?;
    Ok(NameSheet::for_project(project))
}

#[tauri::command]
pub fn get_districts(state: tauri::State<AppState>) -> Vec<District> {
    state.districts.all().to_vec()
}

#[tauri::command]
pub fn search_districts(state: tauri::State<AppState>, query: String) -> Vec<District> {
    state.districts.search(&query).into_iter().cloned().collect()
}
