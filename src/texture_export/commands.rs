use std::path::Path;

use tauri::{AppHandle, Emitter};
use tokio::sync::broadcast::Receiver;
use uuid::Uuid;

use crate::broadcast::{self, BroadcastMessage};
use crate::projects::commands::parse_id;
use crate::projects::Project;
use crate::AppState;

fn project_snapshot(state: &AppState, project_id: &str) -> Result<Project, String> {
    let id = parse_id(project_id)?;
    let projects = state.projects.lock().map_err(|e| e.to_string())?;
    projects.get(id).cloned().map_err(|e| e.to_string())
}

/// Emits the finish message of a completed export to the frontend.
fn emit_export_update(
    app: &AppHandle,
    mut updates: Receiver<BroadcastMessage>,
    project_id: Uuid,
    model: Option<&str>,
) {
    if let Some(message) = super::take_finished(&mut updates, project_id, model) {
        app.emit("texture_export_update", message)
            .unwrap_or_else(|e| tracing::warn!("Error emitting texture_export_update: {}", e));
    }
}

#[tauri::command]
pub fn get_texture_name_template(
    state: tauri::State<AppState>,
    project_id: String,
    model_index: usize,
) -> Result<String, String> {
    let project = project_snapshot(&state, &project_id)?;
    let model = project.model(model_index).map_err(|e| e.to_string())?;
    Ok(super::file_name_template(&project, model))
}

#[tauri::command]
pub async fn export_model_textures(
    app: AppHandle,
    state: tauri::State<'_, AppState>,
    project_id: String,
    model_index: usize,
    output_dir: String,
) -> Result<u32, String> {
    let project = project_snapshot(&state, &project_id)?;
    let model = project.model(model_index).map_err(|e| e.to_string())?.name.clone();
    let updates = broadcast::subscribe();
    let count = super::export_model(&project, model_index, Path::new(&output_dir))
        .await
        .map_err(|e| e.to_string())?;
    emit_export_update(&app, updates, project.id, Some(&model));
    Ok(count)
}

#[tauri::command]
pub async fn export_all_textures(
    app: AppHandle,
    state: tauri::State<'_, AppState>,
    project_id: String,
    output_dir: String,
) -> Result<u32, String> {
    let project = project_snapshot(&state, &project_id)?;
    let updates = broadcast::subscribe();
    let count = super::export_all_models(&project, Path::new(&output_dir))
        .await
        .map_err(|e| e.to_string())?;
    emit_export_update(&app, updates, project.id, None);
    Ok(count)
}
