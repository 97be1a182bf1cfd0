#[cfg(feature = "desktop")]
pub mod commands;

use std::path::{Path, PathBuf};

use tokio::sync::broadcast::error::TryRecvError;
use tokio::sync::broadcast::Receiver;

use crate::broadcast::{self, BroadcastMessage};
use crate::projects::{is_ground, ModelData, Project, TextureSlot, UdimTile};

/// Characters that are invalid in file names on at least one supported platform.
const INVALID_FILE_NAME_CHARS: [char; 9] = ['"', '<', '>', '|', ':', '*', '?', '\\', '/'];

/// Ground textures always carry the model name; buildings only when several exist.
pub fn includes_model_name(project: &Project, model: &ModelData) -> bool {
    project.needs_model_suffix() || is_ground(&model.name)
}

/// Preview of the names `export_model` will produce for `model`.
pub fn file_name_template(project: &Project, model: &ModelData) -> String {
    if includes_model_name(project, model) {
        format!("T_{}_{}_[D/E/N]_1.[UDIM].png", project.name, model.name)
    } else {
        format!("T_{}_[D/E/N]_1.[UDIM].png", project.name)
    }
}

/// Replaces invalid characters and spaces with `_`; empty names become `Unnamed`.
pub fn sanitize_file_name(name: &str) -> String {
    if name.is_empty() {
        return "Unnamed".to_string();
    }
    name.chars()
        .map(|c| {
            if c == ' ' || c.is_control() || INVALID_FILE_NAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// `T_<project>[_<model>]_<Channel>_1.<udim>.png`
pub fn texture_file_name(
    project_name: &str,
    model_name: &str,
    slot: TextureSlot,
    udim_number: u32,
    include_model: bool,
) -> String {
    let project_name = sanitize_file_name(project_name);
    if include_model {
        format!(
            "T_{}_{}_{}_1.{}.png",
            project_name,
            sanitize_file_name(model_name),
            slot.channel(),
            udim_number
        )
    } else {
        format!("T_{}_{}_1.{}.png", project_name, slot.channel(), udim_number)
    }
}

/// Copies every populated slot of `tile`; returns the number of files written.
fn export_tile(
    project_name: &str,
    model_name: &str,
    tile: &UdimTile,
    output_dir: &Path,
    include_model: bool,
) -> u32 {
    let mut count = 0;
    for slot in TextureSlot::ALL {
        let Some(source) = tile.path(slot) else {
            continue;
        };
        let file_name =
            texture_file_name(project_name, model_name, slot, tile.udim_number, include_model);
        if copy_texture(Path::new(source), &output_dir.join(file_name)) {
            count += 1;
        }
    }
    count
}

fn copy_texture(source: &Path, destination: &Path) -> bool {
    if !source.is_file() {
        tracing::debug!(source = %source.display(), "texture missing, skipped");
        return false;
    }
    match std::fs::copy(source, destination) {
        Ok(_) => true,
        Err(e) => {
            tracing::debug!(
                source = %source.display(),
                destination = %destination.display(),
                "texture copy failed: {}",
                e
            );
            false
        }
    }
}

/// Synchronous copy loop for one model.
pub fn export_model_blocking(
    project_name: &str,
    model: &ModelData,
    output_dir: &Path,
    include_model: bool,
) -> u32 {
    model
        .tiles()
        .map(|tile| export_tile(project_name, &model.name, tile, output_dir, include_model))
        .sum()
}

/// Copies one model's textures into `output_dir` on a blocking worker thread.
pub async fn export_model(
    project: &Project,
    model_index: usize,
    output_dir: &Path,
) -> anyhow::Result<u32> {
    let model = project.model(model_index)?.clone();
    let include_model = includes_model_name(project, &model);
    let project_name = project.name.clone();
    let output_dir = output_dir.to_path_buf();
    let model_name = model.name.clone();

    let count = tokio::task::spawn_blocking(move || {
        std::fs::create_dir_all(&output_dir)?;
        anyhow::Ok(export_model_blocking(&project_name, &model, &output_dir, include_model))
    })
    .await??;

    tracing::info!(model = %model_name, count, "texture export finished");
    broadcast::publish(BroadcastMessage::TextureExportFinished(
        project.id,
        Some(model_name),
        count,
    ));
    Ok(count)
}

/// Copies every model's textures into `output_dir/<model name>/`.
pub async fn export_all_models(project: &Project, output_dir: &Path) -> anyhow::Result<u32> {
    let snapshot = project.clone();
    let output_dir = output_dir.to_path_buf();

    let count = tokio::task::spawn_blocking(move || {
        let mut count = 0;
        for model in &snapshot.models {
            let model_dir: PathBuf = output_dir.join(&model.name);
            std::fs::create_dir_all(&model_dir)?;
            let include_model = includes_model_name(&snapshot, model);
            count += export_model_blocking(&snapshot.name, model, &model_dir, include_model);
        }
        anyhow::Ok(count)
    })
    .await??;

    tracing::info!(project = %project.name, count, "texture export finished");
    broadcast::publish(BroadcastMessage::TextureExportFinished(project.id, None, count));
    Ok(count)
}

/// Takes the finish message of one export from `receiver`, skipping anything else queued.
///
/// `model` is `None` for a whole-project export. Returns `None` once the queue is drained.
pub fn take_finished(
    receiver: &mut Receiver<BroadcastMessage>,
    project_id: uuid::Uuid,
    model: Option<&str>,
) -> Option<BroadcastMessage> {
    loop {
        match receiver.try_recv() {
            Ok(BroadcastMessage::TextureExportFinished(id, name, count))
                if id == project_id && name.as_deref() == model =>
            {
                return Some(BroadcastMessage::TextureExportFinished(id, name, count));
            }
            Ok(_) => {}
            Err(TryRecvError::Lagged(skipped)) => {
                tracing::debug!(skipped, "export listener lagged");
            }
            Err(_) => return None,
        }
    }
}
