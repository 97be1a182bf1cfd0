use std::path::Path;

use super::RalColor;

#[tauri::command]
pub fn search_ral_colors(query: String) -> Vec<RalColor> {
    super::search(&query).into_iter().copied().collect()
}

/// Saves a solid swatch into `folder` and returns the file path.
#[tauri::command]
pub async fn save_ral_swatch(code: String, folder: String, size: Option<u32>) -> Result<String, String> {
    let color = super::by_code(&code).ok_or_else(|| format!("Unknown RAL color: {}", code))?;
    let size = size.unwrap_or(super::DEFAULT_SWATCH_SIZE);
    let path = super::save_png_to_folder(color, Path::new(&folder), size).map_err(|e| e.to_string())?;
    Ok(path.display().to_string())
}
