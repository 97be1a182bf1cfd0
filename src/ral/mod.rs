#[cfg(feature = "desktop")]
pub mod commands;
mod table;

use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage};
use serde::Serialize;

pub use table::RAL_CLASSIC;

/// Swatch sizes offered for export.
pub const SWATCH_SIZES: [u32; 4] = [256, 512, 2048, 4096];
pub const DEFAULT_SWATCH_SIZE: u32 = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RalColor {
    pub code: &'static str,
    pub name: &'static str,
    pub hex: &'static str,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RalColor {
    pub fn rgb(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl std::fmt::Display for RalColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.code, self.name)
    }
}

/// Substring search over code and name, ignoring case and any `RAL` prefix in the query.
///
/// A blank query finds nothing; a query that is only `RAL` lists the whole table.
pub fn search(query: &str) -> Vec<&'static RalColor> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let query = query.to_uppercase().replace("RAL", "");
    let query = query.trim();
    RAL_CLASSIC
        .iter()
        .filter(|c| c.code.to_uppercase().contains(query) || c.name.to_uppercase().contains(query))
        .collect()
}

pub fn by_code(code: &str) -> Option<&'static RalColor> {
    RAL_CLASSIC.iter().find(|c| c.code == code)
}

/// Search results with a cursor; `next`/`prev` wrap around.
#[derive(Debug, Clone, Default)]
pub struct RalSearch {
    results: Vec<&'static RalColor>,
    index: usize,
}

impl RalSearch {
    pub fn new(query: &str) -> Self {
        Self {
            results: search(query),
            index: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn results(&self) -> &[&'static RalColor] {
        &self.results
    }

    pub fn current(&self) -> Option<&'static RalColor> {
        self.results.get(self.index).copied()
    }

    pub fn next(&mut self) -> Option<&'static RalColor> {
        if !self.results.is_empty() {
            self.index = (self.index + 1) % self.results.len();
        }
        self.current()
    }

    pub fn prev(&mut self) -> Option<&'static RalColor> {
        if !self.results.is_empty() {
            self.index = (self.index + self.results.len() - 1) % self.results.len();
        }
        self.current()
    }

    /// Number of results besides the current one.
    pub fn others(&self) -> usize {
        self.results.len().saturating_sub(1)
    }
}

/// `RAL 1000` at 256 px -> `RAL_1000_256.png`
pub fn file_name(color: &RalColor, size: u32) -> String {
    format!("{}_{}.png", color.code.replace(' ', "_"), size)
}

/// Writes a `size`x`size` RGB swatch; PNG without alpha opens as a flat background layer.
pub fn save_png(color: &RalColor, path: &Path, size: u32) -> anyhow::Result<()> {
    if size == 0 {
        anyhow::bail!("Swatch size must be positive");
    }
    let swatch = RgbImage::from_pixel(size, size, Rgb(color.rgb()));
    swatch
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| anyhow::anyhow!("Failed to save {}: {}", path.display(), e))?;
    tracing::debug!(code = color.code, size, path = %path.display(), "swatch saved");
    Ok(())
}

/// Saves into `folder` under [`file_name`] and returns the written path.
pub fn save_png_to_folder(color: &RalColor, folder: &Path, size: u32) -> anyhow::Result<PathBuf> {
    let path = folder.join(file_name(color, size));
    save_png(color, &path, size)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn table_codes_are_unique() {
        let mut codes: Vec<&str> = RAL_CLASSIC.iter().map(|c| c.code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), RAL_CLASSIC.len());
    }

    #[test]
    fn hex_matches_channels() {
        for color in RAL_CLASSIC {
            let expected = format!("#{:02X}{:02X}{:02X}", color.r, color.g, color.b);
            assert_eq!(color.hex, expected, "{}", color.code);
        }
    }

    #[test]
    fn query_strips_ral_prefix() {
        let found = search("ral 9005");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].code, "RAL 9005");
        assert_eq!(found[0].name, "Jet black");

        assert_eq!(search("  9005 ")[0].code, "RAL 9005");
        assert!(search("").is_empty());
        assert!(search("   ").is_empty());
        assert!(search("no such color").is_empty());
    }

    #[test]
    fn bare_prefix_lists_every_color() {
        let found = search(" ral ");
        assert_eq!(found.len(), RAL_CLASSIC.len());
        assert_eq!(found[0].code, RAL_CLASSIC[0].code);
    }

    #[test]
    fn query_matches_names() {
        let found = search("traffic");
        assert!(found.len() > 5);
        assert!(found.iter().all(|c| c.name.to_uppercase().contains("TRAFFIC")));
        assert_eq!(found[0].code, "RAL 1023");
    }

    #[test]
    fn navigation_wraps() {
        let mut results = RalSearch::new("ral 100");
        let codes: Vec<&str> = results.results().iter().map(|c| c.code).collect();
        assert_eq!(codes.len(), 8);
        assert_eq!(results.others(), 7);
        assert_eq!(results.current().unwrap().code, "RAL 1000");

        assert_eq!(results.prev().unwrap().code, "RAL 1007");
        assert_eq!(results.next().unwrap().code, "RAL 1000");
        assert_eq!(results.next().unwrap().code, "RAL 1001");

        let mut empty = RalSearch::new("xyz");
        assert!(empty.is_empty());
        assert_eq!(empty.next(), None);
        assert_eq!(empty.others(), 0);
    }

    #[test]
    fn swatch_file_name() {
        let color = by_code("RAL 1000").unwrap();
        assert_eq!(file_name(color, 256), "RAL_1000_256.png");
        assert!(by_code("RAL 0000").is_none());
    }

    #[test]
    fn swatch_is_solid_rgb() {
        let tmp = TempDir::new().unwrap();
        let color = by_code("RAL 3020").unwrap();
        let path = save_png_to_folder(color, tmp.path(), 64).unwrap();
        assert!(path.ends_with("RAL_3020_64.png"));

        let img = image::open(&path).unwrap();
        assert!(!img.color().has_alpha());
        let rgb = img.to_rgb8();
        assert_eq!(rgb.dimensions(), (64, 64));
        assert!(rgb.pixels().all(|p| p.0 == [0xBB, 0x1E, 0x10]));

        assert!(save_png(color, &tmp.path().join("zero.png"), 0).is_err());
    }
}
