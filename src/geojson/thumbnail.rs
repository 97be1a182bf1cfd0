use std::io::Cursor;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{DynamicImage, ImageFormat};

/// Edge length of the preview embedded in GeoJSON documents.
pub const THUMBNAIL_SIZE: u32 = 256;

/// Stretch an image to the given dimensions using a bicubic filter.
pub fn resize_to(img: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    img.resize_exact(width, height, image::imageops::FilterType::CatmullRom)
}

/// Encodes `img` as a 256x256 JPEG and returns it as base64.
pub fn encode_thumbnail(img: &DynamicImage) -> anyhow::Result<String> {
    // JPEG has no alpha channel.
    let resized = DynamicImage::ImageRgb8(resize_to(img, THUMBNAIL_SIZE, THUMBNAIL_SIZE).to_rgb8());

    let mut bytes = Cursor::new(Vec::new());
    resized.write_to(&mut bytes, ImageFormat::Jpeg)?;
    Ok(STANDARD.encode(bytes.into_inner()))
}

pub fn image_to_base64(path: &Path) -> anyhow::Result<String> {
    let img = image::open(path)
        .map_err(|e| anyhow::anyhow!("Failed to open image {}: {}", path.display(), e))?;
    encode_thumbnail(&img)
}

/// Same as [`image_to_base64`] for an in-memory image file (e.g. pasted from the clipboard).
pub fn image_bytes_to_base64(bytes: &[u8]) -> anyhow::Result<String> {
    let img = image::load_from_memory(bytes)?;
    encode_thumbnail(&img)
}

pub fn decode_thumbnail(base64: &str) -> anyhow::Result<DynamicImage> {
    let bytes = STANDARD.decode(base64.trim())?;
    Ok(image::load_from_memory(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, Rgba, RgbaImage};
    use tempfile::TempDir;

    #[test]
    fn thumbnail_is_stretched_to_256() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("facade.png");
        RgbaImage::from_pixel(640, 120, Rgba([200, 30, 30, 128]))
            .save(&path)
            .unwrap();

        let encoded = image_to_base64(&path).unwrap();
        let thumb = decode_thumbnail(&encoded).unwrap();
        assert_eq!(thumb.dimensions(), (THUMBNAIL_SIZE, THUMBNAIL_SIZE));
        assert!(!thumb.color().has_alpha());
    }

    #[test]
    fn rejects_non_images() {
        assert!(image_bytes_to_base64(b"not an image").is_err());
        assert!(decode_thumbnail("%%%").is_err());
    }
}
