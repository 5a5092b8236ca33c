//! Texture loading and color sampling.

use std::path::Path;

use crate::error::{ExtractError, Result};
use crate::record::Color;

/// Raw texture data loaded from PNG.
#[derive(Debug, Clone)]
pub struct TextureData {
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
    /// RGBA8 pixel data (4 bytes per pixel).
    pub pixels: Vec<u8>,
}

impl TextureData {
    /// Create a new texture from RGBA data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Compute the alpha-weighted mean color of this texture.
    ///
    /// Each pixel contributes to the per-channel sums scaled by its alpha
    /// value, so fully transparent pixels carry zero weight and antialiased
    /// edge pixels do not dilute the solid color. Returns `None` when the
    /// texture is fully transparent (total alpha is zero).
    ///
    /// Channel means stay on the raw 0..=255 scale of the source image.
    pub fn mean_color(&self) -> Option<Color> {
        let mut total_alpha: u64 = 0;
        let mut r_sum: u64 = 0;
        let mut g_sum: u64 = 0;
        let mut b_sum: u64 = 0;

        for pixel in self.pixels.chunks_exact(4) {
            let alpha = pixel[3] as u64;
            total_alpha += alpha;
            r_sum += pixel[0] as u64 * alpha;
            g_sum += pixel[1] as u64 * alpha;
            b_sum += pixel[2] as u64 * alpha;
        }

        if total_alpha == 0 {
            return None;
        }

        Some(Color {
            r: r_sum as f64 / total_alpha as f64,
            g: g_sum as f64 / total_alpha as f64,
            b: b_sum as f64 / total_alpha as f64,
        })
    }
}

/// Load a texture by name from the asset directory.
///
/// Looks up `<assets_dir>/<name>.png` and decodes it to RGBA8. A missing
/// file or one the decoder rejects both surface as
/// [`ExtractError::TextureNotFound`] carrying the texture name.
pub fn load_texture(assets_dir: &Path, name: &str) -> Result<TextureData> {
    let path = assets_dir.join(format!("{name}.png"));
    let data =
        std::fs::read(&path).map_err(|_| ExtractError::TextureNotFound(name.to_string()))?;
    load_texture_from_bytes(&data).map_err(|_| ExtractError::TextureNotFound(name.to_string()))
}

/// Load a texture from PNG bytes.
pub fn load_texture_from_bytes(data: &[u8]) -> std::result::Result<TextureData, image::ImageError> {
    let img = image::load_from_memory(data)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(TextureData {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_color_uniform_opaque() {
        let tex = TextureData::new(2, 1, vec![128, 64, 32, 255, 128, 64, 32, 255]);
        let color = tex.mean_color().unwrap();
        assert_eq!(color.r, 128.0);
        assert_eq!(color.g, 64.0);
        assert_eq!(color.b, 32.0);
    }

    #[test]
    fn test_mean_color_fully_transparent() {
        let tex = TextureData::new(2, 2, vec![255, 255, 255, 0].repeat(4));
        assert!(tex.mean_color().is_none());
    }

    #[test]
    fn test_mean_color_alpha_weighted() {
        // A white pixel at full alpha plus a black pixel at zero alpha:
        // the transparent pixel must not dilute the result.
        let tex = TextureData::new(2, 1, vec![255, 255, 255, 255, 0, 0, 0, 0]);
        let color = tex.mean_color().unwrap();
        assert_eq!(color.r, 255.0);
        assert_eq!(color.g, 255.0);
        assert_eq!(color.b, 255.0);

        // Half-alpha red against full-alpha blue: red weighs half as much.
        let tex = TextureData::new(2, 1, vec![255, 0, 0, 128, 0, 0, 255, 255]);
        let color = tex.mean_color().unwrap();
        let expected_r = (255.0 * 128.0) / (128.0 + 255.0);
        let expected_b = (255.0 * 255.0) / (128.0 + 255.0);
        assert!((color.r - expected_r).abs() < 1e-9);
        assert_eq!(color.g, 0.0);
        assert!((color.b - expected_b).abs() < 1e-9);
    }

    #[test]
    fn test_mean_color_order_invariant() {
        let forward = TextureData::new(3, 1, vec![10, 20, 30, 255, 40, 50, 60, 128, 70, 80, 90, 64]);
        let mut reversed_pixels: Vec<u8> = Vec::new();
        for pixel in forward.pixels.chunks_exact(4).rev() {
            reversed_pixels.extend_from_slice(pixel);
        }
        let reversed = TextureData::new(3, 1, reversed_pixels);
        assert_eq!(forward.mean_color(), reversed.mean_color());
    }

    #[test]
    fn test_load_texture_from_bytes() {
        let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([200, 100, 50, 255]));
        let mut png = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut png),
            image::ImageFormat::Png,
        )
        .unwrap();

        let tex = load_texture_from_bytes(&png).unwrap();
        assert_eq!(tex.width, 4);
        assert_eq!(tex.height, 4);
        assert_eq!(tex.pixels.len(), 4 * 4 * 4);
        let color = tex.mean_color().unwrap();
        assert_eq!(color.r, 200.0);
        assert_eq!(color.g, 100.0);
        assert_eq!(color.b, 50.0);
    }

    #[test]
    fn test_load_texture_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_texture(dir.path(), "missing").unwrap_err();
        assert!(matches!(err, ExtractError::TextureNotFound(name) if name == "missing"));
    }

    #[test]
    fn test_load_texture_undecodable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.png"), b"not a png").unwrap();
        let err = load_texture(dir.path(), "broken").unwrap_err();
        assert!(matches!(err, ExtractError::TextureNotFound(name) if name == "broken"));
    }
}
