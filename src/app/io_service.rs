use crate::app::error::{AppError, Result};
use crate::render::compositor::{Compositor, Raster};
use image::codecs::png::PngEncoder;
use image::ImageEncoder;
use std::path::{Path, PathBuf};

pub struct IoService;

impl IoService {
    pub fn pick_export_path(file_name: &str) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_file_name(file_name)
            .add_filter("PNG", &["png"])
            .save_file()
    }

    /// Encodes the bitmap alone, nearest-neighbor scaled to `output_size`²,
    /// as an RGBA PNG held in memory.
    pub fn encode_png<R: Raster + ?Sized>(bitmap: &R, output_size: u32) -> Result<Vec<u8>> {
        if output_size == 0 || bitmap.width() == 0 || bitmap.height() == 0 {
            return Err(AppError::EmptyRaster);
        }
        let mut pixels = vec![0u8; Compositor::frame_len(output_size)];
        Compositor::render_flat(bitmap, &mut pixels, output_size);

        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes).write_image(&pixels, output_size, output_size, image::ColorType::Rgba8.into())?;
        if bytes.is_empty() {
            return Err(AppError::EmptyRaster);
        }
        Ok(bytes)
    }

    pub fn save_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
        std::fs::write(path, bytes)?;
        log::info!("exported {} bytes to {}", bytes.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Color;
    use crate::core::store::BitmapStore;

    #[test]
    fn test_encode_png_dimensions() {
        let s = BitmapStore::new(32, 32);
        let bytes = IoService::encode_png(&s, 128).unwrap();
        let img = image::load_from_memory(&bytes).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (128, 128));
        assert!(img.pixels().all(|p| p.0[3] == 0));
    }

    #[test]
    fn test_encode_png_zero_size() {
        let s = BitmapStore::new(32, 32);
        assert!(matches!(IoService::encode_png(&s, 0), Err(AppError::EmptyRaster)));
    }

    #[test]
    fn test_save_bytes() {
        let mut s = BitmapStore::new(32, 32);
        s.set_pixel(31, 31, Color::opaque(0, 255, 0));
        let bytes = IoService::encode_png(&s, 64).unwrap();

        let mut path = std::env::temp_dir();
        path.push(format!("pixel_avatar_io_{}.png", std::process::id()));
        IoService::save_bytes(&path, &bytes).unwrap();
        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(63, 63).0, [0, 255, 0, 255]);
        assert_eq!(img.get_pixel(61, 61).0, [0, 0, 0, 0]);
        let _ = std::fs::remove_file(path);
    }
}
