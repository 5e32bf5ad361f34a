//! Soft-failing image loading
//!
//! Recipe images are decoded and scaled to a fixed cell grid. Anything that
//! goes wrong (missing file, unreadable file, unsupported format) yields
//! `ImageSlot::Missing` and a warning in the log; callers never see an error.

use image::imageops::FilterType;
use image::{DynamicImage, ImageReader, ImageResult, RgbImage};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Text shown in place of an image that could not be loaded
pub const IMAGE_PLACEHOLDER: &str = "Image not found";

/// A decoded image scaled for terminal display.
///
/// Each terminal cell shows two vertically stacked pixels, so the pixel
/// buffer is `width` x `height * 2`.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    path: PathBuf,
    width: u16,
    height: u16,
    pixels: RgbImage,
}

impl ImageAsset {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Width in cells
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in cells
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Upper and lower pixel colours for the cell at (`col`, `row`)
    pub fn cell(&self, col: u16, row: u16) -> ([u8; 3], [u8; 3]) {
        let x = u32::from(col);
        let y = u32::from(row) * 2;
        let upper = self.pixels.get_pixel(x, y).0;
        let lower = self.pixels.get_pixel(x, y + 1).0;
        (upper, lower)
    }
}

/// Result of trying to load an image asset
#[derive(Debug, Clone)]
pub enum ImageSlot {
    Loaded(ImageAsset),
    Missing,
}

impl ImageSlot {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ImageSlot::Loaded(_))
    }
}

/// Load and scale an image to `width` x `height` cells
pub fn load_image(path: &Path, width: u16, height: u16) -> ImageSlot {
    if width == 0 || height == 0 {
        return ImageSlot::Missing;
    }

    match decode(path) {
        Ok(img) => {
            let pixels = img
                .resize_exact(u32::from(width), u32::from(height) * 2, FilterType::Triangle)
                .to_rgb8();
            tracing::debug!(path = %path.display(), width, height, "Loaded image");
            ImageSlot::Loaded(ImageAsset {
                path: path.to_path_buf(),
                width,
                height,
                pixels,
            })
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Error loading image");
            ImageSlot::Missing
        }
    }
}

/// Decode by content rather than extension; bundled assets are not always
/// named after their format.
fn decode(path: &Path) -> ImageResult<DynamicImage> {
    ImageReader::open(path)?.with_guessed_format()?.decode()
}

/// Caches loaded images by path and size for the life of the process
#[derive(Debug, Default)]
pub struct ImageCache {
    slots: HashMap<(PathBuf, u16, u16), ImageSlot>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_load(&mut self, path: &Path, width: u16, height: u16) -> &ImageSlot {
        self.slots
            .entry((path.to_path_buf(), width, height))
            .or_insert_with(|| load_image(path, width, height))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use tempfile::TempDir;

    fn write_test_png(dir: &Path) -> PathBuf {
        let path = dir.join("dish.png");
        let mut img = RgbImage::new(8, 8);
        for (_, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = if y < 4 { Rgb([255, 0, 0]) } else { Rgb([0, 0, 255]) };
        }
        img.save(&path).unwrap();
        path
    }

    #[test]
    fn test_missing_file_is_soft_failure() {
        let slot = load_image(Path::new("does/not/exist.jpg"), 10, 5);
        assert!(!slot.is_loaded());
    }

    #[test]
    fn test_undecodable_file_is_soft_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();
        assert!(!load_image(&path, 10, 5).is_loaded());
    }

    #[test]
    fn test_loaded_image_is_scaled_to_cells() {
        let dir = TempDir::new().unwrap();
        let path = write_test_png(dir.path());

        match load_image(&path, 4, 2) {
            ImageSlot::Loaded(asset) => {
                assert_eq!(asset.width(), 4);
                assert_eq!(asset.height(), 2);
                assert_eq!(asset.path(), path.as_path());
                let (top, _) = asset.cell(0, 0);
                let (_, bottom) = asset.cell(0, 1);
                assert!(top[0] > 200 && top[2] < 50);
                assert!(bottom[2] > 200 && bottom[0] < 50);
            }
            ImageSlot::Missing => panic!("expected image to load"),
        }
    }

    #[test]
    fn test_zero_size_is_missing() {
        let dir = TempDir::new().unwrap();
        let path = write_test_png(dir.path());
        assert!(!load_image(&path, 0, 3).is_loaded());
    }

    #[test]
    fn test_cache_reuses_slots() {
        let dir = TempDir::new().unwrap();
        let path = write_test_png(dir.path());
        let mut cache = ImageCache::new();

        assert!(cache.get_or_load(&path, 4, 2).is_loaded());
        assert!(cache.get_or_load(&path, 4, 2).is_loaded());
        assert_eq!(cache.len(), 1);

        cache.get_or_load(&path, 8, 4);
        assert_eq!(cache.len(), 2);
    }
}
