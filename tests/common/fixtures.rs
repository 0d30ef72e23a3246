//! Test fixtures: source images and scratch directories.

use std::path::{Path, PathBuf};

use lofi::rendering::write_png;
use lofi_dither::RgbaImage;
use tempfile::TempDir;

/// Scratch directory that is removed when dropped
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `image` as `<name>` and return its path
    pub fn write_png(&self, name: &str, image: &RgbaImage) -> PathBuf {
        let path = self.join(name);
        write_png(&path, image).expect("Failed to write fixture PNG");
        path
    }

    /// Write raw bytes as `<name>` and return its path
    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.join(name);
        std::fs::write(&path, bytes).expect("Failed to write fixture");
        path
    }
}

/// Horizontal black-to-white ramp
pub fn gradient(width: usize, height: usize) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, _| {
        let v = (x * 255 / (width - 1).max(1)) as u8;
        [v, v, v, 255]
    })
}

/// Uniform gray
pub fn gray(width: usize, height: usize, value: u8) -> RgbaImage {
    RgbaImage::filled(width, height, [value, value, value, 255])
}

/// Warm photo-like test card: red/green gradient with a blue disc
pub fn test_card(width: usize, height: usize) -> RgbaImage {
    let (cx, cy) = (width as f64 / 2.0, height as f64 / 2.0);
    let radius = width.min(height) as f64 / 3.0;
    RgbaImage::from_fn(width, height, |x, y| {
        let r = (x * 255 / width.max(1)) as u8;
        let g = (y * 255 / height.max(1)) as u8;
        let inside = (x as f64 - cx).hypot(y as f64 - cy) < radius;
        let b = if inside { 220 } else { 40 };
        [r, g, b, 255]
    })
}
