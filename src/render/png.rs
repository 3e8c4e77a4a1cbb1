//! PNG output for finished canvases.

use std::path::Path;

use image::{ImageFormat, Rgba, RgbaImage};
use tiny_skia::Pixmap;

use crate::error::{SymbolsError, Result};

/// Write a pixmap to a PNG file, whatever the path's extension.
pub fn write_png(pixmap: &Pixmap, path: &Path) -> Result<()> {
    to_rgba_image(pixmap)
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| SymbolsError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })
}

/// Convert premultiplied pixmap pixels to a straight-alpha image.
pub fn to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());

    for (src, dst) in pixmap.pixels().iter().zip(img.pixels_mut()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }

    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;
    use tiny_skia::Color;

    #[test]
    fn test_write_png_simple() {
        let mut pixmap = Pixmap::new(2, 2).unwrap();
        pixmap.fill(Color::from_rgba8(255, 0, 0, 255));

        let dir = tempdir().unwrap();
        let path = dir.path().join("test.png");

        write_png(&pixmap, &path).unwrap();

        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 2);
        assert_eq!(img.height(), 2);
        assert_eq!(img.get_pixel(1, 1).0, [255, 0, 0, 255]);
    }

    #[test]
    fn test_write_png_ignores_extension() {
        let pixmap = Pixmap::new(3, 1).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("picture.out");

        write_png(&pixmap, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn test_demultiplies_alpha() {
        let mut pixmap = Pixmap::new(1, 1).unwrap();
        pixmap.fill(Color::from_rgba8(0, 0, 255, 128));

        let img = to_rgba_image(&pixmap);
        let [r, g, b, a] = img.get_pixel(0, 0).0;
        assert_eq!((r, g), (0, 0));
        assert!(b >= 254, "blue {b}");
        assert_eq!(a, 128);
    }

    #[test]
    fn test_write_png_missing_directory() {
        let pixmap = Pixmap::new(1, 1).unwrap();

        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.png");

        let err = write_png(&pixmap, &path).unwrap_err();
        match err {
            SymbolsError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
