//! Programmatic icon generation
//!
//! Renders a solid-colour RGB canvas with straight strokes on top and saves
//! it to disk. The output format follows the file extension.

mod stroke;

pub use stroke::stroke_line;

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("icon size must be non-zero, got {0}x{1}")]
    EmptyCanvas(u32, u32),
    #[error("failed to save icon to {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, IconError>;

/// A straight stroke from `from` to `to`, in pixel coordinates
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSpec {
    pub from: (i32, i32),
    pub to: (i32, i32),
    pub color: [u8; 3],
    pub width: u32,
}

/// Canvas size, fill and strokes of an icon
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IconSpec {
    pub width: u32,
    pub height: u32,
    pub background: [u8; 3],
    #[serde(default)]
    pub lines: Vec<LineSpec>,
}

impl IconSpec {
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(IconError::EmptyCanvas(self.width, self.height));
        }
        Ok(())
    }
}

/// Render the icon in memory. Lines are stroked in order, later ones on top.
pub fn render_icon(spec: &IconSpec) -> Result<RgbImage> {
    spec.validate()?;
    let mut canvas = RgbImage::from_pixel(spec.width, spec.height, Rgb(spec.background));
    for line in &spec.lines {
        stroke_line(&mut canvas, line);
    }
    Ok(canvas)
}

/// Render the icon and write it to `path`, replacing any existing file
pub fn write_icon(spec: &IconSpec, path: &Path) -> Result<()> {
    let canvas = render_icon(spec)?;
    canvas.save(path).map_err(|source| IconError::Save {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "wrote icon {} ({}x{}, {} strokes)",
        path.display(),
        spec.width,
        spec.height,
        spec.lines.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cross() -> IconSpec {
        IconSpec {
            width: 100,
            height: 100,
            background: [73, 109, 137],
            lines: vec![
                LineSpec { from: (20, 50), to: (80, 50), color: [255, 255, 0], width: 5 },
                LineSpec { from: (50, 20), to: (50, 80), color: [255, 255, 0], width: 5 },
            ],
        }
    }

    #[test]
    fn test_render_cross() {
        let img = render_icon(&cross()).unwrap();
        assert_eq!(img.dimensions(), (100, 100));
        assert_eq!(img.get_pixel(0, 0).0, [73, 109, 137]);
        assert_eq!(img.get_pixel(50, 50).0, [255, 255, 0]);
        assert_eq!(img.get_pixel(50, 22).0, [255, 255, 0]);
        assert_eq!(img.get_pixel(22, 50).0, [255, 255, 0]);
        assert_eq!(img.get_pixel(30, 30).0, [73, 109, 137]);
    }

    #[test]
    fn test_empty_canvas_rejected() {
        let mut spec = cross();
        spec.height = 0;
        assert!(matches!(render_icon(&spec), Err(IconError::EmptyCanvas(100, 0))));
    }

    #[test]
    fn test_write_icon_round_trips_through_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        write_icon(&cross(), &path).unwrap();

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (100, 100));
        assert_eq!(decoded.get_pixel(50, 50).0, [255, 255, 0]);
    }

    #[test]
    fn test_write_icon_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("icon.png");
        let err = write_icon(&cross(), &path).unwrap_err();
        assert!(matches!(err, IconError::Save { .. }));
        assert!(!path.exists());
    }
}
