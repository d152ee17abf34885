//! In-memory Word document model
//!
//! A `Document` is built by appending paragraphs in reading order. Headings,
//! styled paragraphs, formatted runs and inline pictures are supported.
//! Serialization lives in `crate::docx`.

mod model;
pub mod style;
pub mod units;

pub use model::*;
pub use style::{ListKind, ParagraphStyle};
pub use units::Length;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("no style with name '{0}'")]
    UnknownStyle(String),
    #[error("heading level must be in range 0-9, got {0}")]
    HeadingLevel(u8),
    #[error("cannot read picture {}: {source}", .path.display())]
    PictureRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode picture {}: {source}", .path.display())]
    PictureDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("unsupported picture format {format} in {}", .path.display())]
    UnsupportedPicture { path: PathBuf, format: String },
}

pub type Result<T> = std::result::Result<T, DocumentError>;
