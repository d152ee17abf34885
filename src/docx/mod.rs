//! WordprocessingML (.docx) serialization
//!
//! Pipeline:
//!   Document
//!     ↓ [MediaTable::collect] distinct images, relationship ids
//!     ↓ [parts / body] one XML buffer per package part
//!     ↓ [package] ZIP container, staged then renamed into place
//!   .docx file
//!
//! `outline` reads a package back into a paragraph outline.

mod body;
mod media;
mod outline;
mod package;
mod parts;
mod xml;

pub use body::render_document_xml;
pub use media::{MediaEntry, MediaTable};
pub use outline::{read_outline, read_outline_from, OutlineEntry, OutlineRun};
pub use package::{render_parts, save, write_package, PackagePart};

use std::path::PathBuf;
use thiserror::Error;

/// Namespace URIs used across parts
pub mod ns {
    pub const W: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
    pub const R: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
    pub const WP: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
    pub const A: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
    pub const PIC: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";
    pub const CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
    pub const RELATIONSHIPS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
    pub const CORE_PROPERTIES: &str = "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
    pub const EXTENDED_PROPERTIES: &str = "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties";
    pub const DC: &str = "http://purl.org/dc/elements/1.1/";
    pub const DCTERMS: &str = "http://purl.org/dc/terms/";
    pub const DCMITYPE: &str = "http://purl.org/dc/dcmitype/";
    pub const XSI: &str = "http://www.w3.org/2001/XMLSchema-instance";
}

#[derive(Debug, Error)]
pub enum DocxError {
    #[error("xml write error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("i/o error: {0}")]
    Stream(#[from] std::io::Error),
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no media part for picture {}", .0.display())]
    MissingMedia(PathBuf),
    #[error("unreadable package: {0}")]
    Read(String),
}

pub type Result<T> = std::result::Result<T, DocxError>;
