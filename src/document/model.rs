// Document model: an append-only list of paragraphs

use std::io::Cursor;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use super::style::ParagraphStyle;
use super::units::{Length, DEFAULT_DPI};
use super::{DocumentError, Result};

/// Image encodings that can be embedded in a package
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PictureFormat {
    Png,
    Jpeg,
}

impl PictureFormat {
    fn from_image_format(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Png => Some(PictureFormat::Png),
            image::ImageFormat::Jpeg => Some(PictureFormat::Jpeg),
            _ => None,
        }
    }

    /// File extension used for the part name under `word/media/`
    pub fn extension(&self) -> &'static str {
        match self {
            PictureFormat::Png => "png",
            PictureFormat::Jpeg => "jpeg",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            PictureFormat::Png => "image/png",
            PictureFormat::Jpeg => "image/jpeg",
        }
    }
}

/// An image placed inline in a run
#[derive(Clone, Debug, PartialEq)]
pub struct InlinePicture {
    /// Path the image was read from
    pub source: PathBuf,
    /// Encoded image bytes, embedded verbatim
    pub media: Vec<u8>,
    pub format: PictureFormat,
    pub pixel_width: u32,
    pub pixel_height: u32,
    /// Display size (cx, cy)
    pub extent: (Length, Length),
}

impl InlinePicture {
    /// Load an image from disk and compute its display extent.
    ///
    /// With both `width` and `height` the extent is used as given. With only
    /// one of them the other is scaled to keep the aspect ratio. With neither
    /// the native size at 72 dpi is used.
    pub fn load(path: &Path, width: Option<Length>, height: Option<Length>) -> Result<Self> {
        let media = std::fs::read(path).map_err(|source| DocumentError::PictureRead {
            path: path.to_path_buf(),
            source,
        })?;

        let reader = image::io::Reader::new(Cursor::new(&media))
            .with_guessed_format()
            .map_err(|source| DocumentError::PictureRead {
                path: path.to_path_buf(),
                source,
            })?;
        let detected = reader.format();
        let format = detected
            .and_then(PictureFormat::from_image_format)
            .ok_or_else(|| DocumentError::UnsupportedPicture {
                path: path.to_path_buf(),
                format: detected.map(|f| format!("{:?}", f)).unwrap_or_else(|| "unknown".to_string()),
            })?;
        let (pixel_width, pixel_height) = reader.into_dimensions().map_err(|source| DocumentError::PictureDecode {
            path: path.to_path_buf(),
            source,
        })?;

        let extent = scale_extent(pixel_width, pixel_height, width, height);

        Ok(InlinePicture {
            source: path.to_path_buf(),
            media,
            format,
            pixel_width,
            pixel_height,
            extent,
        })
    }

    /// File name shown as the picture description
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("image.{}", self.format.extension()))
    }
}

fn scale_extent(px_w: u32, px_h: u32, width: Option<Length>, height: Option<Length>) -> (Length, Length) {
    match (width, height) {
        (Some(w), Some(h)) => (w, h),
        (Some(w), None) => (w, w.scaled(px_h, px_w)),
        (None, Some(h)) => (h.scaled(px_w, px_h), h),
        (None, None) => (
            Length::from_pixels(px_w, DEFAULT_DPI),
            Length::from_pixels(px_h, DEFAULT_DPI),
        ),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RunContent {
    Text(String),
    Picture(InlinePicture),
}

/// A span of content sharing one set of character formatting
#[derive(Clone, Debug, PartialEq)]
pub struct Run {
    pub content: RunContent,
    /// `None` inherits from the paragraph style
    pub bold: Option<bool>,
    pub italic: Option<bool>,
}

impl Run {
    pub fn text(text: impl Into<String>) -> Self {
        Run {
            content: RunContent::Text(text.into()),
            bold: None,
            italic: None,
        }
    }

    pub fn picture(picture: InlinePicture) -> Self {
        Run {
            content: RunContent::Picture(picture),
            bold: None,
            italic: None,
        }
    }

    pub fn set_bold(&mut self, bold: bool) -> &mut Self {
        self.bold = Some(bold);
        self
    }

    pub fn set_italic(&mut self, italic: bool) -> &mut Self {
        self.italic = Some(italic);
        self
    }

    pub fn is_bold(&self) -> bool {
        self.bold.unwrap_or(false)
    }

    /// Text of this run, empty for pictures
    pub fn as_text(&self) -> &str {
        match &self.content {
            RunContent::Text(text) => text,
            RunContent::Picture(_) => "",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Paragraph {
    pub style: ParagraphStyle,
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new(style: ParagraphStyle) -> Self {
        Paragraph { style, runs: Vec::new() }
    }

    /// Append a text run and return it for formatting
    pub fn add_run(&mut self, text: impl Into<String>) -> &mut Run {
        self.runs.push(Run::text(text));
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    /// Concatenated text of all runs
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.as_text()).collect()
    }

    pub fn pictures(&self) -> impl Iterator<Item = &InlinePicture> {
        self.runs.iter().filter_map(|run| match &run.content {
            RunContent::Picture(picture) => Some(picture),
            RunContent::Text(_) => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
}

/// Metadata written to `docProps/core.xml`
#[derive(Clone, Debug, PartialEq)]
pub struct CoreProperties {
    pub title: Option<String>,
    pub author: String,
    pub created: DateTime<Utc>,
}

impl Default for CoreProperties {
    fn default() -> Self {
        CoreProperties {
            title: None,
            author: env!("CARGO_PKG_NAME").to_string(),
            created: Utc::now(),
        }
    }
}

/// An in-memory Word document. Blocks are kept in document order.
#[derive(Clone, Debug, Default)]
pub struct Document {
    blocks: Vec<Block>,
    pub core: CoreProperties,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a heading. Level 0 is the document title.
    pub fn add_heading(&mut self, text: &str, level: u8) -> Result<&mut Paragraph> {
        let style = ParagraphStyle::for_heading(level)?;
        if level == 0 && self.core.title.is_none() {
            self.core.title = Some(text.to_string());
        }
        Ok(self.push_paragraph(text, style))
    }

    /// Append a paragraph with an optional style name ("Normal" when absent)
    pub fn add_paragraph(&mut self, text: &str, style: Option<&str>) -> Result<&mut Paragraph> {
        let style = match style {
            Some(name) => ParagraphStyle::from_name(name)?,
            None => ParagraphStyle::Normal,
        };
        Ok(self.push_paragraph(text, style))
    }

    /// Append a paragraph holding a single inline picture read from `path`
    pub fn add_picture(
        &mut self,
        path: impl AsRef<Path>,
        width: Option<Length>,
        height: Option<Length>,
    ) -> Result<&mut Paragraph> {
        let picture = InlinePicture::load(path.as_ref(), width, height)?;
        log::debug!(
            "picture {} ({}x{} px) at {:.2}x{:.2} in",
            picture.source.display(),
            picture.pixel_width,
            picture.pixel_height,
            picture.extent.0.as_inches(),
            picture.extent.1.as_inches()
        );
        let mut paragraph = Paragraph::new(ParagraphStyle::Normal);
        paragraph.runs.push(Run::picture(picture));
        Ok(self.push(paragraph))
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().map(|block| match block {
            Block::Paragraph(p) => p,
        })
    }

    /// Most recently appended paragraph
    pub fn last_paragraph_mut(&mut self) -> Option<&mut Paragraph> {
        match self.blocks.last_mut() {
            Some(Block::Paragraph(p)) => Some(p),
            None => None,
        }
    }

    fn push_paragraph(&mut self, text: &str, style: ParagraphStyle) -> &mut Paragraph {
        let mut paragraph = Paragraph::new(style);
        if !text.is_empty() {
            paragraph.add_run(text);
        }
        log::debug!("append paragraph style={} text={:?}", style.style_id(), text);
        self.push(paragraph)
    }

    fn push(&mut self, paragraph: Paragraph) -> &mut Paragraph {
        let index = self.blocks.len();
        self.blocks.push(Block::Paragraph(paragraph));
        match &mut self.blocks[index] {
            Block::Paragraph(p) => p,
        }
    }
}
