//! The sample generator: icon first, then the document that embeds it.

mod config;

pub use config::{ConfigError, ContentStep, SampleConfig};

use std::path::{Path, PathBuf};

use crate::document::{Document, Length};
use crate::error::GenerateError;
use crate::icon;

/// Paths written by [`generate`]
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub icon_path: PathBuf,
    pub document_path: PathBuf,
    pub paragraphs: usize,
}

/// Apply the content steps in order. Relative picture paths resolve
/// against `base_dir`; the default picture is the configured icon.
pub fn build_document(config: &SampleConfig, base_dir: &Path) -> Result<Document, GenerateError> {
    let mut doc = Document::new();

    for (idx, step) in config.content.iter().enumerate() {
        match step {
            ContentStep::Heading { text, level } => {
                doc.add_heading(text, *level)?;
            }
            ContentStep::Paragraph { text, style } => {
                doc.add_paragraph(text, style.as_deref())?;
            }
            ContentStep::Run { text, bold, italic } => {
                let paragraph = doc.last_paragraph_mut().ok_or_else(|| {
                    ConfigError::Invalid(format!("step {}: run has no preceding paragraph", idx))
                })?;
                let run = paragraph.add_run(text.as_str());
                if let Some(bold) = bold {
                    run.set_bold(*bold);
                }
                if let Some(italic) = italic {
                    run.set_italic(*italic);
                }
            }
            ContentStep::Picture { path, width_in, height_in } => {
                let source = base_dir.join(path.as_deref().unwrap_or(config.icon_path.as_str()));
                doc.add_picture(&source, width_in.map(Length::inches), height_in.map(Length::inches))?;
            }
        }
    }

    Ok(doc)
}

/// Write the icon, build the document and save it, all under `base_dir`
pub fn generate(config: &SampleConfig, base_dir: &Path) -> Result<GenerationReport, GenerateError> {
    let icon_path = base_dir.join(&config.icon_path);
    icon::write_icon(&config.icon, &icon_path)?;

    // The document reads the icon back from disk, so it must be written first
    let doc = build_document(config, base_dir)?;

    let document_path = base_dir.join(&config.output);
    doc.save(&document_path)?;

    Ok(GenerationReport {
        icon_path,
        document_path,
        paragraphs: doc.blocks().len(),
    })
}
