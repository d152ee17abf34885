//! Structural read-back of a written package
//!
//! Extracts the paragraph sequence (style, run text, bold flag, pictures)
//! through `docx_rs`, an independent parser of the package this crate
//! writes. Formatting beyond bold is ignored.
//!
//! The docx-rs tree walked here:
//!   Docx
//!     └── document.children: Vec<DocumentChild>
//!           └── Paragraph (property.style)
//!                 └── ParagraphChild::Run (run_property.bold)
//!                       └── RunChild::{Text, Tab, Break, Drawing}

use std::borrow::Cow;
use std::path::Path;

use docx_rs::{Bold, DocumentChild, ParagraphChild, RunChild};

use super::{DocxError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineRun {
    pub text: String,
    pub bold: bool,
}

/// One body paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    /// `w:styleId`, "Normal" when the paragraph has no explicit style
    pub style: String,
    pub runs: Vec<OutlineRun>,
    pub pictures: usize,
}

impl OutlineEntry {
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

pub fn read_outline(path: impl AsRef<Path>) -> Result<Vec<OutlineEntry>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| DocxError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_outline_from(&bytes)
}

/// Outline of an in-memory .docx archive
pub fn read_outline_from(bytes: &[u8]) -> Result<Vec<OutlineEntry>> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| DocxError::Read(format!("{:?}", e)))?;

    Ok(docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(read_paragraph(para)),
            _ => None,
        })
        .collect())
}

fn read_paragraph(para: &docx_rs::Paragraph) -> OutlineEntry {
    let style = para
        .property
        .style
        .as_ref()
        .map(|s| s.val.clone())
        .unwrap_or_else(|| "Normal".to_string());

    let mut runs = Vec::new();
    let mut pictures = 0;
    for child in &para.children {
        let ParagraphChild::Run(run) = child else {
            continue;
        };

        let mut text = String::new();
        let mut has_text = false;
        for rc in &run.children {
            match rc {
                RunChild::Text(t) => {
                    text.push_str(&unescape_text(&t.text));
                    has_text = true;
                }
                RunChild::Tab(_) => {
                    text.push('\t');
                    has_text = true;
                }
                RunChild::Break(_) => {
                    text.push('\n');
                    has_text = true;
                }
                RunChild::Drawing(_) => pictures += 1,
                _ => {}
            }
        }

        if has_text {
            runs.push(OutlineRun {
                text,
                bold: run.run_property.bold.as_ref() == Some(&Bold::new()),
            });
        }
    }

    OutlineEntry { style, runs, pictures }
}

// docx-rs keeps run text in escaped form; text that is not a valid
// escape sequence is returned as stored.
fn unescape_text(stored: &str) -> Cow<'_, str> {
    quick_xml::escape::unescape(stored).unwrap_or(Cow::Borrowed(stored))
}
