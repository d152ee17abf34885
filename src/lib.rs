//! Sample Word document generator
//!
//! Draws a small icon, builds a document with headings, a bold run, a
//! bullet item and the embedded icon, then saves it as a .docx package.

pub mod docx;
pub mod document;
pub mod error;
pub mod icon;
pub mod logging;
pub mod sample;

// Re-export commonly used types
pub use document::{Document, Length, Paragraph, ParagraphStyle, Run};
pub use docx::{read_outline, OutlineEntry, OutlineRun};
pub use error::GenerateError;
pub use icon::{IconSpec, LineSpec};
pub use sample::{build_document, generate, GenerationReport, SampleConfig};
