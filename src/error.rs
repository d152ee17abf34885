//! Crate-level error aggregating every stage of generation

use thiserror::Error;

use crate::docx::DocxError;
use crate::document::DocumentError;
use crate::icon::IconError;
use crate::sample::ConfigError;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("icon generation failed: {0}")]
    Icon(#[from] IconError),
    #[error("document assembly failed: {0}")]
    Document(#[from] DocumentError),
    #[error("document serialization failed: {0}")]
    Docx(#[from] DocxError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("logger setup failed: {0}")]
    Logging(#[from] flexi_logger::FlexiLoggerError),
}
