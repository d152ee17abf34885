//! Paragraph style catalogue
//!
//! Only the styles the generated package defines in `word/styles.xml` can be
//! referenced. Looking up any other name fails, which mirrors how Word
//! templates reject unknown style names.

use super::{DocumentError, Result};

/// Numbering definitions a list style can be bound to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ListKind {
    Bullet,
    Decimal,
}

impl ListKind {
    /// `w:numId` used in `word/numbering.xml`
    pub fn num_id(&self) -> u32 {
        match self {
            ListKind::Bullet => 1,
            ListKind::Decimal => 2,
        }
    }
}

/// Built-in paragraph styles
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ParagraphStyle {
    #[default]
    Normal,
    Title,
    Subtitle,
    /// Heading level 1..=9
    Heading(u8),
    ListBullet,
    ListNumber,
    Quote,
}

impl ParagraphStyle {
    /// All styles in the order they are written to `styles.xml`
    pub fn catalogue() -> Vec<ParagraphStyle> {
        let mut styles = vec![ParagraphStyle::Normal, ParagraphStyle::Title, ParagraphStyle::Subtitle];
        styles.extend((1..=9).map(ParagraphStyle::Heading));
        styles.extend([ParagraphStyle::ListBullet, ParagraphStyle::ListNumber, ParagraphStyle::Quote]);
        styles
    }

    /// Resolve a UI name such as "List Bullet" or "Heading 2"
    pub fn from_name(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        Self::catalogue()
            .into_iter()
            .find(|style| style.name() == trimmed || style.style_id() == trimmed)
            .ok_or_else(|| DocumentError::UnknownStyle(name.to_string()))
    }

    /// Style used by `add_heading` for the given level
    pub fn for_heading(level: u8) -> Result<Self> {
        match level {
            0 => Ok(ParagraphStyle::Title),
            1..=9 => Ok(ParagraphStyle::Heading(level)),
            other => Err(DocumentError::HeadingLevel(other)),
        }
    }

    /// Display name, as shown in Word's style gallery
    pub fn name(&self) -> String {
        match self {
            ParagraphStyle::Normal => "Normal".to_string(),
            ParagraphStyle::Title => "Title".to_string(),
            ParagraphStyle::Subtitle => "Subtitle".to_string(),
            ParagraphStyle::Heading(level) => format!("Heading {}", level),
            ParagraphStyle::ListBullet => "List Bullet".to_string(),
            ParagraphStyle::ListNumber => "List Number".to_string(),
            ParagraphStyle::Quote => "Quote".to_string(),
        }
    }

    /// `w:styleId`: the display name without spaces
    pub fn style_id(&self) -> String {
        self.name().replace(' ', "")
    }

    pub fn list_kind(&self) -> Option<ListKind> {
        match self {
            ParagraphStyle::ListBullet => Some(ListKind::Bullet),
            ParagraphStyle::ListNumber => Some(ListKind::Decimal),
            _ => None,
        }
    }

    /// Outline level for headings (0-based, as WordprocessingML counts them)
    pub fn outline_level(&self) -> Option<u8> {
        match self {
            ParagraphStyle::Heading(level) => level.checked_sub(1),
            _ => None,
        }
    }

    pub fn is_default(&self) -> bool {
        matches!(self, ParagraphStyle::Normal)
    }
}
