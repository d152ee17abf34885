// Media parts and their relationship ids

use crate::document::{Document, InlinePicture, PictureFormat};

/// First relationship id available to images; rId1/rId2 are styles and numbering
const FIRST_IMAGE_REL: usize = 3;

#[derive(Debug, Clone)]
pub struct MediaEntry {
    pub rel_id: String,
    /// Target relative to `word/`, e.g. `media/image1.png`
    pub target: String,
    pub format: PictureFormat,
    pub bytes: Vec<u8>,
}

impl MediaEntry {
    /// Full part name inside the package
    pub fn part_name(&self) -> String {
        format!("word/{}", self.target)
    }
}

/// Every distinct image in a document. Identical bytes share one part.
#[derive(Debug, Clone, Default)]
pub struct MediaTable {
    entries: Vec<MediaEntry>,
}

impl MediaTable {
    pub fn collect(doc: &Document) -> Self {
        let mut table = MediaTable::default();
        for paragraph in doc.paragraphs() {
            for picture in paragraph.pictures() {
                table.insert(picture);
            }
        }
        table
    }

    fn insert(&mut self, picture: &InlinePicture) {
        if self.entries.iter().any(|e| e.bytes == picture.media) {
            return;
        }
        let n = self.entries.len() + 1;
        self.entries.push(MediaEntry {
            rel_id: format!("rId{}", FIRST_IMAGE_REL + n - 1),
            target: format!("media/image{}.{}", n, picture.format.extension()),
            format: picture.format,
            bytes: picture.media.clone(),
        });
    }

    /// Relationship id of the part holding this picture's bytes
    pub fn rel_id_for(&self, picture: &InlinePicture) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.bytes == picture.media)
            .map(|e| e.rel_id.as_str())
    }

    pub fn entries(&self) -> &[MediaEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
