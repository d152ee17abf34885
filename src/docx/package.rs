// OPC package assembly and atomic save

use std::io::{Seek, Write};
use std::path::Path;

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::document::Document;

use super::body::render_document_xml;
use super::media::MediaTable;
use super::parts;
use super::{DocxError, Result};

/// A named part ready to be stored in the archive
#[derive(Debug, Clone)]
pub struct PackagePart {
    pub name: String,
    pub content: Vec<u8>,
}

impl PackagePart {
    fn new(name: impl Into<String>, content: Vec<u8>) -> Self {
        PackagePart { name: name.into(), content }
    }
}

/// Serialize every part of the document, content types first
pub fn render_parts(doc: &Document) -> Result<Vec<PackagePart>> {
    let media = MediaTable::collect(doc);

    let mut out = vec![
        PackagePart::new(parts::CONTENT_TYPES_PART, parts::content_types(&media)?),
        PackagePart::new(parts::PACKAGE_RELS_PART, parts::package_relationships()?),
        PackagePart::new(parts::CORE_PART, parts::core_properties(&doc.core)?),
        PackagePart::new(parts::APP_PART, parts::app_properties()?),
        PackagePart::new(parts::DOCUMENT_PART, render_document_xml(doc, &media)?),
        PackagePart::new(parts::DOCUMENT_RELS_PART, parts::document_relationships(&media)?),
        PackagePart::new(parts::STYLES_PART, parts::styles()?),
        PackagePart::new(parts::NUMBERING_PART, parts::numbering()?),
    ];
    for entry in media.entries() {
        out.push(PackagePart::new(entry.part_name(), entry.bytes.clone()));
    }
    Ok(out)
}

/// Write the document as a ZIP package into `writer`
pub fn write_package<W: Write + Seek>(doc: &Document, writer: W) -> Result<()> {
    let parts = render_parts(doc)?;

    let mut zip = ZipWriter::new(writer);
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    for part in &parts {
        zip.start_file(part.name.as_str(), options)?;
        zip.write_all(&part.content)?;
    }
    zip.finish()?;

    log::debug!("packaged {} parts", parts.len());
    Ok(())
}

/// Save to `path`, replacing an existing file.
///
/// The archive is written to a temporary file beside the target and renamed
/// over it only once complete. On any error the temporary file is removed
/// and the target is left untouched.
pub fn save(doc: &Document, path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = tempfile::Builder::new();
    builder.prefix(".docx-").suffix(".tmp");
    // Created like a plain file: 0o666 less the process umask
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut staging = builder.tempfile_in(dir).map_err(|source| DocxError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    write_package(doc, staging.as_file_mut())?;

    let staged_io = |source: std::io::Error| DocxError::Io {
        path: staging.path().to_path_buf(),
        source,
    };
    // An overwritten target keeps its mode
    if let Some(existing) = std::fs::metadata(path).ok().filter(|meta| meta.is_file()) {
        staging.as_file().set_permissions(existing.permissions()).map_err(staged_io)?;
    }
    staging.as_file().sync_all().map_err(staged_io)?;

    staging.persist(path).map_err(|err| DocxError::Io {
        path: path.to_path_buf(),
        source: err.error,
    })?;

    log::info!("wrote document {} ({} paragraphs)", path.display(), doc.blocks().len());
    Ok(())
}

impl Document {
    /// Serialize to a .docx file. See [`save`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        save(self, path.as_ref())
    }

    /// Serialize to an in-memory .docx archive
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut cursor = std::io::Cursor::new(Vec::new());
        write_package(self, &mut cursor)?;
        Ok(cursor.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.add_heading("Heading", 1).unwrap();
        doc.add_paragraph("Body", None).unwrap();
        doc
    }

    #[test]
    fn test_parts_order_starts_with_content_types() {
        let parts = render_parts(&sample()).unwrap();
        assert_eq!(parts[0].name, "[Content_Types].xml");
        assert_eq!(parts.len(), 8);
    }

    #[test]
    fn test_to_bytes_is_a_zip_with_document_part() {
        let bytes = sample().to_bytes().unwrap();
        let mut archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();

        let mut xml = String::new();
        archive.by_name("word/document.xml").unwrap().read_to_string(&mut xml).unwrap();
        assert!(xml.contains("<w:t>Body</w:t>"));
        assert!(archive.by_name("word/styles.xml").is_ok());
    }

    #[test]
    fn test_save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");
        std::fs::write(&path, b"stale").unwrap();

        sample().save(&path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[0..2], b"PK");
        // no staging files left behind
        let leftovers: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_mode_matches_a_plain_write() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("plain.bin");
        std::fs::write(&plain, b"x").unwrap();
        let expected = std::fs::metadata(&plain).unwrap().permissions().mode() & 0o777;

        let path = dir.path().join("fresh.docx");
        sample().save(&path).unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, expected);
    }

    #[cfg(unix)]
    #[test]
    fn test_overwrite_keeps_existing_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.docx");
        std::fs::write(&path, b"stale").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o640)).unwrap();

        sample().save(&path).unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o640);
    }

    #[test]
    fn test_save_into_missing_directory_fails_cleanly() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.docx");
        let err = sample().save(&path).unwrap_err();
        assert!(matches!(err, DocxError::Io { .. }));
        assert!(!path.exists());
    }
}
