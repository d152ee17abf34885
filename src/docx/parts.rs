//! Fixed package parts: content types, relationships, properties, styles
//! and numbering definitions.

use crate::document::{CoreProperties, ListKind, ParagraphStyle};

use super::media::MediaTable;
use super::ns;
use super::xml::XmlWriter;
use super::Result;

pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
pub const PACKAGE_RELS_PART: &str = "_rels/.rels";
pub const CORE_PART: &str = "docProps/core.xml";
pub const APP_PART: &str = "docProps/app.xml";
pub const DOCUMENT_PART: &str = "word/document.xml";
pub const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";
pub const STYLES_PART: &str = "word/styles.xml";
pub const NUMBERING_PART: &str = "word/numbering.xml";

const CT_RELS: &str = "application/vnd.openxmlformats-package.relationships+xml";
const CT_DOCUMENT: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
const CT_STYLES: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
const CT_NUMBERING: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml";
const CT_CORE: &str = "application/vnd.openxmlformats-package.core-properties+xml";
const CT_APP: &str = "application/vnd.openxmlformats-officedocument.extended-properties+xml";

const REL_OFFICE_DOCUMENT: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const REL_CORE: &str = "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
const REL_APP: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";
const REL_STYLES: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
const REL_NUMBERING: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
const REL_IMAGE: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";

pub fn content_types(media: &MediaTable) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::with_declaration()?;
    xml.start("Types", &[("xmlns", ns::CONTENT_TYPES)])?;
    xml.empty("Default", &[("Extension", "rels"), ("ContentType", CT_RELS)])?;
    xml.empty("Default", &[("Extension", "xml"), ("ContentType", "application/xml")])?;

    let mut written: Vec<&str> = Vec::new();
    for format in media.entries().iter().map(|e| e.format) {
        if written.contains(&format.extension()) {
            continue;
        }
        written.push(format.extension());
        xml.empty(
            "Default",
            &[("Extension", format.extension()), ("ContentType", format.content_type())],
        )?;
    }

    for (part, content_type) in [
        (DOCUMENT_PART, CT_DOCUMENT),
        (STYLES_PART, CT_STYLES),
        (NUMBERING_PART, CT_NUMBERING),
        (CORE_PART, CT_CORE),
        (APP_PART, CT_APP),
    ] {
        let part_name = format!("/{}", part);
        xml.empty("Override", &[("PartName", part_name.as_str()), ("ContentType", content_type)])?;
    }
    xml.end("Types")?;
    Ok(xml.into_bytes())
}

pub fn package_relationships() -> Result<Vec<u8>> {
    let mut xml = XmlWriter::with_declaration()?;
    xml.start("Relationships", &[("xmlns", ns::RELATIONSHIPS)])?;
    xml.empty("Relationship", &[("Id", "rId1"), ("Type", REL_OFFICE_DOCUMENT), ("Target", DOCUMENT_PART)])?;
    xml.empty("Relationship", &[("Id", "rId2"), ("Type", REL_CORE), ("Target", CORE_PART)])?;
    xml.empty("Relationship", &[("Id", "rId3"), ("Type", REL_APP), ("Target", APP_PART)])?;
    xml.end("Relationships")?;
    Ok(xml.into_bytes())
}

pub fn document_relationships(media: &MediaTable) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::with_declaration()?;
    xml.start("Relationships", &[("xmlns", ns::RELATIONSHIPS)])?;
    xml.empty("Relationship", &[("Id", "rId1"), ("Type", REL_STYLES), ("Target", "styles.xml")])?;
    xml.empty("Relationship", &[("Id", "rId2"), ("Type", REL_NUMBERING), ("Target", "numbering.xml")])?;
    for entry in media.entries() {
        xml.empty(
            "Relationship",
            &[("Id", entry.rel_id.as_str()), ("Type", REL_IMAGE), ("Target", entry.target.as_str())],
        )?;
    }
    xml.end("Relationships")?;
    Ok(xml.into_bytes())
}

pub fn core_properties(core: &CoreProperties) -> Result<Vec<u8>> {
    let timestamp = core.created.format("%Y-%m-%dT%H:%M:%SZ").to_string();

    let mut xml = XmlWriter::with_declaration()?;
    xml.start(
        "cp:coreProperties",
        &[
            ("xmlns:cp", ns::CORE_PROPERTIES),
            ("xmlns:dc", ns::DC),
            ("xmlns:dcterms", ns::DCTERMS),
            ("xmlns:dcmitype", ns::DCMITYPE),
            ("xmlns:xsi", ns::XSI),
        ],
    )?;
    if let Some(title) = &core.title {
        xml.text_element("dc:title", &[], title)?;
    }
    xml.text_element("dc:creator", &[], &core.author)?;
    xml.text_element("cp:lastModifiedBy", &[], &core.author)?;
    xml.text_element("cp:revision", &[], "1")?;
    xml.text_element("dcterms:created", &[("xsi:type", "dcterms:W3CDTF")], &timestamp)?;
    xml.text_element("dcterms:modified", &[("xsi:type", "dcterms:W3CDTF")], &timestamp)?;
    xml.end("cp:coreProperties")?;
    Ok(xml.into_bytes())
}

pub fn app_properties() -> Result<Vec<u8>> {
    let mut xml = XmlWriter::with_declaration()?;
    xml.start("Properties", &[("xmlns", ns::EXTENDED_PROPERTIES)])?;
    xml.text_element("Application", &[], env!("CARGO_PKG_NAME"))?;
    xml.text_element("AppVersion", &[], env!("CARGO_PKG_VERSION"))?;
    xml.end("Properties")?;
    Ok(xml.into_bytes())
}

/// Run properties (size in half-points) for each built-in style
fn style_run_properties(style: ParagraphStyle) -> (bool, bool, Option<u32>, Option<&'static str>) {
    // (bold, italic, size, color)
    match style {
        ParagraphStyle::Normal | ParagraphStyle::ListBullet | ParagraphStyle::ListNumber => (false, false, None, None),
        ParagraphStyle::Title => (false, false, Some(56), Some("17365D")),
        ParagraphStyle::Subtitle => (false, true, Some(24), Some("4F81BD")),
        ParagraphStyle::Heading(1) => (true, false, Some(28), Some("365F91")),
        ParagraphStyle::Heading(2) => (true, false, Some(26), Some("4F81BD")),
        ParagraphStyle::Heading(_) => (true, false, None, Some("4F81BD")),
        ParagraphStyle::Quote => (false, true, None, Some("000000")),
    }
}

fn write_style(xml: &mut XmlWriter, style: ParagraphStyle) -> Result<()> {
    let id = style.style_id();
    let name = style.name();
    let mut attrs: Vec<(&str, &str)> = vec![("w:type", "paragraph")];
    if style.is_default() {
        attrs.push(("w:default", "1"));
    }
    attrs.push(("w:styleId", id.as_str()));

    xml.start("w:style", &attrs)?;
    xml.empty("w:name", &[("w:val", name.as_str())])?;
    if !style.is_default() {
        xml.empty("w:basedOn", &[("w:val", "Normal")])?;
        xml.empty("w:next", &[("w:val", "Normal")])?;
    }
    xml.empty("w:qFormat", &[])?;

    let list = style.list_kind();
    let outline = style.outline_level();
    if list.is_some() || outline.is_some() || style == ParagraphStyle::Title {
        xml.start("w:pPr", &[])?;
        if let Some(kind) = list {
            let num_id = kind.num_id().to_string();
            xml.start("w:numPr", &[])?;
            xml.empty("w:numId", &[("w:val", num_id.as_str())])?;
            xml.end("w:numPr")?;
            xml.empty("w:contextualSpacing", &[])?;
        }
        if let Some(level) = outline {
            let level = level.to_string();
            xml.empty("w:keepNext", &[])?;
            xml.empty("w:spacing", &[("w:before", "480"), ("w:after", "0")])?;
            xml.empty("w:outlineLvl", &[("w:val", level.as_str())])?;
        }
        if style == ParagraphStyle::Title {
            xml.empty("w:spacing", &[("w:after", "300")])?;
            xml.empty("w:contextualSpacing", &[])?;
        }
        xml.end("w:pPr")?;
    }

    let (bold, italic, size, color) = style_run_properties(style);
    if bold || italic || size.is_some() || color.is_some() {
        xml.start("w:rPr", &[])?;
        if bold {
            xml.empty("w:b", &[])?;
        }
        if italic {
            xml.empty("w:i", &[])?;
        }
        if let Some(color) = color {
            xml.empty("w:color", &[("w:val", color)])?;
        }
        if let Some(size) = size {
            let size = size.to_string();
            xml.empty("w:sz", &[("w:val", size.as_str())])?;
        }
        xml.end("w:rPr")?;
    }
    xml.end("w:style")
}

pub fn styles() -> Result<Vec<u8>> {
    let mut xml = XmlWriter::with_declaration()?;
    xml.start("w:styles", &[("xmlns:w", ns::W)])?;

    xml.start("w:docDefaults", &[])?;
    xml.start("w:rPrDefault", &[])?;
    xml.start("w:rPr", &[])?;
    xml.empty(
        "w:rFonts",
        &[("w:ascii", "Calibri"), ("w:hAnsi", "Calibri"), ("w:eastAsia", "SimSun"), ("w:cs", "Times New Roman")],
    )?;
    xml.empty("w:sz", &[("w:val", "22")])?;
    xml.empty("w:lang", &[("w:val", "en-US"), ("w:eastAsia", "zh-CN")])?;
    xml.end("w:rPr")?;
    xml.end("w:rPrDefault")?;
    xml.start("w:pPrDefault", &[])?;
    xml.start("w:pPr", &[])?;
    xml.empty("w:spacing", &[("w:after", "200"), ("w:line", "276"), ("w:lineRule", "auto")])?;
    xml.end("w:pPr")?;
    xml.end("w:pPrDefault")?;
    xml.end("w:docDefaults")?;

    for style in ParagraphStyle::catalogue() {
        write_style(&mut xml, style)?;
    }

    xml.end("w:styles")?;
    Ok(xml.into_bytes())
}

fn write_abstract_num(xml: &mut XmlWriter, kind: ListKind) -> Result<()> {
    let abstract_id = (kind.num_id() - 1).to_string();
    let (format, text) = match kind {
        ListKind::Bullet => ("bullet", "\u{2022}"),
        ListKind::Decimal => ("decimal", "%1."),
    };
    xml.start("w:abstractNum", &[("w:abstractNumId", abstract_id.as_str())])?;
    xml.empty("w:multiLevelType", &[("w:val", "singleLevel")])?;
    xml.start("w:lvl", &[("w:ilvl", "0")])?;
    xml.empty("w:start", &[("w:val", "1")])?;
    xml.empty("w:numFmt", &[("w:val", format)])?;
    xml.empty("w:lvlText", &[("w:val", text)])?;
    xml.empty("w:lvlJc", &[("w:val", "left")])?;
    xml.start("w:pPr", &[])?;
    xml.empty("w:ind", &[("w:left", "360"), ("w:hanging", "360")])?;
    xml.end("w:pPr")?;
    xml.end("w:lvl")?;
    xml.end("w:abstractNum")
}

pub fn numbering() -> Result<Vec<u8>> {
    let kinds = [ListKind::Bullet, ListKind::Decimal];

    let mut xml = XmlWriter::with_declaration()?;
    xml.start("w:numbering", &[("xmlns:w", ns::W)])?;
    for kind in kinds {
        write_abstract_num(&mut xml, kind)?;
    }
    for kind in kinds {
        let num_id = kind.num_id().to_string();
        let abstract_id = (kind.num_id() - 1).to_string();
        xml.start("w:num", &[("w:numId", num_id.as_str())])?;
        xml.empty("w:abstractNumId", &[("w:val", abstract_id.as_str())])?;
        xml.end("w:num")?;
    }
    xml.end("w:numbering")?;
    Ok(xml.into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn as_string(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_content_types_without_media() {
        let xml = as_string(content_types(&MediaTable::default()).unwrap());
        assert!(xml.contains(r#"<Override PartName="/word/document.xml""#));
        assert!(xml.contains(r#"<Override PartName="/word/numbering.xml""#));
        assert!(!xml.contains("image/png"));
    }

    #[test]
    fn test_core_properties_timestamp_and_title() {
        let core = CoreProperties {
            title: Some("Report & Notes".to_string()),
            author: "tester".to_string(),
            created: chrono::Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
        };
        let xml = as_string(core_properties(&core).unwrap());
        assert!(xml.contains("<dc:title>Report &amp; Notes</dc:title>"));
        assert!(xml.contains("<dc:creator>tester</dc:creator>"));
        assert!(xml.contains(r#"<dcterms:created xsi:type="dcterms:W3CDTF">2024-05-01T12:30:00Z</dcterms:created>"#));
    }

    #[test]
    fn test_styles_define_every_catalogue_entry() {
        let xml = as_string(styles().unwrap());
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let ids: Vec<&str> = doc
            .descendants()
            .filter(|n| n.has_tag_name((ns::W, "style")))
            .filter_map(|n| n.attribute((ns::W, "styleId")))
            .collect();
        for style in ParagraphStyle::catalogue() {
            assert!(ids.contains(&style.style_id().as_str()), "missing {}", style.style_id());
        }
        assert!(xml.contains(r#"w:default="1" w:styleId="Normal""#));
    }

    #[test]
    fn test_list_bullet_style_uses_bullet_numbering() {
        let xml = as_string(styles().unwrap());
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let list_bullet = doc
            .descendants()
            .find(|n| n.attribute((ns::W, "styleId")) == Some("ListBullet"))
            .unwrap();
        let num_id = list_bullet
            .descendants()
            .find(|n| n.has_tag_name((ns::W, "numId")))
            .and_then(|n| n.attribute((ns::W, "val")));
        assert_eq!(num_id, Some("1"));

        let numbering = as_string(numbering().unwrap());
        assert!(numbering.contains(r#"<w:numFmt w:val="bullet"/>"#));
        assert!(numbering.contains(r#"<w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>"#));
    }

    #[test]
    fn test_heading_styles_carry_outline_level() {
        let xml = as_string(styles().unwrap());
        let doc = roxmltree::Document::parse(&xml).unwrap();
        let heading2 = doc
            .descendants()
            .find(|n| n.attribute((ns::W, "styleId")) == Some("Heading2"))
            .unwrap();
        let level = heading2
            .descendants()
            .find(|n| n.has_tag_name((ns::W, "outlineLvl")))
            .and_then(|n| n.attribute((ns::W, "val")));
        assert_eq!(level, Some("1"));
    }
}
