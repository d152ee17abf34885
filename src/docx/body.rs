//! `word/document.xml` rendering
//!
//! Paragraphs are written in document order. Pictures become inline
//! DrawingML objects that reference their media part by relationship id.

use crate::document::{Document, InlinePicture, Paragraph, Run, RunContent};

use super::media::MediaTable;
use super::ns;
use super::xml::XmlWriter;
use super::{DocxError, Result};

// US Letter, in twentieths of a point
const PAGE_WIDTH: &str = "12240";
const PAGE_HEIGHT: &str = "15840";

/// Render the main document part
pub fn render_document_xml(doc: &Document, media: &MediaTable) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::with_declaration()?;
    xml.start(
        "w:document",
        &[
            ("xmlns:w", ns::W),
            ("xmlns:r", ns::R),
            ("xmlns:wp", ns::WP),
            ("xmlns:a", ns::A),
            ("xmlns:pic", ns::PIC),
        ],
    )?;
    xml.start("w:body", &[])?;

    // docPr ids must be unique per document
    let mut drawing_id = 0u32;
    for paragraph in doc.paragraphs() {
        write_paragraph(&mut xml, paragraph, media, &mut drawing_id)?;
    }

    xml.start("w:sectPr", &[])?;
    xml.empty("w:pgSz", &[("w:w", PAGE_WIDTH), ("w:h", PAGE_HEIGHT)])?;
    xml.empty(
        "w:pgMar",
        &[
            ("w:top", "1440"),
            ("w:right", "1800"),
            ("w:bottom", "1440"),
            ("w:left", "1800"),
            ("w:header", "720"),
            ("w:footer", "720"),
            ("w:gutter", "0"),
        ],
    )?;
    xml.end("w:sectPr")?;

    xml.end("w:body")?;
    xml.end("w:document")?;
    Ok(xml.into_bytes())
}

fn write_paragraph(xml: &mut XmlWriter, paragraph: &Paragraph, media: &MediaTable, drawing_id: &mut u32) -> Result<()> {
    xml.start("w:p", &[])?;

    // The default style is implied by omitting pStyle
    if !paragraph.style.is_default() {
        let style_id = paragraph.style.style_id();
        xml.start("w:pPr", &[])?;
        xml.empty("w:pStyle", &[("w:val", style_id.as_str())])?;
        xml.end("w:pPr")?;
    }

    for run in &paragraph.runs {
        write_run(xml, run, media, drawing_id)?;
    }

    xml.end("w:p")
}

fn write_run(xml: &mut XmlWriter, run: &Run, media: &MediaTable, drawing_id: &mut u32) -> Result<()> {
    xml.start("w:r", &[])?;

    if run.bold.is_some() || run.italic.is_some() {
        xml.start("w:rPr", &[])?;
        write_toggle(xml, "w:b", run.bold)?;
        write_toggle(xml, "w:i", run.italic)?;
        xml.end("w:rPr")?;
    }

    match &run.content {
        RunContent::Text(text) => write_text(xml, text)?,
        RunContent::Picture(picture) => {
            *drawing_id += 1;
            write_drawing(xml, picture, media, *drawing_id)?;
        }
    }

    xml.end("w:r")
}

fn write_toggle(xml: &mut XmlWriter, name: &str, value: Option<bool>) -> Result<()> {
    match value {
        Some(true) => xml.empty(name, &[]),
        Some(false) => xml.empty(name, &[("w:val", "0")]),
        None => Ok(()),
    }
}

/// `w:t`, with tabs and line breaks mapped to their run-content elements
fn write_text(xml: &mut XmlWriter, text: &str) -> Result<()> {
    let mut first_line = true;
    for line in text.split('\n') {
        if !first_line {
            xml.empty("w:br", &[])?;
        }
        first_line = false;

        let mut first_cell = true;
        for segment in line.split('\t') {
            if !first_cell {
                xml.empty("w:tab", &[])?;
            }
            first_cell = false;
            if segment.is_empty() {
                continue;
            }
            if needs_space_preserve(segment) {
                xml.text_element("w:t", &[("xml:space", "preserve")], segment)?;
            } else {
                xml.text_element("w:t", &[], segment)?;
            }
        }
    }
    Ok(())
}

fn needs_space_preserve(text: &str) -> bool {
    text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace)
}

fn write_drawing(xml: &mut XmlWriter, picture: &InlinePicture, media: &MediaTable, id: u32) -> Result<()> {
    let rel_id = media
        .rel_id_for(picture)
        .ok_or_else(|| DocxError::MissingMedia(picture.source.clone()))?;
    let cx = picture.extent.0.as_emu().to_string();
    let cy = picture.extent.1.as_emu().to_string();
    let doc_pr_id = id.to_string();
    let doc_pr_name = format!("Picture {}", id);
    let file_name = picture.file_name();

    xml.start("w:drawing", &[])?;
    xml.start("wp:inline", &[("distT", "0"), ("distB", "0"), ("distL", "0"), ("distR", "0")])?;
    xml.empty("wp:extent", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    xml.empty(
        "wp:docPr",
        &[("id", doc_pr_id.as_str()), ("name", doc_pr_name.as_str()), ("descr", file_name.as_str())],
    )?;
    xml.start("wp:cNvGraphicFramePr", &[])?;
    xml.empty("a:graphicFrameLocks", &[("noChangeAspect", "1")])?;
    xml.end("wp:cNvGraphicFramePr")?;

    xml.start("a:graphic", &[])?;
    xml.start("a:graphicData", &[("uri", ns::PIC)])?;
    xml.start("pic:pic", &[])?;

    xml.start("pic:nvPicPr", &[])?;
    xml.empty("pic:cNvPr", &[("id", "0"), ("name", file_name.as_str())])?;
    xml.empty("pic:cNvPicPr", &[])?;
    xml.end("pic:nvPicPr")?;

    xml.start("pic:blipFill", &[])?;
    xml.empty("a:blip", &[("r:embed", rel_id)])?;
    xml.start("a:stretch", &[])?;
    xml.empty("a:fillRect", &[])?;
    xml.end("a:stretch")?;
    xml.end("pic:blipFill")?;

    xml.start("pic:spPr", &[])?;
    xml.start("a:xfrm", &[])?;
    xml.empty("a:off", &[("x", "0"), ("y", "0")])?;
    xml.empty("a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    xml.end("a:xfrm")?;
    xml.start("a:prstGeom", &[("prst", "rect")])?;
    xml.empty("a:avLst", &[])?;
    xml.end("a:prstGeom")?;
    xml.end("pic:spPr")?;

    xml.end("pic:pic")?;
    xml.end("a:graphicData")?;
    xml.end("a:graphic")?;
    xml.end("wp:inline")?;
    xml.end("w:drawing")
}
