// Thin wrapper over quick_xml::Writer for part generation

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::Result;

/// Streaming XML builder for a single package part
pub struct XmlWriter {
    writer: Writer<Vec<u8>>,
}

impl XmlWriter {
    /// Create a writer with the standalone UTF-8 declaration already emitted
    pub fn with_declaration() -> Result<Self> {
        let mut writer = Writer::new(Vec::new());
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(XmlWriter { writer })
    }

    pub fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let element = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.writer.write_event(Event::Start(element))?;
        Ok(())
    }

    pub fn end(&mut self, name: &str) -> Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    pub fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> Result<()> {
        let element = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.writer.write_event(Event::Empty(element))?;
        Ok(())
    }

    /// Escaped character data
    pub fn text(&mut self, text: &str) -> Result<()> {
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    /// `<name attrs>text</name>`
    pub fn text_element(&mut self, name: &str, attrs: &[(&str, &str)], text: &str) -> Result<()> {
        self.start(name, attrs)?;
        self.text(text)?;
        self.end(name)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.writer.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_and_nesting() {
        let mut xml = XmlWriter::with_declaration().unwrap();
        xml.start("root", &[("a", "1")]).unwrap();
        xml.empty("leaf", &[]).unwrap();
        xml.end("root").unwrap();

        let out = String::from_utf8(xml.into_bytes()).unwrap();
        assert_eq!(
            out,
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><root a="1"><leaf/></root>"#
        );
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let mut xml = XmlWriter::with_declaration().unwrap();
        xml.text_element("t", &[("v", "a\"b")], "Song & Dance <Test>").unwrap();

        let out = String::from_utf8(xml.into_bytes()).unwrap();
        assert!(out.contains("Song &amp; Dance &lt;Test&gt;"));
        assert!(out.contains("v=\"a&quot;b\""));
    }
}
