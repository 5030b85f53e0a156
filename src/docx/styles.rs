//! DOCX styles parsing.

use crate::error::{Error, Result};
use quick_xml::events::Event;
use std::collections::HashMap;

/// Paragraph style names keyed by style ID, read from `word/styles.xml`.
///
/// Only the ID/name pair matters here: a document may reference a heading
/// through a localized or generated ID (`"1"`, `"berschrift1"`) whose
/// display name is still `heading 1`.
#[derive(Debug, Clone, Default)]
pub struct StyleMap {
    names: HashMap<String, String>,
}

impl StyleMap {
    /// Parse style definitions from XML content.
    pub fn parse(xml: &str) -> Result<Self> {
        if xml.trim().is_empty() {
            return Ok(Self::default());
        }

        let mut map = StyleMap::default();
        let mut reader = quick_xml::Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut buf = Vec::new();
        let mut current_id: Option<String> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) if e.name().as_ref() == b"w:style" => {
                    current_id = e
                        .attributes()
                        .flatten()
                        .find(|attr| attr.key.as_ref() == b"w:styleId")
                        .map(|attr| String::from_utf8_lossy(&attr.value).to_string());
                }
                Ok(Event::Empty(ref e)) if e.name().as_ref() == b"w:name" => {
                    if let Some(ref id) = current_id {
                        for attr in e.attributes().flatten() {
                            if attr.key.as_ref() == b"w:val" {
                                map.names
                                    .insert(id.clone(), String::from_utf8_lossy(&attr.value).to_string());
                            }
                        }
                    }
                }
                Ok(Event::End(ref e)) if e.name().as_ref() == b"w:style" => {
                    current_id = None;
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::XmlParse(format!(
                        "styles.xml at position {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
                _ => {}
            }
            buf.clear();
        }

        log::debug!("parsed {} style names", map.names.len());
        Ok(map)
    }

    /// Display name of a style ID.
    pub fn name_of(&self, style_id: &str) -> Option<&str> {
        self.names.get(style_id).map(String::as_str)
    }

    /// Number of named styles.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no style names were found.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
  </w:style>
  <w:style w:type="paragraph" w:styleId="berschrift1">
    <w:name w:val="heading 1"/>
    <w:basedOn w:val="Normal"/>
    <w:pPr><w:outlineLvl w:val="0"/></w:pPr>
  </w:style>
</w:styles>"#;

    #[test]
    fn test_parse_names() {
        let map = StyleMap::parse(STYLES_XML).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.name_of("berschrift1"), Some("heading 1"));
        assert_eq!(map.name_of("Normal"), Some("Normal"));
        assert_eq!(map.name_of("Missing"), None);
    }

    #[test]
    fn test_parse_empty() {
        let map = StyleMap::parse("   ").unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn test_parse_malformed() {
        let result = StyleMap::parse("<w:styles><w:style w:styleId=\"a\"></w:styles>");
        assert!(matches!(result, Err(Error::XmlParse(_))));
    }
}
