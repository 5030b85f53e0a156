//! DOCX parser implementation.

use crate::container::{OoxmlContainer, DOCUMENT_PART, STYLES_PART};
use crate::error::{Error, Result};
use crate::model::{HeadingRank, Outline, Paragraph};
use crate::outline::{heading_rank, OutlineBuilder};
use quick_xml::events::{BytesStart, Event};
use unicode_normalization::UnicodeNormalization;

use super::styles::StyleMap;

/// Parser for DOCX (Word) documents.
pub struct DocxParser {
    container: OoxmlContainer,
    styles: StyleMap,
}

impl DocxParser {
    /// Open a DOCX file for parsing.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let container = OoxmlContainer::open(path)?;
        Self::from_container(container)
    }

    /// Create a parser from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = OoxmlContainer::from_bytes(data)?;
        Self::from_container(container)
    }

    /// Create a parser from a container.
    pub fn from_container(container: OoxmlContainer) -> Result<Self> {
        if !container.exists(DOCUMENT_PART) {
            return Err(Error::MissingComponent(DOCUMENT_PART.to_string()));
        }

        // A broken or absent styles part only disables name-based lookup
        let styles = match container.read_xml(STYLES_PART) {
            Ok(xml) => StyleMap::parse(&xml).unwrap_or_else(|e| {
                log::warn!("ignoring unreadable {}: {}", STYLES_PART, e);
                StyleMap::default()
            }),
            Err(_) => StyleMap::default(),
        };

        Ok(Self { container, styles })
    }

    /// Read every paragraph of the main document in document order.
    pub fn paragraphs(&self) -> Result<Vec<Paragraph>> {
        let xml = self.container.read_xml(DOCUMENT_PART)?;
        let mut paragraphs = parse_paragraphs(&xml)?;
        for para in &mut paragraphs {
            para.heading = para
                .style
                .as_deref()
                .and_then(|style| self.resolve_heading(style));
        }
        log::debug!("read {} paragraphs from {}", paragraphs.len(), DOCUMENT_PART);
        Ok(paragraphs)
    }

    /// Parse the document into a heading outline.
    pub fn parse(&self) -> Result<Outline> {
        self.parse_with(&OutlineBuilder::new())
    }

    /// Parse the document with a configured builder.
    pub fn parse_with(&self, builder: &OutlineBuilder) -> Result<Outline> {
        let paragraphs = self.paragraphs()?;
        Ok(builder.build(&paragraphs))
    }

    /// Classify a style ID, falling back to its display name.
    fn resolve_heading(&self, style_id: &str) -> Option<HeadingRank> {
        heading_rank(Some(style_id)).or_else(|| heading_rank(self.styles.name_of(style_id)))
    }
}

/// Flatten `w:p` elements into paragraph records.
///
/// Paragraphs come out in the order their start tags appear. A paragraph
/// nested inside another (text boxes) is reported separately, and its text
/// also counts toward the enclosing paragraph.
pub(crate) fn parse_paragraphs(xml: &str) -> Result<Vec<Paragraph>> {
    let mut reader = quick_xml::Reader::from_str(xml);
    // Keep xml:space="preserve" runs intact
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut paragraphs: Vec<Paragraph> = Vec::new();
    let mut open: Vec<usize> = Vec::new();
    // Nesting of w:pPr; the old properties of a tracked change sit one level deeper
    let mut ppr_depth = 0usize;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"w:p" => {
                    open.push(paragraphs.len());
                    paragraphs.push(Paragraph::default());
                }
                b"w:pPr" if !open.is_empty() => ppr_depth += 1,
                b"w:pStyle" if ppr_depth == 1 => set_style(&mut paragraphs, &open, e),
                b"w:t" if !open.is_empty() => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"w:p" => paragraphs.push(Paragraph::default()),
                b"w:pStyle" if ppr_depth == 1 => set_style(&mut paragraphs, &open, e),
                _ => {}
            },
            Ok(Event::Text(ref e)) if in_text => {
                let text = e
                    .unescape()
                    .map_err(|err| Error::XmlParse(err.to_string()))?;
                for &index in &open {
                    paragraphs[index].text.push_str(&text);
                }
            }
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"w:p" => {
                    open.pop();
                    ppr_depth = 0;
                    in_text = false;
                }
                b"w:pPr" => ppr_depth = ppr_depth.saturating_sub(1),
                b"w:t" => in_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::XmlParse(format!(
                    "{} at position {}: {}",
                    DOCUMENT_PART,
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    for para in &mut paragraphs {
        para.text = para.text.trim().nfc().collect();
    }

    Ok(paragraphs)
}

/// Record `w:pStyle/@w:val` on the innermost open paragraph.
fn set_style(paragraphs: &mut [Paragraph], open: &[usize], e: &BytesStart<'_>) {
    let Some(&index) = open.last() else {
        return;
    };
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"w:val" {
            paragraphs[index].style = Some(String::from_utf8_lossy(&attr.value).to_string());
        }
    }
}
