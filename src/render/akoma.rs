//! Akoma Ntoso renderer implementation.

use crate::error::{Error, Result};
use crate::model::{Outline, Section};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;

use super::options::AkomaOptions;

type XmlWriter = Writer<Cursor<Vec<u8>>>;

/// Convert an outline to an Akoma Ntoso judgment document.
///
/// The envelope is `akomaNtoso > judgment > body`; each section becomes a
/// `<section>` with its `<heading>`, then one `<p>` per paragraph, then its
/// child sections.
pub fn to_akoma_ntoso(outline: &Outline, options: &AkomaOptions) -> Result<String> {
    let mut writer = match options.indent {
        Some(width) => Writer::new_with_indent(Cursor::new(Vec::new()), b' ', width),
        None => Writer::new(Cursor::new(Vec::new())),
    };

    if options.include_declaration {
        emit(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
        )?;
    }

    for name in ["akomaNtoso", "judgment", "body"] {
        emit(&mut writer, Event::Start(BytesStart::new(name)))?;
    }
    for section in &outline.sections {
        write_section(&mut writer, section, options)?;
    }
    for name in ["body", "judgment", "akomaNtoso"] {
        emit(&mut writer, Event::End(BytesEnd::new(name)))?;
    }

    let bytes = writer.into_inner().into_inner();
    String::from_utf8(bytes).map_err(|e| Error::Render(format!("invalid UTF-8 in output: {}", e)))
}

/// Convert an outline with default options.
pub fn to_akoma_ntoso_default(outline: &Outline) -> Result<String> {
    to_akoma_ntoso(outline, &AkomaOptions::default())
}

fn write_section(writer: &mut XmlWriter, section: &Section, options: &AkomaOptions) -> Result<()> {
    let mut start = BytesStart::new("section");
    start.push_attribute(("id", section.id.as_str()));
    if options.include_level {
        start.push_attribute(("level", section.level.attr_value()));
    }
    emit(writer, Event::Start(start))?;

    write_text_element(writer, "heading", &section.heading)?;
    for para in &section.paragraphs {
        write_text_element(writer, "p", para)?;
    }
    for child in &section.children {
        write_section(writer, child, options)?;
    }

    emit(writer, Event::End(BytesEnd::new("section")))
}

fn write_text_element(writer: &mut XmlWriter, name: &str, text: &str) -> Result<()> {
    if text.is_empty() {
        return emit(writer, Event::Empty(BytesStart::new(name)));
    }
    emit(writer, Event::Start(BytesStart::new(name)))?;
    emit(writer, Event::Text(BytesText::new(text)))?;
    emit(writer, Event::End(BytesEnd::new(name)))
}

fn emit(writer: &mut XmlWriter, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::Render(format!("failed to write XML: {}", e)))
}
