//! DOCX (Word) document reader.
//!
//! Reads the paragraphs of `word/document.xml`, resolving heading styles
//! through `word/styles.xml` when the style ID alone is not recognized.

mod parser;
mod styles;

pub use parser::DocxParser;
pub use styles::StyleMap;
