//! # briefdoc
//!
//! Heading outline extraction and cover-page generation for Word briefs.
//!
//! The outline extractor reads the paragraphs of a `.docx`, assigns body
//! text to the nearest enclosing heading (H1 through H4a), drops page
//! furniture such as case-number banners and page numbers, and renders the
//! result as nested Akoma Ntoso sections. The cover generator swaps fixed
//! placeholder strings in a cover template.
//!
//! ## Quick Start
//!
//! ```no_run
//! use briefdoc::{extract_outline, to_akoma_ntoso};
//!
//! // Heading tree
//! let outline = extract_outline("brief.docx")?;
//! for (depth, section) in outline.iter() {
//!     println!("{}{}: {}", "  ".repeat(depth), section.level, section.heading);
//! }
//!
//! // Akoma Ntoso XML
//! let xml = to_akoma_ntoso("brief.docx")?;
//! std::fs::write("brief.xml", xml)?;
//! # Ok::<(), briefdoc::Error>(())
//! ```
//!
//! ## Cover Pages
//!
//! ```no_run
//! use briefdoc::cover::{CoverGenerator, CoverValues};
//!
//! let values = CoverValues::new()
//!     .with_case_number("No. 1234")
//!     .with_filing_name("REPLY BRIEF")
//!     .with_judge("Hon. Jane Doe");
//! CoverGenerator::open("template.docx")?.write(&values, "cover.docx")?;
//! # Ok::<(), briefdoc::Error>(())
//! ```

pub mod container;
pub mod cover;
pub mod docx;
pub mod error;
pub mod model;
pub mod outline;
pub mod render;

// Re-exports
pub use container::OoxmlContainer;
pub use error::{Error, Result};
pub use model::{HeadingRank, Outline, Paragraph, Section};
pub use outline::{build_outline, OutlineBuilder};

use std::path::Path;

/// Extract the heading outline of a DOCX file.
///
/// # Example
///
/// ```no_run
/// use briefdoc::extract_outline;
///
/// let outline = extract_outline("brief.docx")?;
/// println!("Sections: {}", outline.section_count());
/// # Ok::<(), briefdoc::Error>(())
/// ```
pub fn extract_outline(path: impl AsRef<Path>) -> Result<Outline> {
    docx::DocxParser::open(path)?.parse()
}

/// Extract the heading outline from DOCX bytes.
pub fn extract_outline_from_bytes(data: &[u8]) -> Result<Outline> {
    docx::DocxParser::from_bytes(data.to_vec())?.parse()
}

/// Convert a DOCX file to an Akoma Ntoso XML string.
pub fn to_akoma_ntoso(path: impl AsRef<Path>) -> Result<String> {
    let outline = extract_outline(path)?;
    render::to_akoma_ntoso(&outline, &render::AkomaOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file() {
        let result = extract_outline("does/not/exist.docx");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_not_an_archive() {
        let result = extract_outline_from_bytes(b"<w:document/>");
        assert!(matches!(result, Err(Error::ZipArchive(_))));
    }
}
