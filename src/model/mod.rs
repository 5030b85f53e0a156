//! Document model for heading outlines.
//!
//! The DOCX parser flattens `word/document.xml` into [`Paragraph`] records;
//! the outline builder folds those into an [`Outline`] of nested
//! [`Section`]s, which the renderers serialize.

mod outline;
mod paragraph;

pub use outline::*;
pub use paragraph::*;
