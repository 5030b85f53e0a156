//! Output rendering for outlines.
//!
//! This module provides renderers for converting an [`Outline`](crate::Outline)
//! to Akoma Ntoso XML, a heading preview, or JSON.
//!
//! # Example
//!
//! ```no_run
//! use briefdoc::{extract_outline, render::*};
//!
//! let outline = extract_outline("brief.docx")?;
//!
//! // Akoma Ntoso judgment document
//! let xml = to_akoma_ntoso(&outline, &AkomaOptions::default())?;
//!
//! // Heading preview
//! print!("{}", to_toc(&outline));
//!
//! // Structured JSON
//! let json = to_json(&outline, JsonFormat::Pretty)?;
//! # Ok::<(), briefdoc::Error>(())
//! ```

mod akoma;
mod json;
mod options;
mod toc;

pub use akoma::{to_akoma_ntoso, to_akoma_ntoso_default};
pub use json::{to_json, JsonFormat};
pub use options::AkomaOptions;
pub use toc::to_toc;
