//! Heading-scoped outline extraction.
//!
//! Each paragraph is owned by the nearest preceding heading whose rank is
//! not deeper than any heading in between. A heading of rank R closes every
//! open section of rank R or deeper before opening its own.
//!
//! # Example
//!
//! ```
//! use briefdoc::model::Paragraph;
//! use briefdoc::outline::OutlineBuilder;
//!
//! let paragraphs = vec![
//!     Paragraph::styled("H1", "A"),
//!     Paragraph::with_text("x"),
//!     Paragraph::styled("H2", "B"),
//!     Paragraph::with_text("y"),
//!     Paragraph::styled("H1", "C"),
//! ];
//! let outline = OutlineBuilder::new().build(&paragraphs);
//!
//! assert_eq!(outline.len(), 2);
//! assert_eq!(outline.sections[0].children[0].paragraphs, vec!["y"]);
//! ```

mod boilerplate;
mod builder;
mod classifier;

pub use boilerplate::BoilerplateFilter;
pub use builder::{build_outline, OutlineBuilder};
pub use classifier::heading_rank;
