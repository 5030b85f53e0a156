//! Section tree produced by the outline builder.

use super::HeadingRank;
use serde::{Deserialize, Serialize};

/// Identifier used when a heading yields no usable slug.
pub const FALLBACK_ID: &str = "section";

/// Derive a section identifier from heading text.
///
/// Lower-cases the text, collapses every run of non-alphanumeric characters
/// to a single dash and trims dashes from both ends.
///
/// ```
/// use briefdoc::model::slugify;
///
/// assert_eq!(slugify("Background & Facts"), "background-facts");
/// assert_eq!(slugify("  "), "section");
/// ```
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for c in text.trim().chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c);
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_ID.to_string()
    } else {
        slug
    }
}

/// One heading and everything it owns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Rank of the heading that opened this section
    pub level: HeadingRank,

    /// Heading text (may be empty)
    pub heading: String,

    /// Slug derived from the heading text
    pub id: String,

    /// Body text appearing before the first child heading
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paragraphs: Vec<String>,

    /// Nested sections of deeper rank
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Section>,
}

impl Section {
    /// Open a section for a heading.
    pub fn new(level: HeadingRank, heading: impl Into<String>) -> Self {
        let heading = heading.into();
        let id = slugify(&heading);
        Self {
            level,
            heading,
            id,
            paragraphs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Append a paragraph of body text.
    pub fn add_paragraph(&mut self, text: impl Into<String>) {
        self.paragraphs.push(text.into());
    }

    /// Append a nested section.
    pub fn add_child(&mut self, child: Section) {
        self.children.push(child);
    }

    /// Number of sections in this subtree, including this one.
    pub fn section_count(&self) -> usize {
        1 + self.children.iter().map(Section::section_count).sum::<usize>()
    }

    /// Number of body paragraphs in this subtree.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
            + self
                .children
                .iter()
                .map(Section::paragraph_count)
                .sum::<usize>()
    }
}

/// Top-level ordered list of sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outline {
    pub sections: Vec<Section>,
}

impl Outline {
    /// Create an empty outline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no heading was found.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Number of top-level sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Total number of sections at every depth.
    pub fn section_count(&self) -> usize {
        self.sections.iter().map(Section::section_count).sum()
    }

    /// Total number of body paragraphs at every depth.
    pub fn paragraph_count(&self) -> usize {
        self.sections.iter().map(Section::paragraph_count).sum()
    }

    /// Walk all sections depth-first in document order.
    ///
    /// Yields `(depth, section)` with depth 0 for top-level sections.
    pub fn iter(&self) -> SectionIter<'_> {
        SectionIter {
            stack: self.sections.iter().rev().map(|s| (0, s)).collect(),
        }
    }
}

/// Depth-first iterator over an [`Outline`].
pub struct SectionIter<'a> {
    stack: Vec<(usize, &'a Section)>,
}

impl<'a> Iterator for SectionIter<'a> {
    type Item = (usize, &'a Section);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, section) = self.stack.pop()?;
        self.stack
            .extend(section.children.iter().rev().map(|c| (depth + 1, c)));
        Some((depth, section))
    }
}
