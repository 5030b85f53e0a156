//! Heading outline preview.

use crate::model::Outline;

/// Render the heading outline as indented `rank: text` lines.
///
/// Paragraph text is omitted; each nesting level adds two spaces.
///
/// ```
/// use briefdoc::model::{HeadingRank, Outline, Section};
/// use briefdoc::render::to_toc;
///
/// let mut top = Section::new(HeadingRank::H1, "Argument");
/// top.add_child(Section::new(HeadingRank::H2, "Standard of Review"));
/// let outline = Outline { sections: vec![top] };
///
/// assert_eq!(to_toc(&outline), "H1: Argument\n  H2: Standard of Review\n");
/// ```
pub fn to_toc(outline: &Outline) -> String {
    let mut output = String::new();
    for (depth, section) in outline.iter() {
        output.push_str(&"  ".repeat(depth));
        output.push_str(section.level.label());
        output.push_str(": ");
        output.push_str(&section.heading);
        output.push('\n');
    }
    output
}
