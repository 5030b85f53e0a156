//! Heading-scoped outline construction.

use super::boilerplate::BoilerplateFilter;
use super::classifier::heading_rank;
use crate::model::{HeadingRank, Outline, Paragraph, Section};

/// Folds a flat paragraph sequence into an [`Outline`].
///
/// Open sections always lie on the rightmost spine of the tree, so the
/// builder only tracks their ranks: the section at stack depth `d` is the
/// last child `d` levels down from the top-level list.
#[derive(Debug, Clone)]
pub struct OutlineBuilder {
    filter_boilerplate: bool,
}

impl OutlineBuilder {
    /// Create a builder with boilerplate filtering enabled.
    pub fn new() -> Self {
        Self {
            filter_boilerplate: true,
        }
    }

    /// Enable or disable dropping of case banners and page numbers.
    pub fn with_boilerplate_filter(mut self, enabled: bool) -> Self {
        self.filter_boilerplate = enabled;
        self
    }

    /// Build the outline in a single forward pass.
    ///
    /// Never fails: unknown styles are body text, and text that appears
    /// before the first heading has no section to belong to and is dropped.
    pub fn build<'a, I>(&self, paragraphs: I) -> Outline
    where
        I: IntoIterator<Item = &'a Paragraph>,
    {
        let filter = BoilerplateFilter::shared();
        let mut sections: Vec<Section> = Vec::new();
        let mut open: Vec<HeadingRank> = Vec::new();

        for para in paragraphs {
            let text = para.text.trim();
            if self.filter_boilerplate && filter.is_boilerplate(text) {
                log::trace!("skipping boilerplate: {:?}", text);
                continue;
            }

            let rank = para.heading.or_else(|| heading_rank(para.style.as_deref()));
            match rank {
                Some(rank) => {
                    while open.last().is_some_and(|top| *top >= rank) {
                        open.pop();
                    }

                    let section = Section::new(rank, text);
                    log::trace!(
                        "opening {} section {:?} at depth {}",
                        rank,
                        section.id,
                        open.len()
                    );
                    match spine_mut(&mut sections, open.len()) {
                        Some(parent) => parent.add_child(section),
                        None => sections.push(section),
                    }
                    open.push(rank);
                }
                None if text.is_empty() => {}
                None => match spine_mut(&mut sections, open.len()) {
                    Some(owner) => owner.add_paragraph(text),
                    None => log::debug!("dropping text before first heading: {:?}", text),
                },
            }
        }

        log::debug!(
            "built outline: {} top-level sections, {} total",
            sections.len(),
            sections.iter().map(Section::section_count).sum::<usize>()
        );
        Outline { sections }
    }
}

impl Default for OutlineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Open section at `depth` on the rightmost spine; `None` at depth 0.
fn spine_mut(sections: &mut [Section], depth: usize) -> Option<&mut Section> {
    let mut node = sections.last_mut()?;
    for _ in 1..depth {
        node = node.children.last_mut()?;
    }
    (depth > 0).then_some(node)
}

/// Build an outline with default settings.
///
/// ```
/// use briefdoc::model::Paragraph;
/// use briefdoc::outline::build_outline;
///
/// let outline = build_outline(&[
///     Paragraph::styled("Heading1", "Argument"),
///     Paragraph::with_text("The court erred."),
/// ]);
/// assert_eq!(outline.sections[0].paragraphs, vec!["The court erred."]);
/// ```
pub fn build_outline(paragraphs: &[Paragraph]) -> Outline {
    OutlineBuilder::new().build(paragraphs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(style: &str, text: &str) -> Paragraph {
        Paragraph::styled(style, text)
    }

    fn p(text: &str) -> Paragraph {
        Paragraph::with_text(text)
    }

    #[test]
    fn test_no_headings_yields_empty_outline() {
        let outline = build_outline(&[p("alpha"), p("beta"), h("Normal", "gamma")]);
        assert!(outline.is_empty());
    }

    #[test]
    fn test_nested_and_sibling_sections() {
        let outline = build_outline(&[
            h("H1", "A"),
            p("x"),
            h("H2", "B"),
            p("y"),
            h("H1", "C"),
            p("z"),
        ]);

        assert_eq!(outline.len(), 2);
        let a = &outline.sections[0];
        assert_eq!(a.heading, "A");
        assert_eq!(a.paragraphs, vec!["x"]);
        assert_eq!(a.children.len(), 1);
        assert_eq!(a.children[0].heading, "B");
        assert_eq!(a.children[0].paragraphs, vec!["y"]);

        let c = &outline.sections[1];
        assert_eq!(c.heading, "C");
        assert_eq!(c.paragraphs, vec!["z"]);
        assert!(c.children.is_empty());
    }

    #[test]
    fn test_heading_without_text_between() {
        let outline = build_outline(&[h("Heading1", "Top"), h("Heading2", "Sub"), p("body")]);
        let top = &outline.sections[0];
        assert!(top.paragraphs.is_empty());
        assert_eq!(top.children[0].paragraphs, vec!["body"]);
    }

    #[test]
    fn test_rank_jump_closes_by_rank() {
        let outline = build_outline(&[
            h("H1", "One"),
            h("H4", "Deep"),
            p("deep text"),
            h("H2", "Two"),
            p("two text"),
        ]);

        let one = &outline.sections[0];
        assert_eq!(one.children.len(), 2);
        assert_eq!(one.children[0].level, HeadingRank::H4);
        assert_eq!(one.children[0].paragraphs, vec!["deep text"]);
        assert_eq!(one.children[1].level, HeadingRank::H2);
        assert_eq!(one.children[1].paragraphs, vec!["two text"]);
    }

    #[test]
    fn test_h4a_nests_under_h4() {
        let outline = build_outline(&[
            h("H4", "Four"),
            h("H4a", "Four A"),
            p("a"),
            h("H4a", "Four B"),
            p("b"),
            h("H4", "Five"),
        ]);

        assert_eq!(outline.len(), 2);
        let four = &outline.sections[0];
        assert_eq!(four.children.len(), 2);
        assert_eq!(four.children[0].paragraphs, vec!["a"]);
        assert_eq!(four.children[1].paragraphs, vec!["b"]);
        assert_eq!(outline.sections[1].heading, "Five");
    }

    #[test]
    fn test_text_before_first_heading_dropped() {
        let outline = build_outline(&[p("preamble"), h("H1", "Intro"), p("body")]);
        assert_eq!(outline.paragraph_count(), 1);
        assert_eq!(outline.sections[0].paragraphs, vec!["body"]);
    }

    #[test]
    fn test_boilerplate_dropped_everywhere() {
        let outline = build_outline(&[
            p("Case No. AB-1234"),
            h("H1", "Facts"),
            p("Case No. AB-1234"),
            p("7"),
            p("7 of 10"),
            p("Page 7"),
            h("H2", "12"),
            p("more"),
        ]);

        assert_eq!(outline.section_count(), 1);
        let facts = &outline.sections[0];
        assert_eq!(facts.paragraphs, vec!["Page 7", "more"]);
    }

    #[test]
    fn test_boilerplate_filter_disabled() {
        let outline = OutlineBuilder::new()
            .with_boilerplate_filter(false)
            .build(&[h("H1", "Facts"), p("7 of 10")]);
        assert_eq!(outline.sections[0].paragraphs, vec!["7 of 10"]);
    }

    #[test]
    fn test_empty_heading_still_opens_section() {
        let outline = build_outline(&[h("H1", "   "), p("kept")]);
        let section = &outline.sections[0];
        assert_eq!(section.heading, "");
        assert_eq!(section.id, "section");
        assert_eq!(section.paragraphs, vec!["kept"]);
    }

    #[test]
    fn test_empty_text_not_attached() {
        let outline = build_outline(&[h("H1", "A"), p(""), p("   "), p("real")]);
        assert_eq!(outline.sections[0].paragraphs, vec!["real"]);
    }

    #[test]
    fn test_resolved_heading_wins_over_style() {
        let mut para = Paragraph::with_text("Localized heading");
        para.style = Some("berschrift1".to_string());
        para.heading = Some(HeadingRank::H1);
        let outline = build_outline(&[para, p("text")]);
        assert_eq!(outline.sections[0].heading, "Localized heading");
    }

    #[test]
    fn test_ids_from_heading_text() {
        let outline = build_outline(&[h("H1", "Background & Facts")]);
        assert_eq!(outline.sections[0].id, "background-facts");
    }
}
