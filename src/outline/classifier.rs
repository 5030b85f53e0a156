//! Style identifier to heading rank mapping.

use crate::model::HeadingRank;

/// Classify a paragraph style identifier.
///
/// The identifier is lower-cased and stripped of whitespace before lookup,
/// so `Heading1`, `heading 1` and `H1` all resolve to [`HeadingRank::H1`].
/// Anything outside the fixed table is not a heading.
///
/// ```
/// use briefdoc::model::HeadingRank;
/// use briefdoc::outline::heading_rank;
///
/// assert_eq!(heading_rank(Some("Heading4a")), Some(HeadingRank::H4a));
/// assert_eq!(heading_rank(Some("Normal")), None);
/// assert_eq!(heading_rank(None), None);
/// ```
pub fn heading_rank(style: Option<&str>) -> Option<HeadingRank> {
    let style = style?;
    let key: String = style
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    match key.as_str() {
        "heading1" | "h1" => Some(HeadingRank::H1),
        "heading2" | "h2" => Some(HeadingRank::H2),
        "heading3" | "h3" => Some(HeadingRank::H3),
        "heading4" | "h4" => Some(HeadingRank::H4),
        "heading4a" | "h4a" => Some(HeadingRank::H4a),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recognized_ids() {
        let cases = [
            ("Heading1", HeadingRank::H1),
            ("H1", HeadingRank::H1),
            ("Heading2", HeadingRank::H2),
            ("H2", HeadingRank::H2),
            ("Heading3", HeadingRank::H3),
            ("H3", HeadingRank::H3),
            ("Heading4", HeadingRank::H4),
            ("H4", HeadingRank::H4),
            ("Heading4a", HeadingRank::H4a),
            ("H4a", HeadingRank::H4a),
        ];
        for (style, rank) in cases {
            assert_eq!(heading_rank(Some(style)), Some(rank), "style {}", style);
        }
    }

    #[test]
    fn test_style_names_match() {
        // styles.xml names use a space and lower case
        assert_eq!(heading_rank(Some("heading 1")), Some(HeadingRank::H1));
        assert_eq!(heading_rank(Some("Heading 4A")), Some(HeadingRank::H4a));
    }

    #[test]
    fn test_unrecognized() {
        for style in ["", "Normal", "Title", "Heading5", "Heading", "H4b", "ListParagraph", "h12"] {
            assert_eq!(heading_rank(Some(style)), None, "style {:?}", style);
        }
        assert_eq!(heading_rank(None), None);
    }

    #[test]
    fn test_ranks_are_static() {
        for _ in 0..3 {
            assert_eq!(heading_rank(Some("H3")), Some(HeadingRank::H3));
        }
    }
}
