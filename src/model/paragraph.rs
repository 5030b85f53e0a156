//! Paragraph records and heading ranks.

use serde::{Deserialize, Serialize};

/// Heading rank, ordered from most general to most nested.
///
/// `H4a` is a sub-level that nests directly under `H4`. Any heading whose
/// rank is less than or equal to an open section's rank closes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingRank {
    H1,
    H2,
    H3,
    H4,
    H4a,
}

impl HeadingRank {
    /// All ranks in nesting order.
    pub const ALL: [HeadingRank; 5] = [
        HeadingRank::H1,
        HeadingRank::H2,
        HeadingRank::H3,
        HeadingRank::H4,
        HeadingRank::H4a,
    ];

    /// Major heading level (1-4). `H4a` reports 4.
    pub fn level(&self) -> u8 {
        match self {
            HeadingRank::H1 => 1,
            HeadingRank::H2 => 2,
            HeadingRank::H3 => 3,
            HeadingRank::H4 | HeadingRank::H4a => 4,
        }
    }

    /// Short label used in previews, e.g. `"H4a"`.
    pub fn label(&self) -> &'static str {
        match self {
            HeadingRank::H1 => "H1",
            HeadingRank::H2 => "H2",
            HeadingRank::H3 => "H3",
            HeadingRank::H4 => "H4",
            HeadingRank::H4a => "H4a",
        }
    }

    /// Value of the `level` attribute in Akoma Ntoso output.
    pub fn attr_value(&self) -> &'static str {
        match self {
            HeadingRank::H1 => "1",
            HeadingRank::H2 => "2",
            HeadingRank::H3 => "3",
            HeadingRank::H4 => "4",
            HeadingRank::H4a => "4a",
        }
    }
}

impl std::fmt::Display for HeadingRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A text-bearing paragraph read from the document body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Raw `w:pStyle` value, if the paragraph has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,

    /// Concatenated run text
    pub text: String,

    /// Heading rank resolved by the parser (style ID or style name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading: Option<HeadingRank>,
}

impl Paragraph {
    /// Create a body paragraph with no style.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            style: None,
            text: text.into(),
            heading: None,
        }
    }

    /// Create a paragraph carrying a style identifier.
    ///
    /// The heading rank is classified from the identifier immediately.
    pub fn styled(style: impl Into<String>, text: impl Into<String>) -> Self {
        let style = style.into();
        let heading = crate::outline::heading_rank(Some(&style));
        Self {
            style: Some(style),
            text: text.into(),
            heading,
        }
    }

    /// Check whether this paragraph opens a section.
    pub fn is_heading(&self) -> bool {
        self.heading.is_some()
    }
}
