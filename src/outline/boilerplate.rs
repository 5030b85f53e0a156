//! Recurring page furniture that never belongs to a section.

use regex::Regex;
use std::sync::OnceLock;

/// Case-number banner repeated at the top of each page, e.g. `Case No. 21-3355`.
const CASE_BANNER_PATTERN: &str = r"(?i)^case\s+no\.?\s+[\w-]+$";

/// Bare page number or `n of m`.
const PAGE_NUMBER_PATTERN: &str = r"(?i)^\d+(\s+of\s+\d+)?$";

static SHARED: OnceLock<BoilerplateFilter> = OnceLock::new();

/// Matcher for boilerplate paragraphs.
///
/// Patterns are compiled once per filter; use [`BoilerplateFilter::shared`]
/// to reuse a single instance across documents.
#[derive(Debug, Clone)]
pub struct BoilerplateFilter {
    case_banner: Regex,
    page_number: Regex,
}

impl BoilerplateFilter {
    /// Compile the boilerplate patterns.
    pub fn new() -> Self {
        Self {
            case_banner: Regex::new(CASE_BANNER_PATTERN).expect("case banner pattern is valid"),
            page_number: Regex::new(PAGE_NUMBER_PATTERN).expect("page number pattern is valid"),
        }
    }

    /// Process-wide filter instance.
    pub fn shared() -> &'static BoilerplateFilter {
        SHARED.get_or_init(BoilerplateFilter::new)
    }

    /// Check whether the text is a case banner or a page number.
    ///
    /// Surrounding whitespace is ignored. Empty text is not boilerplate.
    pub fn is_boilerplate(&self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }
        self.case_banner.is_match(text) || self.page_number.is_match(text)
    }
}

impl Default for BoilerplateFilter {
    fn default() -> Self {
        Self::new()
    }
}
