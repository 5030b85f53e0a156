//! JSON renderer implementation.

use crate::error::{Error, Result};
use crate::model::Outline;

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Convert an outline to JSON.
pub fn to_json(outline: &Outline, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Compact => serde_json::to_string(outline),
        JsonFormat::Pretty => serde_json::to_string_pretty(outline),
    };
    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}
