//! Error types for the briefdoc library.

use std::io;
use thiserror::Error;

/// Result type alias for briefdoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during document processing.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error reading or writing the ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// Invalid or malformed data in the document.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A required document component is missing.
    #[error("Missing component: {0}")]
    MissingComponent(String),

    /// Error during text encoding conversion.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// A cover placeholder did not appear in any `<w:t>` node.
    #[error("Placeholder '{0}' not found in any <w:t> node")]
    PlaceholderNotFound(String),

    /// No replacement value was supplied for a cover placeholder.
    #[error("Missing replacement value for {0}")]
    MissingValue(String),

    /// The document XML stopped parsing after a placeholder was replaced.
    #[error("XML became invalid after replacing {placeholder}: {reason}")]
    InvalidReplacement {
        /// The placeholder whose substitution broke the XML
        placeholder: String,
        /// Parser message
        reason: String,
    },

    /// Error during rendering.
    #[error("Render error: {0}")]
    Render(String),
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}
