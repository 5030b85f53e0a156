//! Cover page generation from a DOCX template.
//!
//! The template carries three fixed placeholder strings, each as the whole
//! content of a `<w:t>` run. They are swapped for caller-supplied values,
//! the document XML is re-parsed after every swap, and the package is
//! rebuilt with all other entries untouched.
//!
//! # Example
//!
//! ```no_run
//! use briefdoc::cover::{CoverGenerator, CoverValues};
//!
//! let values = CoverValues::new()
//!     .with_case_number("No. 1234")
//!     .with_filing_name("APPELLEE'S ANSWERING BRIEF")
//!     .with_judge("Hon. Jane Doe");
//!
//! let generator = CoverGenerator::open("template.docx")?;
//! let report = generator.write(&values, "out/cover.docx")?;
//! for replacement in &report.replacements {
//!     println!("{}", replacement);
//! }
//! # Ok::<(), briefdoc::Error>(())
//! ```

use crate::container::{OoxmlContainer, DOCUMENT_PART};
use crate::error::{Error, Result};
use quick_xml::events::Event;
use regex::{Captures, Regex};
use std::fs;
use std::path::{Path, PathBuf};

/// A replaceable field on the cover page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverField {
    CaseNumber,
    FilingName,
    Judge,
}

impl CoverField {
    /// Stable key used in reports and error messages.
    pub fn key(&self) -> &'static str {
        match self {
            CoverField::CaseNumber => "case_number",
            CoverField::FilingName => "filing_name",
            CoverField::Judge => "judge",
        }
    }

    /// Placeholder text the template carries for this field.
    pub fn placeholder(&self) -> &'static str {
        match self {
            CoverField::CaseNumber => "No. 6461",
            CoverField::FilingName => "APPELLANTS OPENING BRIEF",
            CoverField::Judge => "Hon. Stacy Beckerman",
        }
    }
}

/// Fields in the order they are applied.
pub const PLACEHOLDERS: [CoverField; 3] = [
    CoverField::CaseNumber,
    CoverField::FilingName,
    CoverField::Judge,
];

/// Replacement values for the cover fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverValues {
    pub case_number: Option<String>,
    pub filing_name: Option<String>,
    pub judge: Option<String>,
}

impl CoverValues {
    /// Create an empty value set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the case number text, e.g. `No. 1234`.
    pub fn with_case_number(mut self, value: impl Into<String>) -> Self {
        self.case_number = Some(value.into());
        self
    }

    /// Set the filing name text.
    pub fn with_filing_name(mut self, value: impl Into<String>) -> Self {
        self.filing_name = Some(value.into());
        self
    }

    /// Set the judge name text.
    pub fn with_judge(mut self, value: impl Into<String>) -> Self {
        self.judge = Some(value.into());
        self
    }

    /// Value for a field, if supplied.
    pub fn get(&self, field: CoverField) -> Option<&str> {
        match field {
            CoverField::CaseNumber => self.case_number.as_deref(),
            CoverField::FilingName => self.filing_name.as_deref(),
            CoverField::Judge => self.judge.as_deref(),
        }
    }
}

/// Outcome of one placeholder substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub field: CoverField,
    pub replacement: String,
    /// Number of `<w:t>` nodes rewritten
    pub matches: usize,
}

impl std::fmt::Display for Replacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: '{}' -> '{}' (matches: {})",
            self.field.key(),
            self.field.placeholder(),
            self.replacement,
            self.matches
        )
    }
}

/// Summary of all substitutions, in application order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoverReport {
    pub replacements: Vec<Replacement>,
}

impl CoverReport {
    /// Match count for a field (0 if it was not applied).
    pub fn matches(&self, field: CoverField) -> usize {
        self.replacements
            .iter()
            .find(|r| r.field == field)
            .map_or(0, |r| r.matches)
    }
}

/// Replace `placeholder` where it is the entire content of a `<w:t>` node.
///
/// The replacement is XML-escaped. Returns the updated XML and the number
/// of nodes rewritten; zero matches is an error.
pub fn scoped_replace(xml: &str, placeholder: &str, replacement: &str) -> Result<(String, usize)> {
    let pattern = format!(r"(<w:t(?:\s[^>]*)?>){}(</w:t>)", regex::escape(placeholder));
    let re = Regex::new(&pattern).map_err(|e| Error::InvalidData(e.to_string()))?;

    let matches = re.find_iter(xml).count();
    if matches == 0 {
        return Err(Error::PlaceholderNotFound(placeholder.to_string()));
    }

    let escaped = quick_xml::escape::escape(replacement);
    let updated = re.replace_all(xml, |caps: &Captures<'_>| {
        format!("{}{}{}", &caps[1], escaped, &caps[2])
    });
    Ok((updated.into_owned(), matches))
}

/// Whether `c` matches the XML 1.0 `Char` production.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{9}' | '\u{A}' | '\u{D}'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Check that `xml` parses to the end, blaming `placeholder` otherwise.
///
/// Characters XML 1.0 forbids (most C0 controls) are rejected too; the
/// reader itself lets them through.
pub fn validate_xml(xml: &str, placeholder: &str) -> Result<()> {
    if let Some(c) = xml.chars().find(|&c| !is_xml_char(c)) {
        return Err(Error::InvalidReplacement {
            placeholder: placeholder.to_string(),
            reason: format!("character U+{:04X} is not allowed in XML", c as u32),
        });
    }

    let mut reader = quick_xml::Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(Event::Eof) => return Ok(()),
            Ok(_) => {}
            Err(e) => {
                return Err(Error::InvalidReplacement {
                    placeholder: placeholder.to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }
}

/// Apply every cover field to the document XML in [`PLACEHOLDERS`] order.
pub fn apply_replacements(xml: &str, values: &CoverValues) -> Result<(String, CoverReport)> {
    let mut updated = xml.to_string();
    let mut report = CoverReport::default();

    for field in PLACEHOLDERS {
        let replacement = values
            .get(field)
            .ok_or_else(|| Error::MissingValue(field.key().to_string()))?;

        let (next, matches) = scoped_replace(&updated, field.placeholder(), replacement)?;
        validate_xml(&next, field.placeholder())?;
        log::debug!(
            "replaced {} ({} node{})",
            field.key(),
            matches,
            if matches == 1 { "" } else { "s" }
        );

        updated = next;
        report.replacements.push(Replacement {
            field,
            replacement: replacement.to_string(),
            matches,
        });
    }

    Ok((updated, report))
}

/// Cover generator bound to one template package.
#[derive(Debug)]
pub struct CoverGenerator {
    container: OoxmlContainer,
    template_path: Option<PathBuf>,
}

impl CoverGenerator {
    /// Open a template from a file path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let container = OoxmlContainer::open(path)?;
        Ok(Self {
            container,
            template_path: Some(path.to_path_buf()),
        })
    }

    /// Create a generator from template bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        Ok(Self {
            container: OoxmlContainer::from_bytes(data)?,
            template_path: None,
        })
    }

    /// Apply the replacements without producing a package.
    pub fn preview(&self, values: &CoverValues) -> Result<CoverReport> {
        let xml = self.container.read_xml(DOCUMENT_PART)?;
        let (_, report) = apply_replacements(&xml, values)?;
        Ok(report)
    }

    /// Build the updated package in memory.
    pub fn generate(&self, values: &CoverValues) -> Result<(Vec<u8>, CoverReport)> {
        let xml = self.container.read_xml(DOCUMENT_PART)?;
        let (updated, report) = apply_replacements(&xml, values)?;
        let package = self.container.rewrite_part(DOCUMENT_PART, updated.as_bytes())?;
        Ok((package, report))
    }

    /// Build the updated package and write it to `output`.
    ///
    /// Refuses to overwrite the template itself. Parent directories are
    /// created as needed.
    pub fn write(&self, values: &CoverValues, output: impl AsRef<Path>) -> Result<CoverReport> {
        let output = output.as_ref();
        if let Some(ref template) = self.template_path {
            if output.exists() && fs::canonicalize(output)? == fs::canonicalize(template)? {
                return Err(Error::InvalidData(
                    "output path must differ from template to preserve the source file".to_string(),
                ));
            }
        }

        let (package, report) = self.generate(values)?;
        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(output, package)?;
        log::debug!("wrote cover package to {}", output.display());
        Ok(report)
    }
}
