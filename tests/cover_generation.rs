//! Cover generation against a synthetic template package.

mod common;

use briefdoc::cover::{CoverField, CoverGenerator, CoverValues};
use briefdoc::{Error, OoxmlContainer};
use common::{document_xml, package, CONTENT_TYPES};
use zip::CompressionMethod;

const STYLES: &str = r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"/>"#;

fn template() -> Vec<u8> {
    let body = concat!(
        r#"<w:p><w:r><w:t>No. 6461</w:t></w:r></w:p>"#,
        r#"<w:p><w:r><w:t>IN THE UNITED STATES COURT OF APPEALS</w:t></w:r></w:p>"#,
        r#"<w:p><w:r><w:t xml:space="preserve">APPELLANTS OPENING BRIEF</w:t></w:r></w:p>"#,
        r#"<w:p><w:r><w:t>Hon. Stacy Beckerman</w:t></w:r></w:p>"#,
    );
    let document = document_xml(body);
    package(&[
        ("[Content_Types].xml", CONTENT_TYPES, CompressionMethod::Stored),
        ("word/document.xml", document.as_str(), CompressionMethod::Deflated),
        ("word/styles.xml", STYLES, CompressionMethod::Stored),
    ])
}

fn values() -> CoverValues {
    CoverValues::new()
        .with_case_number("No. 22-35001")
        .with_filing_name("APPELLEE'S ANSWERING BRIEF")
        .with_judge("Hon. Jane <Doe>")
}

#[test]
fn test_generate_rewrites_document_only() {
    let generator = CoverGenerator::from_bytes(template()).unwrap();
    let (data, report) = generator.generate(&values()).unwrap();

    assert_eq!(report.replacements.len(), 3);
    assert_eq!(report.matches(CoverField::CaseNumber), 1);

    let output = OoxmlContainer::from_bytes(data).unwrap();
    assert_eq!(
        output.list_files(),
        vec!["[Content_Types].xml", "word/document.xml", "word/styles.xml"]
    );

    let xml = output.read_xml("word/document.xml").unwrap();
    assert!(xml.contains("<w:t>No. 22-35001</w:t>"));
    assert!(xml.contains("APPELLEE&apos;S ANSWERING BRIEF"));
    assert!(xml.contains("<w:t>Hon. Jane &lt;Doe&gt;</w:t>"));
    assert!(xml.contains("IN THE UNITED STATES COURT OF APPEALS"));
    assert_eq!(output.read_xml("word/styles.xml").unwrap(), STYLES);
}

#[test]
fn test_write_and_dry_run() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = dir.path().join("template.docx");
    std::fs::write(&template_path, template()).unwrap();
    let output_path = dir.path().join("out").join("cover.docx");

    let generator = CoverGenerator::open(&template_path).unwrap();

    let preview = generator.preview(&values()).unwrap();
    assert_eq!(preview.matches(CoverField::Judge), 1);
    assert!(!output_path.exists());

    let report = generator.write(&values(), &output_path).unwrap();
    assert_eq!(report, preview);
    assert!(output_path.exists());

    // Template is untouched
    let original = OoxmlContainer::open(&template_path).unwrap();
    assert!(original
        .read_xml("word/document.xml")
        .unwrap()
        .contains("<w:t>No. 6461</w:t>"));
}

#[test]
fn test_refuses_to_overwrite_template() {
    let dir = tempfile::tempdir().unwrap();
    let template_path = dir.path().join("template.docx");
    std::fs::write(&template_path, template()).unwrap();

    let generator = CoverGenerator::open(&template_path).unwrap();
    let err = generator.write(&values(), &template_path).unwrap_err();
    assert!(matches!(err, Error::InvalidData(_)));
}

#[test]
fn test_missing_placeholder() {
    let document = document_xml(r#"<w:p><w:r><w:t>No. 6461</w:t></w:r></w:p>"#);
    let data = package(&[("word/document.xml", document.as_str(), CompressionMethod::Stored)]);

    let generator = CoverGenerator::from_bytes(data).unwrap();
    let err = generator.preview(&values()).unwrap_err();
    assert!(matches!(err, Error::PlaceholderNotFound(ref p) if p == "APPELLANTS OPENING BRIEF"));
}
