//! ZIP container abstraction for Word documents.

use crate::error::{Error, Result};
use std::cell::RefCell;
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;

/// ZIP file magic bytes: PK\x03\x04
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Main document part of a WordprocessingML package.
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Style definitions part of a WordprocessingML package.
pub const STYLES_PART: &str = "word/styles.xml";

/// Check if data starts with ZIP magic bytes.
pub fn is_zip_file(data: &[u8]) -> bool {
    data.len() >= 4 && data[..4] == ZIP_MAGIC
}

/// Byte order mark found at the start of an XML part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Bom {
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl Bom {
    fn sniff(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0xEF, 0xBB, 0xBF, ..] => Some(Bom::Utf8),
            [0xFF, 0xFE, ..] => Some(Bom::Utf16Le),
            [0xFE, 0xFF, ..] => Some(Bom::Utf16Be),
            _ => None,
        }
    }

    fn len(self) -> usize {
        match self {
            Bom::Utf8 => 3,
            Bom::Utf16Le | Bom::Utf16Be => 2,
        }
    }
}

/// Decode XML bytes handling UTF-8 (with or without BOM) and UTF-16 LE/BE.
///
/// Word writes UTF-8, but parts saved by other tools occasionally arrive as
/// UTF-16. After transcoding, the XML declaration is rewritten to say UTF-8
/// so quick-xml does not try to decode the string a second time.
pub fn decode_xml_bytes(bytes: &[u8]) -> Result<String> {
    match Bom::sniff(bytes) {
        Some(Bom::Utf8) => String::from_utf8(bytes[Bom::Utf8.len()..].to_vec())
            .map_err(|e| Error::Encoding(e.to_string())),
        Some(bom @ Bom::Utf16Le) | Some(bom @ Bom::Utf16Be) => {
            let content = decode_utf16(&bytes[bom.len()..], bom == Bom::Utf16Le)?;
            Ok(declare_utf8(&content))
        }
        None => match String::from_utf8(bytes.to_vec()) {
            Ok(s) => Ok(s),
            // ASCII markup in UTF-16 leaves a NUL in every other byte
            Err(_) if bytes.len() >= 4 && bytes[1] == 0 && bytes[3] == 0 => {
                decode_utf16(bytes, true).map(|s| declare_utf8(&s))
            }
            Err(_) if bytes.len() >= 4 && bytes[0] == 0 && bytes[2] == 0 => {
                decode_utf16(bytes, false).map(|s| declare_utf8(&s))
            }
            Err(_) => Ok(String::from_utf8_lossy(bytes).into_owned()),
        },
    }
}

fn decode_utf16(bytes: &[u8], little_endian: bool) -> Result<String> {
    let units = bytes.chunks_exact(2).map(|pair| {
        if little_endian {
            u16::from_le_bytes([pair[0], pair[1]])
        } else {
            u16::from_be_bytes([pair[0], pair[1]])
        }
    });

    char::decode_utf16(units)
        .collect::<std::result::Result<String, _>>()
        .map_err(|e| Error::Encoding(e.to_string()))
}

/// Rewrite a UTF-16 encoding pseudo-attribute in the XML declaration.
fn declare_utf8(content: &str) -> String {
    if !content.starts_with("<?xml") {
        return content.to_string();
    }
    let Some(end) = content.find("?>") else {
        return content.to_string();
    };

    let (decl, rest) = content.split_at(end + 2);
    let mut fixed = decl.to_string();
    for quoted in ["\"UTF-16\"", "'UTF-16'", "\"utf-16\"", "'utf-16'"] {
        fixed = fixed.replace(&format!("encoding={}", quoted), "encoding=\"UTF-8\"");
    }
    fixed + rest
}

/// Word package backed by an in-memory ZIP archive.
///
/// The whole file is read once; parts are then decoded on demand.
pub struct OoxmlContainer {
    archive: RefCell<zip::ZipArchive<Cursor<Vec<u8>>>>,
}

impl OoxmlContainer {
    /// Open a container from a file path.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use briefdoc::container::OoxmlContainer;
    ///
    /// let container = OoxmlContainer::open("brief.docx")?;
    /// let xml = container.read_xml("word/document.xml")?;
    /// # Ok::<(), briefdoc::Error>(())
    /// ```
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        let mut reader = BufReader::new(file);
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Create a container from a byte vector.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        if !is_zip_file(&data) {
            return Err(Error::ZipArchive("not a ZIP archive".to_string()));
        }
        let archive = zip::ZipArchive::new(Cursor::new(data))?;
        log::debug!("opened package with {} entries", archive.len());
        Ok(Self {
            archive: RefCell::new(archive),
        })
    }

    /// Create a container from a reader.
    pub fn from_reader<R: Read + Seek>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(data)
    }

    /// Read an XML part from the archive as a string.
    pub fn read_xml(&self, path: &str) -> Result<String> {
        let bytes = self.read_binary(path)?;
        decode_xml_bytes(&bytes)
    }

    /// Read a part from the archive as raw bytes.
    pub fn read_binary(&self, path: &str) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut file = archive
            .by_name(path)
            .map_err(|_| Error::MissingComponent(path.to_string()))?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Ok(data)
    }

    /// Check if a part exists in the archive.
    pub fn exists(&self, path: &str) -> bool {
        let archive = self.archive.borrow();
        let found = archive.file_names().any(|n| n == path);
        found
    }

    /// List all entries in archive order.
    pub fn list_files(&self) -> Vec<String> {
        let archive = self.archive.borrow();
        let names: Vec<String> = archive.file_names().map(String::from).collect();
        names
    }

    /// Build a new archive in which `part` holds `contents`.
    ///
    /// Entries keep their original order. Every other entry is copied raw,
    /// so its compression and metadata are untouched; the replaced part is
    /// recompressed with the method it had before.
    pub fn rewrite_part(&self, part: &str, contents: &[u8]) -> Result<Vec<u8>> {
        let mut archive = self.archive.borrow_mut();
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let mut replaced = false;

        for index in 0..archive.len() {
            let entry = archive.by_index_raw(index)?;
            if entry.name() == part {
                let mut options =
                    SimpleFileOptions::default().compression_method(entry.compression());
                if let Some(modified) = entry.last_modified() {
                    options = options.last_modified_time(modified);
                }
                if let Some(mode) = entry.unix_mode() {
                    options = options.unix_permissions(mode);
                }
                let name = entry.name().to_string();
                drop(entry);
                writer.start_file(name, options)?;
                writer.write_all(contents)?;
                replaced = true;
            } else {
                writer.raw_copy_file(entry)?;
            }
        }

        if !replaced {
            return Err(Error::MissingComponent(part.to_string()));
        }

        let cursor = writer.finish()?;
        Ok(cursor.into_inner())
    }
}

impl std::fmt::Debug for OoxmlContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OoxmlContainer")
            .field("entries", &self.archive.borrow().len())
            .finish()
    }
}
