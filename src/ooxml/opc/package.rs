//! Package writer for OPC packages.
//!
//! Collects parts with their content types and serializes them into a single
//! ZIP archive, writing `[Content_Types].xml` first.

use super::constants::{content_type as ct, namespace};
use super::rel::Relationships;
use crate::common::{Error, Result};
use crate::common::xml::escape_xml;
use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Seek, Write};
use zip::write::{SimpleFileOptions, ZipWriter};

/// Name of the content types part inside the archive.
pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";

/// One buffered part.
#[derive(Debug)]
struct Part {
    /// Part name with leading slash, e.g. `/xl/workbook.xml`
    partname: String,
    blob: Vec<u8>,
}

/// Builder for OPC packages (ZIP archives).
///
/// Parts are written in the order they were added. ZIP entry timestamps are
/// pinned to the DOS epoch so identical input produces identical bytes.
///
/// # Examples
///
/// ```
/// use tabula::ooxml::opc::{PackageWriter, Relationships};
/// use tabula::ooxml::opc::constants::{content_type as ct, relationship_type as rt};
///
/// # fn main() -> tabula::Result<()> {
/// let mut rels = Relationships::new();
/// rels.add(rt::OFFICE_DOCUMENT, "word/document.xml");
///
/// let mut writer = PackageWriter::new();
/// writer.add_rels("/_rels/.rels", &rels)?;
/// writer.add_part("/word/document.xml", ct::WML_DOCUMENT_MAIN, b"<w:document/>".to_vec());
/// let bytes = writer.finish_to_bytes()?;
/// assert_eq!(&bytes[..2], b"PK");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct PackageWriter {
    parts: Vec<Part>,
    content_types: ContentTypesItem,
}

impl PackageWriter {
    /// Create an empty package.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part.
    ///
    /// # Arguments
    ///
    /// * `partname` - Absolute part name (e.g., "/xl/workbook.xml")
    /// * `content_type` - Content type registered for the part
    /// * `blob` - Serialized part content
    pub fn add_part(&mut self, partname: &str, content_type: &str, blob: Vec<u8>) {
        self.content_types.add_content_type(partname, content_type);
        self.parts.push(Part {
            partname: partname.to_string(),
            blob,
        });
    }

    /// Add a relationships part.
    pub fn add_rels(&mut self, partname: &str, rels: &Relationships) -> Result<()> {
        let xml = rels.to_xml()?;
        self.add_part(partname, ct::OPC_RELATIONSHIPS, xml.into_bytes());
        Ok(())
    }

    /// Number of parts added so far, excluding `[Content_Types].xml`.
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Write the package into `writer`.
    pub fn write_to<W: Write + Seek>(self, writer: W) -> Result<W> {
        let mut zip_writer = ZipWriter::new(writer);
        let options = SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Deflated)
            .last_modified_time(zip::DateTime::default());

        let write_failed = |name: &str, err: std::io::Error| {
            Error::Encoding(format!("failed to write part '{}': {}", name, err))
        };

        zip_writer.start_file(CONTENT_TYPES_PART, options)?;
        zip_writer
            .write_all(self.content_types.to_xml()?.as_bytes())
            .map_err(|e| write_failed(CONTENT_TYPES_PART, e))?;

        for part in &self.parts {
            zip_writer.start_file(part.partname.trim_start_matches('/'), options)?;
            zip_writer
                .write_all(&part.blob)
                .map_err(|e| write_failed(&part.partname, e))?;
        }

        tracing::debug!(parts = self.parts.len() + 1, "package written");
        Ok(zip_writer.finish()?)
    }

    /// Finish writing and return the archive bytes.
    pub fn finish_to_bytes(self) -> Result<Vec<u8>> {
        let cursor = self.write_to(Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }
}

/// Helper for building [Content_Types].xml content.
///
/// Manages Default and Override elements for content type mapping.
#[derive(Debug)]
struct ContentTypesItem {
    /// Default content types by extension
    defaults: BTreeMap<String, String>,

    /// Override content types by partname
    overrides: BTreeMap<String, String>,
}

impl Default for ContentTypesItem {
    fn default() -> Self {
        let mut defaults = BTreeMap::new();

        // Add standard defaults
        defaults.insert("rels".to_string(), ct::OPC_RELATIONSHIPS.to_string());
        defaults.insert("xml".to_string(), ct::XML.to_string());

        Self {
            defaults,
            overrides: BTreeMap::new(),
        }
    }
}

impl ContentTypesItem {
    /// Add a content type for a part.
    ///
    /// Uses a default mapping if the extension matches a well-known type,
    /// otherwise uses an override for the specific partname.
    fn add_content_type(&mut self, partname: &str, content_type: &str) {
        let ext = partname.rsplit_once('.').map_or("", |(_, ext)| ext);

        if Self::is_default_content_type(ext, content_type) {
            self.defaults
                .insert(ext.to_string(), content_type.to_string());
        } else {
            self.overrides
                .insert(partname.to_string(), content_type.to_string());
        }
    }

    /// Check if an extension/content-type pair is a standard default.
    fn is_default_content_type(ext: &str, content_type: &str) -> bool {
        matches!(
            (ext, content_type),
            ("rels", ct::OPC_RELATIONSHIPS) | ("xml", ct::XML)
        )
    }

    /// Generate the XML for [Content_Types].xml.
    fn to_xml(&self) -> std::result::Result<String, std::fmt::Error> {
        let mut xml = String::with_capacity(1024);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(xml, r#"<Types xmlns="{}">"#, namespace::OPC_CONTENT_TYPES)?;

        // BTreeMap iteration keeps both lists sorted
        for (ext, content_type) in &self.defaults {
            write!(
                xml,
                r#"<Default Extension="{}" ContentType="{}"/>"#,
                escape_xml(ext),
                escape_xml(content_type)
            )?;
        }

        for (partname, content_type) in &self.overrides {
            write!(
                xml,
                r#"<Override PartName="{}" ContentType="{}"/>"#,
                escape_xml(partname),
                escape_xml(content_type)
            )?;
        }

        xml.push_str("</Types>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::read_part;
    use std::io::{self, SeekFrom};

    /// Sink that rejects every write.
    #[derive(Debug)]
    struct FullDisk;

    impl Write for FullDisk {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("no space left on device"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Seek for FullDisk {
        fn seek(&mut self, _: SeekFrom) -> io::Result<u64> {
            Ok(0)
        }
    }

    #[test]
    fn test_content_types_xml() {
        let mut cti = ContentTypesItem::default();
        cti.add_content_type("/word/document.xml", ct::WML_DOCUMENT_MAIN);
        cti.add_content_type("/word/_rels/document.xml.rels", ct::OPC_RELATIONSHIPS);

        let xml = cti.to_xml().unwrap();

        assert!(xml.contains(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#));
        assert!(xml.contains(r#"<Override PartName="/word/document.xml""#));
        assert!(!xml.contains("document.xml.rels\""));
    }

    #[test]
    fn test_parts_are_readable() {
        let mut writer = PackageWriter::new();
        writer.add_part("/a/b.xml", ct::XML, b"<b/>".to_vec());
        assert_eq!(writer.part_count(), 1);

        let bytes = writer.finish_to_bytes().unwrap();
        assert_eq!(read_part(&bytes, "a/b.xml"), "<b/>");
        assert!(read_part(&bytes, CONTENT_TYPES_PART).starts_with("<?xml"));
    }

    #[test]
    fn test_output_is_deterministic() {
        let build = || {
            let mut writer = PackageWriter::new();
            writer.add_part("/x.xml", ct::XML, b"<x/>".to_vec());
            writer.finish_to_bytes().unwrap()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn test_write_failure_is_an_encoding_error() {
        let mut writer = PackageWriter::new();
        writer.add_part("/x.xml", ct::XML, b"<x/>".to_vec());

        let err = writer.write_to(FullDisk).unwrap_err();
        assert!(matches!(err, Error::Encoding(_)), "got {:?}", err);
    }
}
