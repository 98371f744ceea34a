/// Document writer implementation for DOCX.
use super::paragraph::{MutableParagraph, ParagraphAlignment};
use super::style::{MutableStyle, default_styles, generate_styles_xml};
use super::table::MutableTable;
use crate::common::Result;
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::props::app_properties_xml;
use crate::ooxml::opc::{CoreProperties, PackageWriter, Relationships};
use std::fmt::Write as FmtWrite;

/// Letter page size and 1" margins, in twips.
const SECTION_PROPERTIES: &str = r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/><w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/></w:sectPr>"#;

/// A mutable Word document for writing.
///
/// Body elements are written in the order they were added.
#[derive(Debug)]
pub struct MutableDocument {
    /// Document body content in document order
    body: Vec<BodyElement>,
    /// Styles written to `word/styles.xml`
    styles: Vec<MutableStyle>,
}

/// A body element (paragraph or table).
#[derive(Debug)]
pub(crate) enum BodyElement {
    Paragraph(MutableParagraph),
    Table(MutableTable),
}

impl MutableDocument {
    /// Create a new empty document with the default styles.
    pub fn new() -> Self {
        Self {
            body: Vec::new(),
            styles: default_styles(),
        }
    }

    /// Add an empty paragraph.
    pub fn add_paragraph(&mut self) -> &mut MutableParagraph {
        self.body.push(BodyElement::Paragraph(MutableParagraph::new()));
        match self.body.last_mut() {
            Some(BodyElement::Paragraph(p)) => p,
            _ => unreachable!(),
        }
    }

    /// Add a paragraph with text.
    pub fn add_paragraph_with_text(&mut self, text: &str) -> &mut MutableParagraph {
        let para = self.add_paragraph();
        if !text.is_empty() {
            para.add_run_with_text(text);
        }
        para
    }

    /// Add a centered heading paragraph in the `Title` style.
    pub fn add_title(&mut self, text: &str) -> &mut MutableParagraph {
        let para = self.add_paragraph_with_text(text);
        para.set_style("Title");
        para.set_alignment(ParagraphAlignment::Center);
        for run in &mut para.runs {
            run.bold(true);
        }
        para
    }

    /// Add an empty table.
    pub fn add_table(&mut self) -> &mut MutableTable {
        self.body.push(BodyElement::Table(MutableTable::new()));
        match self.body.last_mut() {
            Some(BodyElement::Table(t)) => t,
            _ => unreachable!(),
        }
    }

    /// Get the number of paragraphs in the body.
    pub fn paragraph_count(&self) -> usize {
        self.body
            .iter()
            .filter(|e| matches!(e, BodyElement::Paragraph(_)))
            .count()
    }

    /// Get the number of tables in the body.
    pub fn table_count(&self) -> usize {
        self.body
            .iter()
            .filter(|e| matches!(e, BodyElement::Table(_)))
            .count()
    }

    /// Serialize the document to XML.
    pub fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(4096);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<w:document xmlns:w="{}" xmlns:r="{}">"#,
            namespace::WML_MAIN,
            namespace::OFC_RELATIONSHIPS
        )?;
        xml.push_str("<w:body>");

        for element in &self.body {
            match element {
                BodyElement::Paragraph(p) => p.to_xml(&mut xml)?,
                BodyElement::Table(t) => t.to_xml(&mut xml)?,
            }
        }

        // The sectPr must be the last element in the body
        xml.push_str(SECTION_PROPERTIES);
        xml.push_str("</w:body>");
        xml.push_str("</w:document>");
        Ok(xml)
    }

    /// Serialize the document into a `.docx` package.
    pub fn save_to_bytes(&self, props: &CoreProperties<'_>) -> Result<Vec<u8>> {
        let mut package_rels = Relationships::new();
        package_rels.add(rt::OFFICE_DOCUMENT, "word/document.xml");
        package_rels.add(rt::CORE_PROPERTIES, "docProps/core.xml");
        package_rels.add(rt::EXTENDED_PROPERTIES, "docProps/app.xml");

        let mut document_rels = Relationships::new();
        document_rels.add(rt::STYLES, "styles.xml");

        let mut writer = PackageWriter::new();
        writer.add_rels("/_rels/.rels", &package_rels)?;
        writer.add_part(
            "/word/document.xml",
            ct::WML_DOCUMENT_MAIN,
            self.to_xml()?.into_bytes(),
        );
        writer.add_rels("/word/_rels/document.xml.rels", &document_rels)?;
        writer.add_part(
            "/word/styles.xml",
            ct::WML_STYLES,
            generate_styles_xml(&self.styles)?.into_bytes(),
        );
        writer.add_part(
            "/docProps/core.xml",
            ct::OPC_CORE_PROPERTIES,
            props.to_xml()?.into_bytes(),
        );
        writer.add_part(
            "/docProps/app.xml",
            ct::OFC_EXTENDED_PROPERTIES,
            app_properties_xml().into_bytes(),
        );

        writer.finish_to_bytes()
    }
}

impl Default for MutableDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{part_names, read_part};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_create_empty_document() {
        let doc = MutableDocument::new();
        assert_eq!(doc.paragraph_count(), 0);
        assert_eq!(doc.table_count(), 0);
    }

    #[test]
    fn test_xml_generation() {
        let mut doc = MutableDocument::new();
        doc.add_title("Hello");
        doc.add_paragraph();
        doc.add_table().add_row(["a"]);

        let xml = doc.to_xml().unwrap();
        assert!(xml.contains("<w:body><w:p><w:pPr><w:pStyle w:val=\"Title\"/>"));
        assert!(xml.contains("<w:p></w:p><w:tbl>"));
        assert!(xml.ends_with("</w:sectPr></w:body></w:document>"));
        assert_eq!(doc.paragraph_count(), 2);
        assert_eq!(doc.table_count(), 1);
    }

    #[test]
    fn test_package_parts() {
        let mut doc = MutableDocument::new();
        doc.add_title("Parts");

        let props = CoreProperties {
            title: "Parts",
            created: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
        };
        let bytes = doc.save_to_bytes(&props).unwrap();

        let names = part_names(&bytes);
        assert_eq!(names[0], "[Content_Types].xml");
        for part in [
            "_rels/.rels",
            "word/document.xml",
            "word/_rels/document.xml.rels",
            "word/styles.xml",
            "docProps/core.xml",
            "docProps/app.xml",
        ] {
            assert!(names.iter().any(|n| n == part), "missing {}", part);
        }
        assert!(read_part(&bytes, "word/_rels/document.xml.rels").contains(r#"Target="styles.xml""#));
    }
}
