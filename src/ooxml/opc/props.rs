//! Document property parts (`docProps/core.xml`, `docProps/app.xml`).
use crate::common::xml::escape_xml;
use chrono::{DateTime, Utc};
use std::fmt::Write as FmtWrite;

/// Application name recorded in extended properties.
pub const APPLICATION: &str = "tabula";

/// Core properties of a generated package.
#[derive(Debug, Clone)]
pub struct CoreProperties<'a> {
    /// Document title
    pub title: &'a str,
    /// Generation timestamp, written as `dcterms:created` and `dcterms:modified`
    pub created: DateTime<Utc>,
}

impl CoreProperties<'_> {
    /// Serialize to `docProps/core.xml`.
    pub fn to_xml(&self) -> Result<String, std::fmt::Error> {
        let mut xml = String::with_capacity(768);
        let stamp = self.created.format("%Y-%m-%dT%H:%M:%SZ");

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push_str(r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#);
        if !self.title.is_empty() {
            write!(xml, "<dc:title>{}</dc:title>", escape_xml(self.title))?;
        }
        write!(xml, "<dc:creator>{}</dc:creator>", APPLICATION)?;
        write!(
            xml,
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
            stamp
        )?;
        write!(
            xml,
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
            stamp
        )?;
        xml.push_str("</cp:coreProperties>");
        Ok(xml)
    }
}

/// Serialize `docProps/app.xml`.
pub fn app_properties_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes"><Application>{}</Application><DocSecurity>0</DocSecurity><ScaleCrop>false</ScaleCrop></Properties>"#,
        APPLICATION
    )
}
