/// Run types and implementation for DOCX documents.
use crate::common::Result;
use crate::common::xml::escape_xml;
use std::fmt::Write as FmtWrite;

/// A mutable run.
///
/// Runs contain text and character formatting.
#[derive(Debug, Clone, Default)]
pub struct MutableRun {
    /// Run text
    pub(crate) text: String,
    /// Run properties
    pub(crate) properties: RunProperties,
}

/// Character formatting of a run.
#[derive(Debug, Clone, Default)]
pub(crate) struct RunProperties {
    pub(crate) bold: bool,
    /// Font size in half-points
    pub(crate) font_size: Option<u32>,
}

impl MutableRun {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Set the text content.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    /// Get the text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set bold formatting.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.properties.bold = bold;
        self
    }

    /// Set font size in half-points.
    pub fn font_size(&mut self, size: u32) -> &mut Self {
        self.properties.font_size = Some(size);
        self
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:r>");

        // Write run properties if any
        if self.properties.bold || self.properties.font_size.is_some() {
            xml.push_str("<w:rPr>");
            if self.properties.bold {
                xml.push_str("<w:b/>");
            }
            if let Some(size) = self.properties.font_size {
                write!(xml, "<w:sz w:val=\"{}\"/>", size)?;
            }
            xml.push_str("</w:rPr>");
        }

        if !self.text.is_empty() {
            write!(
                xml,
                "<w:t xml:space=\"preserve\">{}</w:t>",
                escape_xml(&self.text)
            )?;
        }

        xml.push_str("</w:r>");
        Ok(())
    }
}
