/// Style writer support for DOCX documents.
///
/// Exported documents reference three styles: `Normal` for body text,
/// `Title` for the heading paragraph and `TableGrid` for the data table.
use super::super::format::{ParagraphAlignment, StyleType};
use crate::common::Result;
use crate::common::xml::escape_xml;
use std::fmt::Write as FmtWrite;

/// A mutable style definition for writing.
#[derive(Debug, Clone)]
pub struct MutableStyle {
    /// Style identifier (required, e.g., "Title")
    style_id: String,
    /// UI-visible name
    name: String,
    /// Type of style
    style_type: StyleType,
    /// Whether this is the default style for its type
    is_default: bool,
    /// ID of the style this is based on
    based_on: Option<String>,
    /// UI priority for display ordering (lower = higher priority)
    priority: Option<i32>,
    /// Whether to show in quick style gallery
    is_quick_style: bool,
    /// Font family name
    font_name: Option<String>,
    /// Font size in half-points (e.g., 24 = 12pt)
    font_size: Option<u32>,
    /// Bold formatting
    bold: bool,
    /// Paragraph alignment for paragraph styles
    alignment: Option<ParagraphAlignment>,
    /// Space after paragraph in twips
    space_after: Option<u32>,
    /// Single-line grid borders for table styles
    grid_borders: bool,
}

impl MutableStyle {
    /// Create a new style with the given ID, name, and type.
    pub fn new(style_id: &str, name: &str, style_type: StyleType) -> Self {
        Self {
            style_id: style_id.to_string(),
            name: name.to_string(),
            style_type,
            is_default: false,
            based_on: None,
            priority: None,
            is_quick_style: false,
            font_name: None,
            font_size: None,
            bold: false,
            alignment: None,
            space_after: None,
            grid_borders: false,
        }
    }

    /// Create a "Normal" paragraph style (base style).
    pub fn normal() -> Self {
        let mut style = Self::new("Normal", "Normal", StyleType::Paragraph);
        style.is_default = true;
        style.is_quick_style = true;
        style.font_name = Some("Calibri".to_string());
        style.font_size = Some(22); // 11pt
        style.space_after = Some(120);
        style
    }

    /// Create a "Title" style for the document heading.
    pub fn title() -> Self {
        let mut style = Self::new("Title", "Title", StyleType::Paragraph);
        style.based_on = Some("Normal".to_string());
        style.priority = Some(10);
        style.is_quick_style = true;
        style.font_size = Some(32); // 16pt
        style.bold = true;
        style.alignment = Some(ParagraphAlignment::Center);
        style.space_after = Some(240);
        style
    }

    /// Create a "Table Grid" table style.
    pub fn table_grid() -> Self {
        let mut style = Self::new("TableGrid", "Table Grid", StyleType::Table);
        style.priority = Some(39);
        style.grid_borders = true;
        style
    }

    /// Generate XML for this style.
    pub(crate) fn to_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512);

        write!(
            &mut xml,
            r#"<w:style w:type="{}" w:styleId="{}""#,
            self.style_type.to_xml(),
            escape_xml(&self.style_id)
        )?;
        if self.is_default {
            xml.push_str(r#" w:default="1""#);
        }
        xml.push('>');

        write!(&mut xml, r#"<w:name w:val="{}"/>"#, escape_xml(&self.name))?;
        if let Some(ref based_on) = self.based_on {
            write!(&mut xml, r#"<w:basedOn w:val="{}"/>"#, escape_xml(based_on))?;
        }
        if let Some(priority) = self.priority {
            write!(&mut xml, r#"<w:uiPriority w:val="{}"/>"#, priority)?;
        }
        if self.is_quick_style {
            xml.push_str("<w:qFormat/>");
        }

        // Paragraph properties
        if self.alignment.is_some() || self.space_after.is_some() {
            xml.push_str("<w:pPr>");
            if let Some(after) = self.space_after {
                write!(&mut xml, r#"<w:spacing w:after="{}"/>"#, after)?;
            }
            if let Some(alignment) = self.alignment {
                write!(&mut xml, r#"<w:jc w:val="{}"/>"#, alignment.as_str())?;
            }
            xml.push_str("</w:pPr>");
        }

        // Run properties (character formatting)
        if self.font_name.is_some() || self.font_size.is_some() || self.bold {
            xml.push_str("<w:rPr>");
            if let Some(ref font_name) = self.font_name {
                write!(
                    &mut xml,
                    r#"<w:rFonts w:ascii="{}" w:hAnsi="{}" w:cs="{}"/>"#,
                    escape_xml(font_name),
                    escape_xml(font_name),
                    escape_xml(font_name)
                )?;
            }
            if self.bold {
                xml.push_str("<w:b/>");
            }
            if let Some(size) = self.font_size {
                write!(&mut xml, r#"<w:sz w:val="{}"/>"#, size)?;
                write!(&mut xml, r#"<w:szCs w:val="{}"/>"#, size)?;
            }
            xml.push_str("</w:rPr>");
        }

        if self.grid_borders {
            xml.push_str("<w:tblPr><w:tblBorders>");
            for side in ["top", "left", "bottom", "right", "insideH", "insideV"] {
                write!(
                    &mut xml,
                    r#"<w:{} w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
                    side
                )?;
            }
            xml.push_str("</w:tblBorders></w:tblPr>");
        }

        xml.push_str("</w:style>");

        Ok(xml)
    }
}

/// The styles every exported document carries.
pub fn default_styles() -> Vec<MutableStyle> {
    vec![
        MutableStyle::normal(),
        MutableStyle::title(),
        MutableStyle::table_grid(),
    ]
}

/// Generate a complete `word/styles.xml` part.
pub fn generate_styles_xml(styles: &[MutableStyle]) -> Result<String> {
    let mut xml = String::with_capacity(2048);

    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push_str(
        r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    );

    // Add default document defaults
    xml.push_str("<w:docDefaults>");
    xml.push_str("<w:rPrDefault><w:rPr>");
    xml.push_str(r#"<w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:cs="Calibri"/>"#);
    xml.push_str(r#"<w:sz w:val="22"/>"#);
    xml.push_str(r#"<w:szCs w:val="22"/>"#);
    xml.push_str("</w:rPr></w:rPrDefault>");
    xml.push_str("<w:pPrDefault/>");
    xml.push_str("</w:docDefaults>");

    for style in styles {
        xml.push_str(&style.to_xml()?);
    }

    xml.push_str("</w:styles>");

    Ok(xml)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_style() {
        let xml = MutableStyle::title().to_xml().unwrap();
        assert!(xml.starts_with(r#"<w:style w:type="paragraph" w:styleId="Title">"#));
        assert!(xml.contains(r#"<w:jc w:val="center"/>"#));
        assert!(xml.contains("<w:b/>"));
    }

    #[test]
    fn test_styles_part() {
        let xml = generate_styles_xml(&default_styles()).unwrap();
        assert!(xml.contains(r#"w:styleId="Normal" w:default="1""#));
        assert!(xml.contains(r#"<w:style w:type="table" w:styleId="TableGrid">"#));
        assert!(xml.ends_with("</w:styles>"));
    }
}
