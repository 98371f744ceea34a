//! Styles.xml generator for XLSX files.
//!
//! Exported sheets only distinguish plain cells from header cells, so the
//! stylesheet carries a regular and a bold font and one cell format per font.

use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

/// Style index of unformatted cells.
pub const DEFAULT_STYLE: usize = 0;

/// Font used by a cell format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellFont {
    /// Bold weight
    pub bold: bool,
}

/// Builder for generating styles.xml content.
///
/// Cell formats are de-duplicated; index 0 is always the default format.
#[derive(Debug)]
pub struct StylesBuilder {
    /// Unique fonts (index -> font)
    fonts: Vec<CellFont>,
    /// Cell formats (XF records) - index -> font_id
    cell_formats: Vec<usize>,
}

impl StylesBuilder {
    /// Create a new StylesBuilder with default styles.
    pub fn new() -> Self {
        Self {
            // Add default font (required by Excel)
            fonts: vec![CellFont { bold: false }],
            // Add default cell format (style index 0)
            cell_formats: vec![0],
        }
    }

    /// Add a cell format using `font` and return its style index.
    ///
    /// If the format has already been added, returns the existing index.
    pub fn add_cell_format(&mut self, font: CellFont) -> usize {
        let font_id = match self.fonts.iter().position(|f| *f == font) {
            Some(id) => id,
            None => {
                self.fonts.push(font);
                self.fonts.len() - 1
            },
        };

        match self.cell_formats.iter().position(|f| *f == font_id) {
            Some(index) => index,
            None => {
                self.cell_formats.push(font_id);
                self.cell_formats.len() - 1
            },
        }
    }

    /// Number of cell formats.
    pub fn cell_format_count(&self) -> usize {
        self.cell_formats.len()
    }

    /// Generate the complete styles.xml content.
    pub fn to_xml(&self) -> Result<String, std::fmt::Error> {
        let mut xml = String::with_capacity(1536);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(xml, r#"<styleSheet xmlns="{}">"#, namespace::SML_MAIN)?;

        // Write fonts
        write!(xml, r#"<fonts count="{}">"#, self.fonts.len())?;
        for font in &self.fonts {
            xml.push_str("<font>");
            if font.bold {
                xml.push_str("<b/>");
            }
            xml.push_str(r#"<sz val="11"/><color theme="1"/><name val="Calibri"/><family val="2"/><scheme val="minor"/></font>"#);
        }
        xml.push_str("</fonts>");

        // Default fills (required by Excel - must be first two)
        xml.push_str(r#"<fills count="2"><fill><patternFill patternType="none"/></fill><fill><patternFill patternType="gray125"/></fill></fills>"#);

        // Default border (required by Excel)
        xml.push_str(r#"<borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders>"#);

        // Write cell style XFs (required, even if empty)
        xml.push_str(r#"<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>"#);

        // Write cell XFs (the actual cell formats)
        write!(xml, r#"<cellXfs count="{}">"#, self.cell_formats.len())?;
        for font_id in &self.cell_formats {
            write!(
                xml,
                r#"<xf numFmtId="0" fontId="{}" fillId="0" borderId="0" xfId="0""#,
                font_id
            )?;
            if *font_id != 0 {
                xml.push_str(r#" applyFont="1""#);
            }
            xml.push_str("/>");
        }
        xml.push_str("</cellXfs>");

        xml.push_str(r#"<cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles>"#);
        xml.push_str("</styleSheet>");

        Ok(xml)
    }
}

impl Default for StylesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
