/// Table types and implementation for DOCX documents.
use crate::common::Result;
use crate::common::xml::escape_xml;
use std::fmt::Write as FmtWrite;

pub use super::super::format::TableBorderStyle;
use super::paragraph::MutableParagraph;

/// Border definition for a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBorder {
    /// Border style
    pub style: TableBorderStyle,
    /// Border width in eighths of a point (e.g., 8 = 1pt, 24 = 3pt)
    pub size: u32,
    /// Border color in hex RGB format (e.g., "FF0000" for red)
    pub color: String,
}

impl Default for TableBorder {
    fn default() -> Self {
        Self {
            style: TableBorderStyle::Single,
            size: 4,
            color: "000000".to_string(),
        }
    }
}

/// Table borders (all sides).
#[derive(Debug, Clone, Default)]
pub struct TableBorders {
    pub top: Option<TableBorder>,
    pub left: Option<TableBorder>,
    pub bottom: Option<TableBorder>,
    pub right: Option<TableBorder>,
    pub inside_h: Option<TableBorder>,
    pub inside_v: Option<TableBorder>,
}

impl TableBorders {
    /// Borders in schema order with their element names.
    fn sides(&self) -> [(&'static str, &Option<TableBorder>); 6] {
        [
            ("top", &self.top),
            ("left", &self.left),
            ("bottom", &self.bottom),
            ("right", &self.right),
            ("insideH", &self.inside_h),
            ("insideV", &self.inside_v),
        ]
    }
}

/// Table properties.
#[derive(Debug, Default)]
pub(crate) struct TableProperties {
    pub(crate) style: Option<String>,
    pub(crate) borders: TableBorders,
    /// Width in fiftieths of a percent
    pub(crate) width_pct: Option<u32>,
}

/// A mutable table.
#[derive(Debug, Default)]
pub struct MutableTable {
    /// Table rows
    pub(crate) rows: Vec<MutableRow>,
    /// Table properties
    pub(crate) properties: TableProperties,
}

impl MutableTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a row holding one cell per text.
    pub fn add_row<I, S>(&mut self, texts: I) -> &mut MutableRow
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut row = MutableRow::default();
        for text in texts {
            row.add_cell().set_text(text.as_ref());
        }
        let index = self.rows.len();
        self.rows.push(row);
        &mut self.rows[index]
    }

    /// Set table width as percentage of the text area (1-100).
    pub fn set_width_percent(&mut self, percent: u32) {
        self.properties.width_pct = Some(percent.min(100) * 50);
    }

    /// Set the table style.
    pub fn set_style(&mut self, style_id: &str) {
        self.properties.style = Some(style_id.to_string());
    }

    /// Set all table borders at once.
    pub fn set_borders(&mut self, border: TableBorder) {
        self.properties.borders = TableBorders {
            top: Some(border.clone()),
            left: Some(border.clone()),
            bottom: Some(border.clone()),
            right: Some(border.clone()),
            inside_h: Some(border.clone()),
            inside_v: Some(border),
        };
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of grid columns (widest row).
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(MutableRow::cell_count).max().unwrap_or(0)
    }

    fn write_border(xml: &mut String, name: &str, border: &TableBorder) -> Result<()> {
        write!(
            xml,
            "<w:{} w:val=\"{}\" w:sz=\"{}\" w:space=\"0\" w:color=\"{}\"/>",
            name,
            border.style.as_str(),
            border.size,
            border.color
        )?;
        Ok(())
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:tbl>");

        // Write table properties
        xml.push_str("<w:tblPr>");
        if let Some(ref style) = self.properties.style {
            write!(xml, "<w:tblStyle w:val=\"{}\"/>", escape_xml(style))?;
        }

        let width = self.properties.width_pct.unwrap_or(5000);
        write!(xml, "<w:tblW w:w=\"{}\" w:type=\"pct\"/>", width)?;

        // Unset sides fall back to the default single border
        let fallback = TableBorder::default();
        xml.push_str("<w:tblBorders>");
        for (name, border) in self.properties.borders.sides() {
            Self::write_border(xml, name, border.as_ref().unwrap_or(&fallback))?;
        }
        xml.push_str("</w:tblBorders>");
        xml.push_str("</w:tblPr>");

        // Write grid
        let columns = self.column_count();
        if columns > 0 {
            xml.push_str("<w:tblGrid>");
            for _ in 0..columns {
                xml.push_str("<w:gridCol/>");
            }
            xml.push_str("</w:tblGrid>");
        }

        for row in &self.rows {
            row.to_xml(xml)?;
        }

        xml.push_str("</w:tbl>");

        Ok(())
    }
}

/// A mutable table row.
#[derive(Debug, Default)]
pub struct MutableRow {
    /// Table cells in this row
    pub(crate) cells: Vec<MutableCell>,
    /// Repeat this row at the top of each page
    pub(crate) is_header: bool,
}

impl MutableRow {
    /// Add a new cell.
    pub fn add_cell(&mut self) -> &mut MutableCell {
        let index = self.cells.len();
        self.cells.push(MutableCell::new());
        &mut self.cells[index]
    }

    /// Get the number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Mark as header row: repeated on each page, text in bold.
    pub fn set_header(&mut self, is_header: bool) -> &mut Self {
        self.is_header = is_header;
        for cell in &mut self.cells {
            for para in &mut cell.paragraphs {
                for run in &mut para.runs {
                    run.bold(is_header);
                }
            }
        }
        self
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:tr>");

        if self.is_header {
            xml.push_str("<w:trPr><w:tblHeader/></w:trPr>");
        }

        for cell in &self.cells {
            cell.to_xml(xml)?;
        }

        xml.push_str("</w:tr>");

        Ok(())
    }
}

/// A mutable table cell.
#[derive(Debug)]
pub struct MutableCell {
    /// Paragraphs in this cell
    pub(crate) paragraphs: Vec<MutableParagraph>,
}

impl MutableCell {
    pub(crate) fn new() -> Self {
        Self {
            paragraphs: vec![MutableParagraph::new()],
        }
    }

    /// Set text in the first paragraph.
    pub fn set_text(&mut self, text: &str) {
        let mut para = MutableParagraph::new();
        para.add_run_with_text(text);
        self.paragraphs = vec![para];
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:tc>");

        // A cell must end with a paragraph
        if self.paragraphs.is_empty() {
            xml.push_str("<w:p/>");
        }
        for para in &self.paragraphs {
            para.to_xml(xml)?;
        }

        xml.push_str("</w:tc>");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_borders_are_uniform() {
        let mut table = MutableTable::new();
        table.add_row(["a", "b"]);

        let mut xml = String::new();
        table.to_xml(&mut xml).unwrap();

        for side in ["top", "left", "bottom", "right", "insideH", "insideV"] {
            let expected = format!(
                "<w:{} w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"000000\"/>",
                side
            );
            assert!(xml.contains(&expected), "missing {}", side);
        }
        assert!(xml.contains("<w:tblGrid><w:gridCol/><w:gridCol/></w:tblGrid>"));
    }

    #[test]
    fn test_header_row() {
        let mut table = MutableTable::new();
        table.add_row(["Name"]).set_header(true);
        table.add_row(["x"]);
        table.set_width_percent(100);

        let mut xml = String::new();
        table.to_xml(&mut xml).unwrap();

        assert!(xml.contains(r#"<w:tblW w:w="5000" w:type="pct"/>"#));
        assert!(xml.contains("<w:tr><w:trPr><w:tblHeader/></w:trPr><w:tc><w:p><w:r><w:rPr><w:b/></w:rPr>"));
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_custom_border() {
        let mut table = MutableTable::new();
        table.set_borders(TableBorder {
            style: TableBorderStyle::Single,
            size: 8,
            color: "FF0000".into(),
        });
        table.add_row([""]);

        let mut xml = String::new();
        table.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<w:insideV w:val="single" w:sz="8" w:space="0" w:color="FF0000"/>"#));
    }

    #[test]
    fn test_style_id_is_escaped() {
        let mut table = MutableTable::new();
        table.set_style("Grid & \"Lines\"");
        table.add_row(["x"]);

        let mut xml = String::new();
        table.to_xml(&mut xml).unwrap();
        assert!(xml.contains(r#"<w:tblStyle w:val="Grid &amp; &quot;Lines&quot;"/>"#));
    }
}
