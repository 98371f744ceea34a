//! Workbook data structure for XLSX.
use super::sheet::MutableWorksheet;
use super::strings::MutableSharedStrings;
use super::styles::{CellFont, StylesBuilder};
use crate::common::Result;
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::{content_type as ct, namespace, relationship_type as rt};
use crate::ooxml::opc::props::app_properties_xml;
use crate::ooxml::opc::{CoreProperties, PackageWriter, Relationships};
use std::fmt::Write as FmtWrite;

/// Mutable single-sheet workbook.
///
/// Owns the worksheet, the shared strings table and the stylesheet; the
/// package is assembled in one pass by [`MutableWorkbookData::save_to_bytes`].
#[derive(Debug)]
pub struct MutableWorkbookData {
    /// The only worksheet
    worksheet: MutableWorksheet,
    /// Styles used by the worksheet
    styles: StylesBuilder,
}

impl MutableWorkbookData {
    /// Create a workbook whose worksheet is named `sheet_name` (sanitized).
    pub fn new(sheet_name: &str) -> Self {
        Self {
            worksheet: MutableWorksheet::new(sheet_name, 1),
            styles: StylesBuilder::new(),
        }
    }

    /// Get the worksheet.
    pub fn worksheet(&self) -> &MutableWorksheet {
        &self.worksheet
    }

    /// Get the worksheet for writing.
    pub fn worksheet_mut(&mut self) -> &mut MutableWorksheet {
        &mut self.worksheet
    }

    /// Register a cell format and return its style index.
    pub fn add_cell_format(&mut self, font: CellFont) -> usize {
        self.styles.add_cell_format(font)
    }

    /// Generate workbook.xml content.
    pub fn generate_workbook_xml(&self, worksheet_rel_id: &str) -> Result<String> {
        let mut xml = String::with_capacity(512);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<workbook xmlns="{}" xmlns:r="{}">"#,
            namespace::SML_MAIN,
            namespace::OFC_RELATIONSHIPS
        )?;
        xml.push_str(r#"<bookViews><workbookView activeTab="0"/></bookViews>"#);
        xml.push_str("<sheets>");
        write!(
            xml,
            r#"<sheet name="{}" sheetId="{}" r:id="{}"/>"#,
            escape_xml(self.worksheet.name()),
            self.worksheet.sheet_id(),
            worksheet_rel_id
        )?;
        xml.push_str("</sheets>");
        xml.push_str("</workbook>");

        Ok(xml)
    }

    /// Serialize the workbook into an `.xlsx` package.
    pub fn save_to_bytes(&self, props: &CoreProperties<'_>) -> Result<Vec<u8>> {
        let mut shared_strings = MutableSharedStrings::new();
        let sheet_xml = self.worksheet.to_xml(&mut shared_strings)?;

        let mut package_rels = Relationships::new();
        package_rels.add(rt::OFFICE_DOCUMENT, "xl/workbook.xml");
        package_rels.add(rt::CORE_PROPERTIES, "docProps/core.xml");
        package_rels.add(rt::EXTENDED_PROPERTIES, "docProps/app.xml");

        let mut workbook_rels = Relationships::new();
        let sheet_rel_id = workbook_rels.add(rt::WORKSHEET, "worksheets/sheet1.xml");
        workbook_rels.add(rt::STYLES, "styles.xml");
        workbook_rels.add(rt::SHARED_STRINGS, "sharedStrings.xml");

        let mut writer = PackageWriter::new();
        writer.add_rels("/_rels/.rels", &package_rels)?;
        writer.add_part(
            "/xl/workbook.xml",
            ct::SML_SHEET_MAIN,
            self.generate_workbook_xml(&sheet_rel_id)?.into_bytes(),
        );
        writer.add_rels("/xl/_rels/workbook.xml.rels", &workbook_rels)?;
        writer.add_part(
            "/xl/worksheets/sheet1.xml",
            ct::SML_WORKSHEET,
            sheet_xml.into_bytes(),
        );
        writer.add_part(
            "/xl/styles.xml",
            ct::SML_STYLES,
            self.styles.to_xml()?.into_bytes(),
        );
        writer.add_part(
            "/xl/sharedStrings.xml",
            ct::SML_SHARED_STRINGS,
            shared_strings.to_xml()?.into_bytes(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::read_part;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_workbook_package_parts() {
        let mut wb = MutableWorkbookData::new("Sales & Costs");
        let bold = wb.add_cell_format(CellFont { bold: true });
        wb.worksheet_mut().append_row(["A", "B"], Some(bold));

        let props = CoreProperties {
            title: "Sales",
            created: Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap(),
        };
        let bytes = wb.save_to_bytes(&props).unwrap();

        let workbook = read_part(&bytes, "xl/workbook.xml");
        assert!(workbook.contains(r#"<sheet name="Sales &amp; Costs" sheetId="1" r:id="rId1"/>"#));

        let rels = read_part(&bytes, "xl/_rels/workbook.xml.rels");
        assert!(rels.contains(r#"Target="worksheets/sheet1.xml""#));

        let content_types = read_part(&bytes, "[Content_Types].xml");
        assert!(content_types.contains(r#"<Override PartName="/xl/worksheets/sheet1.xml""#));
        assert!(read_part(&bytes, "xl/sharedStrings.xml").contains(r#"uniqueCount="2""#));
    }
}
