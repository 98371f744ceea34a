//! Worksheet writer.
//!
//! Rows are appended in display order and numbered as they arrive, so row
//! indices are strictly increasing from 1 with no gaps.

use super::strings::MutableSharedStrings;
use crate::common::Result;
use crate::ooxml::opc::constants::namespace;
use std::fmt::Write as FmtWrite;

/// Longest sheet name Excel accepts.
pub const MAX_SHEET_NAME_LEN: usize = 31;
/// Sheet name used when none survives sanitizing.
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Column width bounds, in characters.
const MIN_COLUMN_WIDTH: usize = 8;
const MAX_COLUMN_WIDTH: usize = 60;

/// One row of text cells.
#[derive(Debug, Clone)]
pub struct SheetRow {
    /// 1-based row index
    index: u32,
    /// Cell texts in column order, starting at column A
    cells: Vec<String>,
    /// Style index applied to every cell of the row
    style: Option<usize>,
}

impl SheetRow {
    /// 1-based row index.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Cell texts.
    pub fn cells(&self) -> &[String] {
        &self.cells
    }
}

/// Frozen rows at the top of the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreezePanes {
    /// Number of rows kept visible while scrolling
    pub freeze_rows: u32,
}

/// Mutable worksheet for writing.
#[derive(Debug)]
pub struct MutableWorksheet {
    /// Worksheet name
    name: String,
    /// Sheet ID
    sheet_id: u32,
    /// Rows in display order
    rows: Vec<SheetRow>,
    /// Frozen rows
    freeze_panes: Option<FreezePanes>,
}

impl MutableWorksheet {
    /// Create a new worksheet; the name is sanitized to Excel's rules.
    pub fn new(name: &str, sheet_id: u32) -> Self {
        Self {
            name: sanitize_sheet_name(name),
            sheet_id,
            rows: Vec::new(),
            freeze_panes: None,
        }
    }

    /// Get the worksheet name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the sheet ID.
    pub fn sheet_id(&self) -> u32 {
        self.sheet_id
    }

    /// Index the next appended row will receive.
    pub fn next_row_index(&self) -> u32 {
        self.rows.last().map_or(1, |r| r.index + 1)
    }

    /// Append a row of text cells and return its index.
    pub fn append_row<I, S>(&mut self, cells: I, style: Option<usize>) -> u32
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let index = self.next_row_index();
        self.rows.push(SheetRow {
            index,
            cells: cells.into_iter().map(Into::into).collect(),
            style,
        });
        index
    }

    /// Append a row without cells and return its index.
    pub fn append_blank_row(&mut self) -> u32 {
        self.append_row(std::iter::empty::<String>(), None)
    }

    /// Rows written so far.
    pub fn rows(&self) -> &[SheetRow] {
        &self.rows
    }

    /// Keep the first `freeze_rows` rows visible while scrolling.
    pub fn freeze_panes(&mut self, freeze_rows: u32) {
        self.freeze_panes = (freeze_rows > 0).then_some(FreezePanes { freeze_rows });
    }

    /// Used range as (last row, last column count), if any cell exists.
    fn used_range(&self) -> Option<(u32, usize)> {
        let max_col = self.rows.iter().map(|r| r.cells.len()).max()?;
        let last_row = self.rows.last()?.index;
        (max_col > 0).then_some((last_row, max_col))
    }

    /// Convert a 1-based column number to letters (1 -> A, 27 -> AA).
    pub fn column_to_letters(mut col: usize) -> String {
        let mut letters = Vec::new();
        while col > 0 {
            let rem = (col - 1) % 26;
            letters.push(b'A' + rem as u8);
            col = (col - 1) / 26;
        }
        letters.reverse();
        String::from_utf8(letters).unwrap_or_default()
    }

    /// Column widths derived from the longest text per column.
    ///
    /// Rows above the first styled row are skipped so prefix lines do not
    /// stretch column A.
    fn column_widths(&self) -> Vec<usize> {
        let start = self.rows.iter().position(|r| r.style.is_some()).unwrap_or(0);
        let mut widths: Vec<usize> = Vec::new();
        for row in &self.rows[start..] {
            for (col, text) in row.cells.iter().enumerate() {
                let width = (text.chars().count() + 2).clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH);
                match widths.get_mut(col) {
                    Some(w) => *w = (*w).max(width),
                    None => widths.push(width),
                }
            }
        }
        widths
    }

    /// Serialize the worksheet, registering every cell text in `shared_strings`.
    pub fn to_xml(&self, shared_strings: &mut MutableSharedStrings) -> Result<String> {
        let mut xml = String::with_capacity(1024 + self.rows.len() * 96);
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(
            xml,
            r#"<worksheet xmlns="{}" xmlns:r="{}">"#,
            namespace::SML_MAIN,
            namespace::OFC_RELATIONSHIPS
        )?;

        // Write sheet dimensions
        match self.used_range() {
            Some((last_row, last_col)) => write!(
                xml,
                r#"<dimension ref="A1:{}{}"/>"#,
                Self::column_to_letters(last_col),
                last_row
            )?,
            None => xml.push_str(r#"<dimension ref="A1"/>"#),
        }

        // Write sheet views (including freeze panes if set)
        xml.push_str(r#"<sheetViews><sheetView tabSelected="1" workbookViewId="0""#);
        if let Some(freeze) = self.freeze_panes {
            let top_left_cell = format!("A{}", freeze.freeze_rows + 1);
            write!(
                xml,
                r#"><pane ySplit="{}" topLeftCell="{}" activePane="bottomLeft" state="frozen"/><selection pane="bottomLeft" activeCell="{}" sqref="{}"/></sheetView>"#,
                freeze.freeze_rows, top_left_cell, top_left_cell, top_left_cell
            )?;
        } else {
            xml.push_str("/>");
        }
        xml.push_str("</sheetViews>");
        xml.push_str(r#"<sheetFormatPr defaultRowHeight="15"/>"#);

        // Write column widths
        let widths = self.column_widths();
        if !widths.is_empty() {
            xml.push_str("<cols>");
            for (i, width) in widths.iter().enumerate() {
                write!(
                    xml,
                    r#"<col min="{}" max="{}" width="{}" customWidth="1"/>"#,
                    i + 1,
                    i + 1,
                    width
                )?;
            }
            xml.push_str("</cols>");
        }

        // Write sheet data
        xml.push_str("<sheetData>");
        for row in &self.rows {
            self.write_row(&mut xml, row, shared_strings)?;
        }
        xml.push_str("</sheetData>");

        xml.push_str(r#"<pageMargins left="0.7" right="0.7" top="0.75" bottom="0.75" header="0.3" footer="0.3"/>"#);
        xml.push_str("</worksheet>");

        tracing::debug!(
            sheet = %self.name,
            rows = self.rows.len(),
            "worksheet serialized"
        );
        Ok(xml)
    }

    /// Write a single row to XML.
    fn write_row(
        &self,
        xml: &mut String,
        row: &SheetRow,
        shared_strings: &mut MutableSharedStrings,
    ) -> Result<()> {
        if row.cells.is_empty() {
            write!(xml, r#"<row r="{}"/>"#, row.index)?;
            return Ok(());
        }

        write!(xml, r#"<row r="{}">"#, row.index)?;

        // Helper to add style attribute if present
        let style_attr = match row.style {
            Some(idx) if idx != 0 => format!(r#" s="{}""#, idx),
            _ => String::new(),
        };

        for (col, text) in row.cells.iter().enumerate() {
            let string_index = shared_strings.add_string(text);
            write!(
                xml,
                r#"<c r="{}{}"{} t="s"><v>{}</v></c>"#,
                Self::column_to_letters(col + 1),
                row.index,
                style_attr,
                string_index
            )?;
        }

        xml.push_str("</row>");
        Ok(())
    }
}

/// Make `name` acceptable as an Excel sheet name.
///
/// The characters `[ ] : * ? / \` become `_`, surrounding apostrophes are
/// removed, and the result is cut to 31 characters. An empty result falls back
/// to `Sheet1`.
pub fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let trimmed: String = cleaned
        .trim()
        .trim_matches('\'')
        .chars()
        .take(MAX_SHEET_NAME_LEN)
        .collect();

    if trimmed.trim().is_empty() {
        DEFAULT_SHEET_NAME.to_string()
    } else {
        trimmed
    }
}
