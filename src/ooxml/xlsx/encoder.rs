//! Table to workbook encoders.
use super::writer::{CellFont, MutableWorkbookData};
use crate::common::{Error, Result};
use crate::ooxml::opc::CoreProperties;
use crate::schema::DynamicRow;
use crate::table::{ParameterSet, Table, project_dynamic};
use chrono::{DateTime, Utc};

/// Writes a [`Table`] into a single-sheet `.xlsx` package.
///
/// The sheet name is the configured name, else the title, else `Sheet1`.
#[derive(Debug, Clone)]
pub struct FlatSpreadsheetEncoder {
    title: String,
    sheet_name: Option<String>,
    created: DateTime<Utc>,
    freeze_header: bool,
}

impl FlatSpreadsheetEncoder {
    /// Create an encoder for a workbook titled `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            sheet_name: None,
            created: DateTime::<Utc>::UNIX_EPOCH,
            freeze_header: true,
        }
    }

    /// Set the sheet name.
    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = Some(sheet_name.into());
        self
    }

    /// Set the timestamp recorded in the document properties.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    /// Keep the header row visible while scrolling (default: on).
    pub fn with_freeze_header(mut self, freeze_header: bool) -> Self {
        self.freeze_header = freeze_header;
        self
    }

    /// Name the sheet will be written under, before sanitizing.
    fn sheet_name(&self) -> &str {
        match self.sheet_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => &self.title,
        }
    }

    /// Encode `table` with `parameters` as prefix lines.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if the package cannot be assembled or comes
    /// out empty.
    pub fn encode(&self, table: &Table, parameters: &ParameterSet) -> Result<Vec<u8>> {
        let mut workbook = MutableWorkbookData::new(self.sheet_name());
        let header_style = workbook.add_cell_format(CellFont { bold: true });
        let sheet = workbook.worksheet_mut();

        for line in parameters.lines() {
            sheet.append_row([line], None);
        }
        if !parameters.is_empty() {
            sheet.append_blank_row();
        }

        if !table.columns().is_empty() {
            let header_row = sheet.append_row(table.columns().iter(), Some(header_style));
            if self.freeze_header {
                sheet.freeze_panes(header_row);
            }
        }

        for row in table.ordered_rows() {
            sheet.append_row(row, None);
        }

        let row_count = workbook.worksheet().rows().len();
        let bytes = workbook.save_to_bytes(&CoreProperties {
            title: &self.title,
            created: self.created,
        })?;

        if bytes.is_empty() {
            return Err(Error::Encoding("spreadsheet encoder produced no content".into()));
        }

        tracing::debug!(
            sheet = workbook.worksheet().name(),
            rows = row_count,
            bytes = bytes.len(),
            "spreadsheet encoded"
        );
        Ok(bytes)
    }
}

/// Writes heterogeneous rows into a single-sheet `.xlsx` package.
///
/// The header is the union of all row keys in first-seen order; a row missing
/// a column gets an empty cell there. Without rows there is no header.
#[derive(Debug, Clone)]
pub struct DynamicSpreadsheetEncoder {
    inner: FlatSpreadsheetEncoder,
}

impl DynamicSpreadsheetEncoder {
    /// Create an encoder for a workbook titled `title`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            inner: FlatSpreadsheetEncoder::new(title),
        }
    }

    /// Wrap a configured flat encoder.
    pub fn from_flat(inner: FlatSpreadsheetEncoder) -> Self {
        Self { inner }
    }

    /// Encode `rows` with `parameters` as prefix lines.
    pub fn encode(&self, rows: &[DynamicRow], parameters: &ParameterSet) -> Result<Vec<u8>> {
        self.inner.encode(&project_dynamic(rows), parameters)
    }
}
