//! Per-call export configuration.
use crate::table::ParameterSet;
use chrono::{DateTime, FixedOffset, Local};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Data source name used when none is configured.
pub const DEFAULT_DATA_SOURCE: &str = "DataSet1";

fn default_data_source() -> String {
    DEFAULT_DATA_SOURCE.to_string()
}

fn default_true() -> bool {
    true
}

/// Options of one export call.
///
/// Every field has a default, so hosts can deserialize a partial
/// configuration and fill in the rest per call.
///
/// # Examples
///
/// ```rust
/// use tabula::export::ExportOptions;
///
/// let options = ExportOptions::new()
///     .with_title("Quarterly Sales")
///     .with_sheet_name("Q3")
///     .with_parameter("Region", "North");
///
/// assert_eq!(options.data_source_name, "DataSet1");
/// assert_eq!(options.parameters.get("Region"), Some("North"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Document title, also the file name stem
    pub title: String,
    /// Spreadsheet sheet name; the title is used when unset
    pub sheet_name: Option<String>,
    /// Prefix lines printed above the table
    pub parameters: ParameterSet,
    /// Call timestamp; the local time at export when unset
    pub timestamp: Option<DateTime<FixedOffset>>,
    /// Report definition handed to the external renderer
    pub report_path: Option<PathBuf>,
    /// Data source the report definition binds the table to
    #[serde(default = "default_data_source")]
    pub data_source_name: String,
    /// Freeze the spreadsheet header row
    #[serde(default = "default_true")]
    pub freeze_header: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            sheet_name: None,
            parameters: ParameterSet::new(),
            timestamp: None,
            report_path: None,
            data_source_name: default_data_source(),
            freeze_header: true,
        }
    }
}

impl ExportOptions {
    /// Create options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the sheet name.
    pub fn with_sheet_name(mut self, sheet_name: impl Into<String>) -> Self {
        self.sheet_name = Some(sheet_name.into());
        self
    }

    /// Replace all parameters.
    pub fn with_parameters(mut self, parameters: ParameterSet) -> Self {
        self.parameters = parameters;
        self
    }

    /// Add one parameter.
    pub fn with_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name, value);
        self
    }

    /// Pin the call timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<FixedOffset>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Set the report definition path.
    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = Some(path.into());
        self
    }

    /// Set the report data source name.
    pub fn with_data_source_name(mut self, name: impl Into<String>) -> Self {
        self.data_source_name = name.into();
        self
    }

    /// Set whether the spreadsheet header row stays visible while scrolling.
    pub fn with_freeze_header(mut self, freeze: bool) -> Self {
        self.freeze_header = freeze;
        self
    }

    /// The configured timestamp, or the current local time.
    pub fn resolve_timestamp(&self) -> DateTime<FixedOffset> {
        self.timestamp
            .unwrap_or_else(|| Local::now().fixed_offset())
    }

    /// The configured report path, if any.
    pub fn report_path(&self) -> Option<&Path> {
        self.report_path.as_deref()
    }
}
