//! Closed set of export formats.
use crate::common::Error;
use crate::ooxml::opc::constants::content_type as ct;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Title used in file names when the caller's title is empty.
pub const DEFAULT_FILE_STEM: &str = "export";

/// Output format of an export call.
///
/// Parsed from and serialized as kebab-case selectors:
///
/// ```rust
/// use tabula::export::ExportFormat;
///
/// let format: ExportFormat = "native-spreadsheet".parse().unwrap();
/// assert_eq!(format, ExportFormat::NativeSpreadsheet);
/// assert_eq!(format.extension(), "xlsx");
/// assert!("csv".parse::<ExportFormat>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    /// Paginated print document, rendered externally as PDF
    PrintDocument,
    /// Legacy flat spreadsheet (`.xls`), rendered externally
    FlatSpreadsheet,
    /// Native `.xlsx` workbook
    NativeSpreadsheet,
    /// Word-processing `.docx` document
    WordDocument,
    /// Print-optimized PDF, rendered externally
    PrintOptimized,
}

impl ExportFormat {
    /// Every supported format.
    pub const ALL: [ExportFormat; 5] = [
        ExportFormat::PrintDocument,
        ExportFormat::FlatSpreadsheet,
        ExportFormat::NativeSpreadsheet,
        ExportFormat::WordDocument,
        ExportFormat::PrintOptimized,
    ];

    /// Selector string accepted by [`FromStr`].
    pub const fn selector(self) -> &'static str {
        match self {
            Self::PrintDocument => "print-document",
            Self::FlatSpreadsheet => "flat-spreadsheet",
            Self::NativeSpreadsheet => "native-spreadsheet",
            Self::WordDocument => "word-document",
            Self::PrintOptimized => "print-optimized",
        }
    }

    /// File extension without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::PrintDocument | Self::PrintOptimized => "pdf",
            Self::FlatSpreadsheet => "xls",
            Self::NativeSpreadsheet => "xlsx",
            Self::WordDocument => "docx",
        }
    }

    /// MIME type of the produced bytes.
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::PrintDocument | Self::PrintOptimized => ct::PDF,
            Self::FlatSpreadsheet => ct::XLS,
            Self::NativeSpreadsheet => ct::SML_SHEET,
            Self::WordDocument => ct::WML_DOCUMENT,
        }
    }

    /// Whether the bytes come from the external report renderer.
    pub const fn is_rendered(self) -> bool {
        matches!(
            self,
            Self::PrintDocument | Self::PrintOptimized | Self::FlatSpreadsheet
        )
    }

    /// Suggested file name, `{title}_{yyyyMMdd}[_print].{ext}`.
    pub fn filename(self, title: &str, date: NaiveDate) -> String {
        let suffix = match self {
            Self::PrintOptimized => "_print",
            _ => "",
        };
        format!(
            "{}_{}{}.{}",
            sanitize_file_stem(title),
            date.format("%Y%m%d"),
            suffix,
            self.extension()
        )
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.selector().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| Error::UnsupportedFormat(s.to_string()))
    }
}

/// Replace characters file systems reject; an empty title becomes `export`.
pub fn sanitize_file_stem(title: &str) -> String {
    let cleaned: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    if cleaned.is_empty() {
        DEFAULT_FILE_STEM.to_string()
    } else {
        cleaned
    }
}
