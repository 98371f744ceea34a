//! External report renderer seam.
//!
//! Print documents and legacy `.xls` spreadsheets are produced by a report
//! engine outside this crate. The [`Exporter`](super::Exporter) hands it the
//! projected table and a report definition and accepts whatever bytes come
//! back, as long as there are some.
use crate::common::RendererError;
use crate::table::{ParameterSet, Table};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Output kind requested from the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RenderKind {
    Pdf,
    Excel,
}

impl RenderKind {
    /// Wire name understood by report engines.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Excel => "EXCEL",
        }
    }
}

impl fmt::Display for RenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a renderer receives for one call.
#[derive(Debug, Clone, Copy)]
pub struct RenderRequest<'a> {
    /// Report definition location
    pub report_path: &'a Path,
    /// Data source the table is bound to
    pub data_source_name: &'a str,
    /// Projected records
    pub table: &'a Table,
    /// Caller parameters plus `Title`
    pub parameters: &'a ParameterSet,
    /// Requested output
    pub kind: RenderKind,
}

/// A report engine producing print documents and legacy spreadsheets.
///
/// ```rust
/// use tabula::export::{Exporter, RenderRequest, ReportRenderer};
/// use tabula::RendererError;
///
/// struct Echo;
///
/// impl ReportRenderer for Echo {
///     fn render(&self, request: &RenderRequest<'_>) -> Result<Vec<u8>, RendererError> {
///         Ok(request.kind.as_str().as_bytes().to_vec())
///     }
/// }
///
/// let exporter = Exporter::with_renderer(Echo);
/// assert!(exporter.has_renderer());
/// ```
pub trait ReportRenderer {
    /// Render the request into file bytes.
    fn render(&self, request: &RenderRequest<'_>) -> Result<Vec<u8>, RendererError>;
}
