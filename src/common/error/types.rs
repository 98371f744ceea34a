//! Error taxonomy for export operations.
use thiserror::Error;

/// Main error type for export operations.
#[derive(Error, Debug)]
pub enum Error {
    /// The record schema yields no usable columns
    #[error("Introspection error: {0}")]
    Introspection(String),

    /// Failure while writing archive parts
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// The external report renderer failed
    #[error("Renderer error: {0}")]
    Renderer(#[from] RendererError),

    /// Format selector outside the supported set
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Encoder disabled at compile time
    #[error("Feature '{0}' is disabled. Enable it with --features {0}")]
    FeatureDisabled(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reported by a [`ReportRenderer`](crate::export::ReportRenderer).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RendererError {
    /// No renderer was configured on the exporter
    #[error("no report renderer is configured")]
    NotConfigured,

    /// The report definition could not be located
    #[error("report definition not found: {0}")]
    TemplateNotFound(String),

    /// The supplied table does not match the data source the report expects
    #[error("data source mismatch: {0}")]
    DataSourceMismatch(String),

    /// The renderer returned without producing any bytes
    #[error("renderer produced no content")]
    EmptyOutput,

    /// Any other renderer failure
    #[error("{0}")]
    Failed(String),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, Error>;
