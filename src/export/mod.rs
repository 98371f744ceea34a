//! Export dispatch.
//!
//! [`Exporter`] is the single entry point: it takes records, an
//! [`ExportFormat`] and [`ExportOptions`], runs the matching encoder (or the
//! external [`ReportRenderer`]) and always answers with an
//! [`ExportArtifact`]. Failures never escape as errors; they come back as a
//! failed artifact carrying the error message.

mod artifact;
mod dispatcher;
mod format;
mod options;
mod renderer;

pub use artifact::{ExportArtifact, UNKNOWN_CONTENT_TYPE};
pub use dispatcher::Exporter;
pub use format::{DEFAULT_FILE_STEM, ExportFormat, sanitize_file_stem};
pub use options::{DEFAULT_DATA_SOURCE, ExportOptions};
pub use renderer::{RenderKind, RenderRequest, ReportRenderer};
