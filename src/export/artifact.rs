//! Export results.
use serde::Serialize;

/// Content type reported when the requested format itself was not recognized.
pub const UNKNOWN_CONTENT_TYPE: &str = "application/octet-stream";

/// Outcome of one export call.
///
/// A successful artifact carries the complete file; a failed one carries no
/// bytes, the content type and file name the caller asked for, and a message
/// describing the failure. Artifacts are only built by the
/// [`Exporter`](super::Exporter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportArtifact {
    #[serde(skip)]
    content: Vec<u8>,
    content_type: &'static str,
    filename: String,
    success: bool,
    message: Option<String>,
}

impl ExportArtifact {
    pub(crate) fn succeeded(content: Vec<u8>, content_type: &'static str, filename: String) -> Self {
        Self {
            content,
            content_type,
            filename,
            success: true,
            message: None,
        }
    }

    pub(crate) fn failed(content_type: &'static str, filename: String, message: String) -> Self {
        Self {
            content: Vec::new(),
            content_type,
            filename,
            success: false,
            message: Some(message),
        }
    }

    /// File bytes; empty for a failed export.
    #[inline]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Take ownership of the file bytes.
    pub fn into_content(self) -> Vec<u8> {
        self.content
    }

    /// MIME type of the content.
    #[inline]
    pub fn content_type(&self) -> &str {
        self.content_type
    }

    /// Suggested download file name.
    #[inline]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Whether the export produced a file.
    #[inline]
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Failure description, if the export failed.
    #[inline]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Size of the content in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Whether there is no content.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
