//! The export entry point.
use super::artifact::{ExportArtifact, UNKNOWN_CONTENT_TYPE};
use super::format::{ExportFormat, sanitize_file_stem};
use super::options::ExportOptions;
use super::renderer::{RenderKind, RenderRequest, ReportRenderer};
use crate::common::{Error, RendererError, Result};
use crate::schema::{DynamicRow, Record, RecordSchema, Schema};
use crate::table::{Table, project_dynamic, project_with};
use chrono::{DateTime, FixedOffset};
use std::fmt;
use std::sync::Arc;

#[cfg(any(feature = "xlsx", feature = "docx"))]
use chrono::Utc;
#[cfg(feature = "docx")]
use crate::ooxml::docx::DocumentEncoder;
#[cfg(feature = "xlsx")]
use crate::ooxml::xlsx::{DynamicSpreadsheetEncoder, FlatSpreadsheetEncoder};

type SharedRenderer = Arc<dyn ReportRenderer + Send + Sync>;

/// Converts record collections into file artifacts.
///
/// Every call is independent: the exporter holds nothing but the optional
/// report renderer, so one instance can serve concurrent callers. No call
/// returns an error or panics on bad input; failures come back as an
/// [`ExportArtifact`] with [`is_success`](ExportArtifact::is_success) false.
///
/// # Examples
///
/// ```rust
/// use tabula::export::{ExportFormat, ExportOptions, Exporter};
///
/// tabula::tabular_record! {
///     pub struct Score {
///         #[column("Name")]
///         pub name: String,
///         #[column("Score")]
///         pub score: i64,
///     }
/// }
///
/// let scores = vec![
///     Score { name: "A".into(), score: 10 },
///     Score { name: "B".into(), score: 20 },
/// ];
///
/// let artifact = Exporter::new().export(
///     &scores,
///     ExportFormat::NativeSpreadsheet,
///     &ExportOptions::new().with_title("Scores"),
/// );
///
/// assert!(artifact.is_success());
/// assert!(artifact.filename().starts_with("Scores_"));
/// assert!(artifact.filename().ends_with(".xlsx"));
/// ```
#[derive(Clone, Default)]
pub struct Exporter {
    renderer: Option<SharedRenderer>,
}

impl fmt::Debug for Exporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Exporter")
            .field("renderer", &self.renderer.as_ref().map(|_| "ReportRenderer"))
            .finish()
    }
}

impl Exporter {
    /// Create an exporter without a report renderer.
    ///
    /// Rendered formats ([`ExportFormat::is_rendered`]) then always fail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exporter backed by `renderer`.
    pub fn with_renderer<R>(renderer: R) -> Self
    where
        R: ReportRenderer + Send + Sync + 'static,
    {
        Self {
            renderer: Some(Arc::new(renderer)),
        }
    }

    /// Whether a report renderer is configured.
    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    /// Export typed records through their [`Record`] descriptor.
    pub fn export<T: Record>(
        &self,
        records: &[T],
        format: ExportFormat,
        options: &ExportOptions,
    ) -> ExportArtifact {
        self.export_with(records, &RecordSchema::<T>::new(), format, options)
    }

    /// Export typed records through an explicit schema such as a
    /// [`ColumnMap`](crate::schema::ColumnMap).
    pub fn export_with<T, S: Schema<T> + ?Sized>(
        &self,
        records: &[T],
        schema: &S,
        format: ExportFormat,
        options: &ExportOptions,
    ) -> ExportArtifact {
        let timestamp = options.resolve_timestamp();
        let result = project_with(records, schema)
            .and_then(|table| self.encode_table(&table, format, options, timestamp));
        Self::finish(format, options, timestamp, result)
    }

    /// Export heterogeneous rows; the header is the union of their keys.
    pub fn export_dynamic(
        &self,
        rows: &[DynamicRow],
        format: ExportFormat,
        options: &ExportOptions,
    ) -> ExportArtifact {
        let timestamp = options.resolve_timestamp();
        let result = self.encode_dynamic(rows, format, options, timestamp);
        Self::finish(format, options, timestamp, result)
    }

    /// [`Exporter::export`] with the format given as a selector string.
    pub fn export_selector<T: Record>(
        &self,
        records: &[T],
        selector: &str,
        options: &ExportOptions,
    ) -> ExportArtifact {
        match selector.parse() {
            Ok(format) => self.export(records, format, options),
            Err(err) => Self::unsupported(err, options),
        }
    }

    /// [`Exporter::export_dynamic`] with the format given as a selector string.
    pub fn export_dynamic_selector(
        &self,
        rows: &[DynamicRow],
        selector: &str,
        options: &ExportOptions,
    ) -> ExportArtifact {
        match selector.parse() {
            Ok(format) => self.export_dynamic(rows, format, options),
            Err(err) => Self::unsupported(err, options),
        }
    }

    fn encode_dynamic(
        &self,
        rows: &[DynamicRow],
        format: ExportFormat,
        options: &ExportOptions,
        timestamp: DateTime<FixedOffset>,
    ) -> Result<Vec<u8>> {
        match format {
            ExportFormat::NativeSpreadsheet => self.dynamic_spreadsheet(rows, options, timestamp),
            _ => self.encode_table(&project_dynamic(rows), format, options, timestamp),
        }
    }

    fn encode_table(
        &self,
        table: &Table,
        format: ExportFormat,
        options: &ExportOptions,
        timestamp: DateTime<FixedOffset>,
    ) -> Result<Vec<u8>> {
        match format {
            ExportFormat::PrintDocument | ExportFormat::PrintOptimized => {
                self.render(table, RenderKind::Pdf, options)
            },
            ExportFormat::FlatSpreadsheet => self.render(table, RenderKind::Excel, options),
            ExportFormat::NativeSpreadsheet => self.flat_spreadsheet(table, options, timestamp),
            ExportFormat::WordDocument => self.document(table, options, timestamp),
        }
    }

    fn render(&self, table: &Table, kind: RenderKind, options: &ExportOptions) -> Result<Vec<u8>> {
        let renderer = self.renderer.as_deref().ok_or(RendererError::NotConfigured)?;
        let report_path = options.report_path().ok_or_else(|| {
            RendererError::TemplateNotFound("no report definition path was supplied".into())
        })?;

        let mut parameters = options.parameters.clone();
        parameters.insert("Title", options.title.as_str());

        let request = RenderRequest {
            report_path,
            data_source_name: &options.data_source_name,
            table,
            parameters: &parameters,
            kind,
        };

        tracing::debug!(
            kind = %kind,
            report = %report_path.display(),
            rows = table.row_count(),
            "invoking report renderer"
        );
        let bytes = renderer.render(&request)?;
        if bytes.is_empty() {
            return Err(RendererError::EmptyOutput.into());
        }
        Ok(bytes)
    }

    #[cfg(feature = "xlsx")]
    fn spreadsheet_encoder(
        options: &ExportOptions,
        timestamp: DateTime<FixedOffset>,
    ) -> FlatSpreadsheetEncoder {
        let encoder = FlatSpreadsheetEncoder::new(options.title.as_str())
            .with_created(timestamp.with_timezone(&Utc))
            .with_freeze_header(options.freeze_header);
        match options.sheet_name.as_deref() {
            Some(name) => encoder.with_sheet_name(name),
            None => encoder,
        }
    }

    #[cfg(feature = "xlsx")]
    fn flat_spreadsheet(
        &self,
        table: &Table,
        options: &ExportOptions,
        timestamp: DateTime<FixedOffset>,
    ) -> Result<Vec<u8>> {
        Self::spreadsheet_encoder(options, timestamp).encode(table, &options.parameters)
    }

    #[cfg(feature = "xlsx")]
    fn dynamic_spreadsheet(
        &self,
        rows: &[DynamicRow],
        options: &ExportOptions,
        timestamp: DateTime<FixedOffset>,
    ) -> Result<Vec<u8>> {
        DynamicSpreadsheetEncoder::from_flat(Self::spreadsheet_encoder(options, timestamp))
            .encode(rows, &options.parameters)
    }

    #[cfg(not(feature = "xlsx"))]
    fn flat_spreadsheet(
        &self,
        _table: &Table,
        _options: &ExportOptions,
        _timestamp: DateTime<FixedOffset>,
    ) -> Result<Vec<u8>> {
        Err(Error::FeatureDisabled("xlsx".into()))
    }

    #[cfg(not(feature = "xlsx"))]
    fn dynamic_spreadsheet(
        &self,
        _rows: &[DynamicRow],
        _options: &ExportOptions,
        _timestamp: DateTime<FixedOffset>,
    ) -> Result<Vec<u8>> {
        Err(Error::FeatureDisabled("xlsx".into()))
    }

    #[cfg(feature = "docx")]
    fn document(
        &self,
        table: &Table,
        options: &ExportOptions,
        timestamp: DateTime<FixedOffset>,
    ) -> Result<Vec<u8>> {
        DocumentEncoder::new()
            .with_created(timestamp.with_timezone(&Utc))
            .encode(table, &options.title, &options.parameters)
    }

    #[cfg(not(feature = "docx"))]
    fn document(
        &self,
        _table: &Table,
        _options: &ExportOptions,
        _timestamp: DateTime<FixedOffset>,
    ) -> Result<Vec<u8>> {
        Err(Error::FeatureDisabled("docx".into()))
    }

    /// Fold a pipeline result into an artifact.
    fn finish(
        format: ExportFormat,
        options: &ExportOptions,
        timestamp: DateTime<FixedOffset>,
        result: Result<Vec<u8>>,
    ) -> ExportArtifact {
        let filename = format.filename(&options.title, timestamp.date_naive());
        let result = result.and_then(|bytes| {
            if bytes.is_empty() {
                Err(Error::Encoding(format!("{} export produced no content", format)))
            } else {
                Ok(bytes)
            }
        });

        match result {
            Ok(bytes) => {
                tracing::info!(
                    format = %format,
                    filename = %filename,
                    bytes = bytes.len(),
                    "export succeeded"
                );
                ExportArtifact::succeeded(bytes, format.content_type(), filename)
            },
            Err(err) => {
                tracing::warn!(format = %format, filename = %filename, error = %err, "export failed");
                ExportArtifact::failed(format.content_type(), filename, err.to_string())
            },
        }
    }

    /// Artifact for a selector outside the supported set.
    fn unsupported(err: Error, options: &ExportOptions) -> ExportArtifact {
        let filename = format!(
            "{}_{}",
            sanitize_file_stem(&options.title),
            options.resolve_timestamp().format("%Y%m%d")
        );
        tracing::warn!(error = %err, "export failed");
        ExportArtifact::failed(UNKNOWN_CONTENT_TYPE, filename, err.to_string())
    }
}
