//! Tabula - multi-format tabular export for Rust
//!
//! This library turns in-memory record collections into downloadable files:
//! native spreadsheets (.xlsx), word-processing documents (.docx), and print
//! documents or legacy spreadsheets produced by an external report engine.
//!
//! # Features
//!
//! - **Typed records**: column headers come from a compile-time descriptor
//!   generated by [`tabular_record!`] or from an explicit [`schema::ColumnMap`]
//! - **Heterogeneous rows**: the header is the union of all keys in first-seen order
//! - **Hand-assembled OOXML**: shared strings, styles and relationships written
//!   row by row into a deterministic ZIP package
//! - **Contained failures**: every call returns an [`export::ExportArtifact`];
//!   errors become a failed artifact with a message
//!
//! # Example - Exporting typed records
//!
//! ```rust
//! use tabula::export::{ExportFormat, ExportOptions, Exporter};
//!
//! tabula::tabular_record! {
//!     #[derive(Debug, Clone)]
//!     pub struct Invoice {
//!         #[column("Number")]
//!         pub number: String,
//!         #[column("Amount")]
//!         pub amount: f64,
//!         #[column("Paid")]
//!         pub paid: Option<bool>,
//!     }
//! }
//!
//! let invoices = vec![
//!     Invoice { number: "INV-1".into(), amount: 120.0, paid: Some(true) },
//!     Invoice { number: "INV-2".into(), amount: 75.25, paid: None },
//! ];
//!
//! let options = ExportOptions::new()
//!     .with_title("Invoices")
//!     .with_parameter("Customer", "ACME");
//!
//! let artifact = Exporter::new().export(&invoices, ExportFormat::WordDocument, &options);
//! assert!(artifact.is_success());
//! assert!(artifact.filename().ends_with(".docx"));
//! ```
//!
//! # Example - Exporting heterogeneous rows
//!
//! ```rust
//! use tabula::export::{ExportOptions, Exporter};
//! use tabula::schema::DynamicRow;
//!
//! let raw: Vec<serde_json::Map<String, serde_json::Value>> = serde_json::from_str(
//!     r#"[{"id": 1, "name": "north"}, {"id": 2, "region": "EU"}]"#,
//! ).unwrap();
//! let rows: Vec<DynamicRow> = raw
//!     .into_iter()
//!     .map(|obj| obj.into_iter().map(|(k, v)| (k, v.into())).collect())
//!     .collect();
//!
//! let artifact = Exporter::new().export_dynamic_selector(
//!     &rows,
//!     "native-spreadsheet",
//!     &ExportOptions::new().with_title("Regions"),
//! );
//! assert!(artifact.is_success());
//! ```

/// Shared building blocks: cell values, errors and XML helpers
pub mod common;

/// Export formats, options, artifacts and the dispatcher
pub mod export;

/// OOXML package writers and the spreadsheet/document encoders
pub mod ooxml;

/// Column derivation for typed and heterogeneous records
pub mod schema;

/// Neutral tables and the record-to-table adapter
pub mod table;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types for convenience
pub use common::{CellValue, Error, RendererError, Result};
pub use export::{ExportArtifact, ExportFormat, ExportOptions, Exporter};
