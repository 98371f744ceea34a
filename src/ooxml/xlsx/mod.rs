//! Excel (.xlsx) spreadsheet encoding.
//!
//! [`FlatSpreadsheetEncoder`] writes a [`Table`](crate::table::Table) into a
//! single-sheet workbook; [`DynamicSpreadsheetEncoder`] does the same for
//! heterogeneous rows whose header is the union of their keys.
//!
//! Every sheet follows the same row layout:
//!
//! 1. one `key: value` row per parameter
//! 2. a blank row, if there were parameters
//! 3. the header row (bold), unless there are no columns
//! 4. one row per record
//!
//! ```rust
//! use tabula::ooxml::xlsx::DynamicSpreadsheetEncoder;
//! use tabula::schema::DynamicRow;
//! use tabula::table::ParameterSet;
//!
//! # fn main() -> tabula::Result<()> {
//! let mut row = DynamicRow::new();
//! row.insert("Region".into(), "North".into());
//! row.insert("Total".into(), 1250.5.into());
//!
//! let bytes = DynamicSpreadsheetEncoder::new("Regions").encode(&[row], &ParameterSet::new())?;
//! assert_eq!(&bytes[..2], b"PK");
//! # Ok(())
//! # }
//! ```

mod encoder;
pub mod writer;

pub use encoder::{DynamicSpreadsheetEncoder, FlatSpreadsheetEncoder};
