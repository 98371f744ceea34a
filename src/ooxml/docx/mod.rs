//! Word (.docx) document encoding.
//!
//! [`DocumentEncoder`] lays a [`Table`](crate::table::Table) out as a
//! centered title, the parameter lines and one bordered table whose first row
//! holds the column headers.
//!
//! ```rust
//! use tabula::ooxml::docx::DocumentEncoder;
//! use tabula::table::{ParameterSet, project_records};
//!
//! tabula::tabular_record! {
//!     struct Line {
//!         #[column("Item")]
//!         item: String,
//!         #[column("Qty")]
//!         qty: u32,
//!     }
//! }
//!
//! # fn main() -> tabula::Result<()> {
//! let table = project_records(&[Line { item: "Bolt".into(), qty: 12 }])?;
//! let params = ParameterSet::new().with("Warehouse", "East");
//! let bytes = DocumentEncoder::new().encode(&table, "Stock", &params)?;
//! assert_eq!(&bytes[..2], b"PK");
//! # Ok(())
//! # }
//! ```

mod encoder;
pub mod format;
pub mod writer;

pub use encoder::DocumentEncoder;
