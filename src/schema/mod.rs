//! Schema introspection.
//!
//! Columns come from one of two places:
//!
//! - a typed record's compile-time descriptor ([`Record::COLUMNS`], usually
//!   generated by [`tabular_record!`](crate::tabular_record)) or an explicit
//!   caller-supplied [`ColumnMap`];
//! - the union of keys across heterogeneous [`DynamicRow`]s, in first-seen order.
//!
//! # Examples
//!
//! ```rust
//! use tabula::schema::{Record, derive_record_columns};
//!
//! tabula::tabular_record! {
//!     #[derive(Debug, Clone)]
//!     pub struct Score {
//!         #[column("Name")]
//!         pub name: String,
//!         #[column("Score")]
//!         pub score: i64,
//!     }
//! }
//!
//! let columns = derive_record_columns::<Score>().unwrap();
//! assert_eq!(columns.to_vec(), vec!["Name", "Score"]);
//! ```

mod columns;
mod mapping;
mod record;

pub use columns::{ColumnSet, derive_columns, derive_dynamic_columns, derive_record_columns};
pub use mapping::ColumnMap;
pub use record::{DynamicRow, Record, RecordSchema, Schema};
