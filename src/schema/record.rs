//! Typed record descriptors.
use crate::common::CellValue;
use indexmap::IndexMap;
use std::marker::PhantomData;

/// A heterogeneous row: ordered column id to value.
pub type DynamicRow = IndexMap<String, CellValue>;

/// A record type with a compile-time column descriptor.
///
/// Implementations must return exactly one cell per entry of [`Record::COLUMNS`],
/// in the same order. The [`tabular_record!`](crate::tabular_record) macro
/// generates both from a struct definition.
pub trait Record {
    /// Column ids in declaration order.
    const COLUMNS: &'static [&'static str];

    /// Cell values in column order.
    fn cells(&self) -> Vec<CellValue>;
}

/// Source of columns and cell values for records of type `T`.
pub trait Schema<T> {
    /// Column ids in display order.
    fn columns(&self) -> Vec<String>;

    /// Cell values for one record, in the order of [`Schema::columns`].
    fn cells(&self, record: &T) -> Vec<CellValue>;
}

/// [`Schema`] backed by a type's [`Record`] descriptor.
pub struct RecordSchema<T>(PhantomData<fn() -> T>);

impl<T> RecordSchema<T> {
    /// Create the schema for `T`.
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for RecordSchema<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Schema<T> for RecordSchema<T> {
    fn columns(&self) -> Vec<String> {
        T::COLUMNS.iter().map(|c| (*c).to_string()).collect()
    }

    fn cells(&self, record: &T) -> Vec<CellValue> {
        record.cells()
    }
}

/// Declare a struct together with its [`Record`] descriptor.
///
/// Each field becomes a column named after the field, or after the string
/// given in a `#[column("...")]` attribute. Field types must convert into
/// [`CellValue`] and implement `Clone`.
///
/// ```rust
/// use tabula::schema::Record;
///
/// tabula::tabular_record! {
///     #[derive(Debug, Clone)]
///     pub struct Invoice {
///         pub number: u32,
///         #[column("Customer Name")]
///         pub customer: String,
///         pub paid: Option<bool>,
///     }
/// }
///
/// assert_eq!(Invoice::COLUMNS, &["number", "Customer Name", "paid"]);
/// ```
#[macro_export]
macro_rules! tabular_record {
    (@header $field:ident, $header:literal) => {
        $header
    };
    (@header $field:ident) => {
        ::core::stringify!($field)
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[column($header:literal)])?
                $fvis:vis $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $( $fvis $field : $ty ),*
        }

        impl $crate::schema::Record for $name {
            const COLUMNS: &'static [&'static str] = &[
                $( $crate::tabular_record!(@header $field $(, $header)?) ),*
            ];

            fn cells(&self) -> ::std::vec::Vec<$crate::common::CellValue> {
                ::std::vec![
                    $( $crate::common::CellValue::from(::core::clone::Clone::clone(&self.$field)) ),*
                ]
            }
        }
    };
}
