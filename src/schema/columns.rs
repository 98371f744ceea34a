//! Ordered column sets and the two derivation strategies.
use super::record::{DynamicRow, Record, RecordSchema, Schema};
use crate::common::{Error, Result};
use indexmap::IndexSet;

/// Ordered set of unique column ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSet {
    columns: IndexSet<String>,
}

impl ColumnSet {
    /// Create an empty column set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column, returning `false` if it was already present.
    ///
    /// A column that is already present keeps its original position.
    pub fn insert(&mut self, column: &str) -> bool {
        if self.columns.contains(column) {
            return false;
        }
        self.columns.insert(column.to_string())
    }

    /// Number of columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether there are no columns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Position of a column.
    pub fn index_of(&self, column: &str) -> Option<usize> {
        self.columns.get_index_of(column)
    }

    /// Iterate column ids in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    /// Copy the column ids into a vector.
    pub fn to_vec(&self) -> Vec<String> {
        self.columns.iter().cloned().collect()
    }
}

impl<'a> IntoIterator for &'a ColumnSet {
    type Item = &'a String;
    type IntoIter = indexmap::set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

/// Derive the columns of a typed schema.
///
/// The result depends only on the schema, never on how many records are
/// exported, so an empty collection still gets its full header.
///
/// # Errors
///
/// Returns [`Error::Introspection`] if the schema has no columns or names the
/// same column twice.
pub fn derive_columns<T, S: Schema<T> + ?Sized>(schema: &S) -> Result<ColumnSet> {
    let mut set = ColumnSet::new();
    for column in schema.columns() {
        if !set.insert(&column) {
            return Err(Error::Introspection(format!(
                "column '{}' is declared more than once",
                column
            )));
        }
    }

    if set.is_empty() {
        return Err(Error::Introspection(format!(
            "type '{}' has no exportable columns",
            short_type_name::<T>()
        )));
    }

    Ok(set)
}

/// Derive the columns of a [`Record`] type.
pub fn derive_record_columns<T: Record>() -> Result<ColumnSet> {
    derive_columns::<T, _>(&RecordSchema::<T>::new())
}

/// Derive the union of keys across heterogeneous rows.
///
/// Keys are ordered by first appearance scanning rows in input order, so a key
/// introduced by the last row is still included at the end. No rows means no
/// columns.
pub fn derive_dynamic_columns(rows: &[DynamicRow]) -> ColumnSet {
    let mut set = ColumnSet::new();
    for row in rows {
        for key in row.keys() {
            set.insert(key);
        }
    }
    set
}

/// Last path segment of a type name, for error messages.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::CellValue;
    use crate::schema::ColumnMap;
    use proptest::prelude::*;

    crate::tabular_record! {
        #[derive(Clone)]
        struct Empty {}
    }

    fn row(pairs: &[(&str, i64)]) -> DynamicRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), CellValue::Integer(*v)))
            .collect()
    }

    #[test]
    fn test_empty_record_is_error() {
        let err = derive_record_columns::<Empty>().unwrap_err();
        assert!(matches!(err, Error::Introspection(_)));
        assert!(err.to_string().contains("Empty"));
    }

    #[test]
    fn test_duplicate_mapping_is_error() {
        let map = ColumnMap::<(i32, i32)>::new()
            .column("A", |r: &(i32, i32)| r.0)
            .column("A", |r: &(i32, i32)| r.1);
        assert!(matches!(derive_columns(&map), Err(Error::Introspection(_))));
    }

    #[test]
    fn test_union_first_seen_order() {
        let rows = vec![
            row(&[("b", 1), ("a", 2)]),
            row(&[("a", 3), ("c", 4)]),
            row(&[("d", 5)]),
        ];
        assert_eq!(derive_dynamic_columns(&rows).to_vec(), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_no_rows_no_columns() {
        assert!(derive_dynamic_columns(&[]).is_empty());
    }

    proptest! {
        #[test]
        fn prop_union_is_distinct_and_stable(
            keys in prop::collection::vec(prop::collection::vec("[a-e]", 0..5), 0..8)
        ) {
            let rows: Vec<DynamicRow> = keys
                .iter()
                .map(|ks| ks.iter().map(|k| (k.clone(), CellValue::Null)).collect())
                .collect();

            let first = derive_dynamic_columns(&rows);
            let second = derive_dynamic_columns(&rows);
            prop_assert_eq!(&first, &second);

            let mut distinct: Vec<&String> = keys.iter().flatten().collect();
            distinct.sort();
            distinct.dedup();
            prop_assert_eq!(first.len(), distinct.len());
        }
    }
}
