//! Caller-supplied column mappings.
use super::record::Schema;
use crate::common::CellValue;
use std::fmt;

type Accessor<T> = Box<dyn Fn(&T) -> CellValue + Send + Sync>;

/// Explicit column mapping for records that do not implement
/// [`Record`](super::Record).
///
/// Columns appear in the order they are added.
///
/// # Examples
///
/// ```rust
/// use tabula::schema::{ColumnMap, Schema};
///
/// struct Employee {
///     first: String,
///     last: String,
///     salary: f64,
/// }
///
/// let map = ColumnMap::new()
///     .column("Full Name", |e: &Employee| format!("{} {}", e.first, e.last))
///     .column("Salary", |e: &Employee| e.salary);
///
/// assert_eq!(map.columns(), vec!["Full Name", "Salary"]);
/// ```
pub struct ColumnMap<T> {
    columns: Vec<(String, Accessor<T>)>,
}

impl<T> ColumnMap<T> {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Append a column computed by `accessor`.
    pub fn column<V, F>(mut self, header: impl Into<String>, accessor: F) -> Self
    where
        V: Into<CellValue>,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        self.columns
            .push((header.into(), Box::new(move |record| accessor(record).into())));
        self
    }

    /// Number of mapped columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether no columns are mapped.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<T> Default for ColumnMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ColumnMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnMap")
            .field(
                "columns",
                &self.columns.iter().map(|(h, _)| h).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<T> Schema<T> for ColumnMap<T> {
    fn columns(&self) -> Vec<String> {
        self.columns.iter().map(|(h, _)| h.clone()).collect()
    }

    fn cells(&self, record: &T) -> Vec<CellValue> {
        self.columns.iter().map(|(_, get)| get(record)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_order_and_values() {
        let map = ColumnMap::new()
            .column("Second", |r: &(String, Option<i32>)| r.1)
            .column("First", |r: &(String, Option<i32>)| r.0.clone());

        let cells = map.cells(&("x".to_string(), None));
        assert_eq!(map.columns(), vec!["Second", "First"]);
        assert_eq!(cells, vec![CellValue::Null, CellValue::Text("x".into())]);
        assert_eq!(map.len(), 2);
    }
}
