//! Neutral row/column tables.
//!
//! A [`Table`] is the stringified projection of one export call's records. It
//! is built by the [`adapter`] functions, consumed by the encoders (or handed
//! to a report renderer), and dropped once the artifact bytes exist.

pub mod adapter;
mod parameters;

pub use adapter::{project_dynamic, project_records, project_with};
pub use parameters::ParameterSet;

use crate::schema::ColumnSet;
use indexmap::IndexMap;

/// One table row: column id to display text.
pub type TabularRow = IndexMap<String, String>;

/// Ordered rows plus the ordered column set they draw from.
///
/// Every populated key of every row is a member of [`Table::columns`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: ColumnSet,
    rows: Vec<TabularRow>,
}

impl Table {
    /// Create an empty table over `columns`.
    pub fn new(columns: ColumnSet) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row.
    ///
    /// Keys outside the column set are dropped.
    pub fn push_row(&mut self, mut row: TabularRow) {
        row.retain(|key, _| self.columns.index_of(key).is_some());
        self.rows.push(row);
    }

    /// The column set.
    pub fn columns(&self) -> &ColumnSet {
        &self.columns
    }

    /// The rows in input order.
    pub fn rows(&self) -> &[TabularRow] {
        &self.rows
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Iterate each row as display text in column order.
    ///
    /// Columns a row does not populate come back as empty strings.
    pub fn ordered_rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        self.rows.iter().map(move |row| {
            self.columns
                .iter()
                .map(|column| row.get(column).map_or("", String::as_str))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_row_drops_unknown_keys() {
        let mut columns = ColumnSet::new();
        columns.insert("a");
        columns.insert("b");

        let mut table = Table::new(columns);
        let mut row = TabularRow::new();
        row.insert("b".into(), "2".into());
        row.insert("zzz".into(), "x".into());
        table.push_row(row);

        assert_eq!(table.rows()[0].len(), 1);
        let ordered: Vec<Vec<&str>> = table.ordered_rows().collect();
        assert_eq!(ordered, vec![vec!["", "2"]]);
    }
}
