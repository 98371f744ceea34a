//! Projection of caller records into a [`Table`].
use super::{Table, TabularRow};
use crate::common::{Error, Result};
use crate::schema::{
    DynamicRow, Record, RecordSchema, Schema, derive_columns, derive_dynamic_columns,
};

/// Project typed records through an explicit schema.
///
/// # Errors
///
/// Returns [`Error::Introspection`] when the schema has no columns, repeats a
/// column, or yields a different number of cells than it has columns.
pub fn project_with<T, S: Schema<T> + ?Sized>(records: &[T], schema: &S) -> Result<Table> {
    let columns = derive_columns::<T, S>(schema)?;
    let names = columns.to_vec();
    let mut table = Table::new(columns);

    for (index, record) in records.iter().enumerate() {
        let cells = schema.cells(record);
        if cells.len() != names.len() {
            return Err(Error::Introspection(format!(
                "record {} produced {} cells for {} columns",
                index,
                cells.len(),
                names.len()
            )));
        }

        let row: TabularRow = names
            .iter()
            .zip(cells.iter())
            .map(|(name, cell)| (name.clone(), cell.to_text()))
            .collect();
        table.push_row(row);
    }

    tracing::debug!(
        rows = table.row_count(),
        columns = names.len(),
        "projected typed records"
    );
    Ok(table)
}

/// Project typed records through their [`Record`] descriptor.
pub fn project_records<T: Record>(records: &[T]) -> Result<Table> {
    project_with(records, &RecordSchema::<T>::new())
}

/// Project heterogeneous rows; the header is the union of their keys.
pub fn project_dynamic(rows: &[DynamicRow]) -> Table {
    let mut table = Table::new(derive_dynamic_columns(rows));
    for row in rows {
        table.push_row(
            row.iter()
                .map(|(key, value)| (key.clone(), value.to_text()))
                .collect(),
        );
    }

    tracing::debug!(
        rows = table.row_count(),
        columns = table.columns().len(),
        "projected dynamic rows"
    );
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::CellValue;

    crate::tabular_record! {
        #[derive(Debug, Clone)]
        struct Person {
            #[column("Name")]
            name: String,
            #[column("Age")]
            age: Option<u32>,
            #[column("City")]
            city: String,
        }
    }

    struct Lying;

    impl Record for Lying {
        const COLUMNS: &'static [&'static str] = &["a", "b"];

        fn cells(&self) -> Vec<CellValue> {
            vec![CellValue::Null]
        }
    }

    #[test]
    fn test_typed_round_trip() {
        let people = vec![
            Person {
                name: "Ann".into(),
                age: Some(31),
                city: "Oslo".into(),
            },
            Person {
                name: "Bo".into(),
                age: None,
                city: "Lima".into(),
            },
        ];

        let table = project_records(&people).unwrap();
        assert_eq!(table.columns().to_vec(), vec!["Name", "Age", "City"]);

        let rows: Vec<Vec<&str>> = table.ordered_rows().collect();
        assert_eq!(rows, vec![vec!["Ann", "31", "Oslo"], vec!["Bo", "", "Lima"]]);
    }

    #[test]
    fn test_empty_typed_keeps_header() {
        let table = project_records::<Person>(&[]).unwrap();
        assert_eq!(table.columns().len(), 3);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_cell_count_mismatch() {
        let err = project_records(&[Lying]).unwrap_err();
        assert!(err.to_string().contains("1 cells for 2 columns"));
    }

    #[test]
    fn test_dynamic_missing_cells_are_empty() {
        let mut first = DynamicRow::new();
        first.insert("x".into(), 1.into());
        let mut second = DynamicRow::new();
        second.insert("y".into(), "b".into());

        let table = project_dynamic(&[first, second]);
        let rows: Vec<Vec<&str>> = table.ordered_rows().collect();
        assert_eq!(rows, vec![vec!["1", ""], vec!["", "b"]]);
    }
}
