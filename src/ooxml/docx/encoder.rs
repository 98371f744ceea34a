//! Table to document encoder.
use super::writer::{MutableDocument, TableBorder};
use crate::common::{Error, Result};
use crate::ooxml::opc::CoreProperties;
use crate::table::{ParameterSet, Table};
use chrono::{DateTime, Utc};

/// Writes a [`Table`] into a `.docx` package.
///
/// Body layout: the title as a centered heading, one paragraph per parameter
/// followed by a blank paragraph (only when there are parameters), then a
/// single table with a header row and one row per record.
#[derive(Debug, Clone)]
pub struct DocumentEncoder {
    created: DateTime<Utc>,
}

impl DocumentEncoder {
    /// Create an encoder.
    pub fn new() -> Self {
        Self {
            created: DateTime::<Utc>::UNIX_EPOCH,
        }
    }

    /// Set the timestamp recorded in the document properties.
    pub fn with_created(mut self, created: DateTime<Utc>) -> Self {
        self.created = created;
        self
    }

    /// Encode `table` under `title` with `parameters` as prefix lines.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Encoding`] if the package cannot be assembled or comes
    /// out empty.
    pub fn encode(&self, table: &Table, title: &str, parameters: &ParameterSet) -> Result<Vec<u8>> {
        let mut doc = MutableDocument::new();
        doc.add_title(title);

        for line in parameters.lines() {
            doc.add_paragraph_with_text(&line);
        }
        if !parameters.is_empty() {
            doc.add_paragraph();
        }

        let grid = doc.add_table();
        grid.set_style("TableGrid");
        grid.set_width_percent(100);
        grid.set_borders(TableBorder::default());

        // Every row needs at least one cell
        if table.columns().is_empty() {
            grid.add_row([""]);
        } else {
            grid.add_row(table.columns().iter()).set_header(true);
        }
        for row in table.ordered_rows() {
            if row.is_empty() {
                grid.add_row([""]);
            } else {
                grid.add_row(row);
            }
        }
        let table_rows = grid.row_count();

        let bytes = doc.save_to_bytes(&CoreProperties {
            title,
            created: self.created,
        })?;

        if bytes.is_empty() {
            return Err(Error::Encoding("document encoder produced no content".into()));
        }

        tracing::debug!(
            paragraphs = doc.paragraph_count(),
            table_rows,
            bytes = bytes.len(),
            "document encoded"
        );
        Ok(bytes)
    }
}

impl Default for DocumentEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::DynamicRow;
    use crate::table::{project_dynamic, project_records};
    use crate::test_support::{read_docx_body, read_part};
    use chrono::TimeZone;
    use proptest::prelude::*;

    crate::tabular_record! {
        #[derive(Debug, Clone)]
        struct Shipment {
            #[column("Order")]
            order: String,
            #[column("Weight")]
            weight: Option<f64>,
            #[column("Express")]
            express: bool,
        }
    }

    fn shipments() -> Vec<Shipment> {
        vec![
            Shipment {
                order: "SO-1".into(),
                weight: Some(12.5),
                express: true,
            },
            Shipment {
                order: "SO-2".into(),
                weight: None,
                express: false,
            },
        ]
    }

    #[test]
    fn test_body_layout() {
        let table = project_records(&shipments()).unwrap();
        let params = ParameterSet::new().with("Carrier", "DHL").with("Week", "42");

        let bytes = DocumentEncoder::new()
            .encode(&table, "Shipments", &params)
            .unwrap();
        let body = read_docx_body(&bytes);

        assert_eq!(body.paragraphs, vec!["Shipments", "Carrier: DHL", "Week: 42", ""]);
        assert_eq!(
            body.rows,
            vec![
                vec!["Order", "Weight", "Express"],
                vec!["SO-1", "12.5", "true"],
                vec!["SO-2", "", "false"],
            ]
        );
        assert!(body.xml.contains(r#"<w:jc w:val="center"/>"#));
        assert!(body.xml.contains("<w:tblHeader/>"));
    }

    #[test]
    fn test_no_parameters_no_blank_paragraph() {
        let table = project_records(&shipments()).unwrap();
        let bytes = DocumentEncoder::new()
            .encode(&table, "Shipments", &ParameterSet::new())
            .unwrap();
        assert_eq!(read_docx_body(&bytes).paragraphs, vec!["Shipments"]);
    }

    #[test]
    fn test_empty_records_header_only() {
        let table = project_records::<Shipment>(&[]).unwrap();
        let bytes = DocumentEncoder::new()
            .encode(&table, "Nothing shipped", &ParameterSet::new())
            .unwrap();
        assert_eq!(
            read_docx_body(&bytes).rows,
            vec![vec!["Order", "Weight", "Express"]]
        );
    }

    #[test]
    fn test_empty_column_set_still_has_a_cell() {
        let table = project_dynamic(&[]);
        let bytes = DocumentEncoder::new()
            .encode(&table, "Empty", &ParameterSet::new())
            .unwrap();
        assert_eq!(read_docx_body(&bytes).rows, vec![vec![""]]);
    }

    #[test]
    fn test_keyless_rows_still_have_a_cell() {
        let table = project_dynamic(&[DynamicRow::new(), DynamicRow::new()]);
        let bytes = DocumentEncoder::new()
            .encode(&table, "Blank", &ParameterSet::new())
            .unwrap();
        let body = read_docx_body(&bytes);

        assert_eq!(body.rows, vec![vec![""]; 3]);
        assert!(!body.xml.contains("<w:tr></w:tr>"));
    }

    #[test]
    fn test_borders_and_core_properties() {
        let created = Utc.with_ymd_and_hms(2025, 11, 3, 8, 30, 0).unwrap();
        let table = project_records(&shipments()).unwrap();
        let bytes = DocumentEncoder::new()
            .with_created(created)
            .encode(&table, "Q & A", &ParameterSet::new())
            .unwrap();

        let xml = read_docx_body(&bytes).xml;
        for side in ["top", "left", "bottom", "right", "insideH", "insideV"] {
            assert!(xml.contains(&format!(
                r#"<w:{} w:val="single" w:sz="4" w:space="0" w:color="000000"/>"#,
                side
            )));
        }

        let core = read_part(&bytes, "docProps/core.xml");
        assert!(core.contains("<dc:title>Q &amp; A</dc:title>"));
        assert!(core.contains("2025-11-03T08:30:00Z"));
    }

    proptest! {
        #[test]
        fn prop_row_and_paragraph_counts(records in 0usize..10, params in 0usize..4) {
            let rows: Vec<DynamicRow> = (0..records)
                .map(|i| {
                    let mut row = DynamicRow::new();
                    row.insert("n".into(), (i as i64).into());
                    row
                })
                .collect();
            let parameters: ParameterSet = (0..params)
                .map(|i| (format!("p{}", i), "v"))
                .collect();

            let table = if records > 0 {
                project_dynamic(&rows)
            } else {
                project_records::<Shipment>(&[]).unwrap()
            };
            let bytes = DocumentEncoder::new().encode(&table, "T", &parameters).unwrap();
            let body = read_docx_body(&bytes);

            prop_assert_eq!(body.rows.len(), records + 1);
            prop_assert_eq!(body.paragraphs.len(), 1 + params + usize::from(params > 0));
        }
    }
}
