//! Shared strings table for XLSX workbooks.
use crate::common::xml::escape_xml;
use crate::ooxml::opc::constants::namespace;
use indexmap::IndexSet;
use std::fmt::Write as FmtWrite;

/// Deduplicated cell text in first-use order.
///
/// Every text cell points into this table by index, so a value repeated down
/// a column is stored once.
#[derive(Debug, Default)]
pub struct MutableSharedStrings {
    /// Unique strings; the set position is the shared string index
    strings: IndexSet<String>,
    /// Total number of references handed out
    references: usize,
}

impl MutableSharedStrings {
    /// Create a new empty shared strings table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reference to `s` and return its index.
    pub fn add_string(&mut self, s: &str) -> usize {
        self.references += 1;
        match self.strings.get_index_of(s) {
            Some(index) => index,
            None => self.strings.insert_full(s.to_string()).0,
        }
    }

    /// Get the number of unique strings.
    pub fn count(&self) -> usize {
        self.strings.len()
    }

    /// Get the number of cell references to the table.
    pub fn reference_count(&self) -> usize {
        self.references
    }

    /// Serialize the shared strings table to XML.
    pub fn to_xml(&self) -> Result<String, std::fmt::Error> {
        let mut xml = String::with_capacity(256 + self.strings.len() * 24);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);

        write!(
            xml,
            r#"<sst xmlns="{}" count="{}" uniqueCount="{}">"#,
            namespace::SML_MAIN,
            self.references,
            self.strings.len()
        )?;

        for s in &self.strings {
            // Leading or trailing whitespace is dropped by Excel unless preserved
            if s.starts_with(char::is_whitespace) || s.ends_with(char::is_whitespace) {
                write!(xml, r#"<si><t xml:space="preserve">{}</t></si>"#, escape_xml(s))?;
            } else {
                write!(xml, "<si><t>{}</t></si>", escape_xml(s))?;
            }
        }

        xml.push_str("</sst>");

        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_values_share_an_entry() {
        let mut ss = MutableSharedStrings::new();
        let north = ss.add_string("North");
        let south = ss.add_string("South");
        let again = ss.add_string("North");

        assert_eq!((north, south, again), (0, 1, 0));
        assert_eq!(ss.count(), 2);
        assert_eq!(ss.reference_count(), 3);

        let xml = ss.to_xml().unwrap();
        assert!(xml.contains(r#"count="3" uniqueCount="2""#));
    }

    #[test]
    fn test_whitespace_preserved() {
        let mut ss = MutableSharedStrings::new();
        ss.add_string(" padded");
        ss.add_string("");
        let xml = ss.to_xml().unwrap();
        assert!(xml.contains(r#"<t xml:space="preserve"> padded</t>"#));
        assert!(xml.contains("<si><t></t></si>"));
    }
}
