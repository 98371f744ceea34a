//! Relationship parts (`*.rels`).
use super::constants::namespace;
use crate::common::xml::escape_xml;
use std::fmt::Write as FmtWrite;

/// A single relationship from a source part to a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    r_id: String,
    reltype: String,
    target: String,
}

impl Relationship {
    /// Relationship id, e.g. `rId1`.
    pub fn r_id(&self) -> &str {
        &self.r_id
    }

    /// Relationship type URI.
    pub fn reltype(&self) -> &str {
        &self.reltype
    }

    /// Target reference, relative to the source part.
    pub fn target_ref(&self) -> &str {
        &self.target
    }
}

/// Ordered relationship collection of one source part.
///
/// Ids are assigned sequentially (`rId1`, `rId2`, ...) in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    rels: Vec<Relationship>,
}

impl Relationships {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its id.
    pub fn add(&mut self, reltype: &str, target: &str) -> String {
        let r_id = format!("rId{}", self.rels.len() + 1);
        self.rels.push(Relationship {
            r_id: r_id.clone(),
            reltype: reltype.to_string(),
            target: target.to_string(),
        });
        r_id
    }

    /// Number of relationships.
    pub fn len(&self) -> usize {
        self.rels.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.rels.is_empty()
    }

    /// Serialize to a `.rels` part.
    pub fn to_xml(&self) -> Result<String, std::fmt::Error> {
        let mut xml = String::with_capacity(256 + self.rels.len() * 160);

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        write!(xml, r#"<Relationships xmlns="{}">"#, namespace::OPC_RELATIONSHIPS)?;

        for rel in &self.rels {
            write!(
                xml,
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                escape_xml(rel.r_id()),
                escape_xml(rel.reltype()),
                escape_xml(rel.target_ref())
            )?;
        }

        xml.push_str("</Relationships>");
        Ok(xml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::opc::constants::relationship_type as rt;

    #[test]
    fn test_sequential_ids() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add(rt::OFFICE_DOCUMENT, "xl/workbook.xml"), "rId1");
        assert_eq!(rels.add(rt::CORE_PROPERTIES, "docProps/core.xml"), "rId2");

        let xml = rels.to_xml().unwrap();
        assert!(xml.contains(r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>"#));
        assert!(xml.ends_with("</Relationships>"));
    }
}
