//! Archive decoding helpers shared by unit tests.
//!
//! Produced packages are read back with the `zip` reader and their parts
//! parsed into a small element tree with `quick-xml`.
use quick_xml::Reader;
use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::{BytesStart, Event};
use std::io::{Cursor, Read};

/// Read one part of a package as UTF-8 text.
pub(crate) fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip archive");
    let mut file = archive
        .by_name(name)
        .unwrap_or_else(|_| panic!("part '{}' is missing", name));
    let mut text = String::new();
    file.read_to_string(&mut text).expect("UTF-8 part");
    text
}

/// Names of all entries in archive order.
pub(crate) fn part_names(bytes: &[u8]) -> Vec<String> {
    let archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip archive");
    archive.file_names().map(str::to_string).collect()
}

/// Decode the rows of `xl/worksheets/sheet1.xml` as (row index, cell texts).
pub(crate) fn read_sheet_rows(bytes: &[u8]) -> Vec<(u32, Vec<String>)> {
    let shared = parse(&read_part(bytes, "xl/sharedStrings.xml"));
    let strings: Vec<String> = shared.descendants("si").into_iter().map(Node::text).collect();

    let sheet = parse(&read_part(bytes, "xl/worksheets/sheet1.xml"));
    sheet
        .descendants("row")
        .into_iter()
        .map(|row| {
            let index = row
                .attribute("r")
                .and_then(|r| r.parse().ok())
                .expect("row index");
            let cells = row
                .descendants("c")
                .into_iter()
                .map(|c| {
                    let value = c.descendants("v").first().map(|v| v.text()).unwrap_or_default();
                    let index: usize = value.parse().expect("shared string index");
                    strings[index].clone()
                })
                .collect();
            (index, cells)
        })
        .collect()
}

/// Body of `word/document.xml`.
#[derive(Debug)]
pub(crate) struct DocxBody {
    /// Paragraph texts ahead of the table
    pub paragraphs: Vec<String>,
    /// Table cell texts per row
    pub rows: Vec<Vec<String>>,
    /// Raw document XML
    pub xml: String,
}

/// Decode the paragraphs and the table of a `.docx` package.
pub(crate) fn read_docx_body(bytes: &[u8]) -> DocxBody {
    let xml = read_part(bytes, "word/document.xml");
    let root = parse(&xml);
    let body = *root.descendants("w:body").first().expect("document body");

    let paragraphs = body
        .children
        .iter()
        .take_while(|node| node.name != "w:tbl")
        .filter(|node| node.name == "w:p")
        .map(Node::text)
        .collect();
    let rows = body
        .children_named("w:tbl")
        .first()
        .map(|table| {
            table
                .children_named("w:tr")
                .into_iter()
                .map(|tr| tr.children_named("w:tc").into_iter().map(Node::text).collect())
                .collect()
        })
        .unwrap_or_default();

    DocxBody {
        paragraphs,
        rows,
        xml,
    }
}

/// One parsed element.
#[derive(Debug, Default)]
struct Node {
    name: String,
    /// Raw attribute values in document order
    attributes: Vec<(String, String)>,
    /// Character data directly inside the element, entities resolved
    text: String,
    children: Vec<Node>,
}

impl Node {
    fn open(start: &BytesStart<'_>) -> Self {
        Self {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            attributes: start
                .attributes()
                .flatten()
                .map(|attr| {
                    (
                        String::from_utf8_lossy(attr.key.as_ref()).into_owned(),
                        String::from_utf8_lossy(&attr.value).into_owned(),
                    )
                })
                .collect(),
            ..Self::default()
        }
    }

    fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Direct children named `name`.
    fn children_named(&self, name: &str) -> Vec<&Node> {
        self.children.iter().filter(|c| c.name == name).collect()
    }

    /// Outermost descendants named `name`.
    fn descendants(&self, name: &str) -> Vec<&Node> {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, name: &str, found: &mut Vec<&'a Node>) {
        for child in &self.children {
            if child.name == name {
                found.push(child);
            } else {
                child.collect_descendants(name, found);
            }
        }
    }

    /// All character data of the subtree.
    ///
    /// Own text comes before the children's, which is exact for the leaf
    /// text elements the encoders write.
    fn text(&self) -> String {
        let mut text = self.text.clone();
        for child in &self.children {
            text.push_str(&child.text());
        }
        text
    }
}

fn current(stack: &mut [Node]) -> &mut Node {
    stack.last_mut().expect("open element")
}

/// Parse `xml` into a tree under a nameless root.
fn parse(xml: &str) -> Node {
    let mut reader = Reader::from_str(xml);
    let mut stack = vec![Node::default()];

    loop {
        match reader.read_event().expect("well-formed XML") {
            Event::Start(e) => stack.push(Node::open(&e)),
            Event::Empty(e) => current(&mut stack).children.push(Node::open(&e)),
            Event::End(_) => {
                let node = stack.pop().expect("balanced tags");
                current(&mut stack).children.push(node);
            },
            Event::Text(t) => current(&mut stack).text.push_str(&String::from_utf8_lossy(&t)),
            Event::GeneralRef(r) => {
                let resolved = match r.resolve_char_ref().expect("valid character reference") {
                    Some(c) => c.to_string(),
                    None => {
                        let entity = String::from_utf8_lossy(&r);
                        resolve_predefined_entity(&entity)
                            .expect("predefined entity")
                            .to_string()
                    },
                };
                current(&mut stack).text.push_str(&resolved);
            },
            Event::Eof => break,
            _ => {},
        }
    }

    assert_eq!(stack.len(), 1, "unclosed elements");
    stack.pop().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_tables_pair_correctly() {
        let xml = concat!(
            r#"<w:body><w:p><w:r><w:t>Q &amp; A &#x41;</w:t></w:r></w:p>"#,
            r#"<w:tbl><w:tr><w:tc><w:tbl><w:tr><w:tc><w:p><w:r><w:t>inner</w:t></w:r></w:p></w:tc></w:tr></w:tbl></w:tc>"#,
            r#"<w:tc><w:p/></w:tc></w:tr><w:tr><w:tc><w:p><w:r><w:t>last</w:t></w:r></w:p></w:tc></w:tr></w:tbl></w:body>"#,
        );
        let root = parse(xml);

        let tables = root.descendants("w:tbl");
        assert_eq!(tables.len(), 1);

        let rows: Vec<Vec<String>> = tables[0]
            .children_named("w:tr")
            .into_iter()
            .map(|tr| tr.children_named("w:tc").into_iter().map(Node::text).collect())
            .collect();
        assert_eq!(rows, vec![vec!["inner", ""], vec!["last"]]);
        assert_eq!(root.descendants("w:p")[0].text(), "Q & A A");
    }

    #[test]
    fn test_attributes_and_empty_elements() {
        let root = parse(r#"<sheetData><row r="1"><c t="s"><v>0</v></c></row><rowX/><row r="2"/></sheetData>"#);
        let rows = root.descendants("row");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].attribute("r"), Some("2"));
        assert_eq!(rows[0].descendants("v")[0].text(), "0");
    }
}
