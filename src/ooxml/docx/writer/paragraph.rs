/// Paragraph types and implementation for DOCX documents.
use crate::common::Result;
use crate::common::xml::escape_xml;
use std::fmt::Write as FmtWrite;

pub use super::super::format::ParagraphAlignment;
use super::run::MutableRun;

/// A mutable paragraph in a document.
#[derive(Debug, Clone, Default)]
pub struct MutableParagraph {
    /// Runs in this paragraph
    pub(crate) runs: Vec<MutableRun>,
    /// Paragraph style ID
    pub(crate) style: Option<String>,
    /// Paragraph alignment
    pub(crate) alignment: Option<ParagraphAlignment>,
}

impl MutableParagraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a new run to the paragraph.
    pub fn add_run(&mut self) -> &mut MutableRun {
        let index = self.runs.len();
        self.runs.push(MutableRun::new());
        &mut self.runs[index]
    }

    /// Add a run with text.
    pub fn add_run_with_text(&mut self, text: &str) -> &mut MutableRun {
        let run = self.add_run();
        run.set_text(text);
        run
    }

    /// Set the paragraph style.
    pub fn set_style(&mut self, style_id: &str) {
        self.style = Some(style_id.to_string());
    }

    /// Set paragraph alignment.
    pub fn set_alignment(&mut self, alignment: ParagraphAlignment) {
        self.alignment = Some(alignment);
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(MutableRun::text).collect()
    }

    pub(crate) fn to_xml(&self, xml: &mut String) -> Result<()> {
        xml.push_str("<w:p>");

        // Write paragraph properties
        if self.style.is_some() || self.alignment.is_some() {
            xml.push_str("<w:pPr>");

            if let Some(ref style) = self.style {
                write!(xml, "<w:pStyle w:val=\"{}\"/>", escape_xml(style))?;
            }
            if let Some(alignment) = self.alignment {
                write!(xml, "<w:jc w:val=\"{}\"/>", alignment.as_str())?;
            }

            xml.push_str("</w:pPr>");
        }

        for run in &self.runs {
            run.to_xml(xml)?;
        }

        xml.push_str("</w:p>");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_paragraph() {
        let mut para = MutableParagraph::new();
        para.set_style("Title");
        para.set_alignment(ParagraphAlignment::Center);
        para.add_run_with_text("Report");

        let mut xml = String::new();
        para.to_xml(&mut xml).unwrap();
        assert!(xml.starts_with(r#"<w:p><w:pPr><w:pStyle w:val="Title"/><w:jc w:val="center"/></w:pPr>"#));
        assert_eq!(para.text(), "Report");
    }

    #[test]
    fn test_empty_paragraph() {
        let mut xml = String::new();
        MutableParagraph::new().to_xml(&mut xml).unwrap();
        assert_eq!(xml, "<w:p></w:p>");
    }
}
