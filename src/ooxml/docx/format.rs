//! Formatting enums shared by the document writer.

/// Paragraph alignment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphAlignment {
    Center,
}

impl ParagraphAlignment {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Center => "center",
        }
    }
}

/// Border styles for tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableBorderStyle {
    Single,
}

impl TableBorderStyle {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
        }
    }
}

/// Kind of a style definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleType {
    /// Paragraph style.
    Paragraph,
    /// Table style.
    Table,
}

impl StyleType {
    /// Convert the style type to its XML attribute value.
    #[inline]
    pub const fn to_xml(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Table => "table",
        }
    }
}
