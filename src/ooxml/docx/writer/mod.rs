//! Mutable document writer components for DOCX.

pub mod doc;
pub mod paragraph;
pub mod run;
pub mod style;
pub mod table;

pub use doc::MutableDocument;
pub use paragraph::{MutableParagraph, ParagraphAlignment};
pub use run::MutableRun;
pub use style::{MutableStyle, default_styles, generate_styles_xml};
pub use table::{MutableCell, MutableRow, MutableTable, TableBorder, TableBorderStyle, TableBorders};
