//! XML text helpers shared by the OOXML writers.

mod escape;

pub use escape::escape_xml;
