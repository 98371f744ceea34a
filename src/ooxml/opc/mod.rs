//! Open Packaging Convention writer.
//!
//! The spreadsheet and document encoders both emit OPC packages: a ZIP archive
//! with a `[Content_Types].xml` index, relationship parts and XML parts.

pub mod constants;
pub mod package;
pub mod props;
pub mod rel;

pub use package::PackageWriter;
pub use props::CoreProperties;
pub use rel::{Relationship, Relationships};
