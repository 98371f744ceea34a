//! Office Open XML (OOXML) writers.
//!
//! The module is organized into layers:
//!
//! 1. **OPC Layer** (`opc`): package assembly (ZIP, content types, relationships)
//! 2. **Format-Specific Modules**:
//!    - `xlsx`: single-sheet spreadsheets (flat and dynamic)
//!    - `docx`: word-processing documents with a title, parameters and one table
pub mod opc;

#[cfg(feature = "docx")]
pub mod docx;
#[cfg(feature = "xlsx")]
pub mod xlsx;
