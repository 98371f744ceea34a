//! Common types and utilities shared across the encoders.
//!
//! This module provides the cell value model, the unified error type and the
//! XML helpers used by every markup writer.

// Submodule declarations
pub mod error;
pub mod value;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, RendererError, Result};
pub use value::CellValue;
