//! Unified error types for the export engine.
//!
//! Every stage of an export (introspection, encoding, rendering, format
//! selection) reports through one error type so the dispatcher can fold any
//! failure into a failed artifact at a single boundary.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, RendererError, Result};
