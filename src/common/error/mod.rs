//! Unified error types for launchkit.
//!
//! This module provides the error type shared by the renderer, the PPTX
//! writer and the export layer.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
