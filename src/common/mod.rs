//! Common types, traits, and utilities shared across the crate.
//!
//! This module provides the unified error type, colour values, unit
//! conversions and XML helpers used by the renderer and the PPTX writer.

// Submodule declarations
pub mod color;
pub mod error;
pub mod unit;
pub mod xml;

// Re-exports for convenience
pub use color::RGBColor;
pub use error::{Error, Result};
