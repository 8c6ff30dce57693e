//! Pitch-deck rendering.
//!
//! A deck arrives as generic slide-content records ([`SlideContent`]) plus
//! [`PresentationMetadata`]. The [`LayoutEngine`] turns each record into
//! positioned [`Primitive`]s using one of five layout templates, and the
//! assembler writes them into a PPTX document carried as base64.
//!
//! ```rust
//! use launchkit::deck::{assemble, PresentationMetadata, SlideContent, SlideLayout};
//!
//! let metadata = PresentationMetadata {
//!     title: "TaskFlow".into(),
//!     subtitle: "Project management that works".into(),
//!     author: "TaskFlow Team".into(),
//!     date: "2026-10-18".into(),
//! };
//! let slides = vec![
//!     SlideContent::new(1, "TaskFlow").with_layout(SlideLayout::Title),
//!     SlideContent::new(2, "Problem").with_content(["Too many tools"]),
//! ];
//!
//! let pptx_base64 = assemble(&slides, &metadata, None)?;
//! assert!(!pptx_base64.is_empty());
//! # Ok::<(), launchkit::common::Error>(())
//! ```

mod assembler;
mod layout;
mod primitive;
mod theme;
mod types;

pub use assembler::{PitchDeckOutput, assemble, assemble_bytes, render_pitch_deck};
pub use layout::{CHART_CAPTION, LayoutEngine, LayoutMetrics, PRODUCT_DEMO_CAPTION};
pub use primitive::{Border, Frame, Primitive};
pub use theme::{DEFAULT_ACCENT, DEFAULT_PRIMARY, DEFAULT_SECONDARY, ThemePalette};
pub use types::{PitchDeck, PresentationMetadata, SlideContent, SlideLayout};
