//! PowerPoint (.pptx) presentation writer.
//!
//! Produces a minimal PresentationML package: one slide master, one blank
//! layout, a theme carrying the brand colours, slides built from text boxes,
//! rectangles and ellipses, and optional notes pages.
//!
//! # Example
//!
//! ```rust
//! use launchkit::common::RGBColor;
//! use launchkit::pptx::{MutablePresentation, TextFormat};
//!
//! let mut pres = MutablePresentation::new();
//! let slide = pres.add_slide();
//! slide.add_rectangle(0, 0, 9144000, 109728, Some(RGBColor::new(0x3B, 0x82, 0xF6)));
//! slide
//!     .add_text_box("Problem", 457200, 365760, 8229600, 731520)
//!     .set_text_format(TextFormat::new().size(30.0).bold());
//! slide.set_notes("Start with the customer story.");
//!
//! let bytes = pres.to_bytes()?;
//! assert!(!bytes.is_empty());
//! # Ok::<(), launchkit::common::Error>(())
//! ```

pub mod constants;
mod format;
mod package;
mod parts;
mod pres;
mod shape;
mod slide;

pub use format::{TextAlign, TextFormat};
pub use package::PackageWriter;
pub use parts::{DocumentProperties, ThemeColors};
pub use pres::MutablePresentation;
pub use shape::{LineFormat, MutableShape};
pub use slide::MutableSlide;
