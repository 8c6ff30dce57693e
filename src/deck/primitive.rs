//! Positioned visual primitives produced by the layout engine.
//!
//! Coordinates are in inches on the 10 × 7.5 virtual canvas; the PPTX writer
//! converts them to EMU.

use crate::common::RGBColor;
use crate::pptx::TextFormat;

/// Position and size of a primitive, in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Outline drawn around a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub color: RGBColor,
    /// Line width in points
    pub width: f64,
}

/// One visual element on a slide canvas.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Filled rectangle: backgrounds, accent bars, dividers, placeholders
    Rect {
        frame: Frame,
        fill: RGBColor,
        border: Option<Border>,
    },
    /// Filled ellipse: bullet markers
    Ellipse { frame: Frame, fill: RGBColor },
    /// Text block
    Text {
        frame: Frame,
        text: String,
        format: TextFormat,
    },
}

impl Primitive {
    /// The primitive's frame.
    pub fn frame(&self) -> Frame {
        match self {
            Primitive::Rect { frame, .. }
            | Primitive::Ellipse { frame, .. }
            | Primitive::Text { frame, .. } => *frame,
        }
    }

    /// The text of a text block.
    pub fn text(&self) -> Option<&str> {
        match self {
            Primitive::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// The fill colour of a shape (`None` for text).
    pub fn fill(&self) -> Option<RGBColor> {
        match self {
            Primitive::Rect { fill, .. } | Primitive::Ellipse { fill, .. } => Some(*fill),
            Primitive::Text { .. } => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Primitive::Text { .. })
    }
}
