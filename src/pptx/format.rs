//! Format types for PPTX presentations.

use crate::common::RGBColor;

/// Horizontal paragraph alignment (`a:pPr/@algn`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// The DrawingML attribute value.
    pub fn as_ooxml(&self) -> &'static str {
        match self {
            Self::Left => "l",
            Self::Center => "ctr",
            Self::Right => "r",
        }
    }
}

/// Text formatting properties for shapes.
///
/// # Examples
///
/// ```rust
/// use launchkit::common::RGBColor;
/// use launchkit::pptx::{TextAlign, TextFormat};
///
/// let heading = TextFormat::new()
///     .size(30.0)
///     .bold()
///     .color(RGBColor::new(0x1F, 0x29, 0x37))
///     .align(TextAlign::Center);
/// assert_eq!(heading.size, Some(30.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextFormat {
    /// Font family
    pub font: Option<String>,
    /// Font size in points
    pub size: Option<f64>,
    /// Bold text
    pub bold: Option<bool>,
    /// Italic text
    pub italic: Option<bool>,
    /// Text color
    pub color: Option<RGBColor>,
    /// Paragraph alignment
    pub align: Option<TextAlign>,
}

impl TextFormat {
    /// Create an empty format (inherits everything from the master).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set font.
    pub fn font(mut self, font: &str) -> Self {
        self.font = Some(font.to_string());
        self
    }

    /// Builder method: set font size in points.
    pub fn size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Builder method: set bold.
    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    /// Builder method: set italic.
    pub fn italic(mut self) -> Self {
        self.italic = Some(true);
        self
    }

    /// Builder method: set text color.
    pub fn color(mut self, color: RGBColor) -> Self {
        self.color = Some(color);
        self
    }

    /// Builder method: set alignment.
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = Some(align);
        self
    }

    /// Whether the text is bold.
    pub fn is_bold(&self) -> bool {
        self.bold.unwrap_or(false)
    }

    /// Whether the text is italic.
    pub fn is_italic(&self) -> bool {
        self.italic.unwrap_or(false)
    }
}
