//! Presentation assembler.
//!
//! Runs the layout engine over every slide of a deck, maps the primitives onto
//! PPTX shapes and serializes the package. The artifact travels as base64.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use super::layout::LayoutEngine;
use super::primitive::{Frame, Primitive};
use super::theme::ThemePalette;
use super::types::{PitchDeck, PresentationMetadata, SlideContent};
use crate::common::Result;
use crate::common::unit::inch_to_emu;
use crate::pptx::{LineFormat, MutablePresentation, MutableSlide, ThemeColors};

/// Assemble a deck into a base64-encoded PPTX document.
///
/// Slides are rendered in input order. `palette` defaults to the standard
/// brand colours.
///
/// # Errors
///
/// Returns [`crate::common::Error::InvalidContent`] when any text contains
/// characters that cannot be stored in the document.
pub fn assemble(
    slides: &[SlideContent],
    metadata: &PresentationMetadata,
    palette: Option<&ThemePalette>,
) -> Result<String> {
    let bytes = assemble_bytes(slides, metadata, palette)?;
    Ok(STANDARD.encode(bytes))
}

/// Assemble a deck into raw PPTX bytes.
pub fn assemble_bytes(
    slides: &[SlideContent],
    metadata: &PresentationMetadata,
    palette: Option<&ThemePalette>,
) -> Result<Vec<u8>> {
    let default_palette = ThemePalette::default();
    let palette = palette.unwrap_or(&default_palette);
    build_presentation(slides, metadata, palette).to_bytes()
}

fn build_presentation(
    slides: &[SlideContent],
    metadata: &PresentationMetadata,
    palette: &ThemePalette,
) -> MutablePresentation {
    let mut pres = MutablePresentation::new();

    let props = pres.properties_mut();
    props.title = metadata.title.clone();
    props.subject = metadata.subtitle.clone();
    props.creator = metadata.author.clone();
    props.created = metadata.created_at();

    pres.set_theme_colors(ThemeColors {
        dark1: palette.text,
        light1: palette.background,
        dark2: palette.light_text,
        light2: palette.light_bg,
        accent1: palette.primary,
        accent2: palette.secondary,
        accent3: palette.accent,
    });

    let engine = LayoutEngine::new(palette, metadata);
    for (index, content) in slides.iter().enumerate() {
        let slide = pres.add_slide();
        for primitive in engine.layout(content, index) {
            place(slide, primitive);
        }
        if let Some(notes) = content.notes() {
            slide.set_notes(notes);
        }
    }

    pres
}

/// Emu coordinates of a frame: (x, y, width, height).
fn emu(frame: Frame) -> (i64, i64, i64, i64) {
    (
        inch_to_emu(frame.x),
        inch_to_emu(frame.y),
        inch_to_emu(frame.width),
        inch_to_emu(frame.height),
    )
}

fn place(slide: &mut MutableSlide, primitive: Primitive) {
    match primitive {
        Primitive::Rect {
            frame,
            fill,
            border,
        } => {
            let (x, y, w, h) = emu(frame);
            let shape = slide.add_rectangle(x, y, w, h, Some(fill));
            if let Some(border) = border {
                shape.set_line(LineFormat {
                    color: border.color,
                    width: border.width,
                });
            }
        },
        Primitive::Ellipse { frame, fill } => {
            let (x, y, w, h) = emu(frame);
            slide.add_ellipse(x, y, w, h, Some(fill));
        },
        Primitive::Text {
            frame,
            text,
            format,
        } => {
            let (x, y, w, h) = emu(frame);
            slide.add_text_box(&text, x, y, w, h).set_text_format(format);
        },
    }
}

/// A rendered pitch deck: the slide JSON plus the document artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchDeckOutput {
    pub slides: Vec<SlideContent>,
    pub metadata: PresentationMetadata,
    /// Base64 PPTX; empty when rendering failed
    pub pptx_base64: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pptx_error: Option<String>,
}

impl PitchDeckOutput {
    /// Whether a document artifact is available.
    pub fn has_artifact(&self) -> bool {
        !self.pptx_base64.is_empty()
    }

    /// Decode the document artifact.
    pub fn pptx_bytes(&self) -> Result<Vec<u8>> {
        Ok(STANDARD.decode(&self.pptx_base64)?)
    }
}

/// Render a generated deck.
///
/// A rendering failure never discards the slide data: the artifact is left
/// empty and the error message is recorded in `pptx_error`.
pub fn render_pitch_deck(deck: PitchDeck, palette: Option<&ThemePalette>) -> PitchDeckOutput {
    let (pptx_base64, pptx_error) = match assemble(&deck.slides, &deck.metadata, palette) {
        Ok(encoded) => {
            log::info!(
                "Rendered pitch deck {:?}: {} slides, {} base64 bytes",
                deck.metadata.title,
                deck.slides.len(),
                encoded.len()
            );
            (encoded, None)
        },
        Err(e) => {
            log::error!("Failed to render pitch deck {:?}: {}", deck.metadata.title, e);
            (String::new(), Some(e.to_string()))
        },
    };

    PitchDeckOutput {
        slides: deck.slides,
        metadata: deck.metadata,
        pptx_base64,
        pptx_error,
    }
}
