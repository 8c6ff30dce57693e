//! Colour theming for a presentation build.
//!
//! Brand colours (primary, secondary, accent) come from the user; every
//! structural element uses fixed neutral colours.

use crate::common::RGBColor;

/// Default brand primary (blue).
pub const DEFAULT_PRIMARY: RGBColor = RGBColor::new(0x3B, 0x82, 0xF6);
/// Default brand secondary (violet).
pub const DEFAULT_SECONDARY: RGBColor = RGBColor::new(0x8B, 0x5C, 0xF6);
/// Default brand accent (amber).
pub const DEFAULT_ACCENT: RGBColor = RGBColor::new(0xF5, 0x9E, 0x0B);

const TEXT: RGBColor = RGBColor::new(0x1F, 0x29, 0x37);
const LIGHT_TEXT: RGBColor = RGBColor::new(0x6B, 0x72, 0x80);
const BACKGROUND: RGBColor = RGBColor::new(0xFF, 0xFF, 0xFF);
const LIGHT_BG: RGBColor = RGBColor::new(0xF3, 0xF4, 0xF6);
const DIVIDER: RGBColor = RGBColor::new(0xE5, 0xE7, 0xEB);

/// Resolved set of brand and neutral colours used by one presentation build.
///
/// # Examples
///
/// ```rust
/// use launchkit::deck::ThemePalette;
///
/// let palette = ThemePalette::from_brand("#10B981", "not-a-color", "#F0A");
/// assert_eq!(palette.primary.to_hex(), "10B981");
/// assert_eq!(palette.secondary.to_hex(), "8B5CF6"); // default kept
/// assert_eq!(palette.accent.to_hex(), "FF00AA");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePalette {
    pub primary: RGBColor,
    pub secondary: RGBColor,
    pub accent: RGBColor,
    pub text: RGBColor,
    pub light_text: RGBColor,
    pub background: RGBColor,
    pub light_bg: RGBColor,
    pub divider: RGBColor,
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY,
            secondary: DEFAULT_SECONDARY,
            accent: DEFAULT_ACCENT,
            text: TEXT,
            light_text: LIGHT_TEXT,
            background: BACKGROUND,
            light_bg: LIGHT_BG,
            divider: DIVIDER,
        }
    }
}

impl ThemePalette {
    /// Build a palette from user-supplied brand colours.
    ///
    /// Each value that is not a valid hex colour keeps its default and is
    /// logged; neutral colours are never taken from the user.
    pub fn from_brand(primary: &str, secondary: &str, accent: &str) -> Self {
        Self {
            primary: resolve("primary", primary, DEFAULT_PRIMARY),
            secondary: resolve("secondary", secondary, DEFAULT_SECONDARY),
            accent: resolve("accent", accent, DEFAULT_ACCENT),
            ..Self::default()
        }
    }
}

fn resolve(slot: &str, value: &str, default: RGBColor) -> RGBColor {
    RGBColor::from_hex(value).unwrap_or_else(|| {
        log::warn!(
            "Invalid {} brand color {:?}, using default {}",
            slot,
            value,
            default
        );
        default
    })
}
