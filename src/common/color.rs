//! RGB colour values as written into DrawingML (`a:srgbClr/@val`).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// RGB color representation.
///
/// Always rendered as six uppercase hex digits without a leading `#`, which
/// is the only form DrawingML accepts.
///
/// # Examples
///
/// ```rust
/// use launchkit::common::RGBColor;
///
/// let blue = RGBColor::from_hex("#3b82f6").unwrap();
/// assert_eq!(blue.to_hex(), "3B82F6");
///
/// let short = RGBColor::from_hex("F0A").unwrap();
/// assert_eq!(short.to_hex(), "FF00AA");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RGBColor {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl RGBColor {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an RGB color from a hex string.
    ///
    /// Accepts `RRGGBB` and the CSS shorthand `RGB`, each with or without a
    /// leading `#`. Surrounding whitespace is ignored.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Self::new(r, g, b))
            },
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok();
                let (r, g, b) = (digit(0)?, digit(1)?, digit(2)?);
                Some(Self::new(r * 17, g * 17, b * 17))
            },
            _ => None,
        }
    }

    /// Convert to hex string (without # prefix).
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl fmt::Display for RGBColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for RGBColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for RGBColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        RGBColor::from_hex(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid hex color: {raw:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_long_and_short_forms() {
        assert_eq!(RGBColor::from_hex("FF0000"), Some(RGBColor::new(255, 0, 0)));
        assert_eq!(RGBColor::from_hex("#00ff00"), Some(RGBColor::new(0, 255, 0)));
        assert_eq!(RGBColor::from_hex(" #abc "), Some(RGBColor::new(0xAA, 0xBB, 0xCC)));
    }

    #[test]
    fn test_from_hex_rejects_malformed_values() {
        assert_eq!(RGBColor::from_hex(""), None);
        assert_eq!(RGBColor::from_hex("#12345"), None);
        assert_eq!(RGBColor::from_hex("blue"), None);
        assert_eq!(RGBColor::from_hex("#GG0000"), None);
        assert_eq!(RGBColor::from_hex("+1+2+3"), None);
    }

    #[test]
    fn test_display_has_no_hash_prefix() {
        let color = RGBColor::new(0x3B, 0x82, 0xF6);
        assert_eq!(color.to_string(), "3B82F6");
        assert_eq!(color.to_string().len(), 6);
    }

    #[test]
    fn test_serde_round_trip_through_json_string() {
        let color: RGBColor = serde_json::from_str("\"#f59e0b\"").unwrap();
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"F59E0B\"");
        assert!(serde_json::from_str::<RGBColor>("\"nope\"").is_err());
    }
}
