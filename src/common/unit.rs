//! Unit conversion utilities.
//!
//! Layout math runs in inches on a 10 × 7.5 virtual canvas; the PPTX writer
//! works in English Metric Units (EMU).

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

/// Width of the virtual slide canvas in inches (4:3).
pub const CANVAS_WIDTH_IN: f64 = 10.0;
/// Height of the virtual slide canvas in inches (4:3).
pub const CANVAS_HEIGHT_IN: f64 = 7.5;

#[inline]
pub fn inch_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

#[inline]
pub fn emu_to_inch(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

#[inline]
pub fn pt_to_emu_f64(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64) as i64
}

/// Font size in hundredths of a point, as used by `a:rPr/@sz`.
#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * 100.0).round().max(0.0) as u32
}
