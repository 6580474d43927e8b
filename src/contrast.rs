//! WCAG 2 relative luminance and contrast ratio.
//! <https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio>

use crate::math::round_to_tenth;
use crate::Rgb;

/// Minimum contrast ratio for normal text (WCAG AA).
pub const AA_NORMAL: f64 = 4.5;

/// Minimum contrast ratio for large text, 18pt or 14pt bold (WCAG AA).
pub const AA_LARGE: f64 = 3.0;

/// Linearize one 8-bit sRGB channel.
fn channel_to_linear(channel: u8) -> f64 {
    let value = f64::from(channel) / 255.0;
    if value <= 0.03928 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the relative luminance of an sRGB color.
///
/// Returns a value in `[0.0, 1.0]` where 0 is black and 1 is white.
pub fn luminance(red: u8, green: u8, blue: u8) -> f64 {
    channel_to_linear(red) * 0.2126
        + channel_to_linear(green) * 0.7152
        + channel_to_linear(blue) * 0.0722
}

/// Compute the contrast ratio between two colors, rounded to one decimal.
///
/// The result lies in `[1.0, 21.0]` and does not depend on argument order.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = a.luminance();
    let lb = b.luminance();
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    round_to_tenth((lighter + 0.05) / (darker + 0.05))
}

/// The contrast between two colors and whether it is enough for text.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Contrast {
    /// The contrast ratio, rounded to one decimal.
    pub ratio: f64,
    /// Set when `ratio` meets [`AA_NORMAL`].
    pub passes: bool,
    /// Set when `ratio` meets [`AA_LARGE`].
    pub passes_large: bool,
}

impl Contrast {
    /// Classify an already rounded contrast ratio.
    pub fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            passes: ratio >= AA_NORMAL,
            passes_large: ratio >= AA_LARGE,
        }
    }

    /// Measure the contrast between two colors.
    pub fn between(a: Rgb, b: Rgb) -> Self {
        Self::from_ratio(contrast_ratio(a, b))
    }
}
