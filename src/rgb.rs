//! Model a color in the sRGB color space with 8-bit channels.

use std::fmt;

use crate::color::Components;

tonestrip_macros::gen_model! {
    /// A color in the sRGB color space, one byte per channel.
    #[derive(Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct Rgb {
        /// The red component of the color.
        red: u8,
        /// The green component of the color.
        green: u8,
        /// The blue component of the color.
        blue: u8,
    }
}

impl Rgb {
    /// Pure black, the dark text color swatches are checked against.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Pure white, the light text color swatches are checked against.
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Scale unit-range components to 8-bit channels, rounding to the
    /// nearest integer. Components outside `0..=1` are clamped.
    pub(crate) fn from_unit(components: Components) -> Self {
        let Components(red, green, blue) =
            components.map(|v| (255.0 * v).round().clamp(0.0, 255.0));
        Self::new(red as u8, green as u8, blue as u8)
    }

    /// Format as `#rrggbb` with lowercase hex digits.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Format each channel as a zero-padded, three digit decimal string.
    pub fn to_decimal(&self) -> [String; 3] {
        self.to_array().map(|channel| format!("{channel:03}"))
    }

    /// The relative luminance of this color.
    /// See [`crate::luminance`].
    pub fn luminance(&self) -> f64 {
        crate::contrast::luminance(self.red, self.green, self.blue)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
