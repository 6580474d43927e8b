//! Conversion from the HSL notation to 8-bit sRGB.
//!
//! Every conversion normalizes its input first (see [`Hsl::normalized`]), so
//! any HSL value, including out of range or non-finite ones, produces a
//! valid [`Rgb`].

use crate::{Component, Hsl, Rgb};

impl Hsl {
    /// Convert this color from the HSL notation to 8-bit sRGB.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::from_unit(util::hsl_to_rgb(&self.normalized().into()))
    }

    /// Convert this color to sRGB and format it as `#rrggbb`.
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }

    /// Convert this color to sRGB and format each channel as a zero-padded
    /// three digit decimal string.
    pub fn to_decimal(&self) -> [String; 3] {
        self.to_rgb().to_decimal()
    }
}

/// Convert a hue (degrees), saturation and lightness (percent) to 8-bit
/// sRGB.
pub fn hsl_to_rgb(hue: Component, saturation: Component, lightness: Component) -> Rgb {
    Hsl::new(hue, saturation, lightness).to_rgb()
}

mod util {
    use crate::color::Components;

    /// Convert from HSL notation to unit-range RGB.
    /// <https://drafts.csswg.org/css-color-4/#hsl-to-rgb>
    ///
    /// Saturation and lightness are taken in percent. Scaling happens in
    /// this order so channels sitting near a rounding boundary come out the
    /// same as the reference formula in double precision.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        let lightness = lightness / 100.0;
        let a = saturation * lightness.min(1.0 - lightness) / 100.0;

        macro_rules! f {
            ($n:expr) => {{
                let k = ($n + hue / 30.0) % 12.0;
                lightness - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
            }};
        }

        Components(f!(0.0), f!(8.0), f!(4.0))
    }
}
