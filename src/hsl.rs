//! Model a color with the HSL notation in the sRGB color space.
//!
//! Unlike CSS, the saturation and lightness components are stored as
//! percentages (`0..=100`), the way color pickers present them.

use crate::math::{clamp_percent, normalize_hue};
use crate::color::Components;
use crate::Component;

tonestrip_macros::gen_model! {
    /// A color specified with the HSL notation in the sRGB color space.
    #[cfg_attr(feature = "serde", derive(serde::Serialize))]
    pub struct Hsl {
        /// The hue component of the color, in degrees.
        hue: Component,
        /// The saturation component of the color, in percent.
        saturation: Component,
        /// The lightness component of the color, in percent.
        lightness: Component,
    }
}

impl Hsl {
    /// Return this color with the hue wrapped into `[0, 360)` and saturation
    /// and lightness clamped into `[0, 100]`. Non-finite components become
    /// zero.
    pub fn normalized(&self) -> Self {
        let normalized = Self::new(
            normalize_hue(self.hue),
            clamp_percent(self.saturation),
            clamp_percent(self.lightness),
        );

        if normalized != *self {
            tracing::debug!(
                from = ?self.to_array(),
                to = ?normalized.to_array(),
                "normalized out of range hsl"
            );
        }

        normalized
    }

    /// Return this color with a different lightness.
    pub fn with_lightness(&self, lightness: Component) -> Self {
        Self::new(self.hue, self.saturation, lightness)
    }

    /// Format the color as a CSS `hsl()` function, usable as a background
    /// style.
    pub fn to_css(&self) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

impl From<Hsl> for Components {
    fn from(value: Hsl) -> Self {
        Components(value.hue, value.saturation, value.lightness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_range_colors_are_untouched() {
        let hsl = Hsl::new(155.0, 100.0, 0.0);
        assert_eq!(hsl.normalized(), hsl);
    }

    #[test]
    fn out_of_range_colors_are_normalized() {
        let hsl = Hsl::new(-90.0, 140.0, -3.0).normalized();
        assert_eq!(hsl, Hsl::new(270.0, 100.0, 0.0));

        let hsl = Hsl::new(Component::NAN, 50.0, Component::INFINITY).normalized();
        assert_eq!(hsl, Hsl::new(0.0, 50.0, 0.0));
    }

    #[test]
    fn array_conversions() {
        let hsl = Hsl::from([10.0, 20.0, 30.0]);
        assert_eq!(hsl.hue, 10.0);
        assert_eq!(hsl.saturation, 20.0);
        assert_eq!(hsl.lightness, 30.0);
        assert_eq!(<[Component; 3]>::from(hsl), [10.0, 20.0, 30.0]);
    }

    #[test]
    fn css_notation() {
        assert_eq!(Hsl::new(155.0, 100.0, 40.0).to_css(), "hsl(155, 100%, 40%)");
        assert_eq!(Hsl::new(12.5, 50.0, 7.5).to_css(), "hsl(12.5, 50%, 7.5%)");
    }

    #[test]
    fn into_components() {
        let c = Components::from(Hsl::new(120.0, 50.0, 25.0));
        assert_eq!(c, Components(120.0, 50.0, 25.0));
    }
}
