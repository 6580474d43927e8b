//! Generate a strip of swatches stepping through lightness, with the
//! contrast of each swatch against black and white text.

use bitflags::bitflags;

use crate::{Component, Contrast, Hsl, Rgb};

/// Number of swatches in a strip.
pub const STEP_COUNT: usize = 11;

/// The lightness offsets of a strip, in display order.
pub const STEPS: [u8; STEP_COUNT] = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100];

/// A full strip of swatches, ordered by ascending step.
pub type Strip = [Swatch; STEP_COUNT];

bitflags! {
    /// The text colors that do not read well on a [`Swatch`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Failures : u8 {
        /// Black normal text fails [`crate::AA_NORMAL`].
        const BLACK_TEXT = 1 << 0;
        /// White normal text fails [`crate::AA_NORMAL`].
        const WHITE_TEXT = 1 << 1;
        /// Black large text fails [`crate::AA_LARGE`].
        const BLACK_TEXT_LARGE = 1 << 2;
        /// White large text fails [`crate::AA_LARGE`].
        const WHITE_TEXT_LARGE = 1 << 3;
    }
}

/// One color of a strip and its contrast against black and white.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Swatch {
    /// The lightness offset this swatch was generated for.
    pub step: u8,
    /// The resolved lightness, `min(step + base lightness, 100)`.
    pub lightness: Component,
    /// The resolved color.
    pub rgb: Rgb,
    /// `rgb` formatted as `#rrggbb`.
    pub hex: String,
    /// Contrast of the swatch against black.
    pub against_black: Contrast,
    /// Contrast of the swatch against white.
    pub against_white: Contrast,
    #[cfg_attr(feature = "serde", serde(skip))]
    base: Hsl,
}

impl Swatch {
    fn new(base: Hsl, step: u8) -> Self {
        let lightness = (Component::from(step) + base.lightness).min(100.0);
        let rgb = base.with_lightness(lightness).to_rgb();

        Self {
            step,
            lightness,
            rgb,
            hex: rgb.to_hex(),
            against_black: Contrast::between(rgb, Rgb::BLACK),
            against_white: Contrast::between(rgb, Rgb::WHITE),
            base,
        }
    }

    /// The resolved color of this swatch in the HSL notation.
    pub fn hsl(&self) -> Hsl {
        self.base.with_lightness(self.lightness)
    }

    /// A short caption for the swatch, e.g. `color-30`.
    pub fn label(&self) -> String {
        format!("color-{}", self.step)
    }

    /// The text colors that fail the contrast thresholds on this swatch.
    pub fn failures(&self) -> Failures {
        let mut failures = Failures::empty();
        failures.set(Failures::BLACK_TEXT, !self.against_black.passes);
        failures.set(Failures::WHITE_TEXT, !self.against_white.passes);
        failures.set(Failures::BLACK_TEXT_LARGE, !self.against_black.passes_large);
        failures.set(Failures::WHITE_TEXT_LARGE, !self.against_white.passes_large);
        failures
    }
}

impl Hsl {
    /// Generate the strip of swatches for this base color.
    ///
    /// Steps whose lightness reaches the 100 ceiling all resolve to the same
    /// color; they are kept so the strip always has [`STEP_COUNT`] entries.
    pub fn strip(&self) -> Strip {
        let base = self.normalized();
        tracing::trace!(base = %base.to_css(), "generating strip");
        STEPS.map(|step| Swatch::new(base, step))
    }
}

/// Generate the strip of swatches for a hue (degrees), saturation and
/// lightness (percent).
pub fn generate_strip(hue: Component, saturation: Component, lightness: Component) -> Strip {
    Hsl::new(hue, saturation, lightness).strip()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AA_NORMAL;

    #[test]
    fn always_eleven_swatches_in_step_order() {
        for (h, s, l) in [(0.0, 0.0, 0.0), (155.0, 100.0, 0.0), (300.0, 40.0, 95.0)] {
            let strip = generate_strip(h, s, l);
            assert_eq!(strip.len(), STEP_COUNT);
            let steps: Vec<u8> = strip.iter().map(|s| s.step).collect();
            assert_eq!(steps, STEPS);
        }
    }

    #[test]
    fn lightness_is_non_decreasing_and_capped() {
        for l in [0.0, 3.5, 9.0, 45.0, 100.0] {
            let strip = generate_strip(210.0, 60.0, l);
            for pair in strip.windows(2) {
                assert!(pair[0].lightness <= pair[1].lightness);
            }
            assert!(strip.iter().all(|s| s.lightness <= 100.0));
        }
    }

    #[test]
    fn default_picker_color() {
        let strip = generate_strip(155.0, 100.0, 0.0);

        for (swatch, step) in strip.iter().zip(STEPS) {
            assert_eq!(swatch.lightness, Component::from(step));
        }

        let first = &strip[0];
        assert_eq!(first.rgb, Rgb::BLACK);
        assert_eq!(first.hex, "#000000");
        assert_eq!(first.against_white.ratio, 21.0);
        assert_eq!(first.against_black.ratio, 1.0);
        assert!(first.against_white.passes);
        assert!(!first.against_black.passes);
        assert_eq!(
            first.failures(),
            Failures::BLACK_TEXT | Failures::BLACK_TEXT_LARGE
        );

        let last = &strip[STEP_COUNT - 1];
        assert_eq!(last.rgb, Rgb::WHITE);
        assert_eq!(last.against_black.ratio, 21.0);
        assert_eq!(last.failures(), Failures::WHITE_TEXT | Failures::WHITE_TEXT_LARGE);
    }

    #[test]
    fn collapsed_steps_are_kept() {
        let strip = generate_strip(20.0, 80.0, 75.0);
        let white: Vec<u8> = strip
            .iter()
            .filter(|s| s.lightness == 100.0)
            .map(|s| s.step)
            .collect();
        assert_eq!(white, [30, 40, 50, 60, 70, 80, 90, 100]);
        assert!(strip[3..].iter().all(|s| s.rgb == Rgb::WHITE));
    }

    #[test]
    fn pass_flags_follow_ratios() {
        for hue in (0..360).step_by(30) {
            for swatch in generate_strip(hue as Component, 70.0, 4.0) {
                assert_eq!(
                    swatch.against_black.passes,
                    swatch.against_black.ratio >= AA_NORMAL
                );
                assert_eq!(
                    swatch.against_white.passes,
                    swatch.against_white.ratio >= AA_NORMAL
                );
                assert_eq!(
                    swatch.failures().contains(Failures::BLACK_TEXT),
                    !swatch.against_black.passes
                );
            }
        }
    }

    #[test]
    fn hex_matches_rgb() {
        for swatch in generate_strip(42.0, 90.0, 5.0) {
            assert_eq!(swatch.hex, swatch.rgb.to_hex());
            assert_eq!(swatch.rgb, swatch.hsl().to_rgb());
        }
    }

    #[test]
    fn base_is_normalized() {
        assert_eq!(
            generate_strip(-205.0, 180.0, -10.0),
            generate_strip(155.0, 100.0, 0.0)
        );
    }

    #[test]
    fn labels() {
        let strip = generate_strip(0.0, 0.0, 0.0);
        assert_eq!(strip[0].label(), "color-0");
        assert_eq!(strip[7].label(), "color-70");
    }

    #[test]
    fn repeated_calls_are_identical() {
        assert_eq!(generate_strip(77.0, 33.0, 6.0), generate_strip(77.0, 33.0, 6.0));
    }
}
