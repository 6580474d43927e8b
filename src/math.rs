//! Math utility functions.

use crate::Component;

/// Wrap a hue in degrees into `[0, 360)`. Negative hues wrap forward, so
/// `-30` becomes `330`. Non-finite hues become `0`.
pub fn normalize_hue(hue: Component) -> Component {
    if !hue.is_finite() {
        return 0.0;
    }
    let hue = hue.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Clamp a percentage into `[0, 100]`. Non-finite values become `0`.
pub fn clamp_percent(value: Component) -> Component {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Round to one decimal place, the precision contrast ratios are reported
/// with.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_wraps_into_range() {
        assert_eq!(normalize_hue(0.0), 0.0);
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(370.0), 10.0);
        assert_eq!(normalize_hue(-30.0), 330.0);
        assert_eq!(normalize_hue(-720.0), 0.0);
        assert_eq!(normalize_hue(Component::NAN), 0.0);
        assert_eq!(normalize_hue(Component::INFINITY), 0.0);
    }

    #[test]
    fn percent_is_clamped() {
        assert_eq!(clamp_percent(-5.0), 0.0);
        assert_eq!(clamp_percent(42.5), 42.5);
        assert_eq!(clamp_percent(150.0), 100.0);
        assert_eq!(clamp_percent(Component::NAN), 0.0);
        assert_eq!(clamp_percent(Component::NEG_INFINITY), 0.0);
    }

    #[test]
    fn rounds_to_one_decimal() {
        assert_eq!(round_to_tenth(20.999), 21.0);
        assert_eq!(round_to_tenth(4.46), 4.5);
        assert_eq!(round_to_tenth(4.44), 4.4);
        assert_eq!(round_to_tenth(1.0), 1.0);
    }
}
