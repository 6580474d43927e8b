//! tonestrip generates strips of color swatches from a base HSL color and
//! reports how well black and white text read on each of them, using the
//! WCAG 2 contrast ratio.
//!
//! ```rust
//! use tonestrip::{generate_strip, Failures};
//!
//! let strip = generate_strip(155.0, 100.0, 0.0);
//! assert_eq!(strip.len(), 11);
//! assert_eq!(strip[0].hex, "#000000");
//! assert_eq!(strip[0].against_white.ratio, 21.0);
//! assert!(strip[0].failures().contains(Failures::BLACK_TEXT));
//! ```

#![deny(missing_docs)]

mod color;
mod contrast;
mod convert;
mod hsl;
mod input;
mod math;
mod rgb;
mod swatch;


pub use color::Component;
pub use contrast::{contrast_ratio, luminance, Contrast, AA_LARGE, AA_NORMAL};
pub use convert::hsl_to_rgb;
pub use hsl::Hsl;
pub use input::{Channel, InputError};
pub use rgb::Rgb;
pub use swatch::{generate_strip, Failures, Strip, Swatch, STEPS, STEP_COUNT};
