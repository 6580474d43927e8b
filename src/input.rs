//! Parsing of user supplied HSL values.
//!
//! Form controls and command lines hand over text. This module turns that
//! text into an [`Hsl`] before any color math runs. Range checking is left to
//! [`Hsl::normalized`]; only text that is not a number is rejected.

use std::fmt;
use std::str::FromStr;

use crate::{Component, Hsl};

/// One of the three components of an [`Hsl`] color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// The hue component.
    Hue,
    /// The saturation component.
    Saturation,
    /// The lightness component.
    Lightness,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Channel::Hue => "hue",
            Channel::Saturation => "saturation",
            Channel::Lightness => "lightness",
        })
    }
}

/// Reasons text could not be turned into an [`Hsl`] color.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    /// A component was empty or only whitespace.
    #[error("{channel} is empty")]
    Empty {
        /// The offending component.
        channel: Channel,
    },
    /// A component was not a number.
    #[error("{channel} is not a number: {value:?}")]
    Invalid {
        /// The offending component.
        channel: Channel,
        /// The text that failed to parse.
        value: String,
    },
    /// A component parsed to NaN or infinity.
    #[error("{channel} must be a finite number")]
    NotFinite {
        /// The offending component.
        channel: Channel,
    },
    /// The color did not have exactly three components.
    #[error("expected 3 components (hue, saturation, lightness), found {found}")]
    Arity {
        /// The number of components found.
        found: usize,
    },
}

/// Parse a single component, allowing the unit suffix a user might type.
fn parse_component(channel: Channel, text: &str) -> Result<Component, InputError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty { channel });
    }

    let number = match channel {
        Channel::Hue => trimmed.strip_suffix("deg").unwrap_or(trimmed),
        Channel::Saturation | Channel::Lightness => {
            trimmed.strip_suffix('%').unwrap_or(trimmed)
        }
    };

    let value = number
        .trim_end()
        .parse::<Component>()
        .map_err(|_| InputError::Invalid {
            channel,
            value: trimmed.to_string(),
        })?;

    if !value.is_finite() {
        return Err(InputError::NotFinite { channel });
    }

    Ok(value)
}

impl Hsl {
    /// Parse the three components of a color from separate strings, as
    /// received from individual form fields.
    pub fn parse(hue: &str, saturation: &str, lightness: &str) -> Result<Self, InputError> {
        Ok(Self::new(
            parse_component(Channel::Hue, hue)?,
            parse_component(Channel::Saturation, saturation)?,
            parse_component(Channel::Lightness, lightness)?,
        ))
    }
}

impl FromStr for Hsl {
    type Err = InputError;

    /// Accepts `hsl(155, 100%, 40%)`, `155, 100, 40` or `155 100 40`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let inner = s
            .strip_prefix("hsl(")
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(s);

        let parts: Vec<&str> = if inner.contains(',') {
            inner.split(',').collect()
        } else {
            inner.split_whitespace().collect()
        };

        match parts.as_slice() {
            [hue, saturation, lightness] => Self::parse(hue, saturation, lightness),
            _ => Err(InputError::Arity { found: parts.len() }),
        }
    }
}
