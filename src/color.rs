//! Scalar types shared by the color models.

#[cfg(not(feature = "f32"))]
/// A 64-bit floating point value that all components are stored as.
pub type Component = f64;

#[cfg(feature = "f32")]
/// A 32-bit floating point value that all components are stored as.
pub type Component = f32;

/// Three bare components, used while converting between notations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_applies_to_every_component() {
        let c = Components(10.0, 20.0, 30.0).map(|v| v / 10.0);
        assert_eq!(c, Components(1.0, 2.0, 3.0));
    }
}
