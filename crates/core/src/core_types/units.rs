//! Semantic angle types for results that would otherwise be bare floats
//!
//! `geometry::angle` hands back a [`Degrees`] rather than an `f64` so the
//! unit travels with the value and cannot be mixed up with radians. Both
//! types deref to the raw f64 for arithmetic at call sites.
//!
//! # Usage
//! ```
//! use vector3_core::core_types::units::Radians;
//!
//! let right = Radians::new(std::f64::consts::FRAC_PI_2).to_degrees();
//! assert!((*right - 90.0).abs() < 1e-12);
//! ```

use std::fmt;
use std::ops::Deref;

/// Angle in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Degrees(f64);

impl Deref for Degrees {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl Degrees {
    /// Create a new angle in degrees
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Degrees(value)
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

/// Angle in radians, as produced by `acos`
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Radians(f64);

impl Radians {
    /// Create a new angle in radians
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Radians(value)
    }

    /// Convert to degrees
    #[inline]
    #[must_use]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0.to_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radians_to_degrees() {
        let d = Radians(std::f64::consts::PI).to_degrees();
        assert!((d.0 - 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_degrees_display() {
        assert_eq!(Degrees::new(90.0).to_string(), "90.0°");
        assert_eq!(Degrees::new(12.345).to_string(), "12.3°");
    }
}
