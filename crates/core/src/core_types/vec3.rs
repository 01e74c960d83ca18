//! 3D vector value type for positions, offsets, and directions.
//!
//! `Vector3` is a plain `Copy` value with three `f64` components. It offers
//! two styles of use:
//! - Mutating methods (`set`, `copy_from`, `negate`, `add`, `subtract`,
//!   `multiply_scalar`, `normalize`, `rescale`) that change the receiver in
//!   place and return `&mut Self` so calls can be chained
//! - Pure methods and operators (`length`, `dot`, `normalized`, `+`, `-`, `*`)
//!   that leave their operands untouched and return a new value
//!
//! Zero-length vectors are never an error: `normalize` and `rescale` leave
//! them unchanged instead of dividing by zero.
//!
//! # Usage
//! ```
//! use vector3_core::Vector3;
//!
//! let mut v = Vector3::new(3.0, 0.0, 4.0);
//! v.normalize().multiply_scalar(10.0);
//! assert!((v.length() - 10.0).abs() < 1e-12);
//!
//! let w = Vector3::X * 2.0 + Vector3::Y;
//! assert_eq!(w.dot(&Vector3::Y), 1.0);
//! ```

use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::fmt;
use std::ops;
use tracing::{trace, warn};

use crate::error::VectorError;

/// A 3-component Euclidean vector.
///
/// No finiteness is enforced; NaN and infinite components flow through the
/// arithmetic like any other `f64`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// The zero vector
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// Unit vector along the x axis
    pub const X: Vector3 = Vector3::new(1.0, 0.0, 0.0);

    /// Unit vector along the y axis
    pub const Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);

    /// Unit vector along the z axis
    pub const Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Create a vector from its components
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// Build a vector from a raw component slice, naming the parameter in
    /// the error when the slice is not exactly three long.
    pub(crate) fn from_components(
        param_name: &str,
        components: &[f64],
    ) -> Result<Self, VectorError> {
        match *components {
            [x, y, z] => Ok(Vector3::new(x, y, z)),
            _ => {
                warn!(
                    param = param_name,
                    found = components.len(),
                    "Rejected component slice that is not a 3D vector"
                );
                Err(VectorError::component_count(param_name, components.len()))
            }
        }
    }

    // ------------------------------------------------------------------------
    // In-place operations
    // ------------------------------------------------------------------------

    /// Overwrite all three components.
    #[inline]
    pub fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Overwrite all three components from `other`.
    #[inline]
    pub fn copy_from(&mut self, other: &Vector3) -> &mut Self {
        *self = *other;
        self
    }

    /// Flip the direction: `(x, y, z) -> (-x, -y, -z)`.
    #[inline]
    pub fn negate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    /// Add `v` into this vector component-wise.
    ///
    /// This is the chaining counterpart of the `+` operator. Calling it with
    /// `std::ops::Add` imported makes method syntax resolve to the operator
    /// trait instead, so prefer `+` in that situation.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn add(&mut self, v: &Vector3) -> &mut Self {
        self.x += v.x;
        self.y += v.y;
        self.z += v.z;
        self
    }

    /// Subtract `v` from this vector component-wise.
    #[inline]
    pub fn subtract(&mut self, v: &Vector3) -> &mut Self {
        self.x -= v.x;
        self.y -= v.y;
        self.z -= v.z;
        self
    }

    /// Scale every component by `scalar`.
    #[inline]
    pub fn multiply_scalar(&mut self, scalar: f64) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
        self
    }

    /// Rescale to unit length.
    ///
    /// A vector whose length is exactly zero is left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len == 0.0 {
            trace!("normalize: zero-length vector left unchanged");
            return self;
        }
        self.x /= len;
        self.y /= len;
        self.z /= len;
        self
    }

    /// Rescale so that the length becomes `new_scale`, keeping the direction.
    ///
    /// A vector whose length is exactly zero has no direction and is left
    /// unchanged. A negative `new_scale` flips the direction.
    pub fn rescale(&mut self, new_scale: f64) -> &mut Self {
        let len = self.length();
        if len == 0.0 {
            trace!(new_scale, "rescale: zero-length vector left unchanged");
            return self;
        }
        self.multiply_scalar(new_scale / len)
    }

    // ------------------------------------------------------------------------
    // Pure operations
    // ------------------------------------------------------------------------

    /// Euclidean norm `sqrt(x² + y² + z²)`.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared norm `x² + y² + z²`.
    ///
    /// Cheaper than [`Vector3::length`] since no square root is taken; use
    /// it for comparisons where the exact length is not needed.
    #[inline]
    #[must_use]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Scalar dot product.
    #[inline]
    #[must_use]
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Unit-length copy of this vector (unchanged copy if zero-length).
    #[must_use]
    pub fn normalized(self) -> Self {
        let mut v = self;
        v.normalize();
        v
    }

    /// Copy of this vector with length `new_scale` (unchanged copy if zero-length).
    #[must_use]
    pub fn rescaled(self, new_scale: f64) -> Self {
        let mut v = self;
        v.rescale(new_scale);
        v
    }

    /// True if no component is NaN or infinite
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

// ============================================================================
// OPERATORS
// ============================================================================

impl ops::Add for Vector3 {
    type Output = Vector3;
    #[inline]
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl ops::AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vector3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl ops::Sub for Vector3 {
    type Output = Vector3;
    #[inline]
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl ops::SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vector3) {
        self.subtract(&rhs);
    }
}

impl ops::Neg for Vector3 {
    type Output = Vector3;
    #[inline]
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl ops::Mul<f64> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl ops::Mul<Vector3> for f64 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl ops::MulAssign<f64> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        self.multiply_scalar(rhs);
    }
}

impl ops::Div<f64> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn div(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl ops::DivAssign<f64> for Vector3 {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        self.x /= rhs;
        self.y /= rhs;
        self.z /= rhs;
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<[f64; 3]> for Vector3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> [f64; 3] {
        [v.x, v.y, v.z]
    }
}

impl TryFrom<&[f64]> for Vector3 {
    type Error = VectorError;

    /// Fails unless the slice holds exactly three components.
    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        Vector3::from_components("components", components)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ============================================================================
// TOLERANCE COMPARISON
// ============================================================================

impl AbsDiffEq for Vector3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Vector3 {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_is_zero() {
        assert_eq!(Vector3::default(), Vector3::ZERO);
        assert_eq!(Vector3::ZERO.length(), 0.0);
    }

    #[test]
    fn test_set_and_copy_from() {
        let mut v = Vector3::ZERO;
        v.set(1.0, 2.0, 3.0);
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));

        let source = Vector3::new(-4.0, 5.5, 0.25);
        v.copy_from(&source);
        assert_eq!(v, source);
    }

    #[test]
    fn test_copy_is_independent() {
        let original = Vector3::new(1.0, 2.0, 3.0);
        let mut copy = original;
        copy.set(9.0, 9.0, 9.0);
        assert_eq!(original, Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(copy, Vector3::new(9.0, 9.0, 9.0));
    }

    #[test]
    fn test_mutators_chain() {
        let mut v = Vector3::new(1.0, 2.0, 3.0);
        v.add(&Vector3::new(1.0, 1.0, 1.0))
            .multiply_scalar(2.0)
            .subtract(&Vector3::new(4.0, 6.0, 8.0))
            .negate();
        assert_eq!(v, Vector3::ZERO);
    }

    #[test]
    fn test_negate() {
        let mut v = Vector3::new(1.0, -2.0, 3.0);
        v.negate();
        assert_eq!(v, Vector3::new(-1.0, 2.0, -3.0));
    }

    #[test]
    fn test_length_of_3_4_5() {
        let v = Vector3::new(3.0, 4.0, 0.0);
        assert_eq!(v.length(), 5.0);
        assert_eq!(v.length_squared(), 25.0);
    }

    #[test]
    fn test_normalize_nonzero() {
        let mut v = Vector3::new(0.0, 0.0, -7.0);
        v.normalize();
        assert_eq!(v, Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_normalize_zero_is_noop() {
        let mut v = Vector3::ZERO;
        v.normalize();
        assert_eq!(v, Vector3::ZERO);
        assert!(v.is_finite());
    }

    #[test]
    fn test_rescale() {
        let mut v = Vector3::new(3.0, 0.0, 0.0);
        v.rescale(2.0);
        assert_relative_eq!(v, Vector3::new(2.0, 0.0, 0.0));

        let mut zero = Vector3::ZERO;
        zero.rescale(5.0);
        assert_eq!(zero, Vector3::ZERO);
    }

    #[test]
    fn test_rescale_negative_flips_direction() {
        let v = Vector3::new(0.0, 2.0, 0.0).rescaled(-3.0);
        assert_relative_eq!(v, Vector3::new(0.0, -3.0, 0.0));
    }

    #[test]
    fn test_pure_variants_leave_receiver_alone() {
        let v = Vector3::new(0.0, 3.0, 4.0);
        let unit = v.normalized();
        assert_relative_eq!(unit.length(), 1.0);
        assert_eq!(v, Vector3::new(0.0, 3.0, 4.0));
    }

    #[test]
    fn test_dot() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, -5.0, 6.0);
        assert_eq!(a.dot(&b), 12.0);
        assert_eq!(Vector3::X.dot(&Vector3::Y), 0.0);
    }

    #[test]
    fn test_operators() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Vector3::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Vector3::new(0.5, 1.5, 2.5));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a / 2.0, Vector3::new(0.5, 1.0, 1.5));

        let mut c = a;
        c += b;
        c -= a;
        c *= 4.0;
        c /= 2.0;
        assert_eq!(c, Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_array_and_tuple_conversions() {
        let v: Vector3 = [1.0, 2.0, 3.0].into();
        let w: Vector3 = (1.0, 2.0, 3.0).into();
        assert_eq!(v, w);
        let arr: [f64; 3] = v.into();
        assert_eq!(arr, [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_try_from_slice() {
        let three: &[f64] = &[1.0, 2.0, 3.0];
        assert_eq!(Vector3::try_from(three), Ok(Vector3::new(1.0, 2.0, 3.0)));

        let two: &[f64] = &[1.0, 2.0];
        let err = Vector3::try_from(two).unwrap_err();
        assert_eq!(err.msg(), "Parameter 'components' must have 3 components, got 2");
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector3::new(1.0, -2.5, 0.0).to_string(), "(1, -2.5, 0)");
    }

    #[test]
    fn test_nan_is_not_finite() {
        assert!(!Vector3::new(f64::NAN, 0.0, 0.0).is_finite());
        assert!(!Vector3::new(0.0, f64::INFINITY, 0.0).is_finite());
    }
}
