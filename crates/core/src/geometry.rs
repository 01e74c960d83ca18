//! Two-vector geometry: displacement, angle, and projection.
//!
//! These are free functions rather than methods because each one reads two
//! vectors symmetrically and neither is a natural receiver. Arguments are
//! borrowed immutably, so callers keep their vectors untouched.

use tracing::trace;

use crate::core_types::{Degrees, Radians, Vector3};
use crate::error::VectorError;

/// Vector pointing from `from_point` to `to_point` (`to_point - from_point`).
#[inline]
#[must_use]
pub fn from_to(from_point: &Vector3, to_point: &Vector3) -> Vector3 {
    Vector3::new(
        to_point.x - from_point.x,
        to_point.y - from_point.y,
        to_point.z - from_point.z,
    )
}

/// [`from_to`] for untyped component data.
///
/// # Errors
/// Returns [`VectorError`] with code `InvalidArgument` if either slice does
/// not hold exactly three components. The rejection is also logged at warn
/// level.
pub fn try_from_to(from_point: &[f64], to_point: &[f64]) -> Result<Vector3, VectorError> {
    let from = Vector3::from_components("from_point", from_point)?;
    let to = Vector3::from_components("to_point", to_point)?;
    Ok(from_to(&from, &to))
}

/// Angle between `v1` and `v2` in degrees, in `[0, 180]`.
///
/// Returns `0°` if either vector has zero length. The cosine is clamped into
/// `[-1, 1]` so rounding on (anti)parallel inputs cannot produce NaN.
///
/// ```
/// use vector3_core::{angle, Vector3};
///
/// let a = angle(&Vector3::X, &Vector3::Y);
/// assert!((*a - 90.0).abs() < 1e-12);
/// ```
#[must_use]
pub fn angle(v1: &Vector3, v2: &Vector3) -> Degrees {
    let len1 = v1.length();
    let len2 = v2.length();
    if len1 == 0.0 || len2 == 0.0 {
        trace!(len1, len2, "angle: zero-length vector, returning 0");
        return Degrees::new(0.0);
    }

    let cos_theta = (v1.dot(v2) / (len1 * len2)).clamp(-1.0, 1.0);
    Radians::new(cos_theta.acos()).to_degrees()
}

/// Projection of `vector_to_project` onto the direction of `other_vector`.
///
/// The result points along `other_vector` (or against it, for an obtuse
/// angle) with length equal to the scalar projection. Returns the zero vector
/// if `other_vector` has zero length.
#[must_use]
pub fn project(vector_to_project: &Vector3, other_vector: &Vector3) -> Vector3 {
    let onto_len_sq = other_vector.length_squared();
    if onto_len_sq == 0.0 {
        trace!("project: zero-length target, returning zero vector");
        return Vector3::ZERO;
    }

    let scale = vector_to_project.dot(other_vector) / onto_len_sq;
    *other_vector * scale
}
