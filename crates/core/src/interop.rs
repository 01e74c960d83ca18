//! Conversions to and from `nalgebra`, for callers that mix this type with
//! a linear algebra stack. Enabled by the `nalgebra` feature.

use crate::core_types::Vector3;

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}
