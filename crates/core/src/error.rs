//! Error type for the few operations that accept untyped input.
//!
//! Everything that takes a `&Vector3` is infallible: the type system already
//! guarantees the argument shape. Only entry points that accept raw component
//! slices can be handed malformed data, and those report it through
//! [`VectorError`] instead of producing garbage.

use std::error::Error;
use std::fmt;

/// Error codes for rejected vector input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorErrorCode {
    /// An argument could not be interpreted as a 3-component vector.
    InvalidArgument = 1,
}

impl fmt::Display for VectorErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorErrorCode::InvalidArgument => write!(f, "invalid argument"),
        }
    }
}

/// A rejected input, carrying an error code and a human-readable message.
///
/// # Example
/// ```rust
/// use vector3_core::{VectorError, VectorErrorCode};
///
/// let err = VectorError::component_count("from_point", 2);
/// assert_eq!(err.code(), VectorErrorCode::InvalidArgument);
/// assert_eq!(err.msg(), "Parameter 'from_point' must have 3 components, got 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorError {
    code: VectorErrorCode,
    msg: String,
}

impl VectorError {
    /// Create error for a component slice of the wrong length.
    ///
    /// # Arguments
    /// * `param_name` - The name of the offending parameter (e.g., `"from_point"`, `"to_point"`)
    /// * `found` - The number of components actually supplied
    pub fn component_count(param_name: &str, found: usize) -> Self {
        Self {
            code: VectorErrorCode::InvalidArgument,
            msg: format!("Parameter '{param_name}' must have 3 components, got {found}"),
        }
    }

    /// Returns the error code.
    pub fn code(&self) -> VectorErrorCode {
        self.code
    }

    /// Returns the human-readable error message.
    pub fn msg(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.msg)
    }
}

impl Error for VectorError {}

impl From<VectorError> for VectorErrorCode {
    fn from(error: VectorError) -> Self {
        error.code
    }
}
