//! 3D Vector Core Library
//!
//! A small Euclidean vector value type for rendering and physics loops.
//! `Vector3` carries three `f64` components and supports in-place chained
//! arithmetic, normalization, and dot products; the free functions in
//! [`geometry`] cover displacement, angles, and projection between two vectors.
//!
//! ## Degenerate input
//!
//! Zero-length vectors never divide by zero:
//! - `normalize` / `rescale` leave the vector unchanged
//! - `angle` returns 0°
//! - `project` returns the zero vector
//!
//! Only the slice-based entry points (`try_from_to`, `TryFrom<&[f64]>`) can
//! fail, and they report a [`VectorError`].

// Core types and utilities
pub mod core_types;

pub mod error;
pub mod geometry;

#[cfg(feature = "nalgebra")]
mod interop;

// Re-export core types
pub use core_types::{Degrees, Radians, Vector3};
pub use error::{VectorError, VectorErrorCode};
pub use geometry::{angle, from_to, project, try_from_to};
