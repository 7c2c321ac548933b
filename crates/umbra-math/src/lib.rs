#![warn(missing_docs)]

//! Math types for the umbra ray caster.
//!
//! Thin wrappers around nalgebra providing the geometric vocabulary the
//! renderer works in: points, vectors, unit directions, angles and
//! tolerances.

use nalgebra::{Unit, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// Unsigned angle between two vectors, in radians, within `[0, π]`.
///
/// Returns `0.0` if either vector has zero length.
pub fn angle_between(a: &Vec3, b: &Vec3) -> f64 {
    let denom = a.norm() * b.norm();
    if denom == 0.0 || !denom.is_finite() {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos()
}

/// Try to build a unit direction from `v`.
///
/// Returns `None` for vectors shorter than [`Tolerance::DEFAULT`]'s linear
/// tolerance, where the direction is numerically meaningless.
pub fn try_direction(v: Vec3) -> Option<Dir3> {
    Dir3::try_new(v, Tolerance::DEFAULT.linear)
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in scene units.
    pub linear: f64,
}

impl Tolerance {
    /// Default tolerance (1e-6 linear).
    pub const DEFAULT: Self = Self { linear: 1e-6 };

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
