//! Ray-surface intersection algorithms.
//!
//! Each shape has a dedicated intersector. Intersectors report every root
//! along the infinite line through the ray, including those behind the
//! origin; callers filter by direction.

mod plane;
mod sphere;

pub use plane::intersect_plane;
pub use sphere::intersect_sphere;

use umbra_math::Point3;

/// A point where a line meets a surface.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceHit {
    /// Parameter along the ray (negative behind the origin).
    pub t: f64,
    /// 3D intersection point.
    pub point: Point3,
}

/// Sort hits by ascending `t`.
pub(crate) fn sort_hits(hits: &mut [SurfaceHit]) {
    hits.sort_by(|a, b| a.t.partial_cmp(&b.t).unwrap_or(std::cmp::Ordering::Equal));
}
