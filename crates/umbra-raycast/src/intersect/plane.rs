//! Ray-plane intersection (closed-form).

use super::SurfaceHit;
use crate::{Plane, Ray};

/// Intersect the line through a ray with a plane.
///
/// Returns `None` if the ray is parallel to the plane. The hit may lie
/// behind the ray origin.
pub fn intersect_plane(ray: &Ray, plane: &Plane) -> Option<SurfaceHit> {
    let normal = &plane.normal;
    let denom = ray.direction.as_ref().dot(normal);

    // Ray is parallel to plane
    if denom.abs() < 1e-12 * normal.norm() {
        return None;
    }

    let t = (plane.origin - ray.origin).dot(normal) / denom;
    Some(SurfaceHit { t, point: ray.at(t) })
}
