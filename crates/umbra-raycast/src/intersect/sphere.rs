//! Ray-sphere intersection (quadratic equation).

use super::{sort_hits, SurfaceHit};
use crate::{Ray, Sphere};

/// Relative width of the band around a zero discriminant treated as tangent.
const TANGENT_BAND: f64 = 1e-10;

/// Intersect the line through a ray with a sphere.
///
/// Returns 0, 1 or 2 hits sorted by t. A tangent line yields exactly one
/// hit; roots behind the ray origin are included.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere) -> Vec<SurfaceHit> {
    let oc = ray.origin - sphere.center;
    let d = ray.direction.as_ref();

    // |oc + t*d|^2 = r^2 with |d| = 1, in half-b form
    let half_b = oc.dot(d);
    let c = oc.dot(&oc) - sphere.radius * sphere.radius;
    let discriminant = half_b * half_b - c;

    let band = TANGENT_BAND * sphere.radius * sphere.radius;
    if discriminant < -band {
        return Vec::new();
    }
    if discriminant <= band {
        let t = -half_b;
        return vec![SurfaceHit { t, point: ray.at(t) }];
    }

    let sqrt_disc = discriminant.sqrt();
    let mut hits: Vec<SurfaceHit> = [-half_b - sqrt_disc, -half_b + sqrt_disc]
        .into_iter()
        .map(|t| SurfaceHit { t, point: ray.at(t) })
        .collect();
    sort_hits(&mut hits);
    hits
}
