//! Shadow-ray tests.
//!
//! A point on the segment from the surface point to the light blocks that
//! light. Points behind the surface point, beyond the light, or within
//! tolerance of the surface point itself do not.

use umbra_math::Point3;

use crate::{Intersection, Light, Ray, Scene, SurfaceHit};

/// The segment a shadow ray must cross without obstruction.
struct ShadowSegment<'a> {
    ray: &'a Ray,
    light_distance: f64,
    min_along: f64,
}

impl<'a> ShadowSegment<'a> {
    fn new(ray: &'a Ray, light: &Light, min_along: f64) -> Self {
        Self {
            ray,
            light_distance: (light.position - ray.origin).norm(),
            min_along,
        }
    }

    fn blocked_by(&self, point: &Point3) -> bool {
        let ahead = self.ray.along(point) > self.min_along;
        let before_light = (point - self.ray.origin).norm() < self.light_distance;
        ahead && before_light
    }

    fn blocked_by_any(&self, hits: &[SurfaceHit]) -> bool {
        hits.iter().any(|hit| self.blocked_by(&hit.point))
    }
}

impl Scene {
    /// Whether a light reaches a surface struck from outside.
    ///
    /// The light must be on the normal's side of the surface, and no other
    /// shape may cross the shadow ray.
    pub(crate) fn visible_from_outside(
        &self,
        intersection: &Intersection<'_>,
        light: &Light,
        shadow_ray: &Ray,
    ) -> bool {
        if shadow_ray.direction.dot(intersection.normal.as_ref()) < 0.0 {
            return false;
        }
        let segment = ShadowSegment::new(shadow_ray, light, self.tolerance.linear);
        !self.blocked_by_others(intersection, &segment)
    }

    /// Whether a light reaches a surface struck from inside.
    ///
    /// The light must be on the inward side of the surface, the struck
    /// shape's own far wall must not cross the shadow ray, and no other
    /// shape may either.
    pub(crate) fn visible_from_inside(
        &self,
        intersection: &Intersection<'_>,
        light: &Light,
        shadow_ray: &Ray,
    ) -> bool {
        if shadow_ray.direction.dot(intersection.normal.as_ref()) > 0.0 {
            return false;
        }
        let segment = ShadowSegment::new(shadow_ray, light, self.tolerance.linear);

        let mut own_hits = intersection.shape.intersect(shadow_ray);
        remove_nearest(&mut own_hits, &intersection.point);
        if segment.blocked_by_any(&own_hits) {
            return false;
        }

        !self.blocked_by_others(intersection, &segment)
    }

    fn blocked_by_others(
        &self,
        intersection: &Intersection<'_>,
        segment: &ShadowSegment<'_>,
    ) -> bool {
        self.shapes()
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != intersection.shape_index)
            .any(|(_, shape)| segment.blocked_by_any(&shape.intersect(segment.ray)))
    }
}

/// Drop the hit closest to `point`.
///
/// Re-intersecting a shape along a ray that starts on its surface yields the
/// start point again as a root, but never bit-identical to it.
fn remove_nearest(hits: &mut Vec<SurfaceHit>, point: &Point3) {
    let nearest = hits
        .iter()
        .enumerate()
        .map(|(idx, hit)| (idx, (hit.point - point).norm()))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(idx, _)| idx);
    if let Some(idx) = nearest {
        hits.remove(idx);
    }
}
