//! Ray representation and basic ray-geometry tests.

use umbra_math::{try_direction, Dir3, Point3, Vec3};

/// A ray in 3D space defined by origin and direction.
///
/// Shapes treat a ray as the full infinite line through `origin`; whether a
/// point lies ahead of or behind the origin is decided by the caller with
/// [`Ray::is_ahead`].
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Unit direction of the ray.
    pub direction: Dir3,
}

impl Ray {
    /// Create a new ray from origin and direction.
    ///
    /// The direction will be normalized.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: Dir3::new_normalize(direction),
        }
    }

    /// Create the ray starting at `from` and passing through `to`.
    ///
    /// Returns `None` when the two points coincide, since no direction is
    /// defined.
    pub fn between(from: Point3, to: Point3) -> Option<Self> {
        try_direction(to - from).map(|direction| Self {
            origin: from,
            direction,
        })
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction.as_ref()
    }

    /// Signed distance of `point`'s projection along the ray direction.
    #[inline]
    pub fn along(&self, point: &Point3) -> f64 {
        (point - self.origin).dot(self.direction.as_ref())
    }

    /// Whether `point` lies strictly ahead of the origin.
    #[inline]
    pub fn is_ahead(&self, point: &Point3) -> bool {
        self.along(point) > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        let p = ray.at(5.0);
        assert!((p.x - 5.0).abs() < 1e-12);
        assert!(p.y.abs() < 1e-12);
        assert!(p.z.abs() < 1e-12);
    }

    #[test]
    fn test_ray_normalizes() {
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 7.0));
        assert!((ray.direction.z - 1.0).abs() < 1e-12);
        let p = ray.at(2.0);
        assert!((p.z - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_ray_between() {
        let ray = Ray::between(Point3::new(1.0, 1.0, 1.0), Point3::new(1.0, 4.0, 5.0)).unwrap();
        assert!((ray.direction.y - 0.6).abs() < 1e-12);
        assert!((ray.direction.z - 0.8).abs() < 1e-12);
        assert!((ray.at(5.0) - Point3::new(1.0, 4.0, 5.0)).norm() < 1e-12);
    }

    #[test]
    fn test_ray_between_coincident() {
        let p = Point3::new(3.0, -2.0, 1.0);
        assert!(Ray::between(p, p).is_none());
    }

    #[test]
    fn test_is_ahead() {
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, 0.0, 1.0));
        assert!(ray.is_ahead(&Point3::new(4.0, 4.0, 0.5)));
        assert!(!ray.is_ahead(&Point3::new(0.0, 0.0, -3.0)));
        // Points level with the origin are not ahead.
        assert!(!ray.is_ahead(&Point3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_along() {
        let ray = Ray::new(Point3::new(0.0, 0.0, 2.0), Vec3::new(0.0, 0.0, -1.0));
        assert!((ray.along(&Point3::new(5.0, 5.0, -1.0)) - 3.0).abs() < 1e-12);
    }
}
