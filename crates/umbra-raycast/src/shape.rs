//! Renderable shapes.

use crate::intersect::{intersect_plane, intersect_sphere, SurfaceHit};
use crate::Ray;
use umbra_math::{angle_between, try_direction, Dir3, Point3, Vec3};

/// The kind of a shape (for reporting and match-based dispatch).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// Full sphere.
    Sphere,
    /// Infinite plane.
    Plane,
}

/// A surface the renderer can cast rays against.
pub trait Shape: Send + Sync + std::fmt::Debug {
    /// All points where the infinite line through `ray` meets the surface,
    /// sorted along the ray. An empty result means no intersection is
    /// possible for this line.
    fn intersect(&self, ray: &Ray) -> Vec<SurfaceHit>;

    /// Outward surface normal at a point on the surface.
    fn normal_at(&self, point: &Point3) -> Dir3;

    /// Angle in `[0, π]` between the ray direction and the outward normal
    /// at `point`. Angles above `π/2` mean the ray arrives from outside.
    fn angle_of_incidence(&self, ray: &Ray, point: &Point3) -> f64 {
        angle_between(ray.direction.as_ref(), self.normal_at(point).as_ref())
    }

    /// The kind of this shape.
    fn kind(&self) -> ShapeKind;

    /// Check that the parameters describe a real surface.
    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

/// A sphere given by centre and radius.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// Center of the sphere.
    pub center: Point3,
    /// Radius of the sphere.
    pub radius: f64,
}

impl Sphere {
    /// Create a sphere.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: &Ray) -> Vec<SurfaceHit> {
        intersect_sphere(ray, self)
    }

    fn normal_at(&self, point: &Point3) -> Dir3 {
        // The centre has no radial direction; any axis will do there.
        try_direction(point - self.center).unwrap_or_else(Vec3::z_axis)
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Sphere
    }

    fn check(&self) -> Result<(), String> {
        if !self.center.coords.iter().all(|c| c.is_finite()) {
            return Err("sphere center must be finite".into());
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(format!("sphere radius must be positive, got {}", self.radius));
        }
        Ok(())
    }
}

/// An infinite plane through `origin`. The side `normal` points to is the
/// outside.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// A point on the plane.
    pub origin: Point3,
    /// Normal vector (need not be unit length).
    pub normal: Vec3,
}

impl Plane {
    /// Create a plane through `origin` with the given normal.
    pub fn new(origin: Point3, normal: Vec3) -> Self {
        Self { origin, normal }
    }
}

impl Shape for Plane {
    fn intersect(&self, ray: &Ray) -> Vec<SurfaceHit> {
        intersect_plane(ray, self).into_iter().collect()
    }

    fn normal_at(&self, _point: &Point3) -> Dir3 {
        Dir3::new_normalize(self.normal)
    }

    fn kind(&self) -> ShapeKind {
        ShapeKind::Plane
    }

    fn check(&self) -> Result<(), String> {
        if !self.origin.coords.iter().all(|c| c.is_finite()) {
            return Err("plane origin must be finite".into());
        }
        if try_direction(self.normal).is_none() || !self.normal.iter().all(|c| c.is_finite()) {
            return Err("plane normal must be a non-zero finite vector".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_sphere_normal_outward() {
        let sphere = Sphere::new(Point3::new(1.0, 1.0, 1.0), 2.0);
        let n = sphere.normal_at(&Point3::new(1.0, 3.0, 1.0));
        assert!((n.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_angle_of_incidence_outside() {
        let sphere = Sphere::new(Point3::new(0.0, 0.0, 10.0), 3.0);
        let ray = Ray::new(Point3::origin(), Vec3::z());
        let hit = sphere.intersect(&ray)[0];
        let angle = sphere.angle_of_incidence(&ray, &hit.point);
        assert!((angle - PI).abs() < 1e-9);
    }

    #[test]
    fn test_angle_of_incidence_inside() {
        let sphere = Sphere::new(Point3::origin(), 10.0);
        let ray = Ray::new(Point3::origin(), Vec3::z());
        let far = sphere.intersect(&ray)[1];
        let angle = sphere.angle_of_incidence(&ray, &far.point);
        assert!(angle.abs() < 1e-9);
    }

    #[test]
    fn test_plane_single_hit() {
        let plane = Plane::new(Point3::new(0.0, -1.0, 0.0), Vec3::y());
        let ray = Ray::new(Point3::origin(), Vec3::new(0.0, -1.0, 1.0));
        let hits = plane.intersect(&ray);
        assert_eq!(hits.len(), 1);
        assert!((hits[0].point - Point3::new(0.0, -1.0, 1.0)).norm() < 1e-12);
        assert!(plane.angle_of_incidence(&ray, &hits[0].point) > PI / 2.0);
    }

    #[test]
    fn test_plane_parallel_is_empty() {
        let plane = Plane::new(Point3::origin(), Vec3::y());
        let ray = Ray::new(Point3::new(0.0, 1.0, 0.0), Vec3::x());
        assert!(plane.intersect(&ray).is_empty());
    }

    #[test]
    fn test_check_rejects_bad_parameters() {
        assert!(Sphere::new(Point3::origin(), 1.0).check().is_ok());
        assert!(Sphere::new(Point3::origin(), 0.0).check().is_err());
        assert!(Sphere::new(Point3::origin(), -2.0).check().is_err());
        assert!(Sphere::new(Point3::origin(), f64::NAN).check().is_err());
        assert!(Plane::new(Point3::origin(), Vec3::zeros()).check().is_err());
        assert!(Plane::new(Point3::origin(), Vec3::x()).check().is_ok());
    }

    #[test]
    fn test_kind() {
        assert_eq!(Sphere::new(Point3::origin(), 1.0).kind(), ShapeKind::Sphere);
        assert_eq!(Plane::new(Point3::origin(), Vec3::x()).kind(), ShapeKind::Plane);
    }
}
