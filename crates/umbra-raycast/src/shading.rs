//! Direct lighting at an intersection.

use crate::{Intersection, Light, Ray, Scene, SurfaceSide};

impl Scene {
    /// Total brightness reaching an intersection: the sum over all lights
    /// of [`Scene::light_contribution`].
    pub fn shade(&self, intersection: &Intersection<'_>) -> f64 {
        self.lights()
            .iter()
            .map(|light| self.light_contribution(intersection, light))
            .sum()
    }

    /// Brightness one light adds at an intersection: the light's full
    /// brightness when nothing blocks it, otherwise zero.
    ///
    /// A light sitting exactly on the surface point has no direction to
    /// test and contributes nothing.
    pub fn light_contribution(&self, intersection: &Intersection<'_>, light: &Light) -> f64 {
        let Some(shadow_ray) = Ray::between(intersection.point, light.position) else {
            return 0.0;
        };

        let visible = match intersection.side() {
            SurfaceSide::Outside => self.visible_from_outside(intersection, light, &shadow_ray),
            SurfaceSide::Inside => self.visible_from_inside(intersection, light, &shadow_ray),
        };

        if visible {
            light.brightness
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{Light, Plane, Scene, Shape, Sphere, Viewport};
    use umbra_math::{Point3, Vec3};

    fn viewport() -> Viewport {
        Viewport::new(
            Point3::new(-1.0, 1.0, 1.0),
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(-1.0, -1.0, 1.0),
            8,
            8,
        )
    }

    fn scene(lights: Vec<Light>, shapes: Vec<Box<dyn Shape>>) -> Scene {
        Scene::new(Point3::origin(), viewport(), lights, shapes).unwrap()
    }

    fn front_sphere() -> Box<dyn Shape> {
        Box::new(Sphere::new(Point3::new(0.0, 0.0, 10.0), 3.0))
    }

    #[test]
    fn test_unoccluded_light_gives_full_brightness() {
        let light = Light::new(Point3::new(2.0, 3.0, -4.0), 42.5);
        let scene = scene(vec![light], vec![front_sphere()]);
        let ray = crate::Ray::new(Point3::origin(), Vec3::z());
        let hit = scene.nearest_intersection(&ray).unwrap();
        assert_eq!(scene.light_contribution(&hit, &light), 42.5);
        assert_eq!(scene.shade(&hit), 42.5);
    }

    #[test]
    fn test_light_behind_surface_gives_nothing() {
        let light = Light::new(Point3::new(0.0, 0.0, 30.0), 10.0);
        let scene = scene(vec![light], vec![front_sphere()]);
        let ray = crate::Ray::new(Point3::origin(), Vec3::z());
        let hit = scene.nearest_intersection(&ray).unwrap();
        assert_eq!(scene.shade(&hit), 0.0);
    }

    #[test]
    fn test_shade_sums_lights() {
        let lights = vec![
            Light::new(Point3::new(0.0, 0.0, 0.0), 10.0),
            Light::new(Point3::new(0.0, 5.0, 0.0), 15.0),
            // Behind the sphere
            Light::new(Point3::new(0.0, 0.0, 40.0), 100.0),
        ];
        let scene = scene(lights, vec![front_sphere()]);
        let ray = crate::Ray::new(Point3::origin(), Vec3::z());
        let hit = scene.nearest_intersection(&ray).unwrap();
        assert_eq!(scene.shade(&hit), 25.0);
    }

    #[test]
    fn test_light_at_surface_point_contributes_nothing() {
        let light = Light::new(Point3::new(0.0, 0.0, 7.0), 10.0);
        let scene = scene(vec![light], vec![front_sphere()]);
        let ray = crate::Ray::new(Point3::origin(), Vec3::z());
        let hit = scene.nearest_intersection(&ray).unwrap();
        assert_eq!(scene.light_contribution(&hit, &light), 0.0);
    }

    #[test]
    fn test_contribution_never_exceeds_light() {
        let lights = vec![
            Light::new(Point3::new(-3.0, 4.0, 0.0), 7.0),
            Light::new(Point3::new(3.0, -4.0, 2.0), 11.0),
        ];
        let shapes: Vec<Box<dyn Shape>> = vec![
            front_sphere(),
            Box::new(Plane::new(Point3::new(0.0, -3.0, 0.0), Vec3::y())),
        ];
        let scene = scene(lights.clone(), shapes);
        for row in 0..8 {
            for column in 0..8 {
                let ray = scene.primary_ray(column, row).unwrap();
                if let Some(hit) = scene.nearest_intersection(&ray) {
                    for light in &lights {
                        let c = scene.light_contribution(&hit, light);
                        assert!(c == 0.0 || c == light.brightness);
                    }
                }
            }
        }
    }
}
