//! Validated scenes and the per-pixel render loop.

use std::f64::consts::PI;

use tracing::{debug, info};
use umbra_math::{Dir3, Point3, Tolerance};

use crate::{quantize, Frame, Light, Ray, RenderStats, Result, SceneError, Shape, Viewport};

/// Which side of a surface a ray arrived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceSide {
    /// The ray struck the outward-facing side.
    Outside,
    /// The ray struck the inward-facing side, e.g. the inner wall of a
    /// sphere containing the viewpoint.
    Inside,
}

impl SurfaceSide {
    /// Classify an angle of incidence. Angles in `(π/2, 3π/2)` are outside.
    pub fn from_angle(angle: f64) -> Self {
        if angle > PI / 2.0 && angle < PI * 3.0 / 2.0 {
            SurfaceSide::Outside
        } else {
            SurfaceSide::Inside
        }
    }
}

/// A ray's contact with a shape, as found by [`Scene::nearest_intersection`].
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'s> {
    /// Point of contact.
    pub point: Point3,
    /// Angle between the ray and the outward normal at `point`.
    pub angle: f64,
    /// Outward normal at `point`.
    pub normal: Dir3,
    /// The ray that produced this intersection.
    pub ray: Ray,
    /// The struck shape.
    pub shape: &'s dyn Shape,
    /// Index of the struck shape in the scene.
    pub shape_index: usize,
}

impl Intersection<'_> {
    /// Which side of the surface the ray struck.
    pub fn side(&self) -> SurfaceSide {
        SurfaceSide::from_angle(self.angle)
    }
}

/// A fully validated scene, ready to render.
///
/// Shapes and lights are fixed at construction; rendering only reads them.
#[derive(Debug)]
pub struct Scene {
    viewpoint: Point3,
    viewport: Viewport,
    lights: Vec<Light>,
    shapes: Vec<Box<dyn Shape>>,
    total_brightness: f64,
    pub(crate) tolerance: Tolerance,
}

impl Scene {
    /// Build a scene, rejecting input that cannot be rendered.
    ///
    /// Total brightness is summed here once and used to normalise every
    /// pixel.
    pub fn new(
        viewpoint: Point3,
        viewport: Viewport,
        lights: Vec<Light>,
        shapes: Vec<Box<dyn Shape>>,
    ) -> Result<Self> {
        viewport.validate()?;

        if !viewpoint.coords.iter().all(|c| c.is_finite()) {
            return Err(SceneError::DegenerateViewport(
                "viewpoint must be finite".into(),
            ));
        }
        let tolerance = Tolerance::DEFAULT;
        if tolerance.is_zero(viewport.distance_to_plane(&viewpoint)) {
            return Err(SceneError::DegenerateViewport(
                "viewpoint lies in the viewport plane".into(),
            ));
        }

        for (index, light) in lights.iter().enumerate() {
            light
                .check()
                .map_err(|reason| SceneError::InvalidLight { index, reason })?;
        }

        for (index, shape) in shapes.iter().enumerate() {
            shape
                .check()
                .map_err(|reason| SceneError::InvalidShape { index, reason })?;
        }

        let total_brightness: f64 = lights.iter().map(|l| l.brightness).sum();

        debug!(
            shapes = shapes.len(),
            lights = lights.len(),
            total_brightness,
            width = viewport.width,
            height = viewport.height,
            "scene ready"
        );

        Ok(Self {
            viewpoint,
            viewport,
            lights,
            shapes,
            total_brightness,
            tolerance,
        })
    }

    /// The point every primary ray starts from.
    pub fn viewpoint(&self) -> Point3 {
        self.viewpoint
    }

    /// The viewing plane and resolution.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Light sources, in input order.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Shapes, in input order.
    pub fn shapes(&self) -> &[Box<dyn Shape>] {
        &self.shapes
    }

    /// Sum of all light brightness values.
    pub fn total_brightness(&self) -> f64 {
        self.total_brightness
    }

    /// Render every pixel.
    pub fn render(&self) -> Frame {
        self.render_with_stats().0
    }

    /// Render every pixel, also reporting hit/background counts.
    pub fn render_with_stats(&self) -> (Frame, RenderStats) {
        let Viewport { width, height, .. } = self.viewport;
        let mut frame = Frame::new(width, height);
        let mut stats = RenderStats::default();

        for row in 0..height {
            for column in 0..width {
                match self.trace_pixel(column, row) {
                    Some(brightness) => {
                        stats.hit_pixels += 1;
                        frame.set(column, row, quantize(brightness, self.total_brightness));
                    }
                    None => stats.background_pixels += 1,
                }
            }
        }

        info!(
            width,
            height,
            hit_pixels = stats.hit_pixels,
            background_pixels = stats.background_pixels,
            "render complete"
        );
        (frame, stats)
    }

    /// Accumulated light brightness at pixel `(column, row)`; `0` for
    /// background.
    pub fn pixel_brightness(&self, column: u32, row: u32) -> f64 {
        self.trace_pixel(column, row).unwrap_or(0.0)
    }

    /// Primary ray through the centre of pixel `(column, row)`.
    pub fn primary_ray(&self, column: u32, row: u32) -> Option<Ray> {
        Ray::between(self.viewpoint, self.viewport.point_at(column, row))
    }

    fn trace_pixel(&self, column: u32, row: u32) -> Option<f64> {
        let ray = self.primary_ray(column, row)?;
        let intersection = self.nearest_intersection(&ray)?;
        Some(self.shade(&intersection))
    }

    /// The closest intersection strictly ahead of the ray origin.
    ///
    /// Every shape is tested. A later candidate replaces the current one only
    /// when it is closer by more than the linear tolerance, so of candidates
    /// at equal distance the first encountered (shape order, then along the
    /// ray) is kept.
    pub fn nearest_intersection(&self, ray: &Ray) -> Option<Intersection<'_>> {
        let mut nearest: Option<(f64, Intersection<'_>)> = None;

        for (shape_index, shape) in self.shapes.iter().enumerate() {
            for hit in shape.intersect(ray) {
                if !ray.is_ahead(&hit.point) {
                    continue;
                }
                let distance = (hit.point - ray.origin).norm();
                if matches!(nearest, Some((best, _)) if distance >= best - self.tolerance.linear) {
                    continue;
                }
                let shape = shape.as_ref();
                nearest = Some((
                    distance,
                    Intersection {
                        point: hit.point,
                        angle: shape.angle_of_incidence(ray, &hit.point),
                        normal: shape.normal_at(&hit.point),
                        ray: *ray,
                        shape,
                        shape_index,
                    },
                ));
            }
        }

        nearest.map(|(_, intersection)| intersection)
    }
}
