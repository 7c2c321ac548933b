//! Mapping from pixel coordinates to points on the viewing plane.

use crate::{Result, SceneError};
use umbra_math::{angle_between, Point3, Tolerance, Vec3};

/// A rectangular window in 3D space divided into `width × height` pixels.
///
/// Column 0 runs along the top edge from `top_left` to `top_right`; row 0
/// runs down the left edge from `top_left` to `bottom_left`.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Corner at pixel (0, 0).
    pub top_left: Point3,
    /// Corner at the end of row 0.
    pub top_right: Point3,
    /// Corner at the end of column 0.
    pub bottom_left: Point3,
    /// Number of pixel columns.
    pub width: u32,
    /// Number of pixel rows.
    pub height: u32,
}

impl Viewport {
    /// Create a viewport from three corners and a pixel resolution.
    pub fn new(
        top_left: Point3,
        top_right: Point3,
        bottom_left: Point3,
        width: u32,
        height: u32,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            width,
            height,
        }
    }

    fn horizontal(&self) -> Vec3 {
        self.top_right - self.top_left
    }

    fn vertical(&self) -> Vec3 {
        self.bottom_left - self.top_left
    }

    /// Unnormalized normal of the viewing plane.
    pub fn plane_normal(&self) -> Vec3 {
        self.horizontal().cross(&self.vertical())
    }

    /// The point at the centre of pixel `(column, row)`.
    pub fn point_at(&self, column: u32, row: u32) -> Point3 {
        let u = (f64::from(column) + 0.5) / f64::from(self.width);
        let v = (f64::from(row) + 0.5) / f64::from(self.height);
        self.top_left + u * self.horizontal() + v * self.vertical()
    }

    /// Check the resolution and that the corners span a plane.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SceneError::EmptyViewport {
                width: self.width,
                height: self.height,
            });
        }
        let corners = [self.top_left, self.top_right, self.bottom_left];
        if !corners
            .iter()
            .all(|p| p.coords.iter().all(|c| c.is_finite()))
        {
            return Err(SceneError::DegenerateViewport(
                "corners must be finite".into(),
            ));
        }
        let tol = Tolerance::DEFAULT;
        if tol.is_zero(self.horizontal().norm()) || tol.is_zero(self.vertical().norm()) {
            return Err(SceneError::DegenerateViewport(
                "viewport edges must have non-zero length".into(),
            ));
        }
        let angle = angle_between(&self.horizontal(), &self.vertical());
        if angle.sin().abs() < tol.linear {
            return Err(SceneError::DegenerateViewport(
                "viewport edges must not be parallel".into(),
            ));
        }
        Ok(())
    }

    /// Perpendicular distance from `point` to the viewing plane.
    pub fn distance_to_plane(&self, point: &Point3) -> f64 {
        let normal = self.plane_normal();
        (point - self.top_left).dot(&normal).abs() / normal.norm()
    }
}
