//! Point light sources.

use umbra_math::Point3;

/// A point light contributing a fixed brightness to every surface point it
/// can see. There is no distance falloff.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    /// Position of the light.
    pub position: Point3,
    /// Brightness contributed to an unshadowed point (non-negative).
    pub brightness: f64,
}

impl Light {
    /// Create a light.
    pub fn new(position: Point3, brightness: f64) -> Self {
        Self {
            position,
            brightness,
        }
    }

    /// Check that the light can be rendered.
    pub fn check(&self) -> Result<(), String> {
        if !self.position.coords.iter().all(|c| c.is_finite()) {
            return Err("light position must be finite".into());
        }
        if !(self.brightness.is_finite() && self.brightness >= 0.0) {
            return Err(format!(
                "light brightness must be non-negative, got {}",
                self.brightness
            ));
        }
        Ok(())
    }
}
