//! Scene documents for the umbra ray caster.
//!
//! A document is purely declarative: a viewpoint, a viewport, and ordered
//! lists of lights and shapes. It is stored as JSON or TOML. Validation and
//! rendering are handled separately by the renderer.

pub mod error;

pub use error::{IrError, Result};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// 3D vector with f64 components, used for both points and directions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// Create a new Vec3.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A shape in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeDef {
    /// Sphere given by centre and radius.
    Sphere {
        /// Centre of the sphere.
        center: Vec3,
        /// Radius of the sphere.
        radius: f64,
    },
    /// Infinite plane through `origin`, facing `normal`.
    Plane {
        /// Any point on the plane.
        origin: Vec3,
        /// Normal pointing to the plane's outside.
        normal: Vec3,
    },
}

impl fmt::Display for ShapeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeDef::Sphere { center, radius } => {
                write!(f, "sphere at {} with radius {}", center, radius)
            }
            ShapeDef::Plane { origin, normal } => {
                write!(f, "plane through {} facing {}", origin, normal)
            }
        }
    }
}

/// A point light.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightDef {
    /// Position of the light.
    pub position: Vec3,
    /// Brightness added to every point the light can see.
    pub brightness: f64,
}

impl fmt::Display for LightDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "light at {} with brightness {}", self.position, self.brightness)
    }
}

/// The viewing window: three corners and a pixel resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewportDef {
    /// Corner at pixel (0, 0).
    pub top_left: Vec3,
    /// Corner at the end of the first row.
    pub top_right: Vec3,
    /// Corner at the end of the first column.
    pub bottom_left: Vec3,
    /// Number of pixel columns.
    pub width: u32,
    /// Number of pixel rows.
    pub height: u32,
}

impl fmt::Display for ViewportDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} px, top-left {}, top-right {}, bottom-left {}",
            self.width, self.height, self.top_left, self.top_right, self.bottom_left
        )
    }
}

/// On-disk encoding of a scene document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.json`
    Json,
    /// `.toml`
    Toml,
}

impl DocumentFormat {
    /// Pick the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "json" => Ok(DocumentFormat::Json),
            "toml" => Ok(DocumentFormat::Toml),
            _ => Err(IrError::UnknownFormat(ext)),
        }
    }
}

fn default_version() -> String {
    "0.1".to_string()
}

/// An umbra scene document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    /// Format version string (e.g. "0.1").
    #[serde(default = "default_version")]
    pub version: String,
    /// Where every primary ray starts.
    pub viewpoint: Vec3,
    /// The viewing window.
    pub viewport: ViewportDef,
    /// Lights, in order.
    #[serde(default)]
    pub lights: Vec<LightDef>,
    /// Shapes, in order.
    #[serde(default)]
    pub shapes: Vec<ShapeDef>,
}

impl SceneDocument {
    /// A document with no lights or shapes.
    pub fn new(viewpoint: Vec3, viewport: ViewportDef) -> Self {
        Self {
            version: default_version(),
            viewpoint,
            viewport,
            lights: Vec::new(),
            shapes: Vec::new(),
        }
    }

    /// Sum of all light brightness values.
    pub fn total_brightness(&self) -> f64 {
        self.lights.iter().map(|l| l.brightness).sum()
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Deserialize from TOML string.
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Deserialize in the given format.
    pub fn parse(text: &str, format: DocumentFormat) -> Result<Self> {
        match format {
            DocumentFormat::Json => Self::from_json(text),
            DocumentFormat::Toml => Self::from_toml(text),
        }
    }
}

impl fmt::Display for SceneDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "viewpoint: {}", self.viewpoint)?;
        writeln!(f, "viewport: {}", self.viewport)?;
        for (i, shape) in self.shapes.iter().enumerate() {
            writeln!(f, "shape {}: {}", i + 1, shape)?;
        }
        for (i, light) in self.lights.iter().enumerate() {
            writeln!(f, "light {}: {}", i + 1, light)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SceneDocument {
        let mut doc = SceneDocument::new(
            Vec3::new(0.0, 0.0, 0.0),
            ViewportDef {
                top_left: Vec3::new(-1.0, 1.0, 1.0),
                top_right: Vec3::new(1.0, 1.0, 1.0),
                bottom_left: Vec3::new(-1.0, -1.0, 1.0),
                width: 64,
                height: 48,
            },
        );
        doc.shapes.push(ShapeDef::Sphere {
            center: Vec3::new(0.0, 0.0, 10.0),
            radius: 3.0,
        });
        doc.shapes.push(ShapeDef::Plane {
            origin: Vec3::new(0.0, -3.0, 0.0),
            normal: Vec3::new(0.0, 1.0, 0.0),
        });
        doc.lights.push(LightDef {
            position: Vec3::new(5.0, 5.0, 0.0),
            brightness: 60.0,
        });
        doc.lights.push(LightDef {
            position: Vec3::new(-5.0, 5.0, 0.0),
            brightness: 40.0,
        });
        doc
    }

    #[test]
    fn serde_tagged_enum() {
        let shape = ShapeDef::Sphere {
            center: Vec3::new(1.0, 2.0, 3.0),
            radius: 4.0,
        };
        let json = serde_json::to_string(&shape).unwrap();
        assert!(json.contains(r#""type":"Sphere""#));

        let restored: ShapeDef = serde_json::from_str(&json).unwrap();
        assert_eq!(shape, restored);
    }

    #[test]
    fn json_document() {
        let doc = sample();
        let json = doc.to_json().unwrap();
        assert_eq!(SceneDocument::from_json(&json).unwrap(), doc);
    }

    #[test]
    fn toml_document() {
        let doc = sample();
        let text = doc.to_toml().unwrap();
        assert_eq!(SceneDocument::from_toml(&text).unwrap(), doc);
    }

    #[test]
    fn toml_handwritten() {
        let text = r#"
viewpoint = { x = 0.0, y = 0.0, z = -5.0 }

[viewport]
top_left = { x = -2.0, y = 1.5, z = 0.0 }
top_right = { x = 2.0, y = 1.5, z = 0.0 }
bottom_left = { x = -2.0, y = -1.5, z = 0.0 }
width = 320
height = 240

[[lights]]
position = { x = 0.0, y = 10.0, z = -5.0 }
brightness = 100.0

[[shapes]]
type = "Sphere"
center = { x = 0.0, y = 0.0, z = 8.0 }
radius = 2.5

[[shapes]]
type = "Plane"
origin = { x = 0.0, y = -2.5, z = 0.0 }
normal = { x = 0.0, y = 1.0, z = 0.0 }
"#;
        let doc = SceneDocument::from_toml(text).unwrap();
        assert_eq!(doc.version, "0.1");
        assert_eq!(doc.viewport.width, 320);
        assert_eq!(doc.lights.len(), 1);
        assert_eq!(doc.shapes.len(), 2);
        assert!(matches!(doc.shapes[1], ShapeDef::Plane { .. }));
        assert_eq!(doc.total_brightness(), 100.0);
    }

    #[test]
    fn missing_lists_default_empty() {
        let json = r#"{
            "viewpoint": {"x": 0, "y": 0, "z": 0},
            "viewport": {
                "top_left": {"x": -1, "y": 1, "z": 1},
                "top_right": {"x": 1, "y": 1, "z": 1},
                "bottom_left": {"x": -1, "y": -1, "z": 1},
                "width": 4,
                "height": 4
            }
        }"#;
        let doc = SceneDocument::from_json(json).unwrap();
        assert!(doc.lights.is_empty());
        assert!(doc.shapes.is_empty());
        assert_eq!(doc.total_brightness(), 0.0);
    }

    #[test]
    fn unknown_shape_type_is_error() {
        let json = r#"{"type": "Torus", "radius": 1.0}"#;
        assert!(serde_json::from_str::<ShapeDef>(json).is_err());
    }

    #[test]
    fn format_from_path() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("scene.JSON")).unwrap(),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("dir/scene.toml")).unwrap(),
            DocumentFormat::Toml
        );
        assert!(matches!(
            DocumentFormat::from_path(Path::new("scene.yaml")),
            Err(IrError::UnknownFormat(_))
        ));
    }

    #[test]
    fn description_lists_contents() {
        let text = sample().to_string();
        assert!(text.starts_with("viewpoint: (0, 0, 0)\n"));
        assert!(text.contains("viewport: 64x48 px"));
        assert!(text.contains("shape 1: sphere at (0, 0, 10) with radius 3"));
        assert!(text.contains("shape 2: plane through (0, -3, 0) facing (0, 1, 0)"));
        assert!(text.contains("light 2: light at (-5, 5, 0) with brightness 40"));
    }
}
