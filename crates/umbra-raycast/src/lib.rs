#![warn(missing_docs)]

//! Ray casting with hard shadows for the umbra renderer.
//!
//! For every pixel of a [`Viewport`] a ray is fired from the scene's
//! viewpoint, the nearest surface in front of the viewpoint is found, and
//! its brightness is the sum of every [`Light`] that can see the point.
//! Surfaces seen from the inside of a shape are also tested for shadowing
//! by the shape's own far wall.
//!
//! # Architecture
//!
//! - [`Ray`] - Ray representation with origin and unit direction
//! - [`Shape`] - Intersection capability, with [`Sphere`] and [`Plane`]
//! - [`intersect`] - Ray-surface intersection algorithms for each shape
//! - [`Scene`] - Validated scene, nearest-hit search and shading
//! - [`Frame`] - Quantized grayscale output
//!
//! # Example
//!
//! ```ignore
//! use umbra_math::{Point3, Vec3};
//! use umbra_raycast::{Light, Scene, Sphere, Viewport};
//!
//! let viewport = Viewport::new(
//!     Point3::new(-1.0, 1.0, 1.0),
//!     Point3::new(1.0, 1.0, 1.0),
//!     Point3::new(-1.0, -1.0, 1.0),
//!     64,
//!     64,
//! );
//! let scene = Scene::new(
//!     Point3::origin(),
//!     viewport,
//!     vec![Light::new(Point3::new(0.0, 0.0, 2.0), 100.0)],
//!     vec![Box::new(Sphere::new(Point3::new(0.0, 0.0, 10.0), 3.0))],
//! )?;
//!
//! let frame = scene.render();
//! ```

pub mod error;
mod frame;
pub mod intersect;
mod light;
mod occlusion;
mod ray;
mod scene;
mod shading;
mod shape;
mod viewport;

pub use error::{Result, SceneError};
pub use frame::{quantize, Frame, RenderStats};
pub use intersect::SurfaceHit;
pub use light::Light;
pub use ray::Ray;
pub use scene::{Intersection, Scene, SurfaceSide};
pub use shape::{Plane, Shape, ShapeKind, Sphere};
pub use viewport::Viewport;
