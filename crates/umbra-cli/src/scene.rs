//! Loading scene documents and turning them into renderable scenes.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use umbra_ir::{DocumentFormat, SceneDocument, ShapeDef};
use umbra_math::{Point3, Vec3};
use umbra_raycast::{Light, Plane, Scene, SceneError, Shape, ShapeKind, Sphere, Viewport};

/// Read a `.json` or `.toml` scene document.
pub fn load_document(path: &Path) -> Result<SceneDocument> {
    let format = DocumentFormat::from_path(path)?;
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read scene {}", path.display()))?;
    let doc = SceneDocument::parse(&text, format)
        .with_context(|| format!("cannot parse scene {}", path.display()))?;
    Ok(doc)
}

fn point(v: &umbra_ir::Vec3) -> Point3 {
    Point3::new(v.x, v.y, v.z)
}

fn vector(v: &umbra_ir::Vec3) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

fn shape(def: &ShapeDef) -> Box<dyn Shape> {
    match def {
        ShapeDef::Sphere { center, radius } => Box::new(Sphere::new(point(center), *radius)),
        ShapeDef::Plane { origin, normal } => Box::new(Plane::new(point(origin), vector(normal))),
    }
}

/// Build and validate a scene from a document.
pub fn build_scene(doc: &SceneDocument) -> std::result::Result<Scene, SceneError> {
    let viewport = Viewport::new(
        point(&doc.viewport.top_left),
        point(&doc.viewport.top_right),
        point(&doc.viewport.bottom_left),
        doc.viewport.width,
        doc.viewport.height,
    );
    let lights = doc
        .lights
        .iter()
        .map(|l| Light::new(point(&l.position), l.brightness))
        .collect();
    let shapes = doc.shapes.iter().map(shape).collect();

    Scene::new(point(&doc.viewpoint), viewport, lights, shapes)
}

/// Summary lines for a validated scene: shape counts by kind and the
/// viewpoint's distance to the viewport.
pub fn describe_scene(scene: &Scene) -> String {
    let count = |kind: ShapeKind| scene.shapes().iter().filter(|s| s.kind() == kind).count();
    let viewport = scene.viewport();
    format!(
        "  Spheres: {}\n  Planes: {}\n  Resolution: {}x{}\n  Viewpoint distance to viewport: {:.3}\n",
        count(ShapeKind::Sphere),
        count(ShapeKind::Plane),
        viewport.width,
        viewport.height,
        viewport.distance_to_plane(&scene.viewpoint()),
    )
}
