//! The baked scene: shapes in world space plus everything needed to shade them.

use lux_core::{IntersectResult, LightSource, MaterialLibrary, SceneDefinition, SceneGraph, Shape};
use lux_math::Ray;

use crate::{Background, RenderError};

/// A world-space shape and the material it is bound to.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeRecord {
    pub shape: Shape,
    pub material: String,
}

/// Immutable scene ready for rendering.
///
/// Shapes live in an arena; a shape's id is its index in it.
#[derive(Debug, Clone)]
pub struct World {
    shapes: Vec<ShapeRecord>,
    materials: MaterialLibrary,
    lights: Vec<LightSource>,
    background: Background,
}

impl World {
    /// Flatten the scene graph and bake every transform into its shape.
    ///
    /// Fails if a transform is malformed, a shape has no material bound, or
    /// a bound material is not in the library.
    pub fn bake(graph: &SceneGraph, scene: SceneDefinition) -> Result<Self, RenderError> {
        let nodes = graph.flatten()?;

        let mut shapes = Vec::with_capacity(nodes.len());
        for (index, node) in nodes.into_iter().enumerate() {
            let material = node.material.ok_or(RenderError::MissingMaterial(index))?;
            if !scene.materials.contains(&material) {
                log::error!("Material {} is not defined", material);
                return Err(RenderError::UndefinedMaterial(material));
            }

            let mut shape = node.shape;
            shape.transform(&node.transform);
            shapes.push(ShapeRecord { shape, material });
        }

        log::info!(
            "World baked: {} shapes, {} materials, {} lights",
            shapes.len(),
            scene.materials.len(),
            scene.lights.len()
        );

        Ok(Self {
            shapes,
            materials: scene.materials,
            lights: scene.lights,
            background: Background::new(scene.background_color, scene.clouds),
        })
    }

    /// Nearest hit along the ray, skipping the shape the ray left from.
    pub fn intersect(&self, ray: &Ray) -> IntersectResult<'_> {
        self.shapes
            .iter()
            .enumerate()
            .filter(|(id, _)| ray.origin_shape != Some(*id))
            .fold(IntersectResult::MISS, |nearest, (id, record)| {
                nearest.nearer(record.shape.intersect(ray).with_owner(id, &record.material))
            })
    }

    pub fn shapes(&self) -> &[ShapeRecord] {
        &self.shapes
    }

    pub fn materials(&self) -> &MaterialLibrary {
        &self.materials
    }

    pub fn lights(&self) -> &[LightSource] {
        &self.lights
    }

    pub fn background(&self) -> &Background {
        &self.background
    }
}
