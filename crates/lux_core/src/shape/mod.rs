//! Analytic shapes that rays can be intersected with.
//!
//! Shapes store geometry only. Materials are bound by the scene graph and
//! shapes are identified by their index in the baked arena.

mod plane;
mod sphere;

pub use plane::Plane;
pub use sphere::Sphere;

use lux_math::{Mat4, Ray};
use serde::Deserialize;

use crate::IntersectResult;

/// A shape primitive owned by a leaf node of the scene graph.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
}

impl Shape {
    /// Intersect a ray with this shape.
    pub fn intersect(&self, ray: &Ray) -> IntersectResult<'static> {
        match self {
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Plane(plane) => plane.intersect(ray),
        }
    }

    /// Apply a world transform to the shape's geometry in place.
    pub fn transform(&mut self, transform: &Mat4) {
        match self {
            Shape::Sphere(sphere) => sphere.transform(transform),
            Shape::Plane(plane) => plane.transform(transform),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}
