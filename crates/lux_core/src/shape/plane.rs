//! Infinite plane primitive.

use lux_math::{Mat4, Mat4Ext, Ray, Vec3};
use serde::Deserialize;

use crate::IntersectResult;

/// Rays closer than this to parallel never hit the plane.
const PARALLEL_THRESHOLD: f32 = 1e-6;

/// An infinite plane through `position` with the given `normal`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Plane {
    /// Any point on the plane
    pub position: Vec3,
    pub normal: Vec3,
}

impl Plane {
    /// Create a new plane.
    pub fn new(position: Vec3, normal: Vec3) -> Self {
        Self { position, normal }
    }

    /// Intersect a ray with the plane.
    ///
    /// t = ((P - O) . N) / (D . N)
    pub fn intersect(&self, ray: &Ray) -> IntersectResult<'static> {
        let denominator = self.normal.dot(ray.direction());

        // Parallel to the plane
        if denominator.abs() < PARALLEL_THRESHOLD {
            return IntersectResult::MISS;
        }

        let t = (self.position - ray.origin()).dot(self.normal) / denominator;
        if t < 0.0 {
            return IntersectResult::MISS;
        }

        // Normal always opposes the ray
        let normal = -denominator.signum() * self.normal;
        IntersectResult::new(t, normal, denominator < 0.0)
    }

    /// Bake a transform: position as a point, normal by the inverse-transpose.
    pub fn transform(&mut self, transform: &Mat4) {
        self.position = transform.transform_point3(self.position);
        self.normal = transform.transform_normal3(self.normal).normalize();
    }
}
