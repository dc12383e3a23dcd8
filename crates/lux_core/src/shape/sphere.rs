//! Sphere primitive for ray tracing.

use lux_math::{Mat4, Ray, Vec3};
use serde::Deserialize;

use crate::IntersectResult;

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Sphere {
    /// Centre of the sphere
    pub position: Vec3,
    pub radius: f32,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(position: Vec3, radius: f32) -> Self {
        Self { position, radius }
    }

    /// Intersect a ray with the sphere.
    ///
    /// Solves `|O + tD - C|^2 = r^2`. A tangent ray (zero discriminant) is a
    /// miss. The nearest non-negative root wins and the returned normal always
    /// faces the incoming ray.
    pub fn intersect(&self, ray: &Ray) -> IntersectResult<'static> {
        let oc = ray.origin() - self.position;
        let a = ray.direction().length_squared();
        let b = 2.0 * oc.dot(ray.direction());
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return IntersectResult::MISS;
        }

        let sqrtd = discriminant.sqrt();
        let t0 = (-b - sqrtd) / (2.0 * a);
        let t1 = (-b + sqrtd) / (2.0 * a);

        // Both intersections behind the origin
        if t0 < 0.0 && t1 < 0.0 {
            return IntersectResult::MISS;
        }

        let t = if t0 >= 0.0 { t0 } else { t1 };

        let outward_normal = (ray.at(t) - self.position).normalize();
        let front_face = ray.direction().dot(outward_normal) < 0.0;
        let normal = if front_face {
            outward_normal
        } else {
            -outward_normal
        };

        IntersectResult::new(t, normal, front_face)
    }

    /// Bake a transform into the centre and radius.
    ///
    /// The radius is recomputed from a probe point on the surface, so only
    /// rigid motions and uniform scales keep the shape a sphere.
    pub fn transform(&mut self, transform: &Mat4) {
        let centre = transform.transform_point3(self.position);
        let probe = transform.transform_point3(self.position + Vec3::X * self.radius);

        self.radius = (probe - centre).length();
        self.position = centre;
    }
}
