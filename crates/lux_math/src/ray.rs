use crate::Vec3;

/// A ray in 3D space with origin, direction, and the shape it was spawned from.
///
/// Rays are used for raytracing - they represent a line starting at `origin`
/// and traveling in `direction`. The direction is not required to be normalized;
/// call sites that need a unit vector normalize it themselves.
///
/// `origin_shape` holds the arena index of the shape a secondary ray left from.
/// Intersection tests skip that shape so a reflected, refracted or shadow ray
/// cannot immediately hit the surface it started on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub origin_shape: Option<usize>,
}

impl Ray {
    /// Create a new primary ray (not attached to any shape).
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            origin_shape: None,
        }
    }

    /// Create a secondary ray leaving the shape with arena index `shape`.
    pub fn secondary(origin: Vec3, direction: Vec3, shape: Option<usize>) -> Self {
        Self {
            origin,
            direction,
            origin_shape: shape,
        }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
