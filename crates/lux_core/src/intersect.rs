//! Result of a ray-shape or ray-scene intersection test.

use lux_math::Vec3;

/// Record of a ray intersection.
///
/// Shapes fill in the geometric part (`distance`, `normal`, `front_face`).
/// The scene layer attaches the owning shape's arena index and its resolved
/// material name, since shapes only store geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectResult<'a> {
    /// Whether the ray hit anything
    pub hit: bool,
    /// Parameter t where the intersection occurs (`+inf` on a miss)
    pub distance: f32,
    /// Surface normal at intersection (faces the incoming ray, not always unit length)
    pub normal: Vec3,
    /// Material name bound to the shape (empty for shape-level results)
    pub material: &'a str,
    /// Arena index of the shape that was hit
    pub shape: Option<usize>,
    /// Whether the ray approached from the side the outward normal points to
    pub front_face: bool,
}

impl IntersectResult<'static> {
    /// The canonical "no intersection" value.
    pub const MISS: IntersectResult<'static> = IntersectResult {
        hit: false,
        distance: f32::INFINITY,
        normal: Vec3::ZERO,
        material: "",
        shape: None,
        front_face: false,
    };

    /// A shape-level hit with no owner information attached yet.
    pub fn new(distance: f32, normal: Vec3, front_face: bool) -> Self {
        Self {
            hit: true,
            distance,
            normal,
            material: "",
            shape: None,
            front_face,
        }
    }
}

impl<'a> IntersectResult<'a> {
    /// Attach the owning shape and its material name.
    ///
    /// A miss stays a miss.
    pub fn with_owner<'b>(self, shape: usize, material: &'b str) -> IntersectResult<'b> {
        if !self.hit {
            return IntersectResult::MISS;
        }
        IntersectResult {
            hit: true,
            distance: self.distance,
            normal: self.normal,
            material,
            shape: Some(shape),
            front_face: self.front_face,
        }
    }

    /// Keep whichever of two results is nearer.
    #[inline]
    pub fn nearer(self, other: IntersectResult<'a>) -> IntersectResult<'a> {
        if other.hit && other.distance < self.distance {
            other
        } else {
            self
        }
    }
}
