// Re-export glam for convenience
pub use glam::*;

// Lux math types
mod ray;
mod transform;

pub use ray::Ray;
pub use transform::Mat4Ext;

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_flips_normal_component() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        let r = reflect(v, Vec3::Y);
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_reflect_parallel_vector_unchanged() {
        let v = Vec3::new(0.0, 0.0, 3.0);
        assert_eq!(reflect(v, Vec3::Y), v);
    }
}
