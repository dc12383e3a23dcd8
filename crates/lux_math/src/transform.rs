// Transform utilities for Mat4
//
// Extends glam::Mat4 with the normal transform used when baking scene-graph
// transforms into shape parameters.
// Note: glam::Mat4 already provides transform_point3(), transform_vector3() and inverse()

use glam::{Mat3, Mat4, Vec3};

/// Extension trait for Mat4 to provide additional transform utilities
pub trait Mat4Ext {
    /// Transform a surface normal by the inverse-transpose of the upper 3x3.
    /// The result is not normalized.
    fn transform_normal3(&self, normal: Vec3) -> Vec3;
}

impl Mat4Ext for Mat4 {
    fn transform_normal3(&self, normal: Vec3) -> Vec3 {
        let linear = Mat3::from_mat4(*self);
        linear.inverse().transpose() * normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_point3_translation() {
        let mat = Mat4::from_translation(Vec3::new(10.0, 20.0, 30.0));
        let point = Vec3::new(1.0, 2.0, 3.0);
        let transformed = mat.transform_point3(point);

        assert_eq!(transformed, Vec3::new(11.0, 22.0, 33.0));
    }

    #[test]
    fn test_transform_normal_ignores_translation() {
        let mat = Mat4::from_translation(Vec3::new(5.0, -3.0, 2.0));
        let n = mat.transform_normal3(Vec3::Y);
        assert!((n - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_transform_normal_rotation() {
        use std::f32::consts::PI;

        // 90 degree rotation around Z axis
        let mat = Mat4::from_rotation_z(PI / 2.0);
        let n = mat.transform_normal3(Vec3::X).normalize();

        // X normal should rotate to Y normal
        assert!((n - Vec3::Y).length() < 0.001);
    }

    #[test]
    fn test_transform_normal_stays_perpendicular_under_nonuniform_scale() {
        let mat = Mat4::from_scale(Vec3::new(4.0, 1.0, 1.0));
        // Plane through the origin containing the direction (1, 1, 0)
        let n = Vec3::new(1.0, -1.0, 0.0);
        let tangent = mat.transform_vector3(Vec3::new(1.0, 1.0, 0.0));
        let transformed = mat.transform_normal3(n);

        assert!(transformed.dot(tangent).abs() < 1e-5);
    }
}
