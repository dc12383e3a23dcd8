//! Light sources and their local (diffuse) reflectance.

use lux_math::Vec3;
use serde::Deserialize;

use crate::Material;

/// A light source in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LightSource {
    /// Uniform light reaching every surface
    Ambient { intensity: Vec3 },

    /// Omnidirectional light at a point, can be shadowed
    Point { intensity: Vec3, position: Vec3 },

    /// Light arriving from one direction (e.g. sun)
    ///
    /// `direction` is used as given; its length scales the contribution.
    Directional { intensity: Vec3, direction: Vec3 },
}

impl LightSource {
    /// Compute this light's contribution to the radiance reflected at `point`.
    ///
    /// `normal` must be unit length and face the viewer side of the surface.
    pub fn reflectance(&self, normal: Vec3, point: Vec3, material: &Material) -> Vec3 {
        match *self {
            LightSource::Ambient { intensity } => material.ambient * intensity,
            LightSource::Point { intensity, position } => {
                let to_light = (position - point).normalize_or_zero();
                diffuse(to_light, normal, material) * intensity
            }
            LightSource::Directional { intensity, direction } => diffuse(-direction, normal, material) * intensity,
        }
    }
}

/// Lambert factor for light arriving along `to_light`, zero from behind.
fn diffuse(to_light: Vec3, normal: Vec3, material: &Material) -> f32 {
    let cos_incidence = to_light.dot(normal);
    if cos_incidence <= 0.0 {
        return 0.0;
    }
    material.diffuse * cos_incidence
}
