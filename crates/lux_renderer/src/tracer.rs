//! Recursive Whitted shading.
//!
//! A hit is lit directly by every light source, then reflected and refracted
//! rays are traced until the depth budget runs out. Contributions are added
//! without energy normalization.

use lux_core::{Color, LightSource, Material};
use lux_math::{reflect, Ray, Vec3};

use crate::{RenderError, RenderSettings, World};

/// Offset applied to secondary ray origins along their direction.
pub const EPSILON: f32 = 1e-4;

/// Traces rays against a baked world.
#[derive(Clone, Copy)]
pub struct Tracer<'a> {
    world: &'a World,
    settings: &'a RenderSettings,
}

impl<'a> Tracer<'a> {
    pub fn new(world: &'a World, settings: &'a RenderSettings) -> Self {
        Self { world, settings }
    }

    /// Colour seen along `ray`, recursing at most `depth` more times.
    pub fn shade(&self, ray: &Ray, depth: u32) -> Result<Color, RenderError> {
        let hit = self.world.intersect(ray);
        if !hit.hit {
            return Ok(self.world.background().sample(ray));
        }

        let material = self.world.materials().get(hit.material).ok_or_else(|| {
            log::error!("Material \"{}\" is not defined", hit.material.to_lowercase());
            RenderError::UndefinedMaterial(hit.material.to_string())
        })?;

        let point = ray.at(hit.distance);
        let normal = hit.normal.normalize();
        let mut color = self.light_intensity(material, hit.shape, point, normal) * material.color;

        if depth == 0 {
            return Ok(color);
        }

        let direction = ray.direction.normalize();

        if self.settings.reflections {
            let reflected = reflect(direction, normal);
            let secondary = Ray::secondary(point + reflected * EPSILON, reflected, hit.shape);
            color += material.reflection * self.shade(&secondary, depth - 1)?;
        }

        if self.settings.refractions {
            let ratio = if hit.front_face {
                1.0 / material.refractive_index
            } else {
                material.refractive_index
            };
            if let Some(refracted) = refract(direction, normal, ratio) {
                let secondary = Ray::secondary(point + refracted * EPSILON, refracted, hit.shape);
                color += material.refraction * self.shade(&secondary, depth - 1)?;
            }
        }

        Ok(color)
    }

    /// Direct light arriving at `point`, clamped to [0, 1] per channel.
    fn light_intensity(&self, material: &Material, shape: Option<usize>, point: Vec3, normal: Vec3) -> Vec3 {
        let intensity: Vec3 = self
            .world
            .lights()
            .iter()
            .filter(|light| !(self.settings.shadows && self.in_shadow(point, shape, light)))
            .map(|light| light.reflectance(normal, point, material))
            .sum();

        intensity.clamp(Vec3::ZERO, Vec3::ONE)
    }

    /// Whether a point light is blocked from `point`. Other lights never cast shadows.
    fn in_shadow(&self, point: Vec3, shape: Option<usize>, light: &LightSource) -> bool {
        let LightSource::Point { position, .. } = *light else {
            return false;
        };

        let to_light = position - point;
        let max_distance = to_light.length();
        let direction = to_light / max_distance;

        let ray = Ray::secondary(point + direction * EPSILON, direction, shape);
        let hit = self.world.intersect(&ray);
        hit.hit && hit.distance < max_distance
    }
}

/// Refract unit `direction` through a surface with unit `normal` facing it.
///
/// `ratio` is the incident over transmitted refractive index. Returns `None`
/// on total internal reflection.
pub fn refract(direction: Vec3, normal: Vec3, ratio: f32) -> Option<Vec3> {
    let cos_theta = (-direction).dot(normal).min(1.0);
    if ratio * ratio * (1.0 - cos_theta * cos_theta) > 1.0 {
        return None;
    }

    let r_perp = ratio * (direction + cos_theta * normal);
    let r_parallel = -(1.0 - r_perp.length_squared()).abs().sqrt() * normal;
    Some(r_perp + r_parallel)
}
