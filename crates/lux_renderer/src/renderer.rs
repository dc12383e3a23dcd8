//! Image assembly: stratified sampling per pixel, buckets rendered in parallel.

use indicatif::{ProgressBar, ProgressStyle};
use lux_core::{stratified_grid_size, Color, Config, ConfigError, SceneError};
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rayon::prelude::*;
use thiserror::Error;

use crate::bucket::{generate_buckets, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
use crate::{Camera, Tracer, World};

/// Errors that abort a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Material \"{0}\" is not defined")]
    UndefinedMaterial(String),

    #[error("Shape {0} has no material bound")]
    MissingMaterial(usize),

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub shadows: bool,
    pub reflections: bool,
    pub refractions: bool,
    /// Maximum recursion depth for secondary rays
    pub max_depth: u32,
    /// Samples per pixel, must be a perfect square
    pub samples_per_pixel: u32,
    /// Seed for sub-pixel jitter; drawn from entropy when absent
    pub seed: Option<u64>,
    pub bucket_size: u32,
    /// Draw a progress bar on the terminal
    pub progress: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            shadows: true,
            reflections: true,
            refractions: true,
            max_depth: 8,
            samples_per_pixel: 1,
            seed: None,
            bucket_size: DEFAULT_BUCKET_SIZE,
            progress: false,
        }
    }
}

impl RenderSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            shadows: config.shadows,
            reflections: config.reflections,
            refractions: config.refractions,
            max_depth: config.max_depth,
            samples_per_pixel: config.samples_per_pixel,
            seed: config.seed,
            ..Self::default()
        }
    }

    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }
}

/// Render a single pixel with N x N stratified samples.
pub fn render_pixel(tracer: &Tracer, camera: &Camera, x: u32, y: u32, grid: u32, max_depth: u32, rng: &mut dyn RngCore) -> Result<Color, RenderError> {
    let mut pixel_color = Color::ZERO;
    let cell = 1.0 / grid as f32;

    for ry in 0..grid {
        for rx in 0..grid {
            let u: f32 = rng.gen();
            let v: f32 = rng.gen();
            let ray = camera.create_ray(x as f32 + (rx as f32 + u) * cell, y as f32 + (ry as f32 + v) * cell);
            pixel_color += tracer.shade(&ray, max_depth)?;
        }
    }

    Ok(pixel_color / (grid * grid) as f32)
}

/// Render every pixel of a bucket in row-major order.
pub fn render_bucket(bucket: &Bucket, tracer: &Tracer, camera: &Camera, grid: u32, max_depth: u32, rng: &mut dyn RngCore) -> Result<BucketResult, RenderError> {
    let pixels = bucket
        .pixels()
        .map(|(x, y)| render_pixel(tracer, camera, x, y, grid, max_depth, &mut *rng))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(BucketResult::new(*bucket, pixels))
}

/// Linear RGB image storage.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Copy a finished bucket into place.
    pub fn write_bucket(&mut self, result: &BucketResult) {
        for ((x, y), color) in result.bucket.pixels().zip(&result.pixels) {
            self.set(x, y, *color);
        }
    }
}

/// Render the whole image.
///
/// Buckets are traced in parallel; each owns an RNG seeded from the render
/// seed and its index, so a fixed seed reproduces the image exactly.
pub fn render(camera: &Camera, world: &World, settings: &RenderSettings) -> Result<ImageBuffer, RenderError> {
    let grid = stratified_grid_size(settings.samples_per_pixel)?;
    let seed = settings.seed.unwrap_or_else(rand::random);
    let tracer = Tracer::new(world, settings);

    let buckets = generate_buckets(camera.width(), camera.height(), settings.bucket_size);
    log::debug!("Rendering {} buckets from {} with seed {}", buckets.len(), camera.position(), seed);

    let progress = if settings.progress {
        let bar = ProgressBar::new(buckets.len() as u64);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} buckets ({eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");
        bar.set_style(style);
        bar
    } else {
        ProgressBar::hidden()
    };

    let results = buckets
        .par_iter()
        .map(|bucket| {
            let mut rng = StdRng::seed_from_u64(seed ^ bucket.index as u64);
            let result = render_bucket(bucket, &tracer, camera, grid, settings.max_depth, &mut rng);
            progress.inc(1);
            result
        })
        .collect::<Result<Vec<_>, _>>();

    let results = match results {
        Ok(results) => results,
        Err(err) => {
            progress.abandon();
            return Err(err);
        }
    };
    progress.finish();

    let mut image = ImageBuffer::new(camera.width(), camera.height());
    for result in &results {
        image.write_bucket(result);
    }

    Ok(image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lux_core::{InnerNode, LeafNode, LightSource, Material, SceneDefinition, SceneGraph, Sphere};
    use lux_math::Vec3;

    fn red_sphere_world() -> World {
        let mut scene = SceneDefinition {
            background_color: Color::new(0.0, 0.0, 1.0),
            lights: vec![LightSource::Ambient { intensity: Vec3::ONE }],
            ..SceneDefinition::default()
        };
        scene
            .materials
            .insert(Material {
                ambient: 1.0,
                ..Material::new("red", Color::new(1.0, 0.0, 0.0))
            })
            .unwrap();

        let graph = SceneGraph::new(
            InnerNode::new()
                .with_material("red")
                .with_child(LeafNode::new(vec![Sphere::new(Vec3::new(0.0, 0.0, 5.0), 2.0).into()])),
        );
        World::bake(&graph, scene).unwrap()
    }

    #[test]
    fn test_render_pixel_centre_hits_sphere() {
        let world = red_sphere_world();
        let settings = RenderSettings::default();
        let camera = Camera::new(11, 11);
        let tracer = Tracer::new(&world, &settings);
        let mut rng = StdRng::seed_from_u64(42);

        let color = render_pixel(&tracer, &camera, 5, 5, 2, settings.max_depth, &mut rng).unwrap();
        assert!((color - Color::new(1.0, 0.0, 0.0)).length() < 1e-5);

        let corner = render_pixel(&tracer, &camera, 0, 0, 2, settings.max_depth, &mut rng).unwrap();
        assert!((corner - Color::new(0.0, 0.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn test_render_rejects_non_square_sample_count() {
        let world = red_sphere_world();
        let settings = RenderSettings {
            samples_per_pixel: 2,
            ..RenderSettings::default()
        };
        let err = render(&Camera::new(4, 4), &world, &settings).unwrap_err();
        assert!(matches!(err, RenderError::Config(ConfigError::InvalidSampleCount(2))));
    }

    #[test]
    fn test_render_fills_every_pixel() {
        let world = red_sphere_world();
        let settings = RenderSettings {
            bucket_size: 4,
            seed: Some(1),
            ..RenderSettings::default()
        };
        let image = render(&Camera::new(9, 7), &world, &settings).unwrap();

        assert_eq!(image.pixels.len(), 9 * 7);
        assert!((image.get(4, 3) - Color::new(1.0, 0.0, 0.0)).length() < 1e-5);
        assert!((image.get(0, 0) - Color::new(0.0, 0.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn test_pixel_index_past_u32_range() {
        let image = ImageBuffer {
            width: 100_000,
            height: 100_000,
            pixels: Vec::new(),
        };
        assert_eq!(image.index(99_999, 99_999), 9_999_999_999);
    }

    #[test]
    fn test_image_buffer_get_set() {
        let mut image = ImageBuffer::new(3, 2);
        image.set(2, 1, Color::ONE);
        assert_eq!(image.get(2, 1), Color::ONE);
        assert_eq!(image.get(0, 0), Color::ZERO);
    }
}
