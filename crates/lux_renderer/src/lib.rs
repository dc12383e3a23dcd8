//! Lux Renderer - CPU Whitted-style ray tracing
//!
//! Recursive ray tracer with direct diffuse lighting, hard shadows from point
//! lights, mirror reflection and dielectric refraction.
//!
//! The scene graph is flattened and baked into a [`World`] once; buckets of
//! pixels are then rendered in parallel against that immutable world.

mod background;
mod bucket;
mod camera;
mod output;
mod renderer;
mod tracer;
mod world;

pub use background::{Background, Perlin};
pub use bucket::{generate_buckets, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use output::{save_image, write_pfm, OutputError};
pub use renderer::{render, render_bucket, render_pixel, ImageBuffer, RenderError, RenderSettings};
pub use tracer::{refract, Tracer, EPSILON};
pub use world::{ShapeRecord, World};

/// Re-export common types from lux_core and lux_math
pub use lux_core::Color;
pub use lux_math::{Ray, Vec3};
