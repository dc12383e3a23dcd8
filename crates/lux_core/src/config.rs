//! Render configuration.
//!
//! Built once at startup from the config file and read-only while rendering.

use std::path::PathBuf;

use lux_math::{UVec2, Vec3};
use serde::Deserialize;
use thiserror::Error;

use crate::{Color, LightSource, MaterialLibrary};

/// Configuration values that cannot produce a valid render.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Square root of samples per pixel must be an integer (got {0})")]
    InvalidSampleCount(u32),

    #[error("Image resolution must be at least 1x1 (got {0}x{1})")]
    InvalidResolution(u32, u32),
}

/// Process-wide render parameters.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File where the rendered image is written (.pfm or .exr)
    pub output_file: PathBuf,

    pub shadows: bool,
    pub reflections: bool,
    pub refractions: bool,

    /// Maximum recursion depth for secondary rays
    pub max_depth: u32,

    /// Samples per pixel, must be a perfect square
    pub samples_per_pixel: u32,

    /// Seed for sub-pixel jitter; random when absent
    pub seed: Option<u64>,

    pub camera: CameraConfig,

    /// Materials, lights and background
    pub scene: SceneDefinition,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_file: PathBuf::from("demo.pfm"),
            shadows: true,
            reflections: true,
            refractions: true,
            max_depth: 8,
            samples_per_pixel: 1,
            seed: None,
            camera: CameraConfig::default(),
            scene: SceneDefinition::default(),
        }
    }
}

impl Config {
    /// Check the values that must hold before rendering can start.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let [width, height] = self.camera.resolution.to_array();
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidResolution(width, height));
        }
        stratified_grid_size(self.samples_per_pixel)?;
        Ok(())
    }
}

/// Side length of the stratified sub-pixel grid for a sample count.
///
/// Fails unless `samples_per_pixel` is a non-zero perfect square.
pub fn stratified_grid_size(samples_per_pixel: u32) -> Result<u32, ConfigError> {
    let root = (samples_per_pixel as f64).sqrt().round() as u64;
    if samples_per_pixel == 0 || root * root != u64::from(samples_per_pixel) {
        return Err(ConfigError::InvalidSampleCount(samples_per_pixel));
    }
    Ok(root as u32)
}

/// Perspective camera parameters.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Image width and height in pixels
    pub resolution: UVec2,

    /// Vertical field of view in degrees
    pub fov: f32,

    /// Distance from the eye to the image plane
    pub near_plane: f32,

    /// Eye position
    pub position: Vec3,

    /// Viewing direction
    pub direction: Vec3,

    pub up: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            resolution: UVec2::new(640, 480),
            fov: 60.0,
            near_plane: 1.0,
            position: Vec3::ZERO,
            direction: Vec3::Z,
            up: Vec3::Y,
        }
    }
}

/// Definition of the scene's non-geometric content.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SceneDefinition {
    /// Color returned by rays that miss every shape
    pub background_color: Color,

    /// Blend procedural clouds into the background
    pub clouds: bool,

    pub materials: MaterialLibrary,

    pub lights: Vec<LightSource>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_size_for_perfect_squares() {
        assert_eq!(stratified_grid_size(1), Ok(1));
        assert_eq!(stratified_grid_size(4), Ok(2));
        assert_eq!(stratified_grid_size(16), Ok(4));
        assert_eq!(stratified_grid_size(10_000), Ok(100));
        assert_eq!(stratified_grid_size(65_535 * 65_535), Ok(65_535));
    }

    #[test]
    fn test_grid_size_rejects_non_squares() {
        for samples in [0, 2, 3, 5, 8, 15, 17, u32::MAX] {
            assert_eq!(stratified_grid_size(samples), Err(ConfigError::InvalidSampleCount(samples)));
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_depth, 8);
        assert!(config.shadows && config.reflections && config.refractions);
    }

    #[test]
    fn test_validate_rejects_zero_resolution() {
        let mut config = Config::default();
        config.camera.resolution = UVec2::new(0, 10);
        assert_eq!(config.validate(), Err(ConfigError::InvalidResolution(0, 10)));
    }

    #[test]
    fn test_validate_rejects_bad_sample_count() {
        let config = Config {
            samples_per_pixel: 3,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidSampleCount(3)));
    }
}
