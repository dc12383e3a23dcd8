//! Loading the config and scene graph files.
//!
//! Both files are JSON documents deserialized with serde. The config is
//! validated before it is returned, so a loaded `Config` is always renderable.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::{Config, ConfigError, SceneError, SceneGraph};

/// Errors that can occur while loading scene files.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Scene(#[from] SceneError),

    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load and validate a render config file.
///
/// # Example
///
/// ```ignore
/// use lux_core::load_config;
///
/// let config = load_config("config.json")?;
/// println!("{} samples per pixel", config.samples_per_pixel);
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> LoadResult<Config> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let config = config_from_str(&content)?;

    log::info!(
        "Config file {} loaded: {} materials, {} lights",
        path.display(),
        config.scene.materials.len(),
        config.scene.lights.len()
    );
    if config.scene.materials.is_empty() {
        log::warn!("Config file {} defines no materials", path.display());
    }
    for material in config.scene.materials.iter() {
        log::debug!("Material {}: {:?}", material.name, material);
    }
    Ok(config)
}

/// Parse and validate a render config from a JSON string.
pub fn config_from_str(content: &str) -> LoadResult<Config> {
    let config: Config = serde_json::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load a scene graph file.
pub fn load_scene_graph<P: AsRef<Path>>(path: P) -> LoadResult<SceneGraph> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let graph = scene_graph_from_str(&content)?;

    log::info!("Scene graph {} loaded: {} shapes", path.display(), graph.shape_count());
    Ok(graph)
}

/// Parse a scene graph from a JSON string.
///
/// Every transform operation is checked, so a malformed one fails the load.
pub fn scene_graph_from_str(content: &str) -> LoadResult<SceneGraph> {
    let graph: SceneGraph = serde_json::from_str(content)?;
    graph.flatten()?;
    Ok(graph)
}
