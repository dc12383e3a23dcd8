//! Lux Core - Scene description types for the Lux ray tracer.
//!
//! This crate provides:
//!
//! - **Shapes**: `Sphere`, `Plane` and the `Shape` enum with analytic ray intersection
//! - **Materials and lights**: `Material`, `MaterialLibrary`, `LightSource`
//! - **Scene graph**: `InnerNode`, `LeafNode`, `SceneGraph` and flattening into `ShapeNode`s
//! - **Configuration**: `Config`, `CameraConfig`, `SceneDefinition` and JSON loaders
//!
//! # Example
//!
//! ```ignore
//! use lux_core::{load_config, load_scene_graph};
//!
//! let config = load_config("config.json")?;
//! let graph = load_scene_graph("scene.json")?;
//! for node in graph.flatten()? {
//!     println!("{:?} uses {:?}", node.shape, node.material);
//! }
//! ```

pub mod config;
pub mod graph;
pub mod intersect;
pub mod light;
pub mod loader;
pub mod material;
pub mod shape;

// Re-export commonly used types
pub use config::{stratified_grid_size, CameraConfig, Config, ConfigError, SceneDefinition};
pub use graph::{parse_transform, InnerNode, LeafNode, SceneError, SceneGraph, SceneNode, ShapeNode};
pub use intersect::IntersectResult;
pub use light::LightSource;
pub use loader::{
    config_from_str, load_config, load_scene_graph, scene_graph_from_str, LoadError, LoadResult,
};
pub use material::{Material, MaterialLibrary};
pub use shape::{Plane, Shape, Sphere};

/// Color type alias (linear RGB, typically 0-1)
pub type Color = lux_math::Vec3;
