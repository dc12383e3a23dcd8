//! Whitted material definitions and the scene-wide material library.

use std::collections::HashMap;

use serde::Deserialize;

use crate::{Color, SceneError};

/// A named bundle of reflectance coefficients.
///
/// Shapes never own materials; they are bound by name through the scene graph
/// and resolved against a [`MaterialLibrary`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Material name (lookup is case-insensitive)
    pub name: String,

    /// Ambient coefficient
    pub ambient: f32,

    /// Diffuse coefficient
    pub diffuse: f32,

    /// Specular coefficient
    pub specular: f32,

    /// Highlight exponent, read from scene files but not used in shading
    pub highlight: f32,

    /// Weight of the mirror reflection term
    pub reflection: f32,

    /// Weight of the refraction term
    pub refraction: f32,

    /// Index of refraction (1.0 = air, 1.5 = glass)
    pub refractive_index: f32,

    /// Base color (RGB, 0-1)
    pub color: Color,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            ambient: 0.0,
            diffuse: 0.0,
            specular: 0.0,
            highlight: 1.0,
            reflection: 0.0,
            refraction: 0.0,
            refractive_index: 1.0,
            color: Color::ONE,
        }
    }
}

impl Material {
    /// Create a new material with just a name and base color.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
            ..Default::default()
        }
    }
}

/// Scene-wide dictionary of materials keyed by lower-cased name.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(try_from = "Vec<Material>")]
pub struct MaterialLibrary {
    materials: HashMap<String, Material>,
}

impl MaterialLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a material. Names must be unique ignoring case.
    pub fn insert(&mut self, material: Material) -> Result<(), SceneError> {
        let key = material.name.to_lowercase();
        if self.materials.contains_key(&key) {
            return Err(SceneError::DuplicateMaterial(material.name));
        }
        self.materials.insert(key, material);
        Ok(())
    }

    /// Look up a material by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Material> {
        self.materials.get(&name.to_lowercase())
    }

    /// Check if a material with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get material count.
    pub fn len(&self) -> usize {
        self.materials.len()
    }

    /// Check if the library is empty.
    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Iterate over all materials in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &Material> {
        self.materials.values()
    }
}

impl TryFrom<Vec<Material>> for MaterialLibrary {
    type Error = SceneError;

    fn try_from(materials: Vec<Material>) -> Result<Self, Self::Error> {
        let mut library = MaterialLibrary::new();
        for material in materials {
            library.insert(material)?;
        }
        Ok(library)
    }
}
