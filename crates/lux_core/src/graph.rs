//! Scene graph types for Lux.
//!
//! A scene is a tree of inner nodes carrying transform operations and an
//! inheritable material name, with leaf nodes owning shapes. Rendering works on
//! the flattened form: one [`ShapeNode`] per shape with the transform and
//! material accumulated along its path from the root.
//!
//! # Transform operations
//!
//! - `translate x y z`
//! - `rotatex a`, `rotatey a`, `rotatez a` (radians)
//! - `scale k` (uniform)

use lux_math::{Mat4, Vec3};
use serde::Deserialize;
use thiserror::Error;

use crate::Shape;

/// Errors in the scene description that make it unusable for rendering.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Invalid transform operation: \"{0}\"")]
    InvalidTransform(String),

    #[error("Material \"{0}\" is defined more than once")]
    DuplicateMaterial(String),
}

/// Inner scene node; its transforms and material apply to every descendant.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct InnerNode {
    /// Transform operations, see the module docs for the syntax
    pub transforms: Vec<String>,

    /// Material applied to descendants unless a nearer node overrides it
    pub material: Option<String>,

    /// Child nodes, visited in order
    pub nodes: Vec<SceneNode>,
}

impl InnerNode {
    /// Create an empty inner node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transform operation.
    pub fn with_transform(mut self, op: impl Into<String>) -> Self {
        self.transforms.push(op.into());
        self
    }

    /// Set the material for this subtree.
    pub fn with_material(mut self, material: impl Into<String>) -> Self {
        self.material = Some(material.into());
        self
    }

    /// Add a child node.
    pub fn with_child(mut self, node: impl Into<SceneNode>) -> Self {
        self.nodes.push(node.into());
        self
    }
}

/// Leaf scene node owning shapes.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct LeafNode {
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

impl LeafNode {
    /// Create a leaf holding the given shapes.
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }
}

/// A child of an inner node.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SceneNode {
    Node(InnerNode),
    Leaf(LeafNode),
}

impl From<InnerNode> for SceneNode {
    fn from(node: InnerNode) -> Self {
        SceneNode::Node(node)
    }
}

impl From<LeafNode> for SceneNode {
    fn from(leaf: LeafNode) -> Self {
        SceneNode::Leaf(leaf)
    }
}

/// A shape together with the attributes accumulated from its ancestors.
#[derive(Clone, Debug)]
pub struct ShapeNode {
    /// The shape, still in its local coordinates
    pub shape: Shape,

    /// Composed transform from the shape's local space to world space
    pub transform: Mat4,

    /// Nearest ancestor material, if any
    pub material: Option<String>,
}

/// A rooted scene graph.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct SceneGraph {
    pub root: InnerNode,
}

impl SceneGraph {
    /// Create a scene graph from its root node.
    pub fn new(root: InnerNode) -> Self {
        Self { root }
    }

    /// Flatten the tree into one [`ShapeNode`] per shape, in depth-first order.
    pub fn flatten(&self) -> Result<Vec<ShapeNode>, SceneError> {
        traverse(&self.root, Mat4::IDENTITY, None)
    }

    /// Count shapes without composing any transforms.
    pub fn shape_count(&self) -> usize {
        fn count(node: &InnerNode) -> usize {
            node.nodes
                .iter()
                .map(|child| match child {
                    SceneNode::Node(inner) => count(inner),
                    SceneNode::Leaf(leaf) => leaf.shapes.len(),
                })
                .sum()
        }
        count(&self.root)
    }
}

/// Walk a subtree with the transform and material inherited from its parent.
fn traverse(node: &InnerNode, parent_transform: Mat4, parent_material: Option<&str>) -> Result<Vec<ShapeNode>, SceneError> {
    // A node's own operations act on its children before any ancestor's
    let transform = node
        .transforms
        .iter()
        .try_fold(parent_transform, |acc, op| Ok::<_, SceneError>(acc * parse_transform(op)?))?;

    let material = node.material.as_deref().or(parent_material);

    let mut shapes = Vec::new();
    for child in &node.nodes {
        match child {
            SceneNode::Leaf(leaf) => {
                shapes.extend(leaf.shapes.iter().map(|shape| ShapeNode {
                    shape: *shape,
                    transform,
                    material: material.map(str::to_owned),
                }));
            }
            SceneNode::Node(inner) => shapes.extend(traverse(inner, transform, material)?),
        }
    }

    Ok(shapes)
}

/// Parse a single transform operation into a matrix.
pub fn parse_transform(op: &str) -> Result<Mat4, SceneError> {
    let invalid = || SceneError::InvalidTransform(op.to_string());

    let tokens: Vec<&str> = op.split_whitespace().collect();
    let (name, args) = tokens.split_first().ok_or_else(invalid)?;

    let numbers = args
        .iter()
        .map(|token| token.parse::<f32>())
        .collect::<Result<Vec<f32>, _>>()
        .map_err(|_| invalid())?;

    match (name.to_lowercase().as_str(), numbers.as_slice()) {
        ("translate", &[x, y, z]) => Ok(Mat4::from_translation(Vec3::new(x, y, z))),
        ("rotatex", &[angle]) => Ok(Mat4::from_rotation_x(angle)),
        ("rotatey", &[angle]) => Ok(Mat4::from_rotation_y(angle)),
        ("rotatez", &[angle]) => Ok(Mat4::from_rotation_z(angle)),
        ("scale", &[k]) => Ok(Mat4::from_scale(Vec3::splat(k))),
        _ => Err(invalid()),
    }
}
