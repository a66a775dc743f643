//! Scene-graph access.
//!
//! The host owns the actual scene graph and renderer. This module models the
//! slice of it the effect touches: resolving nodes by name once at startup,
//! and writing their bindable properties every tick.
//!
//! Nodes hand out shared handles with interior mutability. The evaluation
//! model is single-threaded and host-driven, so plain [`Cell`]s are enough.

use std::{cell::Cell, fmt, rc::Rc};

use nalgebra::{Point2, Vector2};
use thiserror::Error;

/// Errors produced by scene lookups.
#[derive(Debug, Error)]
pub enum SceneError {
    /// No node with the requested name exists in the scene.
    #[error("no scene node named `{0}`")]
    NotFound(String),
}

/// Shared handle to a scene node.
pub type NodeHandle = Rc<Node>;

/// The root of the scene graph, as far as this effect is concerned: a flat
/// collection of nodes addressable by name.
pub struct SceneRoot {
    nodes: Vec<NodeHandle>,
}

impl SceneRoot {
    /// Creates a scene containing one node per name.
    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            nodes: names
                .into_iter()
                .map(|name| Rc::new(Node::new(name.into())))
                .collect(),
        }
    }

    /// Resolves the first node with the given name.
    ///
    /// Resolution is asynchronous on the host side; callers block on it once
    /// during startup, before any binding is installed.
    pub async fn find_first(&self, name: &str) -> Result<NodeHandle, SceneError> {
        self.nodes
            .iter()
            .find(|node| node.name == name)
            .cloned()
            .ok_or_else(|| SceneError::NotFound(name.to_string()))
    }
}

/// A scene node with bindable transform, size, and visibility properties.
///
/// Scale defaults to 1, everything else to 0, visibility to shown.
pub struct Node {
    name: String,
    position: Cell<Point2<f32>>,
    size: Cell<Vector2<f32>>,
    scale: Cell<Vector2<f32>>,
    rotation_y: Cell<f32>,
    rotation_z: Cell<f32>,
    hidden: Cell<bool>,
}

impl Node {
    fn new(name: String) -> Self {
        Self {
            name,
            position: Cell::new(Point2::new(0.0, 0.0)),
            size: Cell::new(Vector2::new(0.0, 0.0)),
            scale: Cell::new(Vector2::new(1.0, 1.0)),
            rotation_y: Cell::new(0.0),
            rotation_z: Cell::new(0.0),
            hidden: Cell::new(false),
        }
    }

    /// Returns the node's scene name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_position(&self, x: f32, y: f32) {
        self.position.set(Point2::new(x, y));
    }

    #[inline]
    pub fn position(&self) -> Point2<f32> {
        self.position.get()
    }

    pub fn set_size(&self, width: f32, height: f32) {
        self.size.set(Vector2::new(width, height));
    }

    #[inline]
    pub fn size(&self) -> Vector2<f32> {
        self.size.get()
    }

    pub fn set_scale(&self, x: f32, y: f32) {
        self.scale.set(Vector2::new(x, y));
    }

    #[inline]
    pub fn scale(&self) -> Vector2<f32> {
        self.scale.get()
    }

    pub fn set_rotation_y(&self, radians: f32) {
        self.rotation_y.set(radians);
    }

    #[inline]
    pub fn rotation_y(&self) -> f32 {
        self.rotation_y.get()
    }

    pub fn set_rotation_z(&self, radians: f32) {
        self.rotation_z.set(radians);
    }

    #[inline]
    pub fn rotation_z(&self) -> f32 {
        self.rotation_z.get()
    }

    pub fn set_hidden(&self, hidden: bool) {
        self.hidden.set(hidden);
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.hidden.get()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node `{}` @ ({},{})/{}x{}",
            self.name,
            self.position().x,
            self.position().y,
            self.size().x,
            self.size().y
        )
    }
}
