use glam::{Mat3, Vec2};

use crate::scene::Version;

/// Local (parent-relative) spatial state of a 2D node.
///
/// Every setter bumps the write version unconditionally, even when the new
/// value equals the old one: change detection costs one version compare per
/// frame either way, while value-equality checks would cost a compare per
/// field per write for the rare redundant store they avoid.
///
/// No field is range-validated here: rotation accepts any real angle,
/// scale and alpha are unclamped.
#[derive(Debug, Clone)]
pub struct Transform {
    position: Vec2,
    pivot: Vec2,
    scale: Vec2,
    rotation: f32,
    alpha: f32,
    version: Version,
}

impl Transform {
    /// Identity transform: position 0, pivot 0, scale 1, rotation 0, alpha 1.
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            pivot: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation: 0.0,
            alpha: 1.0,
            version: Version::ZERO,
        }
    }

    /// Identity transform placed at `position`.
    pub fn from_position(position: Vec2) -> Self {
        let mut t = Self::new();
        t.position = position;
        t
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
        self.version.bump();
    }

    pub fn pivot(&self) -> Vec2 {
        self.pivot
    }

    pub fn set_pivot(&mut self, pivot: Vec2) {
        self.pivot = pivot;
        self.version.bump();
    }

    pub fn scale(&self) -> Vec2 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec2) {
        self.scale = scale;
        self.version.bump();
    }

    /// Rotation about the pivot, in radians.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: f32) {
        self.rotation = rotation;
        self.version.bump();
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
        self.version.bump();
    }

    /// Current write version. Bumped by every setter.
    pub fn version(&self) -> Version {
        self.version
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

/// World-space placement of a 2D node, derived from its parent chain.
///
/// The matrix and alpha are a cached value keyed on the pair
/// `(parent.version, local.version)`: [`update`](Self::update) recomputes
/// only when the key changed since the last call, and every recompute bumps
/// this global's own version, which its children key on in turn. A change
/// anywhere up the ancestor chain therefore reaches every descendant on the
/// next traversal, with no flags to clear between frames.
///
/// `matrix` and `alpha` are written only by `update`; all other access is
/// read-only. Their values are frame-coherent: valid from this node's
/// update until the next frame's.
#[derive(Debug, Clone)]
pub struct GlobalTransform {
    matrix: Mat3,
    alpha: f32,
    version: Version,
    seen_parent: Option<Version>,
    seen_local: Option<Version>,
}

impl GlobalTransform {
    /// Identity placement, used as the implicit parent of traversal roots.
    ///
    /// Never mutated by the walk, so its version is stable and root nodes
    /// skip recomputation whenever their own local transform is unchanged.
    pub const IDENTITY: GlobalTransform = GlobalTransform {
        matrix: Mat3::IDENTITY,
        alpha: 1.0,
        version: Version::ZERO,
        seen_parent: None,
        seen_local: None,
    };

    pub fn new() -> Self {
        Self::IDENTITY
    }

    /// Accumulated world-space matrix (column-vector convention: transforms
    /// apply right-to-left, matching shader-side `mat * vec`).
    pub fn matrix(&self) -> Mat3 {
        self.matrix
    }

    /// Accumulated opacity: the product of every alpha up the chain.
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Current recompute version. Bumped each time `update` recomputes.
    pub fn version(&self) -> Version {
        self.version
    }

    /// Recomputes matrix and alpha from the parent's values and the local
    /// transform.
    ///
    /// No-op when neither input changed since the last call on this value:
    /// the remembered `(parent, local)` version pair still matches. The
    /// composition rotates and scales about the pivot without displacing
    /// the pivot point itself:
    ///
    /// ```text
    /// pivot_transform = T(pivot) · R(rotation) · S(scale) · T(-pivot)
    /// matrix = parent.matrix · T(position - pivot) · pivot_transform
    /// alpha  = parent.alpha · local.alpha
    /// ```
    pub fn update(&mut self, parent: &GlobalTransform, local: &Transform) {
        if self.seen_parent == Some(parent.version) && self.seen_local == Some(local.version()) {
            return;
        }

        let pivot = local.pivot();
        let pivot_transform = Mat3::from_translation(pivot)
            * Mat3::from_angle(local.rotation())
            * Mat3::from_scale(local.scale())
            * Mat3::from_translation(-pivot);

        let local_matrix = Mat3::from_translation(local.position() - pivot) * pivot_transform;

        self.matrix = parent.matrix * local_matrix;
        self.alpha = parent.alpha * local.alpha();
        self.version.bump();
        self.seen_parent = Some(parent.version);
        self.seen_local = Some(local.version());
    }
}

impl Default for GlobalTransform {
    fn default() -> Self {
        Self::new()
    }
}
