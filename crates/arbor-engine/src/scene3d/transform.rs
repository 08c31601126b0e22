use glam::{Mat4, Quat, Vec3};

use crate::scene::Version;

/// Local (parent-relative) spatial state of a 3D node.
///
/// Setters bump the write version unconditionally; see
/// [`scene2d::Transform`](crate::scene2d::Transform) for the rationale.
#[derive(Debug, Clone)]
pub struct Transform {
    position: Vec3,
    pivot: Vec3,
    scale: Vec3,
    rotation: Quat,
    alpha: f32,
    version: Version,
}

impl Transform {
    /// Identity transform: position 0, pivot 0, scale 1, rotation identity,
    /// alpha 1.
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            pivot: Vec3::ZERO,
            scale: Vec3::ONE,
            rotation: Quat::IDENTITY,
            alpha: 1.0,
            version: Version::ZERO,
        }
    }

    /// Identity transform placed at `position`.
    pub fn from_position(position: Vec3) -> Self {
        let mut t = Self::new();
        t.position = position;
        t
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.version.bump();
    }

    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    pub fn set_pivot(&mut self, pivot: Vec3) {
        self.pivot = pivot;
        self.version.bump();
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.version.bump();
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Quat) {
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

    pub fn version(&self) -> Version {
        self.version
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

/// World-space placement of a 3D node.
///
/// Cached on the `(parent.version, local.version)` pair exactly like the 2D
/// variant; recomputes bump this global's own version, which children key
/// on in turn.
#[derive(Debug, Clone)]
pub struct GlobalTransform {
    matrix: Mat4,
    alpha: f32,
    version: Version,
    seen_parent: Option<Version>,
    seen_local: Option<Version>,
}

impl GlobalTransform {
    /// Identity placement, the implicit parent of traversal roots.
    pub const IDENTITY: GlobalTransform = GlobalTransform {
        matrix: Mat4::IDENTITY,
        alpha: 1.0,
        version: Version::ZERO,
        seen_parent: None,
        seen_local: None,
    };

    pub fn new() -> Self {
        Self::IDENTITY
    }

    /// Accumulated world-space matrix (column-vector convention).
    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Recomputes matrix and alpha from `parent` and `local`; no-op when
    /// neither input changed since the last call on this value.
    ///
    /// Composition order matches the 2D case with `Quat` rotation:
    /// `parent · T(position−pivot) · T(pivot) · R · S · T(−pivot)`.
    pub fn update(&mut self, parent: &GlobalTransform, local: &Transform) {
        if self.seen_parent == Some(parent.version) && self.seen_local == Some(local.version()) {
            return;
        }

        let pivot = local.pivot();
        let pivot_transform = Mat4::from_translation(pivot)
            * Mat4::from_quat(local.rotation())
            * Mat4::from_scale(local.scale())
            * Mat4::from_translation(-pivot);

        let local_matrix = Mat4::from_translation(local.position() - pivot) * pivot_transform;

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
