use bytemuck::{Pod, Zeroable};
use glam::{Mat3, Mat4};

use crate::{scene2d, scene3d};

/// Per-instance vertex data for one sprite.
///
/// Binding order (per-instance attributes): col0, col1, col2, alpha — the
/// three columns of the affine `Mat3` followed by accumulated opacity.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct SpriteInstance {
    pub col0: [f32; 3],
    pub col1: [f32; 3],
    pub col2: [f32; 3],
    pub alpha: f32,
}

impl SpriteInstance {
    pub fn new(matrix: Mat3, alpha: f32) -> Self {
        let cols = matrix.to_cols_array_2d();
        Self {
            col0: cols[0],
            col1: cols[1],
            col2: cols[2],
            alpha,
        }
    }

    pub fn from_request<A>(request: &scene2d::RenderRequest<A>) -> Self {
        Self::new(request.matrix, request.alpha)
    }
}

/// Per-instance vertex data for one model.
///
/// Binding order: col0..col3 of the column-major `Mat4`, then alpha.
/// Padded to a 16-byte multiple.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct ModelInstance {
    pub matrix: [[f32; 4]; 4],
    pub alpha: f32,
    pub _pad: [f32; 3],
}

impl ModelInstance {
    pub fn new(matrix: Mat4, alpha: f32) -> Self {
        Self {
            matrix: matrix.to_cols_array_2d(),
            alpha,
            _pad: [0.0; 3],
        }
    }

    pub fn from_request<A>(request: &scene3d::RenderRequest<A>) -> Self {
        Self::new(request.matrix, request.alpha)
    }
}
