//! Arbor engine crate.
//!
//! This crate owns the scene-graph core: per-frame hierarchical transform
//! propagation and the render-request stream consumed by GPU backends.
//! Device/queue management, swapchains, pipelines and asset loading live in
//! the backend layers, not here.

pub mod logging;
pub mod render;
pub mod scene;
pub mod scene2d;
pub mod scene3d;
pub mod time;
