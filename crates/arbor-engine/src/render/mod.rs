//! GPU-facing data layouts.
//!
//! Responsibilities:
//! - fix the byte-exact per-instance layouts backends upload from the
//!   frame's render requests
//!
//! The consuming shaders are external artifacts; a layout here must not
//! change without the matching shader-side declaration changing too.

mod instance;

pub use instance::{ModelInstance, SpriteInstance};
