//! Time subsystem.
//!
//! Frame timing utilities decoupled from any platform loop. Intended usage:
//! - one [`FrameClock`] per scene (or per render loop)
//! - call `tick()` once per frame to obtain a [`FrameTime`] snapshot

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
