//! Shared scene plumbing.
//!
//! Responsibilities:
//! - write-version counters backing transform change detection
//! - the per-frame render-request queue handed to backends
//! - asset readiness bookkeeping shared by 2D and 3D scenes
//!
//! Dimension-specific types (transforms, nodes, schedulers) live in
//! [`scene2d`](crate::scene2d) and [`scene3d`](crate::scene3d).

mod assets;
mod queue;
mod version;

pub use assets::AssetTracker;
pub use queue::RenderQueue;
pub use version::Version;
