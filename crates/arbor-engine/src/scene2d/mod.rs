//! 2D scene graph.
//!
//! Responsibilities:
//! - local/world transform pair with version-keyed recompute caching
//! - the polymorphic node capability ([`GameNode`]) and stock variants
//! - the per-frame [`GameState`] (render queue + asset tracker)
//! - the [`Scene`] scheduler driving the top-down traversal
//!
//! The 3D counterparts under [`scene3d`](crate::scene3d) follow the same
//! structure with `Mat4`/`Quat` in place of `Mat3` and an angle.

mod node;
mod scene;
mod sprite;
mod state;
mod transform;

pub use node::{GameNode, GroupNode};
pub use scene::Scene;
pub use sprite::SpriteNode;
pub use state::{GameState, RenderRequest};
pub use transform::{GlobalTransform, Transform};
