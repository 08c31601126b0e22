//! 3D scene graph.
//!
//! Mirrors [`scene2d`](crate::scene2d) with `Vec3`/`Quat`/`Mat4` in place of
//! the 2D types; see that module for the full contract discussion. Drawable
//! leaves are [`ModelNode`]s referencing mesh assets.

mod model;
mod node;
mod scene;
mod state;
mod transform;

pub use model::ModelNode;
pub use node::{GameNode, GroupNode};
pub use scene::Scene;
pub use state::{GameState, RenderRequest};
pub use transform::{GlobalTransform, Transform};
