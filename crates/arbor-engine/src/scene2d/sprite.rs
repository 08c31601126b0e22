use std::hash::Hash;

use super::node::GameNode;
use super::state::{GameState, RenderRequest};
use super::transform::{GlobalTransform, Transform};

/// Drawable leaf: one textured quad instance per frame.
pub struct SpriteNode<A> {
    pub transform: Transform,
    global: GlobalTransform,
    asset_id: A,
}

impl<A> SpriteNode<A> {
    pub fn new(asset_id: A) -> Self {
        Self {
            transform: Transform::new(),
            global: GlobalTransform::new(),
            asset_id,
        }
    }

    pub fn asset_id(&self) -> &A {
        &self.asset_id
    }

    /// World-space placement as of this node's last update.
    pub fn global(&self) -> &GlobalTransform {
        &self.global
    }
}

impl<A: Copy + Eq + Hash> GameNode<A> for SpriteNode<A> {
    fn update(&mut self, state: &mut GameState<A>, parent: &GlobalTransform) {
        self.global.update(parent, &self.transform);
        state.push_request(RenderRequest {
            matrix: self.global.matrix(),
            alpha: self.global.alpha(),
            asset_id: self.asset_id,
        });
    }
}
