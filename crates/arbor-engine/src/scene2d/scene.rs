use std::hash::Hash;

use crate::time::{FrameClock, FrameTime};

use super::node::GameNode;
use super::state::{GameState, RenderRequest};
use super::transform::GlobalTransform;

/// Owns the node tree and drives the once-per-frame update traversal.
///
/// One `update` call = one frame: the queue from the previous frame is
/// cleared, the tree is walked top-down to completion, and the resulting
/// requests stay readable until the next `update`. The traversal root is
/// the constant identity global transform, so root nodes compose against
/// the world origin.
pub struct Scene<A, N> {
    root: N,
    state: GameState<A>,
    clock: FrameClock,
}

impl<A: Copy + Eq + Hash, N: GameNode<A>> Scene<A, N> {
    pub fn new(root: N) -> Self {
        Self {
            root,
            state: GameState::new(),
            clock: FrameClock::new(),
        }
    }

    pub fn root(&self) -> &N {
        &self.root
    }

    /// Typed access to the root, for gameplay mutation between frames.
    pub fn root_mut(&mut self) -> &mut N {
        &mut self.root
    }

    pub fn state(&self) -> &GameState<A> {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState<A> {
        &mut self.state
    }

    /// Runs one frame: clears the queue, walks the tree depth-first, ticks
    /// the clock.
    pub fn update(&mut self) -> FrameTime {
        self.state.begin_frame();
        self.root.update(&mut self.state, &GlobalTransform::IDENTITY);

        let ft = self.clock.tick();
        log::trace!(
            "frame {}: dt {:.4}s, {} render requests",
            ft.frame_index,
            ft.dt,
            self.state.render_requests().len()
        );
        ft
    }

    /// This frame's requests, in traversal order.
    pub fn render_requests(&self) -> &[RenderRequest<A>] {
        self.state.render_requests()
    }

    /// Hands this frame's requests to the backend, emptying the queue.
    pub fn drain_requests(&mut self) -> std::vec::Drain<'_, RenderRequest<A>> {
        self.state.drain_requests()
    }
}

#[cfg(test)]
mod tests {
    use glam::{Mat3, Vec2};

    use super::super::node::GroupNode;
    use super::super::sprite::SpriteNode;
    use super::*;

    const EPS: f32 = 1e-5;

    fn sprite_at(asset_id: u32, position: Vec2) -> SpriteNode<u32> {
        let mut sprite = SpriteNode::new(asset_id);
        sprite.transform.set_position(position);
        sprite
    }

    fn three_level_scene() -> Scene<u32, GroupNode<u32>> {
        // root group ─ sprite 1
        //            ─ inner group ─ sprite 2
        //                          ─ sprite 3
        //            ─ sprite 4
        let mut inner = GroupNode::new();
        inner.add_child(sprite_at(2, Vec2::new(1.0, 0.0)));
        inner.add_child(sprite_at(3, Vec2::new(2.0, 0.0)));

        let mut root = GroupNode::new();
        root.add_child(sprite_at(1, Vec2::ZERO));
        root.add_child(inner);
        root.add_child(sprite_at(4, Vec2::ZERO));

        Scene::new(root)
    }

    // ── traversal order ───────────────────────────────────────────────────

    #[test]
    fn requests_appear_in_depth_first_declaration_order() {
        let mut scene = three_level_scene();
        scene.update();
        let ids: Vec<u32> = scene.render_requests().iter().map(|r| r.asset_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    // ── queue lifecycle ───────────────────────────────────────────────────

    #[test]
    fn queue_is_cleared_at_frame_start() {
        let mut scene = three_level_scene();
        scene.update();
        assert_eq!(scene.render_requests().len(), 4);
        scene.update();
        // Same four requests, not eight.
        assert_eq!(scene.render_requests().len(), 4);
    }

    #[test]
    fn drain_hands_off_and_empties() {
        let mut scene = three_level_scene();
        scene.update();
        let drained: Vec<_> = scene.drain_requests().collect();
        assert_eq!(drained.len(), 4);
        assert!(scene.render_requests().is_empty());
    }

    // ── parent-before-child ordering ──────────────────────────────────────

    #[test]
    fn child_sees_parent_placement_in_the_same_frame() {
        let mut root = GroupNode::new();
        root.transform.set_position(Vec2::new(10.0, 0.0));
        root.add_child(sprite_at(1, Vec2::new(0.0, 5.0)));
        let mut scene = Scene::new(root);

        // No one-frame lag: the very first update composes root and child.
        scene.update();
        let request = scene.render_requests()[0];
        let expected = Mat3::from_translation(Vec2::new(10.0, 5.0));
        let (a, e) = (request.matrix.to_cols_array(), expected.to_cols_array());
        for i in 0..9 {
            assert!((a[i] - e[i]).abs() < EPS);
        }
    }

    #[test]
    fn root_change_reaches_grandchildren_next_frame() {
        let mut inner = GroupNode::new();
        inner.add_child(sprite_at(1, Vec2::ZERO));
        let mut root = GroupNode::new();
        root.add_child(inner);
        let mut scene = Scene::new(root);

        scene.update();
        let before = scene.render_requests()[0].matrix;

        // Only the root moves; the intermediate group and the sprite keep
        // their locals untouched.
        scene
            .root_mut()
            .transform
            .set_position(Vec2::new(0.0, 3.0));
        scene.update();
        let after = scene.render_requests()[0].matrix;

        let moved = after.transform_point2(Vec2::ZERO) - before.transform_point2(Vec2::ZERO);
        assert!((moved - Vec2::new(0.0, 3.0)).length() < EPS);
    }

    #[test]
    fn unchanged_scene_repeats_identical_requests() {
        let mut scene = three_level_scene();
        scene.update();
        let first: Vec<[f32; 9]> = scene
            .render_requests()
            .iter()
            .map(|r| r.matrix.to_cols_array())
            .collect();

        scene.update();
        let second: Vec<[f32; 9]> = scene
            .render_requests()
            .iter()
            .map(|r| r.matrix.to_cols_array())
            .collect();

        // Bit-for-bit: nothing changed, so nothing recomputed.
        assert_eq!(first, second);
    }

    // ── alpha through containers ──────────────────────────────────────────

    #[test]
    fn group_alpha_fades_the_whole_subtree() {
        let mut inner = GroupNode::new();
        inner.transform.set_alpha(0.5);
        let mut sprite = SpriteNode::new(1u32);
        sprite.transform.set_alpha(0.8);
        inner.add_child(sprite);

        let mut root = GroupNode::new();
        root.transform.set_alpha(0.5);
        root.add_child(inner);

        let mut scene = Scene::new(root);
        scene.update();
        let request = scene.render_requests()[0];
        assert!((request.alpha - 0.2).abs() < EPS);
    }
}
