use std::hash::Hash;

use crate::time::{FrameClock, FrameTime};

use super::node::GameNode;
use super::state::{GameState, RenderRequest};
use super::transform::GlobalTransform;

/// Owns a 3D node tree and drives the once-per-frame update traversal.
///
/// Same frame contract as [`scene2d::Scene`](crate::scene2d::Scene).
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

    pub fn drain_requests(&mut self) -> std::vec::Drain<'_, RenderRequest<A>> {
        self.state.drain_requests()
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::super::model::ModelNode;
    use super::super::node::GroupNode;
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn models_emit_in_declaration_order_with_composed_placement() {
        let mut rig = GroupNode::new();
        rig.transform.set_position(Vec3::new(0.0, 1.0, 0.0));
        rig.transform.set_rotation(Quat::from_rotation_y(std::f32::consts::PI));
        rig.transform.set_alpha(0.5);

        let mut body = ModelNode::new(10u32);
        body.transform.set_position(Vec3::new(0.0, 0.0, 2.0));
        rig.add_child(body);
        rig.add_child(ModelNode::new(11u32));

        let mut scene = Scene::new(rig);
        scene.update();

        let requests = scene.render_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].asset_id, 10);
        assert_eq!(requests[1].asset_id, 11);

        // Half turn about +y sends local (0,0,2) to world (0,1,-2).
        let placed = requests[0].matrix.transform_point3(Vec3::ZERO);
        assert!((placed - Vec3::new(0.0, 1.0, -2.0)).length() < EPS);
        assert!((requests[0].alpha - 0.5).abs() < EPS);
    }

    #[test]
    fn root_motion_reaches_grandchildren() {
        let mut arm = GroupNode::new();
        arm.add_child(ModelNode::new(1u32));
        let mut root = GroupNode::new();
        root.add_child(arm);

        let mut scene = Scene::new(root);
        scene.update();
        let before = scene.render_requests()[0].matrix.transform_point3(Vec3::ZERO);

        scene.root_mut().transform.set_position(Vec3::new(7.0, 0.0, 0.0));
        scene.update();
        let after = scene.render_requests()[0].matrix.transform_point3(Vec3::ZERO);

        assert!((after - before - Vec3::new(7.0, 0.0, 0.0)).length() < EPS);
    }
}
