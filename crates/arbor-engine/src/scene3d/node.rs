use super::state::GameState;
use super::transform::{GlobalTransform, Transform};

/// Per-frame update capability implemented by every 3D scene entity.
///
/// Same contract as [`scene2d::GameNode`](crate::scene2d::GameNode): update
/// own global from `parent`, optionally emit requests, then recurse so
/// children observe the freshly updated value.
pub trait GameNode<A> {
    fn update(&mut self, state: &mut GameState<A>, parent: &GlobalTransform);
}

/// Pure container node: composes a transform without drawing anything.
pub struct GroupNode<A> {
    pub transform: Transform,
    global: GlobalTransform,
    children: Vec<Box<dyn GameNode<A>>>,
}

impl<A> GroupNode<A> {
    pub fn new() -> Self {
        Self {
            transform: Transform::new(),
            global: GlobalTransform::new(),
            children: Vec::new(),
        }
    }

    /// Appends a child; it updates after all previously added children.
    pub fn add_child(&mut self, child: impl GameNode<A> + 'static) {
        self.children.push(Box::new(child));
    }

    pub fn children_mut(&mut self) -> &mut [Box<dyn GameNode<A>>] {
        &mut self.children
    }

    /// World-space placement as of this node's last update.
    pub fn global(&self) -> &GlobalTransform {
        &self.global
    }
}

impl<A> Default for GroupNode<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> GameNode<A> for GroupNode<A> {
    fn update(&mut self, state: &mut GameState<A>, parent: &GlobalTransform) {
        self.global.update(parent, &self.transform);
        for child in &mut self.children {
            child.update(state, &self.global);
        }
    }
}
