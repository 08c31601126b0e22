use super::state::GameState;
use super::transform::{GlobalTransform, Transform};

/// Per-frame update capability implemented by every 2D scene entity.
///
/// The scheduler invokes `update` exactly once per frame, top-down. An
/// implementation must:
/// 1. update its own [`GlobalTransform`] from `parent` and its local
///    [`Transform`],
/// 2. optionally push render requests into `state`,
/// 3. recurse into its children, passing its own freshly updated global as
///    their parent.
///
/// Children only ever receive the parent's global through this parameter;
/// that is what guarantees parent-before-child ordering and keeps a stale
/// mid-traversal value out of reach.
pub trait GameNode<A> {
    fn update(&mut self, state: &mut GameState<A>, parent: &GlobalTransform);
}

/// Pure container node: composes a transform into the hierarchy without
/// drawing anything.
///
/// Children are owned exclusively and updated in declaration order, which
/// fixes the render-request order for the whole subtree.
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
