//! The search tree built while a search runs.
//!
//! Nodes live in an arena owned by a single search invocation and refer
//! to their parents by handle, so the whole tree is dropped in one go
//! when the search returns.

use std::ops::Deref;

/// Handle to a node within a [Tree].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// A state reached during search, along with how we got there.
#[derive(Debug, Clone)]
pub struct Node<S, A> {
    state: S,
    parent: Option<NodeId>,
    action: Option<A>,
    cost: usize,
}

impl<S, A> Node<S, A> {
    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn action(&self) -> Option<&A> {
        self.action.as_ref()
    }

    /// Accumulated path cost from the root to this node.
    pub fn cost(&self) -> usize {
        self.cost
    }
}

/// Arena holding every node created by one search.
///
/// Nodes are only ever appended, never changed, so a handle stays
/// valid for as long as the tree does.
#[derive(Debug)]
pub struct Tree<S, A> {
    nodes: Vec<Node<S, A>>,
}

impl<S, A> Tree<S, A>
where
    S: Clone,
    A: Clone,
{
    /// Start a new tree from the origin state.
    pub fn new(origin: S) -> (Self, NodeId) {
        let root = Node {
            state: origin,
            parent: None,
            action: None,
            cost: 0,
        };
        (Self { nodes: vec![root] }, NodeId(0))
    }

    /// Add a child which took `action` from `parent` to reach `state`.
    pub fn child(&mut self, parent: NodeId, action: A, state: S, step_cost: usize) -> NodeId {
        let cost = self.get(parent).cost.saturating_add(step_cost);
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            state,
            parent: Some(parent),
            action: Some(action),
            cost,
        });
        id
    }

    pub fn get(&self, id: NodeId) -> &Node<S, A> {
        &self.nodes[id.0]
    }

    /// Number of nodes created so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Walk parent links back to the root, collecting each step.
    ///
    /// The root itself is not part of the result.
    pub fn path(&self, id: NodeId) -> Vec<(A, S)> {
        let mut steps = Vec::new();
        let mut node = self.get(id);
        while let (Some(parent), Some(action)) = (node.parent, node.action.as_ref()) {
            steps.push((action.clone(), node.state.clone()));
            node = self.get(parent);
        }
        steps.reverse();
        steps
    }
}

/// A path from the start of a search to the goal.
///
/// Holds the (action, state) pairs taken after leaving the start,
/// ending with the goal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<A, S> {
    steps: Vec<(A, S)>,
    cost: usize,
    explored: usize,
}

impl<A, S> Solution<A, S> {
    pub(crate) fn new(steps: Vec<(A, S)>, cost: usize, explored: usize) -> Self {
        Self {
            steps,
            cost,
            explored,
        }
    }

    /// Total path cost. Equal to the number of steps when every
    /// step costs one.
    pub fn cost(&self) -> usize {
        self.cost
    }

    /// How many states the search expanded before finding this path.
    pub fn explored(&self) -> usize {
        self.explored
    }

    pub fn actions(&self) -> impl Iterator<Item = &A> {
        self.steps.iter().map(|(a, _)| a)
    }

    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.steps.iter().map(|(_, s)| s)
    }

    /// Where this path ends, `None` when the start was already the goal.
    pub fn destination(&self) -> Option<&S> {
        self.steps.last().map(|(_, s)| s)
    }
}

impl<A, S> Deref for Solution<A, S> {
    type Target = [(A, S)];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruct() {
        let (mut tree, root) = Tree::new("a");
        let b = tree.child(root, 'r', "b", 1);
        let c = tree.child(b, 'd', "c", 1);
        let _sibling = tree.child(b, 'l', "x", 1);
        let e = tree.child(c, 'r', "e", 3);

        assert_eq!(tree.len(), 5);
        assert_eq!(tree.get(e).cost(), 5);
        assert_eq!(tree.get(e).parent(), Some(c));
        assert_eq!(tree.path(e), vec![('r', "b"), ('d', "c"), ('r', "e")]);
    }

    #[test]
    fn root_path_is_empty() {
        let (tree, root) = Tree::<_, char>::new((0, 0));
        assert!(tree.path(root).is_empty());
        assert_eq!(tree.get(root).action(), None);
        assert_eq!(tree.get(root).cost(), 0);
    }
}
