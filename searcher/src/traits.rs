use std::fmt::Debug;
use std::hash::Hash;

/// Describes an implicit graph to search.
///
/// The search algorithms never look inside a state. All of the
/// problem specific meaning lives in the implementation of this
/// trait, which the search borrows but never mutates.
pub trait Problem {
    /// A position in the problem's space.
    type State: Debug + Clone + Eq + Hash;

    /// The move which takes one state to the next.
    type Action: Debug + Clone;

    /// Where the search begins.
    fn start(&self) -> Self::State;

    /// Has the search arrived?
    fn is_goal(&self, state: &Self::State) -> bool;

    /// Produces the moves available from this state.
    ///
    /// The order must be fixed: it decides which path depth-first
    /// and breadth-first search return when several would do.
    fn neighbors(&self, state: &Self::State) -> Vec<(Self::Action, Self::State)>;

    /// Cost of taking a single step. Must not be negative, which
    /// the unsigned return type takes care of.
    #[allow(unused_variables)]
    fn step_cost(&self, from: &Self::State, action: &Self::Action, to: &Self::State) -> usize {
        1
    }
}

/// An interface for searching when a heuristic can be provided.
///
/// The heuristic should be the best guess at the remaining cost from
/// a state to the goal. A* only returns optimal paths when that guess
/// never overestimates.
pub trait Heuristic: Problem {
    /// Best guess of the remaining cost from this state.
    fn heuristic(&self, state: &Self::State) -> usize;
}
