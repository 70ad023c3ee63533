//! Generalized state-space search, especially useful for maze traversal.
//!
//! To use these search algorithms, implement at least the trait [Problem],
//! which describes an implicit graph by its start state, a goal test and
//! the neighbors of each state. Greedy best-first search and A* additionally
//! need a [Heuristic].
//!
//! Every strategy returns `None` when the goal can't be reached; that is
//! an expected outcome, not an error.

pub mod algorithm;
mod errors;
pub mod node;
mod strategy;
mod traits;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use node::{NodeId, Solution};
pub use strategy::{ParseStrategyError, Strategy};
pub use traits::Heuristic;
pub use traits::Problem;

pub use algorithm::astar;
pub use algorithm::astar::a_star;
pub use algorithm::basic::bfs;
pub use algorithm::basic::dfs;
pub use algorithm::greedy;
pub use algorithm::greedy::greedy_best_first;
pub use algorithm::SearchOptions;

#[cfg(test)]
pub(crate) mod fixtures;
