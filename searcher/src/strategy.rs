use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::algorithm::{astar, basic, greedy, SearchOptions};
use crate::errors::Result;
use crate::node::Solution;
use crate::traits::Heuristic;

/// The traversal strategies this crate provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    GreedyBestFirst,
    AStar,
}

const STRATEGIES: [Strategy; 4] = [
    Strategy::DepthFirst,
    Strategy::BreadthFirst,
    Strategy::GreedyBestFirst,
    Strategy::AStar,
];

impl Strategy {
    pub fn all() -> impl Iterator<Item = Self> {
        STRATEGIES.iter().cloned()
    }

    /// Short name, as accepted by [Strategy::from_str].
    pub fn name(self) -> &'static str {
        match self {
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
            Strategy::GreedyBestFirst => "greedy",
            Strategy::AStar => "astar",
        }
    }

    /// Search with this strategy, without any step limit.
    pub fn solve<P>(self, problem: &P) -> Option<Solution<P::Action, P::State>>
    where
        P: Heuristic,
    {
        match self {
            Strategy::DepthFirst => basic::dfs(problem),
            Strategy::BreadthFirst => basic::bfs(problem),
            Strategy::GreedyBestFirst => greedy::greedy_best_first(problem),
            Strategy::AStar => astar::a_star(problem),
        }
    }

    /// Search with this strategy under the given options.
    pub fn run<P>(
        self,
        problem: &P,
        options: SearchOptions,
    ) -> Result<Option<Solution<P::Action, P::State>>>
    where
        P: Heuristic,
    {
        match self {
            Strategy::DepthFirst => basic::dfs::build(problem).with_options(options).run(),
            Strategy::BreadthFirst => basic::bfs::build(problem).with_options(options).run(),
            Strategy::GreedyBestFirst => greedy::build(problem).with_options(options).run(),
            Strategy::AStar => astar::build(problem).with_options(options).run(),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Strategy::DepthFirst => write!(f, "Depth-First Search"),
            Strategy::BreadthFirst => write!(f, "Breadth-First Search"),
            Strategy::GreedyBestFirst => write!(f, "Greedy Best-First Search"),
            Strategy::AStar => write!(f, "A* Search"),
        }
    }
}

/// Error when parsing a strategy name.
#[derive(Debug, Error)]
#[error("Unknown search strategy: {0}")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" => Ok(Strategy::DepthFirst),
            "bfs" | "breadth-first" => Ok(Strategy::BreadthFirst),
            "greedy" | "greedy-best-first" => Ok(Strategy::GreedyBestFirst),
            "astar" | "a*" | "a-star" => Ok(Strategy::AStar),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}
