//! A* search

use std::collections::BinaryHeap;
use std::default::Default;

use super::cache::BestCostCache;
use super::{Candidate, Frontier, Ranked, SearchAlgorithm};
use crate::node::Solution;
use crate::strategy::Strategy;
use crate::traits::{Heuristic, Problem};

/// A priority queue ordered by path cost plus heuristic.
#[derive(Debug)]
pub struct AStarQueue {
    queue: BinaryHeap<Ranked>,
}

impl Default for AStarQueue {
    fn default() -> Self {
        AStarQueue {
            queue: BinaryHeap::new(),
        }
    }
}

impl Frontier for AStarQueue {
    fn pop(&mut self) -> Option<Candidate> {
        self.queue.pop().map(|r| r.candidate)
    }

    fn push(&mut self, item: Candidate) {
        self.queue.push(Ranked::new(item.cost.saturating_add(item.heuristic), item));
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

pub type AStarSearcher<'p, P> =
    SearchAlgorithm<'p, P, AStarQueue, BestCostCache<<P as Problem>::State>>;

/// Build an A* searcher
pub fn build<P>(problem: &P) -> AStarSearcher<'_, P>
where
    P: Heuristic,
{
    SearchAlgorithm::new(problem, Strategy::AStar, |problem, state| {
        problem.heuristic(state)
    })
}

/// Perform an A* search.
///
/// The path returned is optimal as long as the heuristic never
/// overestimates the remaining cost. States are re-opened whenever
/// a strictly cheaper way to reach them turns up, so the heuristic
/// need not be consistent.
pub fn a_star<P>(problem: &P) -> Option<Solution<P::Action, P::State>>
where
    P: Heuristic,
{
    build(problem).exhaust()
}
