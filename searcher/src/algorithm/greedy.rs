//! Greedy best-first search

use std::collections::BinaryHeap;
use std::default::Default;

use super::cache::ExploredCache;
use super::{Candidate, Frontier, Ranked, SearchAlgorithm};
use crate::node::Solution;
use crate::strategy::Strategy;
use crate::traits::{Heuristic, Problem};

/// A priority queue which always searches the candidate
/// that looks closest to the goal.
#[derive(Debug)]
pub struct GreedyQueue {
    queue: BinaryHeap<Ranked>,
}

impl Default for GreedyQueue {
    fn default() -> Self {
        GreedyQueue {
            queue: BinaryHeap::new(),
        }
    }
}

impl Frontier for GreedyQueue {
    fn pop(&mut self) -> Option<Candidate> {
        self.queue.pop().map(|r| r.candidate)
    }

    fn push(&mut self, item: Candidate) {
        self.queue.push(Ranked::new(item.heuristic, item));
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

pub type GreedySearcher<'p, P> =
    SearchAlgorithm<'p, P, GreedyQueue, ExploredCache<<P as Problem>::State>>;

/// Build a greedy best-first searcher
pub fn build<P>(problem: &P) -> GreedySearcher<'_, P>
where
    P: Heuristic,
{
    SearchAlgorithm::new(problem, Strategy::GreedyBestFirst, |problem, state| {
        problem.heuristic(state)
    })
}

/// Perform a greedy best-first search.
///
/// Only the heuristic decides which candidate to expand next, so the
/// search often heads straight for the goal, but the path it finds
/// can be much longer than necessary.
pub fn greedy_best_first<P>(problem: &P) -> Option<Solution<P::Action, P::State>>
where
    P: Heuristic,
{
    build(problem).exhaust()
}
