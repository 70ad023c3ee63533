//! Provides the building blocks for search algorithms

use std::cmp::{Ord, Ordering, PartialOrd};
use std::convert::Infallible;
use std::default::Default;

use tracing::{debug, trace};

use self::cache::Cache;
use crate::errors::{Result, SearchError};
use crate::node::{NodeId, Solution, Tree};
use crate::strategy::Strategy;
use crate::traits::Problem;

pub mod astar;
pub mod basic;
pub mod cache;
pub mod greedy;

/// A node waiting in the frontier, along with the numbers
/// a frontier may want to rank it by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub node: NodeId,

    /// Accumulated path cost, g.
    pub cost: usize,

    /// Estimated remaining cost, h.
    pub heuristic: usize,

    /// Insertion order within one search.
    pub sequence: usize,
}

/// Trait used to implement the frontier of nodes
/// which should be checked for completion.
pub trait Frontier: Default {
    fn pop(&mut self) -> Option<Candidate>;

    fn push(&mut self, item: Candidate);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Wraps a candidate so that a max-heap pops the lowest priority first.
///
/// Equal priorities fall back to the lower path cost, then to
/// whichever was inserted first.
#[derive(Debug)]
pub(crate) struct Ranked {
    priority: usize,
    pub(crate) candidate: Candidate,
}

impl Ranked {
    pub(crate) fn new(priority: usize, candidate: Candidate) -> Self {
        Self {
            priority,
            candidate,
        }
    }

    fn key(&self) -> (usize, usize, usize) {
        (self.priority, self.candidate.cost, self.candidate.sequence)
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.key().eq(&other.key())
    }
}

impl Eq for Ranked {}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key()).reverse()
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug)]
struct StepLimit {
    current: usize,
    maximum: usize,
}

impl StepLimit {
    fn new(limit: usize) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

}

/// Decides how many nodes a search may expand before giving up.
trait Budget {
    type Error;

    /// Account for one more expanded node.
    fn spend(&mut self) -> std::result::Result<(), Self::Error>;
}

impl Budget for StepLimit {
    type Error = SearchError;

    fn spend(&mut self) -> Result<()> {
        self.current += 1;

        if self.current > self.maximum {
            Err(SearchError::StepLimitExhausted(self.maximum))
        } else {
            Ok(())
        }
    }
}

impl Budget for Option<StepLimit> {
    type Error = SearchError;

    fn spend(&mut self) -> Result<()> {
        match self {
            Some(limit) => limit.spend(),
            None => Ok(()),
        }
    }
}

/// A budget which never runs out.
#[derive(Debug)]
struct Unlimited;

impl Budget for Unlimited {
    type Error = Infallible;

    fn spend(&mut self) -> std::result::Result<(), Infallible> {
        Ok(())
    }
}

/// Tuning knobs shared by every search algorithm.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Give up with an error after expanding this many nodes.
    pub limit: Option<usize>,

    /// Log progress every this many nodes.
    pub verbose: Option<usize>,
}

impl SearchOptions {
    pub fn limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }
}

/// Signature for estimating the remaining cost from a state.
pub type Estimate<P> = fn(&P, &<P as Problem>::State) -> usize;

/// Implementation of search, using generic components.
///
/// Uses a generic frontier (F) and a generic cache (C) to provide
/// a single foundation for multiple search algorithms.
#[derive(Debug)]
pub struct SearchAlgorithm<'p, P, F, C>
where
    P: Problem,
    F: Frontier,
    C: Cache<P::State>,
{
    problem: &'p P,
    strategy: Strategy,
    estimate: Estimate<P>,
    cache: C,
    frontier: F,
    sequence: usize,
    options: SearchOptions,
}

impl<'p, P, F, C> SearchAlgorithm<'p, P, F, C>
where
    P: Problem,
    F: Frontier,
    C: Cache<P::State>,
{
    pub(crate) fn new(problem: &'p P, strategy: Strategy, estimate: Estimate<P>) -> Self {
        SearchAlgorithm {
            problem,
            strategy,
            estimate,
            cache: C::default(),
            frontier: F::default(),
            sequence: 0,
            options: SearchOptions::default(),
        }
    }

    /// Replace the options for this search algorithm.
    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    fn enqueue(&mut self, tree: &Tree<P::State, P::Action>, node: NodeId) {
        let entry = tree.get(node);
        let candidate = Candidate {
            node,
            cost: entry.cost(),
            heuristic: (self.estimate)(self.problem, entry.state()),
            sequence: self.sequence,
        };
        self.sequence += 1;
        self.frontier.push(candidate);
    }

    /// Run the search to completion.
    ///
    /// Returns `Ok(None)` when the frontier empties without reaching
    /// the goal, and an error only when the step limit runs out.
    pub fn run(self) -> Result<Option<Solution<P::Action, P::State>>> {
        let budget = self.options.limit.map(StepLimit::new);
        self.search(budget)
    }

    /// Run the search with no step limit.
    pub fn exhaust(self) -> Option<Solution<P::Action, P::State>> {
        match self.search(Unlimited) {
            Ok(solution) => solution,
            Err(never) => match never {},
        }
    }

    fn search<B>(
        mut self,
        mut budget: B,
    ) -> std::result::Result<Option<Solution<P::Action, P::State>>, B::Error>
    where
        B: Budget,
    {
        let (mut tree, root) = Tree::new(self.problem.start());
        let mut n = 0;

        self.cache.admit(tree.get(root).state(), 0);
        self.enqueue(&tree, root);

        while let Some(candidate) = self.frontier.pop() {
            let node = tree.get(candidate.node);
            if !self.cache.take(node.state(), node.cost()) {
                continue;
            }

            budget.spend()?;

            n += 1;
            if let Some(interval) = self.options.verbose.filter(|&i| i > 0) {
                if n % interval == 0 {
                    trace!(
                        strategy = %self.strategy,
                        frontier = self.frontier.len(),
                        explored = self.cache.len(),
                        nodes = tree.len(),
                        cost = node.cost(),
                        "progress"
                    );
                }
            }

            if self.problem.is_goal(node.state()) {
                let steps = tree.path(candidate.node);
                let solution = Solution::new(steps, node.cost(), self.cache.len());
                debug!(
                    strategy = %self.strategy,
                    steps = solution.len(),
                    cost = solution.cost(),
                    explored = solution.explored(),
                    frontier = self.frontier.len(),
                    "goal reached"
                );
                return Ok(Some(solution));
            }

            let state = node.state().clone();
            self.cache.close(&state);

            for (action, next) in self.problem.neighbors(&state) {
                let step = self.problem.step_cost(&state, &action, &next);
                if self.cache.admit(&next, candidate.cost.saturating_add(step)) {
                    let child = tree.child(candidate.node, action, next, step);
                    self.enqueue(&tree, child);
                }
            }
        }

        debug!(
            strategy = %self.strategy,
            explored = self.cache.len(),
            nodes = tree.len(),
            "frontier exhausted"
        );
        Ok(None)
    }
}
