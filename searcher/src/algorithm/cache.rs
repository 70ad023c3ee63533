//! Duplicate suppression, which keeps a search from revisiting states.
//!
//! Every search records the states it has expanded. The policies differ in
//! what else they remember, and so in which children they let through.

use std::collections::{HashMap, HashSet};
use std::default::Default;
use std::hash::Hash;

/// Defines the behavior required of a search cache.
pub trait Cache<S>: Default {
    /// Should a child at this state and cost join the frontier?
    fn admit(&mut self, state: &S, cost: usize) -> bool;

    /// A node was popped from the frontier. Returns false
    /// when the node is out of date and should be skipped.
    fn take(&mut self, state: &S, cost: usize) -> bool;

    /// Mark a state as expanded.
    fn close(&mut self, state: &S);

    /// Number of states expanded so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Rejects any state which has been expanded or is
/// still waiting in the frontier.
///
/// Frontier membership is tracked in a companion set, so checks
/// don't scan the frontier. The frontier never holds duplicates,
/// which keeps the set exact.
#[derive(Debug)]
pub struct FrontierCache<S> {
    explored: HashSet<S>,
    pending: HashSet<S>,
}

impl<S> Default for FrontierCache<S> {
    fn default() -> Self {
        FrontierCache {
            explored: HashSet::new(),
            pending: HashSet::new(),
        }
    }
}

impl<S> Cache<S> for FrontierCache<S>
where
    S: Clone + Eq + Hash,
{
    fn admit(&mut self, state: &S, _cost: usize) -> bool {
        if self.explored.contains(state) || self.pending.contains(state) {
            return false;
        }
        self.pending.insert(state.clone());
        true
    }

    fn take(&mut self, state: &S, _cost: usize) -> bool {
        self.pending.remove(state);
        !self.explored.contains(state)
    }

    fn close(&mut self, state: &S) {
        self.explored.insert(state.clone());
    }

    fn len(&self) -> usize {
        self.explored.len()
    }
}

/// Rejects only states which have already been expanded.
///
/// The frontier may hold the same state several times. Whichever copy
/// pops first is expanded, later copies are skipped.
#[derive(Debug)]
pub struct ExploredCache<S> {
    explored: HashSet<S>,
}

impl<S> Default for ExploredCache<S> {
    fn default() -> Self {
        ExploredCache {
            explored: HashSet::new(),
        }
    }
}

impl<S> Cache<S> for ExploredCache<S>
where
    S: Clone + Eq + Hash,
{
    fn admit(&mut self, state: &S, _cost: usize) -> bool {
        !self.explored.contains(state)
    }

    fn take(&mut self, state: &S, _cost: usize) -> bool {
        !self.explored.contains(state)
    }

    fn close(&mut self, state: &S) {
        self.explored.insert(state.clone());
    }

    fn len(&self) -> usize {
        self.explored.len()
    }
}

/// Remembers the cheapest cost at which each state has been queued.
///
/// A child is admitted when its cost is strictly lower than any seen
/// before, even when the state has already been expanded. Frontier
/// entries which have since been beaten are skipped when popped.
#[derive(Debug)]
pub struct BestCostCache<S> {
    explored: HashSet<S>,
    best: HashMap<S, usize>,
}

impl<S> Default for BestCostCache<S> {
    fn default() -> Self {
        BestCostCache {
            explored: HashSet::new(),
            best: HashMap::new(),
        }
    }
}

impl<S> BestCostCache<S>
where
    S: Eq + Hash,
{
    /// Cheapest known cost to reach this state.
    pub fn best(&self, state: &S) -> Option<usize> {
        self.best.get(state).copied()
    }
}

impl<S> Cache<S> for BestCostCache<S>
where
    S: Clone + Eq + Hash,
{
    fn admit(&mut self, state: &S, cost: usize) -> bool {
        match self.best.get_mut(state) {
            Some(best) if *best <= cost => false,
            Some(best) => {
                *best = cost;
                true
            }
            None => {
                self.best.insert(state.clone(), cost);
                true
            }
        }
    }

    fn take(&mut self, state: &S, cost: usize) -> bool {
        self.best.get(state).map_or(true, |&best| cost <= best)
    }

    fn close(&mut self, state: &S) {
        self.explored.insert(state.clone());
    }

    fn len(&self) -> usize {
        self.explored.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontier_cache() {
        let mut cache = FrontierCache::default();

        assert!(cache.admit(&'a', 0));
        assert!(!cache.admit(&'a', 0));
        assert!(cache.take(&'a', 0));
        cache.close(&'a');

        assert!(!cache.admit(&'a', 1));
        assert!(cache.admit(&'b', 1));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn explored_cache() {
        let mut cache = ExploredCache::default();

        assert!(cache.admit(&'a', 0));
        assert!(cache.admit(&'a', 0));
        assert!(cache.take(&'a', 0));
        cache.close(&'a');

        assert!(!cache.take(&'a', 0));
        assert!(!cache.admit(&'a', 0));
    }

    #[test]
    fn best_cost_cache() {
        let mut cache = BestCostCache::default();

        assert!(cache.admit(&'a', 4));
        assert!(!cache.admit(&'a', 4));
        assert!(!cache.admit(&'a', 5));
        assert!(cache.admit(&'a', 2));
        assert_eq!(cache.best(&'a'), Some(2));

        // The entry queued at 4 has been beaten.
        assert!(!cache.take(&'a', 4));
        assert!(cache.take(&'a', 2));
        cache.close(&'a');

        // Re-opening after expansion
        assert!(cache.admit(&'a', 1));
        assert_eq!(cache.len(), 1);
    }
}
