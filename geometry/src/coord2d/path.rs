//! Paths across a 2D grid, as found by a search.

use std::ops::Deref;

use searcher::Solution;

use super::{Direction, Point};

/// The cells visited walking from an origin to a destination,
/// including both ends.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Path {
    steps: Vec<Point>,
}

impl Path {
    /// A path which hasn't left its origin yet.
    pub fn new(origin: Point) -> Self {
        Path {
            steps: vec![origin],
        }
    }

    /// Build a path from the origin of a search and the steps it found.
    pub fn from_solution(origin: Point, solution: &Solution<Direction, Point>) -> Self {
        let mut path = Path::new(origin);
        path.steps.extend(solution.states().cloned());
        path
    }

    pub fn origin(&self) -> &Point {
        &self.steps[0]
    }

    pub fn destination(&self) -> &Point {
        &self.steps[self.steps.len() - 1]
    }

    /// Number of steps taken.
    pub fn distance(&self) -> usize {
        self.steps.len() - 1
    }
}

impl Deref for Path {
    type Target = [Point];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}
