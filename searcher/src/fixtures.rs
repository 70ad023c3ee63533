//! Small problems used to exercise the search algorithms.

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::str::FromStr;

use crate::node::Solution;
use crate::traits::{Heuristic, Problem};

pub(crate) type Cell = (i32, i32);

/// A grid of (row, column) cells, parsed from lines of `.`, `#`,
/// `A` (start) and `B` (goal). Blank lines and indentation are ignored.
#[derive(Debug, Default, Clone)]
pub(crate) struct Grid {
    open: HashSet<Cell>,
    start: Cell,
    goal: Cell,
}

impl FromStr for Grid {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Grid::default();
        for (row, line) in s.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            for (col, c) in line.chars().enumerate() {
                let cell = (row as i32, col as i32);
                match c {
                    '.' => {}
                    'A' => grid.start = cell,
                    'B' => grid.goal = cell,
                    '#' => continue,
                    _ => return Err(format!("Unexpected grid character: {}", c)),
                };
                grid.open.insert(cell);
            }
        }
        Ok(grid)
    }
}

impl Problem for Grid {
    type State = Cell;
    type Action = &'static str;

    fn start(&self) -> Cell {
        self.start
    }

    fn is_goal(&self, state: &Cell) -> bool {
        *state == self.goal
    }

    fn neighbors(&self, state: &Cell) -> Vec<(&'static str, Cell)> {
        let (row, col) = *state;
        vec![
            ("up", (row - 1, col)),
            ("down", (row + 1, col)),
            ("left", (row, col - 1)),
            ("right", (row, col + 1)),
        ]
        .into_iter()
        .filter(|(_, cell)| self.open.contains(cell))
        .collect()
    }
}

impl Heuristic for Grid {
    fn heuristic(&self, state: &Cell) -> usize {
        ((state.0 - self.goal.0).abs() + (state.1 - self.goal.1).abs()) as usize
    }
}

/// A directed graph with weighted edges and a hand-picked heuristic.
#[derive(Debug, Default, Clone)]
pub(crate) struct Weighted {
    edges: Vec<(char, char, usize)>,
    estimates: HashMap<char, usize>,
    start: char,
    goal: char,
}

impl Weighted {
    pub(crate) fn new(start: char, goal: char) -> Self {
        Self {
            start,
            goal,
            ..Self::default()
        }
    }

    pub(crate) fn edge(mut self, from: char, to: char, cost: usize) -> Self {
        self.edges.push((from, to, cost));
        self
    }

    pub(crate) fn estimate(mut self, state: char, h: usize) -> Self {
        self.estimates.insert(state, h);
        self
    }
}

impl Problem for Weighted {
    type State = char;
    type Action = (char, char);

    fn start(&self) -> char {
        self.start
    }

    fn is_goal(&self, state: &char) -> bool {
        *state == self.goal
    }

    fn neighbors(&self, state: &char) -> Vec<((char, char), char)> {
        self.edges
            .iter()
            .filter(|(from, _, _)| from == state)
            .map(|&(from, to, _)| ((from, to), to))
            .collect()
    }

    fn step_cost(&self, _from: &char, action: &(char, char), _to: &char) -> usize {
        self.edges
            .iter()
            .find(|(from, to, _)| (*from, *to) == *action)
            .map(|(_, _, cost)| *cost)
            .unwrap_or(usize::MAX)
    }
}

impl Heuristic for Weighted {
    fn heuristic(&self, state: &char) -> usize {
        self.estimates.get(state).copied().unwrap_or(0)
    }
}

/// Length of the shortest path by exhaustive breadth-first expansion,
/// ignoring step costs.
pub(crate) fn shortest<P: Problem>(problem: &P) -> Option<usize> {
    let mut distances = HashMap::new();
    let mut queue = VecDeque::new();
    distances.insert(problem.start(), 0);
    queue.push_back(problem.start());

    while let Some(state) = queue.pop_front() {
        let distance = distances[&state];
        if problem.is_goal(&state) {
            return Some(distance);
        }
        for (_, next) in problem.neighbors(&state) {
            if !distances.contains_key(&next) {
                distances.insert(next.clone(), distance + 1);
                queue.push_back(next);
            }
        }
    }
    None
}

/// Check that each step of the solution follows an edge of the problem
/// and that it ends at the goal.
pub(crate) fn assert_valid<P>(problem: &P, solution: &Solution<P::Action, P::State>)
where
    P: Problem,
    P::Action: PartialEq,
{
    let mut state = problem.start();
    for (action, next) in solution.iter() {
        assert!(
            problem
                .neighbors(&state)
                .iter()
                .any(|(a, s)| a == action && s == next),
            "{:?} --{:?}--> {:?} is not an edge",
            state,
            action,
            next
        );
        state = next.clone();
    }
    assert!(problem.is_goal(&state), "{:?} is not the goal", state);
}
