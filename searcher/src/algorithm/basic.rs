pub use self::bfs::bfs;
pub use self::dfs::dfs;

pub mod bfs {
    use std::collections::VecDeque;
    use std::default::Default;

    use crate::algorithm::cache::FrontierCache;
    use crate::algorithm::{Candidate, Frontier, SearchAlgorithm};
    use crate::node::Solution;
    use crate::strategy::Strategy;
    use crate::Problem;

    #[derive(Debug)]
    pub struct BreadthQueue {
        queue: VecDeque<Candidate>,
    }

    impl Frontier for BreadthQueue {
        fn pop(&mut self) -> Option<Candidate> {
            self.queue.pop_front()
        }

        fn push(&mut self, item: Candidate) {
            self.queue.push_back(item);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    impl Default for BreadthQueue {
        fn default() -> Self {
            BreadthQueue {
                queue: VecDeque::new(),
            }
        }
    }

    pub type BreadthFirstSearcher<'p, P> =
        SearchAlgorithm<'p, P, BreadthQueue, FrontierCache<<P as Problem>::State>>;

    pub fn build<P>(problem: &P) -> BreadthFirstSearcher<'_, P>
    where
        P: Problem,
    {
        SearchAlgorithm::new(problem, Strategy::BreadthFirst, |_, _| 0)
    }

    /// Breadth-first search, where the order is determined
    /// by the neighbors returned by the [Problem::neighbors] method.
    ///
    /// With unit step costs, the path found is a shortest one.
    pub fn bfs<P>(problem: &P) -> Option<Solution<P::Action, P::State>>
    where
        P: Problem,
    {
        build(problem).exhaust()
    }
}

pub mod dfs {
    use std::default::Default;

    use crate::algorithm::cache::FrontierCache;
    use crate::algorithm::{Candidate, Frontier, SearchAlgorithm};
    use crate::node::Solution;
    use crate::strategy::Strategy;
    use crate::Problem;

    #[derive(Debug)]
    pub struct DepthQueue {
        stack: Vec<Candidate>,
    }

    impl Default for DepthQueue {
        fn default() -> Self {
            DepthQueue { stack: Vec::new() }
        }
    }

    impl Frontier for DepthQueue {
        fn pop(&mut self) -> Option<Candidate> {
            self.stack.pop()
        }

        fn push(&mut self, item: Candidate) {
            self.stack.push(item);
        }

        fn len(&self) -> usize {
            self.stack.len()
        }
    }

    pub type DepthFirstSearcher<'p, P> =
        SearchAlgorithm<'p, P, DepthQueue, FrontierCache<<P as Problem>::State>>;

    pub fn build<P>(problem: &P) -> DepthFirstSearcher<'_, P>
    where
        P: Problem,
    {
        SearchAlgorithm::new(problem, Strategy::DepthFirst, |_, _| 0)
    }

    /// Depth-first search, where the order is determined
    /// by the neighbors returned by the [Problem::neighbors] method.
    ///
    /// The last neighbor listed is explored first. No promises are
    /// made about the length of the path.
    pub fn dfs<P>(problem: &P) -> Option<Solution<P::Action, P::State>>
    where
        P: Problem,
    {
        build(problem).exhaust()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{assert_valid, shortest, Grid};

    const OPEN: &str = "
A..
...
..B
";

    #[test]
    fn depth_first() {
        let grid: Grid = OPEN.parse().unwrap();

        let solution = dfs(&grid).unwrap();
        assert_valid(&grid, &solution);
        assert_eq!(
            solution.actions().cloned().collect::<Vec<_>>(),
            vec!["right", "right", "down", "down"]
        );
        assert_eq!(solution.explored(), 4);
    }

    #[test]
    fn breadth_first() {
        let grid: Grid = OPEN.parse().unwrap();

        let solution = bfs(&grid).unwrap();
        assert_valid(&grid, &solution);
        assert_eq!(
            solution.actions().cloned().collect::<Vec<_>>(),
            vec!["down", "down", "right", "right"]
        );
        assert_eq!(solution.destination(), Some(&(2, 2)));
        assert_eq!(solution.cost(), 4);
        assert_eq!(solution.explored(), 8);
    }

    #[test]
    fn depth_first_wanders() {
        let grid: Grid = "
.........
.#######.
.#.....#.
.#.###.#.
A#..B#...
.#####...
.........
"
        .parse()
        .unwrap();

        let deep = dfs(&grid).unwrap();
        let broad = bfs(&grid).unwrap();
        assert_valid(&grid, &deep);
        assert_valid(&grid, &broad);

        assert_eq!(deep.len(), 24);
        assert_eq!(broad.len(), 20);
        assert_eq!(Some(broad.len()), shortest(&grid));
    }
}
