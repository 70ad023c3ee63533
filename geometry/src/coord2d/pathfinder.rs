//! Pathfinding in two dimensions using any search strategy
use searcher::{Heuristic, Problem, Strategy};

pub use super::map::Map;
pub use super::path::Path;
use super::{Direction, Point};

/// Adapts a map, an origin and a destination into
/// a problem for the searcher.
#[derive(Debug)]
pub struct MapProblem<'m, M> {
    map: &'m M,
    origin: Point,
    destination: Point,
}

impl<'m, M> MapProblem<'m, M>
where
    M: Map,
{
    pub fn new(map: &'m M, origin: Point, destination: Point) -> Self {
        Self {
            map,
            origin,
            destination,
        }
    }
}

impl<'m, M> Problem for MapProblem<'m, M>
where
    M: Map,
{
    type State = Point;
    type Action = Direction;

    fn start(&self) -> Point {
        self.origin
    }

    fn is_goal(&self, state: &Point) -> bool {
        *state == self.destination
    }

    fn neighbors(&self, state: &Point) -> Vec<(Direction, Point)> {
        Direction::all()
            .map(|d| (d, state.step(d)))
            .filter(|(_, p)| self.map.is_traversable(*p))
            .collect()
    }
}

impl<'m, M> Heuristic for MapProblem<'m, M>
where
    M: Map,
{
    fn heuristic(&self, state: &Point) -> usize {
        state.manhattan_distance(self.destination) as usize
    }
}

/// Implements pathfinding for a map.
#[derive(Debug, Clone)]
pub struct Pathfinder<'m, M> {
    map: &'m M,
    strategy: Strategy,
}

impl<'m, M> Pathfinder<'m, M>
where
    M: Map,
{
    /// Construct a new pathfinder, which uses A* unless told otherwise.
    pub(crate) fn new(map: &'m M) -> Self {
        Self {
            map,
            strategy: Strategy::AStar,
        }
    }

    /// Use a different search strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Find a path between the origin and destination given.
    ///
    /// When no path exists and the search is exhausted, return None.
    pub fn find_path(&self, origin: Point, destination: Point) -> Option<Path> {
        if !self.map.is_traversable(origin) {
            return None;
        }
        let problem = MapProblem::new(self.map, origin, destination);

        self.strategy
            .solve(&problem)
            .map(|solution| Path::from_solution(origin, &solution))
    }
}

#[cfg(test)]
mod test {

    use super::super::map::helpers::*;

    use super::*;

    #[test]
    fn simple() {
        let map: SimpleMap = vec![(0, 0).into()].into();

        assert_eq!(
            map.path((0, 0).into(), (0, 0).into()),
            Some(Path::new((0, 0).into()))
        );
        assert_eq!(map.path((1, 1).into(), (0, 0).into()), None);
    }

    #[test]
    fn shortest() {
        let map: SimpleMap = "
        #########
        #.......#
        #.#####.#
        #.#...#.#
        #.#.#.#.#
        #...#...#
        #########
        "
        .parse()
        .unwrap();

        for strategy in [Strategy::BreadthFirst, Strategy::AStar].iter() {
            let path = map
                .path_with(*strategy, (1, 1).into(), (3, 3).into())
                .unwrap();
            assert_eq!(path.distance(), 8, "{}", strategy);
            assert_eq!(path.origin(), &Point::new(1, 1));
            assert_eq!(path.destination(), &Point::new(3, 3));
        }
    }

    #[test]
    fn unreachable() {
        let map: SimpleMap = "
        ..#..
        ..#..
        "
        .parse()
        .unwrap();

        for strategy in Strategy::all() {
            assert_eq!(
                map.path_with(strategy, (0, 0).into(), (4, 1).into()),
                None,
                "{}",
                strategy
            );
        }
    }
}
