//! Rectangular mazes, read from text.
//!
//! A maze is drawn one row per line: `A` marks the start, `B` the goal,
//! `#` (or `█`) a wall, and a space (or `.`) an open cell. Lines shorter
//! than the widest one are padded with open cells.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use searcher::{Heuristic, Problem, Solution};
use thiserror::Error;

use super::map::Map;
use super::{BoundingBox, Direction, Point};

const DEFAULT_MAZE: &str = "\
###############
#A            #
#   #####  #  #
#   #      #  #
#   #  #####  #
#      #      #
########      B
###############";

/// Error returned when a maze is malformed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("Maze is empty")]
    Empty,

    #[error("Unexpected maze character {0:?} at {1}")]
    UnexpectedCharacter(char, Point),

    #[error("Maze has no start (A)")]
    MissingStart,

    #[error("Maze has no goal (B)")]
    MissingGoal,

    #[error("Maze has a second start at {1}, the first is at {0}")]
    DuplicateStart(Point, Point),

    #[error("Maze has a second goal at {1}, the first is at {0}")]
    DuplicateGoal(Point, Point),

    #[error("{0} is outside the maze")]
    OutOfBounds(Point),

    #[error("{0} is a wall")]
    Wall(Point),
}

type Result<T> = std::result::Result<T, MazeError>;

/// A rectangular grid of walls and open cells,
/// with a start and a goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    walls: Vec<Vec<bool>>,
    bbox: BoundingBox,
    start: Point,
    goal: Point,
}

impl Maze {
    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn width(&self) -> usize {
        self.bbox.width() as usize
    }

    pub fn height(&self) -> usize {
        self.bbox.height() as usize
    }

    /// Is there a wall here? Points outside the maze are not walls.
    pub fn is_wall(&self, point: Point) -> bool {
        self.bbox.contains(point) && self.walls[point.y as usize][point.x as usize]
    }

    /// Iterate over every open cell, row by row.
    pub fn open_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.bbox.points().filter(move |p| !self.is_wall(*p))
    }

    fn check(&self, point: Point) -> Result<()> {
        if !self.bbox.contains(point) {
            Err(MazeError::OutOfBounds(point))
        } else if self.is_wall(point) {
            Err(MazeError::Wall(point))
        } else {
            Ok(())
        }
    }

    /// Move the start somewhere else in the maze.
    pub fn with_start(mut self, start: Point) -> Result<Self> {
        self.check(start)?;
        self.start = start;
        Ok(self)
    }

    /// Move the goal somewhere else in the maze.
    pub fn with_goal(mut self, goal: Point) -> Result<Self> {
        self.check(goal)?;
        self.goal = goal;
        Ok(self)
    }

    /// Draw the maze with a solution marked out.
    pub fn render<'m>(&'m self, solution: &Solution<Direction, Point>) -> Rendered<'m> {
        Rendered {
            maze: self,
            path: solution.states().cloned().collect(),
        }
    }
}

fn place(
    slot: &mut Option<Point>,
    point: Point,
    duplicate: fn(Point, Point) -> MazeError,
) -> Result<()> {
    match slot {
        Some(first) => Err(duplicate(*first, point)),
        None => {
            *slot = Some(point);
            Ok(())
        }
    }
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        let lines: Vec<&str> = s.lines().collect();
        let lines = match (
            lines.iter().position(|l| !l.is_empty()),
            lines.iter().rposition(|l| !l.is_empty()),
        ) {
            (Some(first), Some(last)) => &lines[first..=last],
            _ => return Err(MazeError::Empty),
        };

        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let mut start = None;
        let mut goal = None;
        let mut walls = Vec::with_capacity(lines.len());

        for (y, line) in lines.iter().enumerate() {
            let mut row = vec![false; width];
            for (x, c) in line.chars().enumerate() {
                let point: Point = (x, y).into();
                match c {
                    'A' => place(&mut start, point, MazeError::DuplicateStart)?,
                    'B' => place(&mut goal, point, MazeError::DuplicateGoal)?,
                    ' ' | '.' => {}
                    '#' | '█' => row[x] = true,
                    _ => return Err(MazeError::UnexpectedCharacter(c, point)),
                }
            }
            walls.push(row);
        }

        Ok(Maze {
            bbox: BoundingBox::sized(width, walls.len()),
            walls,
            start: start.ok_or(MazeError::MissingStart)?,
            goal: goal.ok_or(MazeError::MissingGoal)?,
        })
    }
}

impl Default for Maze {
    fn default() -> Self {
        DEFAULT_MAZE.parse().expect("built-in maze is valid")
    }
}

impl Map for Maze {
    fn is_traversable(&self, location: Point) -> bool {
        self.bbox.contains(location) && !self.is_wall(location)
    }
}

impl Problem for Maze {
    type State = Point;
    type Action = Direction;

    fn start(&self) -> Point {
        self.start
    }

    fn is_goal(&self, state: &Point) -> bool {
        *state == self.goal
    }

    fn neighbors(&self, state: &Point) -> Vec<(Direction, Point)> {
        Direction::all()
            .map(|d| (d, state.step(d)))
            .filter(|(_, p)| self.is_traversable(*p))
            .collect()
    }
}

impl Heuristic for Maze {
    fn heuristic(&self, state: &Point) -> usize {
        state.manhattan_distance(self.goal) as usize
    }
}

/// A maze drawn with the cells of a solution marked by `*`.
#[derive(Debug)]
pub struct Rendered<'m> {
    maze: &'m Maze,
    path: HashSet<Point>,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let maze = self.maze;
        maze.bbox.printer(f, |f, p| {
            let c = if maze.is_wall(*p) {
                '█'
            } else if *p == maze.start {
                'A'
            } else if *p == maze.goal {
                'B'
            } else if self.path.contains(p) {
                '*'
            } else {
                ' '
            };
            write!(f, "{}", c)
        })
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rendered = Rendered {
            maze: self,
            path: HashSet::new(),
        };
        fmt::Display::fmt(&rendered, f)
    }
}
