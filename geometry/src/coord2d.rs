//! Coordinate work in two dimensions.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use itertools::iproduct;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

use crate::Position;

pub mod map;
pub mod maze;
pub mod path;
pub mod pathfinder;

/// A single step across the grid.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    /// Enumerates all directions of movement in a fixed order:
    /// up, down, left, right.
    pub fn all() -> impl Iterator<Item = Self> {
        DIRECTIONS.iter().cloned()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// A cell of a grid: x is the column, y is the row,
/// and rows count downward from the top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: Position,
    pub y: Position,
}

impl Point {
    pub fn new(x: Position, y: Position) -> Self {
        Self { x, y }
    }

    /// The neighboring cell in a given direction.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = match direction {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        };
        Self::new(self.x + dx, self.y + dy)
    }

    /// Number of single steps between two cells, ignoring walls.
    pub fn manhattan_distance(self, other: Point) -> Position {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl From<(Position, Position)> for Point {
    fn from(coordinates: (Position, Position)) -> Self {
        Self::new(coordinates.0, coordinates.1)
    }
}

impl From<(usize, usize)> for Point {
    fn from(coordinates: (usize, usize)) -> Self {
        Self::new(coordinates.0 as Position, coordinates.1 as Position)
    }
}

/// Error when parsing a point from string.
#[derive(Debug, Error)]
pub enum ParsePointError {
    #[error("Invalid Point: {}", _0)]
    InvalidLiteral(String),

    #[error("Invalid Number Literal")]
    InvalidNumber,
}

impl From<::std::num::ParseIntError> for ParsePointError {
    fn from(_: ::std::num::ParseIntError) -> Self {
        ParsePointError::InvalidNumber
    }
}

impl FromStr for Point {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref RE: Regex = Regex::new(r"^\s*(?P<x>-?\d+)\s*,\s*(?P<y>-?\d+)\s*$").unwrap();
        };

        let cap = match RE.captures(s) {
            None => return Err(ParsePointError::InvalidLiteral(s.to_string())),
            Some(c) => c,
        };

        Ok(Self::new(cap["x"].parse()?, cap["y"].parse()?))
    }
}

/// The rectangle of cells covered by a grid, with
/// its top left corner at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    right: Position,
    bottom: Position,
}

impl BoundingBox {
    /// A box `width` cells wide and `height` cells tall.
    pub fn sized(width: usize, height: usize) -> Self {
        Self {
            right: width as Position - 1,
            bottom: height as Position - 1,
        }
    }

    /// Range of rows
    pub fn vertical(&self) -> RangeInclusive<Position> {
        0..=self.bottom
    }

    /// Range of columns
    pub fn horizontal(&self) -> RangeInclusive<Position> {
        0..=self.right
    }

    /// Check if a point is inside this box, including the edges.
    pub fn contains(&self, point: Point) -> bool {
        self.horizontal().contains(&point.x) && self.vertical().contains(&point.y)
    }

    pub fn width(&self) -> Position {
        self.right + 1
    }

    pub fn height(&self) -> Position {
        self.bottom + 1
    }

    /// Iterate through all the points contained in this
    /// bounding box, row by row.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        iproduct!(self.vertical(), self.horizontal()).map(|(y, x)| Point::new(x, y))
    }

    /// Call a function which should write a single character at every position
    /// in this bounding box.
    ///
    /// This function will handle newlines. The callback should print
    /// a single character for each point.
    pub fn printer<F>(&self, f: &mut fmt::Formatter, cb: F) -> fmt::Result
    where
        F: Fn(&mut fmt::Formatter, &Point) -> fmt::Result,
    {
        for y in self.vertical() {
            for x in self.horizontal() {
                cb(f, &Point::new(x, y))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point() {
        let point = Point::new(1, 1);

        assert_eq!(
            Direction::all().map(|d| point.step(d)).collect::<Vec<_>>(),
            vec![
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(0, 1),
                Point::new(2, 1)
            ]
        );

        assert_eq!(&point.to_string(), "1,1");
        assert_eq!(Direction::Left.to_string(), "left");
        assert_eq!(point.manhattan_distance(Point::new(4, -1)), 5);
        assert_eq!(Point::new(4, -1).manhattan_distance(point), 5);
    }

    #[test]
    fn parse() {
        assert_eq!("3,4".parse::<Point>().unwrap(), Point::new(3, 4));
        assert_eq!(" 10, -2 ".parse::<Point>().unwrap(), Point::new(10, -2));
        assert!(matches!(
            "3;4".parse::<Point>(),
            Err(ParsePointError::InvalidLiteral(_))
        ));
        assert!(matches!(
            "99999999999,1".parse::<Point>(),
            Err(ParsePointError::InvalidNumber)
        ));
    }

    #[test]
    fn bbox() {
        let bbox = BoundingBox::sized(2, 3);

        assert_eq!(bbox.width(), 2);
        assert_eq!(bbox.height(), 3);
        assert_eq!(bbox.horizontal(), 0..=1);
        assert_eq!(bbox.vertical(), 0..=2);

        assert!(bbox.contains(Point::new(1, 2)));
        assert!(!bbox.contains(Point::new(2, 0)));
        assert!(!bbox.contains(Point::new(0, -1)));

        assert_eq!(
            bbox.points().take(3).collect::<Vec<_>>(),
            vec![Point::new(0, 0), Point::new(1, 0), Point::new(0, 1)]
        );
        assert_eq!(bbox.points().count(), 6);
    }
}
