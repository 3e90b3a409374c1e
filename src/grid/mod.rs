//! # Grid Module
//!
//! Fixed-size 2D storage, coordinates, and grid configuration.
//!
//! This module contains the building blocks used to address and query a grid:
//! - [`Point`] coordinates with value equality
//! - [`Direction`] unit steps for single-neighbour lookups
//! - [`Bounded2DGrid`] storage with bounded or wrapping addressing
//! - [`GridConfig`] for building grids from serializable settings

pub mod bounded;
pub mod grid_config;

pub use bounded::*;
pub use grid_config::*;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a 2D coordinate on a grid.
///
/// # Examples
///
/// ```
/// use gridkit::Point;
///
/// let p = Point::new(10, 5);
/// assert_eq!(p.x, 10);
/// assert_eq!(p.y, 5);
///
/// let adjacent = p.adjacent_positions();
/// assert_eq!(adjacent.len(), 8); // All 8 surrounding positions
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The origin `(0, 0)`.
    pub const ZERO: Point = Point { x: 0, y: 0 };

    /// Creates a new point with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Unpacks a point from a 32-bit word.
    ///
    /// The low 16 bits hold `x` and the high 16 bits hold `y`, each read as a
    /// signed 16-bit value.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridkit::Point;
    ///
    /// assert_eq!(Point::from_packed(0x0002_0001), Point::new(1, 2));
    /// assert_eq!(Point::from_packed(0xFFFF_FFFFu32 as i32), Point::new(-1, -1));
    /// ```
    pub fn from_packed(dw: i32) -> Self {
        let low = (dw & 0xffff) as u16 as i16;
        let high = ((dw >> 16) & 0xffff) as u16 as i16;
        Self::new(low as i32, high as i32)
    }

    /// Returns true for the origin.
    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Calculates the Manhattan distance to another point.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridkit::Point;
    ///
    /// let a = Point::new(0, 0);
    /// let b = Point::new(3, -4);
    /// assert_eq!(a.manhattan_distance(b), 7);
    /// ```
    pub fn manhattan_distance(self, other: Point) -> u64 {
        self.x.abs_diff(other.x) as u64 + self.y.abs_diff(other.y) as u64
    }

    /// Calculates the Chebyshev (chessboard) distance to another point.
    pub fn chessboard_distance(self, other: Point) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// Returns the point one step away in `direction`.
    ///
    /// Coordinates wrap at the `i32` limits, the same as `Add`.
    pub fn step(self, direction: Direction) -> Point {
        self + direction.to_delta()
    }

    /// Returns all 8 adjacent positions in row-major order.
    pub fn adjacent_positions(self) -> Vec<Point> {
        Direction::all().into_iter().map(|d| self.step(d)).collect()
    }

    /// Returns only the 4 cardinal adjacent positions, ordered north, west,
    /// east, south.
    pub fn cardinal_adjacent_positions(self) -> Vec<Point> {
        Direction::cardinal().into_iter().map(|d| self.step(d)).collect()
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{X: {}, Y: {}}}", self.x, self.y)
    }
}

/// Component-wise addition, wrapping at the `i32` limits.
impl std::ops::Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x.wrapping_add(other.x), self.y.wrapping_add(other.y))
    }
}

/// Component-wise subtraction, wrapping at the `i32` limits.
impl std::ops::Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x.wrapping_sub(other.x), self.y.wrapping_sub(other.y))
    }
}

/// Compass directions for single-neighbour lookups.
///
/// North is towards smaller `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Northeast,
    Northwest,
    Southeast,
    Southwest,
}

impl Direction {
    /// Converts a direction to a point delta.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridkit::{Direction, Point};
    ///
    /// let delta = Direction::North.to_delta();
    /// assert_eq!(delta, Point::new(0, -1));
    /// ```
    pub fn to_delta(self) -> Point {
        match self {
            Direction::North => Point::new(0, -1),
            Direction::South => Point::new(0, 1),
            Direction::East => Point::new(1, 0),
            Direction::West => Point::new(-1, 0),
            Direction::Northeast => Point::new(1, -1),
            Direction::Northwest => Point::new(-1, -1),
            Direction::Southeast => Point::new(1, 1),
            Direction::Southwest => Point::new(-1, 1),
        }
    }

    /// Converts a point delta to a direction.
    ///
    /// Returns None if the delta isn't a unit step.
    pub fn from_delta(delta: Point) -> Option<Direction> {
        match (delta.x, delta.y) {
            (0, -1) => Some(Direction::North),
            (0, 1) => Some(Direction::South),
            (1, 0) => Some(Direction::East),
            (-1, 0) => Some(Direction::West),
            (1, -1) => Some(Direction::Northeast),
            (-1, -1) => Some(Direction::Northwest),
            (1, 1) => Some(Direction::Southeast),
            (-1, 1) => Some(Direction::Southwest),
            _ => None,
        }
    }

    /// Returns the direction pointing the other way.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::Northeast => Direction::Southwest,
            Direction::Northwest => Direction::Southeast,
            Direction::Southeast => Direction::Northwest,
            Direction::Southwest => Direction::Northeast,
        }
    }

    /// Returns all 8 directions in the chessboard neighbour order.
    pub fn all() -> [Direction; 8] {
        [
            Direction::Northwest,
            Direction::North,
            Direction::Northeast,
            Direction::West,
            Direction::East,
            Direction::Southwest,
            Direction::South,
            Direction::Southeast,
        ]
    }

    /// Returns the 4 cardinal directions in the Manhattan neighbour order.
    pub fn cardinal() -> [Direction; 4] {
        [
            Direction::North,
            Direction::West,
            Direction::East,
            Direction::South,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_creation() {
        let p = Point::new(5, 10);
        assert_eq!(p.x, 5);
        assert_eq!(p.y, 10);
        assert!(!p.is_zero());
        assert!(Point::ZERO.is_zero());
        assert_eq!(Point::default(), Point::ZERO);
    }

    #[test]
    fn test_point_from_packed() {
        assert_eq!(Point::from_packed(0), Point::ZERO);
        assert_eq!(Point::from_packed(0x0005_0003), Point::new(3, 5));
        // Low word 0xFFFE is -2, high word 0x8000 is i16::MIN
        assert_eq!(
            Point::from_packed(0x8000_FFFEu32 as i32),
            Point::new(-2, i16::MIN as i32)
        );
    }

    #[test]
    fn test_point_distances() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert_eq!(a.manhattan_distance(b), 7);
        assert_eq!(a.chessboard_distance(b), 4);
        assert_eq!(b.chessboard_distance(a), 4);
    }

    #[test]
    fn test_point_distances_at_coordinate_limits() {
        let low = Point::new(i32::MIN, i32::MIN);
        let high = Point::new(i32::MAX, i32::MAX);
        assert_eq!(low.manhattan_distance(high), 2 * u32::MAX as u64);
        assert_eq!(high.manhattan_distance(low), 2 * u32::MAX as u64);
        assert_eq!(low.chessboard_distance(high), u32::MAX);
    }

    #[test]
    fn test_point_arithmetic_wraps_at_limits() {
        let edge = Point::new(i32::MAX, i32::MIN);
        assert_eq!(edge + Point::new(1, -1), Point::new(i32::MIN, i32::MAX));
        assert_eq!(edge - Point::new(-1, 1), Point::new(i32::MIN, i32::MAX));
        assert_eq!(edge.step(Direction::Northeast), Point::new(i32::MIN, i32::MAX));

        let adjacent = Point::new(i32::MAX, 0).adjacent_positions();
        assert_eq!(adjacent.len(), 8);
        assert_eq!(adjacent[4], Point::new(i32::MIN, 0));
    }

    #[test]
    fn test_point_adjacent_order() {
        let p = Point::new(5, 5);
        let adjacent = p.adjacent_positions();
        assert_eq!(adjacent.len(), 8);
        assert_eq!(adjacent[0], Point::new(4, 4));
        assert_eq!(adjacent[7], Point::new(6, 6));
        assert!(!adjacent.contains(&p));
    }

    #[test]
    fn test_point_cardinal_adjacent() {
        let p = Point::new(5, 5);
        let adjacent = p.cardinal_adjacent_positions();
        assert_eq!(
            adjacent,
            vec![
                Point::new(5, 4),
                Point::new(4, 5),
                Point::new(6, 5),
                Point::new(5, 6),
            ]
        );
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(5, 10);
        let b = Point::new(3, 2);
        assert_eq!(a + b, Point::new(8, 12));
        assert_eq!(a - b, Point::new(2, 8));
        assert_eq!(Point::from((1, 2)), Point::new(1, 2));
    }

    #[test]
    fn test_point_display() {
        assert_eq!(Point::new(3, -1).to_string(), "{X: 3, Y: -1}");
    }

    #[test]
    fn test_direction_deltas_match_point_neighbours() {
        let p = Point::new(2, 2);
        let stepped: Vec<Point> = Direction::all().iter().map(|d| p.step(*d)).collect();
        assert_eq!(stepped, p.adjacent_positions());

        let stepped: Vec<Point> = Direction::cardinal().iter().map(|d| p.step(*d)).collect();
        assert_eq!(stepped, p.cardinal_adjacent_positions());
    }

    #[test]
    fn test_direction_round_trip_and_opposite() {
        for direction in Direction::all() {
            assert_eq!(Direction::from_delta(direction.to_delta()), Some(direction));
            assert_eq!(direction.opposite().opposite(), direction);
            assert_eq!(
                direction.to_delta() + direction.opposite().to_delta(),
                Point::ZERO
            );
        }
        assert_eq!(Direction::from_delta(Point::new(2, 0)), None);
        assert_eq!(Direction::from_delta(Point::ZERO), None);
    }
}
