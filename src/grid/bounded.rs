//! # Bounded Grid
//!
//! Fixed-size rectangular storage with bounded or wrapping (toroidal)
//! addressing.
//!
//! Cells are stored row-major in a single `Vec`, so iteration visits every
//! `x` of row 0 before moving on to row 1. In bounded mode coordinates must
//! lie inside `[0, width) × [0, height)`. In wrapping mode every coordinate
//! is reduced with floor modulo, so negative indices re-enter from the
//! opposite edge.

use crate::config::MAX_GRID_DIMENSION;
use crate::{Direction, GridConfig, GridError, GridResult, Point};
use log::{debug, trace};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A fixed `width × height` block of cells.
///
/// # Examples
///
/// ```
/// use gridkit::Bounded2DGrid;
///
/// let mut grid: Bounded2DGrid<u8> = Bounded2DGrid::new(5, 4).unwrap();
/// grid.set_item(1, 1, 7).unwrap();
/// assert_eq!(grid.get_item(1, 1), Ok(&7));
///
/// grid.set_wrapping(true);
/// assert_eq!(grid.get_item(-4, 5), Ok(&7));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bounded2DGrid<T> {
    width: usize,
    height: usize,
    wrapping: bool,
    cells: Vec<T>,
}

/// Unchecked serde shape of a grid, validated on the way in.
#[derive(Deserialize)]
struct GridData<T> {
    width: usize,
    height: usize,
    wrapping: bool,
    cells: Vec<T>,
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Bounded2DGrid<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let data = GridData::deserialize(deserializer)?;
        let area = checked_area(data.width, data.height).map_err(serde::de::Error::custom)?;
        if data.cells.len() != area {
            return Err(serde::de::Error::custom(format!(
                "expected {} cells for a {}x{} grid, found {}",
                area,
                data.width,
                data.height,
                data.cells.len()
            )));
        }
        Ok(Self {
            width: data.width,
            height: data.height,
            wrapping: data.wrapping,
            cells: data.cells,
        })
    }
}

fn checked_area(width: usize, height: usize) -> GridResult<usize> {
    if width == 0 || height == 0 {
        return Err(GridError::InvalidArgument(format!(
            "grid dimensions must be positive, got {}x{}",
            width, height
        )));
    }
    if width > MAX_GRID_DIMENSION || height > MAX_GRID_DIMENSION {
        return Err(GridError::InvalidArgument(format!(
            "grid dimensions {}x{} exceed the addressable maximum of {}",
            width, height, MAX_GRID_DIMENSION
        )));
    }
    width.checked_mul(height).ok_or_else(|| {
        GridError::InvalidArgument(format!("grid area {}x{} overflows", width, height))
    })
}

/// Reserves storage for `area` cells, reporting allocation limits as an
/// argument error instead of aborting.
fn reserve_cells<T>(width: usize, height: usize, area: usize) -> GridResult<Vec<T>> {
    let mut cells = Vec::new();
    cells.try_reserve_exact(area).map_err(|err| {
        GridError::InvalidArgument(format!(
            "cannot allocate a {}x{} grid: {}",
            width, height, err
        ))
    })?;
    Ok(cells)
}

impl<T: Default> Bounded2DGrid<T> {
    /// Creates a bounded grid with every cell set to `T::default()`.
    ///
    /// Fails with [`GridError::InvalidArgument`] when either dimension is zero
    /// or the cells cannot be allocated.
    pub fn new(width: usize, height: usize) -> GridResult<Self> {
        let area = checked_area(width, height)?;
        let mut cells = reserve_cells(width, height, area)?;
        cells.resize_with(area, T::default);
        debug!("Created {}x{} grid", width, height);
        Ok(Self {
            width,
            height,
            wrapping: false,
            cells,
        })
    }

    /// Creates a grid from configuration, default-initializing every cell.
    pub fn from_config(config: &GridConfig) -> GridResult<Self> {
        config.validate()?;
        let mut grid = Self::new(config.width, config.height)?;
        grid.set_wrapping(config.wrapping);
        Ok(grid)
    }
}

impl<T: Clone> Bounded2DGrid<T> {
    /// Creates a bounded grid with every cell set to `item`.
    pub fn filled(width: usize, height: usize, item: T) -> GridResult<Self> {
        let area = checked_area(width, height)?;
        let mut cells = reserve_cells(width, height, area)?;
        cells.resize(area, item);
        debug!("Created {}x{} grid from a fill value", width, height);
        Ok(Self {
            width,
            height,
            wrapping: false,
            cells,
        })
    }

    /// Overwrites every cell with `item`.
    pub fn fill(&mut self, item: T) {
        self.cells.fill(item);
    }
}

impl<T> Bounded2DGrid<T> {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn is_wrapping(&self) -> bool {
        self.wrapping
    }

    /// Switches between bounded and wrapping addressing.
    pub fn set_wrapping(&mut self, wrapping: bool) {
        if self.wrapping != wrapping {
            debug!(
                "Grid {}x{} addressing switched to {}",
                self.width,
                self.height,
                if wrapping { "wrapping" } else { "bounded" }
            );
        }
        self.wrapping = wrapping;
    }

    /// Returns true if `(x, y)` lies inside the grid without wrapping.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Maps a coordinate to a storage column/row under the current addressing
    /// mode. Widened to `i64` so neighbour offsets never overflow.
    fn resolve(&self, x: i64, y: i64) -> Option<(usize, usize)> {
        if self.wrapping {
            let cx = x.rem_euclid(self.width as i64) as usize;
            let cy = y.rem_euclid(self.height as i64) as usize;
            Some((cx, cy))
        } else if (0..self.width as i64).contains(&x) && (0..self.height as i64).contains(&y) {
            Some((x as usize, y as usize))
        } else {
            None
        }
    }

    fn out_of_range(&self, x: i32, y: i32) -> GridError {
        GridError::IndexOutOfRange {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    fn index_of(&self, x: i32, y: i32) -> GridResult<usize> {
        self.resolve(x as i64, y as i64)
            .map(|(cx, cy)| cy * self.width + cx)
            .ok_or_else(|| self.out_of_range(x, y))
    }

    fn point_at(&self, index: usize) -> Point {
        Point::new((index % self.width) as i32, (index / self.width) as i32)
    }

    /// Returns the element at `(x, y)`.
    ///
    /// Fails with [`GridError::IndexOutOfRange`] outside the grid when
    /// wrapping is off. Never fails when wrapping is on.
    pub fn get_item(&self, x: i32, y: i32) -> GridResult<&T> {
        let index = self.index_of(x, y)?;
        Ok(&self.cells[index])
    }

    /// Returns the element at `point`.
    pub fn get_at(&self, point: Point) -> GridResult<&T> {
        self.get_item(point.x, point.y)
    }

    /// Returns a mutable reference to the element at `(x, y)`.
    pub fn get_item_mut(&mut self, x: i32, y: i32) -> GridResult<&mut T> {
        let index = self.index_of(x, y)?;
        Ok(&mut self.cells[index])
    }

    /// Stores `item` at `(x, y)`, dropping the previous value.
    pub fn set_item(&mut self, x: i32, y: i32, item: T) -> GridResult<()> {
        let index = self.index_of(x, y)?;
        self.cells[index] = item;
        Ok(())
    }

    /// Returns the element one step from `(x, y)` in `direction`.
    ///
    /// In bounded mode both the starting cell and the stepped-to cell must be
    /// inside the grid.
    pub fn neighbour(&self, x: i32, y: i32, direction: Direction) -> GridResult<&T> {
        self.index_of(x, y)?;
        let delta = direction.to_delta();
        self.resolve(x as i64 + delta.x as i64, y as i64 + delta.y as i64)
            .map(|(cx, cy)| &self.cells[cy * self.width + cx])
            .ok_or_else(|| {
                self.out_of_range(x.saturating_add(delta.x), y.saturating_add(delta.y))
            })
    }

    fn neighbour_positions<I>(&self, x: i32, y: i32, directions: I) -> GridResult<Vec<Point>>
    where
        I: IntoIterator<Item = Direction>,
    {
        self.index_of(x, y)?;
        let positions = directions
            .into_iter()
            .filter_map(|direction| {
                let delta = direction.to_delta();
                self.resolve(x as i64 + delta.x as i64, y as i64 + delta.y as i64)
            })
            .map(|(cx, cy)| Point::new(cx as i32, cy as i32))
            .collect();
        Ok(positions)
    }

    /// Resolved positions of the edge-adjacent cells, ordered north, west,
    /// east, south.
    ///
    /// With wrapping there are always exactly 4. Without wrapping only the
    /// in-bounds ones are returned, in the same relative order.
    pub fn manhattan_neighbour_positions(&self, x: i32, y: i32) -> GridResult<Vec<Point>> {
        self.neighbour_positions(x, y, Direction::cardinal())
    }

    /// Resolved positions of the 3×3 block around `(x, y)` minus the center,
    /// in row-major order (top row left to right, then the middle row, then
    /// the bottom row).
    ///
    /// With wrapping there are always exactly 8. Without wrapping only the
    /// in-bounds ones are returned, in the same relative order.
    pub fn chessboard_neighbour_positions(&self, x: i32, y: i32) -> GridResult<Vec<Point>> {
        self.neighbour_positions(x, y, Direction::all())
    }

    /// Elements of the edge-adjacent cells, ordered north, west, east, south.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridkit::Bounded2DGrid;
    ///
    /// let mut grid: Bounded2DGrid<i32> = Bounded2DGrid::new(3, 3).unwrap();
    /// assert_eq!(grid.manhattan_neighbours(0, 0).unwrap().len(), 2);
    ///
    /// grid.set_wrapping(true);
    /// assert_eq!(grid.manhattan_neighbours(0, 0).unwrap().len(), 4);
    /// ```
    pub fn manhattan_neighbours(&self, x: i32, y: i32) -> GridResult<Vec<&T>> {
        Ok(self
            .manhattan_neighbour_positions(x, y)?
            .into_iter()
            .map(|p| self.cell(p))
            .collect())
    }

    /// Elements of the corner- and edge-adjacent cells, in the order of
    /// [`Bounded2DGrid::chessboard_neighbour_positions`].
    pub fn chessboard_neighbours(&self, x: i32, y: i32) -> GridResult<Vec<&T>> {
        Ok(self
            .chessboard_neighbour_positions(x, y)?
            .into_iter()
            .map(|p| self.cell(p))
            .collect())
    }

    // Only called with already-resolved positions.
    fn cell(&self, p: Point) -> &T {
        &self.cells[p.y as usize * self.width + p.x as usize]
    }

    /// Exchanges the contents of two cells.
    ///
    /// Both coordinates go through the current addressing mode.
    pub fn swap(
        &mut self,
        source_x: i32,
        source_y: i32,
        target_x: i32,
        target_y: i32,
    ) -> GridResult<()> {
        let source = self.index_of(source_x, source_y)?;
        let target = self.index_of(target_x, target_y)?;
        trace!(
            "Swapping ({}, {}) with ({}, {})",
            source_x,
            source_y,
            target_x,
            target_y
        );
        self.cells.swap(source, target);
        Ok(())
    }

    /// Iterates over every element in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Iterates mutably over every element in row-major order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.cells.iter_mut()
    }

    /// Iterates over every element together with its position.
    pub fn iter_with_positions(&self) -> impl Iterator<Item = (Point, &T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(index, item)| (self.point_at(index), item))
    }
}

impl<T> std::ops::Index<Point> for Bounded2DGrid<T> {
    type Output = T;

    fn index(&self, point: Point) -> &T {
        match self.get_at(point) {
            Ok(item) => item,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> std::ops::Index<(i32, i32)> for Bounded2DGrid<T> {
    type Output = T;

    fn index(&self, (x, y): (i32, i32)) -> &T {
        &self[Point::new(x, y)]
    }
}

impl<'a, T> IntoIterator for &'a Bounded2DGrid<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for Bounded2DGrid<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<T: fmt::Display> fmt::Display for Bounded2DGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.cells.chunks(self.width).enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for (column, item) in row.iter().enumerate() {
                if column > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", item)?;
            }
        }
        Ok(())
    }
}
