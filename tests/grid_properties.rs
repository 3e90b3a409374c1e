//! Property tests for grid addressing, swap, and iteration.

use gridkit::{Bounded2DGrid, Point};
use proptest::prelude::*;

fn numbered(width: usize, height: usize) -> Bounded2DGrid<usize> {
    let mut grid = Bounded2DGrid::new(width, height).unwrap();
    for (index, cell) in grid.iter_mut().enumerate() {
        *cell = index;
    }
    grid
}

fn dimensions() -> impl Strategy<Value = (usize, usize)> {
    (1usize..12, 1usize..12)
}

proptest! {
    #[test]
    fn read_after_write((width, height) in dimensions(), x in 0i32..12, y in 0i32..12, value in any::<u64>()) {
        let mut grid: Bounded2DGrid<u64> = Bounded2DGrid::new(width, height).unwrap();
        let x = x % width as i32;
        let y = y % height as i32;
        grid.set_item(x, y, value).unwrap();
        prop_assert_eq!(grid.get_item(x, y), Ok(&value));
    }

    #[test]
    fn wrapping_matches_floor_modulo((width, height) in dimensions(), x in any::<i32>(), y in any::<i32>()) {
        let mut grid = numbered(width, height);
        grid.set_wrapping(true);
        let wx = x.rem_euclid(width as i32);
        let wy = y.rem_euclid(height as i32);
        let expected = wy as usize * width + wx as usize;
        prop_assert_eq!(grid.get_item(x, y), Ok(&expected));
    }

    #[test]
    fn wrapping_neighbour_counts_are_fixed((width, height) in dimensions(), x in any::<i32>(), y in any::<i32>()) {
        let mut grid = numbered(width, height);
        grid.set_wrapping(true);
        prop_assert_eq!(grid.manhattan_neighbours(x, y).unwrap().len(), 4);
        prop_assert_eq!(grid.chessboard_neighbours(x, y).unwrap().len(), 8);
    }

    #[test]
    fn bounded_neighbours_are_adjacent_and_in_bounds((width, height) in dimensions(), x in 0i32..12, y in 0i32..12) {
        let grid = numbered(width, height);
        let center = Point::new(x % width as i32, y % height as i32);

        let manhattan = grid.manhattan_neighbour_positions(center.x, center.y).unwrap();
        prop_assert!(manhattan.len() <= 4);
        for p in &manhattan {
            prop_assert!(grid.contains(p.x, p.y));
            prop_assert_eq!(p.manhattan_distance(center), 1);
        }

        let chessboard = grid.chessboard_neighbour_positions(center.x, center.y).unwrap();
        prop_assert!(chessboard.len() <= 8);
        for p in &chessboard {
            prop_assert!(grid.contains(p.x, p.y));
            prop_assert_eq!(p.chessboard_distance(center), 1);
        }
        prop_assert!(chessboard.len() >= manhattan.len());
    }

    #[test]
    fn swap_twice_restores_grid(
        (width, height) in dimensions(),
        wrapping in any::<bool>(),
        sx in -20i32..20, sy in -20i32..20, tx in -20i32..20, ty in -20i32..20
    ) {
        let mut original = numbered(width, height);
        original.set_wrapping(wrapping);
        let mut grid = original.clone();

        if grid.swap(sx, sy, tx, ty).is_ok() {
            grid.swap(sx, sy, tx, ty).unwrap();
        }
        prop_assert_eq!(grid, original);
    }

    #[test]
    fn iteration_yields_every_cell_once((width, height) in dimensions()) {
        let grid = numbered(width, height);
        let values: Vec<usize> = grid.iter().copied().collect();
        prop_assert_eq!(values.len(), width * height);
        prop_assert_eq!(values, (0..width * height).collect::<Vec<_>>());
    }

    #[test]
    fn fill_overwrites_every_cell((width, height) in dimensions(), value in any::<i16>()) {
        let mut grid: Bounded2DGrid<i16> = Bounded2DGrid::new(width, height).unwrap();
        grid.fill(value);
        for (p, item) in grid.iter_with_positions() {
            prop_assert_eq!(item, &value);
            prop_assert_eq!(grid.get_at(p), Ok(&value));
        }
    }
}
