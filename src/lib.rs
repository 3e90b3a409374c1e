//! # Gridkit
//!
//! A fixed-size 2D grid container with optional toroidal addressing.
//!
//! ## Architecture Overview
//!
//! The crate is organised around a handful of small building blocks:
//!
//! - **Grid**: [`Bounded2DGrid`] stores a `width × height` block of cells and
//!   answers edge-adjacent (Manhattan) and corner-adjacent (Chessboard)
//!   neighbour queries, in either bounded or wrapping mode
//! - **Coordinates**: [`Point`] and [`Direction`] describe cells and unit steps
//! - **Configuration**: [`GridConfig`] captures grid dimensions and the
//!   addressing mode in a serializable form
//! - **Utilities**: [`ListExt`] adds randomized and rotational helpers to `Vec`
//!
//! ## Wrapping
//!
//! With wrapping enabled every `i32` coordinate is valid: indices past an edge
//! re-enter from the opposite edge using floor modulo, so `-1` on a grid of
//! width 5 addresses column 4.

pub mod grid;
pub mod utils;

pub use grid::*;
pub use utils::*;

/// Core error type for grid operations.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A constructor or configuration argument is unusable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Coordinates fall outside a non-wrapping grid
    #[error("Index out of range: ({x}, {y}) is outside a {width}x{height} grid")]
    IndexOutOfRange {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}

/// Result type used throughout the gridkit codebase.
pub type GridResult<T> = Result<T, GridError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Grid configuration constants.
pub mod config {
    /// Default grid width in cells
    pub const DEFAULT_GRID_WIDTH: usize = 16;

    /// Default grid height in cells
    pub const DEFAULT_GRID_HEIGHT: usize = 16;

    /// Largest dimension addressable with `i32` coordinates
    pub const MAX_GRID_DIMENSION: usize = i32::MAX as usize;
}
