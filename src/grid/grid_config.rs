//! # Grid Configuration
//!
//! Serializable settings describing a grid's dimensions and addressing mode.

use crate::config::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, MAX_GRID_DIMENSION};
use crate::{GridError, GridResult};
use serde::{Deserialize, Serialize};

/// Configuration for building a [`crate::Bounded2DGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Number of columns
    pub width: usize,
    /// Number of rows
    pub height: usize,
    /// Whether coordinates wrap around the edges
    #[serde(default)]
    pub wrapping: bool,
}

impl GridConfig {
    /// Creates a bounded configuration with the given dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridkit::GridConfig;
    ///
    /// let config = GridConfig::new(8, 4).with_wrapping(true);
    /// assert_eq!(config.area(), 32);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            wrapping: false,
        }
    }

    /// Creates a small configuration for tests.
    pub fn for_testing() -> Self {
        Self::new(3, 3)
    }

    pub fn with_wrapping(mut self, wrapping: bool) -> Self {
        self.wrapping = wrapping;
        self
    }

    /// Number of cells a grid built from this configuration holds.
    pub fn area(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Checks that the dimensions describe a buildable grid.
    pub fn validate(&self) -> GridResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::InvalidArgument(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > MAX_GRID_DIMENSION || self.height > MAX_GRID_DIMENSION {
            return Err(GridError::InvalidArgument(format!(
                "grid dimension exceeds {}",
                MAX_GRID_DIMENSION
            )));
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_WIDTH, DEFAULT_GRID_HEIGHT)
    }
}
