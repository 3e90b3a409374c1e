//! # Utilities Module
//!
//! General-purpose helpers that sit alongside the grid.

pub mod list;

pub use list::*;
