//! # Core Models Module
//!
//! Fundamental data structures used to describe a word search puzzle.
//!
//! ## Key Components
//!
//! - [`word`] - A normalized word and the ordered, deduplicated word list
//! - [`direction`] - The eight reading directions of a word search
//! - [`grid`] - The rectangular letter grid with unfilled-cell sentinels
//! - [`puzzle`] - The serializable output contract of a generation run
//!
//! ## Usage
//!
//! ```
//! use wordsearch::core::models::{direction::Direction, grid::{Grid, Position}};
//!
//! let mut grid = Grid::new(3, 4);
//! grid.set(Position::new(1, 2), 'A');
//! assert_eq!(grid.get(Position::new(1, 2)), Some('A'));
//! assert_eq!(Direction::DownRight.delta(), (1, 1));
//! ```

pub mod direction;
pub mod grid;
pub mod puzzle;
pub mod word;
