//! Utility functions for the engine module.
//!
//! This module provides helpers that support the search tasks: enumerating the candidate
//! placements of a word on a grid, and the seeded random sampling used for shuffling
//! candidates and filling cells.

pub mod query;
pub mod sampling;
