//! Computational units of a generation run.
//!
//! Each submodule performs one step of the search: validating a candidate against the grid,
//! searching placements for a whole word list at one grid size, and filling the leftover
//! cells with random letters.

pub mod conflict_check;
pub mod letter_fill;
pub mod placement_search;
