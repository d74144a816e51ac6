//! # Core Module
//!
//! Stateless building blocks shared by the engine and the workflows.
//!
//! - [`models`] - Words, directions, grids and the finished puzzle representation
//! - [`io`] - Parsing raw word lists into normalized, deduplicated words

pub mod io;
pub mod models;
