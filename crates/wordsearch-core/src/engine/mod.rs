//! # Engine Module
//!
//! The stateful search machinery behind puzzle generation.
//!
//! ## Overview
//!
//! Given a normalized word list, the engine decides how large the grid should be, searches
//! for a placement of every word along one of eight directions, and fills the remaining cells
//! with random letters. All of it runs on a single thread against a wall-clock [`deadline`],
//! with one seeded random generator per run so results are reproducible.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Sizing, search and fill parameters with a validating builder
//! - **Sizing** ([`sizing`]) - Initial grid size and the growth sequence
//! - **Transactions** ([`transaction`]) - A placement stack over the grid with savepoints and rollback
//! - **State Tracking** ([`state`]) - Ranked snapshots of finished size attempts
//! - **Progress Monitoring** ([`progress`]) - Callback based reporting for hosts
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! The search itself lives in the crate-private `tasks` module: conflict checking, placement
//! search with bounded local retry, and letter filling.

pub mod config;
pub mod deadline;
pub mod error;
pub mod progress;
pub mod sizing;
pub mod state;
pub(crate) mod tasks;
pub mod transaction;
pub mod utils;
