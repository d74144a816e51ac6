//! # Workflows Module
//!
//! High-level entry points that run a complete procedure on top of the engine.
//!
//! ## Overview
//!
//! Workflows are what hosts such as the command-line tool call. Each one takes plain inputs,
//! drives the engine through its phases while reporting progress, and returns a finished
//! value that needs no further processing.
//!
//! ## Architecture
//!
//! - **Generation Workflow** ([`generate`]) - Normalizes raw word lines, plans grid sizes,
//!   searches placements under the time budget, fills the leftover cells and assembles the
//!   [`PuzzleResult`](crate::core::models::puzzle::PuzzleResult).
//! - **Verification Workflow** ([`verify`]) - Checks a finished puzzle against its own
//!   contract and reports every broken invariant.

pub mod generate;
pub mod verify;
