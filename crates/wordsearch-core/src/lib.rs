//! # Word Search Core Library
//!
//! A time-budgeted generation engine for word search puzzles. Given a list of words, some
//! mandatory and some optional, and optional grid-size constraints, it produces a rectangular
//! letter grid in which every mandatory word (and as many optional words as possible) can be
//! read along one of eight directions, with the remaining cells filled with random letters.
//!
//! ## Architectural Philosophy
//!
//! The library is organized in three layers, each depending only on the ones below it.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Word`, `Grid`, `Direction`,
//!   `PuzzleResult`) and the parsing of raw word lists into normalized words.
//!
//! - **[`engine`]: The Logic Core.** The stateful search machinery: configuration, the
//!   deadline, grid sizing, transactional placement on the grid, and the search tasks
//!   (conflict checking, placement search, letter filling).
//!
//! - **[`workflows`]: The Public API.** Complete procedures built from the engine, such as
//!   generating a puzzle from raw lines or verifying a finished puzzle.

pub mod core;
pub mod engine;
pub mod workflows;
