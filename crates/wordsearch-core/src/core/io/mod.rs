//! Provides input functionality for raw word lists.
//!
//! Word lists arrive as free-form lines of text, one word per line, optionally prefixed
//! with a marker character that flags the word as mandatory. This module turns such lines
//! into a normalized, deduplicated [`WordList`](crate::core::models::word::WordList) and
//! records a warning for every line it had to drop.

pub mod word_list;
