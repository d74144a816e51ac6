use super::config::SizingConfig;
use crate::core::models::word::{WordId, WordList};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

impl GridSize {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    pub const fn square(side: usize) -> Self {
        Self {
            rows: side,
            cols: side,
        }
    }

    pub const fn area(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether a word of `len` letters fits in at least one direction.
    pub const fn fits(&self, len: usize) -> bool {
        len <= self.rows || len <= self.cols
    }
}

impl fmt::Display for GridSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Chooses the starting grid size and the growth sequence for one run.
///
/// With an explicit ceiling the size is fixed and never grows. Otherwise the grid starts at
/// a square derived from the word list and grows by `growth_step` up to `max_side`.
#[derive(Debug, Clone)]
pub struct GridSizer {
    initial: GridSize,
    limit: GridSize,
    step: usize,
    fixed: bool,
}

impl GridSizer {
    pub fn new(words: &WordList, config: &SizingConfig) -> Self {
        match config.ceiling {
            Some(ceiling) => {
                let size = GridSize::new(ceiling.rows, ceiling.cols);
                Self {
                    initial: size,
                    limit: size,
                    step: 0,
                    fixed: true,
                }
            }
            None => {
                let side = derive_initial_side(words.longest_len(), words.total_letters(), config);
                Self {
                    initial: GridSize::square(side),
                    limit: GridSize::square(config.max_side.max(side)),
                    step: config.growth_step,
                    fixed: false,
                }
            }
        }
    }

    pub fn initial(&self) -> GridSize {
        self.initial
    }

    /// The largest size this sizer can ever produce.
    pub fn limit(&self) -> GridSize {
        self.limit
    }

    pub fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// The next size after `current`, or `None` once growth is exhausted or disallowed.
    pub fn grow(&self, current: GridSize) -> Option<GridSize> {
        if self.fixed || (current.rows >= self.limit.rows && current.cols >= self.limit.cols) {
            return None;
        }
        Some(GridSize::new(
            (current.rows + self.step).min(self.limit.rows),
            (current.cols + self.step).min(self.limit.cols),
        ))
    }

    /// Words that cannot fit in any direction even at the largest reachable size.
    pub fn unplaceable(&self, words: &WordList) -> Vec<WordId> {
        words
            .iter()
            .filter(|(_, word)| !self.limit.fits(word.len()))
            .map(|(id, _)| id)
            .collect()
    }
}

/// `clamp(max(longest, ceil(sqrt(total * k)), min_side), 1, max_side)`.
fn derive_initial_side(longest: usize, total_letters: usize, config: &SizingConfig) -> usize {
    let packed = (total_letters as f64 * config.packing_factor).sqrt().ceil() as usize;
    longest
        .max(packed)
        .max(config.min_side)
        .min(config.max_side)
        .max(1)
}
