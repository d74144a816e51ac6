use super::direction::Direction;
use std::fmt;

/// Character used when rendering a cell that has not been filled yet.
pub const UNFILLED_GLYPH: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A rectangular, row-major letter grid.
///
/// Each cell is either a placed letter or unfilled (`None`) until the letter filler runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Creates an empty grid. Both dimensions must be at least one.
    pub fn new(rows: usize, cols: usize) -> Self {
        debug_assert!(rows >= 1 && cols >= 1, "grid dimensions must be positive");
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    #[inline]
    fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    /// Returns the letter at `pos`, or `None` if the cell is unfilled or out of bounds.
    #[inline]
    pub fn get(&self, pos: Position) -> Option<char> {
        if self.contains(pos) {
            self.cells[self.index(pos)]
        } else {
            None
        }
    }

    #[inline]
    pub fn is_unfilled(&self, pos: Position) -> bool {
        self.contains(pos) && self.cells[self.index(pos)].is_none()
    }

    /// Writes `letter` into the cell at `pos`. Out-of-bounds writes are ignored.
    #[inline]
    pub fn set(&mut self, pos: Position, letter: char) {
        if self.contains(pos) {
            let idx = self.index(pos);
            self.cells[idx] = Some(letter);
        }
    }

    #[inline]
    pub fn clear(&mut self, pos: Position) {
        if self.contains(pos) {
            let idx = self.index(pos);
            self.cells[idx] = None;
        }
    }

    /// The cell reached after `steps` moves from `start` along `direction`, if it lies in the grid.
    #[inline]
    pub fn step(&self, start: Position, direction: Direction, steps: usize) -> Option<Position> {
        let (dr, dc) = direction.delta();
        let row = start.row as isize + dr * steps as isize;
        let col = start.col as isize + dc * steps as isize;
        if row < 0 || col < 0 {
            return None;
        }
        let pos = Position::new(row as usize, col as usize);
        self.contains(pos).then_some(pos)
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn unfilled_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(idx, _)| Position::new(idx / self.cols, idx % self.cols))
    }

    /// Renders each row as a string, using [`UNFILLED_GLYPH`] for unfilled cells.
    pub fn to_row_strings(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().map(|c| c.unwrap_or(UNFILLED_GLYPH)).collect())
            .collect()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: Vec<String> = row
                .iter()
                .map(|c| c.unwrap_or(UNFILLED_GLYPH).to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
