use super::error::EngineError;
use super::sizing::GridSize;
use super::tasks::conflict_check;
use super::utils::query::Candidate;
use crate::core::models::grid::{Grid, Position};
use crate::core::models::word::{WordId, WordList};

/// One committed word together with the cells it wrote itself.
///
/// Cells the word only shares with earlier placements are not listed, so undoing it leaves
/// those letters in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committed {
    pub word: WordId,
    pub candidate: Candidate,
    written: Vec<Position>,
}

/// Height of the placement stack at some point in time.
pub type Savepoint = usize;

/// The grid of one size attempt and the stack of placements committed onto it.
///
/// Every mutation of the grid goes through this type, which keeps the grid equal to the
/// result of replaying the stack on an empty grid of the same size. Placements are undone in
/// strict LIFO order.
#[derive(Debug, Clone)]
pub struct PlacementBoard<'w> {
    words: &'w WordList,
    size: GridSize,
    grid: Grid,
    stack: Vec<Committed>,
    placed: Vec<bool>,
}

impl<'w> PlacementBoard<'w> {
    pub fn new(words: &'w WordList, size: GridSize) -> Self {
        Self {
            words,
            size,
            grid: Grid::new(size.rows, size.cols),
            stack: Vec::new(),
            placed: vec![false; words.len()],
        }
    }

    pub fn words(&self) -> &'w WordList {
        self.words
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn placements(&self) -> &[Committed] {
        &self.stack
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn is_placed(&self, word: WordId) -> bool {
        self.placed.get(word).copied().unwrap_or(false)
    }

    /// Writes `word` at `candidate` and pushes it onto the stack.
    ///
    /// Returns the number of letters shared with earlier placements. Fails without touching
    /// the grid if the word is unknown, already placed, or conflicts with the grid.
    pub fn commit(&mut self, word: WordId, candidate: Candidate) -> Result<usize, EngineError> {
        let entry = self.words.get(word).ok_or_else(|| {
            EngineError::Internal(format!("Word id {} is not part of the word list", word))
        })?;
        if self.is_placed(word) {
            return Err(EngineError::Internal(format!(
                "Word '{}' is already committed",
                entry
            )));
        }
        let letters = entry.letters();
        let overlap = conflict_check::check(&self.grid, letters, candidate).ok_or_else(|| {
            EngineError::Internal(format!(
                "Placement of '{}' at {:?} {} conflicts with the grid",
                entry, candidate.start, candidate.direction
            ))
        })?;

        let mut written = Vec::with_capacity(letters.len() - overlap);
        for (k, &letter) in letters.iter().enumerate() {
            let pos = self
                .grid
                .step(candidate.start, candidate.direction, k)
                .ok_or_else(|| EngineError::Internal("Checked placement left the grid".into()))?;
            if self.grid.is_unfilled(pos) {
                self.grid.set(pos, letter);
                written.push(pos);
            }
        }

        self.placed[word] = true;
        self.stack.push(Committed {
            word,
            candidate,
            written,
        });
        Ok(overlap)
    }

    /// Removes the most recent placement and clears the cells it wrote.
    pub fn undo_last(&mut self) -> Option<Committed> {
        let last = self.stack.pop()?;
        for &pos in &last.written {
            self.grid.clear(pos);
        }
        self.placed[last.word] = false;
        Some(last)
    }

    pub fn savepoint(&self) -> Savepoint {
        self.stack.len()
    }

    /// Undoes placements until the stack is back at `savepoint`.
    ///
    /// The removed placements are returned in their original commit order, ready to be passed
    /// to [`PlacementBoard::restore`].
    pub fn rollback_to(&mut self, savepoint: Savepoint) -> Vec<Committed> {
        let mut undone = Vec::with_capacity(self.stack.len().saturating_sub(savepoint));
        while self.stack.len() > savepoint {
            if let Some(entry) = self.undo_last() {
                undone.push(entry);
            }
        }
        undone.reverse();
        undone
    }

    /// Re-commits placements removed by [`PlacementBoard::rollback_to`] at their old candidates.
    pub fn restore(&mut self, undone: &[Committed]) -> Result<(), EngineError> {
        for entry in undone {
            self.commit(entry.word, entry.candidate)?;
        }
        Ok(())
    }

    /// Runs `action` and keeps its placements only if it returns `Ok(true)`.
    ///
    /// On `Ok(false)` or an error every placement made since the call is undone.
    pub fn transaction<F>(&mut self, action: F) -> Result<bool, EngineError>
    where
        F: FnOnce(&mut Self) -> Result<bool, EngineError>,
    {
        let savepoint = self.savepoint();
        match action(self) {
            Ok(true) => Ok(true),
            Ok(false) => {
                self.rollback_to(savepoint);
                Ok(false)
            }
            Err(e) => {
                self.rollback_to(savepoint);
                Err(e)
            }
        }
    }
}
