use super::sizing::GridSize;
use super::transaction::PlacementBoard;
use super::utils::query::Candidate;
use crate::core::models::grid::Grid;
use crate::core::models::word::WordId;
use std::cmp::{Ordering, Reverse};

/// A frozen copy of a board at the end of one size attempt.
///
/// Snapshots order by quality: more mandatory words placed is better, then more words placed
/// in total, then a smaller grid area. The greatest snapshot across all attempts is the one
/// that gets filled and returned.
#[derive(Debug, Clone)]
pub struct SearchSnapshot {
    pub size: GridSize,
    pub grid: Grid,
    pub placements: Vec<(WordId, Candidate)>,
    pub mandatory_placed: usize,
    pub total_placed: usize,
}

impl SearchSnapshot {
    pub fn capture(board: &PlacementBoard<'_>) -> Self {
        let words = board.words();
        let placements: Vec<(WordId, Candidate)> = board
            .placements()
            .iter()
            .map(|c| (c.word, c.candidate))
            .collect();
        let mandatory_placed = placements
            .iter()
            .filter(|(id, _)| words[*id].is_mandatory())
            .count();
        Self {
            size: board.size(),
            grid: board.grid().clone(),
            total_placed: placements.len(),
            placements,
            mandatory_placed,
        }
    }

    pub fn placement_of(&self, word: WordId) -> Option<Candidate> {
        self.placements
            .iter()
            .find(|(id, _)| *id == word)
            .map(|&(_, candidate)| candidate)
    }

    fn rank(&self) -> (usize, usize, Reverse<usize>) {
        (
            self.mandatory_placed,
            self.total_placed,
            Reverse(self.size.area()),
        )
    }
}

impl PartialEq for SearchSnapshot {
    fn eq(&self, other: &Self) -> bool {
        self.rank() == other.rank()
    }
}
impl Eq for SearchSnapshot {}

impl PartialOrd for SearchSnapshot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchSnapshot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}
