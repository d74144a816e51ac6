use super::direction::Direction;
use serde::{Deserialize, Serialize};

/// A committed word placement in the output contract: start cell plus step vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub word: String,
    pub row: usize,
    pub col: usize,
    pub dr: isize,
    pub dc: isize,
}

impl Placement {
    pub fn new(word: impl Into<String>, row: usize, col: usize, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            word: word.into(),
            row,
            col,
            dr,
            dc,
        }
    }

    /// The placement's direction, or `None` if `(dr, dc)` is not a valid unit step.
    pub fn direction(&self) -> Option<Direction> {
        Direction::from_delta(self.dr, self.dc)
    }

    /// Signed coordinates of every cell the word covers, paired with the expected letter.
    pub fn cells(&self) -> impl Iterator<Item = ((isize, isize), char)> + '_ {
        let (row, col) = (self.row as isize, self.col as isize);
        self.word
            .chars()
            .enumerate()
            .map(move |(k, ch)| ((row + k as isize * self.dr, col + k as isize * self.dc), ch))
    }
}

/// The output of one generation run.
///
/// `placements`, `placed_words` and `unplaced_words` follow the original input order of the
/// words. Together, `placed_words` and `unplaced_words` partition the deduplicated input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleResult {
    pub rows: usize,
    pub cols: usize,
    pub grid: Vec<String>,
    pub placements: Vec<Placement>,
    pub placed_words: Vec<String>,
    pub unplaced_words: Vec<String>,
    #[serde(default)]
    pub overlap_score: usize,
    #[serde(default)]
    pub timed_out: bool,
    #[serde(default)]
    pub seed: u64,
}

impl PuzzleResult {
    pub fn is_fully_placed(&self) -> bool {
        self.unplaced_words.is_empty()
    }
}

/// Sum over all cells covered more than once of `(coverage - 1)`.
///
/// Cells outside `rows x cols` are ignored.
pub fn overlap_score(rows: usize, cols: usize, placements: &[Placement]) -> usize {
    let mut coverage = vec![0usize; rows * cols];
    for placement in placements {
        for ((r, c), _) in placement.cells() {
            if r >= 0 && c >= 0 && (r as usize) < rows && (c as usize) < cols {
                coverage[r as usize * cols + c as usize] += 1;
            }
        }
    }
    coverage.iter().filter(|&&n| n > 1).map(|&n| n - 1).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_walk_from_start_along_step() {
        let placement = Placement::new("CAT", 2, 2, Direction::UpLeft);
        let cells: Vec<_> = placement.cells().collect();
        assert_eq!(
            cells,
            vec![((2, 2), 'C'), ((1, 1), 'A'), ((0, 0), 'T')]
        );
        assert_eq!(placement.direction(), Some(Direction::UpLeft));
    }

    #[test]
    fn invalid_step_has_no_direction() {
        let placement = Placement {
            word: "NO".into(),
            row: 0,
            col: 0,
            dr: 0,
            dc: 0,
        };
        assert_eq!(placement.direction(), None);
    }

    #[test]
    fn overlap_score_counts_shared_cells() {
        let placements = vec![
            Placement::new("CAT", 0, 0, Direction::Right),
            Placement::new("CAR", 0, 0, Direction::Down),
            Placement::new("TEN", 0, 2, Direction::Down),
        ];
        // (0,0) shared by CAT/CAR, (0,2) shared by CAT/TEN.
        assert_eq!(overlap_score(3, 3, &placements), 2);
    }

    #[test]
    fn overlap_score_of_disjoint_placements_is_zero() {
        let placements = vec![
            Placement::new("AB", 0, 0, Direction::Right),
            Placement::new("CD", 1, 0, Direction::Right),
        ];
        assert_eq!(overlap_score(2, 2, &placements), 0);
    }

    #[test]
    fn json_uses_contract_field_names() {
        let result = PuzzleResult {
            rows: 1,
            cols: 2,
            grid: vec!["HI".into()],
            placements: vec![Placement::new("HI", 0, 0, Direction::Right)],
            placed_words: vec!["HI".into()],
            unplaced_words: vec![],
            overlap_score: 0,
            timed_out: false,
            seed: 7,
        };
        let value = serde_json::to_value(&result).unwrap();
        for key in ["grid", "placements", "placed_words", "unplaced_words"] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        let placement = &value["placements"][0];
        assert_eq!(placement["dr"], 0);
        assert_eq!(placement["dc"], 1);
    }

    #[test]
    fn additive_fields_default_when_absent() {
        let json = r#"{
            "rows": 1, "cols": 1, "grid": ["A"],
            "placements": [], "placed_words": [], "unplaced_words": ["B"]
        }"#;
        let result: PuzzleResult = serde_json::from_str(json).unwrap();
        assert!(!result.timed_out);
        assert_eq!(result.overlap_score, 0);
        assert!(!result.is_fully_placed());
    }
}
