use crate::core::models::grid::UNFILLED_GLYPH;
use crate::core::models::puzzle::{self, PuzzleResult};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// A single broken invariant found in a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationIssue {
    #[error("grid has {actual} row(s), expected {expected}")]
    RowCount { expected: usize, actual: usize },

    #[error("row {row} has {actual} cell(s), expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("cell ({row}, {col}) holds '{found}', which is not a letter")]
    NotALetter { row: usize, col: usize, found: char },

    #[error("placement of '{word}' has invalid step ({dr}, {dc})")]
    InvalidDirection { word: String, dr: isize, dc: isize },

    #[error("placement of '{word}' leaves the {rows}x{cols} grid")]
    OutOfBounds {
        word: String,
        rows: usize,
        cols: usize,
    },

    #[error("placement of '{word}' expects '{expected}' at ({row}, {col}) but the grid holds '{found}'")]
    LetterMismatch {
        word: String,
        row: usize,
        col: usize,
        expected: char,
        found: char,
    },

    #[error("'{word}' is listed as both placed and unplaced")]
    PlacedAndUnplaced { word: String },

    #[error("'{word}' is listed as placed but has no placement")]
    MissingPlacement { word: String },

    #[error("'{word}' has a placement but is not listed as placed")]
    UnlistedPlacement { word: String },

    #[error("overlap score is {reported}, but the placements give {actual}")]
    OverlapScore { reported: usize, actual: usize },
}

/// Every issue found while verifying one puzzle, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    pub issues: Vec<VerificationIssue>,
}

impl VerificationReport {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.issues.is_empty() {
            return write!(f, "no issues found");
        }
        writeln!(f, "{} issue(s) found:", self.issues.len())?;
        for issue in &self.issues {
            writeln!(f, "  - {}", issue)?;
        }
        Ok(())
    }
}

/// Checks a finished puzzle, for example one read back from JSON, against its own contract.
///
/// The grid must be `rows x cols` letters, every placement must stay inside it with a unit
/// step and agree with the grid letter by letter, and the placed and unplaced word lists must
/// be disjoint and consistent with the placements.
#[instrument(skip_all, name = "verification_workflow")]
pub fn run(puzzle: &PuzzleResult) -> VerificationReport {
    let mut issues = Vec::new();

    let cells: Vec<Vec<char>> = puzzle.grid.iter().map(|row| row.chars().collect()).collect();
    check_grid_shape(puzzle, &cells, &mut issues);
    check_placements(puzzle, &cells, &mut issues);
    check_word_lists(puzzle, &mut issues);

    let actual = puzzle::overlap_score(puzzle.rows, puzzle.cols, &puzzle.placements);
    if actual != puzzle.overlap_score {
        issues.push(VerificationIssue::OverlapScore {
            reported: puzzle.overlap_score,
            actual,
        });
    }

    if issues.is_empty() {
        info!(rows = puzzle.rows, cols = puzzle.cols, "Puzzle verified.");
    } else {
        warn!(issues = issues.len(), "Puzzle failed verification.");
    }
    VerificationReport { issues }
}

fn check_grid_shape(puzzle: &PuzzleResult, cells: &[Vec<char>], issues: &mut Vec<VerificationIssue>) {
    if cells.len() != puzzle.rows {
        issues.push(VerificationIssue::RowCount {
            expected: puzzle.rows,
            actual: cells.len(),
        });
    }
    for (row, line) in cells.iter().enumerate() {
        if line.len() != puzzle.cols {
            issues.push(VerificationIssue::RaggedRow {
                row,
                expected: puzzle.cols,
                actual: line.len(),
            });
        }
        for (col, &found) in line.iter().enumerate() {
            if found == UNFILLED_GLYPH || !found.is_alphabetic() {
                issues.push(VerificationIssue::NotALetter { row, col, found });
            }
        }
    }
}

fn check_placements(puzzle: &PuzzleResult, cells: &[Vec<char>], issues: &mut Vec<VerificationIssue>) {
    for placement in &puzzle.placements {
        if placement.direction().is_none() {
            issues.push(VerificationIssue::InvalidDirection {
                word: placement.word.clone(),
                dr: placement.dr,
                dc: placement.dc,
            });
            continue;
        }

        let in_bounds = |r: isize, c: isize| {
            r >= 0 && c >= 0 && (r as usize) < puzzle.rows && (c as usize) < puzzle.cols
        };
        if !placement.cells().all(|((r, c), _)| in_bounds(r, c)) {
            issues.push(VerificationIssue::OutOfBounds {
                word: placement.word.clone(),
                rows: puzzle.rows,
                cols: puzzle.cols,
            });
            continue;
        }

        for ((r, c), expected) in placement.cells() {
            let (row, col) = (r as usize, c as usize);
            // Missing cells are already reported as a shape issue.
            let Some(&found) = cells.get(row).and_then(|line| line.get(col)) else {
                continue;
            };
            if found != expected {
                issues.push(VerificationIssue::LetterMismatch {
                    word: placement.word.clone(),
                    row,
                    col,
                    expected,
                    found,
                });
            }
        }
    }
}

fn check_word_lists(puzzle: &PuzzleResult, issues: &mut Vec<VerificationIssue>) {
    let placed: HashSet<&str> = puzzle.placed_words.iter().map(String::as_str).collect();
    let with_placement: HashSet<&str> = puzzle.placements.iter().map(|p| p.word.as_str()).collect();

    for word in &puzzle.unplaced_words {
        if placed.contains(word.as_str()) {
            issues.push(VerificationIssue::PlacedAndUnplaced { word: word.clone() });
        }
    }
    for word in &puzzle.placed_words {
        if !with_placement.contains(word.as_str()) {
            issues.push(VerificationIssue::MissingPlacement { word: word.clone() });
        }
    }
    for placement in &puzzle.placements {
        if !placed.contains(placement.word.as_str()) {
            issues.push(VerificationIssue::UnlistedPlacement {
                word: placement.word.clone(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::direction::Direction;
    use crate::core::models::puzzle::Placement;

    fn puzzle() -> PuzzleResult {
        PuzzleResult {
            rows: 3,
            cols: 3,
            grid: vec!["CAT".into(), "XOY".into(), "PZW".into()],
            placements: vec![
                Placement::new("CAT", 0, 0, Direction::Right),
                Placement::new("TOP", 0, 2, Direction::DownLeft),
            ],
            placed_words: vec!["CAT".into(), "TOP".into()],
            unplaced_words: vec!["EMU".into()],
            overlap_score: 1,
            timed_out: false,
            seed: 0,
        }
    }

    #[test]
    fn consistent_puzzle_has_no_issues() {
        let report = run(&puzzle());
        assert!(report.is_valid(), "{}", report);
        assert_eq!(report.to_string(), "no issues found");
    }

    #[test]
    fn detects_ragged_and_unfilled_grid() {
        let mut p = puzzle();
        p.grid[1] = "X.".into();
        let issues = run(&p).issues;
        assert!(issues.contains(&VerificationIssue::RaggedRow {
            row: 1,
            expected: 3,
            actual: 2
        }));
        assert!(issues.contains(&VerificationIssue::NotALetter {
            row: 1,
            col: 1,
            found: '.'
        }));
    }

    #[test]
    fn detects_missing_rows() {
        let mut p = puzzle();
        p.grid.pop();
        assert!(run(&p).issues.contains(&VerificationIssue::RowCount {
            expected: 3,
            actual: 2
        }));
    }

    #[test]
    fn detects_bad_direction_and_bounds() {
        let mut p = puzzle();
        p.placements[0].dr = 0;
        p.placements[0].dc = 0;
        p.placements[1] = Placement::new("TOP", 0, 2, Direction::Right);
        let issues = run(&p).issues;
        assert!(issues.contains(&VerificationIssue::InvalidDirection {
            word: "CAT".into(),
            dr: 0,
            dc: 0
        }));
        assert!(issues.contains(&VerificationIssue::OutOfBounds {
            word: "TOP".into(),
            rows: 3,
            cols: 3
        }));
    }

    #[test]
    fn detects_letter_mismatch() {
        let mut p = puzzle();
        p.grid[0] = "COT".into();
        let issues = run(&p).issues;
        assert!(issues.contains(&VerificationIssue::LetterMismatch {
            word: "CAT".into(),
            row: 0,
            col: 1,
            expected: 'A',
            found: 'O'
        }));
    }

    #[test]
    fn detects_inconsistent_word_lists() {
        let mut p = puzzle();
        p.unplaced_words.push("CAT".into());
        p.placed_words.push("EMU".into());
        p.placed_words.retain(|w| w != "TOP");
        let issues = run(&p).issues;
        assert!(issues.contains(&VerificationIssue::PlacedAndUnplaced { word: "CAT".into() }));
        assert!(issues.contains(&VerificationIssue::PlacedAndUnplaced { word: "EMU".into() }));
        assert!(issues.contains(&VerificationIssue::MissingPlacement { word: "EMU".into() }));
        assert!(issues.contains(&VerificationIssue::UnlistedPlacement { word: "TOP".into() }));
    }

    #[test]
    fn detects_wrong_overlap_score() {
        let mut p = puzzle();
        p.overlap_score = 0;
        assert_eq!(
            run(&p).issues,
            vec![VerificationIssue::OverlapScore {
                reported: 0,
                actual: 1
            }]
        );
    }

    #[test]
    fn report_lists_every_issue() {
        let mut p = puzzle();
        p.grid[0] = "COT".into();
        p.overlap_score = 5;
        let text = run(&p).to_string();
        assert!(text.starts_with("2 issue(s) found:"));
        assert!(text.contains("expects 'A' at (0, 1)"));
    }
}
