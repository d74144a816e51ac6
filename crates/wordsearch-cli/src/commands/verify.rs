use crate::cli::VerifyArgs;
use crate::error::{CliError, Result};
use tracing::{info, warn};
use wordsearch::{core::models::puzzle::PuzzleResult, workflows};

pub fn run(args: VerifyArgs) -> Result<()> {
    info!("Loading puzzle from {:?}", &args.input);
    let content = std::fs::read_to_string(&args.input)?;
    let puzzle: PuzzleResult =
        serde_json::from_str(&content).map_err(|e| CliError::FileParsing {
            path: args.input.clone(),
            source: e.into(),
        })?;

    let report = workflows::verify::run(&puzzle);
    println!("{}", report);

    if report.is_valid() {
        info!("Puzzle {:?} passed verification.", &args.input);
        Ok(())
    } else {
        warn!(
            "Puzzle {:?} failed verification with {} issue(s).",
            &args.input,
            report.issues.len()
        );
        Err(CliError::Verification(report.issues.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;
    use wordsearch::core::models::{direction::Direction, puzzle::Placement};

    fn write_puzzle(dir: &std::path::Path, puzzle: &PuzzleResult) -> PathBuf {
        let path = dir.join("puzzle.json");
        fs::write(&path, serde_json::to_string(puzzle).unwrap()).unwrap();
        path
    }

    fn valid_puzzle() -> PuzzleResult {
        PuzzleResult {
            rows: 2,
            cols: 2,
            grid: vec!["HI".into(), "QZ".into()],
            placements: vec![Placement::new("HI", 0, 0, Direction::Right)],
            placed_words: vec!["HI".into()],
            unplaced_words: vec![],
            overlap_score: 0,
            timed_out: false,
            seed: 1,
        }
    }

    #[test]
    fn accepts_a_consistent_puzzle() {
        let dir = tempdir().unwrap();
        let input = write_puzzle(dir.path(), &valid_puzzle());
        assert!(run(VerifyArgs { input }).is_ok());
    }

    #[test]
    fn reports_the_number_of_issues() {
        let dir = tempdir().unwrap();
        let mut puzzle = valid_puzzle();
        puzzle.grid[0] = "HX".into();
        let input = write_puzzle(dir.path(), &puzzle);

        match run(VerifyArgs { input }) {
            Err(CliError::Verification(n)) => assert_eq!(n, 1),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn malformed_json_names_the_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("broken.json");
        fs::write(&input, "{ not json").unwrap();

        match run(VerifyArgs { input: input.clone() }) {
            Err(CliError::FileParsing { path, .. }) => assert_eq!(path, input),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
