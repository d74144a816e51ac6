use crate::core::io::word_list::{self, NormalizedWords};
use crate::core::models::grid::Grid;
use crate::core::models::puzzle::{self, Placement, PuzzleResult};
use crate::core::models::word::{WordId, WordList};
use crate::engine::config::GenerationConfig;
use crate::engine::deadline::Deadline;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::sizing::GridSizer;
use crate::engine::state::SearchSnapshot;
use crate::engine::tasks::letter_fill;
use crate::engine::tasks::placement_search::{self, SearchContext};
use crate::engine::utils::sampling::seeded_rng;
use rand::Rng;
use tracing::{debug, info, instrument, warn};

struct SearchOutcome {
    best: SearchSnapshot,
    timed_out: bool,
    attempts: usize,
}

/// Generates a word search puzzle from raw word lines.
///
/// # Arguments
///
/// * `lines` - Raw entries, one word per entry. A leading mandatory marker flags a word as
///   mandatory.
/// * `config` - Sizing, search and fill parameters, including the time budget.
/// * `reporter` - Receives phase and task progress events.
///
/// # Return
///
/// Returns a fully filled puzzle. Words that could not be placed, whether for lack of room or
/// because the time budget ran out, are listed in `unplaced_words`; an expired budget also
/// sets `timed_out`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if no word survives normalization, and
/// [`EngineError::InfeasibleConstraint`] in strict mode when a mandatory word is longer than
/// every dimension of the largest reachable grid.
#[instrument(skip_all, name = "generation_workflow")]
pub fn run<I, S>(
    lines: I,
    config: &GenerationConfig,
    reporter: &ProgressReporter,
) -> Result<PuzzleResult, EngineError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let deadline = Deadline::start(config.search.time_budget);

    // === Phase 1: Normalize the raw word list ===
    let words = normalize_words(lines, config, reporter)?;

    // === Phase 2: Plan grid sizes and the placement order ===
    let (sizer, order) = plan_sizes(&words, config, reporter)?;

    let (mut rng, seed) = seeded_rng(config.search.seed);
    info!(seed, "Random generator seeded.");

    // === Phase 3: Search placements, growing the grid when allowed ===
    let outcome = search_sizes(&words, &order, &sizer, config, &deadline, reporter, &mut rng)?;

    // === Phase 4: Fill the remaining cells ===
    reporter.report(Progress::PhaseStart { name: "Letter Fill" });
    let mut grid = outcome.best.grid.clone();
    let filled = letter_fill::fill(&mut grid, &config.fill.alphabet, &mut rng)?;
    info!(filled, "Filled remaining cells with random letters.");
    reporter.report(Progress::PhaseFinish);

    // === Phase 5: Assemble the result ===
    let result = finalize_results(&words, &outcome.best, grid, seed, outcome.timed_out)?;
    info!(
        rows = result.rows,
        cols = result.cols,
        placed = result.placed_words.len(),
        unplaced = result.unplaced_words.len(),
        attempts = outcome.attempts,
        timed_out = result.timed_out,
        elapsed_ms = deadline.elapsed().as_millis() as u64,
        budget_ms = deadline.budget().as_millis() as u64,
        "Puzzle generation finished."
    );
    Ok(result)
}

fn normalize_words<I, S>(
    lines: I,
    config: &GenerationConfig,
    reporter: &ProgressReporter,
) -> Result<WordList, EngineError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    reporter.report(Progress::PhaseStart {
        name: "Normalization",
    });

    let NormalizedWords { words, warnings } =
        word_list::parse_lines(lines, config.mandatory_marker)?;
    for warning in &warnings {
        warn!("{}", warning);
    }
    if !warnings.is_empty() {
        reporter.message(|| format!("{} input line(s) dropped or merged", warnings.len()));
    }
    info!(
        words = words.len(),
        mandatory = words.mandatory_count(),
        "Normalized word list."
    );

    reporter.report(Progress::PhaseFinish);
    Ok(words)
}

fn plan_sizes(
    words: &WordList,
    config: &GenerationConfig,
    reporter: &ProgressReporter,
) -> Result<(GridSizer, Vec<WordId>), EngineError> {
    reporter.report(Progress::PhaseStart { name: "Sizing" });

    let sizer = GridSizer::new(words, &config.sizing);
    let limit = sizer.limit();
    let unplaceable = sizer.unplaceable(words);
    for &id in &unplaceable {
        let word = &words[id];
        if !word.is_mandatory() {
            debug!(word = %word, "Optional word is longer than any reachable grid side.");
            continue;
        }
        if config.search.strict {
            return Err(EngineError::InfeasibleConstraint {
                word: word.text().to_string(),
                length: word.len(),
                rows: limit.rows,
                cols: limit.cols,
            });
        }
        warn!(
            word = %word,
            length = word.len(),
            limit = %limit,
            "Mandatory word cannot fit in any direction and will be reported unplaced."
        );
    }

    let order: Vec<WordId> = words
        .priority_order()
        .into_iter()
        .filter(|id| !unplaceable.contains(id))
        .collect();
    info!(
        initial = %sizer.initial(),
        limit = %limit,
        fixed = sizer.is_fixed(),
        "Planned grid sizes."
    );

    reporter.report(Progress::PhaseFinish);
    Ok((sizer, order))
}

fn search_sizes<R: Rng>(
    words: &WordList,
    order: &[WordId],
    sizer: &GridSizer,
    config: &GenerationConfig,
    deadline: &Deadline,
    reporter: &ProgressReporter,
    rng: &mut R,
) -> Result<SearchOutcome, EngineError> {
    reporter.report(Progress::PhaseStart {
        name: "Placement Search",
    });
    info!("Starting placement search.");

    let ctx = SearchContext {
        words,
        order,
        config: &config.search,
        deadline,
        reporter,
    };

    let mut size = sizer.initial();
    let mut best: Option<SearchSnapshot> = None;
    let mut timed_out = false;
    let mut attempts = 0;

    loop {
        let next = sizer.grow(size);
        attempts += 1;
        reporter.report(Progress::GridAttempt {
            rows: size.rows,
            cols: size.cols,
        });
        debug!(size = %size, attempt = attempts, "Searching placements.");

        let attempt = placement_search::run(&ctx, size, next.is_some(), rng)?;
        let snapshot = SearchSnapshot::capture(&attempt.board);
        debug!(
            size = %size,
            mandatory_placed = snapshot.mandatory_placed,
            total_placed = snapshot.total_placed,
            "Size attempt finished."
        );
        if best.as_ref().is_none_or(|b| snapshot > *b) {
            best = Some(snapshot);
        }

        if attempt.timed_out {
            timed_out = true;
            warn!(size = %size, "Time budget exhausted, returning the best result so far.");
            break;
        }
        if !attempt.abandoned {
            break;
        }
        let Some(next) = next else {
            break;
        };
        if deadline.expired() {
            timed_out = true;
            warn!("Time budget exhausted before the grid could grow.");
            break;
        }
        info!(
            from = %size,
            to = %next,
            remaining_ms = deadline.remaining().as_millis() as u64,
            "Growing grid."
        );
        size = next;
    }

    reporter.report(Progress::PhaseFinish);
    let best = best.ok_or_else(|| EngineError::Internal("No grid size was attempted".into()))?;
    Ok(SearchOutcome {
        best,
        timed_out,
        attempts,
    })
}

fn finalize_results(
    words: &WordList,
    best: &SearchSnapshot,
    grid: Grid,
    seed: u64,
    timed_out: bool,
) -> Result<PuzzleResult, EngineError> {
    if !grid.is_complete() {
        return Err(EngineError::Internal(format!(
            "Grid still has {} unfilled cell(s) after filling",
            grid.area() - grid.filled_count()
        )));
    }

    let mut placements = Vec::new();
    let mut placed_words = Vec::new();
    let mut unplaced_words = Vec::new();
    for (id, word) in words.iter() {
        match best.placement_of(id) {
            Some(candidate) => {
                placements.push(Placement::new(
                    word.text(),
                    candidate.start.row,
                    candidate.start.col,
                    candidate.direction,
                ));
                placed_words.push(word.text().to_string());
            }
            None => unplaced_words.push(word.text().to_string()),
        }
    }

    let (rows, cols) = (grid.rows(), grid.cols());
    Ok(PuzzleResult {
        rows,
        cols,
        grid: grid.to_row_strings(),
        overlap_score: puzzle::overlap_score(rows, cols, &placements),
        placements,
        placed_words,
        unplaced_words,
        timed_out,
        seed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::{ConfigError, GenerationConfigBuilder, GridCeiling};
    use crate::workflows::verify;
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    fn config(seed: u64) -> GenerationConfigBuilder {
        GenerationConfigBuilder::new()
            .time_budget(Duration::from_secs(10))
            .seed(Some(seed))
    }

    fn generate(lines: &[&str], builder: GenerationConfigBuilder) -> Result<PuzzleResult, EngineError> {
        let config = builder.build().unwrap();
        run(lines.iter(), &config, &ProgressReporter::new())
    }

    /// Deterministic alphabetic words, distinct for distinct `i`.
    fn synthetic_word(i: usize, len: usize) -> String {
        let mut n = i;
        (0..len)
            .map(|_| {
                let ch = (b'A' + (n % 26) as u8) as char;
                n /= 26;
                ch
            })
            .collect()
    }

    fn assert_well_formed(result: &PuzzleResult) {
        let report = verify::run(result);
        assert!(report.is_valid(), "puzzle has issues: {}", report);
    }

    #[test]
    fn two_words_without_ceiling_are_both_placed() {
        let result = generate(&["*HELLO", "WORLD"], config(42)).unwrap();

        assert_eq!(result.placed_words, vec!["HELLO", "WORLD"]);
        assert!(result.unplaced_words.is_empty());
        assert!(result.rows >= 5 && result.cols >= 5);
        assert!(!result.timed_out);
        assert_eq!(result.seed, 42);
        assert_well_formed(&result);
    }

    #[test]
    fn oversized_mandatory_word_is_reported_unplaced_under_a_ceiling() {
        let result = generate(
            &["*SUPERCALIFRAGILISTIC"],
            config(1).ceiling(GridCeiling::new(5, 5)),
        )
        .unwrap();

        assert_eq!((result.rows, result.cols), (5, 5));
        assert!(result.placed_words.is_empty());
        assert_eq!(result.unplaced_words, vec!["SUPERCALIFRAGILISTIC"]);
        assert!(
            result
                .grid
                .iter()
                .all(|row| row.chars().count() == 5 && row.chars().all(|c| c.is_ascii_uppercase()))
        );
        assert_well_formed(&result);
    }

    #[test]
    fn strict_mode_rejects_an_infeasible_mandatory_word() {
        let err = generate(
            &["*SUPERCALIFRAGILISTIC", "CAT"],
            config(1).ceiling(GridCeiling::new(5, 5)).strict(true),
        )
        .unwrap_err();

        match err {
            EngineError::InfeasibleConstraint {
                word, length, rows, cols,
            } => {
                assert_eq!(word, "SUPERCALIFRAGILISTIC");
                assert_eq!(length, 20);
                assert_eq!((rows, cols), (5, 5));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            generate(&empty, config(1)),
            Err(EngineError::InvalidInput { .. })
        ));
        assert!(matches!(
            generate(&["", "   ", "123", "*"], config(1)),
            Err(EngineError::InvalidInput { .. })
        ));
    }

    #[test]
    fn zero_budget_returns_a_well_formed_timed_out_puzzle() {
        let lines: Vec<String> = (0..200).map(|i| format!("*{}", synthetic_word(i, 8))).collect();
        let config = GenerationConfigBuilder::new()
            .time_budget(Duration::ZERO)
            .seed(Some(3))
            .build()
            .unwrap();

        let result = run(&lines, &config, &ProgressReporter::new()).unwrap();
        assert!(result.timed_out);
        assert!(!result.unplaced_words.is_empty());
        assert_eq!(result.placed_words.len() + result.unplaced_words.len(), 200);
        assert_well_formed(&result);
    }

    const OVERRUN_SLACK: Duration = Duration::from_millis(250);

    fn assert_returns_within_budget(builder: GenerationConfigBuilder) {
        let budget = Duration::from_millis(5);
        let lines: Vec<String> = (0..400).map(|i| format!("*{}", synthetic_word(i, 12))).collect();
        let config = builder.time_budget(budget).seed(Some(8)).build().unwrap();

        let started = Instant::now();
        let result = run(&lines, &config, &ProgressReporter::new()).unwrap();
        let elapsed = started.elapsed();
        assert!(
            elapsed < budget + OVERRUN_SLACK,
            "run took {elapsed:?} on a {budget:?} budget"
        );
        assert!(result.timed_out);
        assert!(!result.unplaced_words.is_empty());
        assert_well_formed(&result);
    }

    #[test]
    fn tight_budget_returns_promptly() {
        assert_returns_within_budget(GenerationConfigBuilder::new().max_side(20));
    }

    #[test]
    fn tight_budget_returns_promptly_with_overlap_scoring_and_retries() {
        assert_returns_within_budget(
            GenerationConfigBuilder::new()
                .max_side(120)
                .prefer_overlap(true)
                .backtrack_depth(6)
                .backtrack_attempts(12),
        );
    }

    #[test]
    fn long_word_fits_along_the_long_side_of_a_rectangular_ceiling() {
        let result = generate(
            &["*ABCDEFGH", "XY"],
            config(11).ceiling(GridCeiling::new(3, 8)).strict(true),
        )
        .unwrap();

        assert_eq!((result.rows, result.cols), (3, 8));
        assert_eq!(result.placed_words, vec!["ABCDEFGH", "XY"]);
        let placement = &result.placements[0];
        assert_eq!(placement.dr, 0);
        assert_eq!(placement.col, if placement.dc == 1 { 0 } else { 7 });
        assert_well_formed(&result);

        let tall = generate(&["*ABCDEFGH"], config(11).ceiling(GridCeiling::new(8, 3))).unwrap();
        assert_eq!(tall.placed_words, vec!["ABCDEFGH"]);
        assert_eq!(tall.placements[0].dc, 0);
    }

    #[test]
    fn oversized_ceiling_is_rejected_by_the_builder() {
        let err = config(1)
            .ceiling(GridCeiling::new(usize::MAX / 2, 3))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { parameter: "ceiling", .. }));
    }

    #[test]
    fn same_seed_gives_identical_results() {
        let lines = ["*ORANGE", "*BANANA", "APPLE", "KIWI", "MANGO", "PAPAYA", "FIG"];
        let a = generate(&lines, config(2024)).unwrap();
        let b = generate(&lines, config(2024)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn explicit_ceiling_is_never_exceeded() {
        let lines: Vec<String> = (0..40).map(|i| format!("*{}", synthetic_word(i, 5))).collect();
        let config = config(5).ceiling(GridCeiling::new(6, 8)).build().unwrap();

        let result = run(&lines, &config, &ProgressReporter::new()).unwrap();
        assert_eq!((result.rows, result.cols), (6, 8));
        for placement in &result.placements {
            for ((r, c), _) in placement.cells() {
                assert!((0..6).contains(&r) && (0..8).contains(&c));
            }
        }
        assert_well_formed(&result);
    }

    #[test]
    fn feasible_mandatory_words_are_all_placed_without_ceiling() {
        let lines: Vec<String> = (0..25).map(|i| format!("*{}", synthetic_word(i * 7, 6))).collect();
        let result = run(
            &lines,
            &config(77).min_side(1).build().unwrap(),
            &ProgressReporter::new(),
        )
        .unwrap();

        assert!(result.unplaced_words.is_empty());
        assert_eq!(result.placed_words.len(), 25);
        assert_well_formed(&result);
    }

    #[test]
    fn output_follows_input_order_and_merges_duplicates() {
        let result = generate(&["zebra", "*ant", "Moose", "ANT", "  "], config(9)).unwrap();
        assert_eq!(result.placed_words, vec!["ZEBRA", "ANT", "MOOSE"]);
        let placed: Vec<&str> = result.placements.iter().map(|p| p.word.as_str()).collect();
        assert_eq!(placed, vec!["ZEBRA", "ANT", "MOOSE"]);
    }

    #[test]
    fn prefer_overlap_still_produces_valid_puzzles() {
        let lines = ["*STAR", "*RATS", "*ARTS", "TSAR", "TARS"];
        let result = generate(&lines, config(13).prefer_overlap(true)).unwrap();
        assert!(result.unplaced_words.is_empty());
        assert_eq!(
            result.overlap_score,
            puzzle::overlap_score(result.rows, result.cols, &result.placements)
        );
        assert_well_formed(&result);
    }

    #[test]
    fn custom_alphabet_is_used_for_filler() {
        let result = generate(&["*AB"], config(4).ceiling(GridCeiling::new(3, 3)).alphabet(['Z']))
            .unwrap();
        let letters: usize = result
            .grid
            .iter()
            .flat_map(|row| row.chars())
            .filter(|&c| c != 'Z')
            .count();
        assert!(letters <= 2);
    }

    #[test]
    fn progress_reports_every_phase() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(event);
        }));
        let config = config(6).build().unwrap();
        run(["*CAT", "DOG"], &config, &reporter).unwrap();

        let seen = seen.lock().unwrap();
        let phases: Vec<&str> = seen
            .iter()
            .filter_map(|e| match e {
                Progress::PhaseStart { name } => Some(*name),
                _ => None,
            })
            .collect();
        assert_eq!(
            phases,
            vec!["Normalization", "Sizing", "Placement Search", "Letter Fill"]
        );
        assert!(seen.iter().any(|e| matches!(e, Progress::GridAttempt { .. })));
    }
}
