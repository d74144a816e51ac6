use super::conflict_check;
use crate::core::models::grid::Grid;
use crate::core::models::word::{WordId, WordList};
use crate::engine::config::SearchConfig;
use crate::engine::deadline::Deadline;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::sizing::GridSize;
use crate::engine::transaction::PlacementBoard;
use crate::engine::utils::query::{Candidate, enumerate_candidates};
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument, trace};

/// Everything a size attempt reads but never changes.
pub struct SearchContext<'a, 'r> {
    pub words: &'a WordList,
    /// Word ids in the order they are attempted.
    pub order: &'a [WordId],
    pub config: &'a SearchConfig,
    pub deadline: &'a Deadline,
    pub reporter: &'a ProgressReporter<'r>,
}

/// Outcome of searching placements at one grid size.
#[derive(Debug)]
pub struct SizeAttempt<'a> {
    pub board: PlacementBoard<'a>,
    /// Mandatory words that could not be placed, in the order they failed.
    pub missing_mandatory: Vec<WordId>,
    /// The attempt stopped at the first unplaceable mandatory word so the grid can grow.
    pub abandoned: bool,
    pub timed_out: bool,
}

enum RetryOutcome {
    Placed,
    Exhausted,
    TimedOut,
}

/// Places the words of `ctx.order` onto an empty grid of `size`.
///
/// Optional words that find no compatible candidate are skipped. A mandatory word that finds
/// none triggers a bounded local retry; if that fails too, the attempt is abandoned when
/// `can_grow` is set, and otherwise the word is recorded as missing and the search moves on.
/// The deadline is polled before every word and every retry attempt.
#[instrument(level = "debug", skip_all, fields(size = %size, can_grow = can_grow))]
pub fn run<'a, R: Rng>(
    ctx: &SearchContext<'a, '_>,
    size: GridSize,
    can_grow: bool,
    rng: &mut R,
) -> Result<SizeAttempt<'a>, EngineError> {
    let mut board = PlacementBoard::new(ctx.words, size);
    let mut buffer = Vec::new();
    let mut missing_mandatory = Vec::new();

    ctx.reporter.report(Progress::TaskStart {
        total_steps: ctx.order.len() as u64,
    });

    for &id in ctx.order {
        if ctx.deadline.expired() {
            debug!(placed = board.len(), "Deadline reached during placement search");
            return finish(ctx, board, missing_mandatory, false, true);
        }

        let word = &ctx.words[id];
        let fits = size.fits(word.len());
        let mut placed = fits && place_word(ctx, &mut board, id, rng, &mut buffer)?;

        if !placed && word.is_mandatory() {
            if fits {
                match local_retry(ctx, &mut board, id, rng, &mut buffer)? {
                    RetryOutcome::Placed => placed = true,
                    RetryOutcome::Exhausted => {}
                    RetryOutcome::TimedOut => {
                        missing_mandatory.push(id);
                        debug!(word = %word, "Deadline reached during local retry");
                        return finish(ctx, board, missing_mandatory, false, true);
                    }
                }
            }
            if !placed {
                missing_mandatory.push(id);
                if can_grow {
                    debug!(word = %word, "Mandatory word does not fit, abandoning size");
                    return finish(ctx, board, missing_mandatory, true, false);
                }
                debug!(word = %word, "Mandatory word left unplaced at the largest size");
            }
        } else if !placed {
            trace!(word = %word, "Optional word skipped");
        }

        ctx.reporter.report(Progress::TaskIncrement);
    }

    finish(ctx, board, missing_mandatory, false, false)
}

fn finish<'a>(
    ctx: &SearchContext<'a, '_>,
    board: PlacementBoard<'a>,
    missing_mandatory: Vec<WordId>,
    abandoned: bool,
    timed_out: bool,
) -> Result<SizeAttempt<'a>, EngineError> {
    ctx.reporter.report(Progress::TaskFinish);
    Ok(SizeAttempt {
        board,
        missing_mandatory,
        abandoned,
        timed_out,
    })
}

/// Commits `id` at a freshly chosen candidate, if any is compatible with the board.
fn place_word<R: Rng>(
    ctx: &SearchContext<'_, '_>,
    board: &mut PlacementBoard<'_>,
    id: WordId,
    rng: &mut R,
    buffer: &mut Vec<Candidate>,
) -> Result<bool, EngineError> {
    let letters = ctx.words[id].letters();
    match choose_candidate(
        board.grid(),
        board.size(),
        letters,
        ctx.config.prefer_overlap,
        rng,
        buffer,
    ) {
        Some(candidate) => {
            board.commit(id, candidate)?;
            Ok(true)
        }
        None => Ok(false),
    }
}

/// Picks a compatible candidate in random order.
///
/// Without `prefer_overlap` the first compatible candidate wins. With it, every candidate is
/// scanned and the one sharing the most letters with the grid wins, earliest on ties.
pub fn choose_candidate<R: Rng>(
    grid: &Grid,
    size: GridSize,
    letters: &[char],
    prefer_overlap: bool,
    rng: &mut R,
    buffer: &mut Vec<Candidate>,
) -> Option<Candidate> {
    enumerate_candidates(size, letters.len(), buffer);
    buffer.shuffle(rng);

    if !prefer_overlap {
        return buffer
            .iter()
            .copied()
            .find(|&c| conflict_check::is_compatible(grid, letters, c));
    }

    let mut best: Option<(usize, Candidate)> = None;
    for &candidate in buffer.iter() {
        if let Some(overlap) = conflict_check::check(grid, letters, candidate) {
            if best.is_none_or(|(top, _)| overlap > top) {
                best = Some((overlap, candidate));
            }
        }
    }
    best.map(|(_, candidate)| candidate)
}

/// Frees room for a starving mandatory word by undoing recent placements.
///
/// Attempt `n` undoes the last `min(n, backtrack_depth)` placements, places the starving word
/// first and then re-places the undone words. A failed attempt restores the undone words at
/// their previous candidates, leaving the board exactly as it was.
fn local_retry<R: Rng>(
    ctx: &SearchContext<'_, '_>,
    board: &mut PlacementBoard<'_>,
    id: WordId,
    rng: &mut R,
    buffer: &mut Vec<Candidate>,
) -> Result<RetryOutcome, EngineError> {
    for attempt in 1..=ctx.config.backtrack_attempts {
        if ctx.deadline.expired() {
            return Ok(RetryOutcome::TimedOut);
        }
        let depth = attempt.min(ctx.config.backtrack_depth).min(board.len());
        if depth == 0 {
            break;
        }

        let undone = board.rollback_to(board.len() - depth);
        debug!(word = %ctx.words[id], attempt, depth, "Local retry");

        let placed = board.transaction(|b| {
            if !place_word(ctx, b, id, rng, buffer)? {
                return Ok(false);
            }
            for entry in &undone {
                if !place_word(ctx, b, entry.word, rng, buffer)? {
                    return Ok(false);
                }
            }
            Ok(true)
        })?;
        if placed {
            return Ok(RetryOutcome::Placed);
        }

        board.restore(&undone)?;
    }
    Ok(RetryOutcome::Exhausted)
}
