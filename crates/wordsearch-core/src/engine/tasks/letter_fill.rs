use crate::core::models::grid::{Grid, Position};
use crate::engine::utils::sampling::{SamplingError, sample_letter};
use rand::Rng;
use tracing::instrument;

/// Assigns a uniformly random letter from `alphabet` to every unfilled cell.
///
/// Cells that already hold a letter are left alone. Returns how many cells were filled.
#[instrument(level = "debug", skip_all, fields(rows = grid.rows(), cols = grid.cols()))]
pub fn fill<R: Rng>(
    grid: &mut Grid,
    alphabet: &[char],
    rng: &mut R,
) -> Result<usize, SamplingError> {
    let targets: Vec<Position> = grid.unfilled_positions().collect();
    for &pos in &targets {
        grid.set(pos, sample_letter(alphabet, rng)?);
    }
    Ok(targets.len())
}
