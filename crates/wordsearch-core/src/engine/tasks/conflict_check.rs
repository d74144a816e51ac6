use crate::core::models::grid::Grid;
use crate::engine::utils::query::Candidate;

/// Checks whether `letters` can be written at `candidate` without contradicting the grid.
///
/// Every covered cell must lie in bounds and be either unfilled or already hold the same
/// letter. On success returns how many letters would be shared with existing placements.
/// Runs in O(`letters.len()`) and never allocates.
#[inline]
pub fn check(grid: &Grid, letters: &[char], candidate: Candidate) -> Option<usize> {
    let len = letters.len();
    if len == 0 {
        return None;
    }
    // A straight segment is in bounds iff both of its ends are.
    grid.step(candidate.start, candidate.direction, len - 1)?;

    let mut overlap = 0;
    for (k, &letter) in letters.iter().enumerate() {
        let pos = grid.step(candidate.start, candidate.direction, k)?;
        match grid.get(pos) {
            None => {}
            Some(existing) if existing == letter => overlap += 1,
            Some(_) => return None,
        }
    }
    Some(overlap)
}

#[inline]
pub fn is_compatible(grid: &Grid, letters: &[char], candidate: Candidate) -> bool {
    check(grid, letters, candidate).is_some()
}
