use crate::core::models::direction::Direction;
use crate::core::models::grid::Position;
use crate::engine::sizing::GridSize;
use std::ops::Range;

/// A start cell and direction at which a word could be written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub start: Position,
    pub direction: Direction,
}

/// Start indices along one axis for which `len` cells stepping by `delta` stay in `0..extent`.
fn start_range(extent: usize, len: usize, delta: isize) -> Range<usize> {
    match delta {
        _ if len == 0 => 0..0,
        0 => 0..extent,
        _ if len > extent => 0..0,
        1 => 0..extent - len + 1,
        _ => len - 1..extent,
    }
}

/// Number of in-bounds candidates for a word of `len` letters.
pub fn candidate_count(size: GridSize, len: usize) -> usize {
    Direction::ALL
        .iter()
        .map(|dir| {
            let (dr, dc) = dir.delta();
            start_range(size.rows, len, dr).len() * start_range(size.cols, len, dc).len()
        })
        .sum()
}

/// Fills `out` with every candidate whose full extent lies inside a grid of `size`.
///
/// `out` is cleared first so a single buffer can be reused across words.
pub fn enumerate_candidates(size: GridSize, len: usize, out: &mut Vec<Candidate>) {
    out.clear();
    out.reserve(candidate_count(size, len));
    for direction in Direction::ALL {
        let (dr, dc) = direction.delta();
        for row in start_range(size.rows, len, dr) {
            for col in start_range(size.cols, len, dc) {
                out.push(Candidate {
                    start: Position::new(row, col),
                    direction,
                });
            }
        }
    }
}
