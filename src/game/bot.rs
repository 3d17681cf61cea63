use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

use super::board::Board;
use super::Side;

const CENTER: usize = 4;
const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Picks a cell for `side` by fixed rule priority: complete an own triple,
/// block the opponent's, take the center, take a random open corner, fall
/// back to a random open cell. One-ply lookahead only, intentionally
/// beatable.
///
/// Returns `None` only for a full board; callers are expected to check that
/// the round is still open before asking.
pub fn select_move<R: Rng>(board: &Board, side: Side, rng: &mut R) -> Option<usize> {
    let available = board.available_cells();
    if available.is_empty() {
        return None;
    }
    completing_cell(board, side)
        .or_else(|| completing_cell(board, side.opponent()))
        .or_else(|| open_center(board))
        .or_else(|| random_open_corner(board, rng))
        .or_else(|| available.choose(rng).copied())
}

/// Lowest-index open cell that completes a triple for `side`.
fn completing_cell(board: &Board, side: Side) -> Option<usize> {
    board
        .available_cells()
        .into_iter()
        .find(|&index| board.would_win(index, side))
}

fn open_center(board: &Board) -> Option<usize> {
    if board.cells()[CENTER].is_none() {
        Some(CENTER)
    } else {
        None
    }
}

fn random_open_corner<R: Rng>(board: &Board, rng: &mut R) -> Option<usize> {
    let open: SmallVec<[usize; 4]> = CORNERS
        .iter()
        .copied()
        .filter(|&corner| board.cells()[corner].is_none())
        .collect();
    open.choose(rng).copied()
}
