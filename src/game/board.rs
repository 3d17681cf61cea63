use std::fmt::{Display, Formatter};

use smallvec::SmallVec;

use super::error::GameError;
use super::{winning_triples, Cell, GameResult, Outcome, Side, WinningLine};

pub const CELL_COUNT: usize = 9;

/// A 3x3 tic-tac-toe board with turn and activity tracking.
///
/// Cells are addressed by index 0-8 in row-major order. X opens every round.
/// Once the round is won or tied the board goes inactive and rejects further
/// placements until [`Board::reset`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
    turn: Side,
    active: bool,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [None; CELL_COUNT],
            turn: Side::X,
            active: true,
        }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(3) {
            for cell in row {
                match cell {
                    Some(side) => write!(f, "[{}]", side)?,
                    None => f.write_str("[ ]")?,
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn with_position(cells: [Cell; CELL_COUNT], turn: Side) -> Self {
        Self {
            cells,
            turn,
            active: true,
        }
    }

    /// Places `side` at `index` and flips the turn.
    ///
    /// Fails without mutating anything if the index is out of range, the
    /// round is over, it is the other side's turn, or the cell is taken.
    /// A placement that wins or fills the board deactivates it.
    pub fn place(&mut self, index: usize, side: Side) -> GameResult<()> {
        if index >= CELL_COUNT {
            return Err(GameError::out_of_range(index));
        }
        if !self.active {
            return Err(GameError::GameNotActive);
        }
        if side != self.turn {
            return Err(GameError::wrong_turn(self.turn, side));
        }
        if self.cells[index].is_some() {
            return Err(GameError::cell_occupied(index));
        }

        self.cells[index] = Some(side);
        self.turn = side.opponent();
        if self.outcome() != Outcome::InProgress {
            self.active = false;
        }
        Ok(())
    }

    /// Current result of the round, recomputed from the cells.
    pub fn outcome(&self) -> Outcome {
        if let Some(line) = self.winning_line() {
            return Outcome::Win(line.side);
        }
        if self.cells.iter().all(|cell| cell.is_some()) {
            return Outcome::Tie;
        }
        Outcome::InProgress
    }

    /// The first completed triple in scan order, if any.
    pub fn winning_line(&self) -> Option<WinningLine> {
        for triple in winning_triples() {
            let [i1, i2, i3] = triple;
            if let (Some(s1), Some(s2), Some(s3)) =
                (self.cells[i1], self.cells[i2], self.cells[i3])
            {
                if s1 == s2 && s2 == s3 {
                    return Some(WinningLine::new(s1, triple));
                }
            }
        }
        None
    }

    /// Whether placing `side` at `index` would complete a triple.
    /// An occupied or out-of-range cell reports `false`.
    pub fn would_win(&self, index: usize, side: Side) -> bool {
        if index >= CELL_COUNT || self.cells[index].is_some() {
            return false;
        }
        winning_triples()
            .iter()
            .filter(|triple| triple.contains(&index))
            .any(|triple| {
                triple
                    .iter()
                    .filter(|&&i| i != index)
                    .all(|&i| self.cells[i] == Some(side))
            })
    }

    /// Empty-cell indices in ascending order, recomputed on every call.
    pub fn available_cells(&self) -> SmallVec<[usize; CELL_COUNT]> {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| if cell.is_none() { Some(index) } else { None })
            .collect()
    }

    /// Clears the board for a new round. X opens again.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Side to move next.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// `false` once the round has been won or tied.
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod test {
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    /// Plays `moves` onto a fresh board, alternating sides starting with X.
    fn play(moves: &[usize]) -> Board {
        let mut board = Board::new();
        for &index in moves {
            let side = board.turn();
            board.place(index, side).unwrap();
        }
        board
    }

    #[test]
    fn test_opening_state() {
        let board = Board::new();
        assert_eq!(board.turn(), Side::X);
        assert!(board.is_active());
        assert_eq!(board.outcome(), Outcome::InProgress);
        itertools::assert_equal(board.available_cells(), 0..CELL_COUNT);
    }

    #[test]
    fn test_turns_alternate_starting_with_x() {
        let mut board = Board::new();
        for (step, index) in [0, 4, 1, 7, 5].into_iter().enumerate() {
            let expected = if step % 2 == 0 { Side::X } else { Side::O };
            assert_eq!(board.turn(), expected);
            board.place(index, expected).unwrap();
        }
    }

    #[test]
    fn test_place_out_of_range() {
        let mut board = play(&[0, 4]);
        let before = board.clone();
        assert_eq!(
            board.place(9, Side::X),
            Err(GameError::OutOfRange { index: 9 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_wrong_turn() {
        let mut board = play(&[0]);
        let before = board.clone();
        assert_eq!(
            board.place(4, Side::X),
            Err(GameError::WrongTurn {
                expected: Side::O,
                found: Side::X
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_on_occupied_cell() {
        let mut board = play(&[0]);
        let before = board.clone();
        assert_eq!(
            board.place(0, Side::O),
            Err(GameError::CellOccupied { index: 0 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_on_finished_round() {
        // X takes the top row
        let mut board = play(&[0, 3, 1, 4, 2]);
        assert!(!board.is_active());
        let before = board.clone();
        assert_eq!(board.place(5, Side::O), Err(GameError::GameNotActive));
        assert_eq!(board, before);
    }

    #[test]
    fn test_every_triple_wins() {
        for triple in winning_triples() {
            // X claims the triple, O fills two harmless cells in between
            let fillers: Vec<usize> = (0..CELL_COUNT)
                .filter(|index| !triple.contains(index))
                .take(2)
                .collect();
            let moves = [
                triple[0], fillers[0], triple[1], fillers[1], triple[2],
            ];
            let board = play(&moves);
            assert_eq!(board.outcome(), Outcome::Win(Side::X));
            assert!(!board.is_active());
            let line = board.winning_line().unwrap();
            assert_eq!(line.side, Side::X);
            assert_eq!(line.cells, triple);
        }
    }

    #[test]
    fn test_full_board_without_triple_is_a_tie() {
        // ends as X O X / X O O / O X X
        let board = play(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(board.outcome(), Outcome::Tie);
        assert!(!board.is_active());
        assert!(board.available_cells().is_empty());
        assert_eq!(board.winning_line(), None);
    }

    #[test]
    fn test_would_win_probes_one_ply() {
        let board = play(&[0, 3, 1, 4]);
        assert!(board.would_win(2, Side::X)); // completes {0,1,2}
        assert!(board.would_win(5, Side::O)); // completes {3,4,5}
        assert!(!board.would_win(2, Side::O));
        assert!(!board.would_win(0, Side::X)); // occupied
        assert!(!board.would_win(9, Side::X)); // out of range
    }

    #[test]
    fn test_reset_restores_opening_state() {
        let mut board = play(&[0, 3, 1, 4, 2]);
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_random_playthroughs_keep_invariants() {
        let mut rng = ChaCha8Rng::seed_from_u64(17);
        for _ in 0..200 {
            let mut board = Board::new();
            while board.is_active() {
                assert_eq!(board.outcome(), Outcome::InProgress);
                let available = board.available_cells();
                let index = *available.choose(&mut rng).unwrap();
                let side = board.turn();
                board.place(index, side).unwrap();

                let marks = |side| {
                    board
                        .cells()
                        .iter()
                        .filter(|&&cell| cell == Some(side))
                        .count()
                };
                let (x, o) = (marks(Side::X), marks(Side::O));
                assert!(x == o || x == o + 1);
            }
            match board.outcome() {
                Outcome::Win(side) => {
                    assert_eq!(board.winning_line().unwrap().side, side);
                }
                Outcome::Tie => assert!(board.available_cells().is_empty()),
                Outcome::InProgress => panic!("inactive board still in progress"),
            }
        }
    }
}
