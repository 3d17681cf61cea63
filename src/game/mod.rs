pub mod board;
pub mod bot;
pub mod error;

use std::fmt::{Display, Formatter};

pub use board::Board;
pub use error::GameError;

pub type GameResult<T> = Result<T, GameError>;

/// One of the two players. X always opens a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    X,
    O,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::X => f.write_str("X"),
            Side::O => f.write_str("O"),
        }
    }
}

/// Contents of a single board cell, `None` while unmarked.
pub type Cell = Option<Side>;

/// Result of a round, derived from the board on demand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Side),
    Tie,
}

/// A completed triple and the side that filled it, for highlighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WinningLine {
    pub side: Side,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(side: Side, cells: [usize; 3]) -> Self {
        Self { side, cells }
    }
}

/// The eight fixed lines that constitute a win: three rows, three columns and
/// two diagonals over cell indices 0-8 in row-major order.
pub fn winning_triples() -> [[usize; 3]; 8] {
    [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ]
}
