use super::Side;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum GameError {
    #[error("cell index {index} is out of range (expected: 0-8)")]
    OutOfRange { index: usize },
    #[error("cell {index} is occupied")]
    CellOccupied { index: usize },
    #[error("can't place a mark on a finished round")]
    GameNotActive,
    #[error("other side's turn (expected: {expected}, found: {found})")]
    WrongTurn { expected: Side, found: Side },
    #[error("the human side is not to move")]
    NotHumanTurn,
    #[error("the computer side is not to move")]
    NotComputerTurn,
}

impl GameError {
    pub fn out_of_range(index: usize) -> Self {
        Self::OutOfRange { index }
    }

    pub fn cell_occupied(index: usize) -> Self {
        Self::CellOccupied { index }
    }

    pub fn wrong_turn(expected: Side, found: Side) -> Self {
        Self::WrongTurn { expected, found }
    }
}
