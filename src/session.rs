use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::game::{bot, Board, GameError, GameResult, Outcome, Side};

/// The side driven by [`GameSession::computer_move`] in
/// [`GameMode::VsComputer`]. The human always plays X and opens.
pub const COMPUTER_SIDE: Side = Side::O;

/// Who sits on the other side of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    LocalTwoPlayer,
    VsComputer,
}

/// Cumulative results across rounds. Survives [`GameSession::reset_round`]
/// and mode switches; cleared only by [`GameSession::reset_scores`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    wins_x: u32,
    wins_o: u32,
    ties: u32,
}

impl ScoreBoard {
    pub fn wins_x(&self) -> u32 {
        self.wins_x
    }

    pub fn wins_o(&self) -> u32 {
        self.wins_o
    }

    pub fn ties(&self) -> u32 {
        self.ties
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(Side::X) => self.wins_x += 1,
            Outcome::Win(Side::O) => self.wins_o += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::InProgress => {}
        }
    }
}

/// One sitting at the table: a board, the current mode, running scores and
/// the session RNG behind the computer's corner and fallback picks.
///
/// The session owns all of its state; a front end holds exactly one and goes
/// through its methods for every mutation.
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    scores: ScoreBoard,
    mode: GameMode,
    rng: StdRng,
}

impl GameSession {
    pub fn new(mode: GameMode) -> Self {
        Self::with_rng(mode, StdRng::from_entropy())
    }

    /// Session with a pinned RNG seed, for reproducible computer play.
    pub fn with_seed(mode: GameMode, seed: u64) -> Self {
        Self::with_rng(mode, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mode: GameMode, rng: StdRng) -> Self {
        Self {
            board: Board::new(),
            scores: ScoreBoard::default(),
            mode,
            rng,
        }
    }

    /// Switches to `mode` and starts a fresh round. Scores carry over.
    ///
    /// X opens, so in [`GameMode::VsComputer`] the computer never moves
    /// first; the front end waits for a human placement before scheduling a
    /// reply.
    pub fn start_game(&mut self, mode: GameMode) {
        debug!(?mode, "starting game");
        self.mode = mode;
        self.board.reset();
    }

    /// Applies a human move at `index` for the side whose turn it is.
    ///
    /// In [`GameMode::VsComputer`] only X is human-controlled; asking to
    /// move while the computer is to play fails with
    /// [`GameError::NotHumanTurn`].
    pub fn place_human(&mut self, index: usize) -> GameResult<()> {
        if self.mode == GameMode::VsComputer && self.board.turn() == COMPUTER_SIDE {
            return Err(GameError::NotHumanTurn);
        }
        let side = self.board.turn();
        self.board.place(index, side)?;
        self.settle_round();
        Ok(())
    }

    /// Lets the computer pick and play one move, returning the chosen index.
    ///
    /// Fails with [`GameError::NotComputerTurn`] unless the mode is
    /// [`GameMode::VsComputer`], the round is open and it is the computer's
    /// turn. A deferred call that fires after a reset or restart therefore
    /// surfaces the error and changes nothing.
    pub fn computer_move(&mut self) -> GameResult<usize> {
        if self.mode != GameMode::VsComputer
            || !self.board.is_active()
            || self.board.turn() != COMPUTER_SIDE
        {
            return Err(GameError::NotComputerTurn);
        }
        let Some(index) = bot::select_move(&self.board, COMPUTER_SIDE, &mut self.rng) else {
            // an open round always has at least one empty cell
            unreachable!("no move available on an active board");
        };
        self.board.place(index, COMPUTER_SIDE)?;
        self.settle_round();
        Ok(index)
    }

    /// Starts the next round; scores carry over.
    pub fn reset_round(&mut self) {
        self.board.reset();
    }

    /// Zeroes the score counters.
    pub fn reset_scores(&mut self) {
        self.scores = ScoreBoard::default();
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    /// Snapshot of the running scores.
    pub fn scores(&self) -> ScoreBoard {
        self.scores
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Records the result once when a placement ends the round. Every round
    /// has exactly one terminal placement, later ones fail before reaching
    /// here.
    fn settle_round(&mut self) {
        let outcome = self.board.outcome();
        if outcome != Outcome::InProgress {
            debug!(?outcome, "round over");
            self.scores.record(outcome);
        }
    }
}
