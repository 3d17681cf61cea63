//! Game logic for a two-mode tic-tac-toe: a 3x3 board engine, a
//! fixed-priority heuristic opponent, and a session layer with cumulative
//! scores.
//!
//! The crate is presentation-agnostic. A front end drives a [`GameSession`]
//! (placements, computer replies, round and score resets) and re-renders from
//! its queries after every call; `src/bin/console.rs` is a minimal one.

pub mod game;
pub mod session;

pub use game::{Board, Cell, GameError, GameResult, Outcome, Side, WinningLine};
pub use session::{GameMode, GameSession, ScoreBoard, COMPUTER_SIDE};
