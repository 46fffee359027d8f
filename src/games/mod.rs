//! The two arcade games: Flappy Bird and Tic-Tac-Toe.
//!
//! Each game is a plain state struct plus free transition functions in its
//! `logic` module. The cores never touch the terminal; the event loop feeds
//! them ticks and inputs, and the scenes read their state back out.

pub mod flappy;
pub mod tictactoe;

pub use flappy::{FlappyGame, FlappyInput, PipePair};
pub use tictactoe::{Mark, RoundOutcome, TicTacToeGame, TicTacToeInput};

/// The currently running game. Only one is active at a time.
#[derive(Debug, Clone)]
pub enum ActiveGame {
    Flappy(FlappyGame),
    TicTacToe(TicTacToeGame),
}
