//! Tic-Tac-Toe game.
//!
//! Two players share the keyboard, placing X and O on a 3x3 board. The
//! scoreboard counts round wins for each side until a new game zeroes it.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
