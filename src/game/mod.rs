//! Core Connect Four game logic: board, players, four-in-a-row detection and
//! the live game session.

mod board;
mod player;
mod state;
mod win;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::{Piece, Player, PlayerKind, MAX_DIFFICULTY};
pub use state::{GameOutcome, GameSession};
pub use win::has_four_in_a_row;
