use log::{debug, info};

use crate::error::MoveError;

use super::win::has_four_in_a_row;
use super::{Board, Piece, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Piece),
    Draw,
}

/// A live game: the board, the two players and whose turn it is.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    board: Board,
    current: Player,
    other: Player,
    move_count: usize,
}

impl GameSession {
    /// Start a game on an empty board. `player_one` moves first.
    pub fn new(player_one: Player, player_two: Player) -> Self {
        GameSession {
            board: Board::new(),
            current: player_one,
            other: player_two,
            move_count: 0,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is
    pub fn current(&self) -> &Player {
        &self.current
    }

    /// Player waiting for their turn
    pub fn other(&self) -> &Player {
        &self.other
    }

    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Look up a player by the piece they play
    pub fn player(&self, piece: Piece) -> &Player {
        if self.current.piece() == piece {
            &self.current
        } else {
            &self.other
        }
    }

    /// Drop the current player's piece into `col` and pass the turn.
    ///
    /// A rejected move leaves the board and the turn order untouched. Moves
    /// are accepted after a win; callers check [`GameSession::outcome`] first.
    pub fn submit_move(&mut self, col: usize) -> Result<(), MoveError> {
        let piece = self.current.piece();
        match self.board.drop_piece(col, piece) {
            Ok(row) => {
                debug!("{} played column {col} (row {row})", self.current.name());
            }
            Err(err) => {
                debug!("{} rejected: {err}", self.current.name());
                return Err(err);
            }
        }

        self.move_count += 1;
        std::mem::swap(&mut self.current, &mut self.other);

        if let Some(outcome) = self.outcome() {
            info!("game over after {} moves: {outcome:?}", self.move_count);
        }
        Ok(())
    }

    /// Check if either player has four in a row
    pub fn is_over(&self) -> bool {
        has_four_in_a_row(&self.board, Piece::One) || has_four_in_a_row(&self.board, Piece::Two)
    }

    /// The player holding four in a row. Piece one is checked first.
    pub fn winner(&self) -> Option<&Player> {
        [Piece::One, Piece::Two]
            .into_iter()
            .find(|&piece| has_four_in_a_row(&self.board, piece))
            .map(|piece| self.player(piece))
    }

    /// Board full and nobody has won
    pub fn is_draw(&self) -> bool {
        self.board.is_full() && !self.is_over()
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        if let Some(winner) = self.winner() {
            Some(GameOutcome::Winner(winner.piece()))
        } else if self.board.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}
