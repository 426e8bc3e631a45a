use std::fmt;

use crate::error::SetupError;

use super::board::Cell;

/// Highest bot difficulty; also the deepest search ply.
pub const MAX_DIFFICULTY: u8 = 3;

/// The two piece colours, numbered 1 and 2 on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    One,
    Two,
}

impl Piece {
    /// Get the other piece
    pub fn other(self) -> Piece {
        match self {
            Piece::One => Piece::Two,
            Piece::Two => Piece::One,
        }
    }

    /// Convert piece to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Piece::One => Cell::One,
            Piece::Two => Cell::Two,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Piece::One => 1,
            Piece::Two => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    Human,
    /// Difficulty is the search depth in plies.
    Bot { difficulty: u8 },
}

impl PlayerKind {
    /// Interpret a setup mode: 0 is a human, 1..=3 a bot of that difficulty.
    pub fn from_mode(mode: u8) -> Result<Self, SetupError> {
        match mode {
            0 => Ok(PlayerKind::Human),
            1..=MAX_DIFFICULTY => Ok(PlayerKind::Bot { difficulty: mode }),
            other => Err(SetupError::InvalidMode(other)),
        }
    }

    pub fn mode(self) -> u8 {
        match self {
            PlayerKind::Human => 0,
            PlayerKind::Bot { difficulty } => difficulty,
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "Human"),
            PlayerKind::Bot { difficulty } => write!(f, "Bot (level {difficulty})"),
        }
    }
}

/// A participant. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    kind: PlayerKind,
    piece: Piece,
}

impl Player {
    pub fn new(name: impl Into<String>, kind: PlayerKind, piece: Piece) -> Result<Self, SetupError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SetupError::EmptyName(piece.number()));
        }
        Ok(Player { name, kind, piece })
    }

    /// Build a player from the setup collaborator's name and mode values.
    pub fn from_setup(name: impl Into<String>, mode: u8, piece: Piece) -> Result<Self, SetupError> {
        Self::new(name, PlayerKind::from_mode(mode)?, piece)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn piece(&self) -> Piece {
        self.piece
    }

    pub fn is_bot(&self) -> bool {
        matches!(self.kind, PlayerKind::Bot { .. })
    }

    /// Search depth for a bot, `None` for a human.
    pub fn difficulty(&self) -> Option<u8> {
        match self.kind {
            PlayerKind::Human => None,
            PlayerKind::Bot { difficulty } => Some(difficulty),
        }
    }
}
