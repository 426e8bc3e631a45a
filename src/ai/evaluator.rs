use crate::game::{has_four_in_a_row, Board, Cell, Piece, COLS, ROWS};

/// Score awarded to a board on which piece one has already won.
pub const WIN_SCORE: i32 = 1000;

/// Trait for scoring a board. Positive favours piece one, negative piece two.
pub trait Evaluator: Send {
    fn score(&self, board: &Board) -> i32;
}

/// Default evaluator: decided boards score ±[`WIN_SCORE`], otherwise the
/// difference in the number of threats each side holds.
///
/// A threat is an empty cell that would complete four in a row for a player.
/// Cells are tried regardless of whether they are reachable yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreatEvaluator;

impl ThreatEvaluator {
    /// Count the empty cells where `piece` would complete four in a row.
    pub fn threats(board: &Board, piece: Piece) -> i32 {
        let mut count = 0;
        for row in 0..ROWS {
            for col in 0..COLS {
                if board.get(row, col) != Cell::Empty {
                    continue;
                }
                let trial = board.with_cell(row, col, piece.to_cell());
                if has_four_in_a_row(&trial, piece) {
                    count += 1;
                }
            }
        }
        count
    }
}

impl Evaluator for ThreatEvaluator {
    fn score(&self, board: &Board) -> i32 {
        if has_four_in_a_row(board, Piece::One) {
            return WIN_SCORE;
        }
        if has_four_in_a_row(board, Piece::Two) {
            return -WIN_SCORE;
        }
        Self::threats(board, Piece::One) - Self::threats(board, Piece::Two)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_is_zero() {
        assert_eq!(ThreatEvaluator.score(&Board::new()), 0);
    }

    #[test]
    fn open_three_counts_both_ends() {
        let mut board = Board::new();
        for col in 1..4 {
            board.drop_piece(col, Piece::One).unwrap();
        }
        // (5,0) and (5,4) both complete the bottom row
        assert_eq!(ThreatEvaluator::threats(&board, Piece::One), 2);
        assert_eq!(ThreatEvaluator.score(&board), 2);
    }

    #[test]
    fn threats_subtract_for_piece_two() {
        let mut board = Board::new();
        for _ in 0..3 {
            board.drop_piece(6, Piece::Two).unwrap();
        }
        assert_eq!(ThreatEvaluator::threats(&board, Piece::Two), 1);
        assert_eq!(ThreatEvaluator.score(&board), -1);
    }

    #[test]
    fn floating_threats_are_counted() {
        let mut board = Board::new();
        // Piece one holds (4,1), (3,2) and (2,3) on a diagonal; (5,0) and
        // (1,4) would each complete it.
        board.drop_piece(0, Piece::Two).unwrap();
        board.drop_piece(1, Piece::Two).unwrap();
        board.drop_piece(1, Piece::One).unwrap();
        board.drop_piece(2, Piece::Two).unwrap();
        board.drop_piece(2, Piece::Two).unwrap();
        board.drop_piece(2, Piece::One).unwrap();
        board.drop_piece(3, Piece::One).unwrap();
        board.drop_piece(3, Piece::Two).unwrap();
        board.drop_piece(3, Piece::Two).unwrap();
        board.drop_piece(3, Piece::One).unwrap();

        // (5,0) is taken; only the floating cell (1,4) remains
        assert_eq!(ThreatEvaluator::threats(&board, Piece::One), 1);
    }

    #[test]
    fn win_dominates_threats() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(0, Piece::One).unwrap();
        }
        // Give piece two plenty of threats of its own
        for col in 2..5 {
            board.drop_piece(col, Piece::Two).unwrap();
        }
        assert_eq!(ThreatEvaluator.score(&board), WIN_SCORE);
    }

    #[test]
    fn piece_two_win_scores_negative() {
        let mut board = Board::new();
        for col in 3..7 {
            board.drop_piece(col, Piece::Two).unwrap();
        }
        board.drop_piece(0, Piece::One).unwrap();
        board.drop_piece(0, Piece::One).unwrap();
        board.drop_piece(0, Piece::One).unwrap();
        assert_eq!(ThreatEvaluator.score(&board), -WIN_SCORE);
    }
}
