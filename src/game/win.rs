use super::board::{Board, COLS, ROWS};
use super::Piece;

/// Direction steps (row delta, col delta): horizontal, vertical, and the two
/// diagonals.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Check whether `piece` holds four consecutive cells anywhere on the board.
///
/// Every window whose four cells fit on the board is examined; the scan stops
/// at the first complete one.
pub fn has_four_in_a_row(board: &Board, piece: Piece) -> bool {
    let cell = piece.to_cell();
    for row in 0..ROWS {
        for col in 0..COLS {
            if board.get(row, col) != cell {
                continue;
            }
            for &(dr, dc) in &DIRECTIONS {
                if window_matches(board, row, col, dr, dc, piece) {
                    return true;
                }
            }
        }
    }
    false
}

fn window_matches(board: &Board, row: usize, col: usize, dr: isize, dc: isize, piece: Piece) -> bool {
    let cell = piece.to_cell();
    (0..4).all(|i| {
        let r = row as isize + dr * i;
        let c = col as isize + dc * i;
        r >= 0
            && c >= 0
            && (r as usize) < ROWS
            && (c as usize) < COLS
            && board.get(r as usize, c as usize) == cell
    })
}
