use crate::game::{Board, Piece, COLS};

use super::evaluator::Evaluator;

/// Every position reachable from a board within a fixed number of plies.
///
/// The tree is built eagerly, so it holds O(7^ply) nodes. That is cheap for
/// the three levels bots use; deeper searches would need expansion folded
/// into the search itself.
#[derive(Debug, Clone)]
pub struct SearchTree {
    board: Board,
    column: Option<usize>,
    ply: usize,
    mover: Piece,
    score: i32,
    children: Vec<SearchTree>,
}

impl SearchTree {
    /// Build the tree rooted at `board` with `mover` to play next.
    pub fn new(ply: usize, board: Board, mover: Piece, evaluator: &dyn Evaluator) -> Self {
        Self::build(ply, board, mover, None, evaluator)
    }

    fn build(
        ply: usize,
        board: Board,
        mover: Piece,
        column: Option<usize>,
        evaluator: &dyn Evaluator,
    ) -> Self {
        let children = if ply == 0 {
            Vec::new()
        } else {
            (0..COLS)
                .filter(|&col| board.is_column_playable(col))
                .filter_map(|col| {
                    let mut next = board;
                    next.drop_piece(col, mover).ok()?;
                    Some(Self::build(ply - 1, next, mover.other(), Some(col), evaluator))
                })
                .collect()
        };

        // Scored at every node, even though the search only reads leaves and
        // decided positions.
        let score = evaluator.score(&board);

        SearchTree {
            board,
            column,
            ply,
            mover,
            score,
            children,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Column that led here from the parent; `None` at the root.
    pub fn column(&self) -> Option<usize> {
        self.column
    }

    pub fn ply(&self) -> usize {
        self.ply
    }

    /// Piece that moves next from this position
    pub fn mover(&self) -> Piece {
        self.mover
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn children(&self) -> &[SearchTree] {
        &self.children
    }

    /// Total number of nodes, this one included
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(SearchTree::node_count).sum::<usize>()
    }
}
