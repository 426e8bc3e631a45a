use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{GameSession, Piece, COLS};

use super::evaluator::{Evaluator, ThreatEvaluator, WIN_SCORE};
use super::tree::SearchTree;

/// Bound used in place of infinity for alpha, beta and the running best.
pub const INFINITY: i32 = 1_000_000;

/// Column chosen at a node together with its backed-up score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the search stopped at the root itself.
    pub column: Option<usize>,
    pub score: i32,
}

/// Depth-limited minimax with alpha-beta pruning over a [`SearchTree`].
///
/// Piece one maximises and piece two minimises. When no child beats the
/// starting bound (only possible with no children at all) the returned column
/// is a fallback drawn uniformly from 0..=6 with the search's own RNG, which
/// can be seeded for reproducible play.
pub struct Minimax {
    evaluator: Box<dyn Evaluator>,
    rng: StdRng,
}

impl Minimax {
    pub fn new() -> Self {
        Self::with_rng(Box::new(ThreatEvaluator), StdRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Box::new(ThreatEvaluator), StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(evaluator: Box<dyn Evaluator>, rng: StdRng) -> Self {
        Minimax { evaluator, rng }
    }

    pub fn evaluator(&self) -> &dyn Evaluator {
        self.evaluator.as_ref()
    }

    /// Pick a column for the current player of `session`.
    ///
    /// Returns `None` for a human player, or when the position is already
    /// decided so there is nothing to choose.
    pub fn minimax_strategy(&mut self, session: &GameSession) -> Option<usize> {
        let player = session.current();
        let ply = usize::from(player.difficulty()?);
        let tree = SearchTree::new(ply, *session.board(), player.piece(), self.evaluator.as_ref());
        let maximizing = player.piece() == Piece::One;

        let result = self.best_move(&tree, ply, -INFINITY, INFINITY, maximizing);
        debug!(
            "{} searched {} nodes at ply {ply}: column {:?}, score {}",
            player.name(),
            tree.node_count(),
            result.column,
            result.score
        );
        result.column
    }

    /// Alpha-beta minimax over `tree`, looking at most `depth` plies ahead.
    ///
    /// A node with depth left but no children (a full, undecided board)
    /// scores as the starting bound: `-INFINITY` when maximising, `INFINITY`
    /// when minimising. Its parent therefore values the move that fills the
    /// board above any win or loss.
    pub fn best_move(
        &mut self,
        tree: &SearchTree,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        if depth == 0 || tree.score() == WIN_SCORE || tree.score() == -WIN_SCORE {
            return SearchResult {
                column: tree.column(),
                score: tree.score(),
            };
        }

        let mut column = self.rng.random_range(0..COLS);

        if maximizing {
            let mut best = -INFINITY;
            for child in tree.children() {
                let score = self.best_move(child, depth - 1, alpha, beta, false).score;
                if score > best {
                    best = score;
                    column = child.column().unwrap_or(column);
                }
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            SearchResult {
                column: Some(column),
                score: best,
            }
        } else {
            let mut best = INFINITY;
            for child in tree.children() {
                let score = self.best_move(child, depth - 1, alpha, beta, true).score;
                if score < best {
                    best = score;
                    column = child.column().unwrap_or(column);
                }
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            SearchResult {
                column: Some(column),
                score: best,
            }
        }
    }
}

impl Default for Minimax {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Board, Player};

    fn session(p1_mode: u8, p2_mode: u8, moves: &[usize]) -> GameSession {
        let mut session = GameSession::new(
            Player::from_setup("One", p1_mode, Piece::One).unwrap(),
            Player::from_setup("Two", p2_mode, Piece::Two).unwrap(),
        );
        for &col in moves {
            session.submit_move(col).unwrap();
        }
        session
    }

    /// Plain minimax with the same cut-off rules and no pruning.
    fn full_minimax(tree: &SearchTree, depth: usize, maximizing: bool) -> i32 {
        if depth == 0 || tree.score().abs() == WIN_SCORE {
            return tree.score();
        }
        let scores = tree
            .children()
            .iter()
            .map(|child| full_minimax(child, depth - 1, !maximizing));
        if maximizing {
            scores.max().unwrap_or(-INFINITY)
        } else {
            scores.min().unwrap_or(INFINITY)
        }
    }

    // --- Scenario tests ---

    #[test]
    fn depth_one_completes_horizontal_row() {
        // One holds columns 2-4 on the bottom row; column 1 is blocked
        let session = session(1, 0, &[2, 1, 3, 1, 4, 6]);
        let mut search = Minimax::with_seed(1);
        let tree = SearchTree::new(1, *session.board(), Piece::One, search.evaluator());

        let result = search.best_move(&tree, 1, -INFINITY, INFINITY, true);
        assert_eq!(
            result,
            SearchResult {
                column: Some(5),
                score: WIN_SCORE
            }
        );
    }

    #[test]
    fn strategy_takes_winning_move_at_every_level() {
        for level in 1..=3 {
            let session = session(level, 0, &[2, 1, 3, 1, 4, 6]);
            let mut search = Minimax::with_seed(7);
            assert_eq!(search.minimax_strategy(&session), Some(5), "level {level}");
        }
    }

    #[test]
    fn minimizer_takes_its_own_win() {
        // Two holds column 6 three high and moves next
        let session = session(0, 2, &[0, 6, 1, 6, 0, 6, 3]);
        assert_eq!(session.current().piece(), Piece::Two);
        let mut search = Minimax::with_seed(3);
        assert_eq!(search.minimax_strategy(&session), Some(6));
    }

    #[test]
    fn blocks_opponent_win() {
        // One threatens column 3 on the bottom row; Two has to block
        let session = session(0, 2, &[0, 6, 1, 6, 2]);
        let mut search = Minimax::with_seed(5);
        assert_eq!(search.minimax_strategy(&session), Some(3));
    }

    #[test]
    fn human_gets_no_suggestion() {
        let session = session(0, 0, &[]);
        let mut search = Minimax::with_seed(0);
        assert_eq!(search.minimax_strategy(&session), None);
    }

    // --- Algorithm tests ---

    #[test]
    fn depth_zero_returns_root_score() {
        let mut board = Board::new();
        for col in 1..4 {
            board.drop_piece(col, Piece::One).unwrap();
        }
        let mut search = Minimax::with_seed(0);
        let tree = SearchTree::new(2, board, Piece::Two, search.evaluator());
        let result = search.best_move(&tree, 0, -INFINITY, INFINITY, false);
        assert_eq!(result, SearchResult { column: None, score: 2 });
    }

    #[test]
    fn decided_root_stops_immediately() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(2, Piece::Two).unwrap();
        }
        let mut search = Minimax::with_seed(0);
        let tree = SearchTree::new(2, board, Piece::One, search.evaluator());
        let result = search.best_move(&tree, 2, -INFINITY, INFINITY, true);
        assert_eq!(result, SearchResult { column: None, score: -WIN_SCORE });
    }

    #[test]
    fn childless_node_falls_back_to_seeded_column() {
        let leaf = SearchTree::new(0, Board::new(), Piece::One, &ThreatEvaluator);

        let first = Minimax::with_seed(42).best_move(&leaf, 1, -INFINITY, INFINITY, true);
        let second = Minimax::with_seed(42).best_move(&leaf, 1, -INFINITY, INFINITY, true);

        assert_eq!(first, second);
        assert_eq!(first.score, -INFINITY);
        assert!(first.column.is_some_and(|col| col < COLS));

        let min = Minimax::with_seed(42).best_move(&leaf, 1, -INFINITY, INFINITY, false);
        assert_eq!(min.score, INFINITY);
    }

    #[test]
    fn ties_keep_first_column() {
        // Every opening move scores zero at depth one
        let mut search = Minimax::with_seed(9);
        let tree = SearchTree::new(1, Board::new(), Piece::One, search.evaluator());
        let result = search.best_move(&tree, 1, -INFINITY, INFINITY, true);
        assert_eq!(result, SearchResult { column: Some(0), score: 0 });
    }

    #[test]
    fn filling_the_board_scores_as_the_bound() {
        // All but the last move of a drawn game; only column 6 remains
        let moves = [
            0, 1, 0, 1, 0, 1, 2, 3, 2, 3, 2, 3, 4, 5, 4, 5, 4, 5, 6, 0, 1, 0, 1, 0, 1, 2, 3,
            2, 3, 2, 3, 4, 5, 4, 5, 4, 5, 6, 6, 6, 6,
        ];
        let session = session(0, 2, &moves);
        assert_eq!(session.current().piece(), Piece::Two);

        let mut search = Minimax::with_seed(4);
        let tree = SearchTree::new(2, *session.board(), Piece::Two, search.evaluator());
        assert!(tree.children()[0].board().is_full());
        assert!(tree.children()[0].children().is_empty());

        let result = search.best_move(&tree, 2, -INFINITY, INFINITY, false);
        assert_eq!(
            result,
            SearchResult {
                column: Some(6),
                score: -INFINITY
            }
        );
    }

    #[test]
    fn pruning_preserves_minimax_value() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut search = Minimax::with_seed(11);

        for _ in 0..30 {
            let mut board = Board::new();
            let mut mover = Piece::One;
            for _ in 0..rng.random_range(0..16) {
                let legal = board.legal_columns();
                let col = legal[rng.random_range(0..legal.len())];
                board.drop_piece(col, mover).unwrap();
                mover = mover.other();
            }

            for depth in 1..=3 {
                let tree = SearchTree::new(depth, board, mover, search.evaluator());
                let maximizing = mover == Piece::One;
                let pruned = search.best_move(&tree, depth, -INFINITY, INFINITY, maximizing);
                assert_eq!(
                    pruned.score,
                    full_minimax(&tree, depth, maximizing),
                    "depth {depth} on\n{board}"
                );
            }
        }
    }
}
