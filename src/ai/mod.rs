//! Bot move selection: static evaluation, the lookahead tree and alpha-beta
//! minimax over it.

mod evaluator;
mod minimax;
mod tree;

pub use evaluator::{Evaluator, ThreatEvaluator, WIN_SCORE};
pub use minimax::{Minimax, SearchResult, INFINITY};
pub use tree::SearchTree;
