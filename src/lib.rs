//! Depth-bounded game tree search for two-player, perfect-information,
//! zero-sum games.
//!
//! A game describes itself by implementing [`Game`]; a [`Strategy`] picks a
//! move for the player to move. [`Minimax`] searches the whole tree down to a
//! fixed depth and [`AlphaBeta`] finds the same answer while pruning branches
//! that cannot matter. [`Random`] and [`Human`] round out the set of players.

pub mod interface;
pub mod strategies;
pub mod tree;
pub mod ttt;
pub mod util;

pub use interface::{Evaluation, Game, Strategy, BEST_EVAL, WORST_EVAL};
pub use strategies::alphabeta::AlphaBeta;
pub use strategies::human::{Human, PromptError};
pub use strategies::minimax::Minimax;
pub use strategies::random::Random;
pub use strategies::{SearchResult, SearchStats};
