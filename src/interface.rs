//! The common structures and traits.

/// An assessment of a game state from the perspective of one player.
/// Higher values mean a more favorable state.
///
/// The infinities are valid evaluations and double as the initial bounds of
/// a search. Ties are exact equality; there is no tolerance.
pub type Evaluation = f64;

/// An absolutely wonderful outcome, e.g. a win.
pub const BEST_EVAL: Evaluation = f64::INFINITY;
/// An absolutely disastrous outcome, e.g. a loss.
pub const WORST_EVAL: Evaluation = f64::NEG_INFINITY;

/// Defines the rules for a two-player, perfect-knowledge, zero-sum game.
///
/// A game ties together types for the state, moves and players. Strategies
/// only ever look at a state through these functions and never modify a state
/// they are given; new states are requested with [`Game::apply`].
pub trait Game: Sized {
    /// The type of the game state.
    type S: Clone;
    /// The type of game moves.
    type M: Clone;
    /// Identifies a side of the game.
    type P: Copy;

    /// Append the legal moves for `p` at the given state to `moves`.
    ///
    /// The order must be deterministic: searchers break ties in favor of the
    /// move generated first.
    fn generate_moves(s: &Self::S, p: Self::P, moves: &mut Vec<Self::M>);

    /// Return a new state with `m` applied, leaving `s` untouched.
    fn apply(s: &Self::S, m: &Self::M) -> Self::S;

    /// Whether the state is terminal.
    fn is_game_over(s: &Self::S) -> bool;

    /// Static evaluation of the state from the perspective of `p`.
    fn score(s: &Self::S, p: Self::P) -> Evaluation;

    /// The player whose turn it is.
    fn next_player_to_move(s: &Self::S) -> Self::P;
}

/// Defines a method of choosing a move for the player to move.
///
/// `None` means there is nothing to propose, e.g. no legal moves. Callers
/// should treat it as a pass or resignation rather than a failure.
pub trait Strategy<G: Game> {
    fn choose_move(&mut self, s: &G::S) -> Option<G::M>;
}
