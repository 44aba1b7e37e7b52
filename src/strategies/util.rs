use super::super::interface::*;

/// The outcome of searching one node: its value, and the move leading to it.
///
/// `m` is `None` at leaves (terminal, depth exhausted, or no moves).
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult<M> {
    pub value: Evaluation,
    pub m: Option<M>,
}

impl<M> SearchResult<M> {
    pub(super) fn new(value: Evaluation) -> Self {
        Self { value, m: None }
    }

    // The first candidate is always taken, so a node with moves never comes
    // back without one, even if every value is WORST_EVAL.
    pub(super) fn max(&mut self, value: Evaluation, m: M) -> bool {
        debug_assert!(!value.is_nan());
        if self.m.is_none() || value > self.value {
            self.value = value;
            self.m = Some(m);
            true
        } else {
            false
        }
    }

    pub(super) fn min(&mut self, value: Evaluation, m: M) -> bool {
        debug_assert!(!value.is_nan());
        if self.m.is_none() || value < self.value {
            self.value = value;
            self.m = Some(m);
            true
        } else {
            false
        }
    }
}

/// Counters for a single search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes entered, leaves included.
    pub nodes: u64,
    /// Static evaluations.
    pub leaves: u64,
    /// Branches abandoned by an alpha or beta cutoff.
    pub cutoffs: u64,
}

// Moves to search below `s`, or None if `s` is a leaf at this depth.
//
// Moves are generated for the fixed root player on every ply, including the
// minimizing ones, rather than for the opponent. This reproduces the
// established single-perspective behavior of these searchers; it is only a
// true adversarial search for games whose move sets do not depend on the
// player.
pub(super) fn successors<G: Game>(s: &G::S, p: G::P, depth: usize) -> Option<Vec<G::M>> {
    if depth == 0 || G::is_game_over(s) {
        return None;
    }
    let mut moves = Vec::new();
    G::generate_moves(s, p, &mut moves);
    if moves.is_empty() {
        None
    } else {
        Some(moves)
    }
}

pub(super) fn evaluate<G: Game>(s: &G::S, p: G::P, stats: &mut SearchStats) -> SearchResult<G::M> {
    stats.leaves += 1;
    SearchResult::new(G::score(s, p))
}
