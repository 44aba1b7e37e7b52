//! An implementation of minimax with alpha-beta pruning.
//!
//! Searches the same single-perspective tree as [`Minimax`](super::minimax::Minimax),
//! in the same move order, and returns the same root value and move. Branches
//! are abandoned as soon as they are proven unable to change the decision at
//! an ancestor, so it never visits more nodes than the exhaustive search.
//!
//! The bounds are passed down by value. Siblings never share them except
//! through the parent, which folds each child's result into its own copy.

use super::super::interface::*;
use super::util::*;
use log::{debug, trace};
use std::marker::PhantomData;

pub struct AlphaBeta<G: Game> {
    max_depth: usize,
    stats: SearchStats,
    prev_value: Evaluation,
    _game: PhantomData<G>,
}

impl<G: Game> AlphaBeta<G> {
    pub fn new(depth: usize) -> AlphaBeta<G> {
        AlphaBeta { max_depth: depth, stats: SearchStats::default(), prev_value: 0.0, _game: PhantomData }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Value of the root in the most recent search.
    pub fn root_value(&self) -> Evaluation {
        self.prev_value
    }

    /// Counters from the most recent search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Search from `s` for the player to move, returning the root's value
    /// and best move.
    pub fn search(&mut self, s: &G::S) -> SearchResult<G::M> {
        self.stats = SearchStats::default();
        debug!("alpha-beta search depth: {}", self.max_depth);
        let player = G::next_player_to_move(s);
        let result = self.max_value(s, player, self.max_depth, WORST_EVAL, BEST_EVAL);
        debug!(
            "alpha-beta searched {} nodes with {} cutoffs, value {}",
            self.stats.nodes, self.stats.cutoffs, result.value
        );
        self.prev_value = result.value;
        result
    }

    fn max_value(
        &mut self, s: &G::S, p: G::P, depth: usize, mut alpha: Evaluation, beta: Evaluation,
    ) -> SearchResult<G::M> {
        self.stats.nodes += 1;
        let moves = match successors::<G>(s, p, depth) {
            Some(moves) => moves,
            None => return evaluate::<G>(s, p, &mut self.stats),
        };
        let mut best = SearchResult::new(WORST_EVAL);
        let mut moves = moves.into_iter();
        while let Some(m) = moves.next() {
            let child = G::apply(s, &m);
            let value = self.min_value(&child, p, depth - 1, alpha, beta).value;
            // Alpha only follows the incumbent, not every returned value.
            if best.max(value, m) && best.value > alpha {
                alpha = best.value;
            }
            if best.value >= beta {
                self.cutoff(moves.len(), depth);
                return best;
            }
        }
        best
    }

    fn min_value(
        &mut self, s: &G::S, p: G::P, depth: usize, alpha: Evaluation, mut beta: Evaluation,
    ) -> SearchResult<G::M> {
        self.stats.nodes += 1;
        let moves = match successors::<G>(s, p, depth) {
            Some(moves) => moves,
            None => return evaluate::<G>(s, p, &mut self.stats),
        };
        let mut best = SearchResult::new(BEST_EVAL);
        let mut moves = moves.into_iter();
        while let Some(m) = moves.next() {
            let child = G::apply(s, &m);
            let value = self.max_value(&child, p, depth - 1, alpha, beta).value;
            if best.min(value, m) && best.value < beta {
                beta = best.value;
            }
            if best.value <= alpha {
                self.cutoff(moves.len(), depth);
                return best;
            }
        }
        best
    }

    // Only stopping with siblings left unsearched counts as a cutoff.
    fn cutoff(&mut self, skipped: usize, depth: usize) {
        if skipped > 0 {
            self.stats.cutoffs += 1;
            trace!("cutoff at depth {} skips {} moves", depth, skipped);
        }
    }
}

impl<G: Game> Strategy<G> for AlphaBeta<G> {
    fn choose_move(&mut self, s: &G::S) -> Option<G::M> {
        self.search(s).m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Node, Tree};

    #[test]
    fn depth_zero_returns_static_score() {
        let tree = Tree::new(Node::branch(vec![Node::leaf(1.0)]).with_value(-2.0));
        let mut alphabeta = AlphaBeta::<Tree>::new(0);
        assert_eq!(alphabeta.max_depth(), 0);
        assert_eq!(alphabeta.search(&tree.root()), SearchResult { value: -2.0, m: None });
        assert_eq!(alphabeta.choose_move(&tree.root()), None);
    }

    #[test]
    fn beta_cutoff_skips_remaining_siblings() {
        // After the first subtree the root has alpha = 3. The second subtree's
        // first leaf (2) already proves it is no better, so 9 is never seen.
        let tree = Tree::new(Node::branch(vec![
            Node::branch(vec![Node::leaf(3.0), Node::leaf(5.0)]),
            Node::branch(vec![Node::leaf(2.0), Node::leaf(9.0)]),
        ]));
        let mut alphabeta = AlphaBeta::<Tree>::new(2);
        assert_eq!(alphabeta.search(&tree.root()), SearchResult { value: 3.0, m: Some(0) });
        assert_eq!(alphabeta.stats(), SearchStats { nodes: 6, leaves: 3, cutoffs: 1 });
    }

    #[test]
    fn no_cutoff_when_nothing_is_proven() {
        let tree = Tree::new(Node::branch(vec![
            Node::branch(vec![Node::leaf(1.0), Node::leaf(5.0)]),
            Node::branch(vec![Node::leaf(7.0), Node::leaf(4.0)]),
        ]));
        let mut alphabeta = AlphaBeta::<Tree>::new(2);
        assert_eq!(alphabeta.search(&tree.root()), SearchResult { value: 4.0, m: Some(1) });
        assert_eq!(alphabeta.stats(), SearchStats { nodes: 7, leaves: 4, cutoffs: 0 });
    }
}
