//! An implementation of exhaustive, depth-bounded minimax.
//!
//! The player to move at the root is maximized and its evaluation is kept
//! for the whole tree: on alternate plies the same evaluation is minimized.
//! Nothing is pruned, so this visits every node down to the depth limit. It
//! serves as the reference that the pruned searchers must agree with.

use super::super::interface::*;
use super::util::*;
use log::debug;
use std::marker::PhantomData;

pub struct Minimax<G: Game> {
    max_depth: usize,
    stats: SearchStats,
    prev_value: Evaluation,
    _game: PhantomData<G>,
}

impl<G: Game> Minimax<G> {
    pub fn new(depth: usize) -> Minimax<G> {
        Minimax { max_depth: depth, stats: SearchStats::default(), prev_value: 0.0, _game: PhantomData }
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
        debug!("minimax search depth: {}", self.max_depth);
        let player = G::next_player_to_move(s);
        let result = self.max_value(s, player, self.max_depth);
        debug!("minimax searched {} nodes, value {}", self.stats.nodes, result.value);
        self.prev_value = result.value;
        result
    }

    fn max_value(&mut self, s: &G::S, p: G::P, depth: usize) -> SearchResult<G::M> {
        self.stats.nodes += 1;
        let moves = match successors::<G>(s, p, depth) {
            Some(moves) => moves,
            None => return evaluate::<G>(s, p, &mut self.stats),
        };
        let mut best = SearchResult::new(WORST_EVAL);
        for m in moves {
            let child = G::apply(s, &m);
            let value = self.min_value(&child, p, depth - 1).value;
            best.max(value, m);
        }
        best
    }

    fn min_value(&mut self, s: &G::S, p: G::P, depth: usize) -> SearchResult<G::M> {
        self.stats.nodes += 1;
        let moves = match successors::<G>(s, p, depth) {
            Some(moves) => moves,
            None => return evaluate::<G>(s, p, &mut self.stats),
        };
        let mut best = SearchResult::new(BEST_EVAL);
        for m in moves {
            let child = G::apply(s, &m);
            let value = self.max_value(&child, p, depth - 1).value;
            best.min(value, m);
        }
        best
    }
}

impl<G: Game> Strategy<G> for Minimax<G> {
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
        let tree = Tree::new(Node::branch(vec![Node::leaf(1.0), Node::leaf(2.0)]).with_value(7.5));
        let mut minimax = Minimax::<Tree>::new(0);
        let result = minimax.search(&tree.root());
        assert_eq!(result, SearchResult { value: 7.5, m: None });
        assert_eq!(minimax.choose_move(&tree.root()), None);
        assert_eq!(minimax.stats(), SearchStats { nodes: 1, leaves: 1, cutoffs: 0 });
    }

    #[test]
    fn terminal_root_is_not_expanded() {
        let tree = Tree::new(Node::leaf(-4.0));
        let mut minimax = Minimax::<Tree>::new(5);
        assert_eq!(minimax.search(&tree.root()), SearchResult { value: -4.0, m: None });
        assert_eq!(minimax.stats(), SearchStats { nodes: 1, leaves: 1, cutoffs: 0 });
    }

    #[test]
    fn maximizes_over_minimized_children() {
        let tree = Tree::new(Node::branch(vec![
            Node::branch(vec![Node::leaf(3.0), Node::leaf(5.0)]),
            Node::branch(vec![Node::leaf(7.0), Node::leaf(2.0)]),
        ]));
        let mut minimax = Minimax::<Tree>::new(2);
        assert_eq!(minimax.max_depth(), 2);
        assert_eq!(minimax.search(&tree.root()), SearchResult { value: 3.0, m: Some(0) });
        assert_eq!(minimax.root_value(), 3.0);
        assert_eq!(minimax.stats(), SearchStats { nodes: 7, leaves: 4, cutoffs: 0 });
    }

    #[test]
    fn depth_limit_uses_interior_scores() {
        let tree = Tree::new(Node::branch(vec![
            Node::branch(vec![Node::leaf(100.0)]).with_value(1.0),
            Node::branch(vec![Node::leaf(-100.0)]).with_value(2.0),
        ]));
        let mut minimax = Minimax::<Tree>::new(1);
        assert_eq!(minimax.choose_move(&tree.root()), Some(1));
        assert_eq!(minimax.root_value(), 2.0);
    }
}
