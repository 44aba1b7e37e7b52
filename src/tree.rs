//! Explicit game trees, for use in tests and benchmarks.
//!
//! Every node carries its own static evaluation; a node without children is
//! terminal. A move is the index of a child. Both players share the same tree,
//! so move generation ignores the player and scores are absolute.

use super::interface;
use rand::Rng;
use std::rc::Rc;

#[derive(Debug)]
pub struct Node {
    value: interface::Evaluation,
    children: Vec<Rc<Node>>,
}

impl Node {
    pub fn leaf(value: interface::Evaluation) -> Node {
        Node { value, children: Vec::new() }
    }

    /// An interior node, with a static evaluation of zero.
    pub fn branch(children: Vec<Node>) -> Node {
        Node { value: 0.0, children: children.into_iter().map(Rc::new).collect() }
    }

    /// Replace the static evaluation, used when the search stops here early.
    pub fn with_value(mut self, value: interface::Evaluation) -> Node {
        self.value = value;
        self
    }

    /// A complete tree of the given depth and branching factor, taking leaf
    /// values from `leaves` left to right.
    ///
    /// Returns `None` if `leaves` runs out.
    pub fn uniform(depth: usize, branching: usize, leaves: &[interface::Evaluation]) -> Option<Node> {
        let mut leaves = leaves.iter().copied();
        Node::uniform_from(depth, branching, &mut leaves)
    }

    fn uniform_from<I>(depth: usize, branching: usize, leaves: &mut I) -> Option<Node>
    where
        I: Iterator<Item = interface::Evaluation>,
    {
        if depth == 0 {
            return leaves.next().map(Node::leaf);
        }
        let children = (0..branching)
            .map(|_| Node::uniform_from(depth - 1, branching, leaves))
            .collect::<Option<Vec<_>>>()?;
        Some(Node::branch(children))
    }

    /// A tree with random shape and values. Values are small integers so that
    /// ties are common. Interior nodes get values too, so searches cut short
    /// by the depth limit see something other than zero.
    pub fn random<R: Rng>(rng: &mut R, depth: usize, max_branching: usize) -> Node {
        let value = rng.gen_range(-8..=8) as interface::Evaluation;
        if depth == 0 {
            return Node::leaf(value);
        }
        let branching = rng.gen_range(0..=max_branching);
        let children = (0..branching).map(|_| Node::random(rng, depth - 1, max_branching)).collect();
        Node::branch(children).with_value(value)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// The game of walking down a fixed tree.
pub struct Tree {
    root: Rc<Node>,
}

impl Tree {
    pub fn new(root: Node) -> Tree {
        Tree { root: Rc::new(root) }
    }

    pub fn root(&self) -> Position {
        Position { node: Rc::clone(&self.root) }
    }
}

/// A node of a [`Tree`].
#[derive(Clone, Debug)]
pub struct Position {
    node: Rc<Node>,
}

impl Position {
    pub fn value(&self) -> interface::Evaluation {
        self.node.value
    }
}

impl interface::Game for Tree {
    type S = Position;
    type M = usize;
    type P = ();

    fn generate_moves(s: &Position, _: (), moves: &mut Vec<usize>) {
        moves.extend(0..s.node.children.len());
    }

    fn apply(s: &Position, m: &usize) -> Position {
        Position { node: Rc::clone(&s.node.children[*m]) }
    }

    fn is_game_over(s: &Position) -> bool {
        s.node.is_leaf()
    }

    fn score(s: &Position, _: ()) -> interface::Evaluation {
        s.node.value
    }

    fn next_player_to_move(_: &Position) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::Game;

    #[test]
    fn uniform_fills_leaves_in_order() {
        let tree = Tree::new(Node::uniform(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap());
        let root = tree.root();
        let right = Tree::apply(&root, &1);
        assert_eq!(Tree::score(&Tree::apply(&right, &0), ()), 3.0);
        assert!(!Tree::is_game_over(&right));
        assert!(Tree::is_game_over(&Tree::apply(&right, &1)));
    }

    #[test]
    fn apply_leaves_position_untouched() {
        let tree = Tree::new(Node::uniform(1, 3, &[5.0, 6.0, 7.0]).unwrap());
        let root = tree.root();
        let child = Tree::apply(&root, &2);
        assert_eq!(child.value(), 7.0);
        let mut moves = Vec::new();
        Tree::generate_moves(&root, (), &mut moves);
        assert_eq!(moves, vec![0, 1, 2]);
    }

    #[test]
    fn uniform_needs_enough_leaves() {
        assert!(Node::uniform(2, 2, &[1.0, 2.0, 3.0]).is_none());
        assert!(Node::uniform(0, 5, &[]).is_none());
        assert!(Node::uniform(0, 5, &[1.0]).unwrap().is_leaf());
    }
}
