//! A strategy that picks uniformly among the legal moves.

use super::super::interface::*;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

pub struct Random<R = ThreadRng> {
    rng: R,
}

impl Random {
    pub fn new() -> Self {
        Self { rng: rand::thread_rng() }
    }
}

impl Default for Random {
    fn default() -> Self {
        Random::new()
    }
}

impl<R: Rng> Random<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<G: Game, R: Rng> Strategy<G> for Random<R> {
    fn choose_move(&mut self, s: &G::S) -> Option<G::M> {
        let mut moves = Vec::new();
        G::generate_moves(s, G::next_player_to_move(s), &mut moves);
        moves.choose(&mut self.rng).cloned()
    }
}
