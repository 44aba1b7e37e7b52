//! Utility functions for driving games.

use super::interface::{Game, Strategy};
use log::debug;
use std::fmt::Debug;

/// Play a game from `state` with players using the two provided strategies,
/// `first` moving first.
///
/// Stops when the game is over or a strategy has no move to offer, and
/// returns the final state.
pub fn battle_royale<G>(
    mut state: G::S, first: &mut dyn Strategy<G>, second: &mut dyn Strategy<G>,
) -> G::S
where
    G: Game,
    G::M: Debug,
{
    let mut strategies: [&mut dyn Strategy<G>; 2] = [first, second];
    let mut s = 0;
    let mut ply = 0;
    while !G::is_game_over(&state) {
        let strategy = &mut strategies[s];
        match strategy.choose_move(&state) {
            Some(m) => {
                debug!("ply {}: strategy {} plays {:?}", ply, s, m);
                state = G::apply(&state, &m);
            }
            None => {
                debug!("ply {}: strategy {} has no move", ply, s);
                break;
            }
        }
        s = 1 - s;
        ply += 1;
    }
    state
}
