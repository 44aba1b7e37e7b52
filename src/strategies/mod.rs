//! Strategy implementations.

pub mod alphabeta;
pub mod human;
pub mod minimax;
pub mod random;
mod util;

pub use self::util::{SearchResult, SearchStats};
