//! A definition of the game Tic-Tac-Toe using the library, for use in tests.
//!
//! For example, playing a correctly-implemented strategy against itself should
//! always result in a draw; and playing such a strategy against one that picks
//! moves randomly should always result in a win or draw.

use super::interface::{self, Evaluation, BEST_EVAL, WORST_EVAL};
use std::fmt::{Display, Formatter, Result};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Square {
    #[default]
    Empty,
    X,
    O,
}

impl Square {
    pub fn invert(&self) -> Self {
        match *self {
            Square::Empty => Square::Empty,
            Square::X => Square::O,
            Square::O => Square::X,
        }
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(
            f,
            "{}",
            match *self {
                Square::Empty => ' ',
                Square::X => 'X',
                Square::O => 'O',
            }
        )
    }
}

const LINES: [[usize; 3]; 8] = [
    // horizontal
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // vertical
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // diagonal
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Square; 9],
    to_move: Square,
}

impl Board {
    /// Build a board from a row-major picture using `X`, `O` and `.`. The
    /// side to move is whoever has placed fewer marks, X on a tie.
    ///
    /// Returns `None` on any other character or a length other than 9.
    pub fn from_picture(picture: &str) -> Option<Board> {
        let mut squares = [Square::Empty; 9];
        let mut n = 0;
        for c in picture.chars().filter(|c| !c.is_whitespace()) {
            let square = match c {
                'X' => Square::X,
                'O' => Square::O,
                '.' => Square::Empty,
                _ => return None,
            };
            *squares.get_mut(n)? = square;
            n += 1;
        }
        if n != 9 {
            return None;
        }
        let xs = squares.iter().filter(|&&s| s == Square::X).count();
        let os = squares.iter().filter(|&&s| s == Square::O).count();
        let to_move = if xs > os { Square::O } else { Square::X };
        Some(Board { squares, to_move })
    }

    pub fn to_move(&self) -> Square {
        self.to_move
    }

    pub fn square(&self, i: usize) -> Square {
        self.squares[i]
    }

    /// The mark with three in a row, if any.
    pub fn winner(&self) -> Option<Square> {
        LINES.iter().find_map(|&[a, b, c]| {
            let s = self.squares[a];
            if s != Square::Empty && s == self.squares[b] && s == self.squares[c] {
                Some(s)
            } else {
                None
            }
        })
    }

    fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board { squares: [Square::default(); 9], to_move: Square::X }
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter) -> Result {
        writeln!(f, "{} | {} | {}", self.squares[0], self.squares[1], self.squares[2])?;
        writeln!(f, "{} | {} | {}", self.squares[3], self.squares[4], self.squares[5])?;
        writeln!(f, "{} | {} | {}", self.squares[6], self.squares[7], self.squares[8])?;
        Ok(())
    }
}

pub struct Game;

impl interface::Game for Game {
    type S = Board;
    type M = Place;
    type P = Square;

    // The empty squares are the legal moves for either side.
    fn generate_moves(b: &Board, _: Square, ms: &mut Vec<Place>) {
        for i in 0..b.squares.len() {
            if b.squares[i] == Square::Empty {
                ms.push(Place { i: i as u8 });
            }
        }
    }

    fn apply(b: &Board, m: &Place) -> Board {
        let mut next = b.clone();
        next.squares[m.i as usize] = b.to_move;
        next.to_move = b.to_move.invert();
        next
    }

    fn is_game_over(b: &Board) -> bool {
        b.winner().is_some() || b.is_full()
    }

    // adapted from http://www.cs.olemiss.edu/~dwilkins/CSCI531/tic.c
    fn score(b: &Board, p: Square) -> Evaluation {
        match b.winner() {
            Some(w) if w == p => return BEST_EVAL,
            Some(_) => return WORST_EVAL,
            None => {}
        }
        let mut score = 0;

        // 3rd: check for doubles
        for &[first, middle, last] in LINES.iter() {
            for &(i, j) in &[(first, middle), (middle, last)] {
                if b.squares[i] == b.squares[j] {
                    if b.squares[i] == p {
                        score += 5;
                    } else if b.squares[i] == p.invert() {
                        score -= 5;
                    }
                }
            }
        }
        // 2nd: check for the middle square
        if b.squares[4] == p {
            score += 5;
        } else if b.squares[4] == p.invert() {
            score -= 5;
        }
        score as Evaluation
    }

    fn next_player_to_move(b: &Board) -> Square {
        b.to_move
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Place {
    i: u8,
}

impl Place {
    /// The move onto square `i`, counting row by row from the top left.
    pub fn new(i: u8) -> Option<Place> {
        if i < 9 {
            Some(Place { i })
        } else {
            None
        }
    }

    pub fn index(&self) -> usize {
        self.i as usize
    }
}

impl Display for Place {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "@{}", self.i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::Game as _;

    #[test]
    fn picture_round_trips_through_display() {
        let b = Board::from_picture("X.O .X. ..O").unwrap();
        assert_eq!(b.to_move(), Square::X);
        assert_eq!(b.to_string(), "X |   | O\n  | X |  \n  |   | O\n");
        assert!(Board::from_picture("X.O").is_none());
        assert!(Board::from_picture("X.O .X. ..Q").is_none());
    }

    #[test]
    fn apply_places_mark_of_player_to_move() {
        let b = Board::default();
        let after = Game::apply(&b, &Place::new(4).unwrap());
        assert_eq!(b, Board::default());
        assert_eq!(after.square(4), Square::X);
        assert_eq!(after.to_move(), Square::O);
    }

    #[test]
    fn places_are_square_indices() {
        assert_eq!(Place::new(8).map(|p| p.index()), Some(8));
        assert_eq!(Place::new(9), None);
    }

    #[test]
    fn wins_score_from_either_side() {
        let b = Board::from_picture("XXX OO. ...").unwrap();
        assert_eq!(b.winner(), Some(Square::X));
        assert!(Game::is_game_over(&b));
        assert_eq!(Game::score(&b, Square::X), BEST_EVAL);
        assert_eq!(Game::score(&b, Square::O), WORST_EVAL);
    }

    #[test]
    fn heuristic_is_zero_sum() {
        let b = Board::from_picture("X.. .O. ..X").unwrap();
        assert_eq!(Game::score(&b, Square::X), -Game::score(&b, Square::O));
        assert!(!Game::is_game_over(&b));
    }

    #[test]
    fn full_board_is_over() {
        let b = Board::from_picture("XOX XOO OXX").unwrap();
        assert_eq!(b.winner(), None);
        assert!(Game::is_game_over(&b));
        let mut moves = Vec::new();
        Game::generate_moves(&b, Square::O, &mut moves);
        assert!(moves.is_empty());
    }
}
