//! A strategy that asks a person to pick from the legal moves.

use super::super::interface::*;
use log::warn;
use std::fmt::Display;
use std::io::{self, BufRead, BufReader, Stdin, Stdout, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("failed to read a move: {0}")]
    Io(#[from] io::Error),
    #[error("no more input")]
    EndOfInput,
    #[error("`{0}` is not a move number")]
    InvalidNumber(String),
    #[error("there is no move {index}; choose 0 to {last}")]
    OutOfRange { index: usize, last: usize },
}

impl PromptError {
    // Whether asking again could succeed.
    fn is_recoverable(&self) -> bool {
        matches!(self, PromptError::InvalidNumber(_) | PromptError::OutOfRange { .. })
    }
}

/// Lists the moves on `output` and reads the chosen index from `input`.
pub struct Human<R, W> {
    input: R,
    output: W,
}

impl Human<BufReader<Stdin>, Stdout> {
    pub fn stdio() -> Self {
        Human::new(BufReader::new(io::stdin()), io::stdout())
    }
}

impl<R: BufRead, W: Write> Human<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Human { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt<M: Display>(&mut self, moves: &[M]) -> Result<usize, PromptError> {
        for (i, m) in moves.iter().enumerate() {
            writeln!(self.output, "{}: {}", i, m)?;
        }
        write!(self.output, "Please choose a move: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::EndOfInput);
        }
        let answer = line.trim();
        let index: usize =
            answer.parse().map_err(|_| PromptError::InvalidNumber(answer.to_string()))?;
        if index >= moves.len() {
            return Err(PromptError::OutOfRange { index, last: moves.len() - 1 });
        }
        Ok(index)
    }
}

impl<G: Game, R: BufRead, W: Write> Strategy<G> for Human<R, W>
where
    G::M: Display,
{
    fn choose_move(&mut self, s: &G::S) -> Option<G::M> {
        let mut moves = Vec::new();
        G::generate_moves(s, G::next_player_to_move(s), &mut moves);
        if moves.is_empty() {
            return None;
        }
        loop {
            match self.prompt(&moves) {
                Ok(index) => return Some(moves.swap_remove(index)),
                Err(e) if e.is_recoverable() => {
                    if writeln!(self.output, "{}", e).is_err() {
                        return None;
                    }
                }
                Err(e) => {
                    warn!("no move chosen: {}", e);
                    return None;
                }
            }
        }
    }
}
