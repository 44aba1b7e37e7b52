use std::str::FromStr;

use gametree::ttt::{self, Board, Square};
use gametree::util::battle_royale;
use gametree::{AlphaBeta, Game as _, Human, Minimax, Random, Strategy};
use log::info;
use structopt::StructOpt;
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum StrategyKind {
    Human,
    Random,
    Minimax,
    AlphaBeta,
}

#[derive(Error, Debug)]
#[error("unknown strategy `{0}`; expected human, random, minimax or alpha-beta")]
struct ParseStrategyError(String);

impl FromStr for StrategyKind {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(StrategyKind::Human),
            "random" => Ok(StrategyKind::Random),
            "minimax" => Ok(StrategyKind::Minimax),
            "alpha-beta" | "alphabeta" => Ok(StrategyKind::AlphaBeta),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

impl StrategyKind {
    fn build(self, depth: usize) -> Box<dyn Strategy<ttt::Game>> {
        match self {
            StrategyKind::Human => Box::new(Human::stdio()),
            StrategyKind::Random => Box::new(Random::new()),
            StrategyKind::Minimax => Box::new(Minimax::<ttt::Game>::new(depth)),
            StrategyKind::AlphaBeta => Box::new(AlphaBeta::<ttt::Game>::new(depth)),
        }
    }
}

#[derive(StructOpt)]
#[structopt(
    name = "gametree",
    about = "Play tic-tac-toe between two strategies. Each side is one of `human`, `random`, `minimax` or `alpha-beta`; the searching strategies look `--depth` plies ahead (default: 9). Set RUST_LOG=debug to see search statistics."
)]
struct Args {
    #[structopt(long, default_value = "alpha-beta")]
    x: StrategyKind,
    #[structopt(long, default_value = "human")]
    o: StrategyKind,
    #[structopt(short, long, default_value = "9")]
    depth: usize,
}

fn main() {
    env_logger::init();
    let args = Args::from_args();
    info!("X: {:?}, O: {:?}, depth {}", args.x, args.o, args.depth);

    let mut x = args.x.build(args.depth);
    let mut o = args.o.build(args.depth);
    let end = battle_royale::<ttt::Game>(Board::default(), x.as_mut(), o.as_mut());

    println!("{}", end);
    match end.winner() {
        Some(Square::X) => println!("X wins"),
        Some(Square::O) => println!("O wins"),
        _ if ttt::Game::is_game_over(&end) => println!("Draw"),
        _ => println!("Game abandoned"),
    }
}
