#[macro_use]
extern crate bencher;

use bencher::Bencher;
use gametree::tree::{Node, Tree};
use gametree::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_minimax(b: &mut Bencher) {
    let board = ttt::Board::default();
    b.iter(|| {
        let mut s = Minimax::<ttt::Game>::new(5);
        let m = s.choose_move(&board);
        assert!(m.is_some());
    });
}

fn bench_alphabeta(b: &mut Bencher) {
    let board = ttt::Board::default();
    b.iter(|| {
        let mut s = AlphaBeta::<ttt::Game>::new(5);
        let m = s.choose_move(&board);
        assert!(m.is_some());
    });
}

fn bench_alphabeta_random_tree(b: &mut Bencher) {
    let tree = Tree::new(Node::random(&mut StdRng::seed_from_u64(1), 8, 5));
    b.iter(|| {
        let mut s = AlphaBeta::<Tree>::new(8);
        s.search(&tree.root())
    });
}

benchmark_group!(benches, bench_minimax, bench_alphabeta, bench_alphabeta_random_tree);
benchmark_main!(benches);
