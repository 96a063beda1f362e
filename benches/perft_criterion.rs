//! Perft throughput benchmark with a correctness guard.
//!
//! Each case first asserts the expected node count, so a generator
//! regression fails loudly instead of producing a fast-but-wrong number.
//! Depths are chosen below the first promotion in each position, where the
//! queen-only promotion policy does not affect the counts.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use quince_chess::game_state::game_state::GameState;
use quince_chess::move_generation::perft::perft;
use quince_chess::utils::fen_parser::parse_fen;

struct BenchCase {
    name: &'static str,
    fen: &'static str,
    depth: u8,
    expected_nodes: u64,
}

const CASES: [BenchCase; 3] = [
    BenchCase {
        name: "startpos_depth_3",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        depth: 3,
        expected_nodes: 8_902,
    },
    BenchCase {
        name: "kiwipete_depth_2",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        depth: 2,
        expected_nodes: 2_039,
    },
    BenchCase {
        name: "endgame_depth_3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        depth: 3,
        expected_nodes: 2_812,
    },
];

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    for case in &CASES {
        let game_state: GameState = parse_fen(case.fen).expect("bench FEN should parse");

        let nodes = perft(&game_state, case.depth).expect("perft should succeed");
        assert_eq!(
            nodes, case.expected_nodes,
            "perft correctness guard failed for {}",
            case.name
        );

        group.bench_function(case.name, |b| {
            b.iter(|| {
                let nodes = perft(black_box(&game_state), black_box(case.depth))
                    .expect("perft should succeed");
                black_box(nodes)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_perft);
criterion_main!(benches);
