use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use evaluation::{evaluate, EvalParams};
use utils::Position;

/// Perft positions from https://github.com/AndyGrant/Ethereal/blob/master/src/perft/standard.epd
const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "rnbqkb1r/ppppp1pp/7n/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
];

fn bench_evaluate(c: &mut Criterion) {
    let params = EvalParams::default();
    let mut group = c.benchmark_group("evaluate");

    for fen in POSITIONS {
        let position: Position = fen.parse().unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(fen), &position, |b, position| {
            b.iter(|| black_box(evaluate(black_box(position), &params)))
        });
    }

    group.finish();
}

fn bench_parse_and_evaluate(c: &mut Criterion) {
    let params = EvalParams::default();

    c.bench_function("evaluate_fen/all", |b| {
        b.iter(|| {
            for fen in POSITIONS {
                black_box(evaluation::evaluate_fen(black_box(fen), &params).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_evaluate, bench_parse_and_evaluate);
criterion_main!(benches);
