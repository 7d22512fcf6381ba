use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lance::engine::TranspositionTable;
use lance::search::{deepen, search_root, SearchContext};
use lance::*;

fn bench_search_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_root");
    for depth in [2u8, 3] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut board = Board::new();
                let mut tt = TranspositionTable::with_capacity(200_000);
                let mut ctx = SearchContext::new(board.engine_color(), &mut tt);
                black_box(search_root(&mut board, depth, &mut ctx))
            })
        });
    }
    group.finish();
}

fn bench_deepening_middlegame(c: &mut Criterion) {
    let fen = "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQK2R w 3";
    c.bench_function("deepen_middlegame_d3", |b| {
        b.iter(|| {
            let mut board = Board::from_fen(fen).unwrap();
            let mut tt = TranspositionTable::with_capacity(200_000);
            let mut ctx = SearchContext::new(board.engine_color(), &mut tt);
            black_box(deepen(&mut board, 3, &mut ctx))
        })
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("legal_moves_start_white", |b| {
        b.iter(|| {
            let mut count = 0;
            for (sq, _) in board.pieces_of(Color::White) {
                count += board.legal_moves(black_box(sq)).len();
            }
            black_box(count)
        })
    });
}

criterion_group!(benches, bench_search_root, bench_deepening_middlegame, bench_legal_moves);
criterion_main!(benches);
