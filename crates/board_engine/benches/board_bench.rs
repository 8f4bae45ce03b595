//! Board Engine Benchmarks
//!
//! Layout construction, move/undo cycles and notation parsing using Criterion.

use board_engine::{Board, CoordinateMapper, GameSession, Square, Variant};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_new_boards(c: &mut Criterion) {
    for variant in Variant::ALL {
        c.bench_function(&format!("new_board_{variant:?}"), |b| {
            b.iter(|| black_box(Board::new(variant)))
        });
    }
}

fn bench_move_and_undo_chess(c: &mut Criterion) {
    let mut board = Board::new(Variant::Chess);

    c.bench_function("move_and_undo_chess", |b| {
        b.iter(|| {
            let outcome = board.move_piece(Square::new(6, 4), Square::new(4, 4));
            black_box(outcome);
            black_box(board.undo_move())
        })
    });
}

fn bench_checkers_jump_and_undo(c: &mut Criterion) {
    let mut board = Board::new(Variant::Checkers);
    board.move_piece(Square::new(5, 2), Square::new(4, 3));
    board.move_piece(Square::new(2, 5), Square::new(3, 4));

    c.bench_function("checkers_jump_and_undo", |b| {
        b.iter(|| {
            let outcome = board.move_piece(Square::new(4, 3), Square::new(2, 5));
            black_box(outcome);
            black_box(board.undo_move())
        })
    });
}

fn bench_parse_notation(c: &mut Criterion) {
    c.bench_function("parse_notation", |b| {
        b.iter(|| {
            black_box(CoordinateMapper::parse(Variant::HexChess, black_box("E10")))
        })
    });
}

fn bench_session_steps(c: &mut Criterion) {
    c.bench_function("session_ten_steps", |b| {
        b.iter(|| {
            let mut session = GameSession::new(Variant::Checkers);
            for (start, end) in [
                ("c3", "d4"),
                ("f6", "e5"),
                ("d4", "f6"),
                ("undo", ""),
                ("b6", "a5"),
                ("a3", "b4"),
                ("a5", "c3"),
                ("undo", ""),
                ("g3", "h4"),
                ("h6", "g5"),
            ] {
                black_box(session.step(start, end));
            }
            black_box(session.move_count())
        })
    });
}

criterion_group!(
    benches,
    bench_new_boards,
    bench_move_and_undo_chess,
    bench_checkers_jump_and_undo,
    bench_parse_notation,
    bench_session_steps,
);
criterion_main!(benches);
