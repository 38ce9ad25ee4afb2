use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::shapes::spawn_position;
use blockfall::core::{ActivePiece, Board, Game, GameConfig, GameSnapshot, Timing};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{Block, CellPos, InputEvent, PieceId, ShapeKind, Vec2, FIXED_TICK};

fn bench_frame_update(c: &mut Criterion) {
    let mut game = Game::new(GameConfig::default());
    game.start();

    c.bench_function("frame_update_16ms", |b| {
        b.iter(|| {
            game.frame_update(black_box(Duration::from_millis(16)), &[]);
        })
    });
}

fn bench_fixed_update_held(c: &mut Criterion) {
    let mut game = Game::new(GameConfig::default());
    game.start();
    game.frame_update(Duration::ZERO, &[InputEvent::LeftDown, InputEvent::DownDown]);

    c.bench_function("fixed_update_held", |b| {
        b.iter(|| {
            game.fixed_update(black_box(FIXED_TICK));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let wall = Block {
        owner: PieceId(1),
        kind: ShapeKind::I,
    };
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::default();
            for y in 0..4 {
                for x in 0..10 {
                    board.set_cell(CellPos::new(x, y), wall);
                }
            }
            black_box(board.delete_full_rows(0));
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut board = Board::default();
    let pos = spawn_position(ShapeKind::T, 10, 20);
    let mut piece =
        ActivePiece::spawn(PieceId(1), ShapeKind::T, pos, Timing::default(), &mut board).expect("empty board");
    let mut dir = Vec2::LEFT;

    c.bench_function("try_move", |b| {
        b.iter(|| {
            if !piece.try_move(&mut board, dir) {
                dir = -dir;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut board = Board::default();
    let pos = spawn_position(ShapeKind::L, 10, 20) + Vec2::DOWN;
    let mut piece =
        ActivePiece::spawn(PieceId(1), ShapeKind::L, pos, Timing::default(), &mut board).expect("empty board");

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(piece.rotate(&mut board));
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut game = Game::new(GameConfig::default());
    game.start();
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            game.snapshot_into(&mut snapshot);
            view.render_into(&snapshot, viewport, &mut fb);
            black_box(&fb);
        })
    });
}

criterion_group!(
    benches,
    bench_frame_update,
    bench_fixed_update_held,
    bench_line_clear,
    bench_try_move,
    bench_rotate,
    bench_render
);
criterion_main!(benches);
