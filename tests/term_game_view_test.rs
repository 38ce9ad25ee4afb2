use blockfall::core::{Game, GameConfig, SequenceSpawner};
use blockfall::term::{encode_diff_into, encode_full_into, FrameBuffer, GameView, Viewport};
use blockfall::types::{InputEvent, ShapeKind};

fn frame_text(fb: &FrameBuffer) -> Vec<String> {
    (0..fb.height())
        .map(|y| fb.row(y).iter().map(|g| g.ch).collect())
        .collect()
}

#[test]
fn test_spawned_piece_is_drawn_near_top() {
    let mut game = Game::with_spawner(GameConfig::default(), SequenceSpawner::new([ShapeKind::I]));
    game.start();

    let view = GameView::default();
    let viewport = Viewport::new(60, 24);
    let fb = view.render(&game.snapshot(), viewport);
    let frame = view.frame_rect(&game.snapshot(), viewport);
    let lines = frame_text(&fb);

    // I spawns on row 18, the second visible line from the top.
    let line = &lines[(frame.y + 2) as usize];
    assert_eq!(line.matches('█').count(), 8);
    assert_eq!(lines[(frame.y + 1) as usize].matches('█').count(), 0);
}

#[test]
fn test_diff_after_move_is_smaller_than_full_redraw() {
    let mut game = Game::with_spawner(GameConfig::default(), SequenceSpawner::new([ShapeKind::T]));
    game.start();
    let view = GameView::default();
    let viewport = Viewport::new(60, 24);
    let before = view.render(&game.snapshot(), viewport);

    game.frame_update(std::time::Duration::ZERO, &[InputEvent::LeftDown, InputEvent::LeftUp]);
    let after = view.render(&game.snapshot(), viewport);
    assert_ne!(before, after);

    let mut full = Vec::new();
    encode_full_into(&after, &mut full).unwrap();
    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    assert!(!diff.is_empty());
    assert!(diff.len() * 4 < full.len());
}

#[test]
fn test_small_viewport_does_not_panic() {
    let mut game = Game::new(GameConfig::default());
    game.start();
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(5, 3));
    assert_eq!((fb.width(), fb.height()), (5, 3));
}
