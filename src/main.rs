//! Terminal blockfall runner (default binary).
//!
//! Reads terminal keys, feeds input edges to the engine once per frame and
//! runs the fixed-step update from an accumulator. Set
//! `BLOCKFALL_LOG_PATH` to journal game events as JSONL.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use blockfall::core::{Game, GameConfig, GameSnapshot, RandomSpawner, SequenceSpawner, Spawner};
use blockfall::input::{should_quit, KeyTracker, DEFAULT_KEY_RELEASE_TIMEOUT};
use blockfall::journal::EventJournal;
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameEvent, InputEvent, FIXED_TICK, FRAME_TICK};

/// Fixed steps run per frame at most; the rest of a long stall is dropped.
const MAX_FIXED_STEPS_PER_FRAME: u32 = 10;

#[derive(Debug, Default)]
struct SessionStats {
    games: u32,
    pieces: u32,
    rows: u32,
    best_score: u32,
}

impl SessionStats {
    fn observe(&mut self, events: &[GameEvent]) {
        for event in events {
            match *event {
                GameEvent::Spawned { .. } => self.pieces += 1,
                GameEvent::Locked { report, score } => {
                    self.rows += report.rows_cleared;
                    self.best_score = self.best_score.max(score);
                }
                GameEvent::GameOver { score } => {
                    self.games += 1;
                    self.best_score = self.best_score.max(score);
                }
                GameEvent::Restarted => {}
            }
        }
    }
}

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let spawner = spawner_from_env(&config);
    let mut journal = EventJournal::from_env()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let mut stats = SessionStats::default();
    let result = run(&mut term, config, spawner, journal.as_mut(), &mut stats);

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(journal) = journal.as_mut() {
        if let Err(e) = journal.flush() {
            eprintln!("[blockfall] journal flush failed: {e:#}");
        }
    }
    match &result {
        Ok(score) => eprintln!(
            "[blockfall] score {} (best {}), {} pieces, {} rows, {} game over(s)",
            score,
            stats.best_score.max(*score),
            stats.pieces,
            stats.rows,
            stats.games
        ),
        Err(e) => eprintln!("[blockfall] error: {e:#}"),
    }
    result.map(|_| ())
}

fn key_release_timeout() -> Duration {
    std::env::var("BLOCKFALL_KEY_RELEASE_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|&ms| ms > 0)
        .map(Duration::from_millis)
        .unwrap_or(DEFAULT_KEY_RELEASE_TIMEOUT)
}

/// `BLOCKFALL_SHAPES` (e.g. `i,o,t`) scripts the piece order; otherwise
/// shapes are drawn at random from the configured seed.
fn spawner_from_env(config: &GameConfig) -> Box<dyn Spawner> {
    match std::env::var("BLOCKFALL_SHAPES") {
        Ok(list) if !list.trim().is_empty() => match SequenceSpawner::parse(&list) {
            Some(sequence) => return Box::new(sequence),
            None => eprintln!("[blockfall] ignoring BLOCKFALL_SHAPES={list:?}: unknown shape"),
        },
        _ => {}
    }
    Box::new(RandomSpawner::new(config.seed))
}

/// Run until the player quits; returns the final score.
fn run(
    term: &mut TerminalRenderer,
    config: GameConfig,
    spawner: Box<dyn Spawner>,
    mut journal: Option<&mut EventJournal<std::io::BufWriter<std::fs::File>>>,
    stats: &mut SessionStats,
) -> Result<u32> {
    let mut game = Game::with_spawner(config, spawner);
    let mut keys = if term.reports_key_releases() {
        KeyTracker::new()
    } else {
        KeyTracker::with_release_timeout(key_release_timeout())
    };

    let view = GameView::default();
    let mut snapshot = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut edges: Vec<InputEvent> = Vec::with_capacity(32);

    let started = Instant::now();
    let mut last_frame = started;
    let mut accumulator = Duration::ZERO;

    let events = game.start();
    stats.observe(events);
    if let Some(j) = journal.as_deref_mut() {
        j.record_all(started.elapsed(), events)?;
    }

    loop {
        edges.clear();

        // Wait out the rest of the frame, then drain everything pending.
        let timeout = FRAME_TICK.saturating_sub(last_frame.elapsed());
        let mut ready = event::poll(timeout)?;
        while ready {
            match event::read()? {
                Event::Key(key) => {
                    let pressed = key.kind == KeyEventKind::Press;
                    if pressed && should_quit(key) {
                        return Ok(game.score());
                    }
                    if pressed && key.code == KeyCode::Char('r') && game.is_game_over() {
                        edges.extend(keys.release_all());
                        let events = game.restart();
                        stats.observe(events);
                        if let Some(j) = journal.as_deref_mut() {
                            j.record_all(started.elapsed(), events)?;
                        }
                    } else if let Some(edge) = keys.handle_key(key) {
                        edges.push(edge);
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
            ready = event::poll(Duration::ZERO)?;
        }

        let now = Instant::now();
        let dt = now - last_frame;
        last_frame = now;
        edges.extend(keys.tick(dt));

        let events = game.frame_update(dt, &edges);
        stats.observe(events);
        if let Some(j) = journal.as_deref_mut() {
            j.record_all(started.elapsed(), events)?;
        }

        accumulator += dt;
        let mut steps = 0;
        while accumulator >= FIXED_TICK && steps < MAX_FIXED_STEPS_PER_FRAME {
            accumulator -= FIXED_TICK;
            steps += 1;
            let events = game.fixed_update(FIXED_TICK);
            stats.observe(events);
            if let Some(j) = journal.as_deref_mut() {
                j.record_all(started.elapsed(), events)?;
            }
        }
        if steps == MAX_FIXED_STEPS_PER_FRAME {
            accumulator = Duration::ZERO;
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snapshot);
        view.render_into(&snapshot, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
    }
}
