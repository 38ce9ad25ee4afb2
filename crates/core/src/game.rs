//! Game module - drives the board, the active piece and the spawner
//!
//! [`Game`] is the game loop's single entry point. It forwards frame and
//! fixed-step updates to the active piece, spawns the next piece after a
//! lock, and turns a blocked spawn into a game over (optionally followed by
//! an automatic restart).
//!
//! Each update returns the [`GameEvent`]s it produced. They live in a
//! fixed-capacity buffer that is cleared at the start of the next update, so
//! the hot path never allocates.

use std::time::Duration;

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::config::GameConfig;
use crate::piece::ActivePiece;
use crate::shapes::spawn_position;
use crate::snapshot::GameSnapshot;
use crate::spawner::{RandomSpawner, Spawner};
use crate::types::{GameEvent, InputEvent, LockReport, PieceId};

/// Upper bound on events produced by a single update call.
pub const MAX_EVENTS_PER_UPDATE: usize = 8;

pub type EventBuffer = ArrayVec<GameEvent, MAX_EVENTS_PER_UPDATE>;

#[derive(Debug, Clone)]
pub struct Game<S = RandomSpawner> {
    config: GameConfig,
    board: Board,
    active: Option<ActivePiece>,
    spawner: S,
    next_id: u32,
    pieces_spawned: u32,
    started: bool,
    game_over: bool,
    events: EventBuffer,
}

impl Game<RandomSpawner> {
    /// Create a game with a uniform random spawner seeded from `config`.
    pub fn new(config: GameConfig) -> Self {
        Self::with_spawner(config, RandomSpawner::new(config.seed))
    }
}

impl<S: Spawner> Game<S> {
    pub fn with_spawner(config: GameConfig, spawner: S) -> Self {
        Self {
            config,
            board: Board::new(config.width, config.height),
            active: None,
            spawner,
            next_id: 1,
            pieces_spawned: 0,
            started: false,
            game_over: false,
            events: EventBuffer::new(),
        }
    }

    /// Spawn the first piece. Calling it again has no effect.
    pub fn start(&mut self) -> &[GameEvent] {
        self.events.clear();
        if !self.started {
            self.started = true;
            self.spawn_piece(true);
        }
        &self.events
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Direct board access, e.g. to set up a position before the first spawn.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.board.score()
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Events produced by the most recent call.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Per-frame update: input edges and fallback gravity.
    pub fn frame_update(&mut self, dt: Duration, input: &[InputEvent]) -> &[GameEvent] {
        self.events.clear();
        if !self.started || self.game_over {
            return &self.events;
        }
        let report = match self.active.as_mut() {
            Some(piece) => piece.frame_update(&mut self.board, dt, input),
            None => None,
        };
        if let Some(report) = report {
            self.on_locked(report);
        }
        &self.events
    }

    /// Fixed-step update: DAS repeats and held soft drop.
    pub fn fixed_update(&mut self, dt: Duration) -> &[GameEvent] {
        self.events.clear();
        if !self.started || self.game_over {
            return &self.events;
        }
        let report = match self.active.as_mut() {
            Some(piece) => piece.fixed_update(&mut self.board, dt),
            None => None,
        };
        if let Some(report) = report {
            self.on_locked(report);
        }
        &self.events
    }

    /// Clear the board, zero the score and spawn a fresh piece.
    pub fn restart(&mut self) -> &[GameEvent] {
        self.events.clear();
        self.started = true;
        self.reset_and_respawn();
        &self.events
    }

    /// Ask the spawner for the next shape and place it at the top.
    ///
    /// Also starts the game, so it can stand in for [`Game::start`]. Refused
    /// (returns false, no events) while a piece is still falling or after a
    /// game over. Otherwise returns false on a blocked spawn, which ends the
    /// game.
    pub fn spawn_next(&mut self) -> bool {
        self.events.clear();
        if self.active.is_some() || self.game_over {
            return false;
        }
        self.started = true;
        self.spawn_piece(true)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.fill_from_board(&self.board, self.active.as_ref().map(ActivePiece::id));
        out.game_over = self.game_over;
        out.pieces_spawned = self.pieces_spawned;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }

    fn emit(&mut self, event: GameEvent) {
        let _ = self.events.try_push(event);
    }

    fn on_locked(&mut self, report: LockReport) {
        self.active = None;
        self.emit(GameEvent::Locked {
            report,
            score: self.board.score(),
        });
        self.spawn_piece(true);
    }

    fn spawn_piece(&mut self, allow_restart: bool) -> bool {
        let kind = self.spawner.next_shape();
        let id = PieceId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1).max(1);

        let position = spawn_position(kind, self.board.width(), self.board.height());
        match ActivePiece::spawn(id, kind, position, self.config.timing, &mut self.board) {
            Some(piece) => {
                self.active = Some(piece);
                self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
                self.emit(GameEvent::Spawned { piece: id, kind });
                true
            }
            None => {
                self.active = None;
                self.game_over = true;
                self.emit(GameEvent::GameOver {
                    score: self.board.score(),
                });
                if allow_restart && self.config.restart_on_game_over {
                    self.reset_and_respawn();
                }
                false
            }
        }
    }

    fn reset_and_respawn(&mut self) {
        self.board.reset();
        self.active = None;
        self.game_over = false;
        self.emit(GameEvent::Restarted);
        // A spawn blocked on an empty board cannot be fixed by restarting again.
        self.spawn_piece(false);
    }
}
