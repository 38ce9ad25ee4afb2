//! Turns terminal key events into engine input edges.
//!
//! Terminals that report key releases (kitty keyboard protocol) give exact
//! down/up edges. Others only ever send presses, repeated while the key is
//! held; for those a release timeout synthesizes the up edge once no press
//! has been seen for a while.

use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{control_for, Control};
use crate::types::InputEvent;

// In terminals without key-release events, a short timeout keeps a single tap
// from turning into a sustained hold.
pub const DEFAULT_KEY_RELEASE_TIMEOUT: Duration = Duration::from_millis(150);

const HOLDABLE: [Control; 3] = [Control::Left, Control::Right, Control::Down];

#[derive(Debug, Clone, Copy, Default)]
struct HoldState {
    held: bool,
    /// Time since the last press or repeat for this control.
    idle: Duration,
}

/// Tracks held controls and emits edges only on state changes.
#[derive(Debug, Clone)]
pub struct KeyTracker {
    states: [HoldState; 3],
    release_timeout: Option<Duration>,
}

impl KeyTracker {
    /// Tracker for terminals that report releases: no timeout.
    pub fn new() -> Self {
        Self {
            states: [HoldState::default(); 3],
            release_timeout: None,
        }
    }

    /// Tracker that synthesizes a release after `timeout` without presses.
    pub fn with_release_timeout(timeout: Duration) -> Self {
        Self {
            release_timeout: Some(timeout),
            ..Self::new()
        }
    }

    pub fn release_timeout(&self) -> Option<Duration> {
        self.release_timeout
    }

    fn slot(control: Control) -> Option<usize> {
        HOLDABLE.iter().position(|&c| c == control)
    }

    pub fn is_held(&self, control: Control) -> bool {
        Self::slot(control).is_some_and(|i| self.states[i].held)
    }

    /// Translate one key event. Unmapped keys and duplicate presses of a held
    /// key produce nothing.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<InputEvent> {
        let control = control_for(key.code)?;
        match key.kind {
            KeyEventKind::Press => self.press(control),
            KeyEventKind::Repeat => {
                if let Some(i) = Self::slot(control) {
                    self.states[i].idle = Duration::ZERO;
                }
                None
            }
            KeyEventKind::Release => self.release(control),
        }
    }

    pub fn press(&mut self, control: Control) -> Option<InputEvent> {
        let Some(i) = Self::slot(control) else {
            return Some(control.press_event());
        };
        let state = &mut self.states[i];
        state.idle = Duration::ZERO;
        if state.held {
            return None;
        }
        state.held = true;
        Some(control.press_event())
    }

    pub fn release(&mut self, control: Control) -> Option<InputEvent> {
        let i = Self::slot(control)?;
        let state = &mut self.states[i];
        if !state.held {
            return None;
        }
        *state = HoldState::default();
        control.release_event()
    }

    /// Advance idle clocks and emit synthesized releases for stale holds.
    pub fn tick(&mut self, dt: Duration) -> ArrayVec<InputEvent, 3> {
        let mut out = ArrayVec::new();
        let Some(timeout) = self.release_timeout else {
            return out;
        };
        for (i, control) in HOLDABLE.iter().enumerate() {
            let state = &mut self.states[i];
            if !state.held {
                continue;
            }
            state.idle = state.idle.saturating_add(dt);
            if state.idle >= timeout {
                *state = HoldState::default();
                if let Some(event) = control.release_event() {
                    out.push(event);
                }
            }
        }
        out
    }

    /// Release everything that is held, e.g. when the game restarts.
    pub fn release_all(&mut self) -> ArrayVec<InputEvent, 3> {
        let mut out = ArrayVec::new();
        for control in HOLDABLE {
            if let Some(event) = self.release(control) {
                out.push(event);
            }
        }
        out
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}
