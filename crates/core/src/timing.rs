//! Timing module - delayed auto shift, soft-drop and fallback gravity clocks
//!
//! All clocks are [`Duration`]s, so the 1/30 s repeat interval is exact in
//! nanoseconds and fixed-step accumulation does not drift.
//!
//! A held sideways key repeats at `das + n * repeat` for n = 0, 1, 2, ... The
//! check runs once per fixed tick and compares which repeat slot the held
//! time falls in before and after the tick. Crossing one or several slot
//! boundaries in a single tick fires a single move.

use std::time::Duration;

use crate::types::{DAS_DELAY, FALL_INTERVAL, REPEAT_INTERVAL};

/// Timing parameters for a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    /// Hold time before a sideways key starts repeating.
    pub das: Duration,
    /// Interval between repeats, and between held soft-drop steps.
    pub repeat: Duration,
    /// Fallback gravity interval, independent of input.
    pub fall_interval: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            das: DAS_DELAY,
            repeat: REPEAT_INTERVAL,
            fall_interval: FALL_INTERVAL,
        }
    }
}

impl Timing {
    /// Repeat slot for a key held for `held`; `None` before the DAS delay.
    pub fn repeat_slot(&self, held: Duration) -> Option<u128> {
        let repeat = self.repeat.as_nanos().max(1);
        held.checked_sub(self.das).map(|since| since.as_nanos() / repeat)
    }

    /// Whether a key held for `held` fires a repeat during the next `dt`.
    pub fn das_fires(&self, held: Duration, dt: Duration) -> bool {
        self.repeat_slot(held.saturating_add(dt)) > self.repeat_slot(held)
    }
}

/// Which controls are currently held down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldControls {
    pub left: bool,
    pub right: bool,
    pub down: bool,
}

/// Per-piece clocks. A freshly spawned piece starts with every clock at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PieceTimers {
    /// Time left has been held.
    pub das_left: Duration,
    /// Time right has been held.
    pub das_right: Duration,
    /// Time since the last held soft-drop step.
    pub soft_drop: Duration,
    /// Time since the last downward step of any kind.
    pub since_fall: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_no_repeat_before_das() {
        let t = Timing::default();
        assert!(!t.das_fires(Duration::ZERO, ms(20)));
        assert!(!t.das_fires(ms(300), ms(20)));
        assert_eq!(t.repeat_slot(ms(333)), None);
    }

    #[test]
    fn test_first_repeat_at_das() {
        let t = Timing::default();
        // 320ms + 20ms crosses 333.3ms.
        assert!(t.das_fires(ms(320), ms(20)));
        assert_eq!(t.repeat_slot(ms(340)), Some(0));
    }

    #[test]
    fn test_repeat_only_on_slot_boundary() {
        let t = Timing::default();
        // 340ms -> 350ms stays inside slot 0 (333.3..366.7).
        assert!(!t.das_fires(ms(340), ms(10)));
        // 360ms -> 370ms enters slot 1.
        assert!(t.das_fires(ms(360), ms(10)));
    }

    #[test]
    fn test_large_step_is_single_check() {
        let t = Timing::default();
        // Spans several slots; still a single "fires" answer.
        assert!(t.das_fires(ms(300), ms(500)));
        assert_eq!(t.repeat_slot(ms(800)), Some(14));
    }

    #[test]
    fn test_zero_repeat_does_not_divide_by_zero() {
        let t = Timing {
            repeat: Duration::ZERO,
            ..Timing::default()
        };
        assert!(t.das_fires(ms(400), ms(1)));
    }
}
