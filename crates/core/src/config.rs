//! Game configuration, read from `BLOCKFALL_*` environment variables.
//!
//! Missing, malformed or out-of-range values fall back to the defaults, so
//! configuration never fails.

use std::time::Duration;

use crate::timing::Timing;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Smallest and largest accepted board dimension.
pub const MIN_DIMENSION: u8 = 4;
pub const MAX_DIMENSION: u8 = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    pub timing: Timing,
    pub seed: u32,
    /// Clear the board and keep playing after a game over.
    pub restart_on_game_over: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            timing: Timing::default(),
            seed: 1,
            restart_on_game_over: true,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` uses the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let dimension = |key: &str, fallback: u8| {
            get(key)
                .and_then(|s| s.parse::<u8>().ok())
                .filter(|v| (MIN_DIMENSION..=MAX_DIMENSION).contains(v))
                .unwrap_or(fallback)
        };

        let millis = |key: &str, fallback: Duration, allow_zero: bool| {
            get(key)
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|v| v.is_finite() && (*v > 0.0 || (allow_zero && *v == 0.0)))
                .and_then(|v| Duration::try_from_secs_f64(v / 1000.0).ok())
                .unwrap_or(fallback)
        };

        let timing = Timing {
            das: millis("BLOCKFALL_DAS_MS", defaults.timing.das, true),
            repeat: millis("BLOCKFALL_REPEAT_MS", defaults.timing.repeat, false),
            fall_interval: millis("BLOCKFALL_FALL_MS", defaults.timing.fall_interval, false),
        };

        let seed = get("BLOCKFALL_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.seed);

        let restart_on_game_over = get("BLOCKFALL_AUTO_RESTART")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(defaults.restart_on_game_over);

        Self {
            width: dimension("BLOCKFALL_WIDTH", defaults.width),
            height: dimension("BLOCKFALL_HEIGHT", defaults.height),
            timing,
            seed,
            restart_on_game_over,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> GameConfig {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GameConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config(&[]), GameConfig::default());
    }

    #[test]
    fn test_reads_every_variable() {
        let cfg = config(&[
            ("BLOCKFALL_WIDTH", "12"),
            ("BLOCKFALL_HEIGHT", "24"),
            ("BLOCKFALL_DAS_MS", "500"),
            ("BLOCKFALL_REPEAT_MS", "50"),
            ("BLOCKFALL_FALL_MS", "800"),
            ("BLOCKFALL_SEED", "99"),
            ("BLOCKFALL_AUTO_RESTART", "false"),
        ]);
        assert_eq!(cfg.width, 12);
        assert_eq!(cfg.height, 24);
        assert_eq!(cfg.timing.das, Duration::from_millis(500));
        assert_eq!(cfg.timing.repeat, Duration::from_millis(50));
        assert_eq!(cfg.timing.fall_interval, Duration::from_millis(800));
        assert_eq!(cfg.seed, 99);
        assert!(!cfg.restart_on_game_over);
    }

    #[test]
    fn test_bad_values_fall_back() {
        let cfg = config(&[
            ("BLOCKFALL_WIDTH", "2"),
            ("BLOCKFALL_HEIGHT", "wide"),
            ("BLOCKFALL_REPEAT_MS", "0"),
            ("BLOCKFALL_FALL_MS", "-5"),
            ("BLOCKFALL_DAS_MS", "1e300"),
            ("BLOCKFALL_SEED", " "),
        ]);
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn test_huge_durations_fall_back() {
        let cfg = config(&[("BLOCKFALL_FALL_MS", "1e300"), ("BLOCKFALL_REPEAT_MS", "inf")]);
        assert_eq!(cfg.timing, Timing::default());
    }

    #[test]
    fn test_zero_das_is_allowed() {
        let cfg = config(&[("BLOCKFALL_DAS_MS", "0")]);
        assert_eq!(cfg.timing.das, Duration::ZERO);
    }
}
