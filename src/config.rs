//! Runner configuration, read from environment variables.
//!
//! - `TUI_2048_SEED`: RNG seed (default: derived from the clock)
//! - `TUI_2048_TICK_MS`: animation tick interval (default: 16)
//! - `TUI_2048_LOG_PATH`: write logs to this file (default: no logging, the
//!   terminal is in raw mode)
//! - `TUI_2048_LOG`: tracing filter directive (default: "info")
//!
//! Unparseable values fall back to the defaults.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::TICK_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub seed: u32,
    pub tick_ms: u32,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            tick_ms: TICK_MS,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl GameConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup (the environment, a test map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let seed = non_empty("TUI_2048_SEED")
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(clock_seed);
        let tick_ms = non_empty("TUI_2048_TICK_MS")
            .and_then(|s| s.parse().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(TICK_MS);
        let log_path = non_empty("TUI_2048_LOG_PATH");
        let log_filter = non_empty("TUI_2048_LOG").unwrap_or_else(|| "info".to_string());

        Self {
            seed,
            tick_ms,
            log_path,
            log_filter,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
