//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the four slide directions plus the quit
//! and restart keys. Everything else is ignored. Slides are discrete, so
//! there is no key-repeat handling: each press is one input.

pub mod map;

pub use tui_2048_types as types;

pub use map::{direction_for_key, is_restart, should_quit};
