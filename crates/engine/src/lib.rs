//! Engine module - animation sequencing and the application loop
//!
//! This crate sits between the pure rules in `core` and any presentation
//! layer. It turns a state's event list into frame-by-frame visual updates and
//! owns the scheduling contract: one active animation, advanced once per tick,
//! cancelled and replaced when a new input is accepted.
//!
//! - [`animation`]: phase grouping, per-frame placements, settle signals, [`Presenter`]
//! - [`app`]: current state, per-direction lookahead, cancel-then-replace playback
//!
//! # Example
//!
//! ```
//! use tui_2048_engine::{App, InputOutcome, Presenter, Visual};
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, Event, Position};
//!
//! struct Silent;
//!
//! impl Presenter for Silent {
//!     fn begin(&mut self, _state: &GameState) {}
//!     fn visual(&mut self, _event: &Event, _visual: Visual) {}
//!     fn settle(&mut self, _at: Position) {}
//!     fn clear(&mut self) {}
//! }
//!
//! let mut app = App::new(42);
//! let mut presenter = Silent;
//! app.start(&mut presenter);
//! while app.tick(&mut presenter) {}
//!
//! let legal = Direction::ALL.into_iter().find(|d| app.can_slide(*d)).unwrap();
//! assert_ne!(app.handle_input(legal, &mut presenter), InputOutcome::Ignored);
//! assert_eq!(app.game().action_count(), 1);
//! ```

pub mod animation;
pub mod app;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use animation::{classify, visual_at, Placement, Presenter, StateAnimation, TileStatus, Visual};
pub use app::{App, InputOutcome};
