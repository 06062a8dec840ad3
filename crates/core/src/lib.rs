//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the rules of the sliding-tile merge puzzle: the board,
//! the slide/merge transition engine and the spawn generator. It has **zero
//! dependencies** on UI, terminal or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Every rule is a pure function over a [`GameState`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid with row-major empty-cell queries
//! - [`game_state`]: Immutable state produced by setup or by one slide, with its events
//! - [`slide`]: Direction remap and the single-pass slide/merge engine
//! - [`spawn`]: Random empty cell and 2-or-4 value selection
//! - [`rng`]: Seedable LCG
//!
//! # Game Rules
//!
//! - A slide moves every tile as far as it can toward the chosen edge
//! - Two equal tiles that meet merge into one tile of double value
//! - A tile produced by a merge does not merge again in the same slide
//! - A slide that changes nothing is rejected and spawns nothing
//! - Every accepted slide spawns one tile (2 with odds 9/10, else 4)
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{slide, Board, GameState, SimpleRng};
//! use tui_2048_types::Direction;
//!
//! let mut rng = SimpleRng::new(12345);
//! let state = GameState::from_board(Board::from_rows([
//!     [2, 2, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//! ]));
//!
//! let next = slide(&state, Direction::Left, &mut rng).expect("tiles can merge");
//! assert_eq!(next.board().get(0, 0), Some(Some(4)));
//! assert_eq!(next.action_count(), 1);
//!
//! // Already packed against the left edge: rejected.
//! assert!(slide(&GameState::from_board(Board::from_rows([
//!     [2, 4, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//!     [0, 0, 0, 0],
//! ])), Direction::Left, &mut rng).is_none());
//! ```

pub mod board;
pub mod game_state;
pub mod rng;
pub mod slide;
pub mod spawn;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use rng::SimpleRng;
pub use slide::{remap, slide, slide_without_spawn};
pub use spawn::pick_spawn;
