//! Terminal presentation module.
//!
//! This is the presentation collaborator for the engine: [`TileScene`] owns
//! the visual objects and implements [`engine::Presenter`], [`GameView`]
//! renders the scene into a framebuffer, and [`TerminalRenderer`] flushes
//! framebuffers to the terminal.
//!
//! Goals:
//! - Keep `core` and `engine` free of any rendering API
//! - Render into a plain framebuffer so views are unit-testable
//! - Diff consecutive frames so 60 FPS animation stays cheap over a tty

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod scene;

pub use tui_2048_core as core;
pub use tui_2048_engine as engine;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, HudView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scene::{CellTile, Sprite, TileScene};
