//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, animation, terminal rendering).
//!
//! # Board Dimensions
//!
//! The board is a fixed 4x4 grid, indexed `(x, y)` with `x` left to right and
//! `y` top to bottom, both in `0..4`. There is no wraparound.
//!
//! # Animation Timing
//!
//! Frame budgets are counted in scheduler ticks, one tick per display refresh:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Default tick interval (~60 FPS) |
//! | `N_FRAME_MOVE` | 12 | Slide from source to target cell |
//! | `N_FRAME_HALF_MERGE` | 6 | Each half (grow, shrink) of the merge pulse |
//! | `N_FRAME_SPAWN` | 12 | Grow a new tile from nothing to full size |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, Event, EventId, Position, BOARD_SIZE};
//!
//! assert_eq!(Direction::Left.to_string(), "left");
//! assert_eq!(Direction::ALL.len(), 4);
//!
//! let event = Event::Merge { id: EventId(3), at: Position::new(0, 0), value: 4 };
//! assert_eq!(event.target(), Position::new(0, 0));
//! assert_eq!(event.element_key(), "merge-tile-3");
//!
//! assert_eq!(BOARD_SIZE, 4);
//! ```

use std::fmt;

/// Board side length in cells (4 columns, 4 rows)
pub const BOARD_SIZE: u8 = 4;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Default scheduler tick interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Frames spent sliding a tile to its destination.
pub const N_FRAME_MOVE: u32 = 12;

/// Frames spent on one half (grow or shrink) of the merge pulse.
pub const N_FRAME_HALF_MERGE: u32 = 6;

/// Frames spent on the whole merge pulse.
pub const N_FRAME_MERGE: u32 = N_FRAME_HALF_MERGE * 2;

/// Frames spent growing a spawned tile.
pub const N_FRAME_SPAWN: u32 = 12;

/// Distance between neighbouring cell origins, in tile units (tile = 1.0, gap = 0.1).
pub const CELL_PITCH: f32 = 1.1;

/// Extra size at the peak of the merge pulse, in tile units.
pub const MERGE_PULSE: f32 = 0.1;

/// Probability denominator for spawning a 4 instead of a 2 (1 in 10).
pub const FOUR_ODDS: u32 = 10;


/// Slide direction
///
/// For `Right` and `Down` exactly one of the two scan axes is reflected so that
/// "forward" in scan order always points at the edge the tiles travel toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    /// All directions, in lookahead slot order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Stable slot index used for per-direction lookahead tables.
    pub fn index(&self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 3,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Board coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(value)`: Tile holding a power of two, at least 2
pub type Cell = Option<u32>;

/// State-scoped event identifier.
///
/// Ids restart at 1 for every state; they only correlate an event with the
/// visual object that plays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub u32);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Structural change produced by a transition.
///
/// List order is discovery order (scan order), not visual order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// A new tile appeared at `at`.
    Spawn { id: EventId, at: Position, value: u32 },
    /// A tile of `value` slid from `from` to `to`.
    Move {
        id: EventId,
        from: Position,
        to: Position,
        value: u32,
    },
    /// The tile at `at` became `value` by absorbing an equal neighbour.
    Merge { id: EventId, at: Position, value: u32 },
}

/// Event discriminant, used for phase grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Spawn,
    Move,
    Merge,
}

impl Event {
    pub fn id(&self) -> EventId {
        match *self {
            Event::Spawn { id, .. } | Event::Move { id, .. } | Event::Merge { id, .. } => id,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Event::Spawn { .. } => EventKind::Spawn,
            Event::Move { .. } => EventKind::Move,
            Event::Merge { .. } => EventKind::Merge,
        }
    }

    /// Cell whose final content this event produces.
    pub fn target(&self) -> Position {
        match *self {
            Event::Spawn { at, .. } | Event::Merge { at, .. } => at,
            Event::Move { to, .. } => to,
        }
    }

    /// Tile value displayed by the event's visual object.
    pub fn value(&self) -> u32 {
        match *self {
            Event::Spawn { value, .. } | Event::Move { value, .. } | Event::Merge { value, .. } => {
                value
            }
        }
    }

    /// String-safe key for presentation layers that address objects by name.
    pub fn element_key(&self) -> String {
        let prefix = match self.kind() {
            EventKind::Spawn => "spawn",
            EventKind::Move => "move",
            EventKind::Merge => "merge",
        };
        format!("{}-tile-{}", prefix, self.id())
    }
}
