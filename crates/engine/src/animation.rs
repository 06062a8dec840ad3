//! Animation sequencer - replays one transition's events as ordered phases
//!
//! Events are grouped by kind and played Move, then Merge, then Spawn,
//! whatever their order in the list. Each non-empty phase has a fixed frame
//! budget; empty phases are skipped and cost nothing, so a spawn-only initial
//! state starts spawning at frame 0.
//!
//! The sequencer never renders. It reports per-event [`Visual`]s in tile units
//! and "settled" cells to a [`Presenter`].

use arrayvec::ArrayVec;

use crate::core::GameState;
use crate::types::{
    Event, EventKind, Position, BOARD_CELLS, BOARD_SIZE, CELL_PITCH, MERGE_PULSE,
    N_FRAME_HALF_MERGE, N_FRAME_MERGE, N_FRAME_MOVE, N_FRAME_SPAWN,
};

/// Where and how large an event's visual object is on one frame.
///
/// Units are tiles: a full tile is `1.0` wide and cell origins are
/// [`CELL_PITCH`] apart, so `left = CELL_PITCH * x` for an idle tile in column `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f32,
    pub top: f32,
    pub size: f32,
}

impl Placement {
    fn at_cell(x: f32, y: f32) -> Self {
        Self {
            left: CELL_PITCH * x,
            top: CELL_PITCH * y,
            size: 1.0,
        }
    }
}

/// Per-frame update for one event's visual object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Visual {
    /// Visible with this placement.
    Show(Placement),
    /// The phase is over; the object disappears.
    Hide,
}

/// Presentation collaborator driven by the sequencer and the app loop.
pub trait Presenter {
    /// Create one unsettled object per non-empty cell and one hidden object per event.
    fn begin(&mut self, state: &GameState);
    /// Apply one frame's visual for `event`.
    fn visual(&mut self, event: &Event, visual: Visual);
    /// The cell at `at` has reached its final look for this transition.
    fn settle(&mut self, at: Position);
    /// Tear down every object created by `begin`.
    fn clear(&mut self);
}

/// Partition of the resulting board's tiles by what last happened to them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileStatus {
    pub still: ArrayVec<Position, BOARD_CELLS>,
    pub moved: ArrayVec<Position, BOARD_CELLS>,
    pub merged: ArrayVec<Position, BOARD_CELLS>,
    pub spawned: ArrayVec<Position, BOARD_CELLS>,
}

/// Classify every non-empty cell of `state` into exactly one of
/// still / moved / merged / spawned.
///
/// A cell touched by several events takes the latest phase: spawn over merge
/// over move.
pub fn classify(state: &GameState) -> TileStatus {
    let size = BOARD_SIZE as usize;
    let mut touched: [[Option<EventKind>; BOARD_SIZE as usize]; BOARD_SIZE as usize] =
        [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
    for kind in [EventKind::Move, EventKind::Merge, EventKind::Spawn] {
        for event in state.events().iter().filter(|e| e.kind() == kind) {
            let at = event.target();
            if (at.x as usize) < size && (at.y as usize) < size {
                touched[at.y as usize][at.x as usize] = Some(kind);
            }
        }
    }

    let mut status = TileStatus::default();
    for (at, _) in state.board().tiles() {
        let list = match touched[at.y as usize][at.x as usize] {
            None => &mut status.still,
            Some(EventKind::Move) => &mut status.moved,
            Some(EventKind::Merge) => &mut status.merged,
            Some(EventKind::Spawn) => &mut status.spawned,
        };
        list.push(at);
    }
    status
}

/// Frame-stepped playback of one state's events.
#[derive(Debug, Clone)]
pub struct StateAnimation {
    moves: Vec<Event>,
    merges: Vec<Event>,
    spawns: Vec<Event>,
    status: TileStatus,
}

impl StateAnimation {
    pub fn new(state: &GameState) -> Self {
        let of_kind = |kind: EventKind| -> Vec<Event> {
            state
                .events()
                .iter()
                .filter(|e| e.kind() == kind)
                .copied()
                .collect()
        };
        Self {
            moves: of_kind(EventKind::Move),
            merges: of_kind(EventKind::Merge),
            spawns: of_kind(EventKind::Spawn),
            status: classify(state),
        }
    }

    /// Frame index at which [`frame`](Self::frame) first returns `true`.
    pub fn total_frames(&self) -> u32 {
        self.phases()
            .into_iter()
            .filter(|(events, _, _)| !events.is_empty())
            .map(|(_, budget, _)| budget)
            .sum()
    }

    /// Play global frame `i` into `presenter`. Returns whether playback is finished.
    ///
    /// Call with `i = 0, 1, 2, ...` once per tick; behaviour past the finishing
    /// frame is unspecified.
    pub fn frame<P: Presenter + ?Sized>(&self, i: u32, presenter: &mut P) -> bool {
        let mut local = i as i64;
        if local == 0 {
            for &at in &self.status.still {
                presenter.settle(at);
            }
        }

        for (events, budget, settled) in self.phases() {
            if !events.is_empty() {
                for event in events {
                    if let Some(visual) = visual_at(event, local) {
                        presenter.visual(event, visual);
                    }
                }
                local -= budget as i64;
            }
            if local == 0 {
                for &at in settled {
                    presenter.settle(at);
                }
            }
        }

        local == 0
    }

    fn phases(&self) -> [(&[Event], u32, &[Position]); 3] {
        [
            (self.moves.as_slice(), N_FRAME_MOVE, self.status.moved.as_slice()),
            (self.merges.as_slice(), N_FRAME_MERGE, self.status.merged.as_slice()),
            (self.spawns.as_slice(), N_FRAME_SPAWN, self.status.spawned.as_slice()),
        ]
    }
}

fn phase_budget(kind: EventKind) -> u32 {
    match kind {
        EventKind::Move => N_FRAME_MOVE,
        EventKind::Merge => N_FRAME_MERGE,
        EventKind::Spawn => N_FRAME_SPAWN,
    }
}

/// Visual for `event` at phase-local frame `i`; `None` outside `0..=budget`.
pub fn visual_at(event: &Event, i: i64) -> Option<Visual> {
    let n = phase_budget(event.kind()) as i64;
    if i < 0 || i > n {
        return None;
    }
    if i == n {
        return Some(Visual::Hide);
    }

    let placement = match *event {
        Event::Move { from, to, .. } => {
            let p = i as f32 / N_FRAME_MOVE as f32;
            let lerp = |a: u8, b: u8| a as f32 + p * (b as f32 - a as f32);
            Placement::at_cell(lerp(from.x, to.x), lerp(from.y, to.y))
        }
        Event::Merge { at, .. } => {
            let half = N_FRAME_HALF_MERGE as i64;
            // 0 -> 1 over the first half, 1 -> 0 over the second.
            let pulse = if i < half {
                i as f32 / half as f32
            } else {
                1.0 - (i - half) as f32 / half as f32
            };
            let base = Placement::at_cell(at.x as f32, at.y as f32);
            let grow = pulse * MERGE_PULSE;
            Placement {
                left: base.left - grow / 2.0,
                top: base.top - grow / 2.0,
                size: 1.0 + grow,
            }
        }
        Event::Spawn { at, .. } => {
            let p = i as f32 / N_FRAME_SPAWN as f32;
            let base = Placement::at_cell(at.x as f32, at.y as f32);
            Placement {
                left: base.left + (1.0 - p) / 2.0,
                top: base.top + (1.0 - p) / 2.0,
                size: p,
            }
        }
    };
    Some(Visual::Show(placement))
}
