//! Game state module - one immutable snapshot of the game
//!
//! A `GameState` is produced either by initial setup (two spawns on an empty
//! board) or by one slide transition. It carries the event list of the
//! transition that created it, with ids scoped to this state only. Once
//! returned to callers a state is never mutated again; the mutating helpers
//! below are crate-private and only used while a transition is being built.

use crate::rng::SimpleRng;
use crate::spawn::pick_spawn;
use crate::types::{Event, EventId, Position};
use crate::Board;

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    /// Accepted slides so far (0 for a fresh game).
    action_count: u32,
    /// Last allocated event id; 0 means none allocated yet.
    event_id: u32,
    /// Events of the transition that produced this state, in discovery order.
    events: Vec<Event>,
}

impl GameState {
    /// Start a new game: two random tiles on an empty board.
    pub fn new(rng: &mut SimpleRng) -> Self {
        let mut state = Self::from_board(Board::new());
        state.spawn_tile(rng);
        state.spawn_tile(rng);
        state
    }

    /// Wrap an existing board with no history and no events.
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            action_count: 0,
            event_id: 0,
            events: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn action_count(&self) -> u32 {
        self.action_count
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Fresh draft for the next transition: empty board, own id scope.
    pub(crate) fn successor(&self) -> Self {
        Self {
            board: Board::new(),
            action_count: self.action_count + 1,
            event_id: 0,
            events: Vec::new(),
        }
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    fn next_event_id(&mut self) -> EventId {
        self.event_id += 1;
        EventId(self.event_id)
    }

    pub(crate) fn record_move(&mut self, from: Position, to: Position, value: u32) {
        let id = self.next_event_id();
        self.events.push(Event::Move { id, from, to, value });
    }

    pub(crate) fn record_merge(&mut self, at: Position, value: u32) {
        let id = self.next_event_id();
        self.events.push(Event::Merge { id, at, value });
    }

    /// Place a random tile and record the spawn.
    ///
    /// The board must have a free cell. Calling this on a full board is a
    /// caller bug: it aborts in debug builds and is a logged no-op otherwise.
    pub(crate) fn spawn_tile(&mut self, rng: &mut SimpleRng) {
        let Some((at, value)) = pick_spawn(&self.board, rng) else {
            if cfg!(debug_assertions) {
                panic!("spawn attempted on a full board");
            }
            tracing::error!(action = self.action_count, "spawn attempted on a full board");
            return;
        };
        self.board.set(at.x, at.y, Some(value));
        let id = self.next_event_id();
        self.events.push(Event::Spawn { id, at, value });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EventKind;

    #[test]
    fn new_game_has_two_spawned_tiles() {
        let mut rng = SimpleRng::new(12345);
        let state = GameState::new(&mut rng);

        assert_eq!(state.action_count(), 0);
        assert_eq!(state.board().tile_count(), 2);
        assert_eq!(state.events().len(), 2);
        assert!(state.events().iter().all(|e| e.kind() == EventKind::Spawn));

        for event in state.events() {
            assert_eq!(state.board().tile(event.target()), Some(event.value()));
        }
    }

    #[test]
    fn event_ids_start_at_one_per_state() {
        let mut rng = SimpleRng::new(3);
        let state = GameState::new(&mut rng);
        let ids: Vec<u32> = state.events().iter().map(|e| e.id().0).collect();
        assert_eq!(ids, vec![1, 2]);

        let mut next = state.successor();
        assert_eq!(next.action_count(), 1);
        assert!(next.events().is_empty());
        next.record_merge(Position::new(0, 0), 4);
        assert_eq!(next.events()[0].id(), EventId(1));
    }

    #[test]
    fn same_seed_same_opening() {
        let a = GameState::new(&mut SimpleRng::new(42));
        let b = GameState::new(&mut SimpleRng::new(42));
        assert_eq!(a, b);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "full board")]
    fn spawning_on_a_full_board_is_fatal_in_debug() {
        let mut state = GameState::from_board(Board::from_rows([[2; 4]; 4]));
        state.spawn_tile(&mut SimpleRng::new(1));
    }
}
