//! TileScene: the terminal's visual objects, driven through [`Presenter`].
//!
//! One object per non-empty cell of the current state (drawn dim until it
//! settles) and one sprite per event (drawn on top while its phase plays).
//! The scene is torn down and rebuilt for every state, so objects from a
//! cancelled animation never bleed into the next one.

use crate::core::GameState;
use crate::engine::{Placement, Presenter, Visual};
use crate::types::{Event, EventId, Position, BOARD_SIZE};

/// The final tile of a cell for the state being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellTile {
    pub value: u32,
    pub settled: bool,
}

/// An event's moving/pulsing/growing tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub id: EventId,
    pub value: u32,
    /// `None` while hidden.
    pub placement: Option<Placement>,
}

#[derive(Debug, Clone, Default)]
pub struct TileScene {
    cells: [[Option<CellTile>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
    sprites: Vec<Sprite>,
}

impl TileScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, at: Position) -> Option<CellTile> {
        self.cells
            .get(at.y as usize)
            .and_then(|row| row.get(at.x as usize))
            .copied()
            .flatten()
    }

    /// Sprites currently visible, in event order.
    pub fn visible_sprites(&self) -> impl Iterator<Item = (&Sprite, Placement)> {
        self.sprites
            .iter()
            .filter_map(|s| s.placement.map(|p| (s, p)))
    }

    pub fn sprite(&self, id: EventId) -> Option<&Sprite> {
        self.sprites.iter().find(|s| s.id == id)
    }

    /// True when nothing is in flight and every cell object has settled.
    pub fn is_settled(&self) -> bool {
        self.sprites.iter().all(|s| s.placement.is_none())
            && self.cells.iter().flatten().flatten().all(|c| c.settled)
    }
}

impl Presenter for TileScene {
    fn begin(&mut self, state: &GameState) {
        for (at, value) in state.board().tiles() {
            self.cells[at.y as usize][at.x as usize] = Some(CellTile {
                value,
                settled: false,
            });
        }
        self.sprites.extend(state.events().iter().map(|e| Sprite {
            id: e.id(),
            value: e.value(),
            placement: None,
        }));
    }

    fn visual(&mut self, event: &Event, visual: Visual) {
        let Some(sprite) = self.sprites.iter_mut().find(|s| s.id == event.id()) else {
            return;
        };
        sprite.placement = match visual {
            Visual::Show(p) => Some(p),
            Visual::Hide => None,
        };
    }

    fn settle(&mut self, at: Position) {
        if let Some(Some(tile)) = self
            .cells
            .get_mut(at.y as usize)
            .and_then(|row| row.get_mut(at.x as usize))
        {
            tile.settled = true;
        }
    }

    fn clear(&mut self) {
        self.cells = Default::default();
        self.sprites.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{slide_without_spawn, Board};
    use crate::engine::StateAnimation;
    use crate::types::Direction;

    fn merged_state() -> GameState {
        let state = GameState::from_board(Board::from_rows([
            [2, 2, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 8],
        ]));
        slide_without_spawn(&state, Direction::Left).unwrap()
    }

    #[test]
    fn begin_creates_unsettled_cells_and_hidden_sprites() {
        let state = merged_state();
        let mut scene = TileScene::new();
        scene.begin(&state);

        assert_eq!(
            scene.cell(Position::new(0, 0)),
            Some(CellTile { value: 4, settled: false })
        );
        assert_eq!(scene.cell(Position::new(1, 0)), None);
        assert_eq!(scene.visible_sprites().count(), 0);
        assert!(!scene.is_settled());
    }

    #[test]
    fn full_playback_settles_everything() {
        let state = merged_state();
        let anim = StateAnimation::new(&state);
        let mut scene = TileScene::new();
        scene.begin(&state);

        let mut i = 0;
        while !anim.frame(i, &mut scene) {
            i += 1;
        }
        assert!(scene.is_settled());
        assert_eq!(
            scene.cell(Position::new(0, 3)),
            Some(CellTile { value: 8, settled: true })
        );
    }

    #[test]
    fn mid_move_sprites_are_visible() {
        let state = merged_state();
        let anim = StateAnimation::new(&state);
        let mut scene = TileScene::new();
        scene.begin(&state);
        for i in 0..=3 {
            anim.frame(i, &mut scene);
        }
        // Two moves in flight, merge not started.
        assert_eq!(scene.visible_sprites().count(), 2);
    }

    #[test]
    fn clear_drops_every_object() {
        let state = merged_state();
        let mut scene = TileScene::new();
        scene.begin(&state);
        scene.clear();
        assert!(scene.sprite(EventId(1)).is_none());
        assert_eq!(scene.cell(Position::new(0, 0)), None);
    }
}
