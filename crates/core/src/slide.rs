//! Slide engine - computes the board and events produced by one directional input
//!
//! Every direction is reduced to the same left-slide over "rows": [`remap`]
//! maps a (scan index, row index) pair onto board coordinates so that scan
//! index 0 is always the edge the tiles travel toward.
//!
//! Merges are single-pass: a tile produced by a merge cannot merge again in
//! the same slide, so `[2, 2, 2, 2]` becomes `[4, 4, _, _]`, never `[8, _, _, _]`.

use crate::rng::SimpleRng;
use crate::types::{Direction, Position, BOARD_SIZE};
use crate::{Board, GameState};

const LAST: u8 = BOARD_SIZE - 1;

/// Board coordinate of scan position `scan` in row `row` for `direction`.
#[inline]
pub fn remap(direction: Direction, scan: u8, row: u8) -> Position {
    match direction {
        Direction::Left => Position::new(scan, row),
        Direction::Up => Position::new(row, scan),
        Direction::Right => Position::new(LAST - scan, LAST - row),
        Direction::Down => Position::new(LAST - row, LAST - scan),
    }
}

/// Slide `state` toward `direction`, then spawn a tile.
///
/// Returns `None` when no tile would move or merge; the input is a no-op and
/// `state` stays the current state.
pub fn slide(state: &GameState, direction: Direction, rng: &mut SimpleRng) -> Option<GameState> {
    let mut next = slide_without_spawn(state, direction)?;
    next.spawn_tile(rng);
    Some(next)
}

/// The deterministic half of [`slide`]: moves and merges only, no spawn.
pub fn slide_without_spawn(state: &GameState, direction: Direction) -> Option<GameState> {
    let mut next = state.successor();
    let mut changed = false;
    for row in 0..BOARD_SIZE {
        changed |= slide_row(state.board(), &mut next, direction, row);
    }
    changed.then_some(next)
}

/// Slide one row of `source` into `next`. Returns whether anything moved.
fn slide_row(source: &Board, next: &mut GameState, direction: Direction, row: u8) -> bool {
    let at = |scan: u8| remap(direction, scan, row);
    let mut merged = [false; BOARD_SIZE as usize];
    let mut changed = false;

    for x in 0..BOARD_SIZE {
        let from = at(x);
        let Some(value) = source.tile(from) else {
            continue;
        };
        if x == 0 {
            put(next.board_mut(), from, value);
            continue;
        }

        // Furthest free slot behind x; stops on the first occupied slot or at 0.
        let mut target = x - 1;
        while target > 0 && next.board().tile(at(target)).is_none() {
            target -= 1;
        }

        match next.board().tile(at(target)) {
            None => {
                shift(next, from, at(target), value);
                changed = true;
            }
            Some(existing) if existing == value && !merged[target as usize] => {
                merged[target as usize] = true;
                let to = at(target);
                next.record_move(from, to, value);
                next.record_merge(to, existing + value);
                put(next.board_mut(), to, existing + value);
                changed = true;
            }
            Some(_) if target + 1 != x => {
                shift(next, from, at(target + 1), value);
                changed = true;
            }
            Some(_) => put(next.board_mut(), from, value),
        }
    }

    changed
}

fn shift(next: &mut GameState, from: Position, to: Position, value: u32) {
    next.record_move(from, to, value);
    put(next.board_mut(), to, value);
}

#[inline]
fn put(board: &mut Board, at: Position, value: u32) {
    board.set(at.x, at.y, Some(value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Event, EventId};

    fn slid(rows: [[u32; 4]; 4], direction: Direction) -> Option<GameState> {
        slide_without_spawn(&GameState::from_board(Board::from_rows(rows)), direction)
    }

    #[test]
    fn remap_is_a_permutation_for_every_direction() {
        for dir in Direction::ALL {
            let mut seen = [[false; 4]; 4];
            for row in 0..4 {
                for scan in 0..4 {
                    let p = remap(dir, scan, row);
                    assert!(!seen[p.y as usize][p.x as usize], "{} hits {:?} twice", dir, p);
                    seen[p.y as usize][p.x as usize] = true;
                }
            }
        }
    }

    #[test]
    fn remap_scan_zero_is_the_leading_edge() {
        for row in 0..4 {
            assert_eq!(remap(Direction::Left, 0, row).x, 0);
            assert_eq!(remap(Direction::Up, 0, row).y, 0);
            assert_eq!(remap(Direction::Right, 0, row).x, 3);
            assert_eq!(remap(Direction::Down, 0, row).y, 3);
        }
    }

    #[test]
    fn pair_merges_into_leading_cell() {
        let next = slid([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]], Direction::Left).unwrap();

        assert_eq!(next.board(), &Board::from_rows([[4, 0, 0, 0], [0; 4], [0; 4], [0; 4]]));
        assert_eq!(
            next.events(),
            &[
                Event::Move {
                    id: EventId(1),
                    from: Position::new(1, 0),
                    to: Position::new(0, 0),
                    value: 2,
                },
                Event::Merge { id: EventId(2), at: Position::new(0, 0), value: 4 },
            ]
        );
    }

    #[test]
    fn gap_between_equal_tiles_is_skipped() {
        let next = slid([[2, 0, 2, 0], [0; 4], [0; 4], [0; 4]], Direction::Left).unwrap();
        assert_eq!(next.board(), &Board::from_rows([[4, 0, 0, 0], [0; 4], [0; 4], [0; 4]]));
        assert_eq!(next.events().len(), 2);
    }

    #[test]
    fn packed_row_without_pairs_is_a_no_op() {
        assert!(slid([[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]], Direction::Left).is_none());
    }

    #[test]
    fn four_equal_tiles_merge_pairwise() {
        let next = slid([[2, 2, 2, 2], [0; 4], [0; 4], [0; 4]], Direction::Left).unwrap();
        assert_eq!(next.board(), &Board::from_rows([[4, 4, 0, 0], [0; 4], [0; 4], [0; 4]]));

        let merges: Vec<_> = next
            .events()
            .iter()
            .filter_map(|e| match e {
                Event::Merge { at, value, .. } => Some((*at, *value)),
                _ => None,
            })
            .collect();
        assert_eq!(merges, vec![(Position::new(0, 0), 4), (Position::new(1, 0), 4)]);
    }

    #[test]
    fn merged_tile_does_not_merge_again() {
        let next = slid([[2, 2, 4, 0], [0; 4], [0; 4], [0; 4]], Direction::Left).unwrap();
        assert_eq!(next.board(), &Board::from_rows([[4, 4, 0, 0], [0; 4], [0; 4], [0; 4]]));
    }

    #[test]
    fn three_equal_merges_the_nearest_pair() {
        let next = slid([[0, 2, 2, 2], [0; 4], [0; 4], [0; 4]], Direction::Right).unwrap();
        assert_eq!(next.board(), &Board::from_rows([[0, 0, 2, 4], [0; 4], [0; 4], [0; 4]]));
    }

    #[test]
    fn tile_stops_behind_an_unequal_blocker() {
        let next = slid([[4, 0, 0, 2], [0; 4], [0; 4], [0; 4]], Direction::Left).unwrap();
        assert_eq!(next.board(), &Board::from_rows([[4, 2, 0, 0], [0; 4], [0; 4], [0; 4]]));
        assert_eq!(
            next.events(),
            &[Event::Move {
                id: EventId(1),
                from: Position::new(3, 0),
                to: Position::new(1, 0),
                value: 2,
            }]
        );
    }

    #[test]
    fn up_and_down_slide_columns() {
        let rows = [[2, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0], [0, 0, 0, 4]];

        let up = slid(rows, Direction::Up).unwrap();
        assert_eq!(up.board(), &Board::from_rows([[4, 0, 0, 4], [0; 4], [0; 4], [0; 4]]));

        let down = slid(rows, Direction::Down).unwrap();
        assert_eq!(down.board(), &Board::from_rows([[0; 4], [0; 4], [0; 4], [4, 0, 0, 4]]));
    }

    #[test]
    fn successor_increments_action_count() {
        let next = slid([[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]], Direction::Left).unwrap();
        assert_eq!(next.action_count(), 1);
        let again = slide_without_spawn(&next, Direction::Right).unwrap();
        assert_eq!(again.action_count(), 2);
        assert_eq!(again.events()[0].id(), EventId(1));
    }

    #[test]
    fn slide_spawns_exactly_one_tile() {
        let state = GameState::from_board(Board::from_rows([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]));
        let next = slide(&state, Direction::Left, &mut SimpleRng::new(9)).unwrap();
        assert_eq!(next.board().tile_count(), 2);
        assert!(matches!(next.events().last(), Some(Event::Spawn { .. })));
    }
}
