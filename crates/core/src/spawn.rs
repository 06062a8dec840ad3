//! Spawn generator - picks where the next tile appears and what it is worth.

use crate::rng::SimpleRng;
use crate::types::{Position, FOUR_ODDS};
use crate::Board;

/// Choose a uniformly random empty cell and a value (4 with odds 1/10, else 2).
///
/// Returns `None` when the board is full. The cell is drawn before the value,
/// so a seeded stream always yields the same sequence of spawns.
pub fn pick_spawn(board: &Board, rng: &mut SimpleRng) -> Option<(Position, u32)> {
    let available = board.available_cells();
    if available.is_empty() {
        return None;
    }
    let at = available[rng.next_range(available.len() as u32) as usize];
    let value = if rng.next_range(FOUR_ODDS) != 0 { 2 } else { 4 };
    Some((at, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_board_has_no_spawn() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert_eq!(pick_spawn(&board, &mut SimpleRng::new(1)), None);
    }

    #[test]
    fn single_hole_is_always_chosen() {
        let board = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 0, 4], [4, 2, 4, 2]]);
        let mut rng = SimpleRng::new(5);
        for _ in 0..50 {
            let (at, _) = pick_spawn(&board, &mut rng).unwrap();
            assert_eq!(at, Position::new(2, 2));
        }
    }

    #[test]
    fn values_are_mostly_twos_with_some_fours() {
        let board = Board::new();
        let mut rng = SimpleRng::new(2024);
        let mut twos = 0;
        let mut fours = 0;
        for _ in 0..2000 {
            match pick_spawn(&board, &mut rng).unwrap().1 {
                2 => twos += 1,
                4 => fours += 1,
                other => panic!("unexpected spawn value {}", other),
            }
        }
        // Expect roughly 1800 / 200.
        assert!(fours > 100 && fours < 320, "fours = {}", fours);
        assert!(twos > fours * 4);
    }

    #[test]
    fn every_empty_cell_is_reachable() {
        let board = Board::new();
        let mut rng = SimpleRng::new(77);
        let mut hit = [[false; 4]; 4];
        for _ in 0..1000 {
            let (at, _) = pick_spawn(&board, &mut rng).unwrap();
            hit[at.y as usize][at.x as usize] = true;
        }
        assert!(hit.iter().flatten().all(|h| *h));
    }
}
