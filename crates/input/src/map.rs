//! Key mapping from terminal events to slide directions.

use crate::types::Direction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a slide direction. Irrelevant keys map to `None`.
pub fn direction_for_key(key: KeyEvent) -> Option<Direction> {
    match key.code {
        KeyCode::Left => Some(Direction::Left),
        KeyCode::Char('a' | 'A' | 'h' | 'H') => Some(Direction::Left),
        KeyCode::Up => Some(Direction::Up),
        KeyCode::Char('w' | 'W' | 'k' | 'K') => Some(Direction::Up),
        KeyCode::Right => Some(Direction::Right),
        KeyCode::Char('d' | 'D' | 'l' | 'L') => Some(Direction::Right),
        KeyCode::Down => Some(Direction::Down),
        KeyCode::Char('s' | 'S' | 'j' | 'J') => Some(Direction::Down),
        _ => None,
    }
}

/// Check if key should start a new game.
pub fn is_restart(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            direction_for_key(KeyEvent::from(KeyCode::Left)),
            Some(Direction::Left)
        );
        assert_eq!(
            direction_for_key(KeyEvent::from(KeyCode::Up)),
            Some(Direction::Up)
        );
        assert_eq!(
            direction_for_key(KeyEvent::from(KeyCode::Right)),
            Some(Direction::Right)
        );
        assert_eq!(
            direction_for_key(KeyEvent::from(KeyCode::Down)),
            Some(Direction::Down)
        );
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(
            direction_for_key(KeyEvent::from(KeyCode::Char('a'))),
            Some(Direction::Left)
        );
        assert_eq!(
            direction_for_key(KeyEvent::from(KeyCode::Char('W'))),
            Some(Direction::Up)
        );
        assert_eq!(
            direction_for_key(KeyEvent::from(KeyCode::Char('d'))),
            Some(Direction::Right)
        );
        assert_eq!(
            direction_for_key(KeyEvent::from(KeyCode::Char('S'))),
            Some(Direction::Down)
        );
    }

    #[test]
    fn test_vi_keys() {
        assert_eq!(
            direction_for_key(KeyEvent::from(KeyCode::Char('h'))),
            Some(Direction::Left)
        );
        assert_eq!(
            direction_for_key(KeyEvent::from(KeyCode::Char('k'))),
            Some(Direction::Up)
        );
        assert_eq!(
            direction_for_key(KeyEvent::from(KeyCode::Char('l'))),
            Some(Direction::Right)
        );
        assert_eq!(
            direction_for_key(KeyEvent::from(KeyCode::Char('j'))),
            Some(Direction::Down)
        );
    }

    #[test]
    fn test_irrelevant_keys_are_ignored() {
        assert_eq!(direction_for_key(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(direction_for_key(KeyEvent::from(KeyCode::Enter)), None);
        assert_eq!(direction_for_key(KeyEvent::from(KeyCode::Char(' '))), None);
    }

    #[test]
    fn test_quit_and_restart_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));

        assert!(is_restart(KeyEvent::from(KeyCode::Char('r'))));
        assert!(!is_restart(KeyEvent::from(KeyCode::Char('q'))));
    }
}
