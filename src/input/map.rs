//! Key mapping from crossterm events to input commands

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A keyboard command, before cursor resolution
///
/// `Select` targets a cell directly (digit keys follow the on-screen
/// labels); `PlaceAtCursor` plays whatever cell the cursor sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Play a cell by index (0-8, row-major)
    Select(usize),
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    PlaceAtCursor,
    NewRound,
    ResetGame,
}

/// Map keyboard input to commands
pub fn handle_key_event(key: KeyEvent) -> Option<KeyCommand> {
    match key.code {
        // Digit keys 1-9 play the matching cell label.
        KeyCode::Char(ch @ '1'..='9') => Some(KeyCommand::Select(ch as usize - '1' as usize)),

        // Cursor movement (arrows, vim, WASD)
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(KeyCommand::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(KeyCommand::CursorRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(KeyCommand::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(KeyCommand::CursorDown),

        // Placement at the cursor cell
        KeyCode::Char(' ') | KeyCode::Enter => Some(KeyCommand::PlaceAtCursor),

        // Session controls
        KeyCode::Char('n') | KeyCode::Char('N') => Some(KeyCommand::NewRound),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(KeyCommand::ResetGame),

        _ => None,
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_digit_keys_select_cells() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char('1'))),
            Some(KeyCommand::Select(0))
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('5'))),
            Some(KeyCommand::Select(4))
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('9'))),
            Some(KeyCommand::Select(8))
        );
    }

    #[test]
    fn test_cursor_movement_synonyms() {
        for code in [KeyCode::Left, KeyCode::Char('h'), KeyCode::Char('a')] {
            assert_eq!(handle_key_event(key(code)), Some(KeyCommand::CursorLeft));
        }
        for code in [KeyCode::Right, KeyCode::Char('l'), KeyCode::Char('d')] {
            assert_eq!(handle_key_event(key(code)), Some(KeyCommand::CursorRight));
        }
        for code in [KeyCode::Up, KeyCode::Char('k'), KeyCode::Char('w')] {
            assert_eq!(handle_key_event(key(code)), Some(KeyCommand::CursorUp));
        }
        for code in [KeyCode::Down, KeyCode::Char('j'), KeyCode::Char('s')] {
            assert_eq!(handle_key_event(key(code)), Some(KeyCommand::CursorDown));
        }
    }

    #[test]
    fn test_placement_keys() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char(' '))),
            Some(KeyCommand::PlaceAtCursor)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Enter)),
            Some(KeyCommand::PlaceAtCursor)
        );
    }

    #[test]
    fn test_session_control_keys() {
        assert_eq!(
            handle_key_event(key(KeyCode::Char('n'))),
            Some(KeyCommand::NewRound)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('N'))),
            Some(KeyCommand::NewRound)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('r'))),
            Some(KeyCommand::ResetGame)
        );
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(handle_key_event(key(KeyCode::Char('0'))), None);
        assert_eq!(handle_key_event(key(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(key(KeyCode::Tab)), None);
        assert_eq!(handle_key_event(key(KeyCode::Esc)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(key(KeyCode::Char('q'))));
        assert!(should_quit(key(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(key(KeyCode::Char('c'))));
        assert!(!should_quit(key(KeyCode::Esc)));
    }
}
