use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::modes::Mode;

/// Direction for navigation intents.
///
/// Left/right move between sections; up/down move within the mounted list
/// view. The dispatcher emits both uniformly — routing is the root
/// controller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// High-level intents derived from keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Enter COMMAND mode (`:` in NORMAL)
    EnterCommand,
    /// Enter INSERT mode (`i` in NORMAL)
    EnterInsert,
    /// Move between sections or within the mounted list
    Navigate(Direction),
    /// Activate the current selection (Enter in NORMAL)
    Select,
    /// Submit the command buffer (Enter in COMMAND)
    SubmitCommand,
    /// Append a character to the command buffer
    CommandChar(char),
    /// Delete the last character of the command buffer
    CommandBackspace,
    /// Leave the current mode, back to NORMAL
    Escape,
    /// Hard quit (Ctrl+C), bypassing the exit confirmation
    ForceQuit,
    /// No-op
    None,
}

/// Map a key event to an action based on the current mode.
///
/// This is the only place raw keys are interpreted. A key outside the
/// table for the current mode maps to `Action::None`, never an error.
pub fn map_key_event(mode: Mode, event: KeyEvent) -> Action {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl+C quits from any mode
    if ctrl && event.code == KeyCode::Char('c') {
        return Action::ForceQuit;
    }

    // NORMAL-mode bindings are case-insensitive, like the letter keys of a
    // modal editor with caps lock on.
    let code = match event.code {
        KeyCode::Char(c) if mode == Mode::Normal => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };

    match mode {
        Mode::Normal => match code {
            KeyCode::Char(':') => Action::EnterCommand,
            KeyCode::Char('i') => Action::EnterInsert,
            KeyCode::Char('h') | KeyCode::Left => Action::Navigate(Direction::Left),
            KeyCode::Char('l') | KeyCode::Right => Action::Navigate(Direction::Right),
            KeyCode::Char('j') | KeyCode::Down => Action::Navigate(Direction::Down),
            KeyCode::Char('k') | KeyCode::Up => Action::Navigate(Direction::Up),
            KeyCode::Enter => Action::Select,
            _ => Action::None,
        },
        Mode::Command => match code {
            KeyCode::Esc => Action::Escape,
            KeyCode::Enter => Action::SubmitCommand,
            KeyCode::Backspace => Action::CommandBackspace,
            KeyCode::Char(c) if !ctrl => Action::CommandChar(c),
            _ => Action::None,
        },
        // INSERT suspends interception entirely; only Escape is handled
        Mode::Insert => match event.code {
            KeyCode::Esc => Action::Escape,
            _ => Action::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn normal_mode_navigation_keys() {
        assert_eq!(
            map_key_event(Mode::Normal, key(KeyCode::Char('h'))),
            Action::Navigate(Direction::Left)
        );
        assert_eq!(
            map_key_event(Mode::Normal, key(KeyCode::Right)),
            Action::Navigate(Direction::Right)
        );
        assert_eq!(
            map_key_event(Mode::Normal, key(KeyCode::Char('j'))),
            Action::Navigate(Direction::Down)
        );
        assert_eq!(
            map_key_event(Mode::Normal, key(KeyCode::Up)),
            Action::Navigate(Direction::Up)
        );
    }

    #[test]
    fn normal_mode_mode_switches() {
        assert_eq!(
            map_key_event(Mode::Normal, key(KeyCode::Char(':'))),
            Action::EnterCommand
        );
        assert_eq!(
            map_key_event(Mode::Normal, key(KeyCode::Char('i'))),
            Action::EnterInsert
        );
        assert_eq!(map_key_event(Mode::Normal, key(KeyCode::Enter)), Action::Select);
    }

    #[test]
    fn normal_mode_keys_are_case_insensitive() {
        assert_eq!(
            map_key_event(Mode::Normal, key(KeyCode::Char('H'))),
            Action::Navigate(Direction::Left)
        );
        assert_eq!(
            map_key_event(Mode::Normal, key(KeyCode::Char('I'))),
            Action::EnterInsert
        );
    }

    #[test]
    fn normal_mode_unbound_key_is_noop() {
        assert_eq!(map_key_event(Mode::Normal, key(KeyCode::Char('x'))), Action::None);
        assert_eq!(map_key_event(Mode::Normal, key(KeyCode::Tab)), Action::None);
    }

    #[test]
    fn command_mode_edits_buffer() {
        assert_eq!(
            map_key_event(Mode::Command, key(KeyCode::Char('q'))),
            Action::CommandChar('q')
        );
        assert_eq!(
            map_key_event(Mode::Command, key(KeyCode::Backspace)),
            Action::CommandBackspace
        );
        assert_eq!(
            map_key_event(Mode::Command, key(KeyCode::Enter)),
            Action::SubmitCommand
        );
        assert_eq!(map_key_event(Mode::Command, key(KeyCode::Esc)), Action::Escape);
    }

    #[test]
    fn insert_mode_only_escape() {
        assert_eq!(map_key_event(Mode::Insert, key(KeyCode::Char('j'))), Action::None);
        assert_eq!(map_key_event(Mode::Insert, key(KeyCode::Enter)), Action::None);
        assert_eq!(map_key_event(Mode::Insert, key(KeyCode::Esc)), Action::Escape);
    }

    #[test]
    fn ctrl_c_quits_in_every_mode() {
        let ev = KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        };
        for mode in [Mode::Normal, Mode::Command, Mode::Insert] {
            assert_eq!(map_key_event(mode, ev), Action::ForceQuit);
        }
    }
}
