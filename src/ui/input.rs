//! Terminal events to screen actions

use super::app::Focus;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// What a single user gesture asks the screen to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Redraw,
    FocusNext,
    FocusPrev,
    /// Enter or Space on the focused element
    Activate,
    ToggleEntry(usize),
    Reshuffle,
    Insert(char),
    Backspace,
    ClearField,
    Click { column: u16, row: u16 },
}

pub fn map_event(event: &Event, focus: Focus) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => map_key(*key, focus),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => Some(Action::Click {
            column: *column,
            row: *row,
        }),
        Event::Resize(..) => Some(Action::Redraw),
        _ => None,
    }
}

fn map_key(key: KeyEvent, focus: Focus) -> Option<Action> {
    let editing = focus.is_text_field();

    // AltGr arrives as Control+Alt on Windows and produces printable characters
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT)
    {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('u') if editing => Some(Action::ClearField),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Tab | KeyCode::Down => Some(Action::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Action::FocusPrev),
        KeyCode::Enter => Some(Action::Activate),
        KeyCode::Backspace if editing => Some(Action::Backspace),
        KeyCode::Char(c) if editing => Some(Action::Insert(c)),
        KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('a') => Some(Action::Reshuffle),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|d| Action::ToggleEntry(d as usize - 1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::JournalField;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    const ROW: Focus = Focus::Entry(0);
    const FIELD: Focus = Focus::Journal(JournalField::Joy);

    #[test]
    fn test_navigation_keys() {
        assert_eq!(map_event(&press(KeyCode::Tab), ROW), Some(Action::FocusNext));
        assert_eq!(map_event(&press(KeyCode::Down), FIELD), Some(Action::FocusNext));
        assert_eq!(map_event(&press(KeyCode::BackTab), ROW), Some(Action::FocusPrev));
        assert_eq!(map_event(&press(KeyCode::Up), FIELD), Some(Action::FocusPrev));
    }

    #[test]
    fn test_space_activates_outside_fields() {
        assert_eq!(map_event(&press(KeyCode::Char(' ')), ROW), Some(Action::Activate));
        assert_eq!(
            map_event(&press(KeyCode::Char(' ')), FIELD),
            Some(Action::Insert(' '))
        );
    }

    #[test]
    fn test_shortcuts_become_text_in_fields() {
        assert_eq!(map_event(&press(KeyCode::Char('q')), ROW), Some(Action::Quit));
        assert_eq!(
            map_event(&press(KeyCode::Char('q')), FIELD),
            Some(Action::Insert('q'))
        );
        assert_eq!(map_event(&press(KeyCode::Char('a')), ROW), Some(Action::Reshuffle));
        assert_eq!(
            map_event(&press(KeyCode::Char('3')), ROW),
            Some(Action::ToggleEntry(2))
        );
        assert_eq!(
            map_event(&press(KeyCode::Char('3')), FIELD),
            Some(Action::Insert('3'))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_event(&press(KeyCode::Esc), FIELD), Some(Action::Quit));
        assert_eq!(map_event(&ctrl('c'), FIELD), Some(Action::Quit));
        assert_eq!(map_event(&ctrl('c'), ROW), Some(Action::Quit));
    }

    #[test]
    fn test_field_editing_keys() {
        assert_eq!(map_event(&press(KeyCode::Backspace), FIELD), Some(Action::Backspace));
        assert_eq!(map_event(&press(KeyCode::Backspace), ROW), None);
        assert_eq!(map_event(&ctrl('u'), FIELD), Some(Action::ClearField));
        assert_eq!(map_event(&ctrl('u'), ROW), None);
    }

    #[test]
    fn test_altgr_characters_reach_fields() {
        let altgr = Event::Key(KeyEvent::new(
            KeyCode::Char('@'),
            KeyModifiers::CONTROL | KeyModifiers::ALT,
        ));
        assert_eq!(map_event(&altgr, FIELD), Some(Action::Insert('@')));
    }

    #[test]
    fn test_key_release_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event(&release, ROW), None);
    }

    #[test]
    fn test_left_click() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            map_event(&click, ROW),
            Some(Action::Click { column: 4, row: 7 })
        );

        let right = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(map_event(&right, ROW), None);
    }

    #[test]
    fn test_resize_redraws() {
        assert_eq!(map_event(&Event::Resize(80, 24), ROW), Some(Action::Redraw));
    }
}
