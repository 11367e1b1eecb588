//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Cancel,
    NextField,
    PrevField,
    Left,
    Right,
    Submit,
    Backspace,
    ToggleInfo,
    Input(char),
    None,
}

/// Map a key event to an action.
///
/// Printable characters are forwarded as [`KeyAction::Input`]; the model
/// decides what they mean for the focused field.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Cancel,
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Tab | KeyCode::Down => KeyAction::NextField,
        KeyCode::BackTab | KeyCode::Up => KeyAction::PrevField,
        KeyCode::Left => KeyAction::Left,
        KeyCode::Right => KeyAction::Right,
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::F(1) | KeyCode::Char('?') => KeyAction::ToggleInfo,
        KeyCode::Char(c) => KeyAction::Input(c),
        _ => KeyAction::None,
    }
}
