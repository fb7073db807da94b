use crate::app::state::is_amount_char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press means to the form, independent of the focused widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    FocusNext,
    FocusPrevious,
    Increment,
    Decrement,
    Type(char),
    Backspace,
    ClearAmount,
    /// Enter: opens the copy menu on a result row, or runs the menu item.
    Activate,
    /// Esc while the copy menu is open.
    Dismiss,
}

pub fn map_key(key: KeyEvent, menu_open: bool) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            KeyCode::Char('u') => Some(Command::ClearAmount),
            _ => None,
        };
    }

    if menu_open {
        return match key.code {
            KeyCode::Enter => Some(Command::Activate),
            KeyCode::Esc | KeyCode::Char('q') => Some(Command::Dismiss),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Some(Command::Quit),
        KeyCode::Tab | KeyCode::Down => Some(Command::FocusNext),
        KeyCode::BackTab | KeyCode::Up => Some(Command::FocusPrevious),
        KeyCode::Right | KeyCode::Char('+') => Some(Command::Increment),
        KeyCode::Left | KeyCode::Char('-') => Some(Command::Decrement),
        KeyCode::Backspace => Some(Command::Backspace),
        KeyCode::Delete => Some(Command::ClearAmount),
        KeyCode::Enter => Some(Command::Activate),
        KeyCode::Char(ch) if is_amount_char(ch) => Some(Command::Type(ch)),
        _ => None,
    }
}
